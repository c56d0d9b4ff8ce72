use inboxhunter_core::content::IconKind;
use inboxhunter_core::PlatformClass;
use leptos::prelude::*;

use crate::components::icons::{
    Apple, BarChart, Bot, Cpu, Database, Download, Eye, Github, Globe, Mail, MessageCircle,
    Monitor, Play, Settings, Shield, Target, Terminal,
};

pub fn icon(kind: IconKind, class: &'static str) -> AnyView {
    match kind {
        IconKind::Bot => view! { <Bot class=class /> }.into_any(),
        IconKind::Eye => view! { <Eye class=class /> }.into_any(),
        IconKind::Shield => view! { <Shield class=class /> }.into_any(),
        IconKind::Globe => view! { <Globe class=class /> }.into_any(),
        IconKind::Database => view! { <Database class=class /> }.into_any(),
        IconKind::Cpu => view! { <Cpu class=class /> }.into_any(),
        IconKind::Settings => view! { <Settings class=class /> }.into_any(),
        IconKind::Target => view! { <Target class=class /> }.into_any(),
        IconKind::Play => view! { <Play class=class /> }.into_any(),
        IconKind::BarChart => view! { <BarChart class=class /> }.into_any(),
        IconKind::Github => view! { <Github class=class /> }.into_any(),
        IconKind::MessageCircle => view! { <MessageCircle class=class /> }.into_any(),
        IconKind::Mail => view! { <Mail class=class /> }.into_any(),
    }
}

pub fn platform_icon(platform: PlatformClass, class: &'static str) -> AnyView {
    match platform {
        PlatformClass::MacArm | PlatformClass::MacIntel => view! { <Apple class=class /> }.into_any(),
        PlatformClass::Windows => view! { <Monitor class=class /> }.into_any(),
        PlatformClass::Linux => view! { <Terminal class=class /> }.into_any(),
        PlatformClass::Unknown => view! { <Download class=class /> }.into_any(),
    }
}

/// Tile background and icon classes for a feature accent colour.
/// Spelled out in full so Tailwind's scanner picks them up.
pub fn accent_classes(accent: &str) -> (&'static str, &'static str) {
    match accent {
        "purple" => ("bg-purple-500/20", "w-6 h-6 text-purple-500 dark:text-purple-400"),
        "emerald" => ("bg-emerald-500/20", "w-6 h-6 text-emerald-500 dark:text-emerald-400"),
        "pink" => ("bg-pink-500/20", "w-6 h-6 text-pink-500 dark:text-pink-400"),
        "amber" => ("bg-amber-500/20", "w-6 h-6 text-amber-500 dark:text-amber-400"),
        "cyan" => ("bg-cyan-500/20", "w-6 h-6 text-cyan-500 dark:text-cyan-400"),
        _ => ("bg-blue-500/20", "w-6 h-6 text-blue-500 dark:text-blue-400"),
    }
}
