use leptos::prelude::*;

#[derive(Clone, Copy, Default)]
pub enum BadgeColor {
    #[default]
    Blue,
    Green,
    Amber,
}

impl BadgeColor {
    fn class(self) -> &'static str {
        match self {
            BadgeColor::Blue => "px-2 py-0.5 text-xs font-medium rounded-full border bg-blue-500/10 text-blue-500 dark:text-blue-300 border-blue-500/30",
            BadgeColor::Green => "px-2 py-0.5 text-xs font-medium rounded-full border bg-emerald-500/10 text-emerald-600 dark:text-emerald-300 border-emerald-500/30",
            BadgeColor::Amber => "px-2 py-0.5 text-xs font-medium rounded-full border bg-amber-500/10 text-amber-600 dark:text-amber-300 border-amber-500/30",
        }
    }
}

#[component]
pub fn Badge(
    children: Children,
    #[prop(optional)] color: BadgeColor,
) -> impl IntoView {
    view! {
        <span class=color.class()>
            {children()}
        </span>
    }
}
