use inboxhunter_core::Page;
use leptos::prelude::*;
use leptos_router::components::A;

use super::icons::{Mail, Menu, Moon, Sun, X};
use crate::context::SiteContext;

const LINK_ACTIVE: &str = "text-sm font-medium transition-colors text-slate-900 dark:text-white";
const LINK_IDLE: &str = "text-sm font-medium transition-colors text-slate-500 dark:text-slate-400 hover:text-slate-900 dark:hover:text-white";

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = expect_context::<SiteContext>();
    let nav = ctx.nav;
    let is_active = move |page: Page| nav.with(|n| n.page() == page);

    view! {
        <header class="fixed top-0 left-0 right-0 z-50 bg-white/80 dark:bg-slate-950/80 backdrop-blur-md border-b border-slate-200 dark:border-slate-800">
            <div class="max-w-7xl mx-auto px-6 h-16 flex items-center justify-between">
                <A href="/" attr:class="flex items-center gap-3 group">
                    <div class="w-10 h-10 rounded-xl bg-gradient-to-br from-blue-500 to-purple-600 flex items-center justify-center group-hover:scale-110 transition-transform">
                        <Mail class="w-5 h-5 text-white" />
                    </div>
                    <span class="font-bold text-slate-900 dark:text-white text-xl tracking-tight">
                        "InboxHunter"
                    </span>
                </A>

                // Desktop Nav
                <nav class="hidden md:flex items-center space-x-8">
                    {Page::ALL.into_iter().map(|page| {
                        view! {
                            <A
                                href=page.path()
                                attr:class=move || if is_active(page) { LINK_ACTIVE } else { LINK_IDLE }
                            >
                                {page.label()}
                            </A>
                        }
                    }).collect_view()}
                    <ThemeToggle />
                    <a
                        href="/#download"
                        class="px-4 py-2 rounded-lg bg-gradient-to-r from-blue-500 to-purple-600 text-white text-sm font-medium hover:opacity-90 transition-opacity"
                    >
                        "Download Now"
                    </a>
                </nav>

                // Mobile Menu Button
                <div class="md:hidden flex items-center gap-2">
                    <ThemeToggle />
                    <button
                        on:click=move |_| nav.update(|n| n.toggle_menu())
                        class="p-2 text-slate-500 dark:text-slate-400"
                        aria-label="Toggle menu"
                    >
                        {move || {
                            if nav.with(|n| n.is_menu_open()) {
                                view! { <X class="w-6 h-6" /> }.into_any()
                            } else {
                                view! { <Menu class="w-6 h-6" /> }.into_any()
                            }
                        }}
                    </button>
                </div>
            </div>

            // Mobile Nav
            <div class=move || {
                if nav.with(|n| n.is_menu_open()) {
                    "md:hidden px-6 pb-4 border-t border-slate-200 dark:border-slate-800 bg-white dark:bg-slate-950"
                } else {
                    "hidden"
                }
            }>
                <div class="flex flex-col gap-4 pt-4">
                    {Page::ALL.into_iter().map(|page| {
                        view! {
                            <A
                                href=page.path()
                                attr:class=move || if is_active(page) { LINK_ACTIVE } else { LINK_IDLE }
                                on:click=move |_| nav.update(|n| n.close_menu())
                            >
                                {page.label()}
                            </A>
                        }
                    }).collect_view()}
                    <a
                        href="/#download"
                        on:click=move |_| nav.update(|n| n.close_menu())
                        class="px-4 py-2 rounded-lg bg-gradient-to-r from-blue-500 to-purple-600 text-white text-sm font-medium text-center"
                    >
                        "Download Now"
                    </a>
                </div>
            </div>
        </header>
    }
}

#[component]
fn ThemeToggle() -> impl IntoView {
    let ctx = expect_context::<SiteContext>();
    let theme = ctx.theme;

    view! {
        <button
            on:click=move |_| ctx.toggle_theme()
            class="p-2 rounded-lg text-slate-500 dark:text-slate-400 hover:bg-slate-100 dark:hover:bg-slate-800 transition-colors"
            aria-label="Toggle theme"
        >
            {move || {
                if theme.get().is_dark() {
                    view! { <Sun class="w-5 h-5" /> }.into_any()
                } else {
                    view! { <Moon class="w-5 h-5" /> }.into_any()
                }
            }}
        </button>
    }
}
