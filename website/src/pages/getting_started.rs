use inboxhunter_core::content::{guide, GuideBlock};
use inboxhunter_core::GuideTab;
use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::icons::CheckCircle;
use crate::components::section_heading::SectionHeading;

#[component]
pub fn GettingStarted() -> impl IntoView {
    let active = RwSignal::new(GuideTab::default());

    view! {
        <Title text="Getting Started - InboxHunter" />
        <section class="pt-32 pb-24 px-6 max-w-6xl mx-auto">
            <SectionHeading
                lead="Getting "
                highlight="Started"
                subtitle="Follow these guides to set up and run InboxHunter."
            />

            <div class="grid lg:grid-cols-4 gap-8">
                // Tab list
                <nav class="lg:col-span-1 space-y-2">
                    {GuideTab::ALL.into_iter().map(|tab| {
                        let is_active = move || active.get() == tab;
                        view! {
                            <button
                                on:click=move |_| active.set(tab)
                                class=move || {
                                    if is_active() {
                                        "w-full text-left px-4 py-3 rounded-xl transition-all bg-gradient-to-r from-blue-500/20 to-purple-500/20 border border-blue-500/30 text-slate-900 dark:text-white"
                                    } else {
                                        "w-full text-left px-4 py-3 rounded-xl transition-all text-slate-500 dark:text-slate-400 hover:bg-slate-100 dark:hover:bg-slate-900"
                                    }
                                }
                            >
                                <div class="flex items-center gap-3">
                                    <div class=move || {
                                        if is_active() {
                                            "w-8 h-8 rounded-lg flex items-center justify-center text-sm font-medium bg-blue-500 text-white"
                                        } else {
                                            "w-8 h-8 rounded-lg flex items-center justify-center text-sm font-medium bg-slate-100 dark:bg-slate-800"
                                        }
                                    }>
                                        {tab.position() + 1}
                                    </div>
                                    <span class="font-medium">{tab.title()}</span>
                                </div>
                            </button>
                        }
                    }).collect_view()}
                </nav>

                // Content
                <div class="lg:col-span-3 bg-slate-50 dark:bg-slate-900/50 border border-slate-200 dark:border-slate-800 rounded-2xl p-8">
                    {move || {
                        let tab = active.get();
                        view! {
                            <h3 class="text-2xl font-bold text-slate-900 dark:text-white mb-6">{tab.title()}</h3>
                            <div class="space-y-4">
                                {guide(tab).iter().map(|block| render_block(*block)).collect_view()}
                            </div>
                        }
                    }}

                    // Navigation
                    <div class="flex justify-between mt-8 pt-6 border-t border-slate-200 dark:border-slate-800">
                        <button
                            on:click=move |_| active.update(|t| *t = t.previous())
                            disabled=move || active.get().is_first()
                            class=move || {
                                if active.get().is_first() {
                                    "px-4 py-2 rounded-lg font-medium text-slate-400 cursor-not-allowed"
                                } else {
                                    "px-4 py-2 rounded-lg font-medium text-blue-500 hover:bg-blue-500/10 transition-colors"
                                }
                            }
                        >
                            "\u{2190} Previous"
                        </button>
                        <button
                            on:click=move |_| active.update(|t| *t = t.next())
                            disabled=move || active.get().is_last()
                            class=move || {
                                if active.get().is_last() {
                                    "px-4 py-2 rounded-lg font-medium text-slate-400 cursor-not-allowed"
                                } else {
                                    "px-4 py-2 rounded-lg font-medium text-blue-500 hover:bg-blue-500/10 transition-colors"
                                }
                            }
                        >
                            "Next \u{2192}"
                        </button>
                    </div>
                </div>
            </div>
        </section>
    }
}

fn render_block(block: GuideBlock) -> AnyView {
    match block {
        GuideBlock::Text(text) => {
            view! { <p class="text-slate-600 dark:text-slate-300 leading-relaxed">{text}</p> }.into_any()
        }
        GuideBlock::Heading(text) => {
            view! { <h4 class="text-lg font-semibold text-slate-900 dark:text-white pt-2">{text}</h4> }
                .into_any()
        }
        GuideBlock::Code { label, value } => view! {
            <div class="rounded-lg bg-slate-900 border border-slate-800 p-4">
                {label.map(|l| view! { <div class="text-xs text-slate-400 mb-2">{l}</div> })}
                <code class="text-sm font-mono text-emerald-400">{value}</code>
            </div>
        }
        .into_any(),
        GuideBlock::List(items) => view! {
            <ul class="space-y-2">
                {items.iter().map(|item| view! {
                    <li class="flex items-start gap-2 text-slate-600 dark:text-slate-300">
                        <CheckCircle class="w-5 h-5 text-emerald-500 shrink-0 mt-0.5" />
                        {*item}
                    </li>
                }).collect_view()}
            </ul>
        }
        .into_any(),
    }
}
