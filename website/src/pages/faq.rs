use inboxhunter_core::content::FAQS;
use inboxhunter_core::Accordion;
use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::icons::ChevronDown;
use crate::components::section_heading::SectionHeading;
use crate::context::SiteContext;

#[component]
pub fn Faq() -> impl IntoView {
    let accordion = RwSignal::new(Accordion::new(FAQS.len()));
    let mailto = expect_context::<SiteContext>().config.mailto_link();

    view! {
        <Title text="FAQ - InboxHunter" />
        <section class="pt-32 pb-24 px-6 max-w-3xl mx-auto">
            <SectionHeading
                lead="Frequently Asked "
                highlight="Questions"
                subtitle="Got questions? We've got answers."
            />

            <div class="space-y-4">
                {FAQS.iter().enumerate().map(|(i, faq)| {
                    let is_open = move || accordion.with(|a| a.is_open(i));
                    view! {
                        <div class="rounded-xl border border-slate-200 dark:border-slate-800 bg-slate-50 dark:bg-slate-900/50 overflow-hidden">
                            <button
                                on:click=move |_| accordion.update(|a| a.toggle(i))
                                class="w-full flex items-center justify-between p-6 text-left"
                                aria-expanded=move || is_open().to_string()
                            >
                                <span class="font-medium text-slate-900 dark:text-white pr-4">{faq.question}</span>
                                <span class=move || {
                                    if is_open() {
                                        "inline-flex shrink-0 text-slate-500 rotate-180 transition-transform"
                                    } else {
                                        "inline-flex shrink-0 text-slate-500 transition-transform"
                                    }
                                }>
                                    <ChevronDown class="w-5 h-5" />
                                </span>
                            </button>
                            <div class=move || if is_open() { "px-6 pb-6 text-slate-500 dark:text-slate-400 leading-relaxed" } else { "hidden" }>
                                {faq.answer}
                            </div>
                        </div>
                    }
                }).collect_view()}
            </div>

            <p class="mt-12 text-center text-slate-500">
                "Still stuck? "
                <a href=mailto class="text-blue-500 hover:text-blue-400">"Email the maintainers"</a>
            </p>
        </section>
    }
}
