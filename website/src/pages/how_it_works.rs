use inboxhunter_core::content::STEPS;
use inboxhunter_core::Page;
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::components::icons::ChevronRight;
use crate::components::section_heading::SectionHeading;
use crate::data::icon;

#[component]
pub fn HowItWorks() -> impl IntoView {
    let last = STEPS.len() - 1;

    view! {
        <Title text="How It Works - InboxHunter" />
        <section class="pt-32 pb-24 px-6 max-w-6xl mx-auto">
            <SectionHeading
                lead="How It "
                highlight="Works"
                subtitle="Get started in minutes with our simple 4-step process."
            />

            <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-8">
                {STEPS.iter().enumerate().map(|(i, step)| {
                    view! {
                        <div class="relative text-center">
                            // Connector Line
                            {(i < last).then(|| view! {
                                <div class="hidden lg:block absolute top-8 left-[60%] w-[80%] h-px bg-gradient-to-r from-blue-500/50 to-transparent"></div>
                            })}
                            <div class="mx-auto mb-6 w-16 h-16 rounded-2xl bg-gradient-to-br from-blue-500 to-purple-600 flex items-center justify-center">
                                {icon(step.icon, "w-7 h-7 text-white")}
                            </div>
                            <div class="text-sm font-mono text-blue-500 mb-2">"Step "{step.number}</div>
                            <h3 class="text-xl font-bold text-slate-900 dark:text-white mb-2">{step.title}</h3>
                            <p class="text-slate-500 dark:text-slate-400 leading-relaxed">{step.description}</p>
                        </div>
                    }
                }).collect_view()}
            </div>

            <div class="mt-16 flex justify-center">
                <A
                    href=Page::GettingStarted.path()
                    attr:class="px-8 py-3 bg-gradient-to-r from-blue-500 to-purple-600 text-white font-bold rounded-full hover:opacity-90 transition-opacity flex items-center"
                >
                    "Read the setup guide"
                    <ChevronRight class="w-4 h-4 ml-1" />
                </A>
            </div>
        </section>
    }
}
