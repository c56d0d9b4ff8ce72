use inboxhunter_core::content::{SupportLink, FEATURES, HERO_STATS, SUPPORT_OPTIONS};
use inboxhunter_core::Page;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::app_preview::AppPreview;
use crate::components::download::DownloadSection;
use crate::components::icons::{ChevronRight, Download, ExternalLink, Sparkles};
use crate::components::section_heading::SectionHeading;
use crate::context::SiteContext;
use crate::data::{accent_classes, icon};

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="pt-16">
            <Hero />
            <Features />
            <DownloadSection />
            <Support />
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="pt-20 pb-24 px-6 text-center relative overflow-hidden">
            <div class="absolute top-0 left-1/2 -translate-x-1/2 w-[800px] h-[500px] bg-blue-600/10 blur-[120px] rounded-full pointer-events-none"></div>

            <div class="relative z-10 flex flex-col items-center">
                <div class="inline-flex items-center gap-2 px-4 py-2 rounded-full bg-blue-500/10 border border-blue-500/20 mb-8">
                    <Sparkles class="w-4 h-4 text-blue-500 dark:text-blue-400" />
                    <span class="text-sm text-blue-600 dark:text-blue-300">"Powered by GPT-4 Vision"</span>
                </div>

                <h1 class="text-5xl md:text-7xl font-black text-slate-900 dark:text-white tracking-tight mb-6">
                    "AI-Powered"
                    <br />
                    <span class="text-transparent bg-clip-text bg-gradient-to-r from-blue-400 to-purple-400">
                        "Lead Generation"
                    </span>
                </h1>

                <p class="text-xl text-slate-500 dark:text-slate-400 max-w-2xl mx-auto mb-8 font-light leading-relaxed">
                    "Automatically sign up for competitor email lists using intelligent AI form filling. "
                    "Research competitor strategies effortlessly."
                </p>

                <div class="flex flex-wrap justify-center gap-4 mb-12">
                    <a
                        href="#download"
                        class="px-8 py-3 bg-gradient-to-r from-blue-500 to-purple-600 text-white font-bold rounded-full hover:opacity-90 transition-opacity flex items-center"
                    >
                        <Download class="w-5 h-5 mr-2" />
                        "Download Free"
                    </a>
                    <A
                        href=Page::HowItWorks.path()
                        attr:class="px-8 py-3 bg-slate-100 dark:bg-slate-800 text-slate-900 dark:text-white font-bold rounded-full border border-slate-200 dark:border-slate-700 hover:bg-slate-200 dark:hover:bg-slate-700 transition-colors flex items-center"
                    >
                        "See How It Works"
                        <ChevronRight class="w-4 h-4 ml-1" />
                    </A>
                </div>

                <div class="flex flex-wrap justify-center gap-12">
                    {HERO_STATS.iter().map(|stat| {
                        view! {
                            <div>
                                <div class="text-3xl font-bold text-slate-900 dark:text-white">{stat.value}</div>
                                <div class="text-sm text-slate-500">{stat.label}</div>
                            </div>
                        }
                    }).collect_view()}
                </div>
            </div>

            <AppPreview />
        </section>
    }
}

#[component]
fn Features() -> impl IntoView {
    view! {
        <section id="features" class="px-6 py-24 max-w-6xl mx-auto">
            <SectionHeading
                lead="Powerful "
                highlight="Features"
                subtitle="Everything you need for automated lead generation, built with cutting-edge AI technology."
            />

            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                {FEATURES.iter().map(|feat| {
                    let (tile, icon_class) = accent_classes(feat.accent);
                    let tile_class = format!(
                        "mb-4 w-12 h-12 rounded-lg flex items-center justify-center {tile}"
                    );
                    view! {
                        <div class="bg-slate-50 dark:bg-slate-900/50 border border-slate-200 dark:border-slate-800 p-8 rounded-2xl hover:border-slate-300 dark:hover:border-slate-700 transition-colors">
                            <div class=tile_class>
                                {icon(feat.icon, icon_class)}
                            </div>
                            <h3 class="text-xl font-bold text-slate-900 dark:text-white mb-2">{feat.title}</h3>
                            <p class="text-slate-500 dark:text-slate-400 leading-relaxed">{feat.description}</p>
                        </div>
                    }
                }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn Support() -> impl IntoView {
    let mailto = expect_context::<SiteContext>().config.mailto_link();

    view! {
        <section id="support" class="px-6 py-24 max-w-6xl mx-auto">
            <SectionHeading
                lead="Need "
                highlight="Help?"
                subtitle="We're here to support you. Choose the best option for your needs."
            />

            <div class="grid md:grid-cols-3 gap-8">
                {SUPPORT_OPTIONS.iter().map(|option| {
                    let (href, external) = match option.link {
                        SupportLink::External(url) => (url.to_string(), true),
                        SupportLink::Email => (mailto.clone(), false),
                    };
                    view! {
                        <a
                            href=href
                            target=external.then_some("_blank")
                            rel=external.then_some("noreferrer")
                            class="group bg-slate-50 dark:bg-slate-900/50 border border-slate-200 dark:border-slate-800 p-8 rounded-2xl hover:border-blue-500/40 transition-colors text-center"
                        >
                            <div class="mx-auto mb-4 w-12 h-12 rounded-lg bg-blue-500/10 flex items-center justify-center group-hover:scale-110 transition-transform">
                                {icon(option.icon, "w-6 h-6 text-blue-500 dark:text-blue-400")}
                            </div>
                            <h3 class="text-xl font-bold text-slate-900 dark:text-white mb-2">{option.title}</h3>
                            <p class="text-slate-500 dark:text-slate-400 mb-4">{option.description}</p>
                            <span class="inline-flex items-center gap-1 text-blue-500 text-sm font-medium">
                                {option.link_text}
                                <ExternalLink class="w-3 h-3" />
                            </span>
                        </a>
                    }
                }).collect_view()}
            </div>
        </section>
    }
}
