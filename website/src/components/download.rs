use inboxhunter_core::content::PROJECT_URL;
use inboxhunter_core::{Disclosure, DownloadArtifact};
use leptos::prelude::*;

use super::badge::{Badge, BadgeColor};
use super::code_block::CodeBlock;
use super::icons::{ChevronDown, Download, ExternalLink};
use super::section_heading::SectionHeading;
use crate::context::SiteContext;
use crate::data::platform_icon;

#[component]
pub fn DownloadSection() -> impl IntoView {
    let ctx = expect_context::<SiteContext>();
    let rec = ctx.catalog.recommend(ctx.platform);
    log::info!(
        "recommending {} for {} (matched: {})",
        rec.recommended.file_name,
        ctx.platform,
        rec.matched
    );

    let matched = rec.matched;
    let recommended = rec.recommended.clone();
    let recommended_href = ctx.config.download_url(&recommended);
    let others: Vec<(DownloadArtifact, String)> = rec
        .others
        .into_iter()
        .map(|a| (a.clone(), ctx.config.download_url(a)))
        .collect();

    let panel = RwSignal::new(Disclosure::default());
    let version = format!("Version {}", ctx.config.version);

    view! {
        <section id="download" class="px-6 py-24 relative">
            <div class="absolute inset-0 bg-gradient-to-b from-transparent via-blue-500/5 to-transparent pointer-events-none"></div>
            <div class="max-w-3xl mx-auto relative">
                <SectionHeading
                    lead=""
                    highlight="Download"
                    trail=" InboxHunter"
                    subtitle="Free and open source. Pick up the build for your system below."
                />

                <div class="bg-slate-50 dark:bg-slate-900/50 border border-slate-200 dark:border-slate-800 p-8 rounded-2xl">
                    <div class="flex flex-wrap items-center justify-between gap-4 mb-6">
                        <div class="flex items-center gap-4">
                            <div class="w-14 h-14 rounded-xl bg-gradient-to-br from-blue-500/20 to-purple-500/20 flex items-center justify-center">
                                {platform_icon(recommended.id, "w-7 h-7 text-blue-500 dark:text-blue-400")}
                            </div>
                            <div>
                                <h3 class="text-2xl font-bold text-slate-900 dark:text-white">{recommended.name.clone()}</h3>
                                <p class="text-slate-500 dark:text-slate-400">{recommended.subtitle.clone()}</p>
                            </div>
                        </div>
                        {if matched {
                            view! { <Badge color=BadgeColor::Green>"Recommended for your system"</Badge> }.into_any()
                        } else {
                            view! { <Badge color=BadgeColor::Amber>"We couldn't detect your system"</Badge> }.into_any()
                        }}
                    </div>

                    <a
                        href=recommended_href
                        class="w-full py-3 px-6 rounded-xl font-medium bg-gradient-to-r from-blue-500 to-purple-600 text-white hover:opacity-90 transition-opacity flex items-center justify-center gap-2"
                    >
                        <Download class="w-5 h-5" />
                        "Download"
                    </a>
                    <p class="mt-3 text-center text-xs font-mono text-slate-500">
                        {recommended.file_name.clone()}" \u{2022} "{version}
                    </p>

                    <PostInstallNote artifact=recommended />
                </div>

                // Other Downloads
                <div class="mt-6">
                    <button
                        on:click=move |_| panel.update(|p| p.toggle())
                        class="mx-auto flex items-center gap-2 text-sm text-slate-500 dark:text-slate-400 hover:text-slate-900 dark:hover:text-white transition-colors"
                    >
                        "Other downloads"
                        <span class=move || {
                            if panel.get().is_shown() {
                                "inline-flex rotate-180 transition-transform"
                            } else {
                                "inline-flex transition-transform"
                            }
                        }>
                            <ChevronDown class="w-4 h-4" />
                        </span>
                    </button>

                    <div class=move || {
                        if panel.get().is_shown() { "mt-4 space-y-3" } else { "hidden" }
                    }>
                        {others.into_iter().map(|(artifact, href)| {
                            view! { <OtherDownload artifact=artifact href=href /> }
                        }).collect_view()}
                    </div>
                </div>

                <div class="mt-10 text-center text-sm text-slate-500 space-y-2">
                    <p>"Requires 4GB RAM minimum and an OpenAI API key."</p>
                    <p>
                        <a href=PROJECT_URL target="_blank" rel="noreferrer" class="inline-flex items-center gap-1 text-blue-500 hover:text-blue-400">
                            "View on GitHub " <ExternalLink class="w-3 h-3" />
                        </a>
                    </p>
                </div>
            </div>
        </section>
    }
}

#[component]
fn OtherDownload(artifact: DownloadArtifact, href: String) -> impl IntoView {
    view! {
        <a
            href=href
            class="flex items-center justify-between p-4 rounded-xl border border-slate-200 dark:border-slate-800 hover:border-blue-500/40 bg-white dark:bg-slate-900/30 transition-colors"
        >
            <div class="flex items-center gap-3">
                {platform_icon(artifact.id, "w-5 h-5 text-slate-500 dark:text-slate-400")}
                <div>
                    <div class="font-medium text-slate-900 dark:text-white">{artifact.name}</div>
                    <div class="text-xs text-slate-500">{artifact.subtitle}</div>
                </div>
            </div>
            <span class="text-xs font-mono text-slate-500 hidden sm:block">{artifact.file_name}</span>
        </a>
    }
}

#[component]
fn PostInstallNote(artifact: DownloadArtifact) -> impl IntoView {
    let post = artifact.post_install;

    view! {
        <div class="mt-6 pt-6 border-t border-slate-200 dark:border-slate-800">
            <h4 class="text-sm font-semibold text-slate-900 dark:text-white mb-2">"After downloading"</h4>
            <p class="text-sm text-slate-500 dark:text-slate-400">{post.description}</p>
            {post.command.map(|command| view! { <CodeBlock code=command /> })}
        </div>
    }
}
