use inboxhunter_core::content::PROJECT_URL;
use leptos::prelude::*;

use super::icons::Mail;
use crate::context::SiteContext;

#[component]
pub fn Footer() -> impl IntoView {
    let mailto = expect_context::<SiteContext>().config.mailto_link();

    view! {
        <footer class="border-t border-slate-200 dark:border-slate-900 bg-white dark:bg-slate-950 py-12 mt-auto">
            <div class="max-w-7xl mx-auto px-6 flex flex-col md:flex-row justify-between items-center gap-6 text-slate-500 text-sm">
                <div class="flex items-center gap-3">
                    <div class="w-8 h-8 rounded-lg bg-gradient-to-br from-blue-500 to-purple-600 flex items-center justify-center">
                        <Mail class="w-4 h-4 text-white" />
                    </div>
                    <div>
                        <div class="font-bold text-slate-900 dark:text-white">"InboxHunter"</div>
                        <div class="text-xs">"AI Lead Generation"</div>
                    </div>
                </div>
                <div class="flex space-x-6">
                    <a href="/#features" class="hover:text-slate-900 dark:hover:text-white transition-colors">"Features"</a>
                    <a href="/#download" class="hover:text-slate-900 dark:hover:text-white transition-colors">"Download"</a>
                    <a href="/faq" class="hover:text-slate-900 dark:hover:text-white transition-colors">"FAQ"</a>
                    <a href=PROJECT_URL target="_blank" rel="noreferrer" class="hover:text-slate-900 dark:hover:text-white transition-colors">"GitHub"</a>
                    <a href=mailto class="hover:text-slate-900 dark:hover:text-white transition-colors">"Contact"</a>
                </div>
                <p>"\u{00A9} 2024 InboxHunter. MIT License."</p>
            </div>
        </footer>
    }
}
