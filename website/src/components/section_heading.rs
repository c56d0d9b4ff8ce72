use leptos::prelude::*;

/// Two-tone section title with a muted subtitle underneath
#[component]
pub fn SectionHeading(
    lead: &'static str,
    highlight: &'static str,
    #[prop(optional)] trail: &'static str,
    subtitle: &'static str,
) -> impl IntoView {
    view! {
        <div class="text-center mb-16">
            <h2 class="text-3xl md:text-5xl font-bold text-slate-900 dark:text-white mb-4">
                {lead}
                <span class="text-transparent bg-clip-text bg-gradient-to-r from-blue-500 to-purple-500">
                    {highlight}
                </span>
                {trail}
            </h2>
            <p class="text-lg text-slate-500 dark:text-slate-400 max-w-2xl mx-auto">{subtitle}</p>
        </div>
    }
}
