pub mod browser;
pub mod components;
pub mod context;
pub mod data;
pub mod pages;

use components::footer::Footer;
use components::navbar::Navbar;
use context::SiteContext;
use inboxhunter_core::{Page, ScrollTarget};
use leptos::leptos_dom::helpers::request_animation_frame;
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_location;
use leptos_router::path;
use pages::faq::Faq;
use pages::getting_started::GettingStarted;
use pages::home::Home;
use pages::how_it_works::HowItWorks;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let ctx = SiteContext::init();
    let theme = ctx.theme;
    provide_context(ctx);

    view! {
        <Title text="InboxHunter - AI-Powered Lead Generation" />
        <Router>
            <NavigationSync />
            <div class=move || if theme.get().is_dark() { "dark" } else { "" }>
                <div class="min-h-screen bg-white text-slate-800 dark:bg-slate-950 dark:text-slate-200 selection:bg-blue-500/30 font-sans">
                    <Navbar />
                    <Routes fallback=|| "Page not found.">
                        <Route path=path!("/") view=Home />
                        <Route path=path!("/how-it-works") view=HowItWorks />
                        <Route path=path!("/getting-started") view=GettingStarted />
                        <Route path=path!("/faq") view=Faq />
                    </Routes>
                    <Footer />
                </div>
            </div>
        </Router>
    }
}

/// Mirrors the router location into the shared [`Navigator`](inboxhunter_core::Navigator)
/// and moves the viewport on every page switch: to the top for a bare path,
/// to the named section for links like `/#download`.
#[component]
fn NavigationSync() -> impl IntoView {
    let location = use_location();
    let nav = expect_context::<SiteContext>().nav;

    Effect::new(move || {
        let pathname = location.pathname.get();
        let hash = location.hash.get();
        let Some(page) = Page::from_path(&pathname) else {
            log::debug!("no page for path {pathname}");
            return;
        };
        if let Some(target) = nav.try_update(|n| n.select(page, &hash)) {
            scroll_to(target);
        }
    });

    ()
}

fn scroll_to(target: ScrollTarget) {
    let Some(window) = web_sys::window() else {
        return;
    };
    match target {
        ScrollTarget::Top => window.scroll_to_with_x_and_y(0.0, 0.0),
        // Deferred one frame so the section of a freshly mounted route exists
        ScrollTarget::Anchor(id) => request_animation_frame(move || {
            let element = window
                .document()
                .and_then(|document| document.get_element_by_id(&id));
            match element {
                Some(element) => element.scroll_into_view(),
                None => log::debug!("no element with id '{id}' to scroll to"),
            }
        }),
    }
}
