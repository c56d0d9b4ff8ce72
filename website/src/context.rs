//! Site-wide state shared through Leptos context

use inboxhunter_core::config::{
    ENV_DETECTION, ENV_DOWNLOAD_BASE_URL, ENV_SUPPORT_EMAIL, ENV_VERSION,
};
use inboxhunter_core::{Catalog, Navigator, PlatformClass, SiteConfig, Theme, ThemeStore};
use leptos::prelude::*;

use crate::browser::{self, BrowserStorage};

const SITE_TOML: &str = include_str!("../site.toml");

/// Everything a component may need besides its own local UI state.
///
/// Built once in [`crate::App`]; read with `expect_context::<SiteContext>()`.
#[derive(Clone)]
pub struct SiteContext {
    pub config: SiteConfig,
    pub catalog: Catalog,
    /// Detected once at mount and never re-evaluated
    pub platform: PlatformClass,
    pub theme: RwSignal<Theme>,
    pub nav: RwSignal<Navigator>,
    theme_store: StoredValue<ThemeStore<BrowserStorage>>,
}

impl SiteContext {
    pub fn init() -> Self {
        let config = SiteConfig::resolve(Some(SITE_TOML), build_env);
        let catalog = Catalog::for_profile(config.detection, &config.version);
        let platform = browser::detect_platform(config.detection);

        let store = ThemeStore::load(BrowserStorage::open());
        let theme = RwSignal::new(store.theme());

        Self {
            config,
            catalog,
            platform,
            theme,
            nav: RwSignal::new(Navigator::new()),
            theme_store: StoredValue::new(store),
        }
    }

    /// Flip the theme. The new value is persisted before the signal fires.
    pub fn toggle_theme(&self) {
        let theme = self.theme;
        self.theme_store.update_value(|store| {
            let next = store.toggle();
            theme.set(next);
        });
    }
}

/// Overrides baked in with `option_env!` when the site is built
fn build_env(key: &str) -> Option<String> {
    let value = match key {
        ENV_DOWNLOAD_BASE_URL => option_env!("INBOXHUNTER_DOWNLOAD_BASE_URL"),
        ENV_VERSION => option_env!("INBOXHUNTER_VERSION"),
        ENV_SUPPORT_EMAIL => option_env!("INBOXHUNTER_SUPPORT_EMAIL"),
        ENV_DETECTION => option_env!("INBOXHUNTER_DETECTION"),
        _ => None,
    };
    value.map(str::to_string)
}
