//! Persisted dark/light theme preference
//!
//! The preference lives under a single key in the browser's local storage.
//! Storage is optional: when it is missing or failing the store keeps
//! working in memory for the rest of the page view.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;

use crate::prelude::*;

/// Local storage key holding the theme preference
pub const THEME_STORAGE_KEY: &str = "inboxhunter-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Parse a persisted value. Anything but the two literals is rejected.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key-value persistence used for the theme flag
#[cfg_attr(test, mockall::automock)]
pub trait ThemeStorage {
    fn read(&self, key: &str) -> Result<Option<String>>;
    fn write(&self, key: &str, value: &str) -> Result<()>;
}

/// In-memory storage for tests and for hosts without local storage
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::default();
        storage
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        storage
    }
}

impl ThemeStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Theme preference with write-through persistence
#[derive(Debug)]
pub struct ThemeStore<S> {
    storage: Option<S>,
    theme: Theme,
}

impl<S: ThemeStorage> ThemeStore<S> {
    /// Read the persisted preference, defaulting to dark when the value is
    /// absent, unparseable or the storage cannot be read.
    pub fn load(storage: Option<S>) -> Self {
        let theme = match &storage {
            Some(s) => match s.read(THEME_STORAGE_KEY) {
                Ok(Some(raw)) => Theme::parse(&raw).unwrap_or_else(|| {
                    debug!("ignoring unrecognised theme value '{}'", raw);
                    Theme::default()
                }),
                Ok(None) => Theme::default(),
                Err(e) => {
                    warn!("theme preference unreadable, using default: {}", e);
                    Theme::default()
                }
            },
            None => {
                debug!("no persistent storage, theme is session-only");
                Theme::default()
            }
        };

        Self { storage, theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flip the theme and persist it before returning the new value.
    /// A failed write keeps the in-memory value.
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        if let Some(storage) = &self.storage {
            if let Err(e) = storage.write(THEME_STORAGE_KEY, self.theme.as_str()) {
                warn!("theme will not survive a reload: {}", e);
            }
        }
        self.theme
    }

    pub fn storage(&self) -> Option<&S> {
        self.storage.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::levels_logged;
    use mockall::predicate::eq;
    use tracing::Level;

    fn stored(store: &ThemeStore<MemoryStorage>) -> Option<String> {
        store.storage().unwrap().read(THEME_STORAGE_KEY).unwrap()
    }

    #[test]
    fn test_defaults_to_dark_without_storage() {
        let store = ThemeStore::<MemoryStorage>::load(None);
        assert_eq!(store.theme(), Theme::Dark);
    }

    #[test]
    fn test_defaults_to_dark_when_absent_or_corrupt() {
        let store = ThemeStore::load(Some(MemoryStorage::new()));
        assert_eq!(store.theme(), Theme::Dark);

        let store = ThemeStore::load(Some(MemoryStorage::with_entry(THEME_STORAGE_KEY, "sepia")));
        assert_eq!(store.theme(), Theme::Dark);
    }

    #[test]
    fn test_loads_persisted_light() {
        let store = ThemeStore::load(Some(MemoryStorage::with_entry(THEME_STORAGE_KEY, "light")));
        assert_eq!(store.theme(), Theme::Light);
    }

    #[test]
    fn test_toggle_persists_immediately() {
        let mut store = ThemeStore::load(Some(MemoryStorage::new()));
        assert_eq!(store.toggle(), Theme::Light);
        assert_eq!(stored(&store).as_deref(), Some("light"));
    }

    #[test]
    fn test_double_toggle_restores_value_and_storage() {
        let mut store = ThemeStore::load(Some(MemoryStorage::with_entry(THEME_STORAGE_KEY, "light")));
        store.toggle();
        store.toggle();
        assert_eq!(store.theme(), Theme::Light);
        assert_eq!(stored(&store).as_deref(), Some("light"));
    }

    #[test]
    fn test_toggle_without_storage_is_session_only() {
        let mut store = ThemeStore::<MemoryStorage>::load(None);
        assert_eq!(store.toggle(), Theme::Light);
        assert_eq!(store.toggle(), Theme::Dark);
    }

    #[test]
    fn test_unreadable_storage_defaults_to_dark() {
        let mut mock = MockThemeStorage::new();
        mock.expect_read()
            .with(eq(THEME_STORAGE_KEY))
            .times(1)
            .returning(|_| Err(Error::storage("SecurityError: access denied")));

        let store = ThemeStore::load(Some(mock));
        assert_eq!(store.theme(), Theme::Dark);
    }

    #[test]
    fn test_failed_write_keeps_in_memory_value() {
        let mut mock = MockThemeStorage::new();
        mock.expect_read().returning(|_| Ok(Some("dark".to_string())));
        mock.expect_write()
            .with(eq(THEME_STORAGE_KEY), eq("light"))
            .times(1)
            .returning(|_, _| Err(Error::storage("QuotaExceededError")));

        let mut store = ThemeStore::load(Some(mock));
        assert_eq!(store.toggle(), Theme::Light);
        assert_eq!(store.theme(), Theme::Light);
    }

    #[test]
    fn test_failed_write_logs_one_warning() {
        let mut mock = MockThemeStorage::new();
        mock.expect_read().returning(|_| Ok(None));
        mock.expect_write()
            .returning(|_, _| Err(Error::storage("SecurityError: access denied")));

        let mut store = ThemeStore::load(Some(mock));
        let (theme, levels) = levels_logged(|| store.toggle());
        assert_eq!(theme, Theme::Light);
        assert_eq!(levels, vec![Level::WARN]);
    }

    #[test]
    fn test_theme_literals() {
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse("light"), Some(Theme::Light));
        assert_eq!(Theme::parse("Dark"), None);
        assert_eq!(Theme::Light.to_string(), "light");
        assert!(Theme::default().is_dark());
    }
}
