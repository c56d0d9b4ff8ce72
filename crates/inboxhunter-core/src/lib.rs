//! # inboxhunter-core - Website Domain Logic
//!
//! Foundation crate for the InboxHunter website. Everything here is pure and
//! browser-agnostic so it can be unit-tested natively; the `website` crate
//! only wires these pieces to `web-sys` and Leptos signals.
//!
//! ## Public API
//!
//! ### Platform Detection (`platform`)
//! - [`PlatformClass`] - Coarse OS/architecture of the visitor
//! - [`DetectionProfile`] - Which platform classes a site revision distinguishes
//! - [`detect_os()`] - Classify user-agent and platform strings
//!
//! ### Downloads (`catalog`)
//! - [`Catalog`] - Non-empty ordered list of [`DownloadArtifact`]s
//! - [`Recommendation`] - Recommended artifact plus the remaining entries
//!
//! ### Configuration (`config`)
//! - [`SiteConfig`] - Download base URL, release version and support address
//!
//! ### Theme (`theme`)
//! - [`Theme`], [`ThemeStore`], [`ThemeStorage`] - Persisted dark/light flag
//!
//! ### UI State (`shell`)
//! - [`Navigator`], [`Accordion`], [`GuideTab`], [`Disclosure`]
//!
//! ### Content (`content`)
//! - Static tables for features, steps, FAQ entries and guides
//!
//! ## Prelude
//!
//! ```rust
//! use inboxhunter_core::prelude::*;
//! ```

pub mod catalog;
pub mod config;
pub mod content;
pub mod error;
pub mod platform;
pub mod shell;
pub mod theme;

#[cfg(test)]
pub(crate) mod test_utils;

/// Prelude for common imports used throughout the website crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, trace, warn};
}

pub use catalog::{ArtifactTemplate, Catalog, DownloadArtifact, PostInstall, Recommendation};
pub use config::SiteConfig;
pub use error::{Error, Result};
pub use platform::{detect_os, DetectionProfile, EnvironmentSignals, PlatformClass};
pub use shell::{Accordion, Disclosure, GuideTab, Navigator, ScrollTarget, Page};
pub use theme::{MemoryStorage, Theme, ThemeStorage, ThemeStore, THEME_STORAGE_KEY};
