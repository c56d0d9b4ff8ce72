//! Site configuration
//!
//! Values are layered, lowest priority first:
//! 1. Compiled-in defaults
//! 2. `site.toml` bundled with the website (every key optional)
//! 3. Build-time environment overrides (`INBOXHUNTER_*`)
//!
//! Loading never fails. A broken layer is logged and skipped.

use serde::{Deserialize, Serialize};

use crate::catalog::DownloadArtifact;
use crate::platform::DetectionProfile;
use crate::prelude::*;

pub const DEFAULT_DOWNLOAD_BASE_URL: &str =
    "https://github.com/inboxhunter/inboxhunter/releases/latest/download";
pub const DEFAULT_VERSION: &str = "1.0.0";
pub const DEFAULT_SUPPORT_EMAIL: &str = "support@inboxhunter.app";

pub const ENV_DOWNLOAD_BASE_URL: &str = "INBOXHUNTER_DOWNLOAD_BASE_URL";
pub const ENV_VERSION: &str = "INBOXHUNTER_VERSION";
pub const ENV_SUPPORT_EMAIL: &str = "INBOXHUNTER_SUPPORT_EMAIL";
pub const ENV_DETECTION: &str = "INBOXHUNTER_DETECTION";

/// Effective website configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct SiteConfig {
    /// Where release artifacts are hosted; file names are appended to it
    pub download_base_url: String,

    /// Current release, substituted into artifact file names
    pub version: String,

    /// Address behind the "Contact support" link
    pub support_email: String,

    /// Which platform classes the download section distinguishes
    pub detection: DetectionProfile,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            download_base_url: DEFAULT_DOWNLOAD_BASE_URL.to_string(),
            version: DEFAULT_VERSION.to_string(),
            support_email: DEFAULT_SUPPORT_EMAIL.to_string(),
            detection: DetectionProfile::default(),
        }
    }
}

impl SiteConfig {
    /// Parse a `site.toml` document. Missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Build the effective configuration from an optional `site.toml` body
    /// and an environment lookup.
    pub fn resolve<F>(toml_source: Option<&str>, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let base = match toml_source {
            Some(content) => Self::from_toml_str(content).unwrap_or_else(|e| {
                warn!("site.toml is invalid, using built-in defaults: {}", e);
                Self::default()
            }),
            None => Self::default(),
        };

        let config = base.with_overrides(lookup);
        info!(
            version = %config.version,
            base_url = %config.download_base_url,
            detection = ?config.detection,
            "site configuration resolved"
        );
        config
    }

    /// Apply `INBOXHUNTER_*` overrides. Empty values are ignored.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        if let Some(url) = get(ENV_DOWNLOAD_BASE_URL) {
            self.download_base_url = url;
        }
        if let Some(version) = get(ENV_VERSION) {
            self.version = version;
        }
        if let Some(email) = get(ENV_SUPPORT_EMAIL) {
            self.support_email = email;
        }
        if let Some(raw) = get(ENV_DETECTION) {
            match raw.parse::<DetectionProfile>() {
                Ok(profile) => self.detection = profile,
                Err(e) => warn!("ignoring {}: {}", ENV_DETECTION, e),
            }
        }

        self
    }

    /// `{base}/{file_name}`
    pub fn download_url(&self, artifact: &DownloadArtifact) -> String {
        format!(
            "{}/{}",
            self.download_base_url.trim_end_matches('/'),
            artifact.file_name
        )
    }

    pub fn mailto_link(&self) -> String {
        format!("mailto:{}", self.support_email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::platform::PlatformClass;
    use crate::test_utils::levels_logged;
    use std::collections::HashMap;
    use tracing::Level;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.version, DEFAULT_VERSION);
        assert_eq!(config.download_base_url, DEFAULT_DOWNLOAD_BASE_URL);
        assert_eq!(config.detection, DetectionProfile::Narrow);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = SiteConfig::from_toml_str(
            r#"
            version = "1.2.0"
            detection = "extended"
            "#,
        )
        .unwrap();
        assert_eq!(config.version, "1.2.0");
        assert_eq!(config.detection, DetectionProfile::Extended);
        assert_eq!(config.support_email, DEFAULT_SUPPORT_EMAIL);
    }

    #[test]
    fn test_invalid_toml_falls_back_to_defaults() {
        assert!(SiteConfig::from_toml_str("version = ").is_err());
        assert!(SiteConfig::from_toml_str(r#"detection = "wide""#).is_err());

        let config = SiteConfig::resolve(Some("version = "), no_env);
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_invalid_toml_is_a_warning() {
        let (config, levels) = levels_logged(|| SiteConfig::resolve(Some("version = "), no_env));
        assert_eq!(config, SiteConfig::default());
        assert!(levels.contains(&Level::WARN));
        assert!(!levels.contains(&Level::ERROR));
    }

    #[test]
    fn test_missing_toml_uses_defaults() {
        assert_eq!(SiteConfig::resolve(None, no_env), SiteConfig::default());
    }

    #[test]
    fn test_env_overrides_toml() {
        let lookup = env_from(&[
            (ENV_VERSION, "2.0.0"),
            (ENV_DOWNLOAD_BASE_URL, "https://cdn.example.com/releases"),
            (ENV_SUPPORT_EMAIL, "   "),
            (ENV_DETECTION, "extended"),
        ]);
        let config = SiteConfig::resolve(Some(r#"version = "1.5.0""#), lookup);
        assert_eq!(config.version, "2.0.0");
        assert_eq!(config.download_base_url, "https://cdn.example.com/releases");
        assert_eq!(config.support_email, DEFAULT_SUPPORT_EMAIL);
        assert_eq!(config.detection, DetectionProfile::Extended);
    }

    #[test]
    fn test_invalid_detection_override_is_ignored() {
        let config = SiteConfig::default().with_overrides(env_from(&[(ENV_DETECTION, "wide")]));
        assert_eq!(config.detection, DetectionProfile::Narrow);
    }

    #[test]
    fn test_download_url_is_base_plus_file_name() {
        let config = SiteConfig {
            download_base_url: "https://x/releases".to_string(),
            version: "1.0.0".to_string(),
            ..SiteConfig::default()
        };
        let catalog = Catalog::for_profile(DetectionProfile::Extended, &config.version);
        let rec = catalog.recommend(PlatformClass::Windows);
        assert_eq!(rec.recommended.file_name, "InboxHunter_1.0.0_x64-setup.exe");
        assert_eq!(
            config.download_url(rec.recommended),
            "https://x/releases/InboxHunter_1.0.0_x64-setup.exe"
        );

        let trailing = SiteConfig {
            download_base_url: "https://x/releases/".to_string(),
            ..config
        };
        assert_eq!(
            trailing.download_url(rec.recommended),
            "https://x/releases/InboxHunter_1.0.0_x64-setup.exe"
        );
    }

    #[test]
    fn test_mailto_link() {
        let config = SiteConfig {
            support_email: "help@example.com".to_string(),
            ..SiteConfig::default()
        };
        assert_eq!(config.mailto_link(), "mailto:help@example.com");
    }
}
