//! Download catalog and recommendation lookup
//!
//! The catalog is a fixed, hand-maintained list of installers. Its order is
//! the order of the "other downloads" list, and its first entry doubles as
//! the recommendation when the visitor's platform matches nothing.

use crate::platform::{DetectionProfile, PlatformClass};
use crate::prelude::*;

/// Placeholder substituted with the release version in file names and commands
pub const VERSION_PLACEHOLDER: &str = "{version}";

/// Static description of one installer, before a version is known
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArtifactTemplate {
    pub id: PlatformClass,
    pub name: &'static str,
    pub subtitle: &'static str,
    pub file_name: &'static str,
    pub post_install_command: Option<&'static str>,
    pub post_install_description: &'static str,
}

/// What to do after the installer has been downloaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostInstall {
    /// Shell command the visitor may need to run, if any
    pub command: Option<String>,
    pub description: String,
}

/// An installer with the release version filled in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadArtifact {
    pub id: PlatformClass,
    pub name: String,
    pub subtitle: String,
    pub file_name: String,
    pub post_install: PostInstall,
}

impl ArtifactTemplate {
    pub fn render(&self, version: &str) -> DownloadArtifact {
        let fill = |template: &str| template.replace(VERSION_PLACEHOLDER, version);
        DownloadArtifact {
            id: self.id,
            name: self.name.to_string(),
            subtitle: self.subtitle.to_string(),
            file_name: fill(self.file_name),
            post_install: PostInstall {
                command: self.post_install_command.map(fill),
                description: self.post_install_description.to_string(),
            },
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Built-in Catalogs
// ─────────────────────────────────────────────────────────────────────────────

const MAC_ARM: ArtifactTemplate = ArtifactTemplate {
    id: PlatformClass::MacArm,
    name: "macOS",
    subtitle: "Apple Silicon (M1/M2/M3/M4)",
    file_name: "InboxHunter_{version}_aarch64.dmg",
    post_install_command: Some("xattr -cr /Applications/InboxHunter.app"),
    post_install_description:
        "Drag InboxHunter to Applications. If macOS reports the app as damaged, run this once in Terminal.",
};

const MAC_INTEL: ArtifactTemplate = ArtifactTemplate {
    id: PlatformClass::MacIntel,
    name: "macOS",
    subtitle: "Intel",
    file_name: "InboxHunter_{version}_x64.dmg",
    post_install_command: Some("xattr -cr /Applications/InboxHunter.app"),
    post_install_description:
        "Drag InboxHunter to Applications. If macOS reports the app as damaged, run this once in Terminal.",
};

const WINDOWS: ArtifactTemplate = ArtifactTemplate {
    id: PlatformClass::Windows,
    name: "Windows",
    subtitle: "Windows 10/11 (64-bit)",
    file_name: "InboxHunter_{version}_x64-setup.exe",
    post_install_command: None,
    post_install_description:
        "Run the installer. If SmartScreen appears, click \"More info\" and then \"Run anyway\".",
};

const LINUX_APPIMAGE: ArtifactTemplate = ArtifactTemplate {
    id: PlatformClass::Linux,
    name: "Linux",
    subtitle: "AppImage (x86_64)",
    file_name: "InboxHunter_{version}_amd64.AppImage",
    post_install_command: Some(
        "chmod +x InboxHunter_{version}_amd64.AppImage && ./InboxHunter_{version}_amd64.AppImage",
    ),
    post_install_description: "Make the AppImage executable and start it.",
};

const LINUX_DEB: ArtifactTemplate = ArtifactTemplate {
    id: PlatformClass::Linux,
    name: "Linux",
    subtitle: "Debian / Ubuntu (.deb)",
    file_name: "InboxHunter_{version}_amd64.deb",
    post_install_command: Some("sudo dpkg -i InboxHunter_{version}_amd64.deb"),
    post_install_description: "Install the package with dpkg, then launch InboxHunter from your app menu.",
};

/// Catalog for the site revision that tells Intel and Apple Silicon apart
pub const EXTENDED_TEMPLATES: &[ArtifactTemplate] =
    &[MAC_ARM, MAC_INTEL, WINDOWS, LINUX_APPIMAGE, LINUX_DEB];

/// Catalog for the current site revision
pub const NARROW_TEMPLATES: &[ArtifactTemplate] = &[MAC_ARM, WINDOWS];

// ─────────────────────────────────────────────────────────────────────────────
// Catalog
// ─────────────────────────────────────────────────────────────────────────────

/// Non-empty, ordered list of downloadable installers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    artifacts: Vec<DownloadArtifact>,
}

/// The highlighted installer and every other entry in catalog order
#[derive(Debug, Clone)]
pub struct Recommendation<'a> {
    pub recommended: &'a DownloadArtifact,
    pub others: Vec<&'a DownloadArtifact>,
    /// False when nothing matched and the first entry was used as a fallback
    pub matched: bool,
}

impl Catalog {
    pub fn new(artifacts: Vec<DownloadArtifact>) -> Result<Self> {
        if artifacts.is_empty() {
            return Err(Error::EmptyCatalog);
        }
        Ok(Self { artifacts })
    }

    /// Render a list of templates for `version`
    pub fn from_templates(templates: &[ArtifactTemplate], version: &str) -> Result<Self> {
        Self::new(templates.iter().map(|t| t.render(version)).collect())
    }

    /// The built-in catalog for a site revision
    pub fn for_profile(profile: DetectionProfile, version: &str) -> Self {
        let templates = match profile {
            DetectionProfile::Extended => EXTENDED_TEMPLATES,
            DetectionProfile::Narrow => NARROW_TEMPLATES,
        };
        Self {
            artifacts: templates.iter().map(|t| t.render(version)).collect(),
        }
    }

    pub fn artifacts(&self) -> &[DownloadArtifact] {
        &self.artifacts
    }

    /// Split the catalog into the recommended entry and the rest.
    ///
    /// `others` is filtered by position, not by id, so a second installer for
    /// the same platform (e.g. the `.deb` next to the AppImage) stays listed.
    pub fn recommend(&self, detected: PlatformClass) -> Recommendation<'_> {
        let (index, matched) = match self.artifacts.iter().position(|a| a.id == detected) {
            Some(index) => (index, true),
            None => {
                debug!(platform = %detected, "no installer for platform, falling back to first entry");
                (0, false)
            }
        };

        Recommendation {
            recommended: &self.artifacts[index],
            others: self
                .artifacts
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != index)
                .map(|(_, a)| a)
                .collect(),
            matched,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{detect_os, EnvironmentSignals};

    fn extended() -> Catalog {
        Catalog::for_profile(DetectionProfile::Extended, "1.0.0")
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert!(matches!(Catalog::new(Vec::new()), Err(Error::EmptyCatalog)));
        assert!(matches!(
            Catalog::from_templates(&[], "1.0.0"),
            Err(Error::EmptyCatalog)
        ));
    }

    #[test]
    fn test_template_rendering_substitutes_version() {
        let artifact = LINUX_APPIMAGE.render("2.3.4");
        assert_eq!(artifact.file_name, "InboxHunter_2.3.4_amd64.AppImage");
        assert_eq!(
            artifact.post_install.command.as_deref(),
            Some("chmod +x InboxHunter_2.3.4_amd64.AppImage && ./InboxHunter_2.3.4_amd64.AppImage")
        );

        let artifact = WINDOWS.render("1.0.0");
        assert_eq!(artifact.file_name, "InboxHunter_1.0.0_x64-setup.exe");
        assert!(artifact.post_install.command.is_none());
    }

    #[test]
    fn test_recommend_first_matching_entry() {
        let catalog = extended();
        let rec = catalog.recommend(PlatformClass::Windows);
        assert!(rec.matched);
        assert_eq!(rec.recommended.id, PlatformClass::Windows);
        assert_eq!(rec.recommended.file_name, "InboxHunter_1.0.0_x64-setup.exe");

        let rec = catalog.recommend(PlatformClass::Linux);
        assert_eq!(rec.recommended.file_name, "InboxHunter_1.0.0_amd64.AppImage");
    }

    #[test]
    fn test_recommend_falls_back_to_first_entry() {
        let catalog = extended();
        let rec = catalog.recommend(PlatformClass::Unknown);
        assert!(!rec.matched);
        assert!(std::ptr::eq(rec.recommended, &catalog.artifacts()[0]));

        let narrow = Catalog::for_profile(DetectionProfile::Narrow, "1.0.0");
        let rec = narrow.recommend(PlatformClass::Linux);
        assert!(!rec.matched);
        assert_eq!(rec.recommended.id, PlatformClass::MacArm);
    }

    #[test]
    fn test_others_excludes_only_the_recommended_entry() {
        let catalog = extended();
        for detected in [
            PlatformClass::MacArm,
            PlatformClass::MacIntel,
            PlatformClass::Windows,
            PlatformClass::Linux,
            PlatformClass::Unknown,
        ] {
            let rec = catalog.recommend(detected);
            assert_eq!(rec.others.len(), catalog.artifacts().len() - 1);
            assert!(rec.others.iter().all(|a| !std::ptr::eq(*a, rec.recommended)));
        }
    }

    #[test]
    fn test_others_keep_same_platform_entries_in_order() {
        let catalog = extended();
        let rec = catalog.recommend(PlatformClass::Linux);
        let names: Vec<&str> = rec.others.iter().map(|a| a.file_name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "InboxHunter_1.0.0_aarch64.dmg",
                "InboxHunter_1.0.0_x64.dmg",
                "InboxHunter_1.0.0_x64-setup.exe",
                "InboxHunter_1.0.0_amd64.deb",
            ]
        );
    }

    #[test]
    fn test_intel_mac_recommends_intel_build() {
        let catalog = extended();
        let rec = catalog.recommend(PlatformClass::MacIntel);
        assert_eq!(rec.recommended.id, PlatformClass::MacIntel);
        assert!(rec.others.iter().any(|a| a.id == PlatformClass::MacArm));
    }

    #[test]
    fn test_intel_mac_visitor_end_to_end() {
        let signals = EnvironmentSignals::new(
            "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 Version/17.0 Safari/605.1.15",
            "MacIntel",
        );
        let detected = detect_os(&signals, DetectionProfile::Extended, || None);
        assert_eq!(detected, PlatformClass::MacIntel);

        let catalog = extended();
        let rec = catalog.recommend(detected);
        assert!(rec.matched);
        assert_eq!(rec.recommended.id, PlatformClass::MacIntel);
        assert_eq!(rec.recommended.file_name, "InboxHunter_1.0.0_x64.dmg");
        assert!(rec.others.iter().any(|a| a.id == PlatformClass::MacArm));
    }

    #[test]
    fn test_single_entry_catalog() {
        let catalog = Catalog::from_templates(&[WINDOWS], "1.0.0").unwrap();
        let rec = catalog.recommend(PlatformClass::MacArm);
        assert!(!rec.matched);
        assert!(rec.others.is_empty());
        assert_eq!(catalog.artifacts().len(), 1);
    }

    #[test]
    fn test_narrow_catalog_shape() {
        let narrow = Catalog::for_profile(DetectionProfile::Narrow, "1.0.0");
        let ids: Vec<PlatformClass> = narrow.artifacts().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![PlatformClass::MacArm, PlatformClass::Windows]);
    }
}
