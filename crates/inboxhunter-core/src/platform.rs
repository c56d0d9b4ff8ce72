//! Visitor platform detection
//!
//! Best-effort classification of the visitor's operating system from the
//! browser's `navigator.userAgent` and `navigator.platform` strings. The
//! result only picks which download to highlight; it is never a security
//! or correctness boundary, so every input maps to some [`PlatformClass`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// Coarse OS/architecture category of the visitor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlatformClass {
    MacArm,
    MacIntel,
    Windows,
    Linux,
    Unknown,
}

impl PlatformClass {
    pub fn as_str(self) -> &'static str {
        match self {
            PlatformClass::MacArm => "mac-arm",
            PlatformClass::MacIntel => "mac-intel",
            PlatformClass::Windows => "windows",
            PlatformClass::Linux => "linux",
            PlatformClass::Unknown => "unknown",
        }
    }
}

impl fmt::Display for PlatformClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlatformClass {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mac-arm" => Ok(PlatformClass::MacArm),
            "mac-intel" => Ok(PlatformClass::MacIntel),
            "windows" => Ok(PlatformClass::Windows),
            "linux" => Ok(PlatformClass::Linux),
            "unknown" => Ok(PlatformClass::Unknown),
            other => Err(Error::config(format!("unknown platform class '{other}'"))),
        }
    }
}

/// Which platform classes a site revision tells apart.
///
/// `Extended` distinguishes Intel from Apple Silicon Macs and recognises
/// Linux. `Narrow` is the current site: every Mac is treated as Apple
/// Silicon and Linux visitors fall through to `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectionProfile {
    Extended,
    #[default]
    Narrow,
}

impl FromStr for DetectionProfile {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "extended" => Ok(DetectionProfile::Extended),
            "narrow" => Ok(DetectionProfile::Narrow),
            other => Err(Error::config(format!(
                "unknown detection profile '{other}' (expected 'extended' or 'narrow')"
            ))),
        }
    }
}

/// The raw strings the browser exposes about its host
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvironmentSignals {
    pub user_agent: String,
    pub platform: String,
}

impl EnvironmentSignals {
    pub fn new(user_agent: impl Into<String>, platform: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
            platform: platform.into(),
        }
    }

    /// True if either string contains `needle`, ignoring ASCII case.
    /// `needle` must already be lowercase.
    fn mentions(&self, needle: &str) -> bool {
        self.user_agent.to_ascii_lowercase().contains(needle)
            || self.platform.to_ascii_lowercase().contains(needle)
    }
}

/// GPU renderer names that only ship on Apple Silicon
const APPLE_SILICON_RENDERERS: &[&str] = &["Apple M", "Apple GPU"];

/// Classify the visitor's platform.
///
/// Rules are checked in order and the first match wins:
/// 1. "mac" → `MacArm` if "arm"/"aarch64" is present. Otherwise, under the
///    `Extended` profile, `gpu_renderer` is consulted and an Apple GPU
///    promotes the result to `MacArm`; anything else is `MacIntel`. The
///    `Narrow` profile maps every Mac to `MacArm` without probing.
/// 2. "win" → `Windows`
/// 3. "linux" → `Linux` (`Extended` only)
/// 4. `Unknown`
///
/// `gpu_renderer` is invoked at most once and only when rule 1 needs it.
pub fn detect_os<F>(
    signals: &EnvironmentSignals,
    profile: DetectionProfile,
    gpu_renderer: F,
) -> PlatformClass
where
    F: FnOnce() -> Option<String>,
{
    let class = classify(signals, profile, gpu_renderer);
    debug!(
        platform = %class,
        ?profile,
        user_agent = %signals.user_agent,
        "classified visitor platform"
    );
    class
}

fn classify<F>(
    signals: &EnvironmentSignals,
    profile: DetectionProfile,
    gpu_renderer: F,
) -> PlatformClass
where
    F: FnOnce() -> Option<String>,
{
    if signals.mentions("mac") {
        return match profile {
            DetectionProfile::Narrow => PlatformClass::MacArm,
            DetectionProfile::Extended => {
                if signals.mentions("arm") || signals.mentions("aarch64") {
                    PlatformClass::MacArm
                } else if gpu_renderer().is_some_and(|r| is_apple_silicon_renderer(&r)) {
                    PlatformClass::MacArm
                } else {
                    PlatformClass::MacIntel
                }
            }
        };
    }

    if signals.mentions("win") {
        return PlatformClass::Windows;
    }

    if profile == DetectionProfile::Extended && signals.mentions("linux") {
        return PlatformClass::Linux;
    }

    PlatformClass::Unknown
}

fn is_apple_silicon_renderer(renderer: &str) -> bool {
    APPLE_SILICON_RENDERERS
        .iter()
        .any(|marker| renderer.contains(marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAC_SAFARI: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.1 Safari/605.1.15";
    const WIN_CHROME: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
    const LINUX_FIREFOX: &str = "Mozilla/5.0 (X11; Linux x86_64; rv:121.0) Gecko/20100101 Firefox/121.0";

    fn no_gpu() -> Option<String> {
        None
    }

    fn detect(ua: &str, platform: &str, profile: DetectionProfile) -> PlatformClass {
        detect_os(&EnvironmentSignals::new(ua, platform), profile, no_gpu)
    }

    #[test]
    fn test_windows_detected_case_insensitively() {
        for (ua, platform) in [
            (WIN_CHROME, "Win32"),
            ("", "WIN32"),
            ("some WiNdOwS thing", ""),
            ("", "win64"),
        ] {
            assert_eq!(detect(ua, platform, DetectionProfile::Extended), PlatformClass::Windows);
            assert_eq!(detect(ua, platform, DetectionProfile::Narrow), PlatformClass::Windows);
        }
    }

    #[test]
    fn test_mac_with_arm_marker_is_mac_arm() {
        for (ua, platform) in [
            ("Mozilla/5.0 (Macintosh; ARM Mac OS X 14_0)", "MacIntel"),
            ("", "Mac aarch64"),
            ("macOS", "ARM64"),
        ] {
            assert_eq!(detect(ua, platform, DetectionProfile::Extended), PlatformClass::MacArm);
            assert_eq!(detect(ua, platform, DetectionProfile::Narrow), PlatformClass::MacArm);
        }
    }

    #[test]
    fn test_intel_mac_without_gpu_hint() {
        assert_eq!(
            detect(MAC_SAFARI, "MacIntel", DetectionProfile::Extended),
            PlatformClass::MacIntel
        );
    }

    #[test]
    fn test_gpu_renderer_promotes_to_mac_arm() {
        let signals = EnvironmentSignals::new(MAC_SAFARI, "MacIntel");
        for renderer in [
            "Apple M2 Pro",
            "Apple GPU",
            "ANGLE (Apple, ANGLE Metal Renderer: Apple M1, Unspecified Version)",
        ] {
            let class = detect_os(&signals, DetectionProfile::Extended, || {
                Some(renderer.to_string())
            });
            assert_eq!(class, PlatformClass::MacArm, "renderer {renderer}");
        }

        let class = detect_os(&signals, DetectionProfile::Extended, || {
            Some("Intel(R) Iris(TM) Plus Graphics".to_string())
        });
        assert_eq!(class, PlatformClass::MacIntel);
    }

    #[test]
    fn test_gpu_probe_skipped_when_not_needed() {
        let panic_probe = || -> Option<String> { panic!("probe should not run") };

        let arm = EnvironmentSignals::new("Macintosh arm64", "");
        assert_eq!(detect_os(&arm, DetectionProfile::Extended, panic_probe), PlatformClass::MacArm);

        let intel = EnvironmentSignals::new(MAC_SAFARI, "MacIntel");
        assert_eq!(detect_os(&intel, DetectionProfile::Narrow, panic_probe), PlatformClass::MacArm);

        let win = EnvironmentSignals::new(WIN_CHROME, "Win32");
        assert_eq!(detect_os(&win, DetectionProfile::Extended, panic_probe), PlatformClass::Windows);
    }

    #[test]
    fn test_narrow_profile_collapses_macs() {
        assert_eq!(
            detect(MAC_SAFARI, "MacIntel", DetectionProfile::Narrow),
            PlatformClass::MacArm
        );
    }

    #[test]
    fn test_linux_only_in_extended_profile() {
        assert_eq!(
            detect(LINUX_FIREFOX, "Linux x86_64", DetectionProfile::Extended),
            PlatformClass::Linux
        );
        assert_eq!(
            detect(LINUX_FIREFOX, "Linux x86_64", DetectionProfile::Narrow),
            PlatformClass::Unknown
        );
    }

    #[test]
    fn test_unrecognised_strings_are_unknown() {
        for profile in [DetectionProfile::Extended, DetectionProfile::Narrow] {
            assert_eq!(detect("", "", profile), PlatformClass::Unknown);
            assert_eq!(detect("FreeBSD amd64", "FreeBSD", profile), PlatformClass::Unknown);
            assert_eq!(detect("curl/8.4.0", "", profile), PlatformClass::Unknown);
        }
    }

    #[test]
    fn test_mac_rule_wins_over_windows_rule() {
        // "darwin" contains "win"
        assert_eq!(
            detect("CFNetwork Darwin/23.0.0", "MacIntel", DetectionProfile::Extended),
            PlatformClass::MacIntel
        );
    }

    #[test]
    fn test_detection_is_deterministic() {
        let signals = EnvironmentSignals::new(MAC_SAFARI, "MacIntel");
        let first = detect_os(&signals, DetectionProfile::Extended, no_gpu);
        for _ in 0..5 {
            assert_eq!(detect_os(&signals, DetectionProfile::Extended, no_gpu), first);
        }
    }

    #[test]
    fn test_platform_class_string_forms() {
        for class in [
            PlatformClass::MacArm,
            PlatformClass::MacIntel,
            PlatformClass::Windows,
            PlatformClass::Linux,
            PlatformClass::Unknown,
        ] {
            assert_eq!(class.to_string().parse::<PlatformClass>().unwrap(), class);
        }
        assert!("beos".parse::<PlatformClass>().is_err());
    }

    #[test]
    fn test_detection_profile_from_str() {
        assert_eq!("Extended".parse::<DetectionProfile>().unwrap(), DetectionProfile::Extended);
        assert_eq!(" narrow ".parse::<DetectionProfile>().unwrap(), DetectionProfile::Narrow);
        assert!("wide".parse::<DetectionProfile>().is_err());
        assert_eq!(DetectionProfile::default(), DetectionProfile::Narrow);
    }
}
