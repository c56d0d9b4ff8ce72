//! Presentation shell state
//!
//! Small, independent state machines behind the page chrome. None of them is
//! persisted; each resets to its initial state on reload.

use crate::prelude::*;

// ─────────────────────────────────────────────────────────────────────────────
// Navigation
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Home,
    HowItWorks,
    GettingStarted,
    Faq,
}

impl Page {
    pub const ALL: [Page; 4] = [
        Page::Home,
        Page::HowItWorks,
        Page::GettingStarted,
        Page::Faq,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::HowItWorks => "/how-it-works",
            Page::GettingStarted => "/getting-started",
            Page::Faq => "/faq",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::HowItWorks => "How It Works",
            Page::GettingStarted => "Getting Started",
            Page::Faq => "FAQ",
        }
    }

    /// Map a router pathname back to a page; unknown paths are `None`.
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Page::ALL.into_iter().find(|p| p.path() == normalized)
    }
}

/// Where the viewport should land after a navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrollTarget {
    Top,
    /// Element id taken from the URL fragment, without the `#`
    Anchor(String),
}

impl ScrollTarget {
    /// `""` and `"#"` mean the top of the page.
    pub fn from_fragment(fragment: &str) -> Self {
        match fragment.trim_start_matches('#') {
            "" => ScrollTarget::Top,
            id => ScrollTarget::Anchor(id.to_string()),
        }
    }
}

/// Active page and mobile menu flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Navigator {
    page: Page,
    mobile_menu_open: bool,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn is_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    /// Switch to `page` and close the mobile menu.
    ///
    /// `fragment` is the URL hash of the new location. A link such as
    /// `/#download` must land on its section, so only a bare path scrolls
    /// back to the top.
    pub fn select(&mut self, page: Page, fragment: &str) -> ScrollTarget {
        if self.mobile_menu_open {
            debug!("closing mobile menu on navigation to {}", page.path());
        }
        self.page = page;
        self.mobile_menu_open = false;
        ScrollTarget::from_fragment(fragment)
    }

    pub fn toggle_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    pub fn close_menu(&mut self) {
        self.mobile_menu_open = false;
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Accordion
// ─────────────────────────────────────────────────────────────────────────────

/// At most one of `len` items open at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accordion {
    len: usize,
    open: Option<usize>,
}

impl Accordion {
    /// The first item starts open
    pub fn new(len: usize) -> Self {
        Self {
            len,
            open: (len > 0).then_some(0),
        }
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Close `index` if it is open, otherwise open it and close the rest.
    pub fn toggle(&mut self, index: usize) {
        if index >= self.len {
            debug!(index, len = self.len, "accordion toggle out of range");
            return;
        }
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Getting-started tabs
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GuideTab {
    #[default]
    Install,
    Setup,
    Run,
}

impl GuideTab {
    pub const ALL: [GuideTab; 3] = [GuideTab::Install, GuideTab::Setup, GuideTab::Run];

    pub fn title(self) -> &'static str {
        match self {
            GuideTab::Install => "Installation",
            GuideTab::Setup => "Configuration",
            GuideTab::Run => "Running the Bot",
        }
    }

    pub fn position(self) -> usize {
        match self {
            GuideTab::Install => 0,
            GuideTab::Setup => 1,
            GuideTab::Run => 2,
        }
    }

    pub fn is_first(self) -> bool {
        self == GuideTab::Install
    }

    pub fn is_last(self) -> bool {
        self == GuideTab::Run
    }

    /// The following tab, staying on the last one
    pub fn next(self) -> Self {
        match self {
            GuideTab::Install => GuideTab::Setup,
            GuideTab::Setup | GuideTab::Run => GuideTab::Run,
        }
    }

    /// The preceding tab, staying on the first one
    pub fn previous(self) -> Self {
        match self {
            GuideTab::Install | GuideTab::Setup => GuideTab::Install,
            GuideTab::Run => GuideTab::Setup,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Disclosure
// ─────────────────────────────────────────────────────────────────────────────

/// Collapsible panel, hidden until toggled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Disclosure {
    shown: bool,
}

impl Disclosure {
    pub fn is_shown(&self) -> bool {
        self.shown
    }

    pub fn toggle(&mut self) {
        self.shown = !self.shown;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigator_starts_home_with_menu_closed() {
        let nav = Navigator::new();
        assert_eq!(nav.page(), Page::Home);
        assert!(!nav.is_menu_open());
    }

    #[test]
    fn test_select_closes_menu_and_scrolls_to_top() {
        let mut nav = Navigator::new();
        nav.toggle_menu();
        assert!(nav.is_menu_open());

        assert_eq!(nav.select(Page::Faq, ""), ScrollTarget::Top);
        assert_eq!(nav.page(), Page::Faq);
        assert!(!nav.is_menu_open());

        assert_eq!(nav.select(Page::HowItWorks, "#"), ScrollTarget::Top);
        assert!(!nav.is_menu_open());
    }

    #[test]
    fn test_select_with_fragment_targets_the_anchor() {
        let mut nav = Navigator::new();
        nav.select(Page::Faq, "");
        nav.toggle_menu();

        let target = nav.select(Page::Home, "#download");
        assert_eq!(target, ScrollTarget::Anchor("download".to_string()));
        assert_eq!(nav.page(), Page::Home);
        assert!(!nav.is_menu_open());

        assert_eq!(
            nav.select(Page::Home, "features"),
            ScrollTarget::Anchor("features".to_string())
        );
    }

    #[test]
    fn test_page_paths_round_trip() {
        for page in Page::ALL {
            assert_eq!(Page::from_path(page.path()), Some(page));
        }
        assert_eq!(Page::from_path("/faq/"), Some(Page::Faq));
        assert_eq!(Page::from_path(""), Some(Page::Home));
        assert_eq!(Page::from_path("/pricing"), None);
    }

    #[test]
    fn test_accordion_starts_with_first_item_open() {
        assert_eq!(Accordion::new(8).open, Some(0));
        assert_eq!(Accordion::new(0).open, None);
    }

    #[test]
    fn test_accordion_opening_another_item_is_exclusive() {
        let mut acc = Accordion::new(5);
        acc.toggle(3);
        assert!(acc.is_open(3));
        assert!(!acc.is_open(0));
        assert_eq!(acc.open, Some(3));
    }

    #[test]
    fn test_accordion_toggle_open_item_closes_it() {
        let mut acc = Accordion::new(5);
        acc.toggle(0);
        assert_eq!(acc.open, None);
        acc.toggle(0);
        assert_eq!(acc.open, Some(0));
    }

    #[test]
    fn test_accordion_ignores_out_of_range() {
        let mut acc = Accordion::new(2);
        acc.toggle(7);
        assert_eq!(acc.open, Some(0));
    }

    #[test]
    fn test_guide_tabs_saturate() {
        assert_eq!(GuideTab::default(), GuideTab::Install);
        assert_eq!(GuideTab::Install.previous(), GuideTab::Install);
        assert_eq!(GuideTab::Install.next(), GuideTab::Setup);
        assert_eq!(GuideTab::Setup.next(), GuideTab::Run);
        assert_eq!(GuideTab::Run.next(), GuideTab::Run);
        assert_eq!(GuideTab::Run.previous(), GuideTab::Setup);
        assert!(GuideTab::Install.is_first());
        assert!(GuideTab::Run.is_last());
        for (i, tab) in GuideTab::ALL.into_iter().enumerate() {
            assert_eq!(tab.position(), i);
        }
    }

    #[test]
    fn test_disclosure_hidden_until_toggled() {
        let mut panel = Disclosure::default();
        assert!(!panel.is_shown());
        panel.toggle();
        assert!(panel.is_shown());
        panel.toggle();
        assert!(!panel.is_shown());
    }
}
