//! Static page copy
//!
//! Plain tables rendered by the website. They carry no behaviour; the view
//! layer maps each [`IconKind`] to an SVG.

use crate::shell::GuideTab;

pub const PROJECT_URL: &str = "https://github.com/inboxhunter/inboxhunter";
pub const ISSUES_URL: &str = "https://github.com/inboxhunter/inboxhunter/issues";
pub const COMMUNITY_URL: &str = "https://discord.gg/inboxhunter";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Bot,
    Eye,
    Shield,
    Globe,
    Database,
    Cpu,
    Settings,
    Target,
    Play,
    BarChart,
    Github,
    MessageCircle,
    Mail,
}

#[derive(Debug, Clone, Copy)]
pub struct Feature {
    pub icon: IconKind,
    pub title: &'static str,
    pub description: &'static str,
    /// Tailwind colour family used for the card accent
    pub accent: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: IconKind::Bot,
        title: "AI-Powered Form Filling",
        description: "GPT-4 Vision analyzes any web form and intelligently fills it out - handles complex multi-step forms, checkboxes, dropdowns, and more.",
        accent: "blue",
    },
    Feature {
        icon: IconKind::Eye,
        title: "Visual Understanding",
        description: "Uses computer vision to see forms exactly as humans do. No brittle selectors or manual configuration needed.",
        accent: "purple",
    },
    Feature {
        icon: IconKind::Shield,
        title: "Stealth Mode",
        description: "Built-in anti-detection features bypass bot protection. Realistic browser fingerprinting and human-like behavior.",
        accent: "emerald",
    },
    Feature {
        icon: IconKind::Globe,
        title: "Meta Ads Scraper",
        description: "Automatically scrapes landing pages from Facebook/Instagram ads. Target competitor ads by keyword.",
        accent: "pink",
    },
    Feature {
        icon: IconKind::Database,
        title: "Local Database",
        description: "All data stays on your machine. Track signups, avoid duplicates, and export your research.",
        accent: "amber",
    },
    Feature {
        icon: IconKind::Cpu,
        title: "Smart Rate Limiting",
        description: "Intelligent delays and retry logic. Handles API limits and CAPTCHAs automatically.",
        accent: "cyan",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const HERO_STATS: &[Stat] = &[
    Stat { value: "100%", label: "Form Success Rate" },
    Stat { value: "<2min", label: "Per Signup" },
    Stat { value: "GPT-4o", label: "Vision AI" },
];

#[derive(Debug, Clone, Copy)]
pub struct Step {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: IconKind,
}

pub const STEPS: &[Step] = &[
    Step {
        number: "01",
        title: "Configure Credentials",
        description: "Set up your signup credentials - email, name, and phone. These will be used to fill out forms.",
        icon: IconKind::Settings,
    },
    Step {
        number: "02",
        title: "Choose Data Source",
        description: "Scrape URLs from Meta Ads Library using keywords, or load your own list from a CSV file.",
        icon: IconKind::Target,
    },
    Step {
        number: "03",
        title: "Start Automation",
        description: "Hit start and watch the AI navigate to each page, analyze forms, and complete signups automatically.",
        icon: IconKind::Play,
    },
    Step {
        number: "04",
        title: "Review Results",
        description: "Track your progress in real-time. View logs, stats, and export your collected data.",
        icon: IconKind::BarChart,
    },
];

/// One block of a getting-started guide
#[derive(Debug, Clone, Copy)]
pub enum GuideBlock {
    Text(&'static str),
    Heading(&'static str),
    Code {
        label: Option<&'static str>,
        value: &'static str,
    },
    List(&'static [&'static str]),
}

const INSTALL_GUIDE: &[GuideBlock] = &[
    GuideBlock::Text("1. Download the app for your operating system from the download section."),
    GuideBlock::Text("2. Install the application:"),
    GuideBlock::Code {
        label: Some("macOS"),
        value: "Open the .dmg file and drag InboxHunter to Applications",
    },
    GuideBlock::Code {
        label: Some("Windows"),
        value: "Run the .exe installer and follow the prompts",
    },
    GuideBlock::Text("3. On first launch, the app sets up its browser engine automatically."),
];

const SETUP_GUIDE: &[GuideBlock] = &[
    GuideBlock::Text("1. Go to Settings → Credentials and enter your signup details:"),
    GuideBlock::List(&[
        "First Name & Last Name",
        "Email address (use a catch-all or alias)",
        "Phone number with country code",
    ]),
    GuideBlock::Text("2. Go to Settings → API Keys:"),
    GuideBlock::Code {
        label: Some("OpenAI API Key"),
        value: "Get from platform.openai.com/api-keys",
    },
    GuideBlock::Text("3. Choose how to find landing pages:"),
    GuideBlock::Heading("Meta Ads Library (Recommended)"),
    GuideBlock::List(&[
        "Enter keywords like \"marketing, funnel, coaching\"",
        "Set max ads to scrape",
        "The bot will find competitor ads automatically",
    ]),
    GuideBlock::Heading("CSV File"),
    GuideBlock::List(&[
        "Create a CSV with a \"url\" column",
        "Each row should contain a landing page URL",
        "Select the file in Settings → Data Source",
    ]),
];

const RUN_GUIDE: &[GuideBlock] = &[
    GuideBlock::Text("1. Click \"Start Bot\" in the header to begin automation."),
    GuideBlock::Text("2. Watch the Dashboard for real-time progress."),
    GuideBlock::Text("3. View detailed logs in the Logs tab."),
    GuideBlock::Text("4. The bot will:"),
    GuideBlock::List(&[
        "Navigate to each landing page",
        "Analyze the form using AI vision",
        "Fill out fields intelligently",
        "Handle checkboxes, dropdowns, and CAPTCHAs",
        "Submit and verify success",
    ]),
    GuideBlock::Text("5. Click \"Stop\" anytime to pause automation."),
];

pub fn guide(tab: GuideTab) -> &'static [GuideBlock] {
    match tab {
        GuideTab::Install => INSTALL_GUIDE,
        GuideTab::Setup => SETUP_GUIDE,
        GuideTab::Run => RUN_GUIDE,
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: &[FaqEntry] = &[
    FaqEntry {
        question: "Is InboxHunter free to use?",
        answer: "Yes, InboxHunter is completely free and open source. However, you will need an OpenAI API key which has its own costs based on usage. The GPT-4o model typically costs about $0.01-0.05 per signup.",
    },
    FaqEntry {
        question: "What is the success rate for form filling?",
        answer: "InboxHunter achieves a 90-100% success rate on standard opt-in forms. The AI can handle most form layouts including multi-step forms, hidden checkboxes, and complex validation. Some heavily protected sites may need manual help.",
    },
    FaqEntry {
        question: "Will websites detect that I'm using a bot?",
        answer: "InboxHunter includes stealth features like realistic browser fingerprinting, human-like typing delays, and anti-detection scripts. While no solution is 100% undetectable, our approach minimizes detection on most sites.",
    },
    FaqEntry {
        question: "Can I use this for commercial purposes?",
        answer: "Yes, InboxHunter is licensed under MIT. You can use it for personal research, competitor analysis, or commercial lead generation. Always ensure you comply with applicable laws and website terms of service.",
    },
    FaqEntry {
        question: "How do I handle CAPTCHAs?",
        answer: "InboxHunter supports integration with 2Captcha for automatic CAPTCHA solving. Add your 2Captcha API key in Settings. Without this, you may need to solve CAPTCHAs manually when they appear.",
    },
    FaqEntry {
        question: "What if the Meta Ads scraper doesn't work?",
        answer: "Meta occasionally requires login or shows cookie dialogs. Try running without headless mode first. You can also use the CSV import option to load your own list of landing page URLs.",
    },
    FaqEntry {
        question: "Is my data stored securely?",
        answer: "All data is stored locally in a SQLite database on your computer. We never collect or transmit your credentials, API keys, or scraped data. Your privacy is fully protected.",
    },
    FaqEntry {
        question: "How can I contribute to the project?",
        answer: "InboxHunter is open source! Check out our GitHub repository to report bugs, suggest features, or submit pull requests. We welcome contributions from the community.",
    },
];

/// Where a support card points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupportLink {
    External(&'static str),
    /// Resolved to `mailto:` with the configured support address
    Email,
}

#[derive(Debug, Clone, Copy)]
pub struct SupportOption {
    pub icon: IconKind,
    pub title: &'static str,
    pub description: &'static str,
    pub link: SupportLink,
    pub link_text: &'static str,
}

pub const SUPPORT_OPTIONS: &[SupportOption] = &[
    SupportOption {
        icon: IconKind::Github,
        title: "GitHub Issues",
        description: "Report bugs or request features",
        link: SupportLink::External(ISSUES_URL),
        link_text: "Open Issue",
    },
    SupportOption {
        icon: IconKind::MessageCircle,
        title: "Discord Community",
        description: "Get help from the community",
        link: SupportLink::External(COMMUNITY_URL),
        link_text: "Join Discord",
    },
    SupportOption {
        icon: IconKind::Mail,
        title: "Email Support",
        description: "Talk to the maintainers directly",
        link: SupportLink::Email,
        link_text: "Send Email",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_populated() {
        assert_eq!(FEATURES.len(), 6);
        assert_eq!(STEPS.len(), 4);
        assert_eq!(HERO_STATS.len(), 3);
        assert_eq!(FAQS.len(), 8);
        assert_eq!(SUPPORT_OPTIONS.len(), 3);
    }

    #[test]
    fn test_every_guide_tab_has_content() {
        for tab in GuideTab::ALL {
            let blocks = guide(tab);
            assert!(!blocks.is_empty(), "{tab:?} guide is empty");
            assert!(matches!(blocks[0], GuideBlock::Text(_)));
        }
    }

    #[test]
    fn test_steps_numbered_in_order() {
        for (i, step) in STEPS.iter().enumerate() {
            assert_eq!(step.number, format!("{:02}", i + 1));
        }
    }

    #[test]
    fn test_no_blank_copy() {
        assert!(FAQS.iter().all(|f| !f.question.is_empty() && !f.answer.is_empty()));
        assert!(FEATURES.iter().all(|f| !f.title.is_empty() && !f.description.is_empty()));
        assert!(SUPPORT_OPTIONS
            .iter()
            .any(|o| o.link == SupportLink::Email));
    }
}
