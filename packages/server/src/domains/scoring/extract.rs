//! Plain-text signal surface for heuristic scoring.
//!
//! Regex-only: markup is stripped, never parsed.

use lazy_static::lazy_static;
use regex::Regex;

/// Phrases that read as a call to action.
pub const CTA_KEYWORDS: &[&str] = &["get started", "start free", "sign up", "contact", "try free"];

/// Phrases that read as trust signals. Each counts at most once.
pub const TRUST_KEYWORDS: &[&str] = &[
    "trusted by",
    "testimonials",
    "review",
    "reviews",
    "privacy",
    "secure",
    "https",
    "iso",
    "gdpr",
    "clients",
    "partners",
];

lazy_static! {
    static ref TAG_REGEX: Regex = Regex::new(r"<[^>]+>").unwrap();
    static ref H1_REGEX: Regex = Regex::new(r"(?is)<h1[^>]*>.*?</h1>").unwrap();
    static ref TITLE_REGEX: Regex = Regex::new(r"(?is)<title[^>]*>.*?</title>").unwrap();
}

/// Structural flags and lowercase text pulled from one HTML document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSignals {
    /// Lowercase text with every tag replaced by a space
    pub text: String,
    pub have_h1: bool,
    pub have_title: bool,
    pub have_cta: bool,
    pub trust_kw_count: usize,
    pub word_count: usize,
}

impl PageSignals {
    pub fn mentions(&self, phrase: &str) -> bool {
        self.text.contains(phrase)
    }
}

/// Extract signals from raw, possibly empty or malformed, HTML.
pub fn extract_signals(html: &str) -> PageSignals {
    let text = TAG_REGEX.replace_all(html, " ").to_lowercase();

    let have_cta = html.to_lowercase().contains("<button")
        || CTA_KEYWORDS.iter().any(|kw| text.contains(kw));
    let trust_kw_count = TRUST_KEYWORDS.iter().filter(|kw| text.contains(*kw)).count();
    let word_count = text.split_whitespace().count();

    PageSignals {
        have_h1: H1_REGEX.is_match(html),
        have_title: TITLE_REGEX.is_match(html),
        have_cta,
        trust_kw_count,
        word_count,
        text,
    }
}
