//! Website recognition.

use super::first_match;
use super::patterns::WEBSITE_RULES;

/// Recognize the company website, normalized to carry a scheme.
pub fn recognize_website(text: &str) -> Option<String> {
    first_match(&WEBSITE_RULES, text, normalize_website)
}

/// Strip trailing punctuation and prefix `https://` when no scheme is present.
pub fn normalize_website(raw: &str) -> Option<String> {
    let url = raw
        .trim()
        .trim_end_matches(['.', ',', ';', ':', ')', ']', '>', '"', '\'']);

    if url.is_empty() {
        return None;
    }

    let lower = url.to_ascii_lowercase();
    if lower.starts_with("https://") || lower.starts_with("http://") {
        Some(url.to_string())
    } else {
        Some(format!("https://{}", url))
    }
}
