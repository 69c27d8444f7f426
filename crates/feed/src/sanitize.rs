// ABOUTME: Episode description sanitization.
// ABOUTME: Strips injected ad-choices boilerplate and tidies leftover markup.

use once_cell::sync::Lazy;
use regex::Regex;

// The hosting platform appends the same ad-choices sentence in several
// renderings. Wrapped forms must be removed before the bare-text form,
// otherwise the text match would leave empty tags behind.
static AD_CHOICES_PARAGRAPH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)<p[^>]*>\s*Learn\s+more\s+about\s+your\s+ad\s+choices\.\s*Visit\s+megaphone\.fm/adchoices\s*</p>",
    )
    .unwrap()
});

static AD_CHOICES_FULL_LINK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)<a[^>]*>\s*Learn\s+more\s+about\s+your\s+ad\s+choices\.\s*Visit\s+megaphone\.fm/adchoices\s*</a>",
    )
    .unwrap()
});

static AD_CHOICES_LINKED_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)Learn\s+more\s+about\s+your\s+ad\s+choices\.\s*Visit\s+<a[^>]*>megaphone\.fm/adchoices</a>",
    )
    .unwrap()
});

static AD_CHOICES_PLAIN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)Learn\s+more\s+about\s+your\s+ad\s+choices\.\s*Visit\s+megaphone\.fm/adchoices",
    )
    .unwrap()
});

static REPEATED_BREAKS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(<br\s*/?>\s*){2,}").unwrap());

static EMPTY_PARAGRAPH: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)(<p>\s*</p>)").unwrap());

static TRIPLE_BLANK_LINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n\s*\n").unwrap());

/// Removes the injected ad-choices boilerplate from an episode description
/// and cleans up the whitespace and empty tags left behind. All other
/// markup passes through unchanged.
pub fn clean_description(description: &str) -> String {
    let cleaned = AD_CHOICES_PARAGRAPH.replace_all(description, "");
    let cleaned = AD_CHOICES_FULL_LINK.replace_all(&cleaned, "");
    let cleaned = AD_CHOICES_LINKED_URL.replace_all(&cleaned, "");
    let cleaned = AD_CHOICES_PLAIN.replace_all(&cleaned, "");

    let cleaned = REPEATED_BREAKS.replace_all(&cleaned, "<br>");
    let cleaned = EMPTY_PARAGRAPH.replace_all(&cleaned, "");
    let cleaned = TRIPLE_BLANK_LINES.replace_all(&cleaned, "\n\n");

    cleaned.trim().to_string()
}
