// ABOUTME: Episode title parsing heuristics.
// ABOUTME: Derives URL slugs and guest lists from "#NNN - Guest: Topic" titles.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::Guest;

// "#308 - Jane Doe: Topic", "Ep12 - Jane Doe (from the vault)",
// "42 - Jane Doe". The guest segment stops at the first colon or paren.
static EPISODE_TITLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:#|Ep)?(\d+)\s*-\s*([^:()]+)(?::\s*(.+)|(\s*\([^)]+\)))?$").unwrap()
});

static GUEST_JOINERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\s+(?:and|&|,)\s+").unwrap());

static WITH_FEATURING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:with|featuring)\s+([^|:]+)").unwrap());

static FALLBACK_JOINERS: Lazy<Regex> = Lazy::new(|| Regex::new(r",|&|\sand\s").unwrap());

static SLUG_AND_JOINER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\s+(?:and|&)\s+").unwrap());

static NON_SLUG_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-zA-Z0-9\s-]").unwrap());

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

static DASH_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"-+").unwrap());

/// Derives a URL slug from an episode title.
///
/// Titles matching the episode pattern produce `{guest-slug}-{number}`,
/// with the feed's own episode number taking precedence over the one in
/// the title. Anything else slugifies the whole title, truncated to 50
/// characters, with the episode number appended when known. Slugs are
/// best-effort and not guaranteed unique.
pub fn generate_slug(title: &str, episode_number: Option<u32>) -> String {
    if let Some(caps) = EPISODE_TITLE.captures(title) {
        let guest_name = caps[2].trim();
        let title_number: Option<u32> = caps[1].parse().ok();
        let num = episode_number.or(title_number);

        let guest_slug = slugify_segment(guest_name);
        match num {
            Some(n) => format!("{guest_slug}-{n}"),
            None => guest_slug,
        }
    } else {
        let slug = NON_SLUG_CHARS.replace_all(title, "");
        let slug = WHITESPACE_RUN.replace_all(&slug, "-");
        let slug = DASH_RUN.replace_all(&slug, "-");
        let slug: String = slug.to_lowercase().chars().take(50).collect();

        match episode_number {
            Some(n) => format!("{slug}-{n}"),
            None => slug,
        }
    }
}

fn slugify_segment(s: &str) -> String {
    let s = SLUG_AND_JOINER.replace_all(s, "-");
    let s = NON_SLUG_CHARS.replace_all(&s, "");
    let s = WHITESPACE_RUN.replace_all(&s, "-");
    let s = DASH_RUN.replace_all(&s, "-");
    s.to_lowercase()
}

/// Extracts guest names from an episode title.
///
/// BONUS episodes carry no guests. Titles matching the episode pattern
/// split the guest segment on "and" / "&" / ",". Other titles fall back
/// to a "with ..." / "featuring ..." scan.
pub fn extract_guests(title: &str) -> Vec<Guest> {
    if title.to_uppercase().contains("BONUS") {
        return Vec::new();
    }

    if let Some(caps) = EPISODE_TITLE.captures(title) {
        let guest_segment = caps[2].trim();
        return GUEST_JOINERS
            .split(guest_segment)
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(|name| Guest {
                name: name.to_string(),
            })
            .collect();
    }

    if let Some(caps) = WITH_FEATURING.captures(title) {
        return FALLBACK_JOINERS
            .split(&caps[1])
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(|name| Guest {
                name: name.to_string(),
            })
            .collect();
    }

    Vec::new()
}
