// ABOUTME: Flexible pubDate parsing for RSS feed items.
// ABOUTME: Fallback for timestamps the structural parser could not interpret.

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};

/// Parses a pubDate string using the formats seen in podcast feeds.
/// Returns UTC datetime if successful, None if no format matches.
pub fn parse_flexible_time(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    // RFC3339 (Atom) and RFC2822 (RSS) cover almost everything.
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.with_timezone(&Utc));
    }

    // Named timezone abbreviations (chrono's %Z doesn't parse these).
    if let Some(dt) = parse_with_named_timezone(s) {
        return Some(dt);
    }

    // Variants with a numeric offset
    let formats_with_tz = [
        "%a, %d %b %Y %H:%M:%S %z",
        "%a, %e %b %Y %H:%M:%S %z",
        "%d %b %Y %H:%M:%S %z",
        "%Y-%m-%dT%H:%M:%S%:z",
    ];
    for fmt in &formats_with_tz {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Some(dt.with_timezone(&Utc));
        }
    }

    // Variants without a timezone (assume UTC)
    let formats_naive = [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S",
        "%d %b %Y %H:%M:%S",
    ];
    for fmt in &formats_naive {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }

    // Date only: "2006-01-02"
    if let Ok(naive_date) = chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        let naive_dt = naive_date.and_hms_opt(0, 0, 0)?;
        return Some(Utc.from_utc_datetime(&naive_dt));
    }

    None
}

/// Parses datetime strings ending in a named US/European timezone.
fn parse_with_named_timezone(s: &str) -> Option<DateTime<Utc>> {
    // Offsets in seconds from UTC for the abbreviations podcast hosts emit.
    let tz_offsets: &[(&str, i32)] = &[
        ("GMT", 0),
        ("UTC", 0),
        ("EST", -5 * 3600),
        ("EDT", -4 * 3600),
        ("CST", -6 * 3600),
        ("CDT", -5 * 3600),
        ("MST", -7 * 3600),
        ("MDT", -6 * 3600),
        ("PST", -8 * 3600),
        ("PDT", -7 * 3600),
        ("CET", 3600),
        ("CEST", 2 * 3600),
        ("BST", 3600),
    ];

    for (tz_name, offset_secs) in tz_offsets {
        if !s.ends_with(tz_name) {
            continue;
        }
        let base = s.trim_end_matches(tz_name).trim_end();

        let formats = [
            "%a, %d %b %Y %H:%M:%S",
            "%a, %e %b %Y %H:%M:%S",
            "%d %b %Y %H:%M:%S",
        ];
        for fmt in &formats {
            if let Ok(naive) = NaiveDateTime::parse_from_str(base, fmt) {
                let offset = FixedOffset::east_opt(*offset_secs)?;
                let dt = offset.from_local_datetime(&naive).single()?;
                return Some(dt.with_timezone(&Utc));
            }
        }
    }

    None
}
