// ABOUTME: HTML utility functions for episode description processing.
// ABOUTME: Provides tag stripping, entity decoding, and link attribute rewriting.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static ANCHOR_WITH_HREF: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<a\s+([^>]*href=["'][^"']*["'][^>]*)>"#).unwrap()
});

static TARGET_ATTR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)target\s*=").unwrap());

static REL_ATTR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)rel\s*=").unwrap());

static REL_VALUE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)rel\s*=\s*["']([^"']*)["']"#).unwrap()
});

/// Strips HTML tags from a string, returning plain text.
/// This is a naive implementation that removes angle-bracketed content.
pub fn strip_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut in_tag = false;

    for c in s.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }

    // Decode entities after stripping tags
    let decoded = decode_entities(&result);

    // Collapse whitespace (multiple spaces/newlines to single space)
    collapse_whitespace(&decoded)
}

/// Decodes common HTML entities to their character equivalents.
pub fn decode_entities(s: &str) -> String {
    let mut result = s.to_string();

    let entities = [
        ("&amp;", "&"),
        ("&lt;", "<"),
        ("&gt;", ">"),
        ("&quot;", "\""),
        ("&apos;", "'"),
        ("&#39;", "'"),
        ("&nbsp;", " "),
        ("&ndash;", "–"),
        ("&mdash;", "—"),
        ("&lsquo;", "'"),
        ("&rsquo;", "'"),
        ("&ldquo;", "\u{201C}"),
        ("&rdquo;", "\u{201D}"),
        ("&hellip;", "…"),
        ("&copy;", "©"),
        ("&reg;", "®"),
        ("&trade;", "™"),
        ("&bull;", "•"),
        ("&middot;", "·"),
    ];

    for (entity, replacement) in &entities {
        result = result.replace(entity, replacement);
    }

    // Handle numeric entities (decimal and hex)
    decode_numeric_entities(&result)
}

/// Decodes numeric HTML entities like &#123; and &#x7B;
fn decode_numeric_entities(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '&' && chars.peek() == Some(&'#') {
            chars.next(); // consume '#'
            let mut num_str = String::new();
            let is_hex = chars.peek() == Some(&'x') || chars.peek() == Some(&'X');

            if is_hex {
                chars.next(); // consume 'x' or 'X'
            }

            while let Some(&nc) = chars.peek() {
                if nc == ';' {
                    chars.next(); // consume ';'
                    break;
                }
                if is_hex && nc.is_ascii_hexdigit() {
                    num_str.push(nc);
                    chars.next();
                } else if !is_hex && nc.is_ascii_digit() {
                    num_str.push(nc);
                    chars.next();
                } else {
                    break;
                }
            }

            if !num_str.is_empty() {
                let code = if is_hex {
                    u32::from_str_radix(&num_str, 16).ok()
                } else {
                    num_str.parse::<u32>().ok()
                };

                if let Some(decoded_char) = code.and_then(char::from_u32) {
                    result.push(decoded_char);
                    continue;
                }
            }

            // Failed to decode, push original
            result.push('&');
            result.push('#');
            if is_hex {
                result.push('x');
            }
            result.push_str(&num_str);
        } else {
            result.push(c);
        }
    }

    result
}

/// Collapses multiple whitespace characters into single spaces.
fn collapse_whitespace(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut last_was_space = false;

    for c in s.chars() {
        if c.is_whitespace() {
            if !last_was_space {
                result.push(' ');
                last_was_space = true;
            }
        } else {
            result.push(c);
            last_was_space = false;
        }
    }

    result.trim().to_string()
}

/// Rewrites every `<a href=...>` in the HTML to open in a new tab with
/// `rel="noopener noreferrer"`. Anchors that already carry a target
/// attribute are left untouched; an existing rel attribute is extended
/// rather than replaced.
pub fn add_target_blank_to_links(html: &str) -> String {
    ANCHOR_WITH_HREF
        .replace_all(html, |caps: &Captures| {
            let attrs = &caps[1];
            if TARGET_ATTR.is_match(attrs) {
                return caps[0].to_string();
            }
            let attrs = if REL_ATTR.is_match(attrs) {
                REL_VALUE
                    .replace(attrs, r#"rel="$1 noopener noreferrer""#)
                    .into_owned()
            } else {
                format!(r#"{attrs} rel="noopener noreferrer""#)
            };
            format!(r#"<a {attrs} target="_blank">"#)
        })
        .into_owned()
}
