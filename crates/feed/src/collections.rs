// ABOUTME: Curated episode collections compiled into the binary.
// ABOUTME: Membership resolution against the live episode list plus circular navigation.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::models::Episode;

/// A hand-curated grouping of episodes around one production or theme.
///
/// `episode_ids` entries are matched loosely: an episode number, an exact
/// slug, or (for non-numeric entries) a title substring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub episode_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

fn collection(
    id: &str,
    title: &str,
    description: &str,
    image_url: &str,
    episode_ids: &[&str],
    color: &str,
) -> Collection {
    Collection {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        image_url: image_url.to_string(),
        episode_ids: episode_ids.iter().map(|s| s.to_string()).collect(),
        color: Some(color.to_string()),
    }
}

/// The curated collection list, in display order.
pub static COLLECTIONS: Lazy<Vec<Collection>> = Lazy::new(|| {
    vec![
        collection(
            "harry-potter-takeover",
            "'Harry Potter and the Cursed Child' Takeover",
            "Episodes featuring the cast and creative team of Harry Potter and the Cursed Child",
            "/images/collections/harry-potter-and-the-cursed-child-takeover-the-theatre-podcast-with-alan-seales-1-400x400.jpg",
            &["401", "402", "403", "404", "405", "406", "407"],
            "#740001",
        ),
        collection(
            "outsiders-takeover",
            "'The Outsiders' Takeover",
            "Episodes featuring the cast and creative team of The Outsiders",
            "/images/collections/the-outsiders-takeover-the-theatre-podcast-1-400x400.jpg",
            &[
                "323",
                "324",
                "325",
                "326",
                "327",
                "328",
                "329",
                "bonus-the-outsiders-press-junket-with-cast-and-cre",
            ],
            "#1a5f7a",
        ),
        collection(
            "kite-runner-takeover",
            "'The Kite Runner' Takeover",
            "Episodes featuring the cast and creative team of The Kite Runner",
            "/images/collections/the-kite-runner-takeover-the-theatre-podcast-1-400x400.jpg",
            &["210", "221", "222", "223", "224", "225", "226"],
            "#c41e3a",
        ),
        collection(
            "back-to-the-future-takeover",
            "'Back to the Future' Takeover",
            "Episodes featuring the cast and creative team of Back to the Future",
            "/images/collections/back-to-the-future-takeover-the-theatre-podcast-with-alan-seales-1-400x400.jpg",
            &["290", "291", "292", "293", "350", "352"],
            "#ff6b35",
        ),
        collection(
            "juliet-takeover",
            "'& Juliet' Takeover",
            "Episodes featuring the cast and creative team of & Juliet",
            "/images/collections/juliet-takeover-the-theatre-podcast-with-alan-seales-1-400x400.jpg",
            &["265", "266", "267", "268", "269"],
            "#e91e63",
        ),
        collection(
            "up-here-takeover",
            "'Up Here' Takeover",
            "Episodes featuring the cast and creative team of Hulu's Up Here",
            "/images/collections/hulu-s-up-here-takeover-the-theatre-podcast-with-alan-seales-1-400x400.jpg",
            &["259", "260", "261", "262"],
            "#f4a261",
        ),
        collection(
            "wicked-takeover",
            "'Wicked' Takeover",
            "Episodes featuring the cast and creative team of Wicked",
            "/images/collections/wicked-takeover-the-theatre-podcast-with-alan-seales-1-400x400.jpg",
            &["229", "230", "233", "234"],
            "#2d6a4f",
        ),
        collection(
            "hadestown-takeover",
            "'Hadestown' Takeover",
            "Episodes featuring the cast and creative team of Hadestown",
            "/images/collections/hadestown-takeover-the-theatre-podcast-with-alan-seales-1-400x400.jpg",
            &["193", "194", "196", "198", "199"],
            "#8b4513",
        ),
        collection(
            "freestyle-love-supreme-takeover",
            "'Freestyle Love Supreme' Takeover",
            "Episodes featuring the cast of Freestyle Love Supreme",
            "/images/collections/freestyle-love-supreme-takeover-the-theatre-podcast-with-alan-seales-1-400x400.jpg",
            &["164", "165", "166", "167"],
            "#4a90e2",
        ),
        collection(
            "bleeding-love-takeover",
            "'Bleeding Love' Takeover",
            "Episodes featuring the cast and creative team of Bleeding Love",
            "/images/collections/bleeding-love-takeover-the-theatre-podcast-with-alan-seales-3-400x400.jpg",
            &["95", "96", "97", "98", "99"],
            "#d32f2f",
        ),
        collection(
            "six-takeover",
            "'SIX' Quaranqueen Takeover",
            "Episodes featuring the queens of SIX the Musical",
            "/images/collections/six-quaranqueen-takeover-the-theatre-podcast-with-alan-seales-1-400x400.jpg",
            &["86", "87", "88", "89", "90", "91", "92", "93"],
            "#9c27b0",
        ),
        collection(
            "moulin-rouge-takeover",
            "'Moulin Rouge' Takeover",
            "Episodes featuring the cast and creative team of Moulin Rouge",
            "/images/collections/moulin-rouge-takeover-the-theatre-podcast-with-alan-seales-1-400x400.jpg",
            &["72", "73", "74", "75", "76"],
            "#c41e3a",
        ),
        collection(
            "beetlejuice-takeover",
            "'Beetlejuice' Takeover",
            "Episodes featuring the cast and creative team of Beetlejuice",
            "/images/collections/beetlejuice-takeover-the-theatre-podcast-with-alan-seales-1-400x400.jpg",
            &[
                "51",
                "52",
                "ep52-alex-timbers-part-2-tony-nominated-director-w",
                "53",
                "54",
                "ep54-alex-brightman-part-2-beetlejuice-school-of-r",
            ],
            "#4a148c",
        ),
        collection(
            "prom-takeover",
            "'The Prom' Takeover",
            "Episodes featuring the cast and creative team of The Prom",
            "/images/collections/the-prom-takeover-the-theatre-podcast-with-alan-seales-1-400x400.jpg",
            &["31", "33", "34", "35", "36"],
            "#e91e63",
        ),
        collection(
            "frozen-takeover",
            "'Frozen' Takeover",
            "Episodes featuring the cast and creative team of Frozen",
            "/images/collections/frozen-takeover-the-theatre-podcast-with-alan-seales-1-400x400.jpg",
            &["21", "22", "24", "25"],
            "#64b5f6",
        ),
        collection(
            "tonys-2019",
            "Inside the 2019 Awards Season",
            "Episodes covering the 2019 Tony Awards season",
            "/images/collections/inside-the-2019-awards-season-1-400x400.jpg",
            &["Cereal: Part of a Broadway-Lover"],
            "#ffd700",
        ),
    ]
});

pub fn all_collections() -> &'static [Collection] {
    &COLLECTIONS
}

pub fn collection_by_id(id: &str) -> Option<&'static Collection> {
    COLLECTIONS.iter().find(|c| c.id == id)
}

/// Resolves a collection's members against the live episode list.
///
/// An episode belongs when its episode number (as a string) or slug appears
/// in `episode_ids`, or when a non-numeric entry occurs as a substring of
/// its title. Member order follows the episode list, not the id list.
pub fn resolve_members<'a>(collection: &Collection, episodes: &'a [Episode]) -> Vec<&'a Episode> {
    episodes
        .iter()
        .filter(|ep| is_member(collection, ep))
        .collect()
}

fn is_member(collection: &Collection, episode: &Episode) -> bool {
    if let Some(num) = episode.episode_number {
        if collection.episode_ids.iter().any(|id| *id == num.to_string()) {
            return true;
        }
    }
    if collection.episode_ids.iter().any(|id| *id == episode.slug) {
        return true;
    }
    collection.episode_ids.iter().any(|id| {
        !id.chars().all(|c| c.is_ascii_digit()) && episode.title.contains(id.as_str())
    })
}

/// The collections before and after the given one, wrapping circularly.
/// Returns None when the id is unknown.
pub fn adjacent(collections: &[Collection], id: &str) -> Option<(Collection, Collection)> {
    let index = collections.iter().position(|c| c.id == id)?;
    let len = collections.len();
    let prev = collections[(index + len - 1) % len].clone();
    let next = collections[(index + 1) % len].clone();
    Some((prev, next))
}
