// ABOUTME: Raw XML pass over iTunes podcast extensions not exposed by feed-rs.
// ABOUTME: Extracts duration, image, explicit, episode/season numbers, guid, and pubDate.

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use std::collections::HashMap;

/// iTunes metadata extracted at the channel level.
#[derive(Debug, Default, Clone)]
pub struct ChannelExt {
    /// Channel-level itunes:image href attribute.
    pub image_href: Option<String>,
    /// Channel-level itunes:author text content.
    pub author: Option<String>,
    /// Channel-level itunes:explicit text content.
    pub explicit: Option<String>,
}

/// Per-item metadata extracted from the raw XML.
#[derive(Debug, Default, Clone)]
pub struct ItemExt {
    /// The item's own guid text, as written in the document. Kept separate
    /// from feed-rs ids, which are synthesized when the feed omits a guid.
    pub guid: Option<String>,
    /// Raw pubDate text, for the flexible-time fallback.
    pub pub_date: Option<String>,
    pub image_href: Option<String>,
    pub duration: Option<String>,
    pub explicit: Option<String>,
    pub episode: Option<String>,
    pub season: Option<String>,
}

/// Extensions for a whole feed: channel metadata plus per-item records
/// keyed by guid, with positional fallback for guid-less items.
#[derive(Debug, Default, Clone)]
pub struct ParsedExtensions {
    pub channel: ChannelExt,
    pub items: HashMap<String, ItemExt>,
    pub items_by_index: Vec<ItemExt>,
}

impl ParsedExtensions {
    /// Looks up an item's extensions by guid, falling back to position.
    pub fn item(&self, guid: &str, index: usize) -> Option<&ItemExt> {
        self.items.get(guid).or_else(|| self.items_by_index.get(index))
    }
}

/// Parses iTunes extensions from raw RSS XML bytes.
/// This extracts data that feed-rs doesn't properly expose.
pub fn parse_itunes_extensions(data: &[u8]) -> ParsedExtensions {
    let mut result = ParsedExtensions::default();
    let mut reader = Reader::from_reader(data);
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();

    let mut in_channel = false;
    let mut in_item = false;
    let mut current_item = ItemExt::default();
    let mut current_element: Option<String> = None;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                let local_name = name.split(':').next_back().unwrap_or(&name);

                match local_name {
                    "channel" => in_channel = true,
                    "item" | "entry" => {
                        in_item = true;
                        current_item = ItemExt::default();
                    }
                    "guid" | "id" if in_item => {
                        current_element = Some("guid".to_string());
                    }
                    "pubDate" if in_item => {
                        current_element = Some("pubDate".to_string());
                    }
                    _ => {}
                }

                if let Some(itunes_name) = name.strip_prefix("itunes:") {
                    match itunes_name {
                        "image" => {
                            // itunes:image uses an href attribute
                            if let Some(href) = get_attribute(e, "href") {
                                if in_item {
                                    current_item.image_href = Some(href);
                                } else if in_channel {
                                    result.channel.image_href = Some(href);
                                }
                            }
                        }
                        "author" | "duration" | "explicit" | "episode" | "season" => {
                            current_element = Some(itunes_name.to_string());
                        }
                        _ => {}
                    }
                }
            }
            Ok(Event::Text(ref e)) => {
                if let Some(ref elem) = current_element {
                    let text = e.decode().map(|s| s.into_owned()).unwrap_or_default();
                    if !text.is_empty() {
                        match elem.as_str() {
                            "guid" if in_item => current_item.guid = Some(text),
                            "pubDate" if in_item => current_item.pub_date = Some(text),
                            "duration" if in_item => current_item.duration = Some(text),
                            "episode" if in_item => current_item.episode = Some(text),
                            "season" if in_item => current_item.season = Some(text),
                            "author" => {
                                if in_channel && !in_item {
                                    result.channel.author = Some(text);
                                }
                            }
                            "explicit" => {
                                if in_item {
                                    current_item.explicit = Some(text);
                                } else if in_channel {
                                    result.channel.explicit = Some(text);
                                }
                            }
                            _ => {}
                        }
                    }
                }
            }
            Ok(Event::End(ref e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                let local_name = name.split(':').next_back().unwrap_or(&name);

                match local_name {
                    "channel" => in_channel = false,
                    "item" | "entry" => {
                        let key = current_item
                            .guid
                            .clone()
                            .unwrap_or_else(|| format!("__index_{}", result.items_by_index.len()));
                        result.items.insert(key, current_item.clone());
                        result.items_by_index.push(current_item.clone());
                        in_item = false;
                    }
                    _ => {}
                }

                if name.starts_with("itunes:")
                    || local_name == "guid"
                    || local_name == "id"
                    || local_name == "pubDate"
                {
                    current_element = None;
                }
            }
            Ok(Event::Eof) => break,
            Err(_) => break,
            _ => {}
        }
        buf.clear();
    }

    result
}

/// Gets an attribute value from an XML element.
fn get_attribute(e: &BytesStart, name: &str) -> Option<String> {
    for attr in e.attributes().flatten() {
        let key = String::from_utf8_lossy(attr.key.as_ref());
        if key == name {
            return Some(String::from_utf8_lossy(&attr.value).to_string());
        }
    }
    None
}

/// Checks if an explicit flag value marks the content explicit.
/// True for case-insensitive "yes", "true", "explicit".
pub fn is_explicit(value: Option<&str>) -> bool {
    value
        .map(|v| {
            let lower = v.to_lowercase();
            lower == "yes" || lower == "true" || lower == "explicit"
        })
        .unwrap_or(false)
}
