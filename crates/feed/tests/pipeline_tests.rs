// ABOUTME: Integration tests for the full feed pipeline.
// ABOUTME: Raw RSS bytes through parsing, normalization, and repository queries.

use callboard_feed::{
    collection_by_id, parse_feed_bytes, resolve_members, EpisodeRepository, SortOrder,
};
use pretty_assertions::assert_eq;

const FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:itunes="http://www.itunes.com/dtds/podcast-1.0.dtd" xmlns:content="http://purl.org/rss/1.0/modules/content/">
    <channel>
        <title>Backstage Stories</title>
        <description>Conversations from the wings.</description>
        <itunes:author>Backstage Media</itunes:author>
        <itunes:image href="https://cdn.example.com/cover.jpg"/>
        <item>
            <title>#401 - Jane Doe: Cursed Child Begins</title>
            <guid isPermaLink="false">guid-401</guid>
            <pubDate>Mon, 15 Jan 2024 10:00:00 +0000</pubDate>
            <description>Jane on joining the company.</description>
            <content:encoded><![CDATA[<p>Jane on joining the company of Wicked.</p><p>Learn more about your ad choices. Visit megaphone.fm/adchoices</p>]]></content:encoded>
            <enclosure url="https://cdn.example.com/401.mp3" type="audio/mpeg" length="1000"/>
            <itunes:duration>45:30</itunes:duration>
            <itunes:episode>401</itunes:episode>
        </item>
        <item>
            <title>#402 - Alex Smith and Jordan Lee: Double Act</title>
            <guid isPermaLink="false">guid-402</guid>
            <pubDate>Mon, 22 Jan 2024 10:00:00 +0000</pubDate>
            <description><![CDATA[Two guests, one stage. Learn more about your ad choices. Visit <a href="https://megaphone.fm/adchoices">megaphone.fm/adchoices</a>]]></description>
            <enclosure url="https://cdn.example.com/402.mp3" type="audio/mpeg" length="1000"/>
            <itunes:duration>01:02:03</itunes:duration>
            <itunes:episode>402</itunes:episode>
        </item>
        <item>
            <title>BONUS: Opening Night Special</title>
            <guid isPermaLink="false">guid-bonus</guid>
            <pubDate>Wed, 17 Jan 2024 10:00:00 +0000</pubDate>
            <description>A quick dispatch from the lobby.</description>
            <enclosure url="https://cdn.example.com/bonus.mp3" type="audio/mpeg" length="1000"/>
        </item>
        <item>
            <title>Cereal: Part of a Broadway-Lover's Balanced Breakfast (part 1)</title>
            <guid isPermaLink="false">guid-cereal</guid>
            <pubDate>Tue, 16 Jan 2024 10:00:00 +0000</pubDate>
            <description>Awards season, in milk.</description>
            <enclosure url="https://cdn.example.com/cereal.mp3" type="audio/mpeg" length="1000"/>
        </item>
    </channel>
</rss>"#;

fn build_repo() -> EpisodeRepository {
    let feed = parse_feed_bytes(FEED.as_bytes()).unwrap();
    EpisodeRepository::from_feed(&feed)
}

#[test]
fn test_episodes_sorted_newest_first() {
    let repo = build_repo();
    let titles: Vec<&str> = repo.all().iter().map(|ep| ep.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "#402 - Alex Smith and Jordan Lee: Double Act",
            "BONUS: Opening Night Special",
            "Cereal: Part of a Broadway-Lover's Balanced Breakfast (part 1)",
            "#401 - Jane Doe: Cursed Child Begins",
        ]
    );
}

#[test]
fn test_slug_and_guest_extraction() {
    let repo = build_repo();

    let ep = repo.by_id("guid-401").unwrap();
    assert_eq!(ep.slug, "jane-doe-401");
    assert_eq!(ep.guests.len(), 1);
    assert_eq!(ep.guests[0].name, "Jane Doe");
    assert_eq!(ep.episode_number, Some(401));
    assert_eq!(ep.duration, 2730);

    let ep = repo.by_id("guid-402").unwrap();
    assert_eq!(ep.slug, "alex-smith-jordan-lee-402");
    let names: Vec<&str> = ep.guests.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, vec!["Alex Smith", "Jordan Lee"]);
    assert_eq!(ep.duration, 3723);

    let bonus = repo.by_id("guid-bonus").unwrap();
    assert!(bonus.guests.is_empty());
    assert_eq!(bonus.slug, "bonus-opening-night-special");
}

#[test]
fn test_boilerplate_removed_in_both_forms() {
    let repo = build_repo();

    let ep = repo.by_id("guid-401").unwrap();
    assert_eq!(
        ep.description,
        "<p>Jane on joining the company of Wicked.</p>"
    );

    let ep = repo.by_id("guid-402").unwrap();
    assert_eq!(ep.description, "Two guests, one stage.");
}

#[test]
fn test_channel_image_fallback() {
    let repo = build_repo();
    // No per-item itunes:image on any item, so all inherit the channel image
    for ep in repo.all() {
        assert_eq!(ep.image_url, "https://cdn.example.com/cover.jpg");
    }
}

#[test]
fn test_lookup_by_slug_or_id() {
    let repo = build_repo();
    assert_eq!(
        repo.by_slug_or_id("jane-doe-401").unwrap().id,
        "guid-401"
    );
    assert_eq!(
        repo.by_slug_or_id("guid-401").unwrap().slug,
        "jane-doe-401"
    );
    assert!(repo.by_slug_or_id("nope").is_none());
}

#[test]
fn test_search_over_title_description_guests() {
    let repo = build_repo();

    // Description hit
    let hits = repo.search("wicked");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "guid-401");

    // Guest-name hit, case-insensitive
    let hits = repo.search("jordan lee");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "guid-402");

    // Title hit
    let hits = repo.search("OPENING NIGHT");
    assert_eq!(hits.len(), 1);
}

#[test]
fn test_pagination_envelope() {
    let repo = build_repo();

    let page = repo.paginate(SortOrder::NewestFirst, 0, 3);
    assert_eq!(page.episodes.len(), 3);
    assert!(page.has_more);
    assert_eq!(page.total, 4);

    let page = repo.paginate(SortOrder::NewestFirst, 3, 3);
    assert_eq!(page.episodes.len(), 1);
    assert!(!page.has_more);

    let page = repo.paginate(SortOrder::OldestFirst, 0, 1);
    assert_eq!(page.episodes[0].id, "guid-401");
}

#[test]
fn test_collection_membership_from_live_feed() {
    let repo = build_repo();

    let potter = collection_by_id("harry-potter-takeover").unwrap();
    let members = resolve_members(potter, repo.all());
    let ids: Vec<&str> = members.iter().map(|ep| ep.id.as_str()).collect();
    // 401 and 402 by episode number, in episode-list order (newest first)
    assert_eq!(ids, vec!["guid-402", "guid-401"]);

    let tonys = collection_by_id("tonys-2019").unwrap();
    let members = resolve_members(tonys, repo.all());
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].id, "guid-cereal");
}
