// ABOUTME: CLI for the callboard episode pipeline.
// ABOUTME: Loads the podcast feed from URL/file/stdin and prints episode queries as JSON.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{anyhow, Context, Result};
use callboard_feed::{
    add_target_blank_to_links, all_collections, collection_by_id, parse_feed_bytes,
    resolve_members, strip_html, EpisodeRepository, PodcastMetadata, SortOrder, DEFAULT_FEED_URL,
};
use clap::Parser;
use serde_json::json;

/// Query the podcast feed and print normalized episodes as JSON.
#[derive(Parser, Debug)]
#[command(name = "callboard-cli")]
#[command(about = "Fetch and query normalized podcast episodes", long_about = None)]
struct Args {
    /// Feed URL (http/https) or local file path. Use "-" to read from stdin.
    #[arg(long, default_value = DEFAULT_FEED_URL)]
    feed: String,

    /// Print only the most recent episode.
    #[arg(long, conflicts_with_all = ["recent", "query", "episode", "collection"])]
    latest: bool,

    /// Print the N most recent episodes.
    #[arg(long, value_name = "N", conflicts_with_all = ["query", "episode", "collection"])]
    recent: Option<usize>,

    /// Search episodes by title, description, or guest name.
    #[arg(long, value_name = "Q", conflicts_with_all = ["episode", "collection"])]
    query: Option<String>,

    /// Print one episode by slug or id.
    #[arg(long, value_name = "ID_OR_SLUG", conflicts_with = "collection")]
    episode: Option<String>,

    /// Print one collection and its member episodes.
    #[arg(long, value_name = "ID")]
    collection: Option<String>,

    /// Print channel-level podcast metadata instead of episodes.
    #[arg(long, conflicts_with_all = ["latest", "recent", "query", "episode", "collection"])]
    metadata: bool,

    /// Page size for the default listing.
    #[arg(long, default_value_t = 10)]
    limit: i64,

    /// Page offset for the default listing.
    #[arg(long, default_value_t = 0)]
    offset: i64,

    /// Sort order for the default listing.
    #[arg(long, value_parser = ["newest", "oldest"], default_value = "newest")]
    sort: String,

    /// Output compact JSON instead of pretty.
    #[arg(long, default_value_t = false)]
    compact: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let bytes = load_bytes(&args.feed).context("Unable to load episodes")?;
    let feed = parse_feed_bytes(&bytes).context("Unable to load episodes")?;
    let repo = EpisodeRepository::from_feed(&feed);

    let output = if args.metadata {
        let podcast = PodcastMetadata::from_feed(&feed);
        // Plain-text excerpt, the way the site builds meta descriptions
        let excerpt = strip_html(&podcast.description);
        json!({ "podcast": podcast, "excerpt": excerpt })
    } else if args.latest {
        json!({ "episode": repo.latest() })
    } else if let Some(n) = args.recent {
        json!({ "episodes": repo.recent(n) })
    } else if let Some(query) = &args.query {
        json!({ "episodes": repo.search(query), "hasMore": false })
    } else if let Some(key) = &args.episode {
        let mut episode = repo
            .by_slug_or_id(key)
            .ok_or_else(|| anyhow!("Episode not found: {key}"))?
            .clone();
        // Detail view applies the render-time link transform
        episode.description = add_target_blank_to_links(&episode.description);
        json!({ "episode": episode })
    } else if let Some(id) = &args.collection {
        let collection =
            collection_by_id(id).ok_or_else(|| anyhow!("Collection not found: {id}"))?;
        let members = resolve_members(collection, repo.all());
        let (prev, next) = callboard_feed::adjacent(all_collections(), id)
            .ok_or_else(|| anyhow!("Collection not found: {id}"))?;
        json!({
            "collection": collection,
            "episodes": members,
            "prev": prev.id,
            "next": next.id,
        })
    } else {
        let order = match args.sort.as_str() {
            "oldest" => SortOrder::OldestFirst,
            _ => SortOrder::NewestFirst,
        };
        let page = repo.paginate(order, args.offset, args.limit);
        json!({
            "episodes": page.episodes,
            "hasMore": page.has_more,
            "total": page.total,
        })
    };

    if args.compact {
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("{}", serde_json::to_string_pretty(&output)?);
    }

    Ok(())
}

fn load_bytes(target: &str) -> Result<Vec<u8>> {
    if target == "-" {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf)?;
        return Ok(buf);
    }

    if target.starts_with("http://") || target.starts_with("https://") {
        let resp = reqwest::blocking::get(target)?.error_for_status()?;
        let bytes = resp.bytes()?;
        return Ok(bytes.to_vec());
    }

    let path = PathBuf::from(target);
    if !path.exists() {
        return Err(anyhow!("file not found: {}", target));
    }
    Ok(fs::read(path)?)
}
