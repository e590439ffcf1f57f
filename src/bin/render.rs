//! Command-line gallery renderer.
//!
//! Renders the gallery of one post from a content snapshot, the same way the
//! server does, and prints the markup to stdout.
//!
//! # Usage
//!
//! ```bash
//! # Slideshow markup for post 1
//! galleria-render render --content content.json --post 1
//!
//! # Explicit ids and renderer options
//! galleria-render render --content content.json --post 1 ids=5,3,9 autoplay=1 captions=on_hidden
//!
//! # Feed markup
//! galleria-render render --content content.json --post 1 --feed
//!
//! # Full result as JSON (markup, images, config)
//! galleria-render render --content content.json --post 1 --json
//!
//! # What the snapshot holds
//! galleria-render inspect --content content.json
//! ```

use advanced_galleria::api::dto::gallery::GalleryResponse;
use advanced_galleria::domain::entities::settings::{
    LARGE_SIZE_OPTION, THEME_OPTION, THUMB_SIZE_OPTION,
};
use advanced_galleria::prelude::*;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Renders Galleria slideshows from a content snapshot.
#[derive(Parser)]
#[command(name = "galleria-render")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the gallery of a post
    Render {
        /// JSON content snapshot
        #[arg(short, long)]
        content: PathBuf,

        /// Post containing the gallery
        #[arg(short, long)]
        post: i64,

        /// Render for a feed (plain images, no script)
        #[arg(long)]
        feed: bool,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,

        /// Theme setting
        #[arg(long)]
        theme: Option<String>,

        /// Thumbnail size setting
        #[arg(long)]
        thumb_size: Option<String>,

        /// Large size setting
        #[arg(long)]
        large_size: Option<String>,

        /// Shortcode attributes as key=value
        #[arg(value_parser = parse_attribute)]
        attributes: Vec<(String, String)>,
    },

    /// Summarize the posts and attachments in a snapshot
    Inspect {
        /// JSON content snapshot
        #[arg(short, long)]
        content: PathBuf,
    },
}

fn parse_attribute(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected key=value, got '{raw}'")),
    }
}

fn load(content: &PathBuf) -> Result<MemoryAttachmentRepository> {
    MemoryAttachmentRepository::from_json_file(content)
        .with_context(|| format!("Failed to load {}", content.display()))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            content,
            post,
            feed,
            json,
            theme,
            thumb_size,
            large_size,
            attributes,
        } => {
            let seeds = [
                (THEME_OPTION, theme),
                (THUMB_SIZE_OPTION, thumb_size),
                (LARGE_SIZE_OPTION, large_size),
            ]
            .into_iter()
            .filter_map(|(key, value)| value.map(|v| (key, v)));

            render(
                load(&content)?,
                MemoryOptionStore::seeded(seeds),
                post,
                feed,
                json,
                attributes,
            )
            .await?
        }
        Commands::Inspect { content } => inspect(load(&content)?).await?,
    }

    Ok(())
}

async fn render(
    repository: MemoryAttachmentRepository,
    options: MemoryOptionStore,
    post: i64,
    feed: bool,
    json: bool,
    attributes: Vec<(String, String)>,
) -> Result<()> {
    if repository.find_post(post).await.is_none() {
        bail!("Post {post} not found");
    }

    let service = GalleryService::new(Arc::new(repository), Arc::new(options));
    let request: ShortcodeRequest = attributes.into_iter().collect();
    let context = if feed {
        RenderContext::feed(post)
    } else {
        RenderContext::interactive(post)
    };

    let rendered = service.render(&request, context).await;

    if rendered.outcome == GalleryOutcome::Empty {
        eprintln!("{}", format!("Post {post} has no gallery images").yellow());
    }

    if json {
        let response = GalleryResponse::new(post, rendered);
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else if !rendered.html.is_empty() {
        println!("{}", rendered.html);
    }

    Ok(())
}

async fn inspect(repository: MemoryAttachmentRepository) -> Result<()> {
    let snapshot = repository.snapshot().await;

    println!("{}", "Content snapshot".bright_blue().bold());
    println!();

    if snapshot.posts.is_empty() {
        println!("{}", "  No posts found".yellow());
        return Ok(());
    }

    println!(
        "  {:<8} {:<32} {:<12} {}",
        "ID".bright_white().bold(),
        "Title".bright_white().bold(),
        "Images".bright_white().bold(),
        "Featured".bright_white().bold()
    );
    println!("  {}", "─".repeat(64).bright_black());

    for post in &snapshot.posts {
        let images = snapshot
            .attachments
            .iter()
            .filter(|a| a.parent_id == post.id && a.mime_type.starts_with("image/"))
            .count();
        let featured = post
            .featured_image_id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "-".to_string());

        println!(
            "  {:<8} {:<32} {:<12} {}",
            post.id.to_string().cyan(),
            post.title,
            images,
            featured
        );
    }

    println!();
    println!(
        "  {} posts, {} attachments",
        snapshot.posts.len().to_string().green(),
        snapshot.attachments.len().to_string().green()
    );

    Ok(())
}
