//! Print command
//!
//! Write the rendered feed to stdout.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Args;
use colored::Colorize;
use feed_core::post::LineKind;
use feed_core::{Feed, PostContainer};
use std::fmt::Write;

use super::CommandContext;

/// Arguments for the print command
#[derive(Debug, Args)]
pub struct PrintArgs {
    /// Reference time for relative timestamps (RFC 3339); defaults to now
    #[arg(long, value_parser = parse_now)]
    pub now: Option<DateTime<Utc>>,

    /// Print the posts as JSON instead
    #[arg(long)]
    pub json: bool,
}

fn parse_now(s: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| format!("invalid RFC 3339 timestamp: {}", e))
}

/// Execute the print command
pub fn execute(args: PrintArgs, context: &CommandContext) -> Result<()> {
    let config = context.config()?;
    let feed = context.feed(&config)?;

    if args.json {
        let posts: Vec<_> = feed.containers().iter().map(PostContainer::post).collect();
        let json = serde_json::to_string_pretty(&posts).context("Failed to serialize posts")?;
        println!("{}", json);
        return Ok(());
    }

    let now = args.now.unwrap_or_else(Utc::now);
    print!("{}", render_feed(&feed, now));
    Ok(())
}

/// Render every post as plain (optionally colored) text
pub fn render_feed(feed: &Feed, now: DateTime<Utc>) -> String {
    let mut out = String::new();
    for container in feed.containers() {
        render_post(&mut out, container, now);
        out.push('\n');
    }
    out
}

fn render_post(out: &mut String, container: &PostContainer, now: DateTime<Utc>) {
    let author = &container.post().author;

    let _ = writeln!(out, "{} {}", format!("[{}]", author.initials()).green(), author.name.bold());
    let _ = writeln!(
        out,
        "{} · {}",
        author.role.dimmed(),
        container.published_relative(now).dimmed()
    );
    let _ = writeln!(out, "{}", container.published_formatted().dimmed());
    out.push('\n');

    for line in container.rendered_content() {
        match line.kind {
            LineKind::Text => {
                let _ = writeln!(out, "{}", line.text);
            }
            LineKind::Link => {
                let _ = writeln!(out, "{}", line.text.green().underline());
            }
        }
    }

    let comments = container.comments();
    if !comments.is_empty() {
        out.push('\n');
        for comment in comments {
            let _ = writeln!(out, "  ▌ {}", comment);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use feed_core::post::default_posts;

    fn fixed_now() -> DateTime<Utc> {
        parse_now("2024-05-06T08:00:00-03:00").unwrap()
    }

    #[test]
    fn test_parse_now() {
        assert!(parse_now("2024-05-06T08:00:00Z").is_ok());
        assert!(parse_now("yesterday").is_err());
    }

    #[test]
    fn test_render_feed() {
        colored::control::set_override(false);
        let feed = Feed::new(default_posts()).unwrap();
        let text = render_feed(&feed, fixed_now());

        assert!(text.contains("[FD] Felipe Dantas"));
        assert!(text.contains("Frontend Developer · há 3 dias"));
        assert!(text.contains("3 de maio às 08:00h"));
        assert!(text.contains("github.com/maykbrito"));
        assert!(text.contains("Mayk Brito"));
    }

    #[test]
    fn test_render_includes_comments() {
        colored::control::set_override(false);
        let mut feed = Feed::new(default_posts()).unwrap();
        let container = feed.get_mut(0).unwrap();
        container.update_draft("nice!");
        container.submit().unwrap();

        let text = render_feed(&feed, fixed_now());
        assert!(text.contains("  ▌ nice!"));
    }
}
