//! Loading posts from feed files

use super::model::Post;
use crate::error::{FeedError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

/// On-disk layout of a feed file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedFile {
    /// Posts in display order
    #[serde(default)]
    pub posts: Vec<Post>,
}

/// Supported feed file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedFormat {
    Json,
    Toml,
}

impl FeedFormat {
    /// Pick a format from the file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(FeedFormat::Json),
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(FeedFormat::Toml),
            other => Err(FeedError::Config(format!(
                "Unsupported feed file extension: {}",
                other.unwrap_or("<none>")
            ))),
        }
    }
}

/// Parse feed file content
pub fn parse_feed(content: &str, format: FeedFormat) -> Result<Vec<Post>> {
    let file: FeedFile = match format {
        FeedFormat::Json => serde_json::from_str(content)?,
        FeedFormat::Toml => toml::from_str(content)?,
    };
    Ok(file.posts)
}

/// Load posts from a JSON or TOML feed file
pub fn load_feed(path: &Path) -> Result<Vec<Post>> {
    if !path.exists() {
        return Err(FeedError::FileNotFound(path.to_path_buf()));
    }

    let format = FeedFormat::from_path(path)?;
    let content = fs::read_to_string(path)?;
    let posts = parse_feed(&content, format)
        .map_err(|e| e.with_context(format!("Failed to parse feed {}", path.display())))?;

    info!("Loaded {} posts from {:?}", posts.len(), path);
    Ok(posts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::post::model::ContentLine;
    use crate::types::PostId;
    use pretty_assertions::assert_eq;

    const JSON_FEED: &str = r#"{
        "posts": [
            {
                "id": 10,
                "author": { "name": "Ana", "role": "Dev", "avatarUrl": "https://example.com/a.png" },
                "content": [
                    { "type": "paragraph", "content": "hello" },
                    { "type": "embed", "content": "ignored" },
                    { "type": "link", "text": "example.com" }
                ],
                "publishedAt": "2024-01-02T10:00:00Z"
            }
        ]
    }"#;

    const TOML_FEED: &str = r#"
[[posts]]
id = 3
publishedAt = "2024-05-06T18:00:00-03:00"

[posts.author]
name = "Mayk Brito"
role = "Educator @Rocketseat"
avatarUrl = "https://github.com/maykbrito.png"

[[posts.content]]
type = "paragraph"
text = "Fala galera"

[[posts.content]]
type = "link"
text = "github.com/maykbrito"
"#;

    #[test]
    fn test_parse_json_feed() {
        let posts = parse_feed(JSON_FEED, FeedFormat::Json).unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, PostId(10));
        assert_eq!(
            posts[0].content,
            vec![
                ContentLine::paragraph("hello"),
                ContentLine::Unknown,
                ContentLine::link("example.com"),
            ]
        );
    }

    #[test]
    fn test_parse_toml_feed() {
        let posts = parse_feed(TOML_FEED, FeedFormat::Toml).unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].author.name, "Mayk Brito");
        assert_eq!(posts[0].content[1], ContentLine::link("github.com/maykbrito"));
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(FeedFormat::from_path(Path::new("a.json")).unwrap(), FeedFormat::Json);
        assert_eq!(FeedFormat::from_path(Path::new("a.TOML")).unwrap(), FeedFormat::Toml);
        assert!(matches!(
            FeedFormat::from_path(Path::new("a.yaml")),
            Err(FeedError::Config(_))
        ));
        assert!(FeedFormat::from_path(Path::new("feed")).is_err());
    }

    #[test]
    fn test_load_feed_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("posts.json");
        fs::write(&path, JSON_FEED).unwrap();

        let posts = load_feed(&path).unwrap();
        assert_eq!(posts[0].author.name, "Ana");
    }

    #[test]
    fn test_load_missing_feed() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_feed(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, FeedError::FileNotFound(_)));
    }

    #[test]
    fn test_load_malformed_feed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("posts.json");
        fs::write(&path, "{ not json").unwrap();

        let err = load_feed(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse feed"));
    }
}
