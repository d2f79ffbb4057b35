//! Built-in posts shown when no feed file is configured

use super::model::{Author, ContentLine, Post};
use crate::types::PostId;
use chrono::{DateTime, FixedOffset};

fn published(rfc3339: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(rfc3339).unwrap_or_default()
}

/// The default feed
pub fn default_posts() -> Vec<Post> {
    vec![
        Post::new(
            PostId(1),
            Author::new(
                "Felipe Dantas",
                "Frontend Developer",
                "https://github.com/feliperbdantas.png",
            ),
            vec![
                ContentLine::paragraph("Fala galera 👋"),
                ContentLine::paragraph("Acabei de subir mais um projeto no meu portifólio."),
                ContentLine::link("github.com/feliperbdantas"),
            ],
            published("2024-05-03T08:00:00-03:00"),
        ),
        Post::new(
            PostId(2),
            Author::new(
                "Mayk Brito",
                "Educator @Rocketseat",
                "https://github.com/maykbrito.png",
            ),
            vec![
                ContentLine::paragraph("Fala galera 👋"),
                ContentLine::paragraph("Acabei de subir mais um projeto no meu portifólio."),
                ContentLine::link("github.com/maykbrito"),
            ],
            published("2024-05-06T18:00:00-03:00"),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_posts() {
        let posts = default_posts();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].id, PostId(1));
        assert_eq!(posts[1].author.name, "Mayk Brito");
        assert!(posts.iter().all(|p| p.content.len() == 3));
    }

    #[test]
    fn test_seed_timestamps_keep_local_wall_clock() {
        let posts = default_posts();
        assert_eq!(posts[0].published_at.to_rfc3339(), "2024-05-03T08:00:00-03:00");
        assert_eq!(posts[1].published_at.to_rfc3339(), "2024-05-06T18:00:00-03:00");
    }

    #[test]
    fn test_every_seed_timestamp_parses() {
        // A mistyped literal would fall back to the epoch
        for post in default_posts() {
            assert_ne!(post.published_at, DateTime::<FixedOffset>::default(), "post {}", post.id);
            assert_eq!(post.published_at.offset().local_minus_utc(), -3 * 3600, "post {}", post.id);
        }
    }
}
