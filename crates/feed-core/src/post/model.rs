//! Post data models

use crate::types::PostId;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Author of a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    /// Display name
    pub name: String,
    /// Role or headline
    pub role: String,
    /// Avatar image URL
    pub avatar_url: String,
}

impl Author {
    /// Create a new author
    pub fn new(
        name: impl Into<String>,
        role: impl Into<String>,
        avatar_url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            avatar_url: avatar_url.into(),
        }
    }

    /// Initials used in place of the avatar image
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// One line of a post body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentLine {
    /// Plain text paragraph
    Paragraph {
        #[serde(alias = "content")]
        text: String,
    },
    /// Link reference
    Link {
        #[serde(alias = "content")]
        text: String,
    },
    /// Any tag outside the known set; renders nothing
    #[serde(other)]
    Unknown,
}

impl ContentLine {
    /// Create a paragraph line
    pub fn paragraph(text: impl Into<String>) -> Self {
        ContentLine::Paragraph { text: text.into() }
    }

    /// Create a link line
    pub fn link(text: impl Into<String>) -> Self {
        ContentLine::Link { text: text.into() }
    }

    /// Text of the line, if it has any
    pub fn text(&self) -> Option<&str> {
        match self {
            ContentLine::Paragraph { text } | ContentLine::Link { text } => Some(text),
            ContentLine::Unknown => None,
        }
    }

    /// Check if this line is a link
    pub fn is_link(&self) -> bool {
        matches!(self, ContentLine::Link { .. })
    }
}

/// A feed entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Unique post identifier
    pub id: PostId,
    /// Who published the post
    pub author: Author,
    /// Ordered body lines
    pub content: Vec<ContentLine>,
    /// Publication time
    pub published_at: DateTime<FixedOffset>,
}

impl Post {
    /// Create a new post
    pub fn new(
        id: PostId,
        author: Author,
        content: Vec<ContentLine>,
        published_at: DateTime<FixedOffset>,
    ) -> Self {
        Self {
            id,
            author,
            content,
            published_at,
        }
    }
}
