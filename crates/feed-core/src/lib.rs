//! feed-core - Core library for feedview
//!
//! This crate provides the model behind the feed: immutable posts, the
//! per-post container that owns a comment thread and a draft, published-time
//! formatting, feed loading and configuration.

pub mod comment;
pub mod config;
pub mod container;
pub mod error;
pub mod feed;
pub mod post;
pub mod time;
pub mod types;

pub use container::PostContainer;
pub use error::{FeedError, Result};
pub use feed::Feed;
pub use types::*;
