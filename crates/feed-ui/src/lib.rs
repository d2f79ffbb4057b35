//! feed-ui - TUI library for feedview
//!
//! This crate provides the terminal interface for the feed.
//!
//! # Overview
//!
//! The TUI provides:
//! - A header and a profile sidebar
//! - One card per post with author, published time and content
//! - A comment form per post and a deletable comment thread
//! - Status bar with mode and comment count
//!
//! # Example
//!
//! ```ignore
//! use feed_core::{config::Config, post::default_posts, Feed};
//! use feed_ui::App;
//!
//! let feed = Feed::new(default_posts())?;
//! let mut app = App::new(feed, &Config::default());
//! app.run()?;
//! ```

pub mod app;
pub mod components;
pub mod events;
pub mod input;
pub mod layout;
pub mod theme;
pub mod tui;

pub use app::{App, AppMode, AppState};
pub use theme::Theme;
