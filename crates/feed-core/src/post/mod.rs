//! Post module
//!
//! Immutable feed entries, their display form, and where they come from.

pub mod content;
pub mod loader;
pub mod model;
pub mod seed;

pub use content::{render_content, LineKind, RenderedLine, PLACEHOLDER_HREF};
pub use loader::{load_feed, parse_feed, FeedFile, FeedFormat};
pub use model::*;
pub use seed::default_posts;
