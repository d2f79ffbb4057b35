//! UI components

pub mod comment_row;
pub mod header;
pub mod post_card;
pub mod sidebar;

pub use comment_row::CommentRow;
pub use header::render_header;
pub use post_card::{CardFocus, PostCard};
pub use sidebar::render_sidebar;
