//! Comment system module
//!
//! Per-post comment threads, drafts, and submission validation.

pub mod draft;
pub mod list;
pub mod validator;

pub use draft::Draft;
pub use list::CommentList;
pub use validator::{CommentValidator, COMMENT_REQUIRED_MESSAGE};
