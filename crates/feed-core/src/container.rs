//! Post container: one rendered post and the comment state it owns

use crate::comment::{CommentList, CommentValidator, Draft};
use crate::error::Result;
use crate::post::{render_content, Post, RenderedLine};
use crate::time;
use crate::types::PostId;
use chrono::{DateTime, Utc};
use tracing::debug;

/// State owner for a single post.
///
/// The post itself is read-only; the comment list and the draft live here
/// and nowhere else.
#[derive(Debug, Clone)]
pub struct PostContainer {
    post: Post,
    comments: CommentList,
    draft: Draft,
    validator: CommentValidator,
}

impl PostContainer {
    /// Create a container with an empty thread and draft
    pub fn new(post: Post) -> Self {
        Self {
            post,
            comments: CommentList::new(),
            draft: Draft::new(),
            validator: CommentValidator::new(),
        }
    }

    /// The post being displayed
    pub fn post(&self) -> &Post {
        &self.post
    }

    /// Post identifier
    pub fn id(&self) -> PostId {
        self.post.id
    }

    /// Submitted comments
    pub fn comments(&self) -> &CommentList {
        &self.comments
    }

    /// Pending comment
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Replace the draft text; clears a previous validation failure
    pub fn update_draft(&mut self, text: impl Into<String>) {
        self.draft.set(text);
    }

    /// Whether the publish action is enabled
    pub fn can_submit(&self) -> bool {
        !self.draft.is_empty()
    }

    /// Publish the draft as a comment.
    ///
    /// An empty draft is rejected with a validation error and leaves the
    /// thread untouched; the message is also kept on the draft until the
    /// next edit.
    pub fn submit(&mut self) -> Result<()> {
        if let Err(err) = self.validator.validate_submission(self.draft.as_str()) {
            if let Some(msg) = err.validation_message() {
                self.draft.mark_invalid(msg);
            }
            debug!("Rejected empty comment on post {}", self.post.id);
            return Err(err);
        }

        let comment = self.draft.take();
        self.comments.push(comment);
        debug!("Post {} now has {} comments", self.post.id, self.comments.len());
        Ok(())
    }

    /// Remove the first comment equal to `value`; returns whether one was removed
    pub fn delete_comment(&mut self, value: &str) -> bool {
        self.comments.remove_first(value).is_some()
    }

    /// Absolute published time, e.g. `3 de maio às 08:00h`
    pub fn published_formatted(&self) -> String {
        time::format_absolute(&self.post.published_at)
    }

    /// Relative published time, e.g. `há cerca de 2 anos`
    pub fn published_relative(&self, now: DateTime<Utc>) -> String {
        time::format_relative(&self.post.published_at, now)
    }

    /// RFC 3339 published time
    pub fn published_iso(&self) -> String {
        time::format_iso(&self.post.published_at)
    }

    /// Display form of the post body
    pub fn rendered_content(&self) -> Vec<RenderedLine<'_>> {
        render_content(&self.post.content)
    }
}
