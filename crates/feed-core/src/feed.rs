//! The feed page: post containers in display order

use crate::container::PostContainer;
use crate::error::{FeedError, Result};
use crate::post::Post;
use crate::types::PostId;
use std::collections::HashSet;
use tracing::debug;

/// Ordered collection of independent post containers
#[derive(Debug, Clone, Default)]
pub struct Feed {
    containers: Vec<PostContainer>,
}

impl Feed {
    /// Build a feed; post ids must be unique
    pub fn new(posts: Vec<Post>) -> Result<Self> {
        let mut seen = HashSet::new();
        for post in &posts {
            if !seen.insert(post.id) {
                return Err(FeedError::Validation(format!("Duplicate post id {}", post.id)));
            }
        }

        debug!("Building feed with {} posts", posts.len());
        Ok(Self {
            containers: posts.into_iter().map(PostContainer::new).collect(),
        })
    }

    /// All containers in display order
    pub fn containers(&self) -> &[PostContainer] {
        &self.containers
    }

    /// Container at a display index
    pub fn get(&self, index: usize) -> Option<&PostContainer> {
        self.containers.get(index)
    }

    /// Mutable container at a display index
    pub fn get_mut(&mut self, index: usize) -> Option<&mut PostContainer> {
        self.containers.get_mut(index)
    }

    /// Container for a post id
    pub fn find(&self, id: PostId) -> Result<&PostContainer> {
        self.containers
            .iter()
            .find(|c| c.id() == id)
            .ok_or(FeedError::PostNotFound(id))
    }

    /// Mutable container for a post id
    pub fn find_mut(&mut self, id: PostId) -> Result<&mut PostContainer> {
        self.containers
            .iter_mut()
            .find(|c| c.id() == id)
            .ok_or(FeedError::PostNotFound(id))
    }

    /// Number of posts
    pub fn len(&self) -> usize {
        self.containers.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }

    /// Total comments across all posts
    pub fn comment_count(&self) -> usize {
        self.containers.iter().map(|c| c.comments().len()).sum()
    }
}
