//! Ordered comment thread of one post

use serde::{Deserialize, Serialize};
use std::ops::Deref;
use tracing::debug;

/// Submitted comments in submission order.
///
/// Comments are plain strings. Removal is by value and takes out the first
/// equal entry only, so duplicates have to be removed one at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentList {
    comments: Vec<String>,
}

impl CommentList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a comment at the tail
    pub fn push(&mut self, comment: impl Into<String>) {
        let comment = comment.into();
        debug!("Appending comment #{} ({} bytes)", self.comments.len() + 1, comment.len());
        self.comments.push(comment);
    }

    /// Remove the first comment equal to `value`.
    ///
    /// Returns the removed comment, or `None` when nothing matched.
    pub fn remove_first(&mut self, value: &str) -> Option<String> {
        let pos = self.comments.iter().position(|c| c == value)?;
        debug!("Removing comment at position {}", pos);
        Some(self.comments.remove(pos))
    }

    /// Comments as a slice
    pub fn as_slice(&self) -> &[String] {
        &self.comments
    }

    /// Consume into the underlying vector
    pub fn into_vec(self) -> Vec<String> {
        self.comments
    }
}

impl Deref for CommentList {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.comments
    }
}

impl From<Vec<String>> for CommentList {
    fn from(comments: Vec<String>) -> Self {
        Self { comments }
    }
}

impl<S: Into<String>> FromIterator<S> for CommentList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            comments: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a CommentList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.comments.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_push_appends_at_tail() {
        let mut list = CommentList::new();
        list.push("first");
        list.push("second");
        assert_eq!(list.as_slice(), ["first", "second"]);
    }

    #[test]
    fn test_remove_first_occurrence() {
        let mut list: CommentList = ["a", "b"].into_iter().collect();
        assert_eq!(list.remove_first("a"), Some("a".to_string()));
        assert_eq!(list.as_slice(), ["b"]);
    }

    #[test]
    fn test_remove_duplicate_removes_only_one() {
        let mut list: CommentList = ["x", "x"].into_iter().collect();
        list.remove_first("x");
        assert_eq!(list.as_slice(), ["x"]);
    }

    #[test]
    fn test_remove_keeps_order_of_the_rest() {
        let mut list: CommentList = ["a", "b", "a", "c"].into_iter().collect();
        list.remove_first("a");
        assert_eq!(list.as_slice(), ["b", "a", "c"]);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut list: CommentList = ["a"].into_iter().collect();
        assert_eq!(list.remove_first("z"), None);
        assert_eq!(list.as_slice(), ["a"]);
    }

    #[test]
    fn test_remove_length_law() {
        let samples: [&[&str]; 4] = [&[], &["v"], &["a", "v", "v"], &["a", "b"]];
        for sample in samples {
            let before: CommentList = sample.iter().copied().collect();
            let mut after = before.clone();
            after.remove_first("v");
            let expected = before.len() - usize::from(before.iter().any(|c| c == "v"));
            assert_eq!(after.len(), expected);
        }
    }

    #[test]
    fn test_serializes_as_array() {
        let list: CommentList = ["a", "b"].into_iter().collect();
        assert_eq!(serde_json::to_string(&list).unwrap(), r#"["a","b"]"#);
    }
}
