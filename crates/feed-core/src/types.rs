//! Core type definitions for feedview

use serde::{Deserialize, Serialize};
use std::fmt;

/// Externally assigned identifier of a post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub u64);

impl PostId {
    /// Get the raw value
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for PostId {
    fn from(value: u64) -> Self {
        PostId(value)
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
