//! Literary work definitions for the study anthology.

mod apparatus;
mod work;

pub use apparatus::*;
pub use work::*;

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;

/// Unique identifier for a work - a stable, human-readable slug.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkId(String);

impl WorkId {
    /// Create a work ID from a slug.
    pub fn new(slug: impl Into<String>) -> Self {
        Self(slug.into())
    }

    /// The slug as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for WorkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for WorkId {
    fn from(slug: &str) -> Self {
        Self(slug.to_string())
    }
}

impl From<String> for WorkId {
    fn from(slug: String) -> Self {
        Self(slug)
    }
}

impl Borrow<str> for WorkId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// The kinds of works on the reading list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkKind {
    Poem,
    Story,
}

impl WorkKind {
    /// Plural label used in listings and log lines.
    pub fn label(self) -> &'static str {
        match self {
            WorkKind::Poem => "poems",
            WorkKind::Story => "stories",
        }
    }
}
