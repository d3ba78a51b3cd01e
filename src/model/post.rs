use crate::model::update::{require_non_blank, ValidationError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Posts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PostId(pub u32);

impl From<u32> for PostId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "post_{}", self.0)
    }
}

/// A board post.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// See [`impl ActorEntity for Post`](#impl-ActorEntity-for-Post) for details on:
/// - Creation parameters ([`PostCreate`])
/// - Update parameters ([`ValidRequest`](crate::model::ValidRequest))
///
/// `updated_by`/`updated_at` record the last editor; a fresh post carries its
/// author and creation time there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_by: String,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Creates a post authored by `created_by` at `created_at`.
    ///
    /// No validation happens here; use [`PostCreate::validate`] for caller input.
    pub fn new(
        id: PostId,
        title: impl Into<String>,
        content: impl Into<String>,
        created_by: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        let created_by = created_by.into();
        Self {
            id,
            title: title.into(),
            content: content.into(),
            updated_by: created_by.clone(),
            created_by,
            created_at,
            updated_at: created_at,
        }
    }
}

/// Payload for creating a new post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostCreate {
    pub title: String,
    pub content: String,
    pub created_by: String,
}

impl PostCreate {
    /// Checks the payload with the same rules as an update: `title` (trimmed) must not
    /// be empty, then `createdBy` must not be empty (checked as given). The returned
    /// payload has its title trimmed.
    pub fn validate(self) -> Result<Self, ValidationError> {
        let title = require_non_blank("title", &self.title)?.to_string();
        if self.created_by.is_empty() {
            return Err(ValidationError::empty("createdBy"));
        }
        Ok(Self { title, ..self })
    }
}

/// Board listing filter. Empty fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PostSearch {
    /// Substring the title must contain.
    pub title: Option<String>,
    /// Exact author.
    pub created_by: Option<String>,
}

impl PostSearch {
    pub fn matches(&self, post: &Post) -> bool {
        let title_ok = self
            .title
            .as_deref()
            .map_or(true, |needle| post.title.contains(needle));
        let author_ok = self
            .created_by
            .as_deref()
            .map_or(true, |author| post.created_by == author);
        title_ok && author_ok
    }
}
