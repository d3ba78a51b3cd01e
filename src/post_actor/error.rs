//! Error types for the Post actor.

use crate::model::{PostId, ValidationError};
use thiserror::Error;

/// Errors that can occur during post operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PostError {
    /// The requested post was not found.
    #[error("Post not found: {0}")]
    NotFound(String),

    /// The payload failed validation; nothing was sent to the store.
    #[error("Post validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The board only lets authors edit their own posts.
    #[error("Post {id} cannot be edited by {editor}")]
    NotUpdatable { id: PostId, editor: String },

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for PostError {
    fn from(msg: String) -> Self {
        PostError::ActorCommunicationError(msg)
    }
}
