//! # Framework Errors
//!
//! Errors raised by the store plumbing. Failures coming from an entity hook are boxed
//! into [`FrameworkError::EntityError`] so clients can downcast them back to the
//! resource's own error type.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}
