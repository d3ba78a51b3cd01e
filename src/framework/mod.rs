//! Generic resource store for board entities.
//!
//! This module provides the building blocks that keep entities behind an actor:
//! one task owns the store and applies every request in arrival order, so two
//! editors racing on the same post are serialized instead of overwriting each other.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that resource types implement to be managed by an actor
//! - [`ResourceActor`] - Generic actor that owns the entity store
//! - [`ResourceClient`] - Typed, cloneable handle for sending requests
//! - [`ActorClient`] - Default `get`/`delete`/`list` for resource-specific clients
//! - [`FrameworkError`] - Errors raised by the plumbing itself
//!
//! # Testing
//!
//! See [`mock`] for utilities to test clients without spawning a real actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
