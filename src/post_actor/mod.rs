//! # Post Actor
//!
//! Keeps the board's posts behind a [`ResourceActor`]: creation, reads, validated
//! edits and deletion all go through one task, in arrival order.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Post`]
//! - [`error`] - [`PostError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use post_board::config::BoardConfig;
//! use post_board::model::{PostCreate, UpdateRequest};
//! use post_board::post_actor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = BoardConfig::default();
//!     let (actor, client) = post_actor::new(config.channel_capacity);
//!     tokio::spawn(actor.run(config));
//!
//!     let id = client
//!         .create_post(PostCreate {
//!             title: "Old".to_string(),
//!             content: "x".to_string(),
//!             created_by: "bob".to_string(),
//!         })
//!         .await?;
//!     let post = client
//!         .update_post(id, UpdateRequest::new(" Hello ", "body", "alice"))
//!         .await?;
//!     assert_eq!(post.title, "Hello");
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::PostClient;
use crate::framework::ResourceActor;
use crate::model::Post;

/// Creates a new Post actor and its client.
///
/// A `capacity` of 0 is treated as 1.
pub fn new(capacity: usize) -> (ResourceActor<Post>, PostClient) {
    let (actor, generic_client) = ResourceActor::new(capacity);
    let client = PostClient::new(generic_client);

    (actor, client)
}
