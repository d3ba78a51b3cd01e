//! # Post Board
//!
//! > **Validated post edits on top of a resource-oriented actor store.**
//!
//! A board keeps posts (title, content, who wrote and who last edited them). Edits
//! arrive as [`UpdateRequest`](model::UpdateRequest)s, are checked and normalized into a
//! [`ValidRequest`](model::ValidRequest), and only then applied to the stored post.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Rules ([`model`])
//! Pure data and the update validator/applier.
//! - **Role**: `validate` rejects a blank title, then a blank editor; `apply_to` returns
//!   the edited post without mutating its input.
//! - **Key items**: [`Post`](model::Post), [`UpdateRequest`](model::UpdateRequest),
//!   [`ValidationError`](model::ValidationError).
//!
//! ### 2. The Engine ([`framework`])
//! The generic `ResourceActor<T>` owning the in-memory store.
//! - **Role**: Serializes every request for a resource type through one task, so two
//!   concurrent edits of a post never interleave.
//!
//! ### 3. The Interface ([`clients`])
//! - **Role**: [`PostClient`](clients::PostClient) validates caller payloads before they
//!   reach the store and maps failures to [`PostError`](post_actor::PostError).
//!
//! ### 4. The Orchestrator ([`lifecycle`]) and settings ([`config`])
//! - **Role**: [`BoardSystem`](lifecycle::BoardSystem) spawns the post actor with its
//!   [`BoardConfig`](config::BoardConfig) and shuts it down.
//!
//! ## 🚀 Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run -- --author bob --new-title " Hello " --editor alice
//! ```

pub mod clients;
pub mod config;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod post_actor;
