//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).

pub mod post_client;

pub use post_client::*;
