//! Board data: the [`Post`] entity, its payloads and the update validator.

pub mod post;
pub mod update;

pub use post::*;
pub use update::*;
