//! ActorEntity trait implementation for the Post domain type.
//!
//! The store only ever receives a [`ValidRequest`]: validation happens in
//! [`PostClient`](crate::clients::PostClient) before a request is sent. What is left
//! for the hook is the board's edit policy and the actual edit.

use crate::config::{BoardConfig, EditPolicy};
use crate::framework::ActorEntity;
use crate::model::{Post, PostCreate, PostId, ValidRequest};
use crate::post_actor::PostError;
use async_trait::async_trait;
use chrono::Utc;

#[async_trait]
impl ActorEntity for Post {
    type Id = PostId;
    type Create = PostCreate;
    type Update = ValidRequest;
    type Context = BoardConfig;
    type Error = PostError;

    /// Creates a new Post, stamped with the current time.
    fn from_create_params(id: PostId, params: PostCreate) -> Result<Self, Self::Error> {
        let params = params.validate()?;
        Ok(Post::new(
            id,
            params.title,
            params.content,
            params.created_by,
            Utc::now(),
        ))
    }

    /// Applies a validated edit.
    ///
    /// Under [`EditPolicy::AuthorOnly`] an editor other than the author is rejected
    /// with [`PostError::NotUpdatable`].
    async fn on_update(
        &mut self,
        update: ValidRequest,
        ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        if ctx.edit_policy == EditPolicy::AuthorOnly && update.updated_by() != self.created_by {
            return Err(PostError::NotUpdatable {
                id: self.id,
                editor: update.updated_by().to_string(),
            });
        }
        *self = update.apply_to(self);
        Ok(())
    }
}
