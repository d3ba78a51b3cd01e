//! # Post Client
//!
//! The board's entry point for post requests. It validates caller payloads, talks to
//! the post actor and turns framework failures back into [`PostError`]s.
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{Post, PostCreate, PostId, PostSearch, UpdateRequest};
use crate::post_actor::PostError;
use async_trait::async_trait;
use tracing::{debug, instrument, warn};

/// Client for interacting with the Post actor.
#[derive(Clone)]
pub struct PostClient {
    inner: ResourceClient<Post>,
}

impl PostClient {
    pub fn new(inner: ResourceClient<Post>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Post> for PostClient {
    type Error = PostError;

    fn inner(&self) -> &ResourceClient<Post> {
        &self.inner
    }

    /// Entity errors carry a boxed [`PostError`]; unbox it so callers can match on it.
    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => PostError::NotFound(id),
            FrameworkError::EntityError(inner) => match inner.downcast::<PostError>() {
                Ok(post_error) => *post_error,
                Err(other) => PostError::ActorCommunicationError(other.to_string()),
            },
            other => PostError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl PostClient {
    #[instrument(skip(self))]
    pub async fn create_post(&self, params: PostCreate) -> Result<PostId, PostError> {
        let params = params
            .validate()
            .inspect_err(|e| warn!(error = %e, "Rejected create"))?;
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Validates `request` and applies it to the stored post.
    ///
    /// An invalid request fails with [`PostError::Validation`] without reaching the
    /// store. The returned post is the state now stored.
    #[instrument(skip(self))]
    pub async fn update_post(
        &self,
        id: PostId,
        request: UpdateRequest,
    ) -> Result<Post, PostError> {
        let valid = request
            .validate()
            .inspect_err(|e| warn!(%id, error = %e, "Rejected update"))?;
        debug!("Sending request");
        self.inner.update(id, valid).await.map_err(Self::map_error)
    }

    /// Like [`ActorClient::get`], but a missing post is an error.
    #[instrument(skip(self))]
    pub async fn find_post(&self, id: PostId) -> Result<Post, PostError> {
        self.get(id)
            .await?
            .ok_or_else(|| PostError::NotFound(id.to_string()))
    }

    #[instrument(skip(self))]
    pub async fn delete_post(&self, id: PostId) -> Result<(), PostError> {
        self.delete(id).await
    }

    /// Posts matching `search`, newest first.
    #[instrument(skip(self))]
    pub async fn list_posts(&self, search: &PostSearch) -> Result<Vec<Post>, PostError> {
        let mut posts: Vec<Post> = self
            .list()
            .await?
            .into_iter()
            .filter(|post| search.matches(post))
            .collect();
        posts.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(posts)
    }
}
