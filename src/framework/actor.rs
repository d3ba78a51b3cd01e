//! # Generic Actor Server
//!
//! [`ResourceActor`] owns the entity store and processes requests one at a time.
//! Because only this task touches the store, no lock guards it, and concurrent
//! updates to one entity are applied in the order they arrive.

use crate::framework::client::ResourceClient;
use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::ResourceRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// # Usage Pattern
///
/// 1.  **Create**: call [`ResourceActor::new`] to get the actor and its client.
/// 2.  **Wire**: pass the entity's context into [`ResourceActor::run`].
/// 3.  **Run**: spawn the returned future on the Tokio runtime.
///
/// The loop ends when every client has been dropped.
///
/// # Operations
///
/// * **Create**: takes the next id from the `u32` counter, builds the entity with
///   `from_create_params`, runs `on_create` and only then inserts it.
/// * **Get**: replies with a clone of the stored entity, if any.
/// * **Update**: runs `on_update` against a copy and commits the copy only when the
///   hook succeeds, so a rejected update leaves the stored entity untouched.
/// * **Delete**: runs `on_delete`, then removes the entity.
/// * **List**: replies with clones of all stored entities.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new actor and the client connected to it.
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. When it is full, client
    ///   calls wait until there is space. A size of 0 is raised to 1.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size.max(1));
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id: 1,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// The `context` is handed to every entity hook.
    pub async fn run(mut self, context: T::Context) {
        // Short type name, e.g. "Post" instead of "post_board::model::post::Post"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = T::Id::from(self.next_id);

                    match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, error = %e, "on_create failed");
                                let _ =
                                    respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                                continue;
                            }
                            self.next_id += 1;
                            self.store.insert(id.clone(), item);
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let Some(item) = self.store.get_mut(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };

                    let mut candidate = item.clone();
                    if let Err(e) = candidate.on_update(update, &context).await {
                        warn!(entity_type, %id, error = %e, "Update failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    *item = candidate;
                    info!(entity_type, %id, "Updated");
                    let _ = respond_to.send(Ok(item.clone()));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    if let Some(item) = self.store.get(&id) {
                        if let Err(e) = item.on_delete(&context).await {
                            warn!(entity_type, %id, error = %e, "on_delete failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        self.store.remove(&id);
                        info!(entity_type, %id, size = self.store.len(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::List { respond_to } => {
                    let items: Vec<T> = self.store.values().cloned().collect();
                    debug!(entity_type, count = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    // --- Domain Definition ---

    #[derive(Clone, Debug, PartialEq)]
    struct Note {
        id: u32,
        text: String,
        revision: u32,
    }

    #[derive(Debug)]
    struct NoteCreate {
        text: String,
    }

    #[derive(Debug)]
    struct NoteUpdate {
        text: String,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("note text must not be empty")]
    struct EmptyNote;

    #[async_trait]
    impl ActorEntity for Note {
        type Id = u32;
        type Create = NoteCreate;
        type Update = NoteUpdate;
        type Context = ();
        type Error = EmptyNote;

        fn from_create_params(id: u32, params: NoteCreate) -> Result<Self, Self::Error> {
            if params.text.is_empty() {
                return Err(EmptyNote);
            }
            Ok(Self {
                id,
                text: params.text,
                revision: 0,
            })
        }

        async fn on_update(&mut self, update: NoteUpdate, _ctx: &()) -> Result<(), Self::Error> {
            // Bump first so a leaked partial write would be visible to the test.
            self.revision += 1;
            if update.text.is_empty() {
                return Err(EmptyNote);
            }
            self.text = update.text;
            Ok(())
        }
    }

    // --- Tests ---

    #[tokio::test]
    async fn test_store_lifecycle() {
        let (actor, client) = ResourceActor::<Note>::new(10);
        let handle = tokio::spawn(actor.run(()));

        let id = client
            .create(NoteCreate { text: "first".into() })
            .await
            .unwrap();
        assert_eq!(id, 1);

        let updated = client
            .update(id, NoteUpdate { text: "second".into() })
            .await
            .unwrap();
        assert_eq!(updated.text, "second");
        assert_eq!(updated.revision, 1);

        let listed = client.list().await.unwrap();
        assert_eq!(listed, vec![updated]);

        client.delete(id).await.unwrap();
        assert!(client.get(id).await.unwrap().is_none());

        drop(client);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_failed_update_leaves_entity_untouched() {
        let (actor, client) = ResourceActor::<Note>::new(10);
        tokio::spawn(actor.run(()));

        let id = client
            .create(NoteCreate { text: "keep".into() })
            .await
            .unwrap();

        let result = client.update(id, NoteUpdate { text: String::new() }).await;
        assert!(matches!(result, Err(FrameworkError::EntityError(_))));

        let stored = client.get(id).await.unwrap().unwrap();
        assert_eq!(stored.text, "keep");
        assert_eq!(stored.revision, 0);
    }

    #[tokio::test]
    async fn test_failed_create_does_not_consume_id() {
        let (actor, client) = ResourceActor::<Note>::new(10);
        tokio::spawn(actor.run(()));

        let result = client.create(NoteCreate { text: String::new() }).await;
        assert!(matches!(result, Err(FrameworkError::EntityError(_))));

        let id = client
            .create(NoteCreate { text: "ok".into() })
            .await
            .unwrap();
        assert_eq!(id, 1);
    }

    #[tokio::test]
    async fn test_zero_buffer_still_delivers() {
        let (actor, client) = ResourceActor::<Note>::new(0);
        tokio::spawn(actor.run(()));

        let id = client
            .create(NoteCreate { text: "tiny".into() })
            .await
            .unwrap();
        assert_eq!(client.get(id).await.unwrap().unwrap().text, "tiny");
    }

    #[tokio::test]
    async fn test_missing_entity_reports_not_found() {
        let (actor, client) = ResourceActor::<Note>::new(10);
        tokio::spawn(actor.run(()));

        let update = client.update(7, NoteUpdate { text: "x".into() }).await;
        assert!(matches!(update, Err(FrameworkError::NotFound(id)) if id == "7"));

        let delete = client.delete(7).await;
        assert!(matches!(delete, Err(FrameworkError::NotFound(_))));
    }
}
