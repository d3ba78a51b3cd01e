use crate::clients::PostClient;
use crate::config::BoardConfig;
use tracing::{error, info};

/// Runtime orchestrator for the board.
///
/// Owns the post actor's task and exposes its client.
///
/// # Example
///
/// ```ignore
/// let system = BoardSystem::new(BoardConfig::default());
///
/// let id = system.post_client.create_post(create).await?;
/// let post = system.post_client.update_post(id, request).await?;
///
/// system.shutdown().await?;
/// ```
pub struct BoardSystem {
    /// Client for interacting with the Post actor
    pub post_client: PostClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl BoardSystem {
    /// Spawns the post actor with `config` as its context.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn new(config: BoardConfig) -> Self {
        info!(
            edit_policy = ?config.edit_policy,
            capacity = config.channel_capacity,
            "Starting board"
        );

        let (post_actor, post_client) = crate::post_actor::new(config.channel_capacity);
        let post_handle = tokio::spawn(post_actor.run(config));

        Self {
            post_client,
            handles: vec![post_handle],
        }
    }

    /// Gracefully shuts down the board.
    ///
    /// Returns an error if an actor task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down board...");

        // Dropping the client closes the channel; the actor exits its loop.
        drop(self.post_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Board shutdown complete.");
        Ok(())
    }
}
