//! Demo: create a post, edit it, print the stored result as JSON.

use anyhow::{anyhow, Context};
use clap::Parser;
use post_board::config::BoardConfig;
use post_board::lifecycle::{setup_tracing, BoardSystem};
use post_board::model::{PostCreate, UpdateRequest};
use std::path::PathBuf;
use tracing::{info, Instrument};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Title of the post to create
    #[arg(long, default_value = "Old")]
    title: String,

    /// Content of the post to create
    #[arg(long, default_value = "")]
    content: String,

    /// Author of the post
    #[arg(long, default_value = "bob")]
    author: String,

    /// Title to set in the edit
    #[arg(long, default_value = "Hello")]
    new_title: String,

    /// Content to set in the edit
    #[arg(long, default_value = "body")]
    new_content: String,

    /// Who makes the edit
    #[arg(long, default_value = "alice")]
    editor: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => BoardConfig::load(path)?,
        None => BoardConfig::default(),
    };
    setup_tracing(&config.log);

    let system = BoardSystem::new(config);

    let create = PostCreate {
        title: args.title,
        content: args.content,
        created_by: args.author,
    };
    let post_id = async {
        info!("Creating post");
        system.post_client.create_post(create).await
    }
    .instrument(tracing::info_span!("post_creation"))
    .await
    .context("creating post")?;
    info!(%post_id, "Post created");

    let request = UpdateRequest::new(args.new_title, args.new_content, args.editor);
    let post = async {
        info!("Updating post");
        system.post_client.update_post(post_id, request).await
    }
    .instrument(tracing::info_span!("post_update"))
    .await
    .context("updating post")?;
    info!(%post_id, updated_by = %post.updated_by, "Post updated");

    println!("{}", serde_json::to_string_pretty(&post)?);

    system.shutdown().await.map_err(|e| anyhow!(e))?;
    Ok(())
}
