//! Unsave command implementation.

use anyhow::{Context, Result};
use clap::Args;

use gramjar_core::traits::Session;
use gramjar_core::types::MediaId;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct UnsaveArgs {
    /// Media id of the saved post
    pub media_id: String,
}

pub async fn run(args: UnsaveArgs) -> Result<()> {
    let media = MediaId::new(&args.media_id).context("Invalid media id")?;

    let active = session::resolve().await?;
    active
        .unsave(&media)
        .await
        .context("Failed to unsave post")?;

    output::success("Post unsaved");

    Ok(())
}
