//! Saved media command implementation.

use anyhow::{Context, Result};
use clap::Args;

use gramjar_core::feed;
use gramjar_core::traits::Session;

use crate::output;
use crate::progress::SpinnerReporter;
use crate::session;

use super::FEED_PAGE_SIZE;

#[derive(Args, Debug)]
pub struct SavedArgs {
    /// Pretty-print the collection as a JSON array
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(args: SavedArgs) -> Result<()> {
    let active = session::resolve().await?;

    let mut cursor = active.saved_media(FEED_PAGE_SIZE);
    let mut spinner = SpinnerReporter::new("posts found");
    let posts = feed::drain(&mut cursor, &mut spinner)
        .await
        .context("Failed to drain saved media")?;

    output::post_collection(&posts, args.pretty)
}
