//! Feed command implementation.

use anyhow::{Context, Result};
use clap::Args;

use gramjar_core::feed;
use gramjar_core::traits::Session;
use gramjar_core::types::Username;

use crate::output;
use crate::progress::SpinnerReporter;
use crate::session;

use super::FEED_PAGE_SIZE;

#[derive(Args, Debug)]
pub struct FeedArgs {
    /// Username whose media feed to drain
    pub username: String,

    /// Pretty-print the collection as a JSON array
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(args: FeedArgs) -> Result<()> {
    let username = Username::new(&args.username).context("Invalid username")?;

    let active = session::resolve().await?;
    let account = active
        .search_account(&username)
        .await
        .context("Account lookup failed")?;

    let mut cursor = active.user_media(&account, FEED_PAGE_SIZE);
    let mut spinner = SpinnerReporter::new("posts found");
    let posts = feed::drain(&mut cursor, &mut spinner)
        .await
        .context("Failed to drain feed")?;

    output::post_collection(&posts, args.pretty)
}
