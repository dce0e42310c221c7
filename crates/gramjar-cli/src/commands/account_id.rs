//! Account id command implementation.

use anyhow::{Context, Result};
use clap::Args;

use gramjar_core::traits::Session;
use gramjar_core::types::Username;

use crate::session;

#[derive(Args, Debug)]
pub struct AccountIdArgs {
    /// Username to resolve
    pub username: String,
}

pub async fn run(args: AccountIdArgs) -> Result<()> {
    let username = Username::new(&args.username).context("Invalid username")?;

    let active = session::resolve().await?;
    let account = active
        .search_account(&username)
        .await
        .context("Account lookup failed")?;

    println!("{}", account);

    Ok(())
}
