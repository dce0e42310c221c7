//! Account command implementation.

use anyhow::{Context, Result};
use clap::Args;

use gramjar_core::traits::Session;
use gramjar_core::types::Username;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct AccountArgs {
    /// Username to look up
    pub username: String,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(args: AccountArgs) -> Result<()> {
    let username = Username::new(&args.username).context("Invalid username")?;

    let active = session::resolve().await?;
    let account = active
        .search_account(&username)
        .await
        .context("Account lookup failed")?;
    let record = active
        .account_by_id(&account)
        .await
        .context("Failed to fetch account record")?;

    if args.pretty {
        output::json_pretty(&record)?;
    } else {
        output::json(&record)?;
    }

    Ok(())
}
