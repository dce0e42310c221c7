//! Subcommand implementations.

pub mod account;
pub mod account_id;
pub mod feed;
pub mod login;
pub mod saved;
pub mod unsave;
pub mod whoami;

use anyhow::Result;

use crate::cli::Commands;

/// Page size for feed drains.
pub(crate) const FEED_PAGE_SIZE: u32 = 10;

pub async fn handle(command: Commands) -> Result<()> {
    match command {
        Commands::Login(args) => login::run(args).await,
        Commands::Whoami(args) => whoami::run(args).await,
        Commands::AccountId(args) => account_id::run(args).await,
        Commands::Account(args) => account::run(args).await,
        Commands::Feed(args) => feed::run(args).await,
        Commands::Saved(args) => saved::run(args).await,
        Commands::Unsave(args) => unsave::run(args).await,
    }
}
