//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::account::AccountArgs;
use crate::commands::account_id::AccountIdArgs;
use crate::commands::feed::FeedArgs;
use crate::commands::login::LoginArgs;
use crate::commands::saved::SavedArgs;
use crate::commands::unsave::UnsaveArgs;
use crate::commands::whoami::WhoamiArgs;

/// Archive an account's media feed.
#[derive(Parser, Debug)]
#[command(name = "gramjar")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Store credentials and create a fresh session
    Login(LoginArgs),

    /// Display the configured account
    Whoami(WhoamiArgs),

    /// Resolve a username to its account id
    AccountId(AccountIdArgs),

    /// Fetch the full raw account record for a username
    Account(AccountArgs),

    /// Drain a user's media feed
    Feed(FeedArgs),

    /// Drain the signed-in account's saved media
    Saved(SavedArgs),

    /// Remove a post from the saved collection
    Unsave(UnsaveArgs),
}
