//! Login command implementation.

use anyhow::{Context, Result};
use clap::Args;

use gramjar_core::traits::{CredentialPrompt, CredentialStore, Session};

use crate::config::FileCredentialStore;
use crate::output;
use crate::prompt::TermPrompt;
use crate::session;

#[derive(Args, Debug)]
pub struct LoginArgs {}

pub async fn run(_args: LoginArgs) -> Result<()> {
    let credentials = TermPrompt::new()
        .ask()
        .context("Credential prompt failed")?;

    let mut store = FileCredentialStore::open_default()?;
    store
        .set_credentials(&credentials)
        .context("Failed to store credentials")?;

    // Drop any stale cookie so the new credentials get a real login.
    let jar = session::cookie_jar()?;
    if let Err(e) = jar.clear(credentials.username()) {
        tracing::warn!(error = %e, "Failed to clear stale cookie entry");
    }

    let active = session::resolve().await.context("Failed to log in")?;

    // Print success
    output::success("Logged in");
    println!();
    output::field("Username", active.username().as_str());

    Ok(())
}
