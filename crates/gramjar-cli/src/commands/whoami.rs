//! Whoami command implementation.

use anyhow::{Context, Result};
use clap::Args;

use gramjar_core::traits::CredentialStore;

use crate::config::FileCredentialStore;
use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct WhoamiArgs {}

pub async fn run(_args: WhoamiArgs) -> Result<()> {
    let store = FileCredentialStore::open_default()?;
    let username = store
        .username()
        .context("No account configured. Run 'gramjar login' first.")?;

    let jar = session::cookie_jar()?;
    let state = if jar.has_cookie(&username) {
        "cached cookie"
    } else {
        "none (next command will log in)"
    };

    output::field("Username", username.as_str());
    output::field("Session", state);

    Ok(())
}
