//! Session wiring for CLI commands.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use indicatif::{ProgressBar, ProgressStyle};

use gramjar_core::types::ApiUrl;
use gramjar_core::{Device, SessionManager};
use gramjar_http::{FileCookieJar, HttpGram, HttpSession};

use crate::config::FileCredentialStore;
use crate::prompt::TermPrompt;

/// Default API base URL; override with `GRAMJAR_API_URL`.
const DEFAULT_API_URL: &str = "https://i.instagram.com/api/v1";

/// The device identity presented by this build.
pub fn device() -> Device {
    Device::new("gramjar", env!("CARGO_PKG_VERSION"))
}

fn api_url() -> Result<ApiUrl> {
    match std::env::var("GRAMJAR_API_URL") {
        Ok(url) => ApiUrl::new(&url).context("Invalid GRAMJAR_API_URL"),
        Err(_) => ApiUrl::new(DEFAULT_API_URL).context("Invalid default API URL"),
    }
}

/// Get the cookie jar directory.
fn cookie_dir() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("", "", "gramjar").context("Could not determine data directory")?;

    let dir = dirs.data_dir().join("cookies");
    std::fs::create_dir_all(&dir).context("Failed to create cookie directory")?;

    Ok(dir)
}

/// The cookie jar shared by every command.
pub fn cookie_jar() -> Result<FileCookieJar> {
    Ok(FileCookieJar::new(cookie_dir()?))
}

/// Resolve a session for the configured account, prompting for
/// credentials when none are stored.
pub async fn resolve() -> Result<HttpSession> {
    let gram = HttpGram::new(api_url()?, cookie_jar()?);
    let store = FileCredentialStore::open_default()?;
    let mut manager = SessionManager::new(gram, store, TermPrompt::new(), device());

    // Collect credentials before the spinner starts drawing, so an
    // interactive prompt is not garbled by tick output.
    let credentials = manager
        .resolve_credentials()
        .context("Failed to resolve credentials")?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}").expect("valid template"));
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner.set_message("Retrieving session...");

    let session = manager.session_for(credentials).await;
    spinner.finish_and_clear();

    session.context("Failed to resolve session")
}
