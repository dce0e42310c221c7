//! Credential storage in the user's config directory.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use gramjar_core::Credentials;
use gramjar_core::error::CredentialsError;
use gramjar_core::traits::CredentialStore;
use gramjar_core::types::Username;

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// Stored credential data.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredCredentials {
    username: Option<String>,
    password: Option<String>,
}

/// Get the credential file path.
fn config_path() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("", "", "gramjar").context("Could not determine config directory")?;

    let config_dir = dirs.config_dir();
    fs::create_dir_all(config_dir).context("Failed to create config directory")?;

    Ok(config_dir.join("credentials.json"))
}

/// File-backed credential store.
#[derive(Debug)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    /// Open the store at its default location under the user config
    /// directory.
    pub fn open_default() -> Result<Self> {
        Ok(Self {
            path: config_path()?,
        })
    }

    /// Open a store at an explicit path.
    #[allow(dead_code)]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read(&self) -> StoredCredentials {
        let Ok(json) = fs::read_to_string(&self.path) else {
            return StoredCredentials::default();
        };
        serde_json::from_str(&json).unwrap_or_default()
    }

    fn write(&self, stored: &StoredCredentials) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(stored)?;
        fs::write(&self.path, &json)?;

        // Set restrictive permissions (Unix only)
        #[cfg(unix)]
        {
            let mut perms = fs::metadata(&self.path)?.permissions();
            perms.set_mode(0o600);
            fs::set_permissions(&self.path, perms)?;
        }

        Ok(())
    }
}

impl CredentialStore for FileCredentialStore {
    fn username(&self) -> Option<Username> {
        self.read().username.and_then(|u| Username::new(u).ok())
    }

    fn password(&self) -> Option<String> {
        self.read().password
    }

    fn set_credentials(&mut self, credentials: &Credentials) -> gramjar_core::Result<()> {
        let stored = StoredCredentials {
            username: Some(credentials.username().to_string()),
            password: Some(credentials.password().to_string()),
        };

        self.write(&stored).map_err(|e| {
            CredentialsError::Store {
                message: e.to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_credentials() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileCredentialStore::open(dir.path().join("credentials.json"));

        assert!(store.username().is_none());
        assert!(store.password().is_none());

        let creds = Credentials::new(Username::new("alice").unwrap(), "secret123");
        store.set_credentials(&creds).unwrap();

        assert_eq!(store.username().unwrap().as_str(), "alice");
        assert_eq!(store.password().unwrap(), "secret123");
    }

    #[test]
    fn garbage_files_read_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credentials.json");
        fs::write(&path, "not json").unwrap();

        let store = FileCredentialStore::open(&path);
        assert!(store.username().is_none());
    }
}
