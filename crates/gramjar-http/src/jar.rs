//! File-backed cookie jar.
//!
//! One JSON file per username holds the serialized authentication
//! cookies from the most recent login, allowing later runs to rehydrate
//! a session without contacting the login endpoint.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use gramjar_core::Device;
use gramjar_core::error::{Error, TransportError};
use gramjar_core::types::Username;

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

fn map_io(err: std::io::Error) -> Error {
    Error::Transport(TransportError::Http {
        message: format!("IO error: {}", err),
    })
}

/// One stored cookie pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredCookie {
    pub name: String,
    pub value: String,
}

/// A username's persisted cookie entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JarEntry {
    /// Device seed the cookies were issued to.
    pub device: String,
    /// When the entry was written (RFC 3339).
    pub created_at: String,
    /// The authentication cookies, in the order the service set them.
    pub cookies: Vec<StoredCookie>,
}

impl JarEntry {
    /// Create an entry stamped with the current time.
    pub fn new(device: &Device, cookies: Vec<StoredCookie>) -> Self {
        Self {
            device: device.seed().to_string(),
            created_at: Utc::now().to_rfc3339(),
            cookies,
        }
    }
}

/// Cookie storage keyed by username, one JSON file per account.
#[derive(Debug, Clone)]
pub struct FileCookieJar {
    dir: PathBuf,
}

impl FileCookieJar {
    /// Create a jar rooted at the given directory.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn entry_path(&self, username: &Username) -> PathBuf {
        self.dir.join(format!("{}.json", username))
    }

    /// Returns true if a cookie entry exists for the username.
    pub fn has_cookie(&self, username: &Username) -> bool {
        self.entry_path(username).exists()
    }

    /// Load the cookie entry for a username.
    pub fn load(&self, username: &Username) -> Result<JarEntry, Error> {
        let path = self.entry_path(username);
        let json = fs::read_to_string(&path).map_err(map_io)?;
        serde_json::from_str(&json).map_err(|e| {
            Error::Transport(TransportError::Http {
                message: format!("invalid cookie file: {}", e),
            })
        })
    }

    /// Save a cookie entry for a username.
    pub fn save(&self, username: &Username, entry: &JarEntry) -> Result<(), Error> {
        fs::create_dir_all(&self.dir).map_err(map_io)?;

        let path = self.entry_path(username);
        let json = serde_json::to_string_pretty(entry).map_err(|e| {
            Error::Transport(TransportError::Http {
                message: format!("cookie serialization failed: {}", e),
            })
        })?;

        fs::write(&path, &json).map_err(map_io)?;

        // Set restrictive permissions (Unix only)
        #[cfg(unix)]
        {
            let mut perms = fs::metadata(&path).map_err(map_io)?.permissions();
            perms.set_mode(0o600);
            fs::set_permissions(&path, perms).map_err(map_io)?;
        }

        debug!(username = %username, "Cookie entry saved");
        Ok(())
    }

    /// Remove the cookie entry for a username, if present.
    pub fn clear(&self, username: &Username) -> Result<(), Error> {
        let path = self.entry_path(username);
        if path.exists() {
            fs::remove_file(&path).map_err(map_io)?;
        }
        Ok(())
    }
}

/// An in-memory cookie set attached to a session.
#[derive(Debug, Clone, Default)]
pub(crate) struct CookieSet(Vec<StoredCookie>);

impl CookieSet {
    pub fn new(cookies: Vec<StoredCookie>) -> Self {
        Self(cookies)
    }

    /// Render the `Cookie` header value, or None when empty.
    pub fn header_value(&self) -> Option<String> {
        if self.0.is_empty() {
            return None;
        }
        let value = self
            .0
            .iter()
            .map(|c| format!("{}={}", c.name, c.value))
            .collect::<Vec<_>>()
            .join("; ");
        Some(value)
    }

    /// The CSRF token cookie, when present.
    pub fn csrf_token(&self) -> Option<&str> {
        self.0
            .iter()
            .find(|c| c.name == "csrftoken")
            .map(|c| c.value.as_str())
    }
}
