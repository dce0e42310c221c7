//! Credential storage and collection traits.

use crate::types::Username;
use crate::{Credentials, Result};

/// Persistent credential storage.
pub trait CredentialStore {
    /// The stored username, if any.
    fn username(&self) -> Option<Username>;

    /// The stored password, if any.
    fn password(&self) -> Option<String>;

    /// Persist credentials for later runs.
    fn set_credentials(&mut self, credentials: &Credentials) -> Result<()>;
}

/// Interactive credential collection.
pub trait CredentialPrompt {
    /// Ask the operator for credentials, suspending until input arrives.
    fn ask(&self) -> Result<Credentials>;
}
