//! Login credentials type.

use std::fmt;

use crate::types::Username;

/// Login credentials for service authentication.
///
/// # Security
///
/// The password is never exposed in Debug output to prevent accidental
/// logging.
///
/// # Example
///
/// ```
/// use gramjar_core::{Credentials, types::Username};
///
/// let creds = Credentials::new(Username::new("alice").unwrap(), "app-password");
/// assert_eq!(creds.username().as_str(), "alice");
/// ```
pub struct Credentials {
    username: Username,
    password: String,
}

impl Credentials {
    /// Create new credentials.
    pub fn new(username: Username, password: impl Into<String>) -> Self {
        Self {
            username,
            password: password.into(),
        }
    }

    /// Returns the username.
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Returns the password.
    ///
    /// # Security
    ///
    /// Use this only when constructing authentication requests.
    /// Never log or display this value.
    pub fn password(&self) -> &str {
        &self.password
    }
}

// Intentionally hide password in Debug output
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

// Clone is intentionally derived to allow credentials to be reused,
// but the type is not Copy to make credential passing explicit.
impl Clone for Credentials {
    fn clone(&self) -> Self {
        Self {
            username: self.username.clone(),
            password: self.password.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_hides_password_in_debug() {
        let creds = Credentials::new(Username::new("alice").unwrap(), "secret123");
        let debug = format!("{:?}", creds);
        assert!(debug.contains("alice"));
        assert!(!debug.contains("secret123"));
        assert!(debug.contains("[REDACTED]"));
    }
}
