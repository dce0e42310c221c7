//! Username type.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// A validated account username.
///
/// Usernames are 1 to 30 characters of ASCII letters, digits, periods
/// and underscores. Mixed-case input is lowercased on construction,
/// matching the service's case-insensitive handling.
///
/// # Example
///
/// ```
/// use gramjar_core::types::Username;
///
/// let username = Username::new("Alice.B").unwrap();
/// assert_eq!(username.as_str(), "alice.b");
/// assert!(Username::new("not a username").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    /// Create a new username from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, too long, or contains
    /// characters outside `[a-z0-9._]` after lowercasing.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let value = s.as_ref().trim().to_ascii_lowercase();

        if value.is_empty() {
            return Err(invalid(s.as_ref(), "must not be empty"));
        }
        if value.len() > 30 {
            return Err(invalid(s.as_ref(), "longer than 30 characters"));
        }
        if !value
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'.' || b == b'_')
        {
            return Err(invalid(
                s.as_ref(),
                "allowed characters are a-z, 0-9, '.' and '_'",
            ));
        }

        Ok(Self(value))
    }

    /// Returns the username as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn invalid(value: &str, reason: &str) -> Error {
    InvalidInputError::Username {
        value: value.to_string(),
        reason: reason.to_string(),
    }
    .into()
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Username {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_typical_usernames() {
        for input in ["alice", "alice.b", "al_ice99", "a"] {
            assert!(Username::new(input).is_ok(), "rejected {input}");
        }
    }

    #[test]
    fn lowercases_input() {
        let username = Username::new("AlicE").unwrap();
        assert_eq!(username.as_str(), "alice");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let username = Username::new("  alice  ").unwrap();
        assert_eq!(username.as_str(), "alice");
    }

    #[test]
    fn rejects_invalid_usernames() {
        for input in ["", "   ", "not a username", "alice!", "ålice"] {
            assert!(Username::new(input).is_err(), "accepted {input:?}");
        }
        assert!(Username::new("a".repeat(31)).is_err());
    }
}
