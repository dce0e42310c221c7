//! Account id type.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// A validated remote account identifier.
///
/// The service issues numeric account ids; this type keeps them as
/// strings to avoid width assumptions, but rejects anything that is not
/// a plain run of ASCII digits.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AccountId(String);

impl AccountId {
    /// Create a new account id from a string, validating the format.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let value = s.as_ref();

        if value.is_empty() {
            return Err(invalid(value, "must not be empty"));
        }
        if !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid(value, "must be ASCII digits"));
        }

        Ok(Self(value.to_string()))
    }

    /// Returns the account id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn invalid(value: &str, reason: &str) -> Error {
    InvalidInputError::AccountId {
        value: value.to_string(),
        reason: reason.to_string(),
    }
    .into()
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for AccountId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
