//! Media id type.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// A validated remote media identifier.
///
/// Accepts the bare numeric form (`"12345"`) and the composite
/// `<media>_<owner>` form (`"12345_678"`) the service uses in feed
/// payloads.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MediaId(String);

impl MediaId {
    /// Create a new media id from a string, validating the format.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let value = s.as_ref();

        if value.is_empty() {
            return Err(invalid(value, "must not be empty"));
        }

        let mut parts = value.split('_');
        let media = parts.next().unwrap_or("");
        let owner = parts.next();
        if parts.next().is_some() {
            return Err(invalid(value, "more than one '_' separator"));
        }

        if media.is_empty() || !media.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid(value, "media part must be ASCII digits"));
        }
        if let Some(owner) = owner
            && (owner.is_empty() || !owner.bytes().all(|b| b.is_ascii_digit()))
        {
            return Err(invalid(value, "owner part must be ASCII digits"));
        }

        Ok(Self(value.to_string()))
    }

    /// Returns the media id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn invalid(value: &str, reason: &str) -> Error {
    InvalidInputError::MediaId {
        value: value.to_string(),
        reason: reason.to_string(),
    }
    .into()
}

impl fmt::Display for MediaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for MediaId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bare_and_composite_ids() {
        assert!(MediaId::new("12345").is_ok());
        assert!(MediaId::new("12345_678").is_ok());
    }

    #[test]
    fn rejects_malformed_ids() {
        for input in ["", "_", "12345_", "_678", "12_34_56", "12a45"] {
            assert!(MediaId::new(input).is_err(), "accepted {input:?}");
        }
    }
}
