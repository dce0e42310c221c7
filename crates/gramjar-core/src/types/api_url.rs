//! API base URL type.

use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::error::{Error, InvalidInputError};

/// A validated API base URL.
///
/// Network endpoints must use HTTPS; plain HTTP is accepted only for
/// localhost so tests can run against a local mock server.
///
/// # Example
///
/// ```
/// use gramjar_core::types::ApiUrl;
///
/// let api = ApiUrl::new("https://i.instagram.com/api/v1").unwrap();
/// assert_eq!(
///     api.endpoint_url("feed/saved/"),
///     "https://i.instagram.com/api/v1/feed/saved/"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ApiUrl(Url);

impl ApiUrl {
    /// Create a new API URL from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not valid or doesn't meet
    /// requirements.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let url = Url::parse(s).map_err(|e| InvalidInputError::ApiUrl {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        Self::validate(&url, s)?;

        // Normalize: remove trailing slash
        let normalized = if url.path() == "/" {
            let mut u = url.clone();
            u.set_path("");
            u
        } else {
            url
        };

        Ok(Self(normalized))
    }

    /// Returns the full URL for an endpoint path.
    pub fn endpoint_url(&self, path: &str) -> String {
        let base = self.0.as_str().trim_end_matches('/');
        format!("{}/{}", base, path)
    }

    /// Returns the base URL as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the host string.
    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }

    fn validate(url: &Url, original: &str) -> Result<(), Error> {
        let invalid = |reason: &str| {
            Error::from(InvalidInputError::ApiUrl {
                value: original.to_string(),
                reason: reason.to_string(),
            })
        };

        match url.scheme() {
            "https" => Ok(()),
            "http" => {
                let host = url.host_str().unwrap_or("");
                if host == "localhost" || host == "127.0.0.1" {
                    Ok(())
                } else {
                    Err(invalid("http is only allowed for localhost"))
                }
            }
            scheme => Err(invalid(&format!("unsupported scheme '{}'", scheme))),
        }
    }
}

impl fmt::Display for ApiUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

impl FromStr for ApiUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_https_urls() {
        let api = ApiUrl::new("https://i.instagram.com/api/v1").unwrap();
        assert_eq!(api.as_str(), "https://i.instagram.com/api/v1");
    }

    #[test]
    fn accepts_http_localhost_only() {
        assert!(ApiUrl::new("http://127.0.0.1:8080").is_ok());
        assert!(ApiUrl::new("http://localhost:8080").is_ok());
        assert!(ApiUrl::new("http://example.com").is_err());
    }

    #[test]
    fn rejects_other_schemes() {
        assert!(ApiUrl::new("ftp://example.com").is_err());
        assert!(ApiUrl::new("not a url").is_err());
    }

    #[test]
    fn joins_endpoint_paths() {
        let api = ApiUrl::new("https://example.com/").unwrap();
        assert_eq!(
            api.endpoint_url("accounts/login/"),
            "https://example.com/accounts/login/"
        );
    }
}
