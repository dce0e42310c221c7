//! HTTP client for the private API.

use reqwest::header::{COOKIE, HeaderMap, HeaderValue, SET_COOKIE};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument, trace};

use gramjar_core::Device;
use gramjar_core::error::{AuthError, Error, ProtocolError, TransportError};
use gramjar_core::types::ApiUrl;

use crate::endpoints::ApiErrorResponse;
use crate::jar::CookieSet;

/// Map a reqwest failure onto the transport taxonomy.
pub(crate) fn transport(err: reqwest::Error) -> Error {
    if err.is_timeout() {
        Error::Transport(TransportError::Timeout)
    } else if err.is_connect() {
        Error::Transport(TransportError::Connection {
            message: err.to_string(),
        })
    } else {
        Error::Transport(TransportError::Http {
            message: err.to_string(),
        })
    }
}

/// Promote protocol errors that really signal session state.
fn classify(error: ProtocolError) -> Error {
    if error.is_checkpoint() {
        let message = error
            .message
            .unwrap_or_else(|| "checkpoint required".to_string());
        Error::Auth(AuthError::Checkpoint { message })
    } else if error.is_login_required() {
        Error::Auth(AuthError::SessionExpired)
    } else {
        Error::Protocol(error)
    }
}

/// Extract the `name=value` pair from a Set-Cookie header line.
fn parse_set_cookie(line: &str) -> Option<(String, String)> {
    let pair = line.split(';').next()?;
    let (name, value) = pair.split_once('=')?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Some((name.to_string(), value.trim().to_string()))
}

/// HTTP client bound to one API base URL and one device identity.
#[derive(Debug, Clone)]
pub(crate) struct HttpClient {
    client: reqwest::Client,
    base: ApiUrl,
}

impl HttpClient {
    /// Create a new client presenting the device seed as user agent.
    pub fn new(base: ApiUrl, device: &Device) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(device.seed().to_string())
            .build()
            .expect("failed to build HTTP client");

        Self { client, base }
    }

    /// Make an authenticated GET query.
    #[instrument(skip(self, params, cookies), fields(base = %self.base))]
    pub async fn query_authed<Q, R>(
        &self,
        path: &str,
        params: &Q,
        cookies: &CookieSet,
    ) -> Result<R, Error>
    where
        Q: Serialize + std::fmt::Debug,
        R: DeserializeOwned,
    {
        let url = self.base.endpoint_url(path);
        debug!(path, "API query");
        trace!(?params, "query parameters");

        let response = self
            .client
            .get(&url)
            .query(params)
            .headers(self.auth_headers(cookies))
            .send()
            .await
            .map_err(transport)?;

        self.handle_response(response).await
    }

    /// Make an authenticated GET query without parameters.
    #[instrument(skip(self, cookies), fields(base = %self.base))]
    pub async fn get_authed<R>(&self, path: &str, cookies: &CookieSet) -> Result<R, Error>
    where
        R: DeserializeOwned,
    {
        let url = self.base.endpoint_url(path);
        debug!(path, "API query");

        let response = self
            .client
            .get(&url)
            .headers(self.auth_headers(cookies))
            .send()
            .await
            .map_err(transport)?;

        self.handle_response(response).await
    }

    /// Make an authenticated POST procedure that returns no content.
    #[instrument(skip(self, cookies), fields(base = %self.base))]
    pub async fn procedure_authed_no_response(
        &self,
        path: &str,
        cookies: &CookieSet,
    ) -> Result<(), Error> {
        let url = self.base.endpoint_url(path);
        debug!(path, "API procedure (no response)");

        let response = self
            .client
            .post(&url)
            .headers(self.auth_headers(cookies))
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let error = self.parse_error_response(response).await;
            Err(classify(error))
        }
    }

    /// Make an unauthenticated POST procedure (form body), returning the
    /// parsed body together with the cookies the service set on the
    /// response.
    #[instrument(skip(self, body), fields(base = %self.base))]
    pub async fn procedure_capture_cookies<B, R>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(R, Vec<(String, String)>), Error>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let url = self.base.endpoint_url(path);
        debug!(path, "API procedure");

        let response = self
            .client
            .post(&url)
            .form(body)
            .send()
            .await
            .map_err(transport)?;

        let cookies = response
            .headers()
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .filter_map(parse_set_cookie)
            .collect();

        let body = self.handle_response(response).await?;
        Ok((body, cookies))
    }

    /// Create cookie headers for authenticated requests.
    fn auth_headers(&self, cookies: &CookieSet) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(value) = cookies.header_value() {
            headers.insert(
                COOKIE,
                HeaderValue::from_str(&value).expect("invalid cookie characters"),
            );
        }
        if let Some(token) = cookies.csrf_token() {
            headers.insert(
                "x-csrftoken",
                HeaderValue::from_str(token).expect("invalid token characters"),
            );
        }
        headers
    }

    /// Handle an API response, parsing the body or error.
    async fn handle_response<R: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<R, Error> {
        let status = response.status();
        trace!(status = %status, "API response");

        if status.is_success() {
            let body = response.json::<R>().await.map_err(transport)?;
            Ok(body)
        } else {
            let error = self.parse_error_response(response).await;
            Err(classify(error))
        }
    }

    /// Parse an API error response.
    async fn parse_error_response(&self, response: reqwest::Response) -> ProtocolError {
        let status = response.status().as_u16();

        // Try to parse as the API's error format
        match response.json::<ApiErrorResponse>().await {
            Ok(body) => ProtocolError::new(status, body.error_type, body.message),
            Err(_) => ProtocolError::new(status, None, None),
        }
    }
}
