//! HTTP-backed remote service implementation.

use async_trait::async_trait;
use tracing::{debug, info, instrument};

use gramjar_core::error::{AuthError, Error};
use gramjar_core::traits::Gram;
use gramjar_core::types::{ApiUrl, Username};
use gramjar_core::{Credentials, Device, Result};

use crate::client::HttpClient;
use crate::endpoints::{LOGIN, LoginRequest, LoginResponse};
use crate::jar::{CookieSet, FileCookieJar, JarEntry, StoredCookie};
use crate::session::HttpSession;

/// The remote service over its private HTTP API.
#[derive(Debug, Clone)]
pub struct HttpGram {
    base: ApiUrl,
    jar: FileCookieJar,
}

impl HttpGram {
    /// Create a backend for the given API base URL and cookie jar.
    pub fn new(base: ApiUrl, jar: FileCookieJar) -> Self {
        Self { base, jar }
    }

    /// The cookie jar backing this instance.
    pub fn jar(&self) -> &FileCookieJar {
        &self.jar
    }
}

#[async_trait]
impl Gram for HttpGram {
    type Session = HttpSession;

    fn has_cookie(&self, username: &Username) -> bool {
        self.jar.has_cookie(username)
    }

    #[instrument(skip(self, device), fields(username = %username))]
    fn rehydrate(&self, device: &Device, username: &Username) -> Result<HttpSession> {
        debug!("Rehydrating session from cookie jar");
        let entry = self.jar.load(username)?;
        let client = HttpClient::new(self.base.clone(), device);

        Ok(HttpSession::new(
            client,
            username.clone(),
            CookieSet::new(entry.cookies),
        ))
    }

    #[instrument(skip(self, device, credentials), fields(username = %credentials.username()))]
    async fn login(&self, device: &Device, credentials: Credentials) -> Result<HttpSession> {
        info!("Logging in");
        let client = HttpClient::new(self.base.clone(), device);

        let request = LoginRequest {
            username: credentials.username().as_str(),
            password: credentials.password(),
            device_id: device.seed(),
        };

        let (_response, cookies): (LoginResponse, _) = client
            .procedure_capture_cookies(LOGIN, &request)
            .await
            .map_err(login_rejection)?;

        let cookies: Vec<StoredCookie> = cookies
            .into_iter()
            .map(|(name, value)| StoredCookie { name, value })
            .collect();

        self.jar
            .save(credentials.username(), &JarEntry::new(device, cookies.clone()))?;

        debug!("Login succeeded, cookies persisted");
        Ok(HttpSession::new(
            client,
            credentials.username().clone(),
            CookieSet::new(cookies),
        ))
    }
}

/// Rewrite a login-endpoint protocol rejection as an authentication
/// error.
fn login_rejection(err: Error) -> Error {
    match err {
        Error::Protocol(p) if p.is_login_rejection() => Error::Auth(AuthError::LoginRejected),
        other => other,
    }
}
