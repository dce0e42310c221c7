//! Session resolution.

use crate::traits::{CredentialPrompt, CredentialStore, Gram};
use crate::{Credentials, Device, Result};

/// Resolves a usable session, preferring stored cookies over a fresh
/// login.
///
/// Each call to [`resolve_session`](Self::resolve_session) produces its
/// own session; nothing is cached across calls. Persistence lives
/// entirely in the backend's cookie jar.
pub struct SessionManager<G, S, P> {
    gram: G,
    store: S,
    prompt: P,
    device: Device,
}

impl<G, S, P> SessionManager<G, S, P>
where
    G: Gram,
    S: CredentialStore,
    P: CredentialPrompt,
{
    /// Create a session manager over a backend, credential store and
    /// interactive prompt.
    pub fn new(gram: G, store: S, prompt: P, device: Device) -> Self {
        Self {
            gram,
            store,
            prompt,
            device,
        }
    }

    /// Resolve a session for the configured account.
    ///
    /// Stored cookies are reused optimistically without a validation
    /// round trip; an expired entry surfaces on the first call made
    /// through the returned session.
    pub async fn resolve_session(&mut self) -> Result<G::Session> {
        let credentials = self.resolve_credentials()?;
        self.session_for(credentials).await
    }

    /// Read credentials from the store, prompting interactively (and
    /// persisting the answer) when either half is missing.
    pub fn resolve_credentials(&mut self) -> Result<Credentials> {
        if let (Some(username), Some(password)) = (self.store.username(), self.store.password()) {
            return Ok(Credentials::new(username, password));
        }

        let credentials = self.prompt.ask()?;
        self.store.set_credentials(&credentials)?;
        Ok(credentials)
    }

    /// Produce a session for already-resolved credentials: rehydrated
    /// from the cookie jar when an entry exists, freshly logged in
    /// otherwise.
    pub async fn session_for(&self, credentials: Credentials) -> Result<G::Session> {
        if self.gram.has_cookie(credentials.username()) {
            self.gram.rehydrate(&self.device, credentials.username())
        } else {
            self.gram.login(&self.device, credentials).await
        }
    }
}
