//! Remote service trait.

use async_trait::async_trait;

use crate::types::Username;
use crate::{Credentials, Device, Result};

use super::Session;

/// The remote service, as consumed by session resolution.
///
/// Implementations decide what a cookie is and where it lives; session
/// resolution only asks whether one exists for a username and whether to
/// rehydrate from it or log in fresh.
#[async_trait]
pub trait Gram: Send + Sync {
    /// Session type for this backend.
    type Session: Session;

    /// Returns true if a stored cookie entry exists for the username.
    fn has_cookie(&self, username: &Username) -> bool;

    /// Rebuild a session from the stored cookie entry without contacting
    /// the service.
    ///
    /// The cookies are not validated here; an expired entry fails on
    /// first use.
    fn rehydrate(&self, device: &Device, username: &Username) -> Result<Self::Session>;

    /// Authenticate with the service, persisting the resulting cookies
    /// as a side effect.
    async fn login(&self, device: &Device, credentials: Credentials) -> Result<Self::Session>;
}
