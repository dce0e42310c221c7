//! Error types for the gramjar libraries.
//!
//! This module provides a unified error type with explicit variants for
//! transport, authentication, credential-collection, protocol and input
//! validation errors.

use std::fmt;
use thiserror::Error;

/// The unified error type for gramjar operations.
///
/// This error type covers all possible failure modes in the libraries,
/// with explicit variants to allow callers to handle specific cases.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (DNS, TLS, connection, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Authentication errors (rejected login, expired session).
    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),

    /// Credential-collection errors (nothing stored, prompt aborted).
    #[error("credentials error: {0}")]
    Credentials(#[from] CredentialsError),

    /// Protocol errors (unexpected statuses or response bodies).
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// The service has no account matching the requested username.
    #[error("no account matching '{username}'")]
    AccountNotFound { username: String },

    /// Input validation errors (invalid username, id or URL format).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// Authentication-related errors.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The service rejected the supplied username/password.
    #[error("login rejected by the service")]
    LoginRejected,

    /// A rehydrated session is no longer accepted by the service.
    #[error("session expired, log in again")]
    SessionExpired,

    /// The service demands an out-of-band checkpoint before continuing.
    #[error("checkpoint required: {message}")]
    Checkpoint { message: String },
}

/// Credential-collection errors.
#[derive(Debug, Error)]
pub enum CredentialsError {
    /// No credentials are stored and none could be collected.
    #[error("no credentials available")]
    Unavailable,

    /// The interactive prompt was aborted by the operator.
    #[error("credential prompt aborted")]
    Aborted,

    /// The credential store could not be read or written.
    #[error("credential store failed: {message}")]
    Store { message: String },
}

/// Protocol-level errors from API responses.
#[derive(Debug)]
pub struct ProtocolError {
    /// HTTP status code.
    pub status: u16,
    /// Service error code (if present).
    pub code: Option<String>,
    /// Error message from the server.
    pub message: Option<String>,
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref code) = self.code {
            write!(f, " [{}]", code)?;
        }
        if let Some(ref message) = self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ProtocolError {}

impl ProtocolError {
    /// Create a new protocol error.
    pub fn new(status: u16, code: Option<String>, message: Option<String>) -> Self {
        Self {
            status,
            code,
            message,
        }
    }

    /// Check if the response demands a fresh login.
    pub fn is_login_required(&self) -> bool {
        self.status == 401
            || self.code.as_deref() == Some("login_required")
            || self.message.as_deref() == Some("login_required")
    }

    /// Check if the response rejected the submitted credentials.
    pub fn is_login_rejection(&self) -> bool {
        let marker = self.code.as_deref().or(self.message.as_deref());
        matches!(marker, Some("bad_password") | Some("invalid_user"))
    }

    /// Check if the response demands an out-of-band checkpoint.
    pub fn is_checkpoint(&self) -> bool {
        matches!(
            self.code.as_deref(),
            Some("checkpoint_required") | Some("checkpoint_challenge_required")
        )
    }
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid username format.
    #[error("invalid username '{value}': {reason}")]
    Username { value: String, reason: String },

    /// Invalid account id format.
    #[error("invalid account id '{value}': {reason}")]
    AccountId { value: String, reason: String },

    /// Invalid media id format.
    #[error("invalid media id '{value}': {reason}")]
    MediaId { value: String, reason: String },

    /// Invalid API URL format.
    #[error("invalid API URL '{value}': {reason}")]
    ApiUrl { value: String, reason: String },

    /// Invalid raw record payload.
    #[error("invalid record: {message}")]
    Record { message: String },
}
