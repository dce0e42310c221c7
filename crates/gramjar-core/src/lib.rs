//! gramjar-core - Core types, traits and algorithms for the gramjar feed archiver.

pub mod credentials;
pub mod device;
pub mod error;
pub mod feed;
pub mod media;
pub mod session;
pub mod traits;
pub mod types;

pub use credentials::Credentials;
pub use device::Device;
pub use error::Error;
pub use media::{AccountRecord, PostCollection, PostRecord};
pub use session::SessionManager;
pub use traits::{
    CredentialPrompt, CredentialStore, FeedCursor, Gram, ProgressReporter, Session,
};
pub use types::{AccountId, ApiUrl, MediaId, Username};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
