//! Capability traits for the remote service and its collaborators.

mod cursor;
mod gram;
mod progress;
mod session;
mod store;

pub use cursor::FeedCursor;
pub use gram::Gram;
pub use progress::ProgressReporter;
pub use session::Session;
pub use store::{CredentialPrompt, CredentialStore};
