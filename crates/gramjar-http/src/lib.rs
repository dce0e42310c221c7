//! gramjar-http - reqwest-backed implementation of the gramjar
//! capability traits: HTTP client, session, feed cursors and the
//! file-backed cookie jar.

mod client;
mod endpoints;
mod feed;
mod gram;
mod jar;
mod session;

pub use feed::HttpFeedCursor;
pub use gram::HttpGram;
pub use jar::{FileCookieJar, JarEntry, StoredCookie};
pub use session::HttpSession;
