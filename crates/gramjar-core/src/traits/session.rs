//! Authenticated session trait.

use async_trait::async_trait;

use crate::Result;
use crate::media::AccountRecord;
use crate::types::{AccountId, MediaId, Username};

use super::FeedCursor;

/// An authenticated handle for remote operations.
///
/// A session is bound to exactly one username and one device identity.
#[async_trait]
pub trait Session: Send + Sync {
    /// Feed cursor type for this backend.
    type Cursor: FeedCursor;

    /// The username this session is bound to.
    fn username(&self) -> &Username;

    /// Resolve a username to its account id.
    async fn search_account(&self, username: &Username) -> Result<AccountId>;

    /// Fetch the full raw account record for an account id.
    async fn account_by_id(&self, id: &AccountId) -> Result<AccountRecord>;

    /// Cursor over an account's media feed.
    fn user_media(&self, account: &AccountId, page_size: u32) -> Self::Cursor;

    /// Cursor over the signed-in account's saved media.
    fn saved_media(&self, page_size: u32) -> Self::Cursor;

    /// Remove a post from the signed-in account's saved collection.
    async fn unsave(&self, media: &MediaId) -> Result<()>;
}
