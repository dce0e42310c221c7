//! Feed cursor trait.

use async_trait::async_trait;

use crate::Result;
use crate::media::PostRecord;

/// A stateful paginator over a remote feed.
///
/// `more_available` is monotonic: once it reports false it never reports
/// true again, which is what bounds a drain to the feed's true length.
#[async_trait]
pub trait FeedCursor: Send {
    /// Fetch the next page of records, advancing the cursor.
    async fn next_page(&mut self) -> Result<Vec<PostRecord>>;

    /// Whether the feed has pages beyond those already fetched.
    fn more_available(&self) -> bool;
}
