//! Feed draining.
//!
//! Drains a feed cursor to exhaustion as a flat accumulation loop, so
//! call depth stays constant on feeds with thousands of items fetched
//! in small pages.

use std::time::Duration;

use crate::Result;
use crate::media::PostCollection;
use crate::traits::{FeedCursor, ProgressReporter};

/// Pause taken after the last page before handing back the collection.
pub const COURTESY_PAUSE: Duration = Duration::from_secs(1);

/// Drain a feed cursor to exhaustion.
///
/// Records accumulate in fetch order (page order, then within-page
/// order) and the reporter sees the running total after every append.
/// At least one page is always fetched, even for feeds that report no
/// further pages up front.
///
/// # Errors
///
/// Any page failure propagates immediately; the partially accumulated
/// collection is dropped with it.
pub async fn drain<C, P>(cursor: &mut C, progress: &mut P) -> Result<PostCollection>
where
    C: FeedCursor,
    P: ProgressReporter,
{
    let mut posts = PostCollection::new();
    progress.start();

    loop {
        let page = cursor.next_page().await?;
        for post in page {
            posts.push(post);
            progress.update(posts.len());
        }

        if !cursor.more_available() {
            tokio::time::sleep(COURTESY_PAUSE).await;
            progress.finish();
            return Ok(posts);
        }
    }
}
