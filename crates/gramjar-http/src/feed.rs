//! HTTP-backed feed cursor.

use async_trait::async_trait;
use tracing::{debug, instrument};

use gramjar_core::Result;
use gramjar_core::media::PostRecord;
use gramjar_core::traits::FeedCursor;

use crate::endpoints::{FeedPageResponse, FeedQuery};
use crate::session::HttpSession;

/// Cursor over a paged feed endpoint.
///
/// Pages advance through the service's `next_max_id` token. The
/// more-available flag only ever latches from true to false.
pub struct HttpFeedCursor {
    session: HttpSession,
    path: String,
    page_size: u32,
    next_max_id: Option<String>,
    more_available: bool,
}

impl HttpFeedCursor {
    pub(crate) fn new(session: HttpSession, path: String, page_size: u32) -> Self {
        Self {
            session,
            path,
            page_size,
            next_max_id: None,
            more_available: true,
        }
    }
}

#[async_trait]
impl FeedCursor for HttpFeedCursor {
    #[instrument(skip(self), fields(path = %self.path))]
    async fn next_page(&mut self) -> Result<Vec<PostRecord>> {
        debug!("Fetching feed page");
        let query = FeedQuery {
            count: self.page_size,
            max_id: self.next_max_id.as_deref(),
        };

        let response: FeedPageResponse = self
            .session
            .client()
            .query_authed(&self.path, &query, self.session.cookies())
            .await?;

        self.next_max_id = response.next_max_id;
        self.more_available =
            self.more_available && response.more_available && self.next_max_id.is_some();

        response.items.into_iter().map(PostRecord::new).collect()
    }

    fn more_available(&self) -> bool {
        self.more_available
    }
}
