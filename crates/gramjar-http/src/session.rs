//! HTTP-backed session implementation.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, instrument};

use gramjar_core::error::{Error, ProtocolError};
use gramjar_core::media::AccountRecord;
use gramjar_core::traits::Session as SessionTrait;
use gramjar_core::types::{AccountId, MediaId, Username};
use gramjar_core::Result;

use crate::client::HttpClient;
use crate::endpoints::{self, SEARCH_USERS, SearchQuery, SearchResponse, UserInfoResponse};
use crate::feed::HttpFeedCursor;
use crate::jar::CookieSet;

/// Session for the HTTP-backed service.
#[derive(Clone)]
pub struct HttpSession {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    username: Username,
    client: HttpClient,
    cookies: CookieSet,
}

impl HttpSession {
    pub(crate) fn new(client: HttpClient, username: Username, cookies: CookieSet) -> Self {
        Self {
            inner: Arc::new(SessionInner {
                username,
                client,
                cookies,
            }),
        }
    }

    pub(crate) fn client(&self) -> &HttpClient {
        &self.inner.client
    }

    pub(crate) fn cookies(&self) -> &CookieSet {
        &self.inner.cookies
    }
}

#[async_trait]
impl SessionTrait for HttpSession {
    type Cursor = HttpFeedCursor;

    fn username(&self) -> &Username {
        &self.inner.username
    }

    #[instrument(skip(self), fields(session = %self.inner.username, %username))]
    async fn search_account(&self, username: &Username) -> Result<AccountId> {
        debug!("Searching for account");
        let query = SearchQuery {
            q: username.as_str(),
        };
        let response: SearchResponse = self
            .inner
            .client
            .query_authed(SEARCH_USERS, &query, &self.inner.cookies)
            .await?;

        let account = response
            .users
            .iter()
            .find(|user| user.get("username").and_then(Value::as_str) == Some(username.as_str()));

        let Some(account) = account else {
            return Err(Error::AccountNotFound {
                username: username.to_string(),
            });
        };

        let pk = account
            .get("pk")
            .and_then(|pk| match pk {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .ok_or_else(|| {
                Error::Protocol(ProtocolError::new(
                    200,
                    None,
                    Some("search result missing 'pk'".to_string()),
                ))
            })?;

        AccountId::new(pk)
    }

    #[instrument(skip(self), fields(session = %self.inner.username, account = %id))]
    async fn account_by_id(&self, id: &AccountId) -> Result<AccountRecord> {
        debug!("Fetching account record");
        let response: UserInfoResponse = self
            .inner
            .client
            .get_authed(&endpoints::user_info(id.as_str()), &self.inner.cookies)
            .await?;

        AccountRecord::new(response.user)
    }

    fn user_media(&self, account: &AccountId, page_size: u32) -> HttpFeedCursor {
        HttpFeedCursor::new(
            self.clone(),
            endpoints::user_feed(account.as_str()),
            page_size,
        )
    }

    fn saved_media(&self, page_size: u32) -> HttpFeedCursor {
        HttpFeedCursor::new(self.clone(), endpoints::SAVED_FEED.to_string(), page_size)
    }

    #[instrument(skip(self), fields(session = %self.inner.username, media = %media))]
    async fn unsave(&self, media: &MediaId) -> Result<()> {
        debug!("Unsaving media");
        self.inner
            .client
            .procedure_authed_no_response(&endpoints::media_unsave(media.as_str()), &self.inner.cookies)
            .await
    }
}

impl std::fmt::Debug for HttpSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpSession")
            .field("username", &self.inner.username)
            .field("cookies", &"[REDACTED]")
            .finish()
    }
}
