//! Private-API endpoint paths and wire shapes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Login procedure.
pub(crate) const LOGIN: &str = "accounts/login/";

/// Username search query.
pub(crate) const SEARCH_USERS: &str = "users/search/";

/// Saved media feed.
pub(crate) const SAVED_FEED: &str = "feed/saved/";

/// Account info path for an account id.
pub(crate) fn user_info(id: &str) -> String {
    format!("users/{}/info/", id)
}

/// Media feed path for an account id.
pub(crate) fn user_feed(id: &str) -> String {
    format!("feed/user/{}/", id)
}

/// Unsave procedure for a media id.
pub(crate) fn media_unsave(id: &str) -> String {
    format!("media/{}/unsave/", id)
}

/// Request body for login.
#[derive(Debug, Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
    pub device_id: &'a str,
}

/// Response from login.
#[derive(Debug, Deserialize)]
pub(crate) struct LoginResponse {
    #[allow(dead_code)]
    pub logged_in_user: Value,
}

/// Query parameters for username search.
#[derive(Debug, Serialize)]
pub(crate) struct SearchQuery<'a> {
    pub q: &'a str,
}

/// Response from username search.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub users: Vec<Value>,
}

/// Response from account info.
#[derive(Debug, Deserialize)]
pub(crate) struct UserInfoResponse {
    pub user: Value,
}

/// Query parameters for a feed page.
#[derive(Debug, Serialize)]
pub(crate) struct FeedQuery<'a> {
    pub count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_id: Option<&'a str>,
}

/// One page of a feed response.
#[derive(Debug, Deserialize)]
pub(crate) struct FeedPageResponse {
    #[serde(default)]
    pub items: Vec<Value>,
    #[serde(default)]
    pub more_available: bool,
    pub next_max_id: Option<String>,
}

/// Error body shape shared by API endpoints.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorResponse {
    pub message: Option<String>,
    pub error_type: Option<String>,
}
