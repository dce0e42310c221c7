//! Core identifier types.
//!
//! These types enforce service invariants at construction time,
//! ensuring invalid states are unrepresentable.

mod account_id;
mod api_url;
mod media_id;
mod username;

pub use account_id::AccountId;
pub use api_url::ApiUrl;
pub use media_id::MediaId;
pub use username::Username;
