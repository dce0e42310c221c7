//! Media records and the drained post collection.

use serde::Serialize;
use serde_json::Value;

use crate::Result;
use crate::error::InvalidInputError;

/// One media item exactly as the service returned it.
///
/// The payload is schema-agnostic beyond being a JSON object;
/// interpretation is left to higher layers.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct PostRecord(Value);

impl PostRecord {
    /// Wrap a raw feed item, checking that it is a JSON object.
    pub fn new(value: Value) -> Result<Self> {
        if !value.is_object() {
            return Err(InvalidInputError::Record {
                message: "feed item is not a JSON object".to_string(),
            }
            .into());
        }
        Ok(Self(value))
    }

    /// The item's media identifier, when present.
    pub fn id(&self) -> Option<&str> {
        self.0.get("id").and_then(Value::as_str)
    }

    /// Returns the raw payload.
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Consumes the record, returning the raw payload.
    pub fn into_value(self) -> Value {
        self.0
    }
}

/// One account exactly as the service returned it.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct AccountRecord(Value);

impl AccountRecord {
    /// Wrap a raw account payload, checking that it is a JSON object.
    pub fn new(value: Value) -> Result<Self> {
        if !value.is_object() {
            return Err(InvalidInputError::Record {
                message: "account payload is not a JSON object".to_string(),
            }
            .into());
        }
        Ok(Self(value))
    }

    /// The account's username, when present.
    pub fn username(&self) -> Option<&str> {
        self.0.get("username").and_then(Value::as_str)
    }

    /// Returns the raw payload.
    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

/// The ordered result of draining a feed.
///
/// Records appear in fetch order: page order, then within-page order.
/// No reordering or deduplication is performed. The collection is handed
/// to the caller fully populated and is not mutated afterwards.
#[derive(Debug, Default, Clone, Serialize)]
#[serde(transparent)]
pub struct PostCollection(Vec<PostRecord>);

impl PostCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record, preserving fetch order.
    pub fn push(&mut self, post: PostRecord) {
        self.0.push(post);
    }

    /// Number of records collected so far.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over records in fetch order.
    pub fn iter(&self) -> std::slice::Iter<'_, PostRecord> {
        self.0.iter()
    }

    /// Returns the records as a slice.
    pub fn as_slice(&self) -> &[PostRecord] {
        &self.0
    }
}

impl IntoIterator for PostCollection {
    type Item = PostRecord;
    type IntoIter = std::vec::IntoIter<PostRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a PostCollection {
    type Item = &'a PostRecord;
    type IntoIter = std::slice::Iter<'a, PostRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
