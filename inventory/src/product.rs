use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One inventoried item: a title, an optional photo, and an expiration date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Assigned by the store on first insert. `None` marks a record that
    /// has not been persisted yet and cannot be targeted by update/delete.
    pub id: Option<i64>,
    pub title: String,
    /// Local file path or URI of the attached photo, if any.
    pub image_uri: Option<String>,
    /// Expiration instant. Persisted as a sortable UTC timestamp string.
    pub expires_at: DateTime<Utc>,
}

impl Product {
    /// A product that has not been written to the store yet.
    pub fn draft(
        title: impl Into<String>,
        image_uri: Option<String>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: None,
            title: title.into(),
            image_uri,
            expires_at,
        }
    }

    /// Whether the store has assigned this product an id.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}
