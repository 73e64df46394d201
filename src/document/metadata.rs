use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentMetadata {
    pub created: DateTime<Utc>,
    pub last_modified: DateTime<Utc>,
    pub folder_id: String,
    /// Display hint for the document card; opaque to the store.
    pub gradient: String,
}

impl DocumentMetadata {
    pub fn new(now: DateTime<Utc>, folder_id: impl Into<String>, gradient: impl Into<String>) -> Self {
        DocumentMetadata {
            created: now,
            last_modified: now,
            folder_id: folder_id.into(),
            gradient: gradient.into(),
        }
    }

    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.last_modified = now;
    }
}
