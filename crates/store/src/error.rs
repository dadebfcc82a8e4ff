use thiserror::Error;

use crate::id::RecordId;

/// Failures surfaced by collection operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no {collection} record with id {id}")]
    NotFound {
        collection: &'static str,
        id: RecordId,
    },

    #[error("failed to encode {collection} record")]
    Encode {
        collection: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to decode {collection} record {id}")]
    Decode {
        collection: &'static str,
        id: RecordId,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    /// Whether the failure is "the record does not exist", as opposed to a
    /// corrupt or unreadable document.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}
