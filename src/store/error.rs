//! Store errors

/// Errors returned by a [`RecordStore`](super::RecordStore)
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The key is already mapped to a value
    #[error("key already exists: {0}")]
    DuplicateKey(String),
}
