//! Record structure for key/value pairs

/// A single key/value pair held by a [`RecordStore`](super::RecordStore)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record<K, V> {
    /// The key, unique within a store
    pub key: K,

    /// The associated value
    pub value: V,
}

impl<K, V> Record<K, V> {
    /// Create a new record
    pub fn new(key: K, value: V) -> Self {
        Record { key, value }
    }

    /// Split the record back into its key and value
    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K, V> From<(K, V)> for Record<K, V> {
    fn from((key, value): (K, V)) -> Self {
        Record::new(key, value)
    }
}
