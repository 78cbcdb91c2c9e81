//! In-memory record store implementation

use super::error::StoreError;
use super::record::Record;
use siphasher::sip::SipHasher13;
use std::collections::hash_map::{self, HashMap};
use std::fmt;
use std::hash::{BuildHasherDefault, Hash};

/// Type alias for our hash map with SipHasher
type StoreMap<K, V> = HashMap<K, V, BuildHasherDefault<SipHasher13>>;

/// In-memory keyed record store
///
/// Each key maps to at most one value. Inserting an existing key fails
/// instead of overwriting, while lookups and deletes of missing keys are
/// ordinary outcomes and never fail.
///
/// The store does no locking of its own: callers sharing it between tasks
/// wrap it in a mutex.
pub struct RecordStore<K, V> {
    /// The main storage map
    records: StoreMap<K, V>,
}

impl<K: Eq + Hash, V> RecordStore<K, V> {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create a new store with specified initial capacity
    pub fn with_capacity(capacity: usize) -> Self {
        RecordStore {
            records: HashMap::with_capacity_and_hasher(
                capacity,
                BuildHasherDefault::<SipHasher13>::default(),
            ),
        }
    }

    /// Look up the value for a key, `None` if absent
    pub fn lookup<Q>(&self, key: &Q) -> Option<&V>
    where
        K: std::borrow::Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.records.get(key)
    }

    /// Get a mutable reference to the value for a key
    pub fn lookup_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: std::borrow::Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.records.get_mut(key)
    }

    /// Delete a key, returning the removed value if there was one
    ///
    /// Deleting an absent key does nothing.
    pub fn delete<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: std::borrow::Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.records.remove(key)
    }

    /// Check if a key exists
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: std::borrow::Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.records.contains_key(key)
    }

    /// Get the number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Remove all records
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Iterate over all keys, in no particular order
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.records.keys()
    }

    /// Iterate over all values, in no particular order
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.records.values()
    }

    /// Iterate over all key/value pairs, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.records.iter()
    }

    /// Borrow every stored pair as a record
    pub fn records(&self) -> impl Iterator<Item = Record<&K, &V>> {
        self.records.iter().map(|(key, value)| Record::new(key, value))
    }
}

/// Insertion
///
/// Keys must implement `Display` so a rejected insert can name the key in
/// its `StoreError::DuplicateKey`.
impl<K: Eq + Hash + fmt::Display, V> RecordStore<K, V> {
    /// Insert a new record, failing if the key is already present
    ///
    /// On failure the existing value is left untouched.
    pub fn insert(&mut self, key: K, value: V) -> Result<(), StoreError> {
        match self.records.entry(key) {
            hash_map::Entry::Occupied(entry) => {
                Err(StoreError::DuplicateKey(entry.key().to_string()))
            }
            hash_map::Entry::Vacant(entry) => {
                entry.insert(value);
                Ok(())
            }
        }
    }

    /// Insert a record pair
    pub fn insert_record(&mut self, record: Record<K, V>) -> Result<(), StoreError> {
        self.insert(record.key, record.value)
    }
}

impl<K: Eq + Hash, V> Default for RecordStore<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for RecordStore<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.records.iter()).finish()
    }
}
