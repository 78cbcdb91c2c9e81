//! In-memory storage module
//!
//! Provides the keyed record store: a mapping from a unique key to a single
//! value with insert, lookup and delete. This module knows nothing about
//! tasks or HTTP.

mod error;
mod memory;
mod record;

pub use error::StoreError;
pub use memory::RecordStore;
pub use record::Record;

/// Username (or user id) to email address
pub type UserDirectory = RecordStore<String, String>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_directory() {
        let mut users = UserDirectory::new();
        users
            .insert("john".to_string(), "john@gmail.com".to_string())
            .unwrap();

        assert!(users.insert("john".to_string(), "john@gmail.com".to_string()).is_err());
        assert_eq!(users.lookup("john").map(String::as_str), Some("john@gmail.com"));

        users.delete("john");
        assert!(users.lookup("john").is_none());
    }
}
