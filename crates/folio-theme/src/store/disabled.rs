//! A store that refuses every operation.

use super::{PreferenceStore, StoreError};

/// A preference store that is never available.
///
/// Stands in for storage that has been switched off, such as a private
/// browsing session or a user who disabled persistence in the config.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledStore;

impl PreferenceStore for DisabledStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Unavailable)
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable)
    }
}
