//! Persistent preference storage.
//!
//! This module provides the [`PreferenceStore`] trait and its backends:
//!
//! - [`MemoryStore`]: In-process map, shareable between handles
//! - [`FileStore`]: JSON key-value file that survives restarts
//! - [`DisabledStore`]: A store that is never available
//!
//! Stores are allowed to fail. Callers treat every [`StoreError`] as
//! non-fatal and keep working from in-memory state.

mod disabled;
mod file;
mod memory;

use std::path::PathBuf;

use thiserror::Error;

pub use disabled::DisabledStore;
pub use file::FileStore;
pub use memory::MemoryStore;

/// Key the theme preference is stored under unless configured otherwise.
pub const DEFAULT_THEME_KEY: &str = "theme";

/// Error returned when a store cannot be read or written.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store is switched off or was never reachable.
    #[error("preference store is unavailable")]
    Unavailable,
    /// Reading the backing file failed.
    #[error("failed to read preferences from {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Writing the backing file failed.
    #[error("failed to write preferences to {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The backing file exists but is not a JSON object of strings.
    #[error("preferences file {path} is malformed")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A string key-value store for user preferences.
///
/// Implementations need not be durable; the controller only requires that
/// `get` returns what a previous successful `set` wrote.
pub trait PreferenceStore {
    /// Returns the value stored under `key`, or `None` if it was never set.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}
