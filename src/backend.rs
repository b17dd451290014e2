use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::key_value_store::{SharedStore, StoreError};

#[derive(Error, Debug, PartialEq, Clone)]
pub enum BackendError {
    #[error("{0}")]
    WrongType(#[from] StoreError),
    #[error("backend unavailable: {0}")]
    Unavailable(String),
}

/// The slice of a key-value store the lock and reservation layers rely on.
///
/// Implementations must make `set_if_absent` and `delete_if_equals` single
/// atomic steps; the lock layer never splits them into check and write.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Writes `value` with a time-to-live only if `key` does not exist.
    async fn set_if_absent(
        &self,
        key: &str,
        value: &str,
        ttl: Duration,
    ) -> Result<bool, BackendError>;

    /// Deletes `key` only if it currently holds `expected`.
    async fn delete_if_equals(&self, key: &str, expected: &str) -> Result<bool, BackendError>;

    async fn get(&self, key: &str) -> Result<Option<String>, BackendError>;

    async fn set_with_expiry(
        &self,
        key: &str,
        value: &str,
        ttl: Duration,
    ) -> Result<(), BackendError>;
}

/// Backend served by the in-process store.
#[derive(Debug, Clone)]
pub struct LocalBackend {
    store: SharedStore,
}

impl LocalBackend {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Backend for LocalBackend {
    async fn set_if_absent(
        &self,
        key: &str,
        value: &str,
        ttl: Duration,
    ) -> Result<bool, BackendError> {
        let mut store_guard = self.store.lock().await;

        Ok(store_guard.set_if_absent(key, value, ttl))
    }

    async fn delete_if_equals(&self, key: &str, expected: &str) -> Result<bool, BackendError> {
        let mut store_guard = self.store.lock().await;

        Ok(store_guard.delete_if_equals(key, expected))
    }

    async fn get(&self, key: &str) -> Result<Option<String>, BackendError> {
        let mut store_guard = self.store.lock().await;

        Ok(store_guard.get(key)?)
    }

    async fn set_with_expiry(
        &self,
        key: &str,
        value: &str,
        ttl: Duration,
    ) -> Result<(), BackendError> {
        let mut store_guard = self.store.lock().await;
        store_guard.set_with_expiry(key, value, ttl);

        Ok(())
    }
}
