use std::{collections::HashMap, fmt, sync::Arc, time::Duration};

use thiserror::Error;
use tokio::{sync::Mutex, time::Instant};
use tracing::{debug, info};
use uuid::Uuid;

use crate::backend::{Backend, BackendError};

#[derive(Error, Debug, PartialEq, Clone)]
pub enum LockError {
    #[error("lock TTL must be greater than zero")]
    InvalidTtl,
    #[error("lock TTL must not exceed {} seconds", MAX_LOCK_TTL.as_secs())]
    TtlOutOfRange,
    #[error("{0}")]
    Backend(#[from] BackendError),
}

/// Longest TTL a lock may be taken for: one year.
pub const MAX_LOCK_TTL: Duration = Duration::from_secs(365 * 24 * 60 * 60);

/// Identifies one holder of a lock. Stored as the marker's value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockToken(String);

impl LockToken {
    fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wraps a token read back from storage.
    pub fn from_stored(token: &str) -> Self {
        Self(token.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LockToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug)]
struct HeldLock {
    token: LockToken,
    expires_at: Instant,
}

/// TTL-bounded mutual exclusion on top of a [`Backend`].
///
/// Acquiring writes a marker holding a fresh token with set-if-absent, so
/// exclusivity comes from the backend's atomic write. Releasing deletes the
/// marker only if it still holds the token this service wrote; a marker that
/// expired and was taken by someone else is left alone.
///
/// Tokens granted through the bool API are remembered per key until they are
/// released or their TTL runs out.
pub struct LockService {
    backend: Arc<dyn Backend>,
    held: Mutex<HashMap<String, HeldLock>>,
}

impl LockService {
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self {
            backend,
            held: Mutex::new(HashMap::new()),
        }
    }

    /// Attempts to take `lock_key` for `ttl`, returning the holder token on
    /// success. Never waits for the current holder.
    pub async fn try_acquire(
        &self,
        lock_key: &str,
        ttl: Duration,
    ) -> Result<Option<LockToken>, LockError> {
        if ttl.is_zero() {
            return Err(LockError::InvalidTtl);
        }

        if ttl > MAX_LOCK_TTL {
            return Err(LockError::TtlOutOfRange);
        }

        let token = LockToken::generate();
        let acquired = self
            .backend
            .set_if_absent(lock_key, token.as_str(), ttl)
            .await?;

        if !acquired {
            debug!(lock_key, "lock already held");
            return Ok(None);
        }

        info!(lock_key, ttl_ms = ttl.as_millis() as u64, "lock acquired");

        Ok(Some(token))
    }

    /// Deletes `lock_key` if its marker still holds `token`.
    pub async fn release(&self, lock_key: &str, token: &LockToken) -> Result<bool, LockError> {
        let released = self
            .backend
            .delete_if_equals(lock_key, token.as_str())
            .await?;

        if released {
            info!(lock_key, "lock released");
        } else {
            debug!(lock_key, "lock not held by this token");
        }

        Ok(released)
    }

    pub async fn acquire_lock(&self, lock_key: &str, ttl_seconds: u64) -> Result<bool, LockError> {
        let ttl = Duration::from_secs(ttl_seconds);

        let Some(token) = self.try_acquire(lock_key, ttl).await? else {
            return Ok(false);
        };

        let now = Instant::now();
        let mut held_guard = self.held.lock().await;

        held_guard.retain(|_, held| held.expires_at > now);
        held_guard.insert(
            lock_key.to_string(),
            HeldLock {
                token,
                expires_at: now + ttl,
            },
        );

        Ok(true)
    }

    /// Releases a lock previously granted by [`LockService::acquire_lock`].
    ///
    /// Returns false when the lock expired, was never acquired through this
    /// service, or now belongs to another holder. The token is kept if the
    /// backend call fails, so the release can be retried.
    pub async fn release_lock(&self, lock_key: &str) -> Result<bool, LockError> {
        let token = {
            let held_guard = self.held.lock().await;
            held_guard.get(lock_key).map(|held| held.token.clone())
        };

        let Some(token) = token else {
            debug!(lock_key, "no token recorded for lock");
            return Ok(false);
        };

        let released = self.release(lock_key, &token).await?;

        let mut held_guard = self.held.lock().await;
        if held_guard
            .get(lock_key)
            .is_some_and(|held| held.token == token)
        {
            held_guard.remove(lock_key);
        }

        Ok(released)
    }

    /// Number of tokens remembered for the bool API. Expired ones are dropped
    /// on the next acquire.
    pub async fn tracked_locks(&self) -> usize {
        self.held.lock().await.len()
    }
}
