use std::{sync::Arc, time::Duration};

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{
    backend::{Backend, BackendError},
    lock::{LockError, LockService, LockToken},
};

#[derive(Error, Debug, PartialEq, Clone)]
pub enum ReservationError {
    #[error("{0}")]
    Lock(#[from] LockError),
    #[error("{0}")]
    Backend(#[from] BackendError),
    #[error("owner entry for {0} is not a user ID and lock token")]
    CorruptOwner(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceState {
    Free,
    Reserved,
}

pub fn owner_key(resource_id: &str) -> String {
    format!("{}:owner", resource_id)
}

fn owner_record(user_id: u64, token: &LockToken) -> String {
    format!("{}:{}", user_id, token)
}

/// Splits `<userID>:<token>` back into its parts.
fn parse_owner_record(
    resource_id: &str,
    record: &str,
) -> Result<(u64, LockToken), ReservationError> {
    let corrupt = || ReservationError::CorruptOwner(resource_id.to_string());

    let (user_id, token) = record.split_once(':').ok_or_else(corrupt)?;
    let user_id = user_id.parse::<u64>().map_err(|_| corrupt())?;

    if token.is_empty() {
        return Err(corrupt());
    }

    Ok((user_id, LockToken::from_stored(token)))
}

/// Exclusive reservation of resources by user.
///
/// A reservation is the lock on `resource_id` plus an ownership entry at
/// `<resource_id>:owner` holding `<userID>:<lock token>`. Both share one TTL.
/// Checkout releases the lock with the recorded token and clears the entry
/// only if it still holds the record that was read. A checkout that runs late
/// never touches a reservation granted after the old one expired.
///
/// The two are written and cleared in separate backend calls. A crash between
/// them leaves a lock without owner (the resource stays unavailable until the
/// lock TTL runs out) or an owner without lock (cleared by the owner's next
/// checkout or by the entry's own TTL).
pub struct ReservationService {
    backend: Arc<dyn Backend>,
    locks: Arc<LockService>,
    ttl: Duration,
}

impl ReservationService {
    pub fn new(backend: Arc<dyn Backend>, locks: Arc<LockService>, ttl: Duration) -> Self {
        Self {
            backend,
            locks,
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub async fn owner(&self, resource_id: &str) -> Result<Option<u64>, ReservationError> {
        let Some(record) = self.backend.get(&owner_key(resource_id)).await? else {
            return Ok(None);
        };

        let (user_id, _) = parse_owner_record(resource_id, &record)?;

        Ok(Some(user_id))
    }

    pub async fn state(&self, resource_id: &str) -> Result<ResourceState, ReservationError> {
        match self.owner(resource_id).await? {
            Some(_) => Ok(ResourceState::Reserved),
            None => Ok(ResourceState::Free),
        }
    }

    /// Reserves `resource_id` for `user_id`. Returns false immediately if the
    /// resource is already reserved or its lock is held.
    pub async fn reserve(&self, resource_id: &str, user_id: u64) -> Result<bool, ReservationError> {
        let key = owner_key(resource_id);

        if self.backend.get(&key).await?.is_some() {
            return Ok(false);
        }

        let Some(token) = self.locks.try_acquire(resource_id, self.ttl).await? else {
            debug!(resource_id, "resource lock already held");
            return Ok(false);
        };

        self.backend
            .set_with_expiry(&key, &owner_record(user_id, &token), self.ttl)
            .await?;

        info!(resource_id, user_id, "resource reserved");

        Ok(true)
    }

    /// Releases `resource_id` if `user_id` owns it.
    pub async fn checkout(&self, resource_id: &str, user_id: u64) -> Result<bool, ReservationError> {
        let key = owner_key(resource_id);

        let Some(record) = self.backend.get(&key).await? else {
            return Ok(false);
        };

        let (owner, token) = parse_owner_record(resource_id, &record)?;

        if owner != user_id {
            warn!(resource_id, user_id, owner, "checkout rejected for non-owner");
            return Ok(false);
        }

        let released = self.locks.release(resource_id, &token).await?;
        let cleared = self.backend.delete_if_equals(&key, &record).await?;

        if released {
            info!(resource_id, user_id, "resource checked out");
        } else if cleared {
            warn!(resource_id, user_id, "owner entry outlived its lock");
        } else {
            warn!(resource_id, user_id, "reservation expired before checkout");
        }

        Ok(released)
    }
}
