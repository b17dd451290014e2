use std::sync::Arc;

use crate::{commands::command_error::CommandError, lock::LockService, reply::Reply};

pub struct AcquireArguments {
    lock_key: String,
    ttl_seconds: u64,
}

impl AcquireArguments {
    pub fn parse(arguments: Vec<String>) -> Result<Self, CommandError> {
        if arguments.len() != 2 {
            return Err(CommandError::InvalidAcquireCommand);
        }

        let ttl_seconds = arguments[1]
            .parse::<u64>()
            .map_err(|_| CommandError::InvalidIntegerArgument)?;

        Ok(Self {
            lock_key: arguments[0].clone(),
            ttl_seconds,
        })
    }
}

pub struct ReleaseArguments {
    lock_key: String,
}

impl ReleaseArguments {
    pub fn parse(arguments: Vec<String>) -> Result<Self, CommandError> {
        if arguments.len() != 1 {
            return Err(CommandError::InvalidReleaseCommand);
        }

        Ok(Self {
            lock_key: arguments[0].clone(),
        })
    }
}

/// Handles the ACQUIRE command: `ACQUIRE <lock key> <ttl seconds>`.
///
/// Replies true when the lock was free and is now held for the TTL, false
/// when someone else holds it.
pub async fn acquire(
    locks: Arc<LockService>,
    arguments: Vec<String>,
) -> Result<Reply, CommandError> {
    let acquire_arguments = AcquireArguments::parse(arguments)?;

    let acquired = locks
        .acquire_lock(&acquire_arguments.lock_key, acquire_arguments.ttl_seconds)
        .await?;

    Ok(Reply::Boolean(acquired))
}

/// Handles the RELEASE command: `RELEASE <lock key>`.
pub async fn release(
    locks: Arc<LockService>,
    arguments: Vec<String>,
) -> Result<Reply, CommandError> {
    let release_arguments = ReleaseArguments::parse(arguments)?;

    let released = locks.release_lock(&release_arguments.lock_key).await?;

    Ok(Reply::Boolean(released))
}
