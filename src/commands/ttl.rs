use crate::{
    commands::command_error::CommandError, key_value_store::SharedStore, reply::Reply,
};

pub struct TtlArguments {
    key: String,
}

impl TtlArguments {
    pub fn parse(arguments: Vec<String>) -> Result<Self, CommandError> {
        if arguments.len() != 1 {
            return Err(CommandError::InvalidTtlCommand);
        }

        Ok(Self {
            key: arguments[0].clone(),
        })
    }
}

/// Handles the TTL command.
///
/// Replies -2 for a missing key, -1 for a key without expiry, otherwise the
/// remaining lifetime in seconds rounded up.
pub async fn ttl(store: SharedStore, arguments: Vec<String>) -> Result<Reply, CommandError> {
    let ttl_arguments = TtlArguments::parse(arguments)?;

    let mut store_guard = store.lock().await;

    let seconds = match store_guard.ttl(&ttl_arguments.key) {
        None => -2,
        Some(None) => -1,
        Some(Some(remaining)) => remaining.as_millis().div_ceil(1000) as i64,
    };

    Ok(Reply::Integer(seconds))
}
