use crate::{
    commands::command_error::CommandError, key_value_store::SharedStore, reply::Reply,
};

pub struct RpushArguments {
    key: String,
    values: Vec<String>,
}

impl RpushArguments {
    pub fn parse(arguments: Vec<String>) -> Result<Self, CommandError> {
        if arguments.len() < 2 {
            return Err(CommandError::InvalidRPushCommand);
        }

        Ok(Self {
            key: arguments[0].clone(),
            values: arguments[1..].to_vec(),
        })
    }
}

/// Handles the RPUSH command.
///
/// Appends the values at the tail in argument order, creating the list when
/// the key is missing, and replies with the new length.
pub async fn rpush(store: SharedStore, arguments: Vec<String>) -> Result<Reply, CommandError> {
    let rpush_arguments = RpushArguments::parse(arguments)?;

    let mut store_guard = store.lock().await;
    let length = store_guard.rpush(&rpush_arguments.key, &rpush_arguments.values)?;

    Ok(Reply::Integer(length as i64))
}
