use crate::{
    commands::command_error::CommandError, key_value_store::SharedStore, reply::Reply,
};

pub struct HgetallArguments {
    key: String,
}

impl HgetallArguments {
    pub fn parse(arguments: Vec<String>) -> Result<Self, CommandError> {
        if arguments.len() != 1 {
            return Err(CommandError::InvalidHGetAllCommand);
        }

        Ok(Self {
            key: arguments[0].clone(),
        })
    }
}

/// Handles the HGETALL command.
///
/// Replies with every field followed by its value, so the array is twice
/// the size of the hash. A missing key yields an empty array.
pub async fn hgetall(store: SharedStore, arguments: Vec<String>) -> Result<Reply, CommandError> {
    let hgetall_arguments = HgetallArguments::parse(arguments)?;

    let mut store_guard = store.lock().await;
    let fields_and_values = store_guard.hgetall(&hgetall_arguments.key)?;

    Ok(Reply::from_strings(fields_and_values))
}
