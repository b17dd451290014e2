use crate::{
    commands::command_error::CommandError, key_value_store::SharedStore, reply::Reply,
};

pub struct TypeArguments {
    key: String,
}

impl TypeArguments {
    pub fn parse(arguments: Vec<String>) -> Result<Self, CommandError> {
        if arguments.len() != 1 {
            return Err(CommandError::InvalidTypeCommand);
        }

        Ok(Self {
            key: arguments[0].clone(),
        })
    }
}

/// Handles the TYPE command.
///
/// Replies with "string", "hash" or "list", or "none" when the key does not
/// exist. Never fails on an existing key.
pub async fn type_command(
    store: SharedStore,
    arguments: Vec<String>,
) -> Result<Reply, CommandError> {
    let type_arguments = TypeArguments::parse(arguments)?;

    let mut store_guard = store.lock().await;
    let type_name = store_guard.type_of(&type_arguments.key);

    Ok(Reply::SimpleString(type_name.to_string()))
}
