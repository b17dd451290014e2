use crate::{
    commands::command_error::CommandError, key_value_store::SharedStore, reply::Reply,
};

pub struct GetArguments {
    key: String,
}

impl GetArguments {
    pub fn parse(arguments: Vec<String>) -> Result<Self, CommandError> {
        if arguments.len() != 1 {
            return Err(CommandError::InvalidGetCommand);
        }

        Ok(Self {
            key: arguments[0].clone(),
        })
    }
}

/// Handles the GET command.
///
/// # Returns
///
/// * `Ok(Reply::BulkString)` - the string stored at the key
/// * `Ok(Reply::Null)` - the key does not exist
/// * `Err(CommandError::WrongType)` - the key holds a hash or a list
/// * `Err(CommandError::InvalidGetCommand)` - the number of arguments is not exactly 1
pub async fn get(store: SharedStore, arguments: Vec<String>) -> Result<Reply, CommandError> {
    let get_arguments = GetArguments::parse(arguments)?;

    let mut store_guard = store.lock().await;
    let value = store_guard.get(&get_arguments.key)?;

    Ok(Reply::from_option(value))
}
