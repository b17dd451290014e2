use crate::{
    commands::command_error::CommandError, key_value_store::SharedStore, reply::Reply,
};

/// Represents the parsed arguments for SET command
pub struct SetArguments {
    /// The key name to write
    key: String,
    /// The value to be stored under the given key
    value: String,
}

impl SetArguments {
    pub fn parse(arguments: Vec<String>) -> Result<Self, CommandError> {
        if arguments.len() != 2 {
            return Err(CommandError::InvalidSetCommand);
        }

        Ok(Self {
            key: arguments[0].clone(),
            value: arguments[1].clone(),
        })
    }
}

/// Handles the SET command.
///
/// Stores the value as a string, replacing whatever the key held before,
/// whatever its type.
///
/// # Examples
///
/// ```ignore
/// // SET mykey hello
/// let reply = set(store, vec!["mykey".to_string(), "hello".to_string()]).await?;
/// // Reply::SimpleString("OK")
/// ```
pub async fn set(store: SharedStore, arguments: Vec<String>) -> Result<Reply, CommandError> {
    let set_arguments = SetArguments::parse(arguments)?;

    let mut store_guard = store.lock().await;
    store_guard.set(&set_arguments.key, &set_arguments.value);

    Ok(Reply::ok())
}
