use crate::{
    commands::command_error::CommandError, key_value_store::SharedStore, reply::Reply,
};

pub struct HsetArguments {
    key: String,
    field: String,
    value: String,
}

impl HsetArguments {
    pub fn parse(arguments: Vec<String>) -> Result<Self, CommandError> {
        if arguments.len() != 3 {
            return Err(CommandError::InvalidHSetCommand);
        }

        Ok(Self {
            key: arguments[0].clone(),
            field: arguments[1].clone(),
            value: arguments[2].clone(),
        })
    }
}

/// Handles the HSET command.
///
/// Creates the hash when the key is missing. Replies 1 when the field is
/// new and 0 when an existing field was overwritten.
pub async fn hset(store: SharedStore, arguments: Vec<String>) -> Result<Reply, CommandError> {
    let hset_arguments = HsetArguments::parse(arguments)?;

    let mut store_guard = store.lock().await;
    let is_new_field = store_guard.hset(
        &hset_arguments.key,
        &hset_arguments.field,
        &hset_arguments.value,
    )?;

    Ok(Reply::Integer(i64::from(is_new_field)))
}
