use crate::{
    commands::command_error::CommandError, key_value_store::SharedStore, reply::Reply,
};

pub struct DelArguments {
    keys: Vec<String>,
}

impl DelArguments {
    pub fn parse(arguments: Vec<String>) -> Result<Self, CommandError> {
        if arguments.is_empty() {
            return Err(CommandError::InvalidDelCommand);
        }

        Ok(Self { keys: arguments })
    }
}

pub async fn del(store: SharedStore, arguments: Vec<String>) -> Result<Reply, CommandError> {
    let del_arguments = DelArguments::parse(arguments)?;

    let mut store_guard = store.lock().await;
    let removed = store_guard.del(&del_arguments.keys);

    Ok(Reply::Integer(removed as i64))
}
