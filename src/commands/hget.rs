use crate::{
    commands::command_error::CommandError, key_value_store::SharedStore, reply::Reply,
};

pub struct HgetArguments {
    key: String,
    field: String,
}

impl HgetArguments {
    pub fn parse(arguments: Vec<String>) -> Result<Self, CommandError> {
        if arguments.len() != 2 {
            return Err(CommandError::InvalidHGetCommand);
        }

        Ok(Self {
            key: arguments[0].clone(),
            field: arguments[1].clone(),
        })
    }
}

pub async fn hget(store: SharedStore, arguments: Vec<String>) -> Result<Reply, CommandError> {
    let hget_arguments = HgetArguments::parse(arguments)?;

    let mut store_guard = store.lock().await;
    let value = store_guard.hget(&hget_arguments.key, &hget_arguments.field)?;

    Ok(Reply::from_option(value))
}
