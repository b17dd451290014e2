use crate::{
    commands::command_error::CommandError, key_value_store::SharedStore, reply::Reply,
};

pub struct LlenArguments {
    key: String,
}

impl LlenArguments {
    pub fn parse(arguments: Vec<String>) -> Result<Self, CommandError> {
        if arguments.len() != 1 {
            return Err(CommandError::InvalidLLenCommand);
        }

        Ok(Self {
            key: arguments[0].clone(),
        })
    }
}

pub async fn llen(store: SharedStore, arguments: Vec<String>) -> Result<Reply, CommandError> {
    let llen_arguments = LlenArguments::parse(arguments)?;

    let mut store_guard = store.lock().await;
    let length = store_guard.llen(&llen_arguments.key)?;

    Ok(Reply::Integer(length as i64))
}
