use crate::{
    commands::command_error::CommandError, key_value_store::SharedStore, reply::Reply,
};

pub struct RpopArguments {
    key: String,
}

impl RpopArguments {
    pub fn parse(arguments: Vec<String>) -> Result<Self, CommandError> {
        if arguments.len() != 1 {
            return Err(CommandError::InvalidRPopCommand);
        }

        Ok(Self {
            key: arguments[0].clone(),
        })
    }
}

pub async fn rpop(store: SharedStore, arguments: Vec<String>) -> Result<Reply, CommandError> {
    let rpop_arguments = RpopArguments::parse(arguments)?;

    let mut store_guard = store.lock().await;
    let popped = store_guard.rpop(&rpop_arguments.key)?;

    Ok(Reply::from_option(popped))
}
