use std::sync::Arc;

use tracing::debug;

use crate::{
    commands::{
        command_error::CommandError,
        del::del,
        get::get,
        hget::hget,
        hgetall::hgetall,
        hset::hset,
        llen::llen,
        lock::{acquire, release},
        ping::ping,
        reservation::{checkout, reserve},
        rpop::rpop,
        rpush::rpush,
        set::set,
        ttl::ttl,
        type_command::type_command,
    },
    reply::Reply,
    state::State,
};

/// A command name plus its arguments, ready to be dispatched.
#[derive(Debug, PartialEq, Clone)]
pub struct CommandHandler {
    /// Upper-cased command name (e.g. "GET", "HSET")
    pub name: String,
    pub arguments: Vec<String>,
}

impl CommandHandler {
    /// Builds a handler from the command words; the first word is the name.
    pub fn new(words: Vec<String>) -> Result<Self, CommandError> {
        let mut words = words.into_iter();

        let Some(name) = words.next() else {
            return Err(CommandError::InvalidCommand);
        };

        Ok(Self {
            name: name.to_uppercase(),
            arguments: words.collect(),
        })
    }

    /// Splits a shell line on whitespace.
    pub fn parse_line(line: &str) -> Result<Self, CommandError> {
        Self::new(line.split_whitespace().map(String::from).collect())
    }

    pub async fn handle_command(&self, state: &State) -> Result<Reply, CommandError> {
        debug!(command = %self.name, arguments = ?self.arguments, "handling command");

        let store = Arc::clone(&state.store);

        match self.name.as_str() {
            "PING" => ping(self.arguments.clone()),
            "TYPE" => type_command(store, self.arguments.clone()).await,
            "SET" => set(store, self.arguments.clone()).await,
            "GET" => get(store, self.arguments.clone()).await,
            "DEL" => del(store, self.arguments.clone()).await,
            "HSET" => hset(store, self.arguments.clone()).await,
            "HGET" => hget(store, self.arguments.clone()).await,
            "HGETALL" => hgetall(store, self.arguments.clone()).await,
            "LLEN" => llen(store, self.arguments.clone()).await,
            "RPUSH" => rpush(store, self.arguments.clone()).await,
            "RPOP" => rpop(store, self.arguments.clone()).await,
            "TTL" => ttl(store, self.arguments.clone()).await,
            "ACQUIRE" => acquire(Arc::clone(&state.locks), self.arguments.clone()).await,
            "RELEASE" => release(Arc::clone(&state.locks), self.arguments.clone()).await,
            "RESERVE" => reserve(Arc::clone(&state.reservations), self.arguments.clone()).await,
            "CHECKOUT" => checkout(Arc::clone(&state.reservations), self.arguments.clone()).await,
            _ => Err(CommandError::InvalidCommand),
        }
    }
}
