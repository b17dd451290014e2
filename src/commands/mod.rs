mod command_error;
mod command_handler;
mod del;
mod get;
mod hget;
mod hgetall;
mod hset;
mod llen;
mod lock;
mod ping;
mod reservation;
mod rpop;
mod rpush;
mod set;
mod ttl;
mod type_command;

pub use command_error::CommandError;
pub use command_handler::CommandHandler;
