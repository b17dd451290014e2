use thiserror::Error;

use crate::{
    key_value_store::{StoreError, WRONG_TYPE_MESSAGE},
    lock::LockError,
    reservation::ReservationError,
};

#[derive(Error, Debug, PartialEq)]
pub enum CommandError {
    #[error("invalid command")]
    InvalidCommand,
    #[error("invalid PING command")]
    InvalidPingCommand,
    #[error("invalid TYPE command")]
    InvalidTypeCommand,
    #[error("invalid SET command")]
    InvalidSetCommand,
    #[error("invalid GET command")]
    InvalidGetCommand,
    #[error("invalid DEL command")]
    InvalidDelCommand,
    #[error("invalid HSET command")]
    InvalidHSetCommand,
    #[error("invalid HGET command")]
    InvalidHGetCommand,
    #[error("invalid HGETALL command")]
    InvalidHGetAllCommand,
    #[error("invalid LLEN command")]
    InvalidLLenCommand,
    #[error("invalid RPUSH command")]
    InvalidRPushCommand,
    #[error("invalid RPOP command")]
    InvalidRPopCommand,
    #[error("invalid TTL command")]
    InvalidTtlCommand,
    #[error("invalid ACQUIRE command")]
    InvalidAcquireCommand,
    #[error("invalid RELEASE command")]
    InvalidReleaseCommand,
    #[error("invalid RESERVE command")]
    InvalidReserveCommand,
    #[error("invalid CHECKOUT command")]
    InvalidCheckoutCommand,
    #[error("value is not an integer or out of range")]
    InvalidIntegerArgument,
    #[error("{}", WRONG_TYPE_MESSAGE)]
    WrongType,
    #[error("lock error: {0}")]
    Lock(#[from] LockError),
    #[error("reservation error: {0}")]
    Reservation(#[from] ReservationError),
}

impl From<StoreError> for CommandError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::WrongType => CommandError::WrongType,
        }
    }
}

impl CommandError {
    /// The error line shown to the caller. Type mismatches keep the
    /// `WRONGTYPE` prefix; everything else is an `ERR`.
    pub fn as_string(&self) -> String {
        match self {
            CommandError::WrongType => WRONG_TYPE_MESSAGE.to_string(),
            CommandError::InvalidIntegerArgument => {
                "ERR value is not an integer or out of range".to_string()
            }
            CommandError::Lock(e) => format!("ERR {}", e),
            CommandError::Reservation(e) => format!("ERR {}", e),
            _ => {
                let message = self.to_string();
                let mut chars = message.chars();

                match chars.next() {
                    Some(first) => format!("ERR {}{}", first.to_uppercase(), chars.as_str()),
                    None => "ERR".to_string(),
                }
            }
        }
    }
}
