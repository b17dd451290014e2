use std::time::Duration;

use thiserror::Error;

use crate::lock::MAX_LOCK_TTL;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Invalid command line flag")]
    InvalidCommandLineFlag,
    #[error("Invalid command line flag value")]
    InvalidCommandLineFlagValue,
}

pub const DEFAULT_LOCK_TTL_SECONDS: u64 = 30;
pub const DEFAULT_SWEEP_INTERVAL_MS: u64 = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// TTL applied to reservation locks and ownership entries
    pub lock_ttl: Duration,
    /// How often the background sweeper purges expired keys
    pub sweep_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lock_ttl: Duration::from_secs(DEFAULT_LOCK_TTL_SECONDS),
            sweep_interval: Duration::from_millis(DEFAULT_SWEEP_INTERVAL_MS),
        }
    }
}

impl Config {
    /// Builds the configuration from command line arguments, skipping the
    /// program name.
    ///
    /// Supported flags:
    /// * `--lock-ttl <seconds>`
    /// * `--sweep-interval-ms <milliseconds>`
    pub fn new<I: IntoIterator<Item = String>>(command_line_args: I) -> Result<Self, ConfigError> {
        let mut iter = command_line_args.into_iter().skip(1);
        let mut config = Config::default();

        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--lock-ttl" => {
                    let seconds = parse_positive(iter.next())?;
                    if seconds > MAX_LOCK_TTL.as_secs() {
                        return Err(ConfigError::InvalidCommandLineFlagValue);
                    }
                    config.lock_ttl = Duration::from_secs(seconds);
                }
                "--sweep-interval-ms" => {
                    let millis = parse_positive(iter.next())?;
                    config.sweep_interval = Duration::from_millis(millis);
                }
                _ => return Err(ConfigError::InvalidCommandLineFlag),
            }
        }

        Ok(config)
    }
}

fn parse_positive(value: Option<String>) -> Result<u64, ConfigError> {
    let Some(value) = value else {
        return Err(ConfigError::InvalidCommandLineFlagValue);
    };

    match value.parse::<u64>() {
        Ok(number) if number > 0 => Ok(number),
        _ => Err(ConfigError::InvalidCommandLineFlagValue),
    }
}
