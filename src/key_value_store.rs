use std::{
    collections::{HashMap, VecDeque},
    sync::Arc,
    time::Duration,
};

use thiserror::Error;
use tokio::{sync::Mutex, time::Instant};

pub const WRONG_TYPE_MESSAGE: &str =
    "WRONGTYPE Operation against a key holding the wrong kind of value";

#[derive(Error, Debug, PartialEq, Clone, Copy)]
pub enum StoreError {
    #[error("{}", WRONG_TYPE_MESSAGE)]
    WrongType,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DataType {
    String(String),
    Hash(HashMap<String, String>),
    List(VecDeque<String>),
}

impl DataType {
    pub fn type_name(&self) -> &'static str {
        match self {
            DataType::String(_) => "string",
            DataType::Hash(_) => "hash",
            DataType::List(_) => "list",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Value {
    pub data: DataType,
    pub expiration: Option<Instant>,
}

impl Value {
    fn persistent(data: DataType) -> Self {
        Self {
            data,
            expiration: None,
        }
    }

    fn is_expired(&self, now: Instant) -> bool {
        self.expiration.is_some_and(|expiration| now >= expiration)
    }
}

/// Longest expiry the store will schedule, about a hundred years out.
pub const MAX_EXPIRY: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

fn expires_at(ttl: Duration) -> Instant {
    Instant::now() + ttl.min(MAX_EXPIRY)
}

/// The store handle shared by command handlers, the lock backend and the
/// expiry sweeper. Every command runs under this single mutex.
pub type SharedStore = Arc<Mutex<KeyValueStore>>;

/// In-memory keyspace holding string, hash and list values.
///
/// Expired entries are removed lazily on access, so every command observes
/// them as absent even before the sweeper catches up.
#[derive(Debug, Default)]
pub struct KeyValueStore {
    entries: HashMap<String, Value>,
}

impl KeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SharedStore {
        Arc::new(Mutex::new(Self::new()))
    }

    /// Number of entries, including ones that expired but were not yet purged.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn remove_if_expired(&mut self, key: &str) -> bool {
        let expired = self
            .entries
            .get(key)
            .is_some_and(|value| value.is_expired(Instant::now()));

        if expired {
            self.entries.remove(key);
        }

        expired
    }

    fn live(&mut self, key: &str) -> Option<&mut Value> {
        self.remove_if_expired(key);
        self.entries.get_mut(key)
    }

    /// Returns "string", "hash", "list" or "none".
    pub fn type_of(&mut self, key: &str) -> &'static str {
        match self.live(key) {
            Some(value) => value.data.type_name(),
            None => "none",
        }
    }

    pub fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(
            key.to_string(),
            Value::persistent(DataType::String(value.to_string())),
        );
    }

    pub fn get(&mut self, key: &str) -> Result<Option<String>, StoreError> {
        match self.live(key) {
            None => Ok(None),
            Some(value) => match &value.data {
                DataType::String(s) => Ok(Some(s.clone())),
                _ => Err(StoreError::WrongType),
            },
        }
    }

    pub fn del(&mut self, keys: &[String]) -> usize {
        keys.iter()
            .filter(|key| {
                let expired = self.remove_if_expired(key);
                !expired && self.entries.remove(key.as_str()).is_some()
            })
            .count()
    }

    pub fn hset(&mut self, key: &str, field: &str, value: &str) -> Result<bool, StoreError> {
        self.remove_if_expired(key);

        let entry = self
            .entries
            .entry(key.to_string())
            .or_insert_with(|| Value::persistent(DataType::Hash(HashMap::new())));

        let DataType::Hash(ref mut map) = entry.data else {
            return Err(StoreError::WrongType);
        };

        Ok(map.insert(field.to_string(), value.to_string()).is_none())
    }

    pub fn hget(&mut self, key: &str, field: &str) -> Result<Option<String>, StoreError> {
        match self.live(key) {
            None => Ok(None),
            Some(value) => match &value.data {
                DataType::Hash(map) => Ok(map.get(field).cloned()),
                _ => Err(StoreError::WrongType),
            },
        }
    }

    /// Fields and values interleaved: `[f1, v1, f2, v2, ...]`.
    pub fn hgetall(&mut self, key: &str) -> Result<Vec<String>, StoreError> {
        match self.live(key) {
            None => Ok(Vec::new()),
            Some(value) => match &value.data {
                DataType::Hash(map) => Ok(map
                    .iter()
                    .flat_map(|(field, value)| [field.clone(), value.clone()])
                    .collect()),
                _ => Err(StoreError::WrongType),
            },
        }
    }

    pub fn llen(&mut self, key: &str) -> Result<usize, StoreError> {
        match self.live(key) {
            None => Ok(0),
            Some(value) => match &value.data {
                DataType::List(list) => Ok(list.len()),
                _ => Err(StoreError::WrongType),
            },
        }
    }

    pub fn rpush(&mut self, key: &str, values: &[String]) -> Result<usize, StoreError> {
        self.remove_if_expired(key);

        let entry = self
            .entries
            .entry(key.to_string())
            .or_insert_with(|| Value::persistent(DataType::List(VecDeque::new())));

        let DataType::List(ref mut list) = entry.data else {
            return Err(StoreError::WrongType);
        };

        list.extend(values.iter().cloned());

        Ok(list.len())
    }

    /// Pops the tail element. A list emptied by the pop is removed.
    pub fn rpop(&mut self, key: &str) -> Result<Option<String>, StoreError> {
        let Some(value) = self.live(key) else {
            return Ok(None);
        };

        let DataType::List(ref mut list) = value.data else {
            return Err(StoreError::WrongType);
        };

        let popped = list.pop_back();

        if list.is_empty() {
            self.entries.remove(key);
        }

        Ok(popped)
    }

    /// Writes a string with an expiry only if the key is absent or expired.
    pub fn set_if_absent(&mut self, key: &str, value: &str, ttl: Duration) -> bool {
        if self.live(key).is_some() {
            return false;
        }

        self.set_with_expiry(key, value, ttl);

        true
    }

    /// TTLs beyond [`MAX_EXPIRY`] are clamped to it.
    pub fn set_with_expiry(&mut self, key: &str, value: &str, ttl: Duration) {
        self.entries.insert(
            key.to_string(),
            Value {
                data: DataType::String(value.to_string()),
                expiration: Some(expires_at(ttl)),
            },
        );
    }

    /// Removes the key only if it currently holds the string `expected`.
    pub fn delete_if_equals(&mut self, key: &str, expected: &str) -> bool {
        let matches = match self.live(key) {
            Some(Value {
                data: DataType::String(current),
                ..
            }) => current.as_str() == expected,
            _ => false,
        };

        if matches {
            self.entries.remove(key);
        }

        matches
    }

    /// `None` when the key is absent, `Some(None)` when it never expires.
    pub fn ttl(&mut self, key: &str) -> Option<Option<Duration>> {
        let value = self.live(key)?;

        Some(
            value
                .expiration
                .map(|expiration| expiration.saturating_duration_since(Instant::now())),
        )
    }

    /// Purges every expired entry and returns how many were removed.
    pub fn remove_expired(&mut self) -> usize {
        let now = Instant::now();
        let before = self.entries.len();

        self.entries.retain(|_, value| !value.is_expired(now));

        before - self.entries.len()
    }
}
