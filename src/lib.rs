//! A small typed key-value store with TTL locks and resource reservations.
//!
//! The crate provides:
//!
//! - A keyspace holding string, hash and list values with per-type commands
//!   (TYPE, SET, GET, DEL, HSET, HGET, HGETALL, LLEN, RPUSH, RPOP)
//! - A lock service that takes a key with set-if-absent plus TTL and releases
//!   it only for the holder that took it
//! - A reservation service that lets one user at a time hold a resource and
//!   only that user check it out
//!
//! The lock and reservation layers talk to storage through the [`backend::Backend`]
//! trait; the in-process store is one implementation.

pub mod backend;
pub mod commands;
pub mod config;
pub mod expiry;
pub mod key_value_store;
pub mod lock;
pub mod reply;
pub mod reservation;
pub mod state;
