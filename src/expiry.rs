//! Active expiration of TTL'd entries.
//!
//! Commands already treat expired entries as absent. The sweeper only keeps
//! abandoned lock markers and ownership entries from piling up in memory.

use std::time::Duration;

use tokio::{task::JoinHandle, time::interval};
use tracing::debug;

use crate::key_value_store::SharedStore;

/// Spawns a task that purges expired entries every `period`.
///
/// The task runs until it is aborted or the runtime shuts down.
pub fn spawn_expiry_sweeper(store: SharedStore, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = interval(period);

        loop {
            ticker.tick().await;

            let removed = {
                let mut store_guard = store.lock().await;
                store_guard.remove_expired()
            };

            if removed > 0 {
                debug!(removed, "purged expired keys");
            }
        }
    })
}
