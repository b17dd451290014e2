use std::sync::Arc;

use crate::{
    backend::{Backend, LocalBackend},
    config::Config,
    key_value_store::{KeyValueStore, SharedStore},
    lock::LockService,
    reservation::ReservationService,
};

/// Everything a command needs, built once at startup and handed to the
/// command dispatcher.
#[derive(Clone)]
pub struct State {
    pub store: SharedStore,
    pub locks: Arc<LockService>,
    pub reservations: Arc<ReservationService>,
}

impl State {
    pub fn new(config: &Config) -> Self {
        let store = KeyValueStore::shared();
        let backend: Arc<dyn Backend> = Arc::new(LocalBackend::new(Arc::clone(&store)));
        let locks = Arc::new(LockService::new(Arc::clone(&backend)));
        let reservations = Arc::new(ReservationService::new(
            backend,
            Arc::clone(&locks),
            config.lock_ttl,
        ));

        Self {
            store,
            locks,
            reservations,
        }
    }
}
