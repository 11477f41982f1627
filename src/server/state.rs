use parking_lot::Mutex;
use std::sync::Arc;

use crate::UnitsStore;

/// Shared handler state. Cloning is cheap; all clones see the same registry.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    units: Arc<Mutex<UnitsStore>>,
}

impl AppState {
    pub fn new(store: UnitsStore) -> Self {
        Self {
            units: Arc::new(Mutex::new(store)),
        }
    }

    /// Runs `f` with exclusive access to the registry.
    /// The lock is released before the closure's result is returned.
    pub fn with_units<R>(&self, f: impl FnOnce(&mut UnitsStore) -> R) -> R {
        f(&mut self.units.lock())
    }
}
