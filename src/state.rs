use crate::cafe::CafeStore;
use crate::catalog::CatalogStore;
use crate::orders::{OrderNumberGenerator, OrderStore};

/// Shared application state handed to every command handler.
///
/// Clones share the underlying stores.
#[derive(Clone, Default)]
pub struct AppState {
    pub catalog: CatalogStore,
    pub orders: OrderStore,
    pub cafe: CafeStore,
    pub numbers: OrderNumberGenerator,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
