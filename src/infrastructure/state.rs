//! Application state containing repositories over one injected store

use std::sync::Arc;

use crate::domain::{AccountRepository, CatalogRepository, DomainError, RentalLedger};
use crate::infrastructure::repositories::{
    StoreAccountRepository, StoreCatalogRepository, StoreRentalLedger,
};
use crate::infrastructure::store::KeyValueStore;

/// State shared by the services and the view layer
#[derive(Clone)]
pub struct AppState {
    /// Book catalog
    pub catalog: Arc<dyn CatalogRepository>,
    /// User accounts and the current-session slot
    pub accounts: Arc<dyn AccountRepository>,
    /// Rental records, active and historical
    pub ledger: Arc<dyn RentalLedger>,
}

impl AppState {
    /// Create an AppState with all repositories over the given store
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            catalog: Arc::new(StoreCatalogRepository::new(store.clone())),
            accounts: Arc::new(StoreAccountRepository::new(store.clone())),
            ledger: Arc::new(StoreRentalLedger::new(store)),
        }
    }

    /// Seed the catalog and ensure the collections exist. Idempotent per
    /// key: existing entries are left untouched.
    pub fn initialize(&self) -> Result<(), DomainError> {
        self.catalog.initialize()?;
        self.accounts.initialize()?;
        self.ledger.initialize()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::store::MemoryStore;

    #[test]
    fn initialize_creates_all_collections() {
        let state = AppState::new(Arc::new(MemoryStore::new()));
        state.initialize().unwrap();

        assert_eq!(state.catalog.get_all().unwrap().len(), 8);
        assert!(state.accounts.find_all().unwrap().is_empty());
        assert!(state.ledger.get_all().unwrap().is_empty());
        assert!(state.accounts.current_session().unwrap().is_none());
    }
}
