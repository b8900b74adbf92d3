//! Store-backed implementation of RentalLedger

use std::sync::Arc;

use chrono::Utc;

use crate::domain::{DomainError, RentalLedger};
use crate::infrastructure::store::{self, KeyValueStore, RENTALS_KEY};
use crate::models::{Rental, RentalStatus};

pub struct StoreRentalLedger {
    store: Arc<dyn KeyValueStore>,
}

impl StoreRentalLedger {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    fn load(&self) -> Result<Vec<Rental>, DomainError> {
        Ok(store::read_json(self.store.as_ref(), RENTALS_KEY)?.unwrap_or_default())
    }

    fn persist(&self, rentals: &[Rental]) -> Result<(), DomainError> {
        store::write_json(self.store.as_ref(), RENTALS_KEY, &rentals)
    }
}

impl RentalLedger for StoreRentalLedger {
    fn initialize(&self) -> Result<(), DomainError> {
        if !self.store.contains(RENTALS_KEY)? {
            self.persist(&[])?;
        }
        Ok(())
    }

    fn get_all(&self) -> Result<Vec<Rental>, DomainError> {
        self.load()
    }

    fn get_for_user(&self, user_id: &str) -> Result<Vec<Rental>, DomainError> {
        Ok(self
            .load()?
            .into_iter()
            .filter(|r| r.user_id == user_id)
            .collect())
    }

    fn create(&self, user_id: &str, book_id: &str) -> Result<Rental, DomainError> {
        let mut rentals = self.load()?;
        let rental = Rental::new(user_id, book_id, Utc::now());
        rentals.push(rental.clone());
        self.persist(&rentals)?;
        Ok(rental)
    }

    fn mark_returned(
        &self,
        user_id: &str,
        book_id: &str,
    ) -> Result<Option<Rental>, DomainError> {
        let mut rentals = self.load()?;
        // Most recent matching active record; records are append-ordered
        let Some(idx) = rentals
            .iter()
            .rposition(|r| r.user_id == user_id && r.book_id == book_id && r.is_active())
        else {
            tracing::warn!("No active rental for user {} and book {}", user_id, book_id);
            return Ok(None);
        };

        rentals[idx].status = RentalStatus::Returned;
        rentals[idx].returned_at = Some(Utc::now());
        let returned = rentals[idx].clone();
        self.persist(&rentals)?;
        Ok(Some(returned))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::store::MemoryStore;

    fn ledger() -> StoreRentalLedger {
        let ledger = StoreRentalLedger::new(Arc::new(MemoryStore::new()));
        ledger.initialize().unwrap();
        ledger
    }

    #[test]
    fn create_appends_an_active_rental() {
        let ledger = ledger();
        let rental = ledger.create("u1", "b1").unwrap();
        assert_eq!(rental.status, RentalStatus::Active);

        let all = ledger.get_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0], rental);
    }

    #[test]
    fn get_for_user_filters_by_owner() {
        let ledger = ledger();
        ledger.create("u1", "b1").unwrap();
        ledger.create("u2", "b1").unwrap();
        ledger.create("u1", "b2").unwrap();

        let mine = ledger.get_for_user("u1").unwrap();
        assert_eq!(mine.len(), 2);
        assert!(mine.iter().all(|r| r.user_id == "u1"));
    }

    #[test]
    fn mark_returned_flips_the_most_recent_active_record() {
        let ledger = ledger();
        let first = ledger.create("u1", "b1").unwrap();
        let second = ledger.create("u1", "b1").unwrap();

        let returned = ledger.mark_returned("u1", "b1").unwrap().unwrap();
        assert_eq!(returned.id, second.id);
        assert_eq!(returned.status, RentalStatus::Returned);
        assert!(returned.returned_at.is_some());

        // The earlier record is still active
        let all = ledger.get_all().unwrap();
        let earlier = all.iter().find(|r| r.id == first.id).unwrap();
        assert!(earlier.is_active());
    }

    #[test]
    fn mark_returned_without_active_rental_is_a_no_op() {
        let ledger = ledger();
        assert!(ledger.mark_returned("u1", "b1").unwrap().is_none());

        ledger.create("u1", "b1").unwrap();
        ledger.mark_returned("u1", "b1").unwrap();
        // Already returned; nothing left to return
        assert!(ledger.mark_returned("u1", "b1").unwrap().is_none());
        assert_eq!(ledger.get_all().unwrap().len(), 1);
    }
}
