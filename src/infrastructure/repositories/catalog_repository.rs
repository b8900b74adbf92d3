//! Store-backed implementation of CatalogRepository

use std::sync::Arc;

use crate::domain::{CatalogRepository, DomainError};
use crate::infrastructure::seed;
use crate::infrastructure::store::{self, BOOKS_KEY, KeyValueStore};
use crate::models::Book;

pub struct StoreCatalogRepository {
    store: Arc<dyn KeyValueStore>,
}

impl StoreCatalogRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Snapshot of the collection. A missing or corrupted entry falls back
    /// to the seed dataset.
    fn load(&self) -> Result<Vec<Book>, DomainError> {
        Ok(store::read_json(self.store.as_ref(), BOOKS_KEY)?.unwrap_or_else(seed::seed_books))
    }

    /// Whole-collection rewrite; there is no partial update
    fn persist(&self, books: &[Book]) -> Result<(), DomainError> {
        store::write_json(self.store.as_ref(), BOOKS_KEY, &books)
    }
}

impl CatalogRepository for StoreCatalogRepository {
    fn initialize(&self) -> Result<(), DomainError> {
        if !self.store.contains(BOOKS_KEY)? {
            self.persist(&seed::seed_books())?;
        }
        Ok(())
    }

    fn get_all(&self) -> Result<Vec<Book>, DomainError> {
        self.load()
    }

    fn find_by_id(&self, id: &str) -> Result<Option<Book>, DomainError> {
        Ok(self.load()?.into_iter().find(|b| b.id == id))
    }

    fn adjust_availability(&self, book_id: &str, delta: i32) -> Result<(), DomainError> {
        let mut books = self.load()?;
        match books.iter_mut().find(|b| b.id == book_id) {
            Some(book) => {
                book.adjust_available(delta);
                self.persist(&books)
            }
            None => {
                tracing::warn!("Availability adjustment for unknown book {}", book_id);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::store::MemoryStore;

    fn repo() -> StoreCatalogRepository {
        StoreCatalogRepository::new(Arc::new(MemoryStore::new()))
    }

    #[test]
    fn initialize_seeds_once_and_is_idempotent() {
        let repo = repo();
        repo.initialize().unwrap();
        assert_eq!(repo.get_all().unwrap().len(), 8);

        // Mutate, then initialize again: the mutation must survive
        repo.adjust_availability("3", -1).unwrap();
        repo.initialize().unwrap();
        let dune = repo.find_by_id("3").unwrap().unwrap();
        assert_eq!(dune.available_copies, 3);
    }

    #[test]
    fn adjust_clamps_within_bounds() {
        let repo = repo();
        repo.initialize().unwrap();

        // Book "5" starts at 1 of 3
        repo.adjust_availability("5", -1).unwrap();
        repo.adjust_availability("5", -1).unwrap();
        assert_eq!(repo.find_by_id("5").unwrap().unwrap().available_copies, 0);

        for _ in 0..5 {
            repo.adjust_availability("5", 1).unwrap();
        }
        let book = repo.find_by_id("5").unwrap().unwrap();
        assert_eq!(book.available_copies, book.total_copies);
    }

    #[test]
    fn adjust_on_unknown_id_is_a_no_op() {
        let repo = repo();
        repo.initialize().unwrap();
        let before = repo.get_all().unwrap();
        repo.adjust_availability("no-such-book", -1).unwrap();
        assert_eq!(repo.get_all().unwrap(), before);
    }

    #[test]
    fn corrupted_collection_falls_back_to_seed() {
        let store = Arc::new(MemoryStore::new());
        store.set(BOOKS_KEY, "{broken").unwrap();
        let repo = StoreCatalogRepository::new(store);
        assert_eq!(repo.get_all().unwrap().len(), 8);
    }
}
