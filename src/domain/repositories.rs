//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use super::DomainError;
use crate::models::{Book, NewUser, Rental, User};

/// Repository trait for the book catalog
pub trait CatalogRepository: Send + Sync {
    /// Write the seed catalog if no book collection exists yet. Idempotent.
    fn initialize(&self) -> Result<(), DomainError>;

    /// Full scan of the catalog
    fn get_all(&self) -> Result<Vec<Book>, DomainError>;

    /// Find a single book by ID
    fn find_by_id(&self, id: &str) -> Result<Option<Book>, DomainError>;

    /// Apply a copy-count change, clamped to `0..=total_copies`.
    /// Silently no-ops when the book ID is unknown.
    fn adjust_availability(&self, book_id: &str, delta: i32) -> Result<(), DomainError>;
}

/// Repository trait for user accounts and the current-session slot
pub trait AccountRepository: Send + Sync {
    /// Ensure an empty users collection exists. Idempotent.
    fn initialize(&self) -> Result<(), DomainError>;

    /// Full scan of the users collection
    fn find_all(&self) -> Result<Vec<User>, DomainError>;

    /// Find a user by exact email match
    fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Create a new user. Fails with `DuplicateEmail` when the email is
    /// already registered; the collection is left unchanged in that case.
    fn create(&self, candidate: NewUser) -> Result<User, DomainError>;

    /// Persist the given user as the current session
    fn set_current_session(&self, user: &User) -> Result<(), DomainError>;

    /// The persisted session user, if any
    fn current_session(&self) -> Result<Option<User>, DomainError>;

    /// Drop the persisted session
    fn clear_current_session(&self) -> Result<(), DomainError>;
}

/// Repository trait for the rental ledger
pub trait RentalLedger: Send + Sync {
    /// Ensure an empty rentals collection exists. Idempotent.
    fn initialize(&self) -> Result<(), DomainError>;

    /// Full scan of the ledger, active and historical
    fn get_all(&self) -> Result<Vec<Rental>, DomainError>;

    /// All rentals belonging to the given user
    fn get_for_user(&self, user_id: &str) -> Result<Vec<Rental>, DomainError>;

    /// Append a new active rental due in 14 days. Availability is NOT
    /// re-verified here; callers check the catalog first.
    fn create(&self, user_id: &str, book_id: &str) -> Result<Rental, DomainError>;

    /// Mark the most recent active rental for `(user_id, book_id)` as
    /// returned. Returns `Ok(None)` without touching the ledger when no
    /// such rental exists.
    fn mark_returned(&self, user_id: &str, book_id: &str)
    -> Result<Option<Rental>, DomainError>;
}
