//! Rental service - compound rent/return operations spanning catalog and
//! ledger
//!
//! The store has no transactions, so each compound operation runs through
//! a single coordinating function here. A failure between the two writes
//! is detected and compensated instead of being left dangling.

use crate::AppState;
use crate::domain::DomainError;
use crate::models::Rental;

/// Rent one copy: verify availability, take the copy, record the rental.
///
/// The ledger write comes after the availability decrement; if it fails,
/// the decrement is rolled back so the catalog is not left inconsistent.
pub fn rent_book(state: &AppState, user_id: &str, book_id: &str) -> Result<Rental, DomainError> {
    let book = state
        .catalog
        .find_by_id(book_id)?
        .ok_or(DomainError::NotFound)?;
    if !book.is_available() {
        return Err(DomainError::BookUnavailable);
    }

    state.catalog.adjust_availability(book_id, -1)?;
    match state.ledger.create(user_id, book_id) {
        Ok(rental) => {
            tracing::info!("User {} rented book {}", user_id, book_id);
            Ok(rental)
        }
        Err(e) => {
            if let Err(rollback) = state.catalog.adjust_availability(book_id, 1) {
                tracing::error!(
                    "Failed to roll back availability for book {}: {}",
                    book_id,
                    rollback
                );
            }
            Err(e)
        }
    }
}

/// Return the active rental for `(user_id, book_id)`, if one exists.
///
/// Returns `Ok(None)` without touching anything when there is no active
/// rental; the availability is only restored for a real return.
pub fn return_book(
    state: &AppState,
    user_id: &str,
    book_id: &str,
) -> Result<Option<Rental>, DomainError> {
    match state.ledger.mark_returned(user_id, book_id)? {
        Some(rental) => {
            state.catalog.adjust_availability(book_id, 1)?;
            tracing::info!("User {} returned book {}", user_id, book_id);
            Ok(Some(rental))
        }
        None => Ok(None),
    }
}

/// All rentals belonging to the given user, active and historical
pub fn rentals_for_user(state: &AppState, user_id: &str) -> Result<Vec<Rental>, DomainError> {
    state.ledger.get_for_user(user_id)
}

/// Count all rentals ever recorded
pub fn count_rentals(state: &AppState) -> Result<usize, DomainError> {
    Ok(state.ledger.get_all()?.len())
}

/// Count rentals that are still out
pub fn count_active_rentals(state: &AppState) -> Result<usize, DomainError> {
    Ok(state
        .ledger
        .get_all()?
        .iter()
        .filter(|r| r.is_active())
        .count())
}
