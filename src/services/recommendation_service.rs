//! Recommendation engine - pure scoring over catalog and ledger snapshots

use std::collections::HashSet;

use crate::AppState;
use crate::domain::DomainError;
use crate::models::{Book, Rental, User};

const RECOMMENDATION_LIMIT: usize = 6;
const POPULAR_LIMIT: usize = 4;
/// Books rated at least this highly are recommended regardless of genre
const HIGH_RATING_FLOOR: f64 = 4.0;
const AVAILABILITY_BONUS: f64 = 1.0;

fn score(book: &Book) -> f64 {
    book.rating + if book.is_available() { AVAILABILITY_BONUS } else { 0.0 }
}

/// Ranked picks for one user: books they have never rented, matching their
/// genre preferences (or any genre when they have none) or rated at or
/// above the floor, best score first. At most six entries; ties keep
/// catalog order.
pub fn recommend(user: &User, all_books: &[Book], user_rentals: &[Rental]) -> Vec<Book> {
    let rented_ids: HashSet<&str> = user_rentals.iter().map(|r| r.book_id.as_str()).collect();

    let mut candidates: Vec<Book> = all_books
        .iter()
        .filter(|b| !rented_ids.contains(b.id.as_str()))
        .filter(|b| {
            user.preferences.is_empty()
                || user.preferences.iter().any(|p| p == &b.genre)
                || b.rating >= HIGH_RATING_FLOOR
        })
        .cloned()
        .collect();

    // sort_by is stable, so equal scores retain input order
    candidates.sort_by(|a, b| score(b).total_cmp(&score(a)));
    candidates.truncate(RECOMMENDATION_LIMIT);
    candidates
}

/// The four best-rated books that still have a copy on the shelf
pub fn popular(all_books: &[Book]) -> Vec<Book> {
    let mut available: Vec<Book> = all_books
        .iter()
        .filter(|b| b.is_available())
        .cloned()
        .collect();
    available.sort_by(|a, b| b.rating.total_cmp(&a.rating));
    available.truncate(POPULAR_LIMIT);
    available
}

/// Load catalog and ledger snapshots and recommend for `user`
pub fn recommendations_for(state: &AppState, user: &User) -> Result<Vec<Book>, DomainError> {
    let all_books = state.catalog.get_all()?;
    let user_rentals = state.ledger.get_for_user(&user.id)?;
    Ok(recommend(user, &all_books, &user_rentals))
}

/// Load the catalog and rank its popular books
pub fn popular_books(state: &AppState) -> Result<Vec<Book>, DomainError> {
    Ok(popular(&state.catalog.get_all()?))
}
