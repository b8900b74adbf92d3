//! Session service - signup, login and logout over the account repository

use crate::AppState;
use crate::domain::DomainError;
use crate::models::{NewUser, User};

/// Log in by email lookup and persist the session.
///
/// The password is accepted but never verified; the system performs no
/// credential check by design, and that observable behavior is preserved.
pub fn login(state: &AppState, email: &str, _password: &str) -> Result<User, DomainError> {
    let user = state
        .accounts
        .find_by_email(email)?
        .ok_or(DomainError::UserNotFound)?;
    state.accounts.set_current_session(&user)?;
    tracing::info!("User {} logged in", user.id);
    Ok(user)
}

/// Register a new account and log it in
pub fn signup(state: &AppState, candidate: NewUser) -> Result<User, DomainError> {
    let user = state.accounts.create(candidate)?;
    state.accounts.set_current_session(&user)?;
    tracing::info!("User {} signed up", user.id);
    Ok(user)
}

/// Drop the persisted session
pub fn logout(state: &AppState) -> Result<(), DomainError> {
    state.accounts.clear_current_session()
}

/// The session user persisted from a previous run, if any
pub fn current_user(state: &AppState) -> Result<Option<User>, DomainError> {
    state.accounts.current_session()
}
