//! Services Layer
//!
//! Pure business logic, free of any view concerns. The view layer calls
//! these functions and renders their results or error messages.

pub mod recommendation_service;
pub mod rental_service;
pub mod session_service;
