pub mod book;
pub mod rental;
pub mod user;

pub use book::Book;
pub use rental::{Rental, RentalStatus};
pub use user::{NewUser, User};
