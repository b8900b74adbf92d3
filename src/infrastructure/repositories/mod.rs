//! Repository implementations backed by the key-value store

pub mod account_repository;
pub mod catalog_repository;
pub mod rental_repository;

pub use account_repository::StoreAccountRepository;
pub use catalog_repository::StoreCatalogRepository;
pub use rental_repository::StoreRentalLedger;
