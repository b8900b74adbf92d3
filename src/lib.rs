pub mod domain;
pub mod infrastructure;
pub mod models;
pub mod services;

// Re-exports for convenience
pub use infrastructure::config;
pub use infrastructure::seed;
pub use infrastructure::state::AppState;
pub use infrastructure::store;
