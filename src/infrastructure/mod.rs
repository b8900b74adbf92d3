//! Infrastructure layer - Framework implementations
//!
//! This layer contains:
//! - Key-value store adapter and implementations (store)
//! - Configuration loading (config)
//! - Seed catalog (seed)
//! - Repository implementations (repositories)
//! - Application state (state)

pub mod config;
pub mod repositories;
pub mod seed;
pub mod state;
pub mod store;

pub use repositories::*;
pub use state::AppState;
