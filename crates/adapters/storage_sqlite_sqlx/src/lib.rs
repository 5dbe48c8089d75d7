//! # navhub-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `navhub-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run the embedded schema migrations
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `navhub-app` (for port traits) and `navhub-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod category_repo;
mod error;
mod pool;
mod row;
mod service_repo;
mod settings_repo;

pub use category_repo::SqliteCategoryRepository;
pub use error::StorageError;
pub use pool::{Config, Database};
pub use service_repo::SqliteServiceRepository;
pub use settings_repo::SqliteSettingsRepository;
