//! Infrastructure Database Layer
//!
//! This crate provides the PostgreSQL implementation of the customer
//! persistence gateway, following the repository pattern: the domain layer
//! sees only the `CustomerStore` trait, never SQLx types.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{create_pool, DatabaseConfig, PostgresCustomerStore};
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/customers")).await?;
//! let store = PostgresCustomerStore::new(pool);
//! ```

pub mod error;
pub mod pool;
pub mod repositories;

pub use error::DatabaseError;
pub use pool::{create_pool, create_pool_from_url, DatabaseConfig, DatabasePool};
pub use repositories::customer::PostgresCustomerStore;
