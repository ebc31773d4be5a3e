//! Customer Domain
//!
//! This crate holds the core of the customer record system: the domain
//! objects handed to callers, the row-shaped records the persistence gateway
//! works with, the mapping between the two, and the `CustomerService` that
//! orchestrates them.
//!
//! # Layering
//!
//! ```text
//! caller -> CustomerService -> mapper (domain -> record)
//!        -> CustomerStore (gateway) -> mapper (record -> domain) -> caller
//! ```
//!
//! The `CustomerStore` trait is the only seam to the storage engine; the
//! PostgreSQL implementation lives in `infra_db`, and an in-memory mock is
//! available behind the `mock` feature for tests.
//!
//! # Update semantics
//!
//! Partial updates never trust identifiers supplied by the caller: the
//! looked-up record keeps its own id and its own address row, and only
//! content fields are copied over. See [`records`] for the explicit merge
//! functions.

pub mod customer;
pub mod mapper;
pub mod ports;
pub mod records;
pub mod service;

pub use customer::{Address, Customer};
pub use ports::CustomerStore;
pub use records::{AddressRecord, CustomerRecord};
pub use service::CustomerService;
