//! Core Kernel - Foundational types for the customer record system
//!
//! This crate provides the building blocks shared by the domain and
//! infrastructure layers:
//! - Strongly-typed entity identifiers
//! - The common error type of the persistence gateway contract

pub mod identifiers;
pub mod ports;

pub use identifiers::{AddressId, CustomerId};
pub use ports::StoreError;
