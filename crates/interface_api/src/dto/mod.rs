//! Request and response objects

pub mod customer;
