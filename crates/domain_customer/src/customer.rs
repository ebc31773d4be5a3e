//! Customer domain types

use core_kernel::{AddressId, CustomerId};
use serde::{Deserialize, Serialize};

/// A postal address owned by exactly one customer
///
/// Addresses have no independent lifecycle: they are created, updated and
/// destroyed together with their parent customer. The identifier is absent
/// until the storage engine assigns one on first persist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub id: Option<AddressId>,
    pub phone: String,
    pub country: String,
    pub city: String,
    pub postal_code: String,
}

/// A customer and the single address it owns
///
/// The password is carried as given; hashing is not this layer's concern.
/// Email uniqueness is a caller-side check (`is_email_existing`) backed by a
/// schema constraint, not something the domain object enforces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: Option<CustomerId>,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub address: Option<Address>,
}
