//! Randomized test data
//!
//! Thin wrappers over `fake` for tests that want varied rather than fixed
//! input.

use fake::faker::address::en::{CityName, CountryName, ZipCode};
use fake::faker::internet::en::{Password, SafeEmail};
use fake::faker::name::en::{FirstName, LastName};
use fake::faker::phone_number::en::PhoneNumber;
use fake::Fake;

use domain_customer::{AddressRecord, CustomerRecord};

/// A random, well-formed email address
pub fn random_email() -> String {
    SafeEmail().fake()
}

/// A random address record without an identifier
pub fn random_address_record() -> AddressRecord {
    AddressRecord {
        id: None,
        phone: PhoneNumber().fake(),
        country: CountryName().fake(),
        city: CityName().fake(),
        postal_code: ZipCode().fake(),
    }
}

/// A random customer record without identifiers
pub fn random_customer_record() -> CustomerRecord {
    CustomerRecord {
        id: None,
        email: random_email(),
        password: Password(8..16).fake(),
        first_name: FirstName().fake(),
        last_name: LastName().fake(),
        address: Some(random_address_record()),
    }
}
