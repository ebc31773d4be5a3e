//! Record/domain mapping
//!
//! Pure, stateless, total conversion functions between the storage-facing
//! record types and the domain objects, in both directions for both
//! entities. Field-for-field copies with no transformation and no
//! validation. An absent nested address propagates through unchanged rather
//! than failing fast; the storage layer is the one that insists on the
//! relation being present.

use core_kernel::{AddressId, CustomerId};

use crate::customer::{Address, Customer};
use crate::records::{AddressRecord, CustomerRecord};

/// Maps a domain address to its record form
pub fn address_to_record(address: &Address) -> AddressRecord {
    AddressRecord {
        id: address.id.map(i64::from),
        phone: address.phone.clone(),
        country: address.country.clone(),
        city: address.city.clone(),
        postal_code: address.postal_code.clone(),
    }
}

/// Maps an address record to its domain form
pub fn record_to_address(record: &AddressRecord) -> Address {
    Address {
        id: record.id.map(AddressId::from),
        phone: record.phone.clone(),
        country: record.country.clone(),
        city: record.city.clone(),
        postal_code: record.postal_code.clone(),
    }
}

/// Maps a domain customer (nested address included) to its record form
pub fn customer_to_record(customer: &Customer) -> CustomerRecord {
    CustomerRecord {
        id: customer.id.map(i64::from),
        email: customer.email.clone(),
        password: customer.password.clone(),
        first_name: customer.first_name.clone(),
        last_name: customer.last_name.clone(),
        address: customer.address.as_ref().map(address_to_record),
    }
}

/// Maps a customer record to its domain form
pub fn record_to_customer(record: &CustomerRecord) -> Customer {
    Customer {
        id: record.id.map(CustomerId::from),
        email: record.email.clone(),
        password: record.password.clone(),
        first_name: record.first_name.clone(),
        last_name: record.last_name.clone(),
        address: record.address.as_ref().map(record_to_address),
    }
}
