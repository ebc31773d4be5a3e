//! Pre-built test data
//!
//! Fixed, readable values shared by the test suites. Tests that only need a
//! plausible customer reach for these; tests exercising a specific field use
//! the builders instead.

use domain_customer::{AddressRecord, CustomerRecord};
use serde_json::{json, Value};

/// A persisted-looking address record
pub fn sample_address_record() -> AddressRecord {
    AddressRecord {
        id: Some(1),
        phone: "12345678".to_string(),
        country: "Latvia".to_string(),
        city: "Riga".to_string(),
        postal_code: "1001".to_string(),
    }
}

/// A persisted-looking customer record owning [`sample_address_record`]
pub fn sample_customer_record() -> CustomerRecord {
    CustomerRecord {
        id: Some(1),
        email: "email@email.com".to_string(),
        password: "password1".to_string(),
        first_name: "name1".to_string(),
        last_name: "lastName1".to_string(),
        address: Some(sample_address_record()),
    }
}

/// Wire-shaped create/update payload for API tests
pub fn customer_payload(email: &str) -> Value {
    json!({
        "email": email,
        "password": "password1",
        "first_name": "name1",
        "last_name": "lastName1",
        "address": {
            "phone": "12345678",
            "country": "Latvia",
            "city": "Riga",
            "postal_code": "1001"
        }
    })
}
