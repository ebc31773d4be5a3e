//! Tests for strongly-typed identifiers

use core_kernel::{AddressId, CustomerId};
use proptest::prelude::*;

#[test]
fn test_serde_transparent() {
    let id = CustomerId::new(17);
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, "17");

    let back: CustomerId = serde_json::from_str(&json).unwrap();
    assert_eq!(back, id);
}

#[test]
fn test_ids_do_not_mix() {
    // Same underlying key, distinct types
    let customer = CustomerId::new(5);
    let address = AddressId::new(5);
    assert_eq!(customer.value(), address.value());
}

proptest! {
    #[test]
    fn prop_display_parse_roundtrip(value in any::<i64>()) {
        let id = CustomerId::new(value);
        let parsed: CustomerId = id.to_string().parse().unwrap();
        prop_assert_eq!(parsed, id);
    }

    #[test]
    fn prop_i64_conversion_roundtrip(value in any::<i64>()) {
        let id = AddressId::from(value);
        let back: i64 = id.into();
        prop_assert_eq!(back, value);
    }
}
