//! Strongly-typed identifiers for domain entities
//!
//! Using newtype wrappers around the storage-assigned integer keys provides
//! type safety and prevents accidental mixing of different identifier types.
//! Identifiers are assigned by the storage engine on first persist and never
//! change afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wraps a storage-assigned key
            pub fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the underlying key
            pub fn value(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.parse()?))
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> i64 {
                id.0
            }
        }
    };
}

define_id!(CustomerId);
define_id!(AddressId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_id_display() {
        let id = CustomerId::new(42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn test_id_parsing() {
        let original = CustomerId::new(7);
        let parsed: CustomerId = original.to_string().parse().unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn test_i64_conversion() {
        let address_id = AddressId::from(99);
        let back: i64 = address_id.into();
        assert_eq!(back, 99);
    }
}
