//! Storage-facing record types
//!
//! Records are the row-shaped representation the persistence gateway works
//! with, distinct from the domain objects exposed to callers. Partial
//! updates are explicit per-field merges: every mutable field is listed in
//! code, so the excluded identifier fields are a visible, statically-checked
//! part of the contract instead of a name list fed to a reflective copy.

/// Row-shaped representation of an address
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressRecord {
    pub id: Option<i64>,
    pub phone: String,
    pub country: String,
    pub city: String,
    pub postal_code: String,
}

impl AddressRecord {
    /// Copies every content field from `updated` onto this record.
    ///
    /// The identifier stays untouched: an address keeps the id the storage
    /// engine assigned it, whatever id the incoming record carries.
    pub fn merge_from(&mut self, updated: &AddressRecord) {
        self.phone = updated.phone.clone();
        self.country = updated.country.clone();
        self.city = updated.city.clone();
        self.postal_code = updated.postal_code.clone();
    }
}

/// Row-shaped representation of a customer with its owned address
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerRecord {
    pub id: Option<i64>,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub address: Option<AddressRecord>,
}

impl CustomerRecord {
    /// Copies every content field from `updated` onto this record.
    ///
    /// The identifier and the owned address stay untouched. The address is
    /// merged separately via [`AddressRecord::merge_from`] so the stored
    /// address row keeps its own identifier and the relation is never
    /// redirected to another row.
    pub fn merge_from(&mut self, updated: &CustomerRecord) {
        self.email = updated.email.clone();
        self.password = updated.password.clone();
        self.first_name = updated.first_name.clone();
        self.last_name = updated.last_name.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn persisted_record() -> CustomerRecord {
        CustomerRecord {
            id: Some(1),
            email: "email@email.com".to_string(),
            password: "password1".to_string(),
            first_name: "name1".to_string(),
            last_name: "lastName1".to_string(),
            address: Some(AddressRecord {
                id: Some(1),
                phone: "12345678".to_string(),
                country: "Riga".to_string(),
                city: "Riga".to_string(),
                postal_code: "1001".to_string(),
            }),
        }
    }

    #[test]
    fn test_customer_merge_copies_content_fields() {
        let mut existing = persisted_record();
        let updated = CustomerRecord {
            id: Some(99),
            email: "updatedEmail2@email.com".to_string(),
            password: "updatedPassword".to_string(),
            first_name: "updatedName".to_string(),
            last_name: "UpdatedLastName".to_string(),
            address: None,
        };

        existing.merge_from(&updated);

        assert_eq!(existing.email, "updatedEmail2@email.com");
        assert_eq!(existing.password, "updatedPassword");
        assert_eq!(existing.first_name, "updatedName");
        assert_eq!(existing.last_name, "UpdatedLastName");
    }

    #[test]
    fn test_customer_merge_pins_id_and_address() {
        let mut existing = persisted_record();
        let mut updated = persisted_record();
        updated.id = Some(42);
        updated.address = None;

        existing.merge_from(&updated);

        assert_eq!(existing.id, Some(1));
        assert!(existing.address.is_some());
    }

    #[test]
    fn test_address_merge_pins_id() {
        let mut existing = AddressRecord {
            id: Some(7),
            phone: "12345678".to_string(),
            country: "Riga".to_string(),
            city: "Riga".to_string(),
            postal_code: "1001".to_string(),
        };
        let updated = AddressRecord {
            id: Some(1000),
            phone: "464748494".to_string(),
            country: "updated country".to_string(),
            city: "updated city".to_string(),
            postal_code: "6666".to_string(),
        };

        existing.merge_from(&updated);

        assert_eq!(existing.id, Some(7));
        assert_eq!(existing.phone, "464748494");
        assert_eq!(existing.country, "updated country");
        assert_eq!(existing.city, "updated city");
        assert_eq!(existing.postal_code, "6666");
    }
}
