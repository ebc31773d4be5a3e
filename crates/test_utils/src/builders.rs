//! Test data builders
//!
//! Builder patterns for constructing test records with sensible defaults,
//! so tests specify only the fields they actually exercise.

use domain_customer::{AddressRecord, CustomerRecord};

use crate::fixtures;

/// Builder for customer records
pub struct CustomerRecordBuilder {
    record: CustomerRecord,
}

impl Default for CustomerRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CustomerRecordBuilder {
    /// Creates a builder seeded with the fixture customer, without ids, so
    /// stores assign identifiers the way they would in production
    pub fn new() -> Self {
        let mut record = fixtures::sample_customer_record();
        record.id = None;
        if let Some(address) = record.address.as_mut() {
            address.id = None;
        }
        Self { record }
    }

    /// Sets the customer identifier (and the address identifier to match)
    pub fn with_id(mut self, id: i64) -> Self {
        self.record.id = Some(id);
        if let Some(address) = self.record.address.as_mut() {
            address.id = Some(id);
        }
        self
    }

    /// Sets the email
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.record.email = email.into();
        self
    }

    /// Sets the password
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.record.password = password.into();
        self
    }

    /// Sets the first name
    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.record.first_name = first_name.into();
        self
    }

    /// Sets the last name
    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.record.last_name = last_name.into();
        self
    }

    /// Replaces the owned address
    pub fn with_address(mut self, address: AddressRecord) -> Self {
        self.record.address = Some(address);
        self
    }

    /// Sets the address city
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        if let Some(address) = self.record.address.as_mut() {
            address.city = city.into();
        }
        self
    }

    /// Finishes the build
    pub fn build(self) -> CustomerRecord {
        self.record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults_have_no_ids() {
        let record = CustomerRecordBuilder::new().build();
        assert_eq!(record.id, None);
        assert_eq!(record.address.as_ref().and_then(|a| a.id), None);
    }

    #[test]
    fn test_builder_overrides() {
        let record = CustomerRecordBuilder::new()
            .with_id(4)
            .with_email("someone@example.com")
            .with_city("Tallinn")
            .build();

        assert_eq!(record.id, Some(4));
        assert_eq!(record.email, "someone@example.com");
        assert_eq!(record.address.as_ref().map(|a| a.city.as_str()), Some("Tallinn"));
    }
}
