//! Customer persistence gateway
//!
//! The `CustomerStore` trait is the port the customer service drives. It is
//! the only seam to the storage engine, so implementations can be swapped:
//! the PostgreSQL adapter in `infra_db` for production, the in-memory mock
//! here for tests.
//!
//! Absence is a normal outcome throughout this contract: lookups return
//! `Option`/`bool`, and `StoreError` is reserved for engine faults.

use async_trait::async_trait;

use core_kernel::{CustomerId, StoreError};

use crate::records::CustomerRecord;

/// Port trait for customer persistence
///
/// The address persists transitively as part of the customer record; there
/// is no separate address gateway because addresses have no independent
/// lifecycle.
#[async_trait]
pub trait CustomerStore: Send + Sync {
    /// Persists a record as an upsert-by-id: inserts when the record carries
    /// no identifier (storage assigns one), updates the matching rows in
    /// place when it does. An update that matches no row is an unsuccessful
    /// save, reported as `Ok(None)` rather than an error.
    async fn save(&self, record: &CustomerRecord) -> Result<Option<CustomerRecord>, StoreError>;

    /// Looks up a customer record by identifier
    async fn find_by_id(&self, id: CustomerId) -> Result<Option<CustomerRecord>, StoreError>;

    /// Returns all customer records in storage-return order
    async fn find_all(&self) -> Result<Vec<CustomerRecord>, StoreError>;

    /// True if a customer row with this identifier exists
    async fn exists_by_id(&self, id: CustomerId) -> Result<bool, StoreError>;

    /// True if any customer row carries this email
    async fn exists_by_email(&self, email: &str) -> Result<bool, StoreError>;

    /// Removes the customer row and its owned address row. A missing id is
    /// a no-op; callers check existence first.
    async fn delete_by_id(&self, id: CustomerId) -> Result<(), StoreError>;

    /// Round-trips to the storage engine, for readiness probes
    async fn ping(&self) -> Result<(), StoreError>;
}

/// In-memory mock implementation of `CustomerStore` for testing
///
/// Assigns monotonically increasing identifiers the way a database sequence
/// would, which makes it suitable for exercising the service layer and the
/// HTTP handlers without a running PostgreSQL instance.
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// In-memory customer store
    #[derive(Debug)]
    pub struct MockCustomerStore {
        customers: Arc<RwLock<BTreeMap<i64, CustomerRecord>>>,
        next_customer_id: AtomicI64,
        next_address_id: AtomicI64,
        reject_saves: AtomicBool,
    }

    impl MockCustomerStore {
        /// Creates an empty mock store
        pub fn new() -> Self {
            Self {
                customers: Arc::new(RwLock::new(BTreeMap::new())),
                next_customer_id: AtomicI64::new(1),
                next_address_id: AtomicI64::new(1),
                reject_saves: AtomicBool::new(false),
            }
        }

        /// Pre-populates the store with records for testing
        ///
        /// Records without identifiers get sequence-assigned ones; records
        /// with identifiers keep them and the sequences advance past them.
        pub async fn with_customers(records: Vec<CustomerRecord>) -> Self {
            let store = Self::new();
            {
                let mut customers = store.customers.write().await;
                for mut record in records {
                    let id = match record.id {
                        Some(id) => {
                            store.next_customer_id.fetch_max(id + 1, Ordering::SeqCst);
                            id
                        }
                        None => store.next_customer_id.fetch_add(1, Ordering::SeqCst),
                    };
                    record.id = Some(id);
                    if let Some(address) = record.address.as_mut() {
                        match address.id {
                            Some(address_id) => {
                                store
                                    .next_address_id
                                    .fetch_max(address_id + 1, Ordering::SeqCst);
                            }
                            None => {
                                address.id =
                                    Some(store.next_address_id.fetch_add(1, Ordering::SeqCst));
                            }
                        }
                    }
                    customers.insert(id, record);
                }
            }
            store
        }

        /// Makes every subsequent `save` report an unsuccessful persist,
        /// simulating a storage engine that returns no record
        pub fn reject_saves(&self, reject: bool) {
            self.reject_saves.store(reject, Ordering::SeqCst);
        }
    }

    impl Default for MockCustomerStore {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl CustomerStore for MockCustomerStore {
        async fn save(
            &self,
            record: &CustomerRecord,
        ) -> Result<Option<CustomerRecord>, StoreError> {
            if self.reject_saves.load(Ordering::SeqCst) {
                return Ok(None);
            }

            let mut customers = self.customers.write().await;
            let mut persisted = record.clone();

            let id = match persisted.id {
                // Upsert on an unknown id does not invent a row
                Some(id) if !customers.contains_key(&id) => return Ok(None),
                Some(id) => id,
                None => {
                    let id = self.next_customer_id.fetch_add(1, Ordering::SeqCst);
                    persisted.id = Some(id);
                    id
                }
            };

            if let Some(address) = persisted.address.as_mut() {
                if address.id.is_none() {
                    address.id = Some(self.next_address_id.fetch_add(1, Ordering::SeqCst));
                }
            }

            customers.insert(id, persisted.clone());
            Ok(Some(persisted))
        }

        async fn find_by_id(&self, id: CustomerId) -> Result<Option<CustomerRecord>, StoreError> {
            Ok(self.customers.read().await.get(&id.value()).cloned())
        }

        async fn find_all(&self) -> Result<Vec<CustomerRecord>, StoreError> {
            Ok(self.customers.read().await.values().cloned().collect())
        }

        async fn exists_by_id(&self, id: CustomerId) -> Result<bool, StoreError> {
            Ok(self.customers.read().await.contains_key(&id.value()))
        }

        async fn exists_by_email(&self, email: &str) -> Result<bool, StoreError> {
            Ok(self
                .customers
                .read()
                .await
                .values()
                .any(|record| record.email == email))
        }

        async fn delete_by_id(&self, id: CustomerId) -> Result<(), StoreError> {
            self.customers.write().await.remove(&id.value());
            Ok(())
        }

        async fn ping(&self) -> Result<(), StoreError> {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::MockCustomerStore;
    use super::*;
    use crate::records::AddressRecord;

    fn unsaved_record(email: &str) -> CustomerRecord {
        CustomerRecord {
            id: None,
            email: email.to_string(),
            password: "password1".to_string(),
            first_name: "name1".to_string(),
            last_name: "lastName1".to_string(),
            address: Some(AddressRecord {
                id: None,
                phone: "12345678".to_string(),
                country: "Riga".to_string(),
                city: "Riga".to_string(),
                postal_code: "1001".to_string(),
            }),
        }
    }

    #[tokio::test]
    async fn test_mock_store_assigns_sequential_ids() {
        let store = MockCustomerStore::new();

        let first = store.save(&unsaved_record("a@x.com")).await.unwrap().unwrap();
        let second = store.save(&unsaved_record("b@x.com")).await.unwrap().unwrap();

        assert_eq!(first.id, Some(1));
        assert_eq!(second.id, Some(2));
        assert_eq!(first.address.as_ref().and_then(|a| a.id), Some(1));
        assert_eq!(second.address.as_ref().and_then(|a| a.id), Some(2));
    }

    #[tokio::test]
    async fn test_mock_store_upsert_updates_in_place() {
        let store = MockCustomerStore::new();
        let saved = store.save(&unsaved_record("a@x.com")).await.unwrap().unwrap();

        let mut changed = saved.clone();
        changed.last_name = "Changed".to_string();
        let resaved = store.save(&changed).await.unwrap().unwrap();

        assert_eq!(resaved.id, saved.id);
        assert_eq!(store.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_mock_store_upsert_unknown_id_is_unsuccessful() {
        let store = MockCustomerStore::new();
        let mut record = unsaved_record("a@x.com");
        record.id = Some(99);

        let result = store.save(&record).await.unwrap();
        assert!(result.is_none());
        assert!(store.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_mock_store_exists_by_email() {
        let store = MockCustomerStore::new();
        store.save(&unsaved_record("a@x.com")).await.unwrap();

        assert!(store.exists_by_email("a@x.com").await.unwrap());
        assert!(!store.exists_by_email("b@x.com").await.unwrap());
    }

    #[tokio::test]
    async fn test_mock_store_with_customers_advances_sequences() {
        let mut seeded = unsaved_record("a@x.com");
        seeded.id = Some(5);
        let store = MockCustomerStore::with_customers(vec![seeded]).await;

        let next = store.save(&unsaved_record("b@x.com")).await.unwrap().unwrap();
        assert_eq!(next.id, Some(6));
    }
}
