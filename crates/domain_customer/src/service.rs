//! Customer service
//!
//! Orchestrates the mapper and the persistence gateway to implement the six
//! public operations of the customer record system. This is the only
//! component with decision logic; everything below it is mapping and row
//! plumbing.

use std::sync::Arc;

use tracing::{info, warn};

use core_kernel::{CustomerId, StoreError};

use crate::customer::Customer;
use crate::mapper;
use crate::ports::CustomerStore;

/// Application service for customer records
///
/// Lookup misses resolve to `Ok(None)` / `Ok(false)`; only storage engine
/// faults surface as `Err`, and those propagate untouched to the boundary
/// layer.
pub struct CustomerService {
    store: Arc<dyn CustomerStore>,
}

impl CustomerService {
    /// Creates a service over the given persistence gateway
    pub fn new(store: Arc<dyn CustomerStore>) -> Self {
        Self { store }
    }

    /// Returns all persisted customers in storage-return order
    pub async fn get_all_customers(&self) -> Result<Vec<Customer>, StoreError> {
        let customers: Vec<Customer> = self
            .store
            .find_all()
            .await?
            .iter()
            .map(mapper::record_to_customer)
            .collect();
        info!("customer list size: {}", customers.len());
        Ok(customers)
    }

    /// Looks up one customer; a missing id is a normal outcome
    pub async fn find_customer_by_id(
        &self,
        id: CustomerId,
    ) -> Result<Option<Customer>, StoreError> {
        match self.store.find_by_id(id).await? {
            Some(record) => {
                info!("customer with id {} found", id);
                Ok(Some(mapper::record_to_customer(&record)))
            }
            None => {
                info!("customer with id {} does not exist", id);
                Ok(None)
            }
        }
    }

    /// Persists a new customer together with its address and returns the
    /// domain object rebuilt from the stored record, so the caller observes
    /// the storage-assigned identifiers. A save the gateway reports as
    /// unsuccessful yields `Ok(None)`.
    pub async fn save_customer(&self, customer: &Customer) -> Result<Option<Customer>, StoreError> {
        let record = mapper::customer_to_record(customer);
        match self.store.save(&record).await? {
            Some(saved) => {
                let saved_customer = mapper::record_to_customer(&saved);
                if let Some(id) = saved_customer.id {
                    info!("customer with id {} saved", id);
                }
                Ok(Some(saved_customer))
            }
            None => {
                warn!("failed to save customer");
                Ok(None)
            }
        }
    }

    /// Applies a content-only update to an existing customer.
    ///
    /// The update runs as one unit of work against the gateway: look up the
    /// record addressed by `id`, copy the content fields of
    /// `updated_customer` onto it, copy the content fields of its address
    /// onto the stored address, persist. Identifiers in the request body are
    /// never trusted; the looked-up record keeps its own id and its own
    /// address row, so a stale or mismatched id cannot redirect the update
    /// or orphan the relation.
    pub async fn edit_customer_by_id(
        &self,
        id: CustomerId,
        updated_customer: &Customer,
    ) -> Result<Option<Customer>, StoreError> {
        let Some(mut existing) = self.store.find_by_id(id).await? else {
            warn!("customer with id {} not found for updating", id);
            return Ok(None);
        };

        existing.merge_from(&mapper::customer_to_record(updated_customer));

        // The update's address content lands on the stored address row; an
        // update that carries no address leaves the stored one as it is.
        if let (Some(existing_address), Some(updated_address)) =
            (existing.address.as_mut(), updated_customer.address.as_ref())
        {
            existing_address.merge_from(&mapper::address_to_record(updated_address));
        }

        match self.store.save(&existing).await? {
            Some(saved) => {
                info!("updated customer with id {}", id);
                Ok(Some(mapper::record_to_customer(&saved)))
            }
            None => {
                warn!("customer with id {} could not be saved after update", id);
                Ok(None)
            }
        }
    }

    /// Deletes a customer (and, transitively, its address) if it exists.
    /// Returns whether a deletion happened.
    pub async fn delete_customer_by_id(&self, id: CustomerId) -> Result<bool, StoreError> {
        if self.is_customer_present(id).await? {
            self.store.delete_by_id(id).await?;
            info!("customer entry with id {} deleted", id);
            Ok(true)
        } else {
            warn!("customer entry with id {} does not exist, nothing to delete", id);
            Ok(false)
        }
    }

    /// True if any persisted customer carries this email
    pub async fn is_email_existing(&self, email: &str) -> Result<bool, StoreError> {
        let email_exists = self.store.exists_by_email(email).await?;
        info!("email '{}' exists in store: {}", email, email_exists);
        Ok(email_exists)
    }

    /// True if a customer with this id is persisted
    pub async fn is_customer_present(&self, id: CustomerId) -> Result<bool, StoreError> {
        self.store.exists_by_id(id).await
    }

    /// Round-trips to the backing store, for readiness probes
    pub async fn ping_store(&self) -> Result<(), StoreError> {
        self.store.ping().await
    }
}
