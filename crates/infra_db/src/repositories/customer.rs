//! Customer repository
//!
//! PostgreSQL implementation of the `CustomerStore` gateway. Customers and
//! their addresses live in two tables joined one-to-one; every write touches
//! both rows inside a single transaction, so no partial state (an address
//! without its customer, or the reverse) is ever observably committed.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use core_kernel::{CustomerId, StoreError};
use domain_customer::{AddressRecord, CustomerRecord, CustomerStore};

use crate::error::DatabaseError;

const SELECT_CUSTOMER: &str = "SELECT c.id, c.email, c.password, c.first_name, c.last_name, \
     a.id AS address_id, a.phone, a.country, a.city, a.postal_code \
     FROM customers c JOIN addresses a ON a.id = c.address_id";

/// Joined row shape for customer queries
#[derive(Debug, sqlx::FromRow)]
struct CustomerAddressRow {
    id: i64,
    email: String,
    password: String,
    first_name: String,
    last_name: String,
    address_id: i64,
    phone: String,
    country: String,
    city: String,
    postal_code: String,
}

impl From<CustomerAddressRow> for CustomerRecord {
    fn from(row: CustomerAddressRow) -> Self {
        CustomerRecord {
            id: Some(row.id),
            email: row.email,
            password: row.password,
            first_name: row.first_name,
            last_name: row.last_name,
            address: Some(AddressRecord {
                id: Some(row.address_id),
                phone: row.phone,
                country: row.country,
                city: row.city,
                postal_code: row.postal_code,
            }),
        }
    }
}

/// PostgreSQL-backed implementation of the customer persistence gateway
#[derive(Debug, Clone)]
pub struct PostgresCustomerStore {
    pool: PgPool,
}

impl PostgresCustomerStore {
    /// Creates a new store over the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts a new address/customer row pair, letting the database assign
    /// both identifiers
    async fn insert(
        &self,
        record: &CustomerRecord,
        address: &AddressRecord,
    ) -> Result<CustomerRecord, DatabaseError> {
        let mut tx = self.pool.begin().await?;

        let address_id: i64 = sqlx::query_scalar(
            "INSERT INTO addresses (phone, country, city, postal_code) \
             VALUES ($1, $2, $3, $4) RETURNING id",
        )
        .bind(&address.phone)
        .bind(&address.country)
        .bind(&address.city)
        .bind(&address.postal_code)
        .fetch_one(&mut *tx)
        .await?;

        let customer_id: i64 = sqlx::query_scalar(
            "INSERT INTO customers (email, password, first_name, last_name, address_id) \
             VALUES ($1, $2, $3, $4, $5) RETURNING id",
        )
        .bind(&record.email)
        .bind(&record.password)
        .bind(&record.first_name)
        .bind(&record.last_name)
        .bind(address_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        debug!("inserted customer row {}", customer_id);

        let mut persisted = record.clone();
        persisted.id = Some(customer_id);
        persisted.address = Some(AddressRecord {
            id: Some(address_id),
            ..address.clone()
        });
        Ok(persisted)
    }

    /// Updates the customer row addressed by `id` and the address row that
    /// customer already owns. The address id carried by the incoming record
    /// is ignored; the relation is never redirected.
    async fn update(
        &self,
        id: i64,
        record: &CustomerRecord,
        address: &AddressRecord,
    ) -> Result<Option<CustomerRecord>, DatabaseError> {
        let mut tx = self.pool.begin().await?;

        let stored_address_id: Option<i64> = sqlx::query_scalar(
            "UPDATE customers SET email = $2, password = $3, first_name = $4, last_name = $5 \
             WHERE id = $1 RETURNING address_id",
        )
        .bind(id)
        .bind(&record.email)
        .bind(&record.password)
        .bind(&record.first_name)
        .bind(&record.last_name)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(address_id) = stored_address_id else {
            tx.rollback().await?;
            return Ok(None);
        };

        sqlx::query(
            "UPDATE addresses SET phone = $2, country = $3, city = $4, postal_code = $5 \
             WHERE id = $1",
        )
        .bind(address_id)
        .bind(&address.phone)
        .bind(&address.country)
        .bind(&address.city)
        .bind(&address.postal_code)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        debug!("updated customer row {}", id);

        let mut persisted = record.clone();
        persisted.id = Some(id);
        persisted.address = Some(AddressRecord {
            id: Some(address_id),
            ..address.clone()
        });
        Ok(Some(persisted))
    }
}

#[async_trait]
impl CustomerStore for PostgresCustomerStore {
    #[instrument(skip(self, record), fields(customer_id = ?record.id))]
    async fn save(&self, record: &CustomerRecord) -> Result<Option<CustomerRecord>, StoreError> {
        // The relation is not nullable; a record without an address cannot
        // be represented in the schema.
        let Some(address) = record.address.as_ref() else {
            return Err(StoreError::conflict("customer record carries no address"));
        };

        match record.id {
            None => Ok(Some(self.insert(record, address).await?)),
            Some(id) => Ok(self.update(id, record, address).await?),
        }
    }

    async fn find_by_id(&self, id: CustomerId) -> Result<Option<CustomerRecord>, StoreError> {
        let sql = format!("{SELECT_CUSTOMER} WHERE c.id = $1");
        let row = sqlx::query_as::<_, CustomerAddressRow>(&sql)
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(DatabaseError::from)?;
        Ok(row.map(CustomerRecord::from))
    }

    async fn find_all(&self) -> Result<Vec<CustomerRecord>, StoreError> {
        let sql = format!("{SELECT_CUSTOMER} ORDER BY c.id");
        let rows = sqlx::query_as::<_, CustomerAddressRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(DatabaseError::from)?;
        Ok(rows.into_iter().map(CustomerRecord::from).collect())
    }

    async fn exists_by_id(&self, id: CustomerId) -> Result<bool, StoreError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM customers WHERE id = $1)")
                .bind(id.value())
                .fetch_one(&self.pool)
                .await
                .map_err(DatabaseError::from)?;
        Ok(exists)
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, StoreError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM customers WHERE email = $1)")
                .bind(email)
                .fetch_one(&self.pool)
                .await
                .map_err(DatabaseError::from)?;
        Ok(exists)
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, id: CustomerId) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await.map_err(DatabaseError::from)?;

        // The customer row owns the address row; removing one removes both.
        let address_id: Option<i64> =
            sqlx::query_scalar("DELETE FROM customers WHERE id = $1 RETURNING address_id")
                .bind(id.value())
                .fetch_optional(&mut *tx)
                .await
                .map_err(DatabaseError::from)?;

        if let Some(address_id) = address_id {
            sqlx::query("DELETE FROM addresses WHERE id = $1")
                .bind(address_id)
                .execute(&mut *tx)
                .await
                .map_err(DatabaseError::from)?;
            debug!("deleted customer row {} and address row {}", id, address_id);
        }

        tx.commit().await.map_err(DatabaseError::from)?;
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(DatabaseError::from)?;
        Ok(())
    }
}
