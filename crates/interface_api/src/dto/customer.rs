//! Customer DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::{AddressId, CustomerId};
use domain_customer::{Address, Customer};

/// Inbound address payload
///
/// The identifier is accepted for wire compatibility but never trusted; the
/// service pins identifiers to the stored rows.
#[derive(Debug, Deserialize, Validate)]
pub struct AddressRequest {
    pub id: Option<i64>,
    #[validate(length(min = 1, message = "phone must not be blank"))]
    pub phone: String,
    #[validate(length(min = 1, message = "country must not be blank"))]
    pub country: String,
    #[validate(length(min = 1, message = "city must not be blank"))]
    pub city: String,
    #[validate(length(min = 1, message = "postal code must not be blank"))]
    pub postal_code: String,
}

/// Inbound customer payload
#[derive(Debug, Deserialize, Validate)]
pub struct CustomerRequest {
    pub id: Option<i64>,
    #[validate(email(message = "email must be a well-formed address"))]
    pub email: String,
    #[validate(length(min = 1, message = "password must not be blank"))]
    pub password: String,
    #[validate(length(min = 1, message = "first name must not be blank"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "last name must not be blank"))]
    pub last_name: String,
    #[validate(nested)]
    pub address: AddressRequest,
}

impl CustomerRequest {
    /// Converts the payload into its domain form
    pub fn into_domain(self) -> Customer {
        Customer {
            id: self.id.map(CustomerId::from),
            email: self.email,
            password: self.password,
            first_name: self.first_name,
            last_name: self.last_name,
            address: Some(Address {
                id: self.address.id.map(AddressId::from),
                phone: self.address.phone,
                country: self.address.country,
                city: self.address.city,
                postal_code: self.address.postal_code,
            }),
        }
    }
}

/// Outbound address representation
#[derive(Debug, Serialize)]
pub struct AddressResponse {
    pub id: Option<i64>,
    pub phone: String,
    pub country: String,
    pub city: String,
    pub postal_code: String,
}

impl From<Address> for AddressResponse {
    fn from(address: Address) -> Self {
        Self {
            id: address.id.map(i64::from),
            phone: address.phone,
            country: address.country,
            city: address.city,
            postal_code: address.postal_code,
        }
    }
}

/// Outbound customer representation
#[derive(Debug, Serialize)]
pub struct CustomerResponse {
    pub id: Option<i64>,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub address: Option<AddressResponse>,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id.map(i64::from),
            email: customer.email,
            password: customer.password,
            first_name: customer.first_name,
            last_name: customer.last_name,
            address: customer.address.map(AddressResponse::from),
        }
    }
}
