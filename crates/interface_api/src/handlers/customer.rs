//! Customer handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use core_kernel::CustomerId;

use crate::dto::customer::{CustomerRequest, CustomerResponse};
use crate::error::ApiError;
use crate::AppState;

/// Lists all customers
pub async fn list_customers(
    State(state): State<AppState>,
) -> Result<Json<Vec<CustomerResponse>>, ApiError> {
    let customers = state.service.get_all_customers().await?;
    Ok(Json(
        customers.into_iter().map(CustomerResponse::from).collect(),
    ))
}

/// Gets a customer by id
pub async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<CustomerResponse>, ApiError> {
    match state.service.find_customer_by_id(CustomerId::new(id)).await? {
        Some(customer) => Ok(Json(customer.into())),
        None => Err(ApiError::NotFound(format!(
            "Customer with id {id} not found"
        ))),
    }
}

/// Creates a new customer together with its address
///
/// Email uniqueness is checked up front; the schema's unique constraint is
/// the backstop for races and surfaces as a conflict as well.
pub async fn create_customer(
    State(state): State<AppState>,
    Json(request): Json<CustomerRequest>,
) -> Result<(StatusCode, Json<CustomerResponse>), ApiError> {
    request
        .validate()
        .map_err(|e| ApiError::from_validation(&e))?;

    if state.service.is_email_existing(&request.email).await? {
        return Err(ApiError::Conflict(format!(
            "Customer with email '{}' already exists",
            request.email
        )));
    }

    // Creation always inserts; identifiers in the body never address a row.
    let mut customer = request.into_domain();
    customer.id = None;
    if let Some(address) = customer.address.as_mut() {
        address.id = None;
    }

    match state.service.save_customer(&customer).await? {
        Some(saved) => Ok((StatusCode::CREATED, Json(saved.into()))),
        None => Err(ApiError::Internal(
            "customer was not persisted".to_string(),
        )),
    }
}

/// Applies a content-only update to an existing customer
pub async fn update_customer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<CustomerRequest>,
) -> Result<Json<CustomerResponse>, ApiError> {
    request
        .validate()
        .map_err(|e| ApiError::from_validation(&e))?;

    match state
        .service
        .edit_customer_by_id(CustomerId::new(id), &request.into_domain())
        .await?
    {
        Some(updated) => Ok(Json(updated.into())),
        None => Err(ApiError::NotFound(format!(
            "Customer with id {id} not found"
        ))),
    }
}

/// Deletes a customer and its owned address
pub async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    if state
        .service
        .delete_customer_by_id(CustomerId::new(id))
        .await?
    {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound(format!(
            "Customer with id {id} not found"
        )))
    }
}
