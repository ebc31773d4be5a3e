//! HTTP API Layer
//!
//! This crate provides the REST boundary of the customer record system using
//! Axum.
//!
//! # Architecture
//!
//! - **Handlers**: request handlers for the customer operations and health
//!   probes
//! - **DTOs**: request/response objects with declarative field validation
//! - **Error handling**: one structured error payload for every failure the
//!   API emits
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(service);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use domain_customer::CustomerService;

use crate::handlers::{customer, health};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<CustomerService>,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `service` - The customer service the handlers delegate to
pub fn create_router(service: Arc<CustomerService>) -> Router {
    let state = AppState { service };

    let customer_routes = Router::new()
        .route(
            "/",
            get(customer::list_customers).post(customer::create_customer),
        )
        .route(
            "/:id",
            get(customer::get_customer)
                .put(customer::update_customer)
                .delete(customer::delete_customer),
        );

    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .nest("/api/v1/customers", customer_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
