//! OC Shuttle pricing service.
//!
//! A stateless Axum web service wrapping the pricing engine: destination
//! resolution, surcharge rules and price composition over a rate schedule
//! loaded once at startup. Bookings, notifications and page rendering live
//! in other services; this one answers one question, "what does this trip
//! cost".

pub mod config;
pub mod error;
pub mod pricing;

use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde_json::json;

use crate::error::AppError;
use crate::pricing::models::PricingConfig;

/// Shared application state: the read-only pricing schedule.
#[derive(Clone)]
pub struct AppState {
    pub pricing: Arc<PricingConfig>,
}

/// Build the application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api/pricing", pricing::routes::router())
        .fallback(fallback)
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn fallback() -> AppError {
    AppError::NotFound
}
