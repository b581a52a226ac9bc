//! HTTP route handlers for the pricing API.

use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};

use crate::error::Result;
use crate::AppState;

use super::calculators;
use super::requests::{QuoteRequest, RoundTripQuoteRequest, VehicleClassesParams};
use super::responses::{
    QuoteResponse, RateSheetResponse, RoundTripQuoteResponse, VehicleClassesResponse,
};
use super::services::{self, PricingError};

/// Pricing API router, nested under `/api/pricing`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/quote", post(quote))
        .route("/quote/round-trip", post(quote_round_trip))
        .route("/rates", get(rates))
        .route("/vehicle-classes", get(vehicle_classes))
}

/// One-way quote, invoked by the form on every field change and by the
/// booking handler on creation.
async fn quote(
    State(state): State<AppState>,
    Json(req): Json<QuoteRequest>,
) -> Result<Json<QuoteResponse>> {
    let trip = req.into_trip();
    let quote = services::quote_one_way(&state.pricing, &trip)?;
    Ok(Json(QuoteResponse::from_quote(quote, &state.pricing.currency)))
}

/// Round-trip quote: two independent legs, summed.
async fn quote_round_trip(
    State(state): State<AppState>,
    Json(req): Json<RoundTripQuoteRequest>,
) -> Result<Json<RoundTripQuoteResponse>> {
    let (outbound, return_leg) = req.into_trips();
    let quote = services::quote_round_trip(&state.pricing, &outbound, &return_leg)?;
    Ok(Json(RoundTripQuoteResponse::from_quote(
        quote,
        &state.pricing.currency,
    )))
}

/// Full rate sheet for the booking form.
async fn rates(State(state): State<AppState>) -> Json<RateSheetResponse> {
    Json(RateSheetResponse::from_config(&state.pricing))
}

/// Vehicle classes eligible for a passenger count.
async fn vehicle_classes(
    Query(params): Query<VehicleClassesParams>,
) -> Result<Json<VehicleClassesResponse>> {
    if params.passengers < 1 {
        return Err(PricingError::InvalidPassengerCount(params.passengers).into());
    }
    Ok(Json(VehicleClassesResponse {
        passengers: params.passengers,
        eligible: calculators::eligible_classes(params.passengers),
    }))
}
