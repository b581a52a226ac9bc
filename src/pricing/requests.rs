//! Request DTOs for pricing API endpoints.

use serde::Deserialize;

use super::models::{TripRequest, VehicleClass};

/// One-way quote request from the booking form or the booking API handler.
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteRequest {
    pub pickup: String,
    pub destination: String,
    /// `YYYY-MM-DD`.
    pub date: String,
    /// Local 24-hour clock, `HH:MM`.
    pub time: String,
    pub vehicle: VehicleClass,
    #[serde(default)]
    pub baggage_claim: bool,
    pub passengers: i32,
}

impl QuoteRequest {
    pub fn into_trip(self) -> TripRequest {
        TripRequest {
            pickup: self.pickup,
            destination: self.destination,
            date: self.date,
            time: self.time,
            vehicle: self.vehicle,
            baggage_claim: self.baggage_claim,
            passengers: self.passengers,
        }
    }
}

/// Per-leg block of a round-trip request. Legs may differ in date, time,
/// baggage-claim choice and vehicle class.
#[derive(Debug, Clone, Deserialize)]
pub struct LegRequest {
    pub date: String,
    pub time: String,
    pub vehicle: VehicleClass,
    #[serde(default)]
    pub baggage_claim: bool,
}

/// Round-trip quote request: shared route and passenger count, two legs.
#[derive(Debug, Clone, Deserialize)]
pub struct RoundTripQuoteRequest {
    pub pickup: String,
    pub destination: String,
    pub passengers: i32,
    pub outbound: LegRequest,
    #[serde(rename = "return")]
    pub return_leg: LegRequest,
}

impl RoundTripQuoteRequest {
    /// Expand into two one-way trips; the return leg travels the route in
    /// reverse.
    pub fn into_trips(self) -> (TripRequest, TripRequest) {
        let outbound = TripRequest {
            pickup: self.pickup.clone(),
            destination: self.destination.clone(),
            date: self.outbound.date,
            time: self.outbound.time,
            vehicle: self.outbound.vehicle,
            baggage_claim: self.outbound.baggage_claim,
            passengers: self.passengers,
        };
        let return_leg = TripRequest {
            pickup: self.destination,
            destination: self.pickup,
            date: self.return_leg.date,
            time: self.return_leg.time,
            vehicle: self.return_leg.vehicle,
            baggage_claim: self.return_leg.baggage_claim,
            passengers: self.passengers,
        };
        (outbound, return_leg)
    }
}

/// Query parameters for the vehicle-class eligibility endpoint.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct VehicleClassesParams {
    pub passengers: i32,
}
