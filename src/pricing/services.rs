//! Quote service functions.
//!
//! Orchestrates one quote: validate the trip, resolve the route, evaluate
//! surcharges, compose the breakdown. Stateless and synchronous; every call
//! recomputes from scratch against the read-only [`PricingConfig`].

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use tracing::debug;

use super::calculators;
use super::destinations;
use super::models::{PriceBreakdown, PricingConfig, TripRequest, VehicleClass};
use super::surcharges;

/// Pricing calculation error types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PricingError {
    #[error("destination {code} has no configured rates")]
    UnpricedDestination { code: String },

    #[error("destination {code} has no {vehicle} fare")]
    UnpricedVehicle { code: String, vehicle: VehicleClass },

    #[error("a {vehicle} cannot carry {passengers} passengers")]
    IneligibleVehicle { vehicle: VehicleClass, passengers: i32 },

    #[error("passenger count must be at least 1, got {0}")]
    InvalidPassengerCount(i32),

    #[error("unparsable trip time {0:?}, expected HH:MM")]
    MalformedTime(String),

    #[error("unparsable trip date {0:?}, expected YYYY-MM-DD")]
    MalformedDate(String),
}

impl PricingError {
    /// Stable machine-readable tag for error responses.
    pub fn kind(&self) -> &'static str {
        match self {
            PricingError::UnpricedDestination { .. } => "unpriced_destination",
            PricingError::UnpricedVehicle { .. } => "unpriced_vehicle",
            PricingError::IneligibleVehicle { .. } => "ineligible_vehicle",
            PricingError::InvalidPassengerCount(_) => "invalid_passenger_count",
            PricingError::MalformedTime(_) => "malformed_time",
            PricingError::MalformedDate(_) => "malformed_date",
        }
    }

    /// Whether the error is a caller-side validation failure (as opposed to
    /// a route the schedule does not price).
    pub fn is_validation(&self) -> bool {
        !matches!(
            self,
            PricingError::UnpricedDestination { .. } | PricingError::UnpricedVehicle { .. }
        )
    }
}

/// A priced one-way leg.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub destination: String,
    pub destination_name: String,
    pub vehicle: VehicleClass,
    pub breakdown: PriceBreakdown,
}

/// A priced round trip: two independent legs plus their combined total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundTripQuote {
    pub outbound: Quote,
    pub return_leg: Quote,
    pub total: Decimal,
}

/// Strict `HH:MM` parse (seconds tolerated). Malformed input rejects the
/// request; surcharge rules are never silently skipped.
pub fn parse_trip_time(raw: &str) -> Result<NaiveTime, PricingError> {
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .map_err(|_| PricingError::MalformedTime(raw.to_string()))
}

/// Strict `YYYY-MM-DD` parse.
pub fn parse_trip_date(raw: &str) -> Result<NaiveDate, PricingError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| PricingError::MalformedDate(raw.to_string()))
}

/// Price a single leg.
///
/// The eligibility gate runs before any lookup: an ineligible vehicle class
/// for the passenger count is a validation error, not a pricing result.
pub fn quote_one_way(config: &PricingConfig, trip: &TripRequest) -> Result<Quote, PricingError> {
    if trip.passengers < 1 {
        return Err(PricingError::InvalidPassengerCount(trip.passengers));
    }
    if !trip.vehicle.allows(trip.passengers) {
        return Err(PricingError::IneligibleVehicle {
            vehicle: trip.vehicle,
            passengers: trip.passengers,
        });
    }

    let time = parse_trip_time(&trip.time)?;
    let date = parse_trip_date(&trip.date)?;

    let code = destinations::resolve_route(config, &trip.pickup, &trip.destination, trip.vehicle);
    let rate = config
        .rates
        .get(&code)
        .ok_or_else(|| PricingError::UnpricedDestination { code: code.clone() })?;
    let base = rate
        .fares
        .get(&trip.vehicle)
        .copied()
        .ok_or_else(|| PricingError::UnpricedVehicle {
            code: code.clone(),
            vehicle: trip.vehicle,
        })?;

    let breakdown = calculators::compose_breakdown(
        base,
        surcharges::baggage_claim_fee(&config.surcharges, trip.baggage_claim),
        surcharges::after_hours_fee(&config.surcharges, &code, time),
        surcharges::holiday_fee(&config.surcharges, date),
    );

    debug!(
        destination = %code,
        vehicle = %trip.vehicle,
        total = %breakdown.total,
        "quoted one-way trip"
    );

    Ok(Quote {
        destination: code,
        destination_name: rate.display_name.clone(),
        vehicle: trip.vehicle,
        breakdown,
    })
}

/// Price a round trip as two fully independent legs.
///
/// Legs may differ in date, time, baggage-claim choice and vehicle class;
/// the combined total is the plain sum. There is no round-trip discount.
pub fn quote_round_trip(
    config: &PricingConfig,
    outbound: &TripRequest,
    return_leg: &TripRequest,
) -> Result<RoundTripQuote, PricingError> {
    let out = quote_one_way(config, outbound)?;
    let back = quote_one_way(config, return_leg)?;
    let total = calculators::round_trip_total(&out.breakdown, &back.breakdown);
    Ok(RoundTripQuote {
        outbound: out,
        return_leg: back,
        total,
    })
}
