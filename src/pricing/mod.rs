//! Pricing engine module for the OC Shuttle booking site.
//!
//! One set of fare rules parameterized by an explicit rate schedule. Called
//! by the booking front-end and the booking API handlers via HTTP/JSON for
//! every quote.

pub mod calculators;
pub mod destinations;
pub mod models;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;
pub mod surcharges;

// Re-export commonly used items
pub use models::{PriceBreakdown, PricingConfig, TripRequest, VehicleClass};
pub use routes::router;
pub use services::{PricingError, Quote, RoundTripQuote};
