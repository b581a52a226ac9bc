//! Core pricing calculation functions.
//!
//! Pure functions for price composition - no I/O, no shared state. The
//! quote service feeds these with resolved codes and evaluated surcharges.

use rust_decimal::Decimal;

use crate::pricing::models::{PriceBreakdown, VehicleClass};

/// Vehicle classes eligible for a passenger count, smallest first.
///
/// More than 4 passengers forces the XL-SUV; exactly 4 excludes the sedan;
/// 3 or fewer allows any class.
pub fn eligible_classes(passengers: i32) -> Vec<VehicleClass> {
    VehicleClass::ALL
        .iter()
        .copied()
        .filter(|class| class.allows(passengers))
        .collect()
}

/// Assemble a breakdown from the base fare and the evaluated surcharges.
///
/// total = base + baggage-claim fee + after-hours fee + holiday fee.
pub fn compose_breakdown(
    base: Decimal,
    baggage_claim_fee: Decimal,
    after_hours_fee: Decimal,
    holiday_fee: Decimal,
) -> PriceBreakdown {
    PriceBreakdown {
        base,
        baggage_claim_fee,
        after_hours_fee,
        holiday_fee,
        total: base + baggage_claim_fee + after_hours_fee + holiday_fee,
    }
}

/// Combined round-trip total: the arithmetic sum of both legs, no discount.
pub fn round_trip_total(outbound: &PriceBreakdown, return_leg: &PriceBreakdown) -> Decimal {
    outbound.total + return_leg.total
}
