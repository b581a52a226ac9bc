//! Surcharge rule evaluation.
//!
//! Three flat-fee rules, each independent and additive with no compounding:
//! after-hours, holiday, and baggage-claim meet-and-greet. Every rule is a
//! pure function over the schedule and already-parsed trip fields, so each
//! is unit-testable against boundary timestamps in isolation.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;

use crate::pricing::models::SurchargeSchedule;

/// Whether the stated local clock time falls in the after-hours window.
///
/// The window start is inclusive and the end exclusive; an overnight window
/// (start after end, e.g. 20:00-06:00) wraps midnight.
pub fn is_after_hours(schedule: &SurchargeSchedule, time: NaiveTime) -> bool {
    if schedule.after_hours_start <= schedule.after_hours_end {
        time >= schedule.after_hours_start && time < schedule.after_hours_end
    } else {
        time >= schedule.after_hours_start || time < schedule.after_hours_end
    }
}

/// After-hours fee for a trip, zero outside the window.
///
/// The fee varies by destination: an override entry (e.g. the reduced
/// home-airport rate) takes precedence over the schedule-wide default.
pub fn after_hours_fee(schedule: &SurchargeSchedule, destination: &str, time: NaiveTime) -> Decimal {
    if !is_after_hours(schedule, time) {
        return Decimal::ZERO;
    }
    schedule
        .after_hours_overrides
        .get(destination)
        .copied()
        .unwrap_or(schedule.after_hours_fee)
}

/// Whether the trip date's month/day is in the holiday calendar, any year.
pub fn is_holiday(schedule: &SurchargeSchedule, date: NaiveDate) -> bool {
    schedule.holidays.iter().any(|h| h.matches(date))
}

/// Holiday fee for a trip date, zero on non-holidays.
pub fn holiday_fee(schedule: &SurchargeSchedule, date: NaiveDate) -> Decimal {
    if is_holiday(schedule, date) {
        schedule.holiday_fee
    } else {
        Decimal::ZERO
    }
}

/// Baggage-claim meet-and-greet fee, zero unless requested.
///
/// Flat fee, independent of destination and vehicle class.
pub fn baggage_claim_fee(schedule: &SurchargeSchedule, requested: bool) -> Decimal {
    if requested {
        schedule.baggage_claim_fee
    } else {
        Decimal::ZERO
    }
}
