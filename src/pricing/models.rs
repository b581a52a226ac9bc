//! Domain models and rate configuration for the pricing engine.
//!
//! The whole engine is parameterized by [`PricingConfig`]: one rate table,
//! one surcharge schedule, one keyword table. Loaded once at startup and
//! shared read-only for the process lifetime.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Vehicle classes offered by the fleet, smallest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum VehicleClass {
    #[serde(rename = "SEDAN")]
    Sedan,
    #[serde(rename = "SUV")]
    Suv,
    #[serde(rename = "XL-SUV")]
    SuvXl,
}

impl VehicleClass {
    pub const ALL: [VehicleClass; 3] = [VehicleClass::Sedan, VehicleClass::Suv, VehicleClass::SuvXl];

    /// Wire/display name, matching the booking form values.
    pub fn label(&self) -> &'static str {
        match self {
            VehicleClass::Sedan => "SEDAN",
            VehicleClass::Suv => "SUV",
            VehicleClass::SuvXl => "XL-SUV",
        }
    }

    /// Whether this class may carry the given passenger count.
    ///
    /// Counts above 4 require the XL-SUV; exactly 4 excludes the sedan.
    pub fn allows(&self, passengers: i32) -> bool {
        match self {
            VehicleClass::Sedan => passengers <= 3,
            VehicleClass::Suv => passengers <= 4,
            VehicleClass::SuvXl => true,
        }
    }
}

impl fmt::Display for VehicleClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single trip to be priced. Transient; built per quote call, never stored.
///
/// Date and time arrive as strings from the form and are parsed strictly by
/// the quote service; a value that does not parse rejects the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripRequest {
    pub pickup: String,
    pub destination: String,
    /// Calendar day, `YYYY-MM-DD`.
    pub date: String,
    /// Local 24-hour clock time, `HH:MM`.
    pub time: String,
    pub vehicle: VehicleClass,
    pub baggage_claim: bool,
    pub passengers: i32,
}

/// Itemized quote for one leg. Derived, immutable, recomputed from scratch
/// on every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceBreakdown {
    pub base: Decimal,
    pub baggage_claim_fee: Decimal,
    pub after_hours_fee: Decimal,
    pub holiday_fee: Decimal,
    pub total: Decimal,
}

/// Base fares for one destination, keyed by vehicle class.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DestinationRate {
    pub display_name: String,
    pub fares: BTreeMap<VehicleClass, Decimal>,
}

/// An ordered (substring -> destination code) entry. Declaration order is
/// the scan order: more specific multi-word keys come before short or
/// ambiguous ones.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DestinationKeyword {
    pub keyword: String,
    pub code: String,
}

/// Year-independent calendar date for the holiday table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayDate {
    pub month: u32,
    pub day: u32,
}

impl HolidayDate {
    pub fn matches(&self, date: NaiveDate) -> bool {
        date.month() == self.month && date.day() == self.day
    }
}

/// Flat-fee surcharge rules. Each rule is independent and additive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurchargeSchedule {
    /// Start of the after-hours window (inclusive).
    pub after_hours_start: NaiveTime,
    /// End of the after-hours window (exclusive).
    pub after_hours_end: NaiveTime,
    /// After-hours fee charged for destinations without an override.
    pub after_hours_fee: Decimal,
    /// Per-destination after-hours fees, e.g. the reduced home-airport rate.
    #[serde(default)]
    pub after_hours_overrides: BTreeMap<String, Decimal>,
    pub holiday_fee: Decimal,
    /// Literal month/day pairs. The Thanksgiving pair floats and must be
    /// refreshed each calendar year.
    pub holidays: Vec<HolidayDate>,
    pub baggage_claim_fee: Decimal,
}

/// The complete pricing schedule, consumed identically by every caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    pub currency: String,
    /// Fallback destination code when no keyword matches (the home airport).
    pub default_destination: String,
    pub destination_keywords: Vec<DestinationKeyword>,
    pub rates: BTreeMap<String, DestinationRate>,
    pub surcharges: SurchargeSchedule,
}

impl Default for PricingConfig {
    fn default() -> Self {
        let keyword = |keyword: &str, code: &str| DestinationKeyword {
            keyword: keyword.to_string(),
            code: code.to_string(),
        };
        let rate = |name: &str, sedan: Decimal, suv: Decimal, xl: Decimal| DestinationRate {
            display_name: name.to_string(),
            fares: BTreeMap::from([
                (VehicleClass::Sedan, sedan),
                (VehicleClass::Suv, suv),
                (VehicleClass::SuvXl, xl),
            ]),
        };

        PricingConfig {
            currency: "USD".to_string(),
            default_destination: "SNA".to_string(),
            destination_keywords: vec![
                keyword("john wayne", "SNA"),
                keyword("santa ana", "SNA"),
                keyword("orange county", "SNA"),
                keyword("sna", "SNA"),
                keyword("los angeles international", "LAX"),
                keyword("lax", "LAX"),
                keyword("los angeles", "LAX"),
                keyword("long beach", "LGB"),
                keyword("lgb", "LGB"),
                keyword("san diego", "SAN"),
                keyword("ontario", "ONT"),
                keyword("ont", "ONT"),
                keyword("burbank", "BUR"),
                keyword("bob hope", "BUR"),
                // Generic key, declared last so the specific ones above win.
                keyword("san", "SAN"),
            ],
            rates: BTreeMap::from([
                ("SNA".to_string(), rate("John Wayne Airport", dec!(50), dec!(65), dec!(85))),
                ("LAX".to_string(), rate("Los Angeles International", dec!(105), dec!(125), dec!(160))),
                ("LGB".to_string(), rate("Long Beach Airport", dec!(70), dec!(85), dec!(110))),
                ("ONT".to_string(), rate("Ontario International", dec!(120), dec!(140), dec!(175))),
                ("BUR".to_string(), rate("Hollywood Burbank Airport", dec!(130), dec!(150), dec!(190))),
                ("SAN".to_string(), rate("San Diego International", dec!(180), dec!(210), dec!(260))),
            ]),
            surcharges: SurchargeSchedule {
                after_hours_start: NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
                after_hours_end: NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
                after_hours_fee: dec!(20),
                after_hours_overrides: BTreeMap::from([("SNA".to_string(), dec!(10))]),
                holiday_fee: dec!(20),
                holidays: vec![
                    HolidayDate { month: 1, day: 1 },
                    HolidayDate { month: 7, day: 4 },
                    // Thanksgiving + day after, 2025 dates.
                    HolidayDate { month: 11, day: 27 },
                    HolidayDate { month: 11, day: 28 },
                    HolidayDate { month: 12, day: 24 },
                    HolidayDate { month: 12, day: 25 },
                    HolidayDate { month: 12, day: 31 },
                ],
                baggage_claim_fee: dec!(25),
            },
        }
    }
}

impl PricingConfig {
    /// Base fare for a (destination, vehicle class) pair, if configured.
    pub fn base_fare(&self, code: &str, vehicle: VehicleClass) -> Option<Decimal> {
        self.rates.get(code).and_then(|r| r.fares.get(&vehicle)).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_class_gate() {
        assert!(VehicleClass::Sedan.allows(1));
        assert!(VehicleClass::Sedan.allows(3));
        assert!(!VehicleClass::Sedan.allows(4));
        assert!(VehicleClass::Suv.allows(4));
        assert!(!VehicleClass::Suv.allows(5));
        assert!(VehicleClass::SuvXl.allows(5));
        assert!(VehicleClass::SuvXl.allows(8));
    }

    #[test]
    fn test_vehicle_class_wire_names() {
        assert_eq!(serde_json::to_string(&VehicleClass::Sedan).unwrap(), "\"SEDAN\"");
        assert_eq!(serde_json::to_string(&VehicleClass::SuvXl).unwrap(), "\"XL-SUV\"");

        let parsed: VehicleClass = serde_json::from_str("\"XL-SUV\"").unwrap();
        assert_eq!(parsed, VehicleClass::SuvXl);
    }

    #[test]
    fn test_holiday_date_matches_any_year() {
        let christmas = HolidayDate { month: 12, day: 25 };
        assert!(christmas.matches(NaiveDate::from_ymd_opt(2024, 12, 25).unwrap()));
        assert!(christmas.matches(NaiveDate::from_ymd_opt(2031, 12, 25).unwrap()));
        assert!(!christmas.matches(NaiveDate::from_ymd_opt(2025, 12, 26).unwrap()));
    }

    #[test]
    fn test_default_config_base_fares() {
        let cfg = PricingConfig::default();
        assert_eq!(cfg.base_fare("SNA", VehicleClass::Sedan), Some(dec!(50)));
        assert_eq!(cfg.base_fare("LAX", VehicleClass::SuvXl), Some(dec!(160)));
        assert_eq!(cfg.base_fare("XXX", VehicleClass::Sedan), None);
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let cfg = PricingConfig::default();
        let json = serde_json::to_string(&cfg).unwrap();
        let parsed: PricingConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.default_destination, "SNA");
        assert_eq!(parsed.base_fare("SNA", VehicleClass::Sedan), Some(dec!(50)));
        assert_eq!(parsed.surcharges.holidays.len(), 7);
    }
}
