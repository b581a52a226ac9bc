//! Response DTOs for pricing API endpoints.

use rust_decimal::Decimal;
use serde::Serialize;

use super::models::{PricingConfig, VehicleClass};
use super::services::{Quote, RoundTripQuote};

/// Money value for JSON responses.
#[derive(Debug, Clone, Serialize)]
pub struct MoneyResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: String,
}

impl MoneyResponse {
    pub fn new(amount: Decimal, currency: &str) -> Self {
        MoneyResponse {
            amount,
            currency: currency.to_string(),
        }
    }
}

/// One priced leg, itemized.
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub destination: String,
    pub destination_name: String,
    pub vehicle: VehicleClass,
    pub base: MoneyResponse,
    pub baggage_claim_fee: MoneyResponse,
    pub after_hours_fee: MoneyResponse,
    pub holiday_fee: MoneyResponse,
    pub total: MoneyResponse,
}

impl QuoteResponse {
    pub fn from_quote(quote: Quote, currency: &str) -> Self {
        let b = quote.breakdown;
        QuoteResponse {
            destination: quote.destination,
            destination_name: quote.destination_name,
            vehicle: quote.vehicle,
            base: MoneyResponse::new(b.base, currency),
            baggage_claim_fee: MoneyResponse::new(b.baggage_claim_fee, currency),
            after_hours_fee: MoneyResponse::new(b.after_hours_fee, currency),
            holiday_fee: MoneyResponse::new(b.holiday_fee, currency),
            total: MoneyResponse::new(b.total, currency),
        }
    }
}

/// Round-trip quote: both legs plus the combined total.
#[derive(Debug, Serialize)]
pub struct RoundTripQuoteResponse {
    pub outbound: QuoteResponse,
    #[serde(rename = "return")]
    pub return_leg: QuoteResponse,
    pub total: MoneyResponse,
}

impl RoundTripQuoteResponse {
    pub fn from_quote(quote: RoundTripQuote, currency: &str) -> Self {
        RoundTripQuoteResponse {
            outbound: QuoteResponse::from_quote(quote.outbound, currency),
            return_leg: QuoteResponse::from_quote(quote.return_leg, currency),
            total: MoneyResponse::new(quote.total, currency),
        }
    }
}

/// A (vehicle class, base fare) pair on the rate sheet.
#[derive(Debug, Serialize)]
pub struct FareResponse {
    pub vehicle: VehicleClass,
    pub amount: MoneyResponse,
}

/// One destination's entry on the rate sheet.
#[derive(Debug, Serialize)]
pub struct DestinationFaresResponse {
    pub code: String,
    pub display_name: String,
    pub fares: Vec<FareResponse>,
}

/// Per-destination after-hours override entry.
#[derive(Debug, Serialize)]
pub struct AfterHoursOverrideResponse {
    pub destination: String,
    pub fee: MoneyResponse,
}

/// Surcharge schedule as rendered for the booking form.
#[derive(Debug, Serialize)]
pub struct SurchargeScheduleResponse {
    /// `HH:MM`.
    pub after_hours_start: String,
    /// `HH:MM`.
    pub after_hours_end: String,
    pub after_hours_fee: MoneyResponse,
    pub after_hours_overrides: Vec<AfterHoursOverrideResponse>,
    pub holiday_fee: MoneyResponse,
    /// `MM-DD`, year-independent.
    pub holidays: Vec<String>,
    pub baggage_claim_fee: MoneyResponse,
}

/// The full rate sheet: everything the booking form needs to render fares.
#[derive(Debug, Serialize)]
pub struct RateSheetResponse {
    pub currency: String,
    pub default_destination: String,
    pub destinations: Vec<DestinationFaresResponse>,
    pub surcharges: SurchargeScheduleResponse,
}

impl RateSheetResponse {
    pub fn from_config(config: &PricingConfig) -> Self {
        let currency = config.currency.as_str();
        let destinations = config
            .rates
            .iter()
            .map(|(code, rate)| DestinationFaresResponse {
                code: code.clone(),
                display_name: rate.display_name.clone(),
                fares: rate
                    .fares
                    .iter()
                    .map(|(vehicle, amount)| FareResponse {
                        vehicle: *vehicle,
                        amount: MoneyResponse::new(*amount, currency),
                    })
                    .collect(),
            })
            .collect();

        let s = &config.surcharges;
        let surcharges = SurchargeScheduleResponse {
            after_hours_start: s.after_hours_start.format("%H:%M").to_string(),
            after_hours_end: s.after_hours_end.format("%H:%M").to_string(),
            after_hours_fee: MoneyResponse::new(s.after_hours_fee, currency),
            after_hours_overrides: s
                .after_hours_overrides
                .iter()
                .map(|(code, fee)| AfterHoursOverrideResponse {
                    destination: code.clone(),
                    fee: MoneyResponse::new(*fee, currency),
                })
                .collect(),
            holiday_fee: MoneyResponse::new(s.holiday_fee, currency),
            holidays: s
                .holidays
                .iter()
                .map(|h| format!("{:02}-{:02}", h.month, h.day))
                .collect(),
            baggage_claim_fee: MoneyResponse::new(s.baggage_claim_fee, currency),
        };

        RateSheetResponse {
            currency: config.currency.clone(),
            default_destination: config.default_destination.clone(),
            destinations,
            surcharges,
        }
    }
}

/// Eligible vehicle classes for a passenger count.
#[derive(Debug, Serialize)]
pub struct VehicleClassesResponse {
    pub passengers: i32,
    pub eligible: Vec<VehicleClass>,
}

/// Generic pricing error response.
#[derive(Debug, Serialize)]
pub struct PricingErrorResponse {
    pub error_type: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_money_serializes_amount_as_string() {
        let money = MoneyResponse::new(dec!(105), "USD");
        let json = serde_json::to_value(&money).unwrap();
        assert_eq!(json["amount"], "105");
        assert_eq!(json["currency"], "USD");
    }

    #[test]
    fn test_rate_sheet_from_default_config() {
        let sheet = RateSheetResponse::from_config(&PricingConfig::default());
        assert_eq!(sheet.currency, "USD");
        assert_eq!(sheet.default_destination, "SNA");
        assert_eq!(sheet.destinations.len(), 6);

        let sna = sheet.destinations.iter().find(|d| d.code == "SNA").unwrap();
        assert_eq!(sna.display_name, "John Wayne Airport");
        assert_eq!(sna.fares.len(), 3);

        assert_eq!(sheet.surcharges.after_hours_start, "20:00");
        assert_eq!(sheet.surcharges.after_hours_end, "06:00");
        assert!(sheet.surcharges.holidays.contains(&"12-25".to_string()));
        assert_eq!(sheet.surcharges.after_hours_overrides.len(), 1);
    }

    #[test]
    fn test_round_trip_response_uses_return_key() {
        use crate::pricing::models::{TripRequest, VehicleClass};
        use crate::pricing::services;

        let cfg = PricingConfig::default();
        let leg = TripRequest {
            pickup: "LAX".to_string(),
            destination: "Home".to_string(),
            date: "2025-03-01".to_string(),
            time: "14:00".to_string(),
            vehicle: VehicleClass::Sedan,
            baggage_claim: false,
            passengers: 1,
        };
        let rt = services::quote_round_trip(&cfg, &leg, &leg).unwrap();
        let json = serde_json::to_value(RoundTripQuoteResponse::from_quote(rt, "USD")).unwrap();
        assert!(json.get("return").is_some());
        assert_eq!(json["total"]["amount"], "210");
    }
}
