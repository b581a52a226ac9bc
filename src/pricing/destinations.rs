//! Destination resolution.
//!
//! Maps free-form or enumerated location values ("Home", "Other", an airport
//! code, arbitrary text) to a canonical destination code usable as a rate
//! table key. Resolution scans the configured keyword table in declaration
//! order, so overlapping substrings resolve deterministically.

use crate::pricing::models::{PricingConfig, VehicleClass};

/// Resolve a single location string against the keyword table.
///
/// The input is lower-cased and checked against each keyword in declaration
/// order; the first substring match wins. Returns `None` when nothing
/// matches (e.g. "Home" or free text with no airport reference).
pub fn resolve_keyword<'a>(config: &'a PricingConfig, text: &str) -> Option<&'a str> {
    let haystack = text.to_lowercase();
    config
        .destination_keywords
        .iter()
        .find(|entry| haystack.contains(&entry.keyword))
        .map(|entry| entry.code.as_str())
}

/// One-sided resolution over the concatenated pickup and destination text.
///
/// Falls back to the configured default code (the home airport) when no
/// keyword matches anywhere. Deliberate fallback policy, not an error path.
pub fn resolve_concatenated(config: &PricingConfig, pickup: &str, destination: &str) -> String {
    // Joined with a space so no substring spans the field boundary.
    let combined = format!("{} {}", pickup, destination);
    resolve_keyword(config, &combined)
        .unwrap_or(&config.default_destination)
        .to_string()
}

/// Two-sided route resolution for the booking form.
///
/// Pickup and destination resolve independently. When both sides name a
/// known airport and the codes differ, the side with the higher base fare
/// for the chosen vehicle class is the authoritative route. When only one
/// side carries a fare for that class, the priced side wins; on equal fares
/// the destination side wins. A single resolving side is used as-is;
/// neither side resolving falls through to the concatenated scan and its
/// default-code fallback.
pub fn resolve_route(
    config: &PricingConfig,
    pickup: &str,
    destination: &str,
    vehicle: VehicleClass,
) -> String {
    match (resolve_keyword(config, pickup), resolve_keyword(config, destination)) {
        (Some(p), Some(d)) if p != d => higher_fare_side(config, p, d, vehicle).to_string(),
        (Some(p), _) => p.to_string(),
        (None, Some(d)) => d.to_string(),
        (None, None) => resolve_concatenated(config, pickup, destination),
    }
}

fn higher_fare_side<'a>(
    config: &PricingConfig,
    pickup_code: &'a str,
    destination_code: &'a str,
    vehicle: VehicleClass,
) -> &'a str {
    let pickup_fare = config.base_fare(pickup_code, vehicle);
    let destination_fare = config.base_fare(destination_code, vehicle);
    match (pickup_fare, destination_fare) {
        (Some(p), Some(d)) if p > d => pickup_code,
        (Some(_), None) => pickup_code,
        _ => destination_code,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> PricingConfig {
        PricingConfig::default()
    }

    #[test]
    fn test_resolve_keyword_basic() {
        let cfg = cfg();
        assert_eq!(resolve_keyword(&cfg, "John Wayne Airport (SNA)"), Some("SNA"));
        assert_eq!(resolve_keyword(&cfg, "LAX"), Some("LAX"));
        assert_eq!(resolve_keyword(&cfg, "flying out of Long Beach"), Some("LGB"));
    }

    #[test]
    fn test_resolve_keyword_is_case_insensitive() {
        let cfg = cfg();
        assert_eq!(resolve_keyword(&cfg, "SANTA ANA"), Some("SNA"));
        assert_eq!(resolve_keyword(&cfg, "lax"), Some("LAX"));
    }

    #[test]
    fn test_specific_keyword_beats_ambiguous_one() {
        let cfg = cfg();
        // "santa ana" contains "san" but the multi-word key is declared first.
        assert_eq!(resolve_keyword(&cfg, "Santa Ana"), Some("SNA"));
        assert_eq!(resolve_keyword(&cfg, "San Diego International"), Some("SAN"));
        // Bare ambiguous text still hits the generic key.
        assert_eq!(resolve_keyword(&cfg, "san"), Some("SAN"));
    }

    #[test]
    fn test_unmatched_text_resolves_to_none() {
        let cfg = cfg();
        assert_eq!(resolve_keyword(&cfg, "Home"), None);
        assert_eq!(resolve_keyword(&cfg, "Other"), None);
        assert_eq!(resolve_keyword(&cfg, "123 Main St, Irvine"), None);
    }

    #[test]
    fn test_concatenated_scan_with_fallback() {
        let cfg = cfg();
        assert_eq!(resolve_concatenated(&cfg, "Home", "John Wayne Airport"), "SNA");
        assert_eq!(resolve_concatenated(&cfg, "LAX", "Home"), "LAX");
        // Nothing matches: fall back to the home airport.
        assert_eq!(resolve_concatenated(&cfg, "Home", "Other"), "SNA");
    }

    #[test]
    fn test_concatenation_does_not_bridge_fields() {
        let cfg = cfg();
        // "...la" + "x..." must not fabricate "lax" across the boundary.
        assert_eq!(resolve_concatenated(&cfg, "Villa", "Xavier St"), "SNA");
    }

    #[test]
    fn test_route_uses_single_resolving_side() {
        let cfg = cfg();
        assert_eq!(resolve_route(&cfg, "Home", "LAX", VehicleClass::Sedan), "LAX");
        assert_eq!(resolve_route(&cfg, "Ontario Airport", "Home", VehicleClass::Sedan), "ONT");
    }

    #[test]
    fn test_route_picks_higher_fare_when_both_resolve() {
        let cfg = cfg();
        // LAX sedan $105 beats SNA sedan $50, regardless of direction.
        assert_eq!(resolve_route(&cfg, "LAX", "John Wayne", VehicleClass::Sedan), "LAX");
        assert_eq!(resolve_route(&cfg, "John Wayne", "LAX", VehicleClass::Sedan), "LAX");
    }

    #[test]
    fn test_route_tie_prefers_destination_side() {
        let mut cfg = cfg();
        let lgb = cfg.rates["LGB"].clone();
        if let Some(rate) = cfg.rates.get_mut("ONT") {
            rate.fares = lgb.fares.clone();
        }
        assert_eq!(resolve_route(&cfg, "Long Beach", "Ontario", VehicleClass::Suv), "ONT");
    }

    #[test]
    fn test_route_same_code_both_sides() {
        let cfg = cfg();
        assert_eq!(resolve_route(&cfg, "SNA", "John Wayne Airport", VehicleClass::Sedan), "SNA");
    }

    #[test]
    fn test_route_neither_side_resolves() {
        let cfg = cfg();
        assert_eq!(resolve_route(&cfg, "Home", "Other", VehicleClass::Sedan), "SNA");
    }

    #[test]
    fn test_route_falls_through_to_concatenated_scan() {
        let cfg = cfg();
        // Neither field matches alone; the joined text does.
        assert_eq!(
            resolve_route(&cfg, "Los", "Angeles area please", VehicleClass::Sedan),
            "LAX"
        );
    }

    #[test]
    fn test_route_unpriced_side_loses() {
        let mut cfg = cfg();
        if let Some(rate) = cfg.rates.get_mut("BUR") {
            rate.fares.remove(&VehicleClass::Sedan);
        }
        // BUR has no sedan fare, so the priced LGB side is authoritative.
        assert_eq!(resolve_route(&cfg, "Burbank", "Long Beach", VehicleClass::Sedan), "LGB");
        assert_eq!(resolve_route(&cfg, "Long Beach", "Burbank", VehicleClass::Sedan), "LGB");
    }
}
