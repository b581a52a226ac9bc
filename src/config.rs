//! Application configuration.
//!
//! Process settings come from the environment (with logged defaults); the
//! pricing schedule comes from a serde-JSON file named by
//! `OCSHUTTLE_RATES_FILE`, falling back to the built-in schedule. The loaded
//! schedule is validated once at startup and never mutated afterwards.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::pricing::models::{PricingConfig, VehicleClass};

/// Process-level settings read from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub schedule_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        AppConfig {
            host: env_or("OCSHUTTLE_HOST", "0.0.0.0"),
            port: env_or("OCSHUTTLE_PORT", "8080").parse().unwrap_or_else(|e| {
                warn!("Invalid OCSHUTTLE_PORT value: {e}, using 8080");
                8080
            }),
            schedule_path: env::var("OCSHUTTLE_RATES_FILE").ok().map(PathBuf::from),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    })
}

/// Schedule loading and validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read rates file: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot parse rates file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("default destination {code} has no rate entry")]
    UnknownDefaultDestination { code: String },

    #[error("destination {code} is missing a {vehicle} fare")]
    MissingFare { code: String, vehicle: VehicleClass },

    #[error("empty destination keyword for code {code}")]
    EmptyKeyword { code: String },

    #[error("invalid holiday date {month:02}-{day:02}")]
    InvalidHoliday { month: u32, day: u32 },

    #[error("negative amount configured for {what}")]
    NegativeAmount { what: String },
}

/// Load the pricing schedule: from the given file, or the built-in defaults
/// when no file is configured. The result is validated before use.
pub fn load_pricing_config(path: Option<&Path>) -> Result<PricingConfig, ConfigError> {
    let mut config = match path {
        Some(p) => {
            let raw = fs::read_to_string(p)?;
            let config: PricingConfig = serde_json::from_str(&raw)?;
            info!("loaded pricing schedule from {}", p.display());
            config
        }
        None => {
            info!("OCSHUTTLE_RATES_FILE not set, using built-in pricing schedule");
            PricingConfig::default()
        }
    };

    // Resolution lower-cases only the haystack, so keys must be lower-case.
    for entry in &mut config.destination_keywords {
        entry.keyword = entry.keyword.to_lowercase();
    }

    validate(&config)?;
    Ok(config)
}

/// Validate a pricing schedule.
///
/// Every destination must price every vehicle class; a partial table is a
/// startup failure, never a silent zero at quote time.
pub fn validate(config: &PricingConfig) -> Result<(), ConfigError> {
    if !config.rates.contains_key(&config.default_destination) {
        return Err(ConfigError::UnknownDefaultDestination {
            code: config.default_destination.clone(),
        });
    }

    for (code, rate) in &config.rates {
        for vehicle in VehicleClass::ALL {
            match rate.fares.get(&vehicle) {
                None => {
                    return Err(ConfigError::MissingFare {
                        code: code.clone(),
                        vehicle,
                    })
                }
                Some(fare) if *fare < Decimal::ZERO => {
                    return Err(ConfigError::NegativeAmount {
                        what: format!("{code} {vehicle} fare"),
                    })
                }
                Some(_) => {}
            }
        }
    }

    for entry in &config.destination_keywords {
        if entry.keyword.trim().is_empty() {
            return Err(ConfigError::EmptyKeyword {
                code: entry.code.clone(),
            });
        }
        if !config.rates.contains_key(&entry.code) {
            warn!(
                "keyword {:?} maps to {}, which has no rate entry",
                entry.keyword, entry.code
            );
        }
    }

    let s = &config.surcharges;
    for h in &s.holidays {
        if h.month < 1 || h.month > 12 || h.day < 1 || h.day > 31 {
            return Err(ConfigError::InvalidHoliday {
                month: h.month,
                day: h.day,
            });
        }
    }

    let fees = [
        ("after-hours fee", s.after_hours_fee),
        ("holiday fee", s.holiday_fee),
        ("baggage-claim fee", s.baggage_claim_fee),
    ];
    for (what, fee) in fees {
        if fee < Decimal::ZERO {
            return Err(ConfigError::NegativeAmount {
                what: what.to_string(),
            });
        }
    }
    for (code, fee) in &s.after_hours_overrides {
        if *fee < Decimal::ZERO {
            return Err(ConfigError::NegativeAmount {
                what: format!("{code} after-hours override"),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::models::HolidayDate;
    use rust_decimal_macros::dec;

    #[test]
    fn test_builtin_schedule_validates() {
        assert!(validate(&PricingConfig::default()).is_ok());
    }

    #[test]
    fn test_missing_fare_rejected() {
        let mut cfg = PricingConfig::default();
        cfg.rates
            .get_mut("LAX")
            .unwrap()
            .fares
            .remove(&VehicleClass::Suv);
        assert!(matches!(
            validate(&cfg),
            Err(ConfigError::MissingFare { vehicle: VehicleClass::Suv, .. })
        ));
    }

    #[test]
    fn test_unknown_default_destination_rejected() {
        let mut cfg = PricingConfig::default();
        cfg.default_destination = "JFK".to_string();
        assert!(matches!(
            validate(&cfg),
            Err(ConfigError::UnknownDefaultDestination { .. })
        ));
    }

    #[test]
    fn test_invalid_holiday_rejected() {
        let mut cfg = PricingConfig::default();
        cfg.surcharges.holidays.push(HolidayDate { month: 13, day: 1 });
        assert!(matches!(validate(&cfg), Err(ConfigError::InvalidHoliday { .. })));
    }

    #[test]
    fn test_negative_fee_rejected() {
        let mut cfg = PricingConfig::default();
        cfg.surcharges.holiday_fee = dec!(-5);
        assert!(matches!(validate(&cfg), Err(ConfigError::NegativeAmount { .. })));
    }

    #[test]
    fn test_empty_keyword_rejected() {
        let mut cfg = PricingConfig::default();
        cfg.destination_keywords[0].keyword = "  ".to_string();
        assert!(matches!(validate(&cfg), Err(ConfigError::EmptyKeyword { .. })));
    }

    #[test]
    fn test_schedule_parses_from_json() {
        let json = serde_json::to_string(&PricingConfig::default()).unwrap();
        let parsed: PricingConfig = serde_json::from_str(&json).unwrap();
        assert!(validate(&parsed).is_ok());
    }

    #[test]
    fn test_load_falls_back_to_builtin() {
        let cfg = load_pricing_config(None).unwrap();
        assert_eq!(cfg.default_destination, "SNA");
    }

    #[test]
    fn test_load_missing_file_errors() {
        let err = load_pricing_config(Some(Path::new("/nonexistent/rates.json")));
        assert!(matches!(err, Err(ConfigError::Io(_))));
    }
}
