//! Error handling for the application

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::pricing::responses::PricingErrorResponse;
use crate::pricing::services::PricingError;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Route not found")]
    NotFound,

    #[error(transparent)]
    Pricing(#[from] PricingError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            AppError::NotFound => (StatusCode::NOT_FOUND, "not_found", self.to_string()),
            AppError::Pricing(e) => {
                let status = if e.is_validation() {
                    StatusCode::BAD_REQUEST
                } else {
                    // Resolvable route the schedule does not price.
                    StatusCode::UNPROCESSABLE_ENTITY
                };
                tracing::debug!("quote rejected: {}", e);
                (status, e.kind(), e.to_string())
            }
        };

        let body = Json(PricingErrorResponse {
            error_type: error_type.to_string(),
            message,
        });

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::models::VehicleClass;

    #[test]
    fn test_validation_errors_map_to_bad_request() {
        let err = AppError::from(PricingError::IneligibleVehicle {
            vehicle: VehicleClass::Sedan,
            passengers: 4,
        });
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);

        let err = AppError::from(PricingError::MalformedTime("9pm".to_string()));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_unpriced_errors_map_to_unprocessable() {
        let err = AppError::from(PricingError::UnpricedDestination {
            code: "LGB".to_string(),
        });
        assert_eq!(err.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
