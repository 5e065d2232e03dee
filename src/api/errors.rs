//! Consistent JSON error responses.
//!
//! Every failure leaves the API as `{"error": <code>, "message": <text>}`.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tracing::error;

use crate::errors::Error;

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation {
            message: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for Error {
    fn from(rejection: PathRejection) -> Self {
        Self::Validation {
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match &self {
            Self::Validation { .. } => {
                json_error(StatusCode::BAD_REQUEST, "validation_error", self.to_string())
            }
            Self::InvalidQuantity { .. } => {
                json_error(StatusCode::BAD_REQUEST, "invalid_quantity", self.to_string())
            }
            Self::InvalidPrice { .. } => {
                json_error(StatusCode::BAD_REQUEST, "invalid_price", self.to_string())
            }
            Self::InsufficientStock { .. } => json_error(
                StatusCode::BAD_REQUEST,
                "insufficient_stock",
                self.to_string(),
            ),
            Self::ItemNotFound { .. } => {
                json_error(StatusCode::NOT_FOUND, "not_found", self.to_string())
            }
            Self::Config { .. } | Self::Database(_) | Self::Io(_) => {
                error!(error = %self, "Request failed");
                json_error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "internal server error",
                )
            }
        }
    }
}

/// Builds an error response with the given status, machine-readable code and message.
pub fn json_error(status: StatusCode, code: &'static str, message: impl Into<String>) -> Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (
                Error::Validation {
                    message: "missing field `name`".to_string(),
                },
                StatusCode::BAD_REQUEST,
            ),
            (
                Error::InvalidQuantity { quantity: 0 },
                StatusCode::BAD_REQUEST,
            ),
            (Error::InvalidPrice { price: -1.0 }, StatusCode::BAD_REQUEST),
            (
                Error::InsufficientStock {
                    available: 10,
                    requested: 15,
                },
                StatusCode::BAD_REQUEST,
            ),
            (Error::ItemNotFound { id: 7 }, StatusCode::NOT_FOUND),
            (
                Error::Database(sea_orm::DbErr::Custom("boom".to_string())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }
}
