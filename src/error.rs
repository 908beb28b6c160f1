use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

/// Failure kinds reported by the catalog, scaler, ledger and goal tracker.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NutritionError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: String },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("data integrity violation: {0}")]
    DataIntegrity(String),
}

impl NutritionError {
    pub fn dish_not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: "dish",
            id: id.into(),
        }
    }

    pub fn meal_not_found(id: impl ToString) -> Self {
        Self::NotFound {
            entity: "meal",
            id: id.to_string(),
        }
    }
}

/// Error returned by HTTP handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Nutrition(#[from] NutritionError),

    #[error("{0}")]
    BadRequest(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Nutrition(NutritionError::NotFound { .. }) => StatusCode::NOT_FOUND,
            ApiError::Nutrition(NutritionError::InvalidInput(_)) => StatusCode::BAD_REQUEST,
            ApiError::Nutrition(NutritionError::DataIntegrity(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        } else {
            warn!(error = %self, %status, "request rejected");
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
