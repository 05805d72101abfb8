use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Every variant renders the `{"status": "error", ...}` action envelope.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error on {field}: {message}")]
    Validation { field: String, message: String },

    #[error("Matching service error: {0}")]
    MatchingService(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation { .. } => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                "Invalid input.".to_string(),
            ),
            AppError::MatchingService(msg) => {
                tracing::error!("Matching service error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "MATCHING_SERVICE_ERROR",
                    "An error occurred while finding mentors.".to_string(),
                )
            }
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "LLM_ERROR",
                    "AI service failed.".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let mut body = json!({
            "status": "error",
            "code": code,
            "message": message
        });

        if let AppError::Validation { field, message } = &self {
            let mut field_errors = serde_json::Map::new();
            field_errors.insert(field.clone(), json!([message]));
            body["fieldErrors"] = serde_json::Value::Object(field_errors);
        }

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_validation_error_carries_field_errors() {
        let response =
            AppError::validation("skillsAndInterests", "Please describe your skills and interests.")
                .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["status"], "error");
        assert_eq!(body["code"], "VALIDATION_ERROR");
        assert_eq!(
            body["fieldErrors"]["skillsAndInterests"][0],
            "Please describe your skills and interests."
        );
    }

    #[tokio::test]
    async fn test_matching_service_error_hides_detail() {
        let response =
            AppError::MatchingService("connection reset by peer".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let body = body_json(response).await;
        assert_eq!(body["message"], "An error occurred while finding mentors.");
        assert!(body.get("fieldErrors").is_none());
    }
}
