//! API error type with automatic JSON error responses.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tracing::error;
use triage_application::SuggestError;
use triage_domain::DomainError;

const UPSTREAM_MESSAGE: &str = "Upstream completion service error";
const INTERNAL_MESSAGE: &str = "Internal server error";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// 400 with the message shown to the caller
    BadRequest(String),
    /// 502 with the upstream failure as `detail`
    Upstream(String),
    /// 500; the message is logged, never returned
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Upstream(_) => StatusCode::BAD_GATEWAY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            ApiError::BadRequest(message) => json!({ "error": message }),
            ApiError::Upstream(detail) => {
                error!("Upstream completion service error: {}", detail);
                json!({ "error": UPSTREAM_MESSAGE, "detail": detail })
            }
            ApiError::Internal(message) => {
                error!("Internal error while suggesting a category: {}", message);
                json!({ "error": INTERNAL_MESSAGE })
            }
        };
        (status, Json(body)).into_response()
    }
}

impl From<SuggestError> for ApiError {
    fn from(err: SuggestError) -> Self {
        match err {
            SuggestError::Validation(DomainError::InvalidTicket(message)) => {
                ApiError::BadRequest(message)
            }
            other if other.is_upstream() => ApiError::Upstream(other.to_string()),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use triage_application::TransportError;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_classification() {
        let validation =
            SuggestError::Validation(DomainError::InvalidTicket("Title and Description are required.".into()));
        assert_eq!(
            ApiError::from(validation),
            ApiError::BadRequest("Title and Description are required.".into())
        );

        for err in [
            SuggestError::Upstream {
                status: 401,
                body: "bad key".into(),
            },
            SuggestError::UpstreamUnavailable { attempts: 3 },
            SuggestError::Transport(TransportError::MissingCredential),
            SuggestError::DeadlineExceeded,
        ] {
            assert_eq!(ApiError::from(err).status(), StatusCode::BAD_GATEWAY);
        }

        assert_eq!(
            ApiError::from(SuggestError::Cancelled).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_upstream_body_carries_detail() {
        let response = ApiError::from(SuggestError::UpstreamUnavailable { attempts: 3 }).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let body = body_json(response).await;
        assert_eq!(body["error"], UPSTREAM_MESSAGE);
        assert!(body["detail"].as_str().unwrap().contains("3 attempts"));
    }

    #[tokio::test]
    async fn test_internal_body_hides_detail() {
        let response = ApiError::Internal("secret stack trace".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body, json!({ "error": INTERNAL_MESSAGE }));
    }
}
