use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use folio_core_contact_contracts::{ContactService, ContactSubmitError, ContactSubmitRequest};

use super::{error, internal_server_error};
use crate::models::{
    contact::{ApiContactRequest, ApiContactRequestError},
    ApiMessage,
};

pub fn router(service: Arc<impl ContactService>) -> Router<()> {
    Router::new()
        .route("/api/contact", routing::post(submit))
        .with_state(service)
}

async fn submit(
    service: State<Arc<impl ContactService>>,
    Json(request): Json<ApiContactRequest>,
) -> Response {
    let request = match ContactSubmitRequest::try_from(request) {
        Ok(request) => request,
        Err(ApiContactRequestError::MissingField) => {
            return error(StatusCode::BAD_REQUEST, "Missing required fields");
        }
        Err(ApiContactRequestError::FieldTooLong) => {
            return error(StatusCode::BAD_REQUEST, "Field exceeds maximum length");
        }
        Err(ApiContactRequestError::InvalidEmail) => {
            return error(StatusCode::BAD_REQUEST, "Invalid email address");
        }
    };

    match service.submit(request).await {
        Ok(()) => Json(ApiMessage {
            message: "Message saved and email sent!".into(),
        })
        .into_response(),
        Err(ContactSubmitError::Persist(err)) => {
            tracing::error!("failed to persist contact submission: {err:#}");
            error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to save contact data",
            )
        }
        Err(ContactSubmitError::Dispatch) => error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to send notification email",
        ),
        Err(ContactSubmitError::Other(err)) => internal_server_error(err),
    }
}

#[cfg(test)]
mod tests {
    use folio_core_contact_contracts::MockContactService;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::{super::testing::post_json, *};

    fn payload() -> serde_json::Value {
        json!({"name": "Ada", "email": "ada@example.com", "message": "Hello"})
    }

    fn submit_request() -> ContactSubmitRequest {
        ContactSubmitRequest {
            name: "Ada".try_into().unwrap(),
            email: "ada@example.com".parse().unwrap(),
            message: "Hello".try_into().unwrap(),
        }
    }

    #[tokio::test]
    async fn ok() {
        // Arrange
        let service = MockContactService::new().with_submit(submit_request(), Ok(()));

        // Act
        let (status, body) = post_json(router(Arc::new(service)), "/api/contact", payload()).await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"message": "Message saved and email sent!"}));
    }

    #[tokio::test]
    async fn missing_field() {
        // Arrange
        // No expectations: the service must not be reached.
        let service = MockContactService::new();

        // Act
        let (status, body) = post_json(
            router(Arc::new(service)),
            "/api/contact",
            json!({"name": "Ada", "email": "ada@example.com", "message": ""}),
        )
        .await;

        // Assert
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Missing required fields"}));
    }

    #[tokio::test]
    async fn invalid_email() {
        // Arrange
        let service = MockContactService::new();

        // Act
        let (status, body) = post_json(
            router(Arc::new(service)),
            "/api/contact",
            json!({"name": "Ada", "email": "not an address", "message": "Hello"}),
        )
        .await;

        // Assert
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Invalid email address"}));
    }

    #[tokio::test]
    async fn persist_failure() {
        // Arrange
        let service = MockContactService::new().with_submit(
            submit_request(),
            Err(ContactSubmitError::Persist(anyhow::anyhow!(
                "connection reset"
            ))),
        );

        // Act
        let (status, body) = post_json(router(Arc::new(service)), "/api/contact", payload()).await;

        // Assert
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": "Failed to save contact data"}));
    }

    #[tokio::test]
    async fn dispatch_failure() {
        // Arrange
        let service =
            MockContactService::new().with_submit(submit_request(), Err(ContactSubmitError::Dispatch));

        // Act
        let (status, body) = post_json(router(Arc::new(service)), "/api/contact", payload()).await;

        // Assert
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": "Failed to send notification email"}));
    }
}
