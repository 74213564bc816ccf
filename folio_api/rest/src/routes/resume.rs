use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use folio_core_resume_contracts::{ResumeService, ResumeUploadError, ResumeUrl};
use serde::Serialize;

use super::{error, internal_server_error};

// Generous transport-level cap; the exact configured ceiling is enforced by
// the resume service.
const BODY_LIMIT: usize = 8 * 1024 * 1024;

pub fn router(service: Arc<impl ResumeService>) -> Router<()> {
    Router::new()
        .route(
            "/api/resume",
            routing::post(upload).layer(DefaultBodyLimit::max(BODY_LIMIT)),
        )
        .with_state(service)
}

#[derive(Debug, Serialize)]
struct UploadResponse {
    message: &'static str,
    url: ResumeUrl,
}

async fn upload(
    service: State<Arc<impl ResumeService>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let api_key = headers
        .get("x-api-key")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    match service.upload(api_key, body.to_vec()).await {
        Ok(url) => Json(UploadResponse {
            message: "Resume uploaded successfully",
            url,
        })
        .into_response(),
        Err(ResumeUploadError::Unauthorized) => {
            error(StatusCode::UNAUTHORIZED, "Unauthorized - Invalid API key")
        }
        Err(ResumeUploadError::TooLarge) => {
            error(StatusCode::BAD_REQUEST, "File size exceeds the upload limit")
        }
        Err(ResumeUploadError::InvalidType) => {
            error(StatusCode::BAD_REQUEST, "Only PDF files are allowed")
        }
        Err(ResumeUploadError::Other(err)) => internal_server_error(err),
    }
}

#[cfg(test)]
mod tests {
    use axum::{body::Body, http::Request};
    use folio_core_resume_contracts::MockResumeService;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::{super::testing::send, *};

    fn upload_request(api_key: &str, body: &'static [u8]) -> Request<Body> {
        Request::post("/api/resume")
            .header("x-api-key", api_key)
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn ok() {
        // Arrange
        let service = MockResumeService::new().with_upload(
            "secret".into(),
            b"%PDF-1.7".to_vec(),
            Ok(ResumeUrl::new("/resume/resume_dev_latest.pdf")),
        );

        // Act
        let (status, body) = send(
            router(Arc::new(service)),
            upload_request("secret", b"%PDF-1.7"),
        )
        .await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "message": "Resume uploaded successfully",
                "url": "/resume/resume_dev_latest.pdf"
            })
        );
    }

    #[tokio::test]
    async fn unauthorized() {
        // Arrange
        let service = MockResumeService::new().with_upload(
            "wrong".into(),
            b"%PDF-1.7".to_vec(),
            Err(ResumeUploadError::Unauthorized),
        );

        // Act
        let (status, body) = send(
            router(Arc::new(service)),
            upload_request("wrong", b"%PDF-1.7"),
        )
        .await;

        // Assert
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, json!({"error": "Unauthorized - Invalid API key"}));
    }

    #[tokio::test]
    async fn not_a_pdf() {
        // Arrange
        let service = MockResumeService::new().with_upload(
            "secret".into(),
            b"GIF89a".to_vec(),
            Err(ResumeUploadError::InvalidType),
        );

        // Act
        let (status, body) = send(
            router(Arc::new(service)),
            upload_request("secret", b"GIF89a"),
        )
        .await;

        // Assert
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Only PDF files are allowed"}));
    }
}
