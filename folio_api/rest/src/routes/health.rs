use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use folio_core_health_contracts::{HealthService, HealthStatus};
use serde::Serialize;

pub fn router(service: Arc<impl HealthService>) -> Router<()> {
    Router::new()
        .route("/health", routing::get(health))
        .with_state(service)
}

#[derive(Serialize)]
struct HealthResponse {
    http: bool,
    database: bool,
    email: bool,
}

async fn health(service: State<Arc<impl HealthService>>) -> Response {
    let HealthStatus { database, email } = service.get_status().await;

    let status = if database && email {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };

    let response = HealthResponse {
        http: true,
        database,
        email,
    };

    (status, Json(response)).into_response()
}

#[cfg(test)]
mod tests {
    use axum::{body::Body, http::Request};
    use folio_core_health_contracts::MockHealthService;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::{super::testing::send, *};

    #[tokio::test]
    async fn healthy() {
        // Arrange
        let service = MockHealthService::new().with_get_status(HealthStatus {
            database: true,
            email: true,
        });

        // Act
        let (status, body) = send(
            router(Arc::new(service)),
            Request::get("/health").body(Body::empty()).unwrap(),
        )
        .await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"http": true, "database": true, "email": true}));
    }

    #[tokio::test]
    async fn database_down() {
        // Arrange
        let service = MockHealthService::new().with_get_status(HealthStatus {
            database: false,
            email: true,
        });

        // Act
        let (status, body) = send(
            router(Arc::new(service)),
            Request::get("/health").body(Body::empty()).unwrap(),
        )
        .await;

        // Assert
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"http": true, "database": false, "email": true}));
    }
}
