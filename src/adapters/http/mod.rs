//! HTTP gateway for the receipts API
//!
//! ## Endpoints
//!
//! - POST /receipts/process - Submit a receipt, returns its identifier
//! - GET /receipts/:id/points - Points awarded to a stored receipt

pub mod dto;
pub mod error;
pub mod routes;

use std::net::SocketAddr;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::{commands::DomainLogic, ports::database::DatabasePort};

pub use error::{ApiError, ApiResult};

/// Create the API router
pub fn create_router<D>(domain: DomainLogic<D>) -> Router
where
    D: DatabasePort + Send + Sync + 'static,
{
    Router::new()
        .route("/receipts/process", post(routes::process_receipt::<D>))
        .route("/receipts/:id/points", get(routes::get_points::<D>))
        .layer(TraceLayer::new_for_http())
        .with_state(domain)
}

/// Serve the API on `addr` until a shutdown signal is received
pub async fn run_server<D>(addr: SocketAddr, domain: DomainLogic<D>) -> std::io::Result<()>
where
    D: DatabasePort + Send + Sync + 'static,
{
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("receipts API listening on {}", listener.local_addr()?);

    axum::serve(listener, create_router(domain))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl-c: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!("failed to listen for SIGTERM: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutting down");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        adapters::database::MemoryDatabase,
        domain::{Item, Receipt},
        ports::database::{Error as DatabaseError, MockDatabasePort},
    };
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use rstest::*;
    use serde_json::{json, Value};
    use speculoos::prelude::*;
    use tower::ServiceExt;
    use uuid::Uuid;

    #[fixture]
    fn database() -> MemoryDatabase {
        MemoryDatabase::default()
    }

    async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn post_json(body: impl Into<Body>) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/receipts/process")
            .header(header::CONTENT_TYPE, "application/json")
            .body(body.into())
            .unwrap()
    }

    fn get_points(id: &str) -> Request<Body> {
        Request::builder()
            .uri(format!("/receipts/{id}/points"))
            .body(Body::empty())
            .unwrap()
    }

    #[rstest]
    #[tokio::test]
    async fn test_process_receipt(database: MemoryDatabase) {
        let router = create_router(DomainLogic::new(database.clone()));
        let body = json!({
            "retailer": "M&M Corner Market",
            "purchaseDate": "2022-03-20",
            "purchaseTime": "14:33",
            "items": [
                { "shortDescription": "Gatorade", "price": "2.25" },
                { "shortDescription": "Gatorade", "price": "2.25" }
            ],
            "total": "9.00"
        });

        let (status, body) = send(router, post_json(body.to_string())).await;

        assert_that!(status).is_equal_to(StatusCode::OK);
        let receipt_id = body["id"].as_str().and_then(|id| Uuid::parse_str(id).ok());
        assert_that!(receipt_id).is_some();
        assert_that!(database.get_receipt(receipt_id.unwrap()).await).is_ok();
    }

    #[rstest]
    #[case::syntax("{\"retailer\": ")]
    #[case::missing_field("{\"retailer\": \"Target\"}")]
    #[case::wrong_type(
        "{\"retailer\": \"Target\", \"purchaseDate\": \"2022-01-01\", \"purchaseTime\": \"13:01\", \"items\": [], \"total\": 35.35}"
    )]
    #[case::not_an_object("[]")]
    #[tokio::test]
    async fn test_process_receipt_malformed(database: MemoryDatabase, #[case] body: &'static str) {
        let router = create_router(DomainLogic::new(database));

        let (status, body) = send(router, post_json(body)).await;

        assert_that!(status).is_equal_to(StatusCode::BAD_REQUEST);
        let message = body["message"].as_str().unwrap_or_default();
        assert_that!(message.starts_with("Invalid JSON")).is_true();
    }

    #[rstest]
    #[tokio::test]
    async fn test_process_receipt_without_content_type(database: MemoryDatabase) {
        let router = create_router(DomainLogic::new(database));
        let request = Request::builder()
            .method("POST")
            .uri("/receipts/process")
            .body(Body::from("{}"))
            .unwrap();

        let (status, _) = send(router, request).await;

        assert_that!(status).is_equal_to(StatusCode::BAD_REQUEST);
    }

    #[rstest]
    #[tokio::test]
    async fn test_get_points(database: MemoryDatabase) {
        let receipt_id = database
            .put_receipt(Receipt::new(
                "Target",
                "2022-01-01",
                "13:01",
                vec![
                    Item::new("Mountain Dew 12PK", "6.49"),
                    Item::new("Emils Cheese Pizza", "12.25"),
                    Item::new("Knorr Creamy Chicken", "1.26"),
                    Item::new("Doritos Nacho Cheese", "3.35"),
                    Item::new("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
                ],
                "35.35",
            ))
            .await
            .unwrap();
        let router = create_router(DomainLogic::new(database));

        let (status, body) = send(router, get_points(&receipt_id.to_string())).await;

        assert_that!(status).is_equal_to(StatusCode::OK);
        assert_that!(body).is_equal_to(json!({ "points": 28 }));
    }

    #[rstest]
    #[case::unknown_uuid("7fb1377b-b223-49d9-a31a-5a02701dd310")]
    #[case::not_a_uuid("not-a-receipt")]
    #[tokio::test]
    async fn test_get_points_not_found(database: MemoryDatabase, #[case] id: &str) {
        let router = create_router(DomainLogic::new(database));

        let (status, body) = send(router, get_points(id)).await;

        assert_that!(status).is_equal_to(StatusCode::NOT_FOUND);
        assert_that!(body).is_equal_to(json!({
            "message": format!("Receipt with ID {id} not found")
        }));
    }

    #[tokio::test]
    async fn test_get_points_adapter_error() {
        let mut database = MockDatabasePort::new();
        database
            .expect_get_receipt()
            .times(1)
            .returning(|_| Err(DatabaseError::Adapter("disk on fire".to_string().into())));
        let router = create_router(DomainLogic::new(database));

        let (status, body) = send(router, get_points(&Uuid::new_v4().to_string())).await;

        assert_that!(status).is_equal_to(StatusCode::INTERNAL_SERVER_ERROR);
        assert_that!(body["message"].as_str()).is_some();
    }
}
