//! Informational and health endpoints

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

/// Root endpoint body: service identity and endpoint listing
#[derive(Serialize)]
pub struct ServiceInfo {
    pub message: &'static str,
    pub status: &'static str,
    pub endpoints: EndpointListing,
}

#[derive(Serialize)]
pub struct EndpointListing {
    pub evaluate: &'static str,
    pub health: &'static str,
}

/// Health check body
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
}

/// GET / - informational only
pub async fn home() -> impl IntoResponse {
    Json(ServiceInfo {
        message: "UPSC Essay Rating API",
        status: "running",
        endpoints: EndpointListing {
            evaluate: "/evaluate (POST)",
            health: "/health (GET)",
        },
    })
}

/// GET /health - liveness check
pub async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy",
            message: "UPSC Essay Rating API is running",
        }),
    )
}
