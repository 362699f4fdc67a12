//! Health check endpoint handler.
//!
//! Used by monitoring and load balancers. The response is a fixed payload
//! with no database dependency: the check reports that the process is up
//! and serving, nothing more.

use axum::response::Json;

use crate::api::dto::HealthResponse;

/// GET /api/health - Liveness check.
///
/// # Responses
/// - `200 OK` - always, with `{"status":"ok", ...}`
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_check_reports_ok() {
        let Json(response) = health_check().await;
        assert_eq!(response.status, "ok");
    }
}
