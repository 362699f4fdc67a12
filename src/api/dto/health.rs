//! Health check DTOs.

use serde::Serialize;

/// Health check response payload.
///
/// Constant per process: reports the service is up without touching any
/// dependency.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status, always "ok" while the process serves requests
    pub status: &'static str,
    /// Application version
    pub version: String,
    /// Timestamp of the health check (ISO 8601 format)
    pub timestamp: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok",
            version: crate::pkg_version().to_string(),
            timestamp: jiff::Timestamp::now().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response_serializes_ok_status() {
        let value = serde_json::to_value(HealthResponse::ok()).unwrap();
        assert_eq!(value["status"], "ok");
        assert!(value["version"].is_string());
        assert!(value["timestamp"].is_string());
    }
}
