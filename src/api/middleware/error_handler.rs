//! Centralized error handling for HTTP responses.
//!
//! Implements IntoResponse for AppError so every handler error funnels
//! through one conversion: full detail is logged server-side, the client
//! gets a rendered error page with an appropriate status code, and message
//! text is redacted in production.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::api::views;
use crate::config::Environment;
use crate::error::AppError;

impl IntoResponse for AppError {
    /// Converts an AppError into an HTML error response.
    ///
    /// # Status Code Mapping
    /// - NotFound → 404 NOT_FOUND
    /// - Validation → 400 BAD_REQUEST (defensive path; the controller
    ///   normally recovers validation inline with a re-rendered form)
    /// - Connection → 500 INTERNAL_SERVER_ERROR
    /// - Query → 500 INTERNAL_SERVER_ERROR
    /// - Configuration → 500 INTERNAL_SERVER_ERROR
    /// - Internal → 500 INTERNAL_SERVER_ERROR
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::Connection { .. }
            | AppError::Query { .. }
            | AppError::Configuration { .. }
            | AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Full detail stays server-side
        if status.is_server_error() {
            tracing::error!(error = %self, detail = ?self, "Request failed");
        } else {
            tracing::warn!(error = %self, "Request rejected");
        }

        let message = client_message(&self, Environment::from_env());
        (status, Html(views::error_page(&message))).into_response()
    }
}

/// Chooses the message shown on the rendered page.
///
/// Production deployments get a generic line per error category; other
/// environments see the error's own description.
fn client_message(error: &AppError, environment: Environment) -> String {
    if !environment.is_production() {
        return error.to_string();
    }
    match error {
        AppError::NotFound { entity, .. } => format!("The requested {} was not found", entity),
        AppError::Validation { field, .. } => format!("Invalid value for {}", field),
        AppError::Connection { .. } => "The service is temporarily unavailable".to_string(),
        AppError::Query { .. } | AppError::Configuration { .. } | AppError::Internal { .. } => {
            "An unexpected error occurred".to_string()
        }
    }
}
