use thiserror::Error;

/// Application-wide error type that represents all possible errors in the system.
///
/// The variants mirror the failure taxonomy of the application: connection
/// failures are recoverable per-request (the next request retries the
/// connect), validation failures are recovered inline by the controller,
/// and everything else funnels into the centralized response conversion.
#[derive(Error, Debug)]
pub enum AppError {
    /// Resource not found error with entity, field, and value information
    #[error("Resource not found: {entity} with {field}={value}")]
    NotFound {
        entity: String,
        field: String,
        value: String,
    },

    /// Validation error with field-specific details
    #[error("Validation failed for {field}: {reason}")]
    Validation { field: String, reason: String },

    /// Database connection error: the store is unreachable, the connection
    /// string is malformed, or server selection timed out
    #[error("Database connection failed: {context}")]
    Connection {
        context: String,
        #[source]
        source: anyhow::Error,
    },

    /// Any other transport or query failure with operation context
    #[error("Database query failed: {operation}")]
    Query {
        operation: String,
        #[source]
        source: anyhow::Error,
    },

    /// Configuration error with key information
    #[error("Configuration error: {key}")]
    Configuration {
        key: String,
        #[source]
        source: anyhow::Error,
    },

    /// Internal error for unexpected failures
    #[error("Internal error")]
    Internal {
        #[source]
        source: anyhow::Error,
    },
}

impl AppError {
    /// Creates a NotFound error for a user looked up by id.
    pub fn user_not_found(id: impl Into<String>) -> Self {
        AppError::NotFound {
            entity: "user".to_string(),
            field: "id".to_string(),
            value: id.into(),
        }
    }

    /// Creates a Validation error for a required field that was left empty.
    pub fn missing_field(field: impl Into<String>) -> Self {
        let field = field.into();
        let reason = format!("{} is required", field);
        AppError::Validation { field, reason }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        AppError::Internal { source: error }
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(error: mongodb::error::Error) -> Self {
        crate::error::DatabaseErrorConverter::convert_mongo_error(error, "database operation")
    }
}

impl From<crate::config::error::ConfigError> for AppError {
    fn from(error: crate::config::error::ConfigError) -> Self {
        AppError::Configuration {
            key: "configuration".to_string(),
            source: anyhow::Error::from(error),
        }
    }
}

/// Type alias for Result with AppError to simplify function signatures
pub type AppResult<T> = Result<T, AppError>;
