use crate::error::AppError;
use mongodb::error::{Error as MongoError, ErrorKind};

/// Utility for converting database errors to structured AppError variants.
///
/// The MongoDB driver reports every failure through one error type; this
/// converter splits that into the two transport categories the application
/// distinguishes: connection-level failures (server unreachable, handshake
/// or server selection timed out) and everything else, which is treated as
/// a query failure.
pub struct DatabaseErrorConverter;

impl DatabaseErrorConverter {
    /// Converts a MongoDB driver error to an appropriate AppError variant.
    ///
    /// # Arguments
    /// * `error` - The driver error to convert
    /// * `operation` - Description of the database operation that failed
    pub fn convert_mongo_error(error: MongoError, operation: &str) -> AppError {
        if Self::is_connection_error(&error) {
            AppError::Connection {
                context: operation.to_string(),
                source: anyhow::Error::from(error),
            }
        } else {
            AppError::Query {
                operation: operation.to_string(),
                source: anyhow::Error::from(error),
            }
        }
    }

    /// Returns true when the error means the store could not be reached at
    /// all, as opposed to rejecting a particular operation.
    fn is_connection_error(error: &MongoError) -> bool {
        matches!(
            *error.kind,
            ErrorKind::ServerSelection { .. }
                | ErrorKind::Io(_)
                | ErrorKind::DnsResolve { .. }
                | ErrorKind::Authentication { .. }
                | ErrorKind::ConnectionPoolCleared { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn io_error() -> MongoError {
        MongoError::from(io::Error::new(io::ErrorKind::ConnectionRefused, "refused"))
    }

    #[test]
    fn test_io_error_maps_to_connection() {
        let result = DatabaseErrorConverter::convert_mongo_error(io_error(), "connect");
        match result {
            AppError::Connection { context, .. } => assert_eq!(context, "connect"),
            other => panic!("Expected Connection error, got: {:?}", other),
        }
    }

    #[test]
    fn test_operation_context_is_preserved() {
        let error = MongoError::custom("malformed filter");
        let result = DatabaseErrorConverter::convert_mongo_error(error, "find user by id");
        match result {
            AppError::Query { operation, .. } => assert_eq!(operation, "find user by id"),
            other => panic!("Expected Query error, got: {:?}", other),
        }
    }
}
