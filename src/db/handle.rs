//! Lazily-initialized MongoDB connection handle.
//!
//! The handle is process-wide shared state owned by `AppState`: the first
//! request to need the database establishes the connection, every later
//! request reuses it. A failed attempt leaves the cell empty so the next
//! request retries.

use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};
use std::time::Duration;
use tokio::sync::OnceCell;

use crate::config::DatabaseConfig;
use crate::error::{AppError, AppResult, DatabaseErrorConverter};

/// Process-lifetime database handle with idempotent lazy connection.
///
/// `database()` establishes a connection if none is active and returns the
/// existing one otherwise. Concurrent first calls are serialized by the
/// `OnceCell`, so the connect handshake runs at most once at a time.
pub struct DbHandle {
    config: DatabaseConfig,
    database: OnceCell<Database>,
}

impl DbHandle {
    /// Creates a new unconnected handle from database configuration.
    ///
    /// No I/O happens here; the connection is established on first use.
    pub fn new(config: DatabaseConfig) -> Self {
        Self {
            config,
            database: OnceCell::new(),
        }
    }

    /// Returns the shared database, connecting first if necessary.
    ///
    /// # Errors
    /// `AppError::Connection` if the connection string is malformed or the
    /// server does not respond within the configured timeout.
    pub async fn database(&self) -> AppResult<&Database> {
        self.database.get_or_try_init(|| self.connect()).await
    }

    /// Readiness check used by handlers that render pages without a query.
    pub async fn ensure_connected(&self) -> AppResult<()> {
        self.database().await.map(|_| ())
    }

    async fn connect(&self) -> AppResult<Database> {
        let mut options = ClientOptions::parse(&self.config.url)
            .await
            .map_err(|e| AppError::Connection {
                context: "parse connection string".to_string(),
                source: anyhow::Error::from(e),
            })?;

        let timeout = Duration::from_millis(self.config.connect_timeout_ms);
        options.server_selection_timeout = Some(timeout);
        options.connect_timeout = Some(timeout);
        options.app_name = Some("userhub".to_string());

        let client = Client::with_options(options).map_err(|e| AppError::Connection {
            context: "build client".to_string(),
            source: anyhow::Error::from(e),
        })?;

        let database = client
            .default_database()
            .unwrap_or_else(|| client.database(&self.config.name));

        // The client connects lazily; ping so a dead server fails this
        // request instead of the first query
        database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| DatabaseErrorConverter::convert_mongo_error(e, "connect"))?;

        tracing::info!(database = %database.name(), "MongoDB connected");

        Ok(database)
    }
}
