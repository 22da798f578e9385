//! Application state

use shared::error::AppError;
use sqlx::SqlitePool;

use crate::core::Config;
use crate::db::DbService;

/// Shared application state, cloned into every handler
#[derive(Clone)]
pub struct ServerState {
    /// SQLite connection pool
    pub pool: SqlitePool,
}

impl ServerState {
    /// Open the database and run migrations.
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db = DbService::new(&config.database_path).await?;
        Ok(Self { pool: db.pool })
    }
}
