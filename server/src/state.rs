use sqlx::SqlitePool;

use crate::config::Config;
use crate::scanner::SharedScanner;

/// Shared application state
pub struct AppState {
    pub db: SqlitePool,
    pub config: Config,
    /// Absent when the service runs without a reader attached.
    pub scanner: Option<SharedScanner>,
}
