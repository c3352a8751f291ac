//! Application state handed to the axum router.

use sea_orm::DatabaseConnection;

/// State shared by every request handler.
///
/// The database connection pool is the only shared resource; each handler borrows it for
/// the repositories it needs.
#[derive(Clone)]
pub struct AppState {
    /// Connection pool to the relational store
    pub db: DatabaseConnection,
}

impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
