/// Shared application state
use sqlx::SqlitePool;

/// Application state shared across all handlers
///
/// The pool is the only shared resource; each handler borrows it for the
/// duration of a request.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}
