use sqlx::SqlitePool;

/// Shared per-request handler state. Handlers are stateless; the pool is
/// the only collaborator, and every query checks a connection out and
/// returns it on each exit path.
#[derive(Clone)]
pub struct AppState {
    pool: SqlitePool,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn db_pool(&self) -> &SqlitePool {
        &self.pool
    }
}
