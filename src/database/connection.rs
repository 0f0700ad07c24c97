use anyhow::{Context, Result};
use r2d2_sqlite::SqliteConnectionManager;
use std::time::Duration;

use crate::config::settings::DatabaseSettings;

pub type DbPool = r2d2::Pool<SqliteConnectionManager>;
pub type DbConn = r2d2::PooledConnection<SqliteConnectionManager>;

/// Opens a pool over the configured SQLite file. Every connection waits
/// up to `busy_timeout` for a competing writer before failing.
pub fn create_pool(settings: &DatabaseSettings) -> Result<DbPool> {
    let busy_timeout = settings.busy_timeout;
    let manager = SqliteConnectionManager::file(&settings.path)
        .with_init(move |conn| conn.busy_timeout(busy_timeout));

    r2d2::Pool::builder()
        .max_size(settings.pool_size)
        .build(manager)
        .with_context(|| format!("Failed to open player database at {}", settings.path))
}

pub fn get_connection(pool: &DbPool) -> Result<DbConn> {
    pool.get()
        .context("Failed to get player database connection")
}
