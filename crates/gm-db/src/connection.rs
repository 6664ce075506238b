use crate::Result as DbErrorResult;

use std::path::Path;
use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Open the application pool against a database file.
///
/// Migrations are not run here; callers run [`crate::MIGRATOR`] once the
/// pool is up.
pub async fn connect(path: &Path) -> DbErrorResult<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(path)
                .create_if_missing(true)
                .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
                .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
                .busy_timeout(Duration::from_secs(5))
                .foreign_keys(true),
        )
        .await?;

    Ok(pool)
}
