use gm_core::BusinessId;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    sqlx::query("PRAGMA foreign_keys = ON")
        .execute(&pool)
        .await
        .expect("Failed to enable foreign keys");

    gm_db::MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Inserts a business row and returns its id
pub async fn create_test_business(pool: &SqlitePool, name: &str) -> BusinessId {
    let now = chrono::Utc::now().timestamp();

    let result = sqlx::query(
        "INSERT INTO businesses (name, status, created_at, updated_at) VALUES (?, 'ACTIVE', ?, ?)",
    )
    .bind(name)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await
    .expect("Failed to create test business");

    BusinessId::new(result.last_insert_rowid()).unwrap()
}
