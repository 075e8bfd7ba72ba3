//! Store bootstrap: connection pool and breeds table DDL.

use crate::error::AppError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Open a pool against `database_url` (e.g. `sqlite:breeds.db`), creating the
/// database file if it does not exist.
pub async fn connect(database_url: &str) -> Result<SqlitePool, AppError> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;
    Ok(pool)
}

/// Create the breeds table if not exists. Idempotent; run at startup.
pub async fn ensure_breeds_table(pool: &SqlitePool) -> Result<(), AppError> {
    let ddl = r#"
        CREATE TABLE IF NOT EXISTS breeds (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            species TEXT NOT NULL,
            pet_size TEXT NOT NULL,
            name TEXT NOT NULL,
            average_male_adult_weight INTEGER NOT NULL,
            average_female_adult_weight INTEGER NOT NULL
        )
    "#;
    sqlx::query(ddl).execute(pool).await?;
    Ok(())
}
