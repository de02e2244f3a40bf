pub mod migrations;
pub mod models;
pub mod queries;
pub mod session_store;

pub use session_store::SqliteSessionStore;

use anyhow::Result;
use sqlx::{SqlitePool, sqlite::{SqliteConnectOptions, SqlitePoolOptions}};
use std::str::FromStr;

pub async fn create_connection(database_url: &str) -> Result<SqlitePool> {
    let connect_options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    // An in-memory database exists per connection, so it must not be pooled.
    let max_connections = if database_url.contains(":memory:") { 1 } else { 5 };

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(connect_options)
        .await?;

    // Run migrations
    migrations::run_migrations(&pool).await?;

    Ok(pool)
}
