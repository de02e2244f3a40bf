use anyhow::Result;
use sqlx::SqlitePool;
use tracing::info;

pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    info!("Running database migrations...");

    create_user_sessions_table(pool).await?;

    info!("Database migrations completed successfully");
    Ok(())
}

async fn create_user_sessions_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS user_sessions (
            conversation_id INTEGER PRIMARY KEY,
            role TEXT CHECK (role IN ('barber', 'administrator')),
            location TEXT CHECK (location IN ('center', 'north', 'south', 'east')),
            stage TEXT NOT NULL DEFAULT 'none',
            updated_at DATETIME DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn migrations_are_rerunnable() {
        let pool = crate::database::create_connection("sqlite::memory:").await.unwrap();
        run_migrations(&pool).await.unwrap();
        run_migrations(&pool).await.unwrap();
    }
}
