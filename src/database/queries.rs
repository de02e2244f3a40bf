use crate::conversation::session::{ConversationId, UserSession};
use crate::database::models::SessionRow;
use anyhow::Result;
use sqlx::{Row, SqlitePool};

// Sqlite stores integers as i64; Discord ids fit in 63 bits.
fn key(id: ConversationId) -> i64 {
    id.0 as i64
}

pub async fn get_session(pool: &SqlitePool, id: ConversationId) -> Result<Option<SessionRow>> {
    let row = sqlx::query(
        "SELECT conversation_id, role, location, stage, updated_at
         FROM user_sessions WHERE conversation_id = ?"
    )
    .bind(key(id))
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|row| SessionRow {
        conversation_id: row.get("conversation_id"),
        role: row.get("role"),
        location: row.get("location"),
        stage: row.get("stage"),
        updated_at: row.get("updated_at"),
    }))
}

pub async fn upsert_session(
    pool: &SqlitePool,
    id: ConversationId,
    session: &UserSession,
) -> Result<()> {
    sqlx::query(
        "INSERT INTO user_sessions (conversation_id, role, location, stage, updated_at)
         VALUES (?, ?, ?, ?, CURRENT_TIMESTAMP)
         ON CONFLICT(conversation_id) DO UPDATE SET
             role = excluded.role,
             location = excluded.location,
             stage = excluded.stage,
             updated_at = CURRENT_TIMESTAMP"
    )
    .bind(key(id))
    .bind(session.role.map(|r| r.as_str()))
    .bind(session.location.map(|l| l.as_str()))
    .bind(session.stage.as_str())
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn delete_session(pool: &SqlitePool, id: ConversationId) -> Result<()> {
    sqlx::query("DELETE FROM user_sessions WHERE conversation_id = ?")
        .bind(key(id))
        .execute(pool)
        .await?;

    Ok(())
}
