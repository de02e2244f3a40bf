use crate::conversation::session::{ConversationId, UserSession};
use crate::database::queries;
use crate::store::SessionStore;
use anyhow::Result;
use async_trait::async_trait;
use sqlx::SqlitePool;

/// Sessions kept in SQLite so a restart does not forget roles and locations.
pub struct SqliteSessionStore {
    pool: SqlitePool,
}

impl SqliteSessionStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionStore for SqliteSessionStore {
    async fn get(&self, id: ConversationId) -> Result<UserSession> {
        match queries::get_session(&self.pool, id).await? {
            Some(row) => {
                tracing::debug!(
                    "Loaded session {} (updated {})",
                    row.conversation_id,
                    row.updated_at
                );
                row.into_session()
            }
            None => Ok(UserSession::default()),
        }
    }

    async fn put(&self, id: ConversationId, session: UserSession) -> Result<()> {
        queries::upsert_session(&self.pool, id, &session).await
    }

    async fn reset(&self, id: ConversationId) -> Result<()> {
        queries::delete_session(&self.pool, id).await
    }
}
