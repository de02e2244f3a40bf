use crate::conversation::session::{ConversationId, UserSession};
use crate::store::SessionStore;
use anyhow::Result;
use async_trait::async_trait;
use dashmap::DashMap;

/// Process-resident sessions, lost on restart.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    sessions: DashMap<ConversationId, UserSession>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn get(&self, id: ConversationId) -> Result<UserSession> {
        Ok(self.sessions.get(&id).map(|s| *s).unwrap_or_default())
    }

    async fn put(&self, id: ConversationId, session: UserSession) -> Result<()> {
        self.sessions.insert(id, session);
        Ok(())
    }
}
