pub mod memory;

use crate::conversation::session::{ConversationId, UserSession};
use anyhow::Result;
use async_trait::async_trait;

pub use memory::MemorySessionStore;

/// Where per-user sessions live between messages.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Returns the stored session, or a fresh one for an unknown id.
    async fn get(&self, id: ConversationId) -> Result<UserSession>;

    async fn put(&self, id: ConversationId, session: UserSession) -> Result<()>;

    async fn reset(&self, id: ConversationId) -> Result<()> {
        self.put(id, UserSession::default()).await
    }
}
