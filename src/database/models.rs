use crate::conversation::session::UserSession;
use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct SessionRow {
    pub conversation_id: i64,
    pub role: Option<String>,
    pub location: Option<String>,
    pub stage: String,
    pub updated_at: DateTime<Utc>,
}

impl SessionRow {
    pub fn into_session(self) -> Result<UserSession> {
        Ok(UserSession {
            role: self.role.as_deref().map(str::parse).transpose()?,
            location: self.location.as_deref().map(str::parse).transpose()?,
            stage: self.stage.parse()?,
        })
    }
}
