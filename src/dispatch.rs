//! Glue between the chat gateway and the conversation core: loads the
//! session, runs the state machine, records attendance and stores the result.

use crate::attendance::Recorder;
use crate::conversation::keyboard::{Prompt, Reply};
use crate::conversation::machine;
use crate::conversation::session::{ConversationId, Stage};
use crate::store::SessionStore;
use crate::utils::format;
use anyhow::Result;
use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    pub conversation_id: ConversationId,
    pub display_name: String,
    pub text: String,
}

pub struct Dispatcher {
    sessions: Arc<dyn SessionStore>,
    recorder: Recorder,
    // One lock per busy conversation keeps read-modify-write of its session
    // atomic. Entries are dropped again once no message for that id is in flight.
    locks: DashMap<ConversationId, Arc<Mutex<()>>>,
}

impl Dispatcher {
    pub fn new(sessions: Arc<dyn SessionStore>, recorder: Recorder) -> Self {
        Self {
            sessions,
            recorder,
            locks: DashMap::new(),
        }
    }

    pub fn recorder(&self) -> &Recorder {
        &self.recorder
    }

    pub async fn dispatch(&self, inbound: &InboundMessage) -> Result<Vec<Reply>> {
        let id = inbound.conversation_id;
        let lock = self.locks.entry(id).or_default().clone();
        let result = {
            let _guard = lock.lock().await;
            self.dispatch_locked(inbound).await
        };

        // Once only the map holds the lock, no message for this id is in flight.
        drop(lock);
        self.locks.remove_if(&id, |_, entry| Arc::strong_count(entry) == 1);
        result
    }

    async fn dispatch_locked(&self, inbound: &InboundMessage) -> Result<Vec<Reply>> {
        let id = inbound.conversation_id;
        let current = self.sessions.get(id).await?;
        let outcome = machine::handle(&current, &inbound.text);

        // A reset is just the default session, so `put` covers it.
        let Some(action) = outcome.record else {
            self.sessions.put(id, outcome.session).await?;
            return Ok(outcome.replies);
        };

        match self
            .recorder
            .record(&current, &inbound.display_name, action)
            .await
        {
            Ok(confirmation) => {
                self.sessions.put(id, outcome.session).await?;

                let mut replies = vec![Reply::with_keyboard(
                    format::attendance_confirmation(confirmation.action),
                    Prompt::MainMenu.keyboard(),
                )];
                replies.extend(outcome.replies);
                Ok(replies)
            }
            Err(e) => {
                tracing::error!(
                    "Failed to record {} for {} ({}): {}",
                    action.as_str(),
                    inbound.display_name,
                    id,
                    e
                );

                // Session is left untouched so the same button can be pressed again.
                let keyboard = match current.stage {
                    Stage::AwaitingStatus => Prompt::Status.keyboard(),
                    _ => Prompt::MainMenu.keyboard(),
                };
                Ok(vec![Reply::with_keyboard(format::attendance_failure(), keyboard)])
            }
        }
    }
}
