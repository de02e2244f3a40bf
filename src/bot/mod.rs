pub mod commands;
pub mod handlers;
pub mod interactions;

use crate::config::Config;
use crate::conversation::session::ConversationId;
use crate::dispatch::{Dispatcher, InboundMessage};
use anyhow::Result;
use poise::serenity_prelude as serenity;
use std::sync::Arc;

pub type Error = Box<dyn std::error::Error + Send + Sync>;
pub type Context<'a> = poise::Context<'a, Data, Error>;

#[derive(Clone)]
pub struct Data {
    pub dispatcher: Arc<Dispatcher>,
}

/// Name written to the sheet: display name if set, account name otherwise.
pub fn display_name(user: &serenity::User) -> String {
    user.global_name
        .as_deref()
        .unwrap_or(&user.name)
        .trim()
        .to_string()
}

pub fn inbound_from(user: &serenity::User, text: impl Into<String>) -> InboundMessage {
    InboundMessage {
        conversation_id: ConversationId(user.id.get()),
        display_name: display_name(user),
        text: text.into(),
    }
}

/// Direct-message content is delivered without the privileged intent.
fn gateway_intents() -> serenity::GatewayIntents {
    serenity::GatewayIntents::non_privileged()
}

pub async fn create_bot(config: &Config, dispatcher: Arc<Dispatcher>) -> Result<serenity::Client> {
    let data = Data { dispatcher };

    let intents = gateway_intents();

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: vec![
                commands::navigation::start(),
                commands::navigation::menu(),
                commands::navigation::status(),
            ],
            event_handler: |ctx, event, framework, data| {
                Box::pin(handlers::event_handler(ctx, event, framework, data))
            },
            ..Default::default()
        })
        .setup(|ctx, _ready, framework| {
            Box::pin(async move {
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                Ok(data)
            })
        })
        .build();

    let client = serenity::ClientBuilder::new(&config.discord_token, intents)
        .framework(framework)
        .await?;

    Ok(client)
}
