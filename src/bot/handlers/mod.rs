use crate::bot::interactions::{create_followup, create_message};
use crate::bot::{inbound_from, Data, Error};
use poise::serenity_prelude as serenity;

pub async fn event_handler(
    ctx: &serenity::Context,
    event: &serenity::FullEvent,
    _framework: poise::FrameworkContext<'_, Data, Error>,
    data: &Data,
) -> Result<(), Error> {
    match event {
        serenity::FullEvent::Ready { data_about_bot } => {
            tracing::info!("Bot logged in as {}", data_about_bot.user.name);
        }
        serenity::FullEvent::Message { new_message } => {
            if let Err(e) = handle_message(ctx, new_message, data).await {
                tracing::error!("Error handling message: {:?}", e);
            }
        }
        serenity::FullEvent::InteractionCreate { interaction } => {
            if let serenity::Interaction::Component(component_interaction) = interaction {
                if let Err(e) = handle_button(ctx, component_interaction, data).await {
                    tracing::error!("Error handling component interaction: {:?}", e);
                }
            }
        }
        _ => {}
    }
    Ok(())
}

/// Plain text is only taken from people in direct messages; guild channels
/// use buttons and slash commands.
fn accepts_text(from_bot: bool, in_guild: bool) -> bool {
    !from_bot && !in_guild
}

async fn handle_message(
    ctx: &serenity::Context,
    message: &serenity::Message,
    data: &Data,
) -> Result<(), Error> {
    if !accepts_text(message.author.bot, message.guild_id.is_some()) {
        return Ok(());
    }

    let inbound = inbound_from(&message.author, message.content.clone());
    tracing::info!(
        "Message from {} ({}): {}",
        inbound.display_name,
        inbound.conversation_id,
        inbound.text
    );

    let replies = data.dispatcher.dispatch(&inbound).await?;
    for reply in &replies {
        if let Err(e) = message
            .channel_id
            .send_message(&ctx.http, create_message(reply))
            .await
        {
            tracing::error!("Failed to send reply to {}: {:?}", inbound.conversation_id, e);
        }
    }

    Ok(())
}

async fn handle_button(
    ctx: &serenity::Context,
    interaction: &serenity::ComponentInteraction,
    data: &Data,
) -> Result<(), Error> {
    let inbound = inbound_from(&interaction.user, interaction.data.custom_id.clone());
    tracing::info!(
        "Button from {} ({}): {}",
        inbound.display_name,
        inbound.conversation_id,
        inbound.text
    );

    // The sheet append may outlive Discord's three second response window.
    interaction.defer(&ctx.http).await?;

    let replies = data.dispatcher.dispatch(&inbound).await?;
    for reply in &replies {
        if let Err(e) = interaction.create_followup(&ctx.http, create_followup(reply)).await {
            tracing::error!("Failed to send reply to {}: {:?}", inbound.conversation_id, e);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_direct_messages_from_people_are_read() {
        assert!(accepts_text(false, false));
        assert!(!accepts_text(false, true));
        assert!(!accepts_text(true, false));
        assert!(!accepts_text(true, true));
    }
}
