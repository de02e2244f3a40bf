use crate::bot::interactions::create_reply;
use crate::bot::{inbound_from, Context, Error};
use crate::conversation::labels;

/// Начать заново: выбрать роль
#[poise::command(slash_command)]
pub async fn start(ctx: Context<'_>) -> Result<(), Error> {
    press(ctx, labels::START_COMMAND).await
}

/// Главное меню
#[poise::command(slash_command)]
pub async fn menu(ctx: Context<'_>) -> Result<(), Error> {
    press(ctx, labels::HOME_MENU).await
}

/// Показать вашу роль и адрес
#[poise::command(slash_command)]
pub async fn status(ctx: Context<'_>) -> Result<(), Error> {
    press(ctx, labels::MY_STATUS).await
}

/// Feeds a slash command into the conversation as if its label was pressed.
async fn press(ctx: Context<'_>, label: &str) -> Result<(), Error> {
    let inbound = inbound_from(ctx.author(), label);
    tracing::info!(
        "Command from {} ({}): {}",
        inbound.display_name,
        inbound.conversation_id,
        label
    );

    ctx.defer().await?;
    let replies = ctx.data().dispatcher.dispatch(&inbound).await?;
    for reply in &replies {
        ctx.send(create_reply(reply)).await?;
    }

    Ok(())
}
