//! Rendering of replies as Discord messages with button rows. Each button's
//! custom id is its label, so a press comes back as the same text a typed
//! message would carry.

use crate::conversation::keyboard::{Keyboard, Reply};
use crate::conversation::labels;
use poise::serenity_prelude as serenity;

fn button_style(label: &str) -> serenity::ButtonStyle {
    match label {
        labels::ARRIVED => serenity::ButtonStyle::Success,
        labels::LEFT => serenity::ButtonStyle::Danger,
        labels::HOME_MENU | labels::CHANGE_ROLE | labels::CHANGE_LOCATION | labels::MY_STATUS => {
            serenity::ButtonStyle::Secondary
        }
        _ => serenity::ButtonStyle::Primary,
    }
}

pub fn create_components(keyboard: &Keyboard) -> Vec<serenity::CreateActionRow> {
    keyboard
        .rows
        .iter()
        .map(|row| {
            serenity::CreateActionRow::Buttons(
                row.iter()
                    .map(|label| {
                        serenity::CreateButton::new(*label)
                            .label(*label)
                            .style(button_style(label))
                    })
                    .collect(),
            )
        })
        .collect()
}

pub fn create_reply(reply: &Reply) -> poise::CreateReply {
    let builder = poise::CreateReply::default().content(reply.text.clone());
    match &reply.keyboard {
        Some(keyboard) => builder.components(create_components(keyboard)),
        None => builder,
    }
}

pub fn create_message(reply: &Reply) -> serenity::CreateMessage {
    let builder = serenity::CreateMessage::new().content(reply.text.clone());
    match &reply.keyboard {
        Some(keyboard) => builder.components(create_components(keyboard)),
        None => builder,
    }
}

pub fn create_followup(reply: &Reply) -> serenity::CreateInteractionResponseFollowup {
    let builder = serenity::CreateInteractionResponseFollowup::new().content(reply.text.clone());
    match &reply.keyboard {
        Some(keyboard) => builder.components(create_components(keyboard)),
        None => builder,
    }
}
