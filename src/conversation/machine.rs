//! The per-user conversation state machine.
//!
//! `handle` is pure: it reads the current session and the inbound text and
//! returns the next session, the replies, and the attendance mark to record
//! (if any). Navigation labels are checked before the stage so that e.g.
//! "home menu" always works, whatever the bot is waiting for.

use crate::attendance::Action;
use crate::conversation::keyboard::{Prompt, Reply};
use crate::conversation::labels::{self, Intent};
use crate::conversation::session::{Location, Role, Stage, UserSession};
use crate::utils::format;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub session: UserSession,
    /// When `record` is set these replies are only sent after the row was
    /// appended, following the arrival/departure confirmation.
    pub replies: Vec<Reply>,
    pub record: Option<Action>,
}

impl Outcome {
    fn reply(session: UserSession, replies: Vec<Reply>) -> Self {
        Self {
            session,
            replies,
            record: None,
        }
    }
}

pub fn handle(current: &UserSession, text: &str) -> Outcome {
    let intent = Intent::parse(text);
    let mut session = *current;

    if intent.is_navigation() {
        return navigate(session, intent);
    }

    match session.stage {
        Stage::AwaitingRole => match intent {
            Intent::PickRole(role) => pick_role(session, role),
            _ => reject(session, Prompt::Role, "роль"),
        },
        Stage::AwaitingLocation => match intent {
            Intent::PickLocation(location) => pick_location(session, location),
            _ => reject(session, Prompt::Location, "адрес"),
        },
        Stage::AwaitingStatus => match intent {
            Intent::Mark(action) => {
                session.stage = Stage::None;
                Outcome {
                    session,
                    replies: vec![Prompt::MainMenu.reply()],
                    record: Some(action),
                }
            }
            _ => reject(session, Prompt::Status, "статус"),
        },
        Stage::None => match intent {
            Intent::Mark(action) => Outcome {
                session,
                replies: Vec::new(),
                record: Some(action),
            },
            _ if session.role.is_none() => {
                session.stage = Stage::AwaitingRole;
                Outcome::reply(session, vec![Prompt::Role.reply()])
            }
            _ => Outcome::reply(session, vec![Prompt::MainMenu.reply()]),
        },
    }
}

/// Anything unexpected re-asks the outstanding question.
fn reject(session: UserSession, prompt: Prompt, choice: &str) -> Outcome {
    Outcome::reply(
        session,
        vec![Reply::text(format::validation_message(choice)), prompt.reply()],
    )
}

fn navigate(mut session: UserSession, intent: Intent) -> Outcome {
    match intent {
        // Nothing but a role choice leads anywhere until a role is known.
        Intent::HomeMenu | Intent::ChangeLocation if session.role.is_none() => {
            session.stage = Stage::AwaitingRole;
            Outcome::reply(session, vec![Prompt::Role.reply()])
        }
        Intent::HomeMenu => {
            session.stage = Stage::None;
            Outcome::reply(session, vec![Prompt::MainMenu.reply()])
        }
        Intent::ChangeRole | Intent::Start => {
            session.reset();
            session.stage = Stage::AwaitingRole;
            Outcome::reply(session, vec![Prompt::Role.reply()])
        }
        Intent::ChangeLocation => {
            session.stage = Stage::AwaitingLocation;
            Outcome::reply(session, vec![Prompt::Location.reply()])
        }
        Intent::MyStatus => Outcome::reply(
            session,
            vec![Reply::with_keyboard(
                format::status_summary(&session),
                Prompt::MainMenu.keyboard(),
            )],
        ),
        _ => Outcome::reply(session, vec![Prompt::MainMenu.reply()]),
    }
}

fn pick_role(mut session: UserSession, role: Role) -> Outcome {
    session.role = Some(role);
    let confirmation = Reply::text(format::role_saved_message(labels::role_label(role)));

    let next = match role {
        Role::Barber => {
            session.stage = Stage::AwaitingLocation;
            Prompt::Location
        }
        Role::Administrator => {
            session.location = None;
            session.stage = Stage::AwaitingStatus;
            Prompt::Status
        }
    };

    Outcome::reply(session, vec![confirmation, next.reply()])
}

fn pick_location(mut session: UserSession, location: Location) -> Outcome {
    session.location = Some(location);
    session.stage = Stage::AwaitingStatus;
    let confirmation = Reply::text(format::location_saved_message(labels::location_label(
        location,
    )));
    Outcome::reply(session, vec![confirmation, Prompt::Status.reply()])
}
