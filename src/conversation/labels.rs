//! Mapping between the Russian button labels shown to staff and the intents
//! the state machine understands. Nothing else in the crate compares label
//! text.

use crate::attendance::Action;
use crate::conversation::session::{Location, Role};

pub const HOME_MENU: &str = "🏠 Главное меню";
pub const CHANGE_ROLE: &str = "🔄 Сменить роль";
pub const CHANGE_LOCATION: &str = "📍 Сменить адрес";
pub const MY_STATUS: &str = "ℹ️ Мой статус";
pub const START_COMMAND: &str = "/start";

pub const BARBER: &str = "Барбер";
pub const ADMINISTRATOR: &str = "Администратор";

pub const CENTER: &str = "Центр";
pub const NORTH: &str = "Север";
pub const SOUTH: &str = "Юг";
pub const EAST: &str = "Восток";

pub const ARRIVED: &str = "✅ На работе";
pub const LEFT: &str = "🏠 Ушёл";

/// Everything a piece of inbound text can mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    HomeMenu,
    ChangeRole,
    ChangeLocation,
    MyStatus,
    Start,
    PickRole(Role),
    PickLocation(Location),
    Mark(Action),
    Unrecognized,
}

impl Intent {
    /// Exact match only, no trimming.
    pub fn parse(text: &str) -> Intent {
        match text {
            HOME_MENU => Intent::HomeMenu,
            CHANGE_ROLE => Intent::ChangeRole,
            CHANGE_LOCATION => Intent::ChangeLocation,
            MY_STATUS => Intent::MyStatus,
            START_COMMAND => Intent::Start,
            BARBER => Intent::PickRole(Role::Barber),
            ADMINISTRATOR => Intent::PickRole(Role::Administrator),
            CENTER => Intent::PickLocation(Location::Center),
            NORTH => Intent::PickLocation(Location::North),
            SOUTH => Intent::PickLocation(Location::South),
            EAST => Intent::PickLocation(Location::East),
            ARRIVED => Intent::Mark(Action::Arrived),
            LEFT => Intent::Mark(Action::Left),
            _ => Intent::Unrecognized,
        }
    }

    /// Navigation intents are honoured in every stage.
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            Intent::HomeMenu
                | Intent::ChangeRole
                | Intent::ChangeLocation
                | Intent::MyStatus
                | Intent::Start
        )
    }
}

pub fn role_label(role: Role) -> &'static str {
    match role {
        Role::Barber => BARBER,
        Role::Administrator => ADMINISTRATOR,
    }
}

pub fn location_label(location: Location) -> &'static str {
    match location {
        Location::Center => CENTER,
        Location::North => NORTH,
        Location::South => SOUTH,
        Location::East => EAST,
    }
}

#[cfg(test)]
pub fn action_label(action: Action) -> &'static str {
    match action {
        Action::Arrived => ARRIVED,
        Action::Left => LEFT,
    }
}
