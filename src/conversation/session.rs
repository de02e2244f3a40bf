use std::fmt;
use std::str::FromStr;

/// Stable id of one person talking to the bot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConversationId(pub u64);

impl fmt::Display for ConversationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Barber,
    Administrator,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Barber => "barber",
            Role::Administrator => "administrator",
        }
    }
}

impl FromStr for Role {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "barber" => Ok(Role::Barber),
            "administrator" => Ok(Role::Administrator),
            _ => Err(anyhow::anyhow!("Invalid role: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    Center,
    North,
    South,
    East,
}

impl Location {
    pub fn as_str(&self) -> &'static str {
        match self {
            Location::Center => "center",
            Location::North => "north",
            Location::South => "south",
            Location::East => "east",
        }
    }
}

impl FromStr for Location {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "center" => Ok(Location::Center),
            "north" => Ok(Location::North),
            "south" => Ok(Location::South),
            "east" => Ok(Location::East),
            _ => Err(anyhow::anyhow!("Invalid location: {}", s)),
        }
    }
}

/// Which answer the bot is currently waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stage {
    #[default]
    None,
    AwaitingRole,
    AwaitingLocation,
    AwaitingStatus,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::None => "none",
            Stage::AwaitingRole => "awaiting_role",
            Stage::AwaitingLocation => "awaiting_location",
            Stage::AwaitingStatus => "awaiting_status",
        }
    }
}

impl FromStr for Stage {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Stage::None),
            "awaiting_role" => Ok(Stage::AwaitingRole),
            "awaiting_location" => Ok(Stage::AwaitingLocation),
            "awaiting_status" => Ok(Stage::AwaitingStatus),
            _ => Err(anyhow::anyhow!("Invalid stage: {}", s)),
        }
    }
}

/// Per-user conversation state. The default value is the freshly reset session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UserSession {
    pub role: Option<Role>,
    pub location: Option<Location>,
    pub stage: Stage,
}

impl UserSession {
    pub fn reset(&mut self) {
        *self = UserSession::default();
    }
}
