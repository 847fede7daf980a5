use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Roster entry for one player of a tracked team.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: Uuid,
    pub name: String,
    /// Jersey number (0-99)
    pub number: u8,
    pub position: PlayerPosition,
    pub team_id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum PlayerPosition {
    PG,
    SG,
    SF,
    PF,
    C,
}

impl PlayerPosition {
    /// Decode from the compact numeric codes used in CSV rosters
    /// (0=PG .. 4=C).
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(PlayerPosition::PG),
            1 => Some(PlayerPosition::SG),
            2 => Some(PlayerPosition::SF),
            3 => Some(PlayerPosition::PF),
            4 => Some(PlayerPosition::C),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            PlayerPosition::PG => "PG",
            PlayerPosition::SG => "SG",
            PlayerPosition::SF => "SF",
            PlayerPosition::PF => "PF",
            PlayerPosition::C => "C",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PlayerPosition::PG => "Point guard",
            PlayerPosition::SG => "Shooting guard",
            PlayerPosition::SF => "Small forward",
            PlayerPosition::PF => "Power forward",
            PlayerPosition::C => "Center",
        }
    }

    pub fn is_guard(&self) -> bool {
        matches!(self, PlayerPosition::PG | PlayerPosition::SG)
    }

    pub fn is_forward(&self) -> bool {
        matches!(self, PlayerPosition::SF | PlayerPosition::PF)
    }

    pub fn is_center(&self) -> bool {
        matches!(self, PlayerPosition::C)
    }
}

impl std::str::FromStr for PlayerPosition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PG" => Ok(PlayerPosition::PG),
            "SG" => Ok(PlayerPosition::SG),
            "SF" => Ok(PlayerPosition::SF),
            "PF" => Ok(PlayerPosition::PF),
            "C" => Ok(PlayerPosition::C),
            other => Err(format!("Unknown player position: {}", other)),
        }
    }
}

impl Player {
    pub fn new(
        name: impl Into<String>,
        number: u8,
        position: PlayerPosition,
        team_id: Uuid,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            number,
            position,
            team_id,
            created_at: Utc::now(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Player name must not be empty".to_string());
        }
        if self.number > 99 {
            return Err(format!("Jersey number must be 0-99, got {}", self.number));
        }
        Ok(())
    }
}

/// Partial update for a player; `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerPatch {
    pub name: Option<String>,
    pub number: Option<u8>,
    pub position: Option<PlayerPosition>,
}
