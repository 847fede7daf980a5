use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub id: Uuid,
    pub name: String,
    pub category: TeamCategory,
    pub created_at: DateTime<Utc>,
}

/// Age bracket the team competes in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TeamCategory {
    U11,
    U13,
    U15,
    U18,
    Senior,
}

impl TeamCategory {
    pub fn code(&self) -> &'static str {
        match self {
            TeamCategory::U11 => "U11",
            TeamCategory::U13 => "U13",
            TeamCategory::U15 => "U15",
            TeamCategory::U18 => "U18",
            TeamCategory::Senior => "SENIOR",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TeamCategory::U11 => "Under 11",
            TeamCategory::U13 => "Under 13",
            TeamCategory::U15 => "Under 15",
            TeamCategory::U18 => "Under 18",
            TeamCategory::Senior => "Senior",
        }
    }
}

impl Team {
    pub fn new(name: impl Into<String>, category: TeamCategory) -> Self {
        Self { id: Uuid::new_v4(), name: name.into(), category, created_at: Utc::now() }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Team name must not be empty".to_string());
        }
        if self.name.len() > 100 {
            return Err(format!("Team name too long: {} chars", self.name.len()));
        }
        Ok(())
    }
}

/// Partial update for a team; `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TeamPatch {
    pub name: Option<String>,
    pub category: Option<TeamCategory>,
}
