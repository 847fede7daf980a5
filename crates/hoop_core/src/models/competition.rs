use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Named competition (league, cup, tournament) a team's games belong to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Competition {
    pub id: Uuid,
    pub name: String,
    pub team_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Competition {
    pub fn new(name: impl Into<String>, team_id: Uuid) -> Self {
        Self { id: Uuid::new_v4(), name: name.into(), team_id, created_at: Utc::now() }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Competition name must not be empty".to_string());
        }
        Ok(())
    }
}

/// Partial update for a competition.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompetitionPatch {
    pub name: Option<String>,
}
