use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One game of the tracked team against a named opponent.
///
/// `score` is the tracked team's score; it is kept consistent with the
/// scoring actions recorded for the game (see `ClubStore::record_action`).
/// `opponent_score` is entered manually, since opponent actions are not
/// tracked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub id: Uuid,
    pub opponent: String,
    pub score: u16,
    pub opponent_score: u16,
    pub date: DateTime<Utc>,
    pub location: GameLocation,
    pub status: GameStatus,
    pub team_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub competition_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GameLocation {
    Home,
    Away,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    #[default]
    Upcoming,
    Live,
    Halftime,
    Finished,
}

impl GameStatus {
    pub fn label(&self) -> &'static str {
        match self {
            GameStatus::Upcoming => "Upcoming",
            GameStatus::Live => "Live",
            GameStatus::Halftime => "Halftime",
            GameStatus::Finished => "Finished",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    Win,
    Draw,
    Loss,
}

impl Game {
    pub fn new(
        opponent: impl Into<String>,
        date: DateTime<Utc>,
        location: GameLocation,
        team_id: Uuid,
        competition_id: Option<Uuid>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            opponent: opponent.into(),
            score: 0,
            opponent_score: 0,
            date,
            location,
            status: GameStatus::default(),
            team_id,
            competition_id,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.opponent.trim().is_empty() {
            return Err("Opponent name must not be empty".to_string());
        }
        Ok(())
    }

    pub fn result(&self) -> GameResult {
        match self.score.cmp(&self.opponent_score) {
            std::cmp::Ordering::Greater => GameResult::Win,
            std::cmp::Ordering::Equal => GameResult::Draw,
            std::cmp::Ordering::Less => GameResult::Loss,
        }
    }

    pub fn is_over(&self) -> bool {
        self.status == GameStatus::Finished
    }
}

/// Partial update for a game; `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GamePatch {
    pub opponent: Option<String>,
    pub opponent_score: Option<u16>,
    pub date: Option<DateTime<Utc>>,
    pub location: Option<GameLocation>,
    pub competition_id: Option<Option<Uuid>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_from_scores() {
        let mut game =
            Game::new("Rivals", Utc::now(), GameLocation::Home, Uuid::new_v4(), None);
        assert_eq!(game.result(), GameResult::Draw);

        game.score = 58;
        game.opponent_score = 55;
        assert_eq!(game.result(), GameResult::Win);

        game.opponent_score = 61;
        assert_eq!(game.result(), GameResult::Loss);
    }

    #[test]
    fn test_status_wire_codes() {
        let json = serde_json::to_string(&GameStatus::Halftime).unwrap();
        assert_eq!(json, "\"halftime\"");
    }
}
