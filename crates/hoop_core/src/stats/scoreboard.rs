use serde::{Deserialize, Serialize};

use crate::models::{Action, Game, GameLocation, GameStatus};

use super::stat_line::{team_totals, TeamTotals};

/// One side of the scoreboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreboardSide {
    pub name: String,
    pub score: u16,
    pub fouls: u16,
}

/// Scoreboard payload for one game, home side first.
///
/// The tracked team's score is recomputed from its recorded actions, so
/// the board stays consistent even if the stored game row lags behind a
/// just-recorded basket. The opponent side only carries the manually
/// entered score, since opponent actions are not tracked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scoreboard {
    pub home: ScoreboardSide,
    pub away: ScoreboardSide,
    pub status: GameStatus,
    pub status_label: String,
    pub totals: TeamTotals,
}

impl Scoreboard {
    pub fn for_game(team_name: &str, game: &Game, actions: &[Action]) -> Self {
        let totals = team_totals(actions);

        let tracked = ScoreboardSide {
            name: team_name.to_string(),
            score: totals.points,
            fouls: totals.fouls,
        };
        let opponent = ScoreboardSide {
            name: game.opponent.clone(),
            score: game.opponent_score,
            fouls: 0,
        };

        let (home, away) = match game.location {
            GameLocation::Home => (tracked, opponent),
            GameLocation::Away => (opponent, tracked),
        };

        Self {
            home,
            away,
            status: game.status,
            status_label: game.status.label().to_string(),
            totals,
        }
    }
}
