use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{Action, ActionType};

/// Accumulated statistics for one player (or one team, when summed).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatLine {
    pub points: u16,
    pub threes_made: u16,
    pub twos_made: u16,
    pub free_throws_made: u16,
    pub rebounds: u16,
    pub assists: u16,
    pub steals: u16,
    pub fouls: u16,
}

impl StatLine {
    /// Fold one action into the line.
    pub fn record(&mut self, action_type: ActionType) {
        self.points += action_type.points();
        match action_type {
            ActionType::ThreePts => self.threes_made += 1,
            ActionType::TwoPts => self.twos_made += 1,
            ActionType::FreeThrow => self.free_throws_made += 1,
            ActionType::Rebound => self.rebounds += 1,
            ActionType::Assist => self.assists += 1,
            ActionType::Steal => self.steals += 1,
            ActionType::Foul => self.fouls += 1,
        }
    }

    /// Made field goals (free throws excluded).
    pub fn field_goals_made(&self) -> u16 {
        self.threes_made + self.twos_made
    }

    pub fn merge(&mut self, other: &StatLine) {
        self.points += other.points;
        self.threes_made += other.threes_made;
        self.twos_made += other.twos_made;
        self.free_throws_made += other.free_throws_made;
        self.rebounds += other.rebounds;
        self.assists += other.assists;
        self.steals += other.steals;
        self.fouls += other.fouls;
    }
}

/// Team-level totals shown on scoreboards and KPI tiles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamTotals {
    pub points: u16,
    pub rebounds: u16,
    pub assists: u16,
    pub steals: u16,
    pub fouls: u16,
}

impl From<StatLine> for TeamTotals {
    fn from(line: StatLine) -> Self {
        Self {
            points: line.points,
            rebounds: line.rebounds,
            assists: line.assists,
            steals: line.steals,
            fouls: line.fouls,
        }
    }
}

/// Aggregate actions into per-player stat lines.
pub fn player_stat_lines(actions: &[Action]) -> HashMap<Uuid, StatLine> {
    let mut lines: HashMap<Uuid, StatLine> = HashMap::new();
    for action in actions {
        lines.entry(action.player_id).or_default().record(action.action_type);
    }
    lines
}

/// Aggregate actions into team totals.
pub fn team_totals(actions: &[Action]) -> TeamTotals {
    let mut line = StatLine::default();
    for action in actions {
        line.record(action.action_type);
    }
    line.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::court::CourtPosition;

    fn action(action_type: ActionType, player_id: Uuid) -> Action {
        Action::new(action_type, CourtPosition::center(), player_id, Uuid::new_v4())
    }

    #[test]
    fn test_stat_line_scoring() {
        let mut line = StatLine::default();
        line.record(ActionType::ThreePts);
        line.record(ActionType::TwoPts);
        line.record(ActionType::TwoPts);
        line.record(ActionType::FreeThrow);
        line.record(ActionType::Rebound);

        assert_eq!(line.points, 8);
        assert_eq!(line.field_goals_made(), 3);
        assert_eq!(line.rebounds, 1);
        assert_eq!(line.fouls, 0);
    }

    #[test]
    fn test_player_lines_split_by_player() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let actions = vec![
            action(ActionType::ThreePts, a),
            action(ActionType::Foul, b),
            action(ActionType::Assist, a),
        ];

        let lines = player_stat_lines(&actions);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[&a].points, 3);
        assert_eq!(lines[&a].assists, 1);
        assert_eq!(lines[&b].fouls, 1);
    }

    #[test]
    fn test_team_totals() {
        let p = Uuid::new_v4();
        let actions = vec![
            action(ActionType::TwoPts, p),
            action(ActionType::FreeThrow, p),
            action(ActionType::Steal, p),
        ];
        let totals = team_totals(&actions);
        assert_eq!(totals.points, 3);
        assert_eq!(totals.steals, 1);
        assert_eq!(totals.rebounds, 0);
    }
}
