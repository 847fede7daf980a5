use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::court::{shot_zone, ShotZone};
use crate::models::Action;

/// Per-zone tally of scoring actions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneTally {
    pub makes: u16,
    pub points: u16,
}

/// Shot chart: scoring actions bucketed by court zone.
///
/// Only field goals and free throws carry chart-relevant positions; other
/// action types (rebounds, fouls, ...) are ignored here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShotChart {
    pub zones: HashMap<ShotZone, ZoneTally>,
}

/// One row of the zone summary, for tables and the CLI report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneSummary {
    pub zone: ShotZone,
    pub label: String,
    pub makes: u16,
    pub points: u16,
}

impl ShotChart {
    pub fn from_actions(actions: &[Action]) -> Self {
        let mut zones: HashMap<ShotZone, ZoneTally> = HashMap::new();
        for action in actions {
            if !action.action_type.is_scoring() {
                continue;
            }
            let tally = zones.entry(shot_zone(action.position)).or_default();
            tally.makes += 1;
            tally.points += action.action_type.points();
        }
        Self { zones }
    }

    pub fn total_points(&self) -> u16 {
        self.zones.values().map(|t| t.points).sum()
    }

    /// Fixed-order rows (key, mid-range, beyond the arc), zeros included.
    pub fn zone_summary(&self) -> Vec<ZoneSummary> {
        [ShotZone::Key, ShotZone::MidRange, ShotZone::BeyondArc]
            .into_iter()
            .map(|zone| {
                let tally = self.zones.get(&zone).copied().unwrap_or_default();
                ZoneSummary {
                    zone,
                    label: zone.label().to_string(),
                    makes: tally.makes,
                    points: tally.points,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::court::CourtPosition;
    use crate::models::ActionType;
    use uuid::Uuid;

    fn action_at(action_type: ActionType, x: f64, y: f64) -> Action {
        Action::new(action_type, CourtPosition::new(x, y), Uuid::new_v4(), Uuid::new_v4())
    }

    #[test]
    fn test_buckets_by_zone() {
        let actions = vec![
            action_at(ActionType::TwoPts, 2.0, 7.5),   // key
            action_at(ActionType::TwoPts, 6.5, 7.5),   // mid-range
            action_at(ActionType::ThreePts, 14.0, 7.5), // beyond arc
            action_at(ActionType::Rebound, 2.0, 7.5),  // ignored
        ];

        let chart = ShotChart::from_actions(&actions);
        assert_eq!(chart.zones[&ShotZone::Key].makes, 1);
        assert_eq!(chart.zones[&ShotZone::MidRange].points, 2);
        assert_eq!(chart.zones[&ShotZone::BeyondArc].points, 3);
        assert_eq!(chart.total_points(), 7);
    }

    #[test]
    fn test_zone_summary_is_complete_and_ordered() {
        let chart = ShotChart::from_actions(&[]);
        let rows = chart.zone_summary();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].zone, ShotZone::Key);
        assert!(rows.iter().all(|r| r.makes == 0));
    }
}
