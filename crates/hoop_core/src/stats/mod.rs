//! Statistics aggregation
//!
//! Pure functions over recorded actions; no I/O and no store access, so
//! every aggregate can be recomputed from any action slice.

pub mod scoreboard;
pub mod shot_chart;
pub mod stat_line;

pub use scoreboard::{Scoreboard, ScoreboardSide};
pub use shot_chart::{ShotChart, ZoneSummary, ZoneTally};
pub use stat_line::{player_stat_lines, team_totals, StatLine, TeamTotals};
