//! Fixed court geometry: baskets, three-point arc, restricted lane.
//!
//! All inputs and outputs are court coordinates (FIBA meters, horizontal
//! reference frame). Used by the shot-chart aggregation to classify where
//! a recorded action happened.

use serde::{Deserialize, Serialize};

use super::constants::{court, hoop};
use super::transform::CourtPosition;

/// The two ends of the court, in reference-frame terms.
///
/// `Near` is the basket by the x=0 baseline, `Far` the one by x=28.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourtEnd {
    Near,
    Far,
}

/// Zone classification for shot-chart buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShotZone {
    /// Inside the restricted lane
    Key,
    /// Inside the arc but outside the lane
    MidRange,
    /// Beyond the three-point arc
    BeyondArc,
}

impl ShotZone {
    pub fn label(&self) -> &'static str {
        match self {
            ShotZone::Key => "Key",
            ShotZone::MidRange => "Mid-range",
            ShotZone::BeyondArc => "Beyond the arc",
        }
    }
}

/// Basket center for one end of the court.
pub fn basket_position(end: CourtEnd) -> CourtPosition {
    let x = match end {
        CourtEnd::Near => hoop::BASKET_FROM_BASELINE_M,
        CourtEnd::Far => court::LENGTH_M - hoop::BASKET_FROM_BASELINE_M,
    };
    CourtPosition::new(x, court::CENTER_Y)
}

/// Which basket a position plays toward (nearest by court half).
pub fn nearest_end(pos: CourtPosition) -> CourtEnd {
    if pos.x <= court::CENTER_X {
        CourtEnd::Near
    } else {
        CourtEnd::Far
    }
}

/// Euclidean distance between two court positions, meters.
pub fn distance_m(a: CourtPosition, b: CourtPosition) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    (dx * dx + dy * dy).sqrt()
}

/// Distance from a position to the nearest basket, meters.
pub fn distance_to_basket_m(pos: CourtPosition) -> f64 {
    distance_m(pos, basket_position(nearest_end(pos)))
}

/// Check whether a position is beyond the three-point arc of its half.
pub fn is_beyond_arc(pos: CourtPosition) -> bool {
    distance_to_basket_m(pos) > hoop::ARC_RADIUS_M
}

/// Check whether a position is inside the restricted lane of one end.
pub fn is_in_key(pos: CourtPosition, end: CourtEnd) -> bool {
    let y_min = (court::WIDTH_M - hoop::KEY_WIDTH_M) / 2.0;
    let y_max = y_min + hoop::KEY_WIDTH_M;
    if pos.y < y_min || pos.y > y_max {
        return false;
    }
    match end {
        CourtEnd::Near => pos.x <= hoop::KEY_DEPTH_M,
        CourtEnd::Far => pos.x >= court::LENGTH_M - hoop::KEY_DEPTH_M,
    }
}

/// Classify a position into its shot-chart zone.
pub fn shot_zone(pos: CourtPosition) -> ShotZone {
    if is_beyond_arc(pos) {
        ShotZone::BeyondArc
    } else if is_in_key(pos, nearest_end(pos)) {
        ShotZone::Key
    } else {
        ShotZone::MidRange
    }
}
