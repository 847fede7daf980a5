//! Action markers
//!
//! Ephemeral annotations drawn on the rendered court: a canonical court
//! position plus optional semantic tags. Markers accept positions in FIBA
//! meters only (never surface pixels) and are projected through the
//! forward transform right before drawing.

use serde::{Deserialize, Serialize};

use crate::data;
use crate::models::ActionType;

use super::constants::marker;
use super::orientation::Orientation;
use super::transform::{court_to_surface, CourtPosition, SurfacePosition};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionMarker {
    pub position: CourtPosition,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<ActionType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_label: Option<String>,
    /// Explicit color override; falls back to the configured style for the
    /// action type, then to the default marker color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// A marker resolved against one orientation's viewport, ready to draw.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurfaceMarker {
    pub at: SurfacePosition,
    pub half_size: f64,
    pub stroke_width: f64,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl ActionMarker {
    pub fn at(position: CourtPosition) -> Self {
        Self { position, action: None, player_label: None, color: None }
    }

    pub fn for_action(position: CourtPosition, action: ActionType) -> Self {
        Self { position, action: Some(action), player_label: None, color: None }
    }

    fn resolved_color(&self) -> String {
        if let Some(color) = &self.color {
            return color.clone();
        }
        self.action
            .and_then(data::marker_style)
            .map(|style| style.color.clone())
            .unwrap_or_else(|| marker::DEFAULT_COLOR.to_string())
    }

    /// Project the marker into the given orientation's viewport.
    pub fn project(&self, orientation: Orientation) -> SurfaceMarker {
        SurfaceMarker {
            at: court_to_surface(self.position, orientation),
            half_size: marker::CROSS_SIZE,
            stroke_width: marker::STROKE_WIDTH,
            color: self.resolved_color(),
            label: self.player_label.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_uses_forward_transform() {
        let m = ActionMarker::at(CourtPosition::center());
        let s = m.project(Orientation::Horizontal);
        assert!((s.at.x - 470.0).abs() < 1e-9);
        assert!((s.at.y - 250.0).abs() < 1e-9);
    }

    #[test]
    fn test_color_resolution_order() {
        let mut m = ActionMarker::for_action(CourtPosition::center(), ActionType::Foul);
        let styled = m.project(Orientation::Horizontal).color;
        assert_eq!(styled, data::marker_style(ActionType::Foul).unwrap().color);

        m.color = Some("#123456".to_string());
        assert_eq!(m.project(Orientation::Horizontal).color, "#123456");

        let bare = ActionMarker::at(CourtPosition::center());
        assert_eq!(bare.project(Orientation::Vertical).color, marker::DEFAULT_COLOR);
    }
}
