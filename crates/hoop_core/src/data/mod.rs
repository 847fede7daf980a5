//! Embedded display data
//!
//! Marker style table loaded from YAML embedded at compile time. Parsed on
//! first access and cached; the data is immutable reference material, not
//! runtime state.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::models::ActionType;

/// Marker style YAML (compile-time embedded)
pub const MARKER_STYLES_YAML: &str = include_str!("../../data/marker_styles.yaml");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkerStyle {
    pub action: ActionType,
    /// CSS color used for the marker shape
    pub color: String,
    /// Short label drawn next to the marker
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkerStyleData {
    pub styles: Vec<MarkerStyle>,
}

static MARKER_STYLES: OnceLock<MarkerStyleData> = OnceLock::new();

/// Load the marker style table.
///
/// # Panics
/// Panics if the embedded YAML is malformed. That is a build defect, not
/// a runtime condition.
pub fn marker_styles() -> &'static MarkerStyleData {
    MARKER_STYLES.get_or_init(|| {
        serde_yaml::from_str(MARKER_STYLES_YAML).expect("embedded marker_styles.yaml must parse")
    })
}

/// Style for one action type, if configured.
pub fn marker_style(action: ActionType) -> Option<&'static MarkerStyle> {
    marker_styles().styles.iter().find(|s| s.action == action)
}
