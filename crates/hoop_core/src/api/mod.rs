//! JSON API boundary
//!
//! String-in/string-out entry points the web frontend calls. Requests are
//! gated on `schema_version`; errors come back as `"CODE: message"`
//! strings with stable codes.

pub mod json_api;

pub use json_api::{
    game_summary_json, player_summary_json, project_markers_json, record_tap_json,
    GameSummaryRequest, GameSummaryResponse, PlayerSummaryRequest, PlayerSummaryResponse,
    ProjectMarkersRequest, ProjectMarkersResponse, RecordTapRequest, RecordTapResponse, TapEvent,
    SCHEMA_VERSION,
};
