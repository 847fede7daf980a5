use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::court::{
    rescale_to_viewport, surface_to_court, ActionMarker, Orientation, SurfaceMarker, SurfaceSize,
};
use crate::models::{Action, ActionType, Player, PlayerPosition};
use crate::stats::{player_stat_lines, Scoreboard, ShotChart, StatLine, ZoneSummary};
use crate::store::ClubStore;

pub const SCHEMA_VERSION: u8 = 1;

fn err_code(code: &str, message: impl std::fmt::Display) -> String {
    format!("{code}: {message}")
}

fn check_schema_version(found: u8) -> Result<(), String> {
    if found != SCHEMA_VERSION {
        return Err(err_code(
            "SCHEMA_VERSION",
            format!("unsupported schema version: {found}"),
        ));
    }
    Ok(())
}

// ============================================================================
// Tap recording
// ============================================================================

/// Raw pointer event as the rendering surface reports it: an offset inside
/// the surface's bounding box plus the surface's own declared dimensions.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct TapEvent {
    pub surface_x: f64,
    pub surface_y: f64,
    pub surface_width: f64,
    pub surface_height: f64,
}

#[derive(Debug, Deserialize)]
pub struct RecordTapRequest {
    pub schema_version: u8,
    pub game_id: Uuid,
    pub player_id: Uuid,
    #[serde(rename = "type")]
    pub action_type: ActionType,
    pub tap: TapEvent,
}

#[derive(Debug, Serialize)]
pub struct RecordTapResponse {
    pub schema_version: u8,
    /// The created action, position in canonical court meters
    pub action: Action,
    /// Orientation inferred from the reported surface dimensions
    pub orientation: Orientation,
    /// Tracked team's score after the action
    pub game_score: u16,
}

/// Record a tap on the rendered court.
///
/// Pipeline: orientation is derived from the declared surface dimensions,
/// the offset is rescaled into that orientation's fixed viewport, the
/// inverse transform yields court meters, and the store clamps to the
/// court rectangle on insert.
pub fn record_tap_json(store: &mut ClubStore, request_json: &str) -> Result<String, String> {
    let request: RecordTapRequest =
        serde_json::from_str(request_json).map_err(|e| err_code("PARSE", e))?;
    check_schema_version(request.schema_version)?;

    let tap = request.tap;
    if tap.surface_width <= 0.0 || tap.surface_height <= 0.0 {
        return Err(err_code(
            "INVALID_SURFACE",
            format!("surface dimensions must be positive, got {}x{}", tap.surface_width, tap.surface_height),
        ));
    }

    let orientation = Orientation::from_surface(tap.surface_width, tap.surface_height);
    let surface = rescale_to_viewport(
        tap.surface_x,
        tap.surface_y,
        tap.surface_width,
        tap.surface_height,
        orientation,
    );
    let position = surface_to_court(surface, orientation);

    let action = store
        .record_action(request.action_type, position, request.player_id, request.game_id)
        .map_err(|e| err_code(e.code(), e))?;
    let game_score =
        store.game(request.game_id).map(|g| g.score).map_err(|e| err_code(e.code(), e))?;

    log::debug!(
        "Tap ({}, {}) on {} surface -> court ({:.2}, {:.2})",
        tap.surface_x,
        tap.surface_y,
        orientation.code(),
        action.position.x,
        action.position.y
    );

    let response =
        RecordTapResponse { schema_version: SCHEMA_VERSION, action, orientation, game_score };
    serde_json::to_string(&response).map_err(|e| err_code("SERIALIZE", e))
}

// ============================================================================
// Marker projection
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ProjectMarkersRequest {
    pub schema_version: u8,
    /// Target orientation, passed explicitly end-to-end
    pub orientation: Orientation,
    pub markers: Vec<ActionMarker>,
}

#[derive(Debug, Serialize)]
pub struct ProjectMarkersResponse {
    pub schema_version: u8,
    pub orientation: Orientation,
    pub viewport: SurfaceSize,
    pub markers: Vec<SurfaceMarker>,
}

/// Project action markers into one orientation's viewport for drawing.
pub fn project_markers_json(request_json: &str) -> Result<String, String> {
    let request: ProjectMarkersRequest =
        serde_json::from_str(request_json).map_err(|e| err_code("PARSE", e))?;
    check_schema_version(request.schema_version)?;

    let markers: Vec<SurfaceMarker> =
        request.markers.iter().map(|m| m.project(request.orientation)).collect();

    let response = ProjectMarkersResponse {
        schema_version: SCHEMA_VERSION,
        orientation: request.orientation,
        viewport: request.orientation.viewport(),
        markers,
    };
    serde_json::to_string(&response).map_err(|e| err_code("SERIALIZE", e))
}

// ============================================================================
// Game summary
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct GameSummaryRequest {
    pub schema_version: u8,
    pub game_id: Uuid,
}

/// One row of the box score.
#[derive(Debug, Serialize)]
pub struct BoxScoreRow {
    pub player_id: Uuid,
    pub name: String,
    pub number: u8,
    pub position: PlayerPosition,
    #[serde(flatten)]
    pub line: StatLine,
}

#[derive(Debug, Serialize)]
pub struct GameSummaryResponse {
    pub schema_version: u8,
    pub game_id: Uuid,
    pub scoreboard: Scoreboard,
    /// Roster rows sorted by jersey number; players without actions appear
    /// with an empty line
    pub box_score: Vec<BoxScoreRow>,
    pub shot_chart: Vec<ZoneSummary>,
}

/// Scoreboard, box score and shot chart for one game.
pub fn game_summary_json(store: &ClubStore, request_json: &str) -> Result<String, String> {
    let request: GameSummaryRequest =
        serde_json::from_str(request_json).map_err(|e| err_code("PARSE", e))?;
    check_schema_version(request.schema_version)?;

    let game = store.game(request.game_id).map_err(|e| err_code(e.code(), e))?;
    let team = store.team(game.team_id).map_err(|e| err_code(e.code(), e))?;
    let actions: Vec<Action> = store
        .game_actions(request.game_id)
        .map_err(|e| err_code(e.code(), e))?
        .into_iter()
        .cloned()
        .collect();
    let roster = store.team_players(game.team_id).map_err(|e| err_code(e.code(), e))?;

    let lines = player_stat_lines(&actions);
    let box_score = roster
        .into_iter()
        .map(|p| BoxScoreRow {
            player_id: p.id,
            name: p.name.clone(),
            number: p.number,
            position: p.position,
            line: lines.get(&p.id).copied().unwrap_or_default(),
        })
        .collect();

    let response = GameSummaryResponse {
        schema_version: SCHEMA_VERSION,
        game_id: game.id,
        scoreboard: Scoreboard::for_game(&team.name, game, &actions),
        box_score,
        shot_chart: ShotChart::from_actions(&actions).zone_summary(),
    };
    serde_json::to_string(&response).map_err(|e| err_code("SERIALIZE", e))
}

// ============================================================================
// Player summary
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct PlayerSummaryRequest {
    pub schema_version: u8,
    pub player_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct PlayerGameLine {
    pub game_id: Uuid,
    pub opponent: String,
    pub date: chrono::DateTime<chrono::Utc>,
    #[serde(flatten)]
    pub line: StatLine,
}

#[derive(Debug, Serialize)]
pub struct PlayerSummaryResponse {
    pub schema_version: u8,
    pub player: Player,
    /// Career totals across all recorded games
    pub career: StatLine,
    /// Per-game breakdown, newest first
    pub games: Vec<PlayerGameLine>,
}

/// Career line and per-game breakdown for one player.
pub fn player_summary_json(store: &ClubStore, request_json: &str) -> Result<String, String> {
    let request: PlayerSummaryRequest =
        serde_json::from_str(request_json).map_err(|e| err_code("PARSE", e))?;
    check_schema_version(request.schema_version)?;

    let player = store.player(request.player_id).map_err(|e| err_code(e.code(), e))?.clone();
    let actions = store.player_actions(request.player_id).map_err(|e| err_code(e.code(), e))?;

    let mut career = StatLine::default();
    let mut per_game: Vec<(Uuid, StatLine)> = Vec::new();
    for action in &actions {
        career.record(action.action_type);
        match per_game.iter_mut().find(|(game_id, _)| *game_id == action.game_id) {
            Some((_, line)) => line.record(action.action_type),
            // player_actions is newest-first, so first sight keeps that order
            None => {
                let mut line = StatLine::default();
                line.record(action.action_type);
                per_game.push((action.game_id, line));
            }
        }
    }

    let mut games = Vec::with_capacity(per_game.len());
    for (game_id, line) in per_game {
        let game = store.game(game_id).map_err(|e| err_code(e.code(), e))?;
        games.push(PlayerGameLine {
            game_id,
            opponent: game.opponent.clone(),
            date: game.date,
            line,
        });
    }

    let response = PlayerSummaryResponse { schema_version: SCHEMA_VERSION, player, career, games };
    serde_json::to_string(&response).map_err(|e| err_code("SERIALIZE", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GameLocation, TeamCategory};
    use chrono::Utc;
    use serde_json::json;

    fn seeded() -> (ClubStore, Uuid, Uuid, Uuid) {
        let mut store = ClubStore::new();
        let team = store.create_team("Eagles", TeamCategory::U18).unwrap();
        let player = store.create_player("Ines", 7, PlayerPosition::PG, team.id).unwrap();
        let game = store
            .create_game("Rivals", Utc::now(), GameLocation::Home, team.id, None)
            .unwrap();
        (store, team.id, player.id, game.id)
    }

    #[test]
    fn test_record_tap_center_court_horizontal() {
        let (mut store, _, player_id, game_id) = seeded();

        let request = json!({
            "schema_version": 1,
            "game_id": game_id,
            "player_id": player_id,
            "type": "2PTS",
            "tap": {
                "surface_x": 470.0,
                "surface_y": 250.0,
                "surface_width": 940.0,
                "surface_height": 500.0
            }
        });

        let response = record_tap_json(&mut store, &request.to_string()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&response).unwrap();

        assert_eq!(parsed["schema_version"], 1);
        assert_eq!(parsed["orientation"], "horizontal");
        assert_eq!(parsed["game_score"], 2);
        assert!((parsed["action"]["position_x"].as_f64().unwrap() - 14.0).abs() < 1e-9);
        assert!((parsed["action"]["position_y"].as_f64().unwrap() - 7.5).abs() < 1e-9);
    }

    #[test]
    fn test_record_tap_vertical_scaled_surface() {
        let (mut store, _, player_id, game_id) = seeded();

        // Half-size vertical rendering; top-right corner of the viewport is
        // the court origin corner.
        let request = json!({
            "schema_version": 1,
            "game_id": game_id,
            "player_id": player_id,
            "type": "REBOUND",
            "tap": {
                "surface_x": 250.0,
                "surface_y": 0.0,
                "surface_width": 250.0,
                "surface_height": 470.0
            }
        });

        let response = record_tap_json(&mut store, &request.to_string()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&response).unwrap();

        assert_eq!(parsed["orientation"], "vertical");
        assert!((parsed["action"]["position_x"].as_f64().unwrap()).abs() < 1e-9);
        assert!((parsed["action"]["position_y"].as_f64().unwrap()).abs() < 1e-9);
        // Rebounds do not score.
        assert_eq!(parsed["game_score"], 0);
    }

    #[test]
    fn test_record_tap_rejects_wrong_schema_version() {
        let (mut store, _, player_id, game_id) = seeded();
        let request = json!({
            "schema_version": 2,
            "game_id": game_id,
            "player_id": player_id,
            "type": "2PTS",
            "tap": {"surface_x": 0.0, "surface_y": 0.0, "surface_width": 940.0, "surface_height": 500.0}
        });

        let err = record_tap_json(&mut store, &request.to_string()).unwrap_err();
        assert!(err.starts_with("SCHEMA_VERSION"));
    }

    #[test]
    fn test_record_tap_unknown_player_maps_store_error() {
        let (mut store, _, _, game_id) = seeded();
        let request = json!({
            "schema_version": 1,
            "game_id": game_id,
            "player_id": Uuid::new_v4(),
            "type": "2PTS",
            "tap": {"surface_x": 1.0, "surface_y": 1.0, "surface_width": 940.0, "surface_height": 500.0}
        });

        let err = record_tap_json(&mut store, &request.to_string()).unwrap_err();
        assert!(err.starts_with("NOT_FOUND"));
    }

    #[test]
    fn test_project_markers_round_trip() {
        let request = json!({
            "schema_version": 1,
            "orientation": "vertical",
            "markers": [
                {"position": {"x": 14.0, "y": 7.5}, "action": "3PTS"}
            ]
        });

        let response = project_markers_json(&request.to_string()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&response).unwrap();

        assert_eq!(parsed["viewport"]["width"], 500.0);
        assert_eq!(parsed["markers"].as_array().unwrap().len(), 1);
        assert!((parsed["markers"][0]["at"]["x"].as_f64().unwrap() - 250.0).abs() < 1e-9);
        assert!((parsed["markers"][0]["at"]["y"].as_f64().unwrap() - 470.0).abs() < 1e-9);
    }

    #[test]
    fn test_game_summary_box_score_and_chart() {
        let (mut store, team_id, player_id, game_id) = seeded();
        // A bench player with no actions still shows in the box score.
        store.create_player("Maya", 12, PlayerPosition::C, team_id).unwrap();

        let tap = |x: f64, y: f64, action: &str| {
            json!({
                "schema_version": 1,
                "game_id": game_id,
                "player_id": player_id,
                "type": action,
                "tap": {"surface_x": x, "surface_y": y, "surface_width": 940.0, "surface_height": 500.0}
            })
        };

        // Layup in the key (court ~ (2.0, 7.5)).
        record_tap_json(&mut store, &tap(67.14, 250.0, "2PTS").to_string()).unwrap();
        // Center-court heave (beyond the arc).
        record_tap_json(&mut store, &tap(470.0, 250.0, "3PTS").to_string()).unwrap();

        let request = json!({"schema_version": 1, "game_id": game_id});
        let response = game_summary_json(&store, &request.to_string()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&response).unwrap();

        assert_eq!(parsed["scoreboard"]["home"]["name"], "Eagles");
        assert_eq!(parsed["scoreboard"]["home"]["score"], 5);

        let rows = parsed["box_score"].as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["number"], 7);
        assert_eq!(rows[0]["points"], 5);
        assert_eq!(rows[1]["points"], 0);

        let chart = parsed["shot_chart"].as_array().unwrap();
        assert_eq!(chart.len(), 3);
        let beyond = chart.iter().find(|r| r["zone"] == "beyond_arc").unwrap();
        assert_eq!(beyond["points"], 3);
    }

    #[test]
    fn test_player_summary_newest_game_first() {
        let (mut store, team_id, player_id, _) = seeded();
        let older = store
            .create_game(
                "Past Rivals",
                Utc::now() - chrono::Duration::days(7),
                GameLocation::Away,
                team_id,
                None,
            )
            .unwrap();

        store
            .record_action(
                ActionType::TwoPts,
                crate::court::CourtPosition::center(),
                player_id,
                older.id,
            )
            .unwrap();
        let recent = store.team_games(team_id).unwrap()[0].id;
        store
            .record_action(
                ActionType::ThreePts,
                crate::court::CourtPosition::center(),
                player_id,
                recent,
            )
            .unwrap();

        let request = json!({"schema_version": 1, "player_id": player_id});
        let response = player_summary_json(&store, &request.to_string()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&response).unwrap();

        assert_eq!(parsed["career"]["points"], 5);
        let games = parsed["games"].as_array().unwrap();
        assert_eq!(games.len(), 2);
        assert_eq!(games[0]["opponent"], "Rivals");
        assert_eq!(games[0]["points"], 3);
        assert_eq!(games[1]["opponent"], "Past Rivals");
    }
}
