//! # hoop_core - Basketball Statistics Tracking Core
//!
//! This library is the core of HoopStats: a coach's basketball statistics
//! tracker. It provides the court coordinate transform, the club store
//! (teams, rosters, competitions, games, recorded actions), statistics
//! aggregation, a versioned binary save format, and a JSON API for the web
//! frontend.
//!
//! ## Features
//! - Exact bidirectional FIBA-meters ↔ render-surface coordinate mapping
//! - Tap-to-action recording with consistent score bookkeeping
//! - Box scores, scoreboards and per-zone shot charts from raw actions
//! - Compressed, checksummed, versioned save files

pub mod api;
pub mod court;
pub mod data;
pub mod error;
pub mod models;
pub mod save;
pub mod stats;
pub mod store;

// Re-export main API functions
pub use api::{
    game_summary_json, player_summary_json, project_markers_json, record_tap_json,
};
pub use error::{Error, Result};

// Re-export the coordinate core
pub use court::{
    court_to_surface, surface_to_court, ActionMarker, CourtPosition, Orientation, SurfaceMarker,
    SurfacePosition,
};

// Re-export domain models
pub use models::{
    Action, ActionType, Competition, Game, GameLocation, GameStatus, Player, PlayerPosition, Team,
    TeamCategory,
};

// Re-export the store and save system
pub use save::{ClubSave, ClubSettings, SaveError, SaveManager};
pub use store::{ClubStore, StoreError};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = api::SCHEMA_VERSION;

/// Load a club from the manager's default save.
pub fn load_club(manager: &SaveManager) -> Result<ClubStore> {
    Ok(ClubStore::from_save(&manager.load()?))
}

/// Persist a club snapshot to the manager's default save.
pub fn save_club(manager: &SaveManager, store: &ClubStore) -> Result<()> {
    manager.save(&store.to_save())?;
    Ok(())
}

/// Record an action and, when the club's auto-save setting is on, persist
/// the updated snapshot immediately.
pub fn record_and_autosave(
    store: &mut ClubStore,
    manager: &SaveManager,
    action_type: ActionType,
    position: CourtPosition,
    player_id: uuid::Uuid,
    game_id: uuid::Uuid,
) -> Result<Action> {
    let action = store.record_action(action_type, position, player_id, game_id)?;
    if store.settings().auto_save {
        save_club(manager, store)?;
    }
    Ok(action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    /// Full flow: build a club, record taps through the JSON API, save to
    /// disk, reload, and read the summary back.
    #[test]
    fn test_track_save_reload_flow() {
        let mut store = ClubStore::new();
        let team = store.create_team("Eagles", TeamCategory::U18).unwrap();
        let player = store
            .create_player("Ines", 7, PlayerPosition::PG, team.id)
            .unwrap();
        let game = store
            .create_game("Rivals", Utc::now(), GameLocation::Home, team.id, None)
            .unwrap();
        store.set_status(game.id, GameStatus::Live).unwrap();

        // Two taps: one from a horizontal surface, one from a vertical one.
        let horizontal_tap = json!({
            "schema_version": 1,
            "game_id": game.id,
            "player_id": player.id,
            "type": "2PTS",
            "tap": {"surface_x": 67.0, "surface_y": 250.0, "surface_width": 940.0, "surface_height": 500.0}
        });
        record_tap_json(&mut store, &horizontal_tap.to_string()).unwrap();

        let vertical_tap = json!({
            "schema_version": 1,
            "game_id": game.id,
            "player_id": player.id,
            "type": "3PTS",
            "tap": {"surface_x": 250.0, "surface_y": 470.0, "surface_width": 500.0, "surface_height": 940.0}
        });
        record_tap_json(&mut store, &vertical_tap.to_string()).unwrap();

        assert_eq!(store.game(game.id).unwrap().score, 5);

        // Persist and reload.
        let dir = tempfile::tempdir().unwrap();
        let manager = SaveManager::new(dir.path());
        manager.save(&store.to_save()).unwrap();
        let restored = ClubStore::from_save(&manager.load().unwrap());

        let summary = game_summary_json(
            &restored,
            &json!({"schema_version": 1, "game_id": game.id}).to_string(),
        )
        .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&summary).unwrap();

        assert_eq!(parsed["scoreboard"]["home"]["score"], 5);
        assert_eq!(parsed["scoreboard"]["status"], "live");
        assert_eq!(parsed["box_score"][0]["points"], 5);

        // Both stored positions are canonical court meters, in bounds.
        for action in restored.game_actions(game.id).unwrap() {
            assert!(!action.position.is_out_of_bounds());
        }
    }

    #[test]
    fn test_record_and_autosave_persists() {
        let mut store = ClubStore::new();
        let team = store.create_team("Eagles", TeamCategory::U15).unwrap();
        let player = store.create_player("Maya", 12, PlayerPosition::C, team.id).unwrap();
        let game = store
            .create_game("Rivals", Utc::now(), GameLocation::Home, team.id, None)
            .unwrap();

        let dir = tempfile::tempdir().unwrap();
        let manager = SaveManager::new(dir.path());

        assert!(store.settings().auto_save);
        record_and_autosave(
            &mut store,
            &manager,
            ActionType::FreeThrow,
            CourtPosition::new(5.8, 7.5),
            player.id,
            game.id,
        )
        .unwrap();

        let reloaded = load_club(&manager).unwrap();
        assert_eq!(reloaded.game(game.id).unwrap().score, 1);

        // With auto-save off, recording no longer touches the file.
        store.settings_mut().auto_save = false;
        record_and_autosave(
            &mut store,
            &manager,
            ActionType::TwoPts,
            CourtPosition::new(2.0, 7.5),
            player.id,
            game.id,
        )
        .unwrap();
        let stale = load_club(&manager).unwrap();
        assert_eq!(stale.game(game.id).unwrap().score, 1);
    }

    /// Positions stored from taps are identical no matter which
    /// orientation the court was displayed in when tapped.
    #[test]
    fn test_orientation_independent_storage() {
        let mut store = ClubStore::new();
        let team = store.create_team("Eagles", TeamCategory::Senior).unwrap();
        let player = store.create_player("Lou", 4, PlayerPosition::C, team.id).unwrap();
        let game = store
            .create_game("Rivals", Utc::now(), GameLocation::Away, team.id, None)
            .unwrap();

        // The same court point (7.0, 3.75): tapped on a horizontal surface…
        let horizontal = court_to_surface(CourtPosition::new(7.0, 3.75), Orientation::Horizontal);
        let tap_h = json!({
            "schema_version": 1,
            "game_id": game.id,
            "player_id": player.id,
            "type": "REBOUND",
            "tap": {"surface_x": horizontal.x, "surface_y": horizontal.y, "surface_width": 940.0, "surface_height": 500.0}
        });
        // …and on a vertical surface.
        let vertical = court_to_surface(CourtPosition::new(7.0, 3.75), Orientation::Vertical);
        let tap_v = json!({
            "schema_version": 1,
            "game_id": game.id,
            "player_id": player.id,
            "type": "REBOUND",
            "tap": {"surface_x": vertical.x, "surface_y": vertical.y, "surface_width": 500.0, "surface_height": 940.0}
        });

        record_tap_json(&mut store, &tap_h.to_string()).unwrap();
        record_tap_json(&mut store, &tap_v.to_string()).unwrap();

        let actions = store.game_actions(game.id).unwrap();
        assert!((actions[0].position.x - actions[1].position.x).abs() < 1e-9);
        assert!((actions[0].position.y - actions[1].position.y).abs() < 1e-9);
    }
}
