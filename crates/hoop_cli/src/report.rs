//! Game report printing
//!
//! Renders a game's scoreboard, box score and shot chart as plain text.

use anyhow::{bail, Result};
use uuid::Uuid;

use hoop_core::stats::{player_stat_lines, Scoreboard, ShotChart};
use hoop_core::store::ClubStore;
use hoop_core::Action;

/// Pick the game to report on: an explicit id, or the most recent game in
/// the store.
pub fn resolve_game(store: &ClubStore, game_id: Option<Uuid>) -> Result<Uuid> {
    if let Some(id) = game_id {
        store.game(id)?;
        return Ok(id);
    }
    let mut latest: Option<(Uuid, chrono::DateTime<chrono::Utc>)> = None;
    for team in store.teams() {
        for game in store.team_games(team.id)? {
            if latest.map(|(_, date)| game.date > date).unwrap_or(true) {
                latest = Some((game.id, game.date));
            }
        }
    }
    match latest {
        Some((id, _)) => Ok(id),
        None => bail!("no games in this save"),
    }
}

/// Render the full report for one game.
pub fn render_report(store: &ClubStore, game_id: Uuid, show_shot_chart: bool) -> Result<String> {
    let game = store.game(game_id)?;
    let team = store.team(game.team_id)?;
    let actions: Vec<Action> =
        store.game_actions(game_id)?.into_iter().cloned().collect();
    let roster = store.team_players(game.team_id)?;
    let lines = player_stat_lines(&actions);

    let board = Scoreboard::for_game(&team.name, game, &actions);

    let mut out = String::new();
    out.push_str(&format!(
        "{} {} - {} {}  [{}]\n",
        board.home.name, board.home.score, board.away.score, board.away.name, board.status_label
    ));
    out.push_str(&format!("{} ({})\n\n", game.date.format("%Y-%m-%d"), team.category.label()));

    out.push_str("##  Player            PTS  3PM  2PM  FTM  REB  AST  STL  PF\n");
    for player in roster {
        let line = lines.get(&player.id).copied().unwrap_or_default();
        out.push_str(&format!(
            "{:<3} {:<16} {:>4} {:>4} {:>4} {:>4} {:>4} {:>4} {:>4} {:>3}\n",
            player.number,
            player.name,
            line.points,
            line.threes_made,
            line.twos_made,
            line.free_throws_made,
            line.rebounds,
            line.assists,
            line.steals,
            line.fouls,
        ));
    }

    let totals = board.totals;
    out.push_str(&format!(
        "\nTotals: {} pts, {} reb, {} ast, {} stl, {} fouls\n",
        totals.points, totals.rebounds, totals.assists, totals.steals, totals.fouls
    ));

    if show_shot_chart {
        out.push_str("\nShot chart:\n");
        for row in ShotChart::from_actions(&actions).zone_summary() {
            out.push_str(&format!("  {:<16} {:>3} makes, {:>3} pts\n", row.label, row.makes, row.points));
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use hoop_core::court::CourtPosition;
    use hoop_core::models::{ActionType, GameLocation, PlayerPosition, TeamCategory};

    fn seeded() -> (ClubStore, Uuid) {
        let mut store = ClubStore::new();
        let team = store.create_team("Eagles", TeamCategory::U18).unwrap();
        let player = store.create_player("Ines", 7, PlayerPosition::PG, team.id).unwrap();
        let game = store
            .create_game("Rivals", Utc::now(), GameLocation::Home, team.id, None)
            .unwrap();
        store
            .record_action(ActionType::ThreePts, CourtPosition::center(), player.id, game.id)
            .unwrap();
        (store, game.id)
    }

    #[test]
    fn test_render_report_contains_score_and_lines() {
        let (store, game_id) = seeded();
        let report = render_report(&store, game_id, true).unwrap();

        assert!(report.contains("Eagles 3 - 0 Rivals"));
        assert!(report.contains("Ines"));
        assert!(report.contains("Beyond the arc"));
    }

    #[test]
    fn test_resolve_game_picks_latest() {
        let (mut store, game_id) = seeded();
        let team_id = store.teams()[0].id;
        store
            .create_game(
                "Old Rivals",
                Utc::now() - chrono::Duration::days(30),
                GameLocation::Away,
                team_id,
                None,
            )
            .unwrap();

        assert_eq!(resolve_game(&store, None).unwrap(), game_id);
    }

    #[test]
    fn test_resolve_game_empty_store_fails() {
        let store = ClubStore::new();
        assert!(resolve_game(&store, None).is_err());
    }
}
