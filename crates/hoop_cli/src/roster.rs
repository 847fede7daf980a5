//! Roster CSV ingestion
//!
//! Expected columns: `name,number,position` with a header row. Position is
//! a standard code (PG/SG/SF/PF/C).

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use hoop_core::models::{PlayerPosition, TeamCategory};
use hoop_core::store::ClubStore;
use hoop_core::Team;

#[derive(Debug, Deserialize)]
struct RosterRow {
    name: String,
    number: u8,
    position: String,
}

/// Parse a team category code (U11/U13/U15/U18/SENIOR).
pub fn parse_category(code: &str) -> Result<TeamCategory> {
    match code.trim().to_ascii_uppercase().as_str() {
        "U11" => Ok(TeamCategory::U11),
        "U13" => Ok(TeamCategory::U13),
        "U15" => Ok(TeamCategory::U15),
        "U18" => Ok(TeamCategory::U18),
        "SENIOR" => Ok(TeamCategory::Senior),
        other => bail!("unknown team category: {other}"),
    }
}

/// Import a roster CSV into a fresh team inside the store.
///
/// Returns the created team and the number of players imported.
pub fn import_roster(
    store: &mut ClubStore,
    csv_path: &Path,
    team_name: &str,
    category: TeamCategory,
) -> Result<(Team, usize)> {
    let mut reader = csv::Reader::from_path(csv_path)
        .with_context(|| format!("cannot open roster CSV {}", csv_path.display()))?;

    let team = store.create_team(team_name, category)?;

    let mut imported = 0usize;
    for (idx, row) in reader.deserialize::<RosterRow>().enumerate() {
        let row = row.with_context(|| format!("bad roster row {}", idx + 1))?;
        let position: PlayerPosition = row
            .position
            .parse()
            .map_err(|e: String| anyhow::anyhow!(e))
            .with_context(|| format!("bad roster row {}", idx + 1))?;
        store
            .create_player(row.name, row.number, position, team.id)
            .with_context(|| format!("bad roster row {}", idx + 1))?;
        imported += 1;
    }

    if imported == 0 {
        bail!("roster CSV {} contains no players", csv_path.display());
    }

    Ok((team, imported))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_import_valid_roster() {
        let csv = write_csv("name,number,position\nInes,7,PG\nMaya,12,C\nLou,21,sf\n");
        let mut store = ClubStore::new();

        let (team, count) =
            import_roster(&mut store, csv.path(), "Eagles", TeamCategory::U15).unwrap();
        assert_eq!(count, 3);

        let roster = store.team_players(team.id).unwrap();
        assert_eq!(roster.len(), 3);
        assert_eq!(roster[0].number, 7);
        assert_eq!(roster[2].position, PlayerPosition::SF);
    }

    #[test]
    fn test_import_rejects_bad_position() {
        let csv = write_csv("name,number,position\nInes,7,QB\n");
        let mut store = ClubStore::new();
        assert!(import_roster(&mut store, csv.path(), "Eagles", TeamCategory::U15).is_err());
    }

    #[test]
    fn test_import_rejects_duplicate_numbers() {
        let csv = write_csv("name,number,position\nInes,7,PG\nMaya,7,C\n");
        let mut store = ClubStore::new();
        assert!(import_roster(&mut store, csv.path(), "Eagles", TeamCategory::U15).is_err());
    }

    #[test]
    fn test_import_rejects_empty_roster() {
        let csv = write_csv("name,number,position\n");
        let mut store = ClubStore::new();
        assert!(import_roster(&mut store, csv.path(), "Eagles", TeamCategory::U15).is_err());
    }

    #[test]
    fn test_parse_category_codes() {
        assert_eq!(parse_category("u13").unwrap(), TeamCategory::U13);
        assert_eq!(parse_category("SENIOR").unwrap(), TeamCategory::Senior);
        assert!(parse_category("U99").is_err());
    }
}
