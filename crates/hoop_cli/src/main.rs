//! HoopStats CLI
//!
//! Roster CSV import, save-file inspection and game reports.

mod report;
mod roster;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use uuid::Uuid;

use hoop_core::save::SaveManager;
use hoop_core::store::ClubStore;

#[derive(Parser)]
#[command(name = "hoop")]
#[command(about = "HoopStats club saves: import rosters, inspect, report", long_about = None)]
struct Cli {
    /// Directory holding club save files
    #[arg(long, default_value = ".")]
    dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a club save from a roster CSV
    Import {
        /// Input roster CSV (name,number,position)
        #[arg(long)]
        csv: PathBuf,

        /// Team name
        #[arg(long)]
        team: String,

        /// Team category (U11/U13/U15/U18/SENIOR)
        #[arg(long, default_value = "SENIOR")]
        category: String,

        /// Save name to write
        #[arg(long, default_value = "club")]
        name: String,

        /// Reload the save after writing and compare entity counts
        #[arg(long, default_value = "false")]
        verify: bool,
    },

    /// Print save-file metadata and verify its checksum
    Inspect {
        /// Save name to inspect
        #[arg(long, default_value = "club")]
        name: String,
    },

    /// Print a game's scoreboard, box score and shot chart
    Report {
        /// Save name to read
        #[arg(long, default_value = "club")]
        name: String,

        /// Game id; defaults to the most recent game
        #[arg(long)]
        game: Option<Uuid>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let manager = SaveManager::new(&cli.dir);

    match cli.command {
        Commands::Import { csv, team, category, name, verify } => {
            let category = roster::parse_category(&category)?;
            let mut store = ClubStore::new();
            let (created, count) = roster::import_roster(&mut store, &csv, &team, category)?;

            manager.save_named(&name, &store.to_save())?;
            println!("Imported {} players into team '{}' ({})", count, created.name, name);

            if verify {
                let reloaded = ClubStore::from_save(&manager.load_named(&name)?);
                let roster_count = reloaded.team_players(created.id)?.len();
                anyhow::ensure!(
                    roster_count == count,
                    "verify failed: wrote {} players, reloaded {}",
                    count,
                    roster_count
                );
                println!("Verify OK: {} players reloaded", roster_count);
            }
        }

        Commands::Inspect { name } => {
            let info = manager
                .info(&name)?
                .with_context(|| format!("no save named '{}' in {}", name, cli.dir.display()))?;
            println!("Save:     {}", info.name);
            println!("Version:  {}", info.version);
            println!("Saved at: {} (unix ms)", info.timestamp);
            println!("Teams:    {}", info.team_count);
            println!("Games:    {}", info.game_count);
            println!("Actions:  {}", info.action_count);
            println!("Checksum: OK");
        }

        Commands::Report { name, game } => {
            let save = manager.load_named(&name)?;
            let show_shot_chart = save.settings.show_shot_charts;
            let store = ClubStore::from_save(&save);
            let game_id = report::resolve_game(&store, game)?;
            print!("{}", report::render_report(&store, game_id, show_shot_chart)?);
        }
    }

    Ok(())
}
