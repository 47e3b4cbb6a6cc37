use clap::{Parser, Subcommand};

use crate::analytics::density::MIN_CELL_SIZE;
use crate::shots::models::PITCH_LENGTH;

/// Shot analytics for a recorded match
#[derive(Parser, Debug, Clone)]
#[command(name = "shotmap", version, about)]
pub struct Config {
    /// Recorded match (JSON with `shots` and optional `roster`)
    #[arg(long, env = "SHOTMAP_MATCH_FILE")]
    pub match_file: String,

    /// Density grid cell size in pitch units
    #[arg(long, env = "SHOTMAP_CELL_SIZE", default_value = "5.0")]
    pub cell_size: f64,

    /// Drop invalid shots instead of refusing the whole file
    #[arg(long, env = "SHOTMAP_SKIP_INVALID", default_value = "false")]
    pub skip_invalid: bool,

    /// Pretty-print JSON output
    #[arg(long, default_value = "false")]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Score, per-team and per-half counts, accuracy and conversion
    Summary,
    /// Shots matching the given criteria ("all" or omitted matches everything)
    Shots {
        #[arg(long)]
        team: Option<String>,
        #[arg(long = "type")]
        shot_type: Option<String>,
        #[arg(long)]
        half: Option<String>,
    },
    /// Teams, shot types and halves present in the log
    Filters,
    /// Density grid and cell colors, overall or for one team
    Heatmap {
        #[arg(long)]
        team: Option<String>,
    },
    /// Goal scorers, most goals first
    Leaderboard,
    /// Serve the read-only JSON dashboard
    Serve {
        /// Dashboard listen address
        #[arg(long, env = "SHOTMAP_DASHBOARD_ADDR", default_value = "127.0.0.1:8080")]
        addr: String,
    },
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        if !self.cell_size.is_finite() || self.cell_size <= 0.0 {
            anyhow::bail!("cell_size must be a positive number");
        }
        if self.cell_size < MIN_CELL_SIZE {
            anyhow::bail!("cell_size must be at least {}", MIN_CELL_SIZE);
        }
        if self.cell_size > PITCH_LENGTH {
            anyhow::bail!("cell_size must not exceed the pitch length ({})", PITCH_LENGTH);
        }
        if self.match_file.trim().is_empty() {
            anyhow::bail!("SHOTMAP_MATCH_FILE must not be empty");
        }
        if let Command::Heatmap { team: Some(team) } = &self.command {
            if !team.eq_ignore_ascii_case("all") && team.parse::<crate::shots::Team>().is_err() {
                anyhow::bail!("heatmap --team must be home, away or all (got `{}`)", team);
            }
        }
        Ok(())
    }
}
