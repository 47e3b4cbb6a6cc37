use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, warn};

use shotmap::analytics::{
    distinct_values, filter, goal_scorers, Criterion, HeatMap, MatchSummary, ShotFilter,
};
use shotmap::config::{Command, Config};
use shotmap::dashboard::{self, AppState};
use shotmap::match_file;
use shotmap::shots::Team;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise tracing / logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::parse();
    config.validate()?;

    let loaded = match_file::load(&config.match_file, config.skip_invalid)?;
    if loaded.skipped > 0 {
        warn!("{} invalid shot(s) were skipped", loaded.skipped);
    }
    let shots = loaded.shots();

    match &config.command {
        Command::Summary => {
            let summary = MatchSummary::from_shots(&shots);
            info!(
                "Score {}-{} ({:?})",
                loaded.log.score().home,
                loaded.log.score().away,
                summary.outcome
            );
            print_json(&summary, config.pretty)?;
        }
        Command::Shots {
            team,
            shot_type,
            half,
        } => {
            let criteria = ShotFilter::parse(team.as_deref(), shot_type.as_deref(), half.as_deref());
            let subset = filter(&shots, &criteria);
            info!("{} of {} shots match", subset.len(), shots.len());
            print_json(&subset, config.pretty)?;
        }
        Command::Filters => print_json(&distinct_values(&shots), config.pretty)?,
        Command::Heatmap { team } => {
            let team = Criterion::<Team>::parse(team.as_deref());
            let map = HeatMap::for_criterion(&shots, team, config.cell_size);
            if !map.eligible {
                warn!("Not enough shots for a meaningful heat map; building it anyway");
            }
            print_json(&map, config.pretty)?;
        }
        Command::Leaderboard => {
            print_json(&goal_scorers(&shots, &loaded.roster), config.pretty)?
        }
        Command::Serve { addr } => {
            let state = AppState {
                shots: Arc::new(shots),
                roster: Arc::new(loaded.roster.clone()),
                score: loaded.log.score(),
                cell_size: config.cell_size,
            };
            let app = dashboard::router(state);
            let addr: SocketAddr = addr
                .parse()
                .with_context(|| format!("Invalid dashboard address {}", addr))?;
            info!("Dashboard listening on http://{}", addr);
            let listener = tokio::net::TcpListener::bind(addr).await?;
            axum::serve(listener, app)
                .with_graceful_shutdown(shutdown_signal())
                .await?;
            info!("Dashboard stopped");
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", out);
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl+C: {}", e);
    }
    info!("Shutdown signal received");
}
