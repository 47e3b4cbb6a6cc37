use serde::Serialize;

use crate::analytics::color::{color_for, ColorToken};
use crate::analytics::density::{build_grid, DensityGrid};
use crate::analytics::eligibility::{can_show_for_team, can_show_overall};
use crate::analytics::filter::{filter, Criterion, ShotFilter};
use crate::shots::models::{ShotRecord, Team};

/// Which shots a heat map was built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HeatMapScope {
    Overall,
    Team(Team),
    /// The requested team names nothing; the map is empty and ineligible
    Unmatched,
}

/// Density grid plus the paint for each cell, ready for an overlay
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatMap {
    pub scope: HeatMapScope,
    pub eligible: bool,
    pub shot_count: usize,
    pub max_density: f64,
    pub grid: DensityGrid,
    pub colors: Vec<Vec<ColorToken>>,
}

impl HeatMap {
    /// Build the overlay for the whole log, or for one team's shots only.
    pub fn build(shots: &[ShotRecord], team: Option<Team>, cell_size: f64) -> Self {
        let criterion = team.map(Criterion::Only).unwrap_or(Criterion::All);
        Self::for_criterion(shots, criterion, cell_size)
    }

    /// Build from a parsed team selection. An unmatched selection yields an
    /// empty map that keeps its scope, so it can't pass for the overall view.
    pub fn for_criterion(shots: &[ShotRecord], team: Criterion<Team>, cell_size: f64) -> Self {
        let (scope, subset, eligible) = match team {
            Criterion::All => (HeatMapScope::Overall, shots.to_vec(), can_show_overall(shots)),
            Criterion::Only(t) => (
                HeatMapScope::Team(t),
                filter(shots, &ShotFilter::team(t)),
                can_show_for_team(shots, t),
            ),
            Criterion::Unmatched => (HeatMapScope::Unmatched, Vec::new(), false),
        };
        let grid = build_grid(&subset, cell_size);
        let max_density = grid.max_density();
        let colors: Vec<Vec<ColorToken>> = grid
            .cells
            .iter()
            .map(|row| row.iter().map(|v| color_for(*v, max_density)).collect())
            .collect();
        HeatMap {
            scope,
            eligible,
            shot_count: subset.len(),
            max_density,
            grid,
            colors,
        }
    }
}
