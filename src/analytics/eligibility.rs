//! Whether there is enough data to offer a heat map.
//!
//! Advisory only: the grid builder will build a grid from any number of shots.

use crate::analytics::filter::{filter, ShotFilter};
use crate::shots::models::{ShotRecord, Team};

pub const MIN_SHOTS_FOR_HEATMAP: usize = 10;

pub fn can_show_overall(shots: &[ShotRecord]) -> bool {
    shots.len() >= MIN_SHOTS_FOR_HEATMAP
}

pub fn can_show_for_team(shots: &[ShotRecord], team: Team) -> bool {
    filter(shots, &ShotFilter::team(team)).len() >= MIN_SHOTS_FOR_HEATMAP
}
