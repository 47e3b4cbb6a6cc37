//! Weighted shot density over the pitch.
//!
//! The pitch is cut into square cells of side `cell_size` and every included
//! shot adds its weight to the cell it falls in. Off-target efforts from the
//! defending half carry no information about pressure and are dropped; from
//! the attacking half they count for less than an effort on target.
//!
//! Team-specific maps are built from an already filtered log.

use serde::Serialize;
use tracing::debug;

use crate::shots::models::{ShotRecord, ShotType, PITCH_LENGTH, PITCH_WIDTH};

pub const DEFAULT_CELL_SIZE: f64 = 5.0;

/// Smallest cell size the builder honours; finer requests are raised to it
pub const MIN_CELL_SIZE: f64 = 0.5;

/// Weight of an off-target shot from the attacking half
pub const OFF_TARGET_ATTACKING_WEIGHT: f64 = 0.4;

/// Row-major grid: `cells[row][col]`, rows along y, columns along x
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DensityGrid {
    pub cell_size: f64,
    pub rows: usize,
    pub cols: usize,
    pub cells: Vec<Vec<f64>>,
}

/// Contribution of one shot to the grid. `0.0` means excluded.
pub fn shot_weight(shot: &ShotRecord) -> f64 {
    match shot.shot_type {
        ShotType::Goal | ShotType::OnTarget => 1.0,
        ShotType::OffTarget if shot.position.in_attacking_half() => OFF_TARGET_ATTACKING_WEIGHT,
        ShotType::OffTarget => 0.0,
    }
}

/// Grid dimensions `(rows, cols)` for a cell size.
pub fn grid_dimensions(cell_size: f64) -> (usize, usize) {
    let cell_size = sanitize_cell_size(cell_size);
    (
        (PITCH_WIDTH / cell_size).ceil() as usize,
        (PITCH_LENGTH / cell_size).ceil() as usize,
    )
}

fn sanitize_cell_size(cell_size: f64) -> f64 {
    debug_assert!(
        cell_size.is_finite() && cell_size > 0.0,
        "cell_size must be positive"
    );
    if cell_size.is_finite() && cell_size > 0.0 {
        cell_size.max(MIN_CELL_SIZE)
    } else {
        DEFAULT_CELL_SIZE
    }
}

impl DensityGrid {
    pub fn empty(cell_size: f64) -> Self {
        let cell_size = sanitize_cell_size(cell_size);
        let (rows, cols) = grid_dimensions(cell_size);
        DensityGrid {
            cell_size,
            rows,
            cols,
            cells: vec![vec![0.0; cols]; rows],
        }
    }

    /// `(row, col)` of the cell holding a point. Points on the far touchline
    /// or goal line land in the last cell.
    pub fn cell_index(&self, x: f64, y: f64) -> (usize, usize) {
        let col = ((x / self.cell_size).floor().max(0.0) as usize).min(self.cols - 1);
        let row = ((y / self.cell_size).floor().max(0.0) as usize).min(self.rows - 1);
        (row, col)
    }

    pub fn value_at(&self, x: f64, y: f64) -> f64 {
        let (row, col) = self.cell_index(x, y);
        self.cells[row][col]
    }

    pub fn add(&mut self, x: f64, y: f64, weight: f64) {
        let (row, col) = self.cell_index(x, y);
        self.cells[row][col] += weight;
    }

    pub fn max_density(&self) -> f64 {
        max_density(self)
    }

    /// Sum of all cell weights.
    pub fn total_weight(&self) -> f64 {
        self.cells.iter().flatten().sum()
    }
}

pub fn build_grid(shots: &[ShotRecord], cell_size: f64) -> DensityGrid {
    let mut grid = DensityGrid::empty(cell_size);
    let mut included = 0usize;
    for shot in shots {
        let weight = shot_weight(shot);
        if weight <= 0.0 {
            continue;
        }
        grid.add(shot.position.x, shot.position.y, weight);
        included += 1;
    }
    debug!(
        "Density grid {}x{} (cell {}): {} of {} shots included",
        grid.rows,
        grid.cols,
        grid.cell_size,
        included,
        shots.len()
    );
    grid
}

pub fn max_density(grid: &DensityGrid) -> f64 {
    grid.cells.iter().flatten().copied().fold(0.0, f64::max)
}
