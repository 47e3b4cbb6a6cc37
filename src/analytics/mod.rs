//! Pure views over a shot log: counts, filters, density grid and its colors.
//!
//! Nothing here mutates its input or fails on well-typed data.

pub mod aggregator;
pub mod color;
pub mod density;
pub mod eligibility;
pub mod filter;
pub mod heatmap;
pub mod leaderboard;

pub use aggregator::{
    accuracy, conversion_rate, half_stats, team_stats, total_stats, MatchOutcome, MatchSummary,
    ShotStats, TotalStats,
};
pub use color::{color_for, ColorToken, HeatBand};
pub use density::{build_grid, max_density, DensityGrid, DEFAULT_CELL_SIZE};
pub use eligibility::{can_show_for_team, can_show_overall, MIN_SHOTS_FOR_HEATMAP};
pub use filter::{distinct_values, filter, Criterion, DistinctValues, FilterQuery, ShotFilter};
pub use heatmap::{HeatMap, HeatMapScope};
pub use leaderboard::{goal_scorers, ScorerEntry};
