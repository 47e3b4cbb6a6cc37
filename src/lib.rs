//! Shot analytics for a football match.
//!
//! A capture surface appends [`shots::ShotRecord`]s to a [`shots::MatchLog`];
//! the [`analytics`] functions turn a snapshot of that log into counts,
//! filtered views and a weighted density grid for heat-map overlays.

pub mod analytics;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod match_file;
pub mod shots;

pub use error::ValidationError;
