//! Team / shot-type / half selection over a shot log.
//!
//! Criteria come from selection controls as free text. Parsing never fails:
//! `"all"` or nothing matches everything, an unrecognised value matches
//! nothing.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;

use crate::shots::models::{Half, ShotRecord, ShotType, Team};

/// One equality predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Criterion<T> {
    All,
    Only(T),
    /// A value that names nothing in the domain
    Unmatched,
}

impl<T> Default for Criterion<T> {
    fn default() -> Self {
        Criterion::All
    }
}

impl<T: PartialEq> Criterion<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Criterion::All => true,
            Criterion::Only(wanted) => wanted == value,
            Criterion::Unmatched => false,
        }
    }
}

impl<T: FromStr> Criterion<T> {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") => Criterion::All,
            Some(s) if s.eq_ignore_ascii_case("all") => Criterion::All,
            Some(s) => s.parse().map(Criterion::Only).unwrap_or(Criterion::Unmatched),
        }
    }
}

impl<T> From<T> for Criterion<T> {
    fn from(value: T) -> Self {
        Criterion::Only(value)
    }
}

/// Conjunction of the three criteria
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShotFilter {
    pub team: Criterion<Team>,
    pub shot_type: Criterion<ShotType>,
    pub half: Criterion<Half>,
}

/// Raw criteria as they arrive from a query string or CLI flags
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterQuery {
    pub team: Option<String>,
    #[serde(rename = "type")]
    pub shot_type: Option<String>,
    pub half: Option<String>,
}

impl ShotFilter {
    pub fn team(team: Team) -> Self {
        ShotFilter {
            team: Criterion::Only(team),
            ..Default::default()
        }
    }

    pub fn parse(team: Option<&str>, shot_type: Option<&str>, half: Option<&str>) -> Self {
        ShotFilter {
            team: Criterion::parse(team),
            shot_type: Criterion::parse(shot_type),
            half: Criterion::parse(half),
        }
    }

    pub fn matches(&self, shot: &ShotRecord) -> bool {
        self.team.matches(&shot.team)
            && self.shot_type.matches(&shot.shot_type)
            && self.half.matches(&shot.half)
    }
}

impl From<&FilterQuery> for ShotFilter {
    fn from(q: &FilterQuery) -> Self {
        ShotFilter::parse(q.team.as_deref(), q.shot_type.as_deref(), q.half.as_deref())
    }
}

/// Surviving shots, in their original order.
pub fn filter(shots: &[ShotRecord], criteria: &ShotFilter) -> Vec<ShotRecord> {
    shots
        .iter()
        .filter(|s| criteria.matches(s))
        .cloned()
        .collect()
}

/// Values actually present in a log, for populating selection controls
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DistinctValues {
    pub teams: BTreeSet<Team>,
    #[serde(rename = "types")]
    pub shot_types: BTreeSet<ShotType>,
    pub halves: BTreeSet<Half>,
}

pub fn distinct_values(shots: &[ShotRecord]) -> DistinctValues {
    let mut values = DistinctValues::default();
    for shot in shots {
        values.teams.insert(shot.team);
        values.shot_types.insert(shot.shot_type);
        values.halves.insert(shot.half);
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shots::models::{GameClock, Position};

    fn shot(team: Team, shot_type: ShotType, half: Half, x: f64) -> ShotRecord {
        ShotRecord::new(
            team,
            shot_type,
            half,
            GameClock::from_seconds(60).unwrap(),
            Position::new(x, 34.0).unwrap(),
        )
    }

    fn sample() -> Vec<ShotRecord> {
        vec![
            shot(Team::Home, ShotType::Goal, Half::First, 90.0),
            shot(Team::Away, ShotType::OffTarget, Half::First, 20.0),
            shot(Team::Home, ShotType::OnTarget, Half::Second, 80.0),
            shot(Team::Away, ShotType::Goal, Half::Second, 95.0),
            shot(Team::Home, ShotType::OffTarget, Half::Second, 60.0),
        ]
    }

    #[test]
    fn test_empty_criteria_returns_input() {
        let shots = sample();
        assert_eq!(filter(&shots, &ShotFilter::default()), shots);
        assert_eq!(filter(&shots, &ShotFilter::parse(None, None, None)), shots);
        assert_eq!(
            filter(&shots, &ShotFilter::parse(Some("all"), Some("ALL"), Some(""))),
            shots
        );
    }

    #[test]
    fn test_filter_preserves_order() {
        let shots = sample();
        let home = filter(&shots, &ShotFilter::team(Team::Home));
        let xs: Vec<f64> = home.iter().map(|s| s.position.x).collect();
        assert_eq!(xs, vec![90.0, 80.0, 60.0]);
    }

    #[test]
    fn test_home_then_away_is_empty() {
        let shots = sample();
        let home = filter(&shots, &ShotFilter::team(Team::Home));
        assert!(filter(&home, &ShotFilter::team(Team::Away)).is_empty());
    }

    #[test]
    fn test_combined_criteria() {
        let shots = sample();
        let f = ShotFilter::parse(Some("home"), Some("Off Target"), Some("Second"));
        let out = filter(&shots, &f);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].position.x, 60.0);

        let goals_second = ShotFilter {
            shot_type: ShotType::Goal.into(),
            half: Half::Second.into(),
            ..Default::default()
        };
        let out = filter(&shots, &goals_second);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].team, Team::Away);
    }

    #[test]
    fn test_unknown_value_matches_nothing() {
        let shots = sample();
        let f = ShotFilter::parse(Some("visitors"), None, None);
        assert_eq!(f.team, Criterion::Unmatched);
        assert!(filter(&shots, &f).is_empty());
        assert!(filter(&shots, &ShotFilter::parse(None, Some("woodwork"), None)).is_empty());
    }

    #[test]
    fn test_filter_query_conversion() {
        let q: FilterQuery =
            serde_json::from_value(serde_json::json!({ "team": "away", "type": "goal" })).unwrap();
        let f = ShotFilter::from(&q);
        assert_eq!(f.team, Criterion::Only(Team::Away));
        assert_eq!(f.shot_type, Criterion::Only(ShotType::Goal));
        assert_eq!(f.half, Criterion::All);
    }

    #[test]
    fn test_distinct_values() {
        let values = distinct_values(&sample());
        assert_eq!(values.teams.len(), 2);
        assert_eq!(values.shot_types.len(), 3);
        assert_eq!(values.halves.len(), 2);

        let only_home_first = vec![shot(Team::Home, ShotType::Goal, Half::First, 90.0)];
        let values = distinct_values(&only_home_first);
        assert!(values.teams.contains(&Team::Home));
        assert!(!values.teams.contains(&Team::Away));
        assert_eq!(values.halves.len(), 1);
    }

    #[test]
    fn test_distinct_values_empty_log() {
        assert_eq!(distinct_values(&[]), DistinctValues::default());
    }
}
