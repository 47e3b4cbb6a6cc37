//! Shot counts, accuracy and conversion.
//!
//! A goal is counted twice: once as a goal and once as on target.

use serde::Serialize;

use crate::shots::models::{Half, ShotRecord, ShotType, Team};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShotStats {
    pub goals: u32,
    /// Includes goals
    pub on_target: u32,
    pub off_target: u32,
    pub total: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TotalStats {
    pub home: ShotStats,
    pub away: ShotStats,
    pub total: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchOutcome {
    HomeWin,
    AwayWin,
    Draw,
}

pub fn stats<'a>(shots: impl IntoIterator<Item = &'a ShotRecord>) -> ShotStats {
    let mut s = ShotStats::default();
    for shot in shots {
        match shot.shot_type {
            ShotType::Goal => {
                s.goals += 1;
                s.on_target += 1;
            }
            ShotType::OnTarget => s.on_target += 1,
            ShotType::OffTarget => s.off_target += 1,
        }
        s.total += 1;
    }
    s
}

pub fn team_stats(shots: &[ShotRecord], team: Team) -> ShotStats {
    stats(shots.iter().filter(|s| s.team == team))
}

pub fn half_stats(shots: &[ShotRecord], team: Team, half: Half) -> ShotStats {
    stats(shots.iter().filter(|s| s.team == team && s.half == half))
}

pub fn total_stats(shots: &[ShotRecord]) -> TotalStats {
    TotalStats {
        home: team_stats(shots, Team::Home),
        away: team_stats(shots, Team::Away),
        total: shots.len() as u32,
    }
}

/// Percentage of shots on target (goals included). `0.0` for no shots.
pub fn accuracy(shots: &[ShotRecord]) -> f64 {
    stats(shots).accuracy()
}

/// Percentage of shots that became goals. `0.0` for no shots.
pub fn conversion_rate(shots: &[ShotRecord]) -> f64 {
    stats(shots).conversion_rate()
}

impl ShotStats {
    pub fn accuracy(&self) -> f64 {
        percent(self.on_target, self.total)
    }

    pub fn conversion_rate(&self) -> f64 {
        percent(self.goals, self.total)
    }
}

impl TotalStats {
    pub fn outcome(&self) -> MatchOutcome {
        match self.home.goals.cmp(&self.away.goals) {
            std::cmp::Ordering::Greater => MatchOutcome::HomeWin,
            std::cmp::Ordering::Less => MatchOutcome::AwayWin,
            std::cmp::Ordering::Equal => MatchOutcome::Draw,
        }
    }
}

fn percent(part: u32, whole: u32) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    100.0 * part as f64 / whole as f64
}

/// Per-team, per-half breakdown
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSummary {
    pub overall: ShotStats,
    pub first_half: ShotStats,
    pub second_half: ShotStats,
    pub accuracy: f64,
    pub conversion_rate: f64,
}

/// Everything a score/accuracy panel needs, computed in one pass over the log
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSummary {
    pub totals: TotalStats,
    pub home: TeamSummary,
    pub away: TeamSummary,
    pub accuracy: f64,
    pub conversion_rate: f64,
    pub outcome: MatchOutcome,
}

impl MatchSummary {
    pub fn from_shots(shots: &[ShotRecord]) -> Self {
        let totals = total_stats(shots);
        let team = |team: Team| {
            let overall = team_stats(shots, team);
            TeamSummary {
                overall,
                first_half: half_stats(shots, team, Half::First),
                second_half: half_stats(shots, team, Half::Second),
                accuracy: overall.accuracy(),
                conversion_rate: overall.conversion_rate(),
            }
        };
        MatchSummary {
            totals,
            home: team(Team::Home),
            away: team(Team::Away),
            accuracy: accuracy(shots),
            conversion_rate: conversion_rate(shots),
            outcome: totals.outcome(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shots::models::{GameClock, Position};
    use approx::assert_relative_eq;

    fn shot(team: Team, shot_type: ShotType, half: Half) -> ShotRecord {
        ShotRecord::new(
            team,
            shot_type,
            half,
            GameClock::from_seconds(match half {
                Half::First => 600,
                Half::Second => 3600,
            })
            .unwrap(),
            Position::new(88.0, 30.0).unwrap(),
        )
    }

    /// Seven-shot match: home 2 goals, 1 on target, 1 off target (second half);
    /// away 1 goal, 1 on target, 1 off target.
    fn seven_shot_match() -> Vec<ShotRecord> {
        vec![
            shot(Team::Home, ShotType::Goal, Half::First),
            shot(Team::Home, ShotType::Goal, Half::First),
            shot(Team::Home, ShotType::OnTarget, Half::First),
            shot(Team::Home, ShotType::OffTarget, Half::Second),
            shot(Team::Away, ShotType::Goal, Half::First),
            shot(Team::Away, ShotType::OnTarget, Half::Second),
            shot(Team::Away, ShotType::OffTarget, Half::Second),
        ]
    }

    #[test]
    fn test_total_stats_seven_shot_match() {
        let totals = total_stats(&seven_shot_match());
        assert_eq!(
            totals.home,
            ShotStats {
                goals: 2,
                on_target: 3,
                off_target: 1,
                total: 4
            }
        );
        assert_eq!(
            totals.away,
            ShotStats {
                goals: 1,
                on_target: 2,
                off_target: 1,
                total: 3
            }
        );
        assert_eq!(totals.total, 7);
        assert_eq!(totals.outcome(), MatchOutcome::HomeWin);
    }

    #[test]
    fn test_goals_are_subset_of_on_target() {
        let shots = seven_shot_match();
        for team in Team::ALL {
            let s = team_stats(&shots, team);
            assert!(s.on_target >= s.goals);
            assert_eq!(s.total, s.goals + (s.on_target - s.goals) + s.off_target);
        }
    }

    #[test]
    fn test_empty_log_is_all_zero() {
        assert_eq!(team_stats(&[], Team::Home), ShotStats::default());
        assert_eq!(total_stats(&[]), TotalStats::default());
        assert_relative_eq!(accuracy(&[]), 0.0);
        assert_relative_eq!(conversion_rate(&[]), 0.0);
        assert_eq!(total_stats(&[]).outcome(), MatchOutcome::Draw);
    }

    #[test]
    fn test_team_with_no_shots_is_zero() {
        let shots = vec![shot(Team::Home, ShotType::Goal, Half::First)];
        assert_eq!(team_stats(&shots, Team::Away), ShotStats::default());
    }

    #[test]
    fn test_half_stats() {
        let shots = seven_shot_match();
        let home_second = half_stats(&shots, Team::Home, Half::Second);
        assert_eq!(home_second.off_target, 1);
        assert_eq!(home_second.total, 1);
        let away_first = half_stats(&shots, Team::Away, Half::First);
        assert_eq!(away_first.goals, 1);
        assert_eq!(away_first.on_target, 1);
    }

    #[test]
    fn test_accuracy_and_conversion() {
        let shots = seven_shot_match();
        // 5 of 7 on target, 3 of 7 scored
        assert_relative_eq!(accuracy(&shots), 500.0 / 7.0, epsilon = 1e-9);
        assert_relative_eq!(conversion_rate(&shots), 300.0 / 7.0, epsilon = 1e-9);
    }

    #[test]
    fn test_outcome_draw_and_away_win() {
        let draw = vec![
            shot(Team::Home, ShotType::Goal, Half::First),
            shot(Team::Away, ShotType::Goal, Half::Second),
        ];
        assert_eq!(total_stats(&draw).outcome(), MatchOutcome::Draw);
        let away = vec![shot(Team::Away, ShotType::Goal, Half::Second)];
        assert_eq!(total_stats(&away).outcome(), MatchOutcome::AwayWin);
    }

    #[test]
    fn test_match_summary() {
        let summary = MatchSummary::from_shots(&seven_shot_match());
        assert_eq!(summary.home.first_half.goals, 2);
        assert_eq!(summary.home.second_half.total, 1);
        assert_relative_eq!(summary.home.accuracy, 75.0, epsilon = 1e-9);
        assert_relative_eq!(summary.away.conversion_rate, 100.0 / 3.0, epsilon = 1e-9);
        assert_eq!(summary.outcome, MatchOutcome::HomeWin);
    }
}
