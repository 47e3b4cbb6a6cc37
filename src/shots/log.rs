use serde::Serialize;
use tracing::debug;

use crate::error::ValidationError;
use crate::shots::models::{Attribution, ShotRecord, ShotType, Team};
use crate::shots::roster::Roster;

/// Running scoreline
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Score {
    pub home: u32,
    pub away: u32,
}

impl Score {
    fn slot(&mut self, team: Team) -> &mut u32 {
        match team {
            Team::Home => &mut self.home,
            Team::Away => &mut self.away,
        }
    }
}

/// Something that happened during capture
#[derive(Debug, Clone, PartialEq)]
pub enum MatchEvent {
    ShotRecorded(ShotRecord),
    GoalAttributed { shot_index: usize, player_id: String },
}

/// Append-only shot log for one match, with LIFO undo of the latest shot.
///
/// Analytics never look at this directly: they receive [`MatchLog::snapshot`].
#[derive(Debug, Clone, Default)]
pub struct MatchLog {
    shots: Vec<ShotRecord>,
    score: Score,
}

impl MatchLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one event and return the scoreline after it.
    ///
    /// Attribution checks the target is a goal and the scorer is on `roster`.
    pub fn apply(&mut self, event: MatchEvent, roster: &Roster) -> Result<Score, ValidationError> {
        match event {
            MatchEvent::ShotRecorded(shot) => {
                if shot.shot_type == ShotType::Goal {
                    *self.score.slot(shot.team) += 1;
                }
                debug!(
                    "Shot recorded: {} {} at {} ({:.1}, {:.1})",
                    shot.team, shot.shot_type, shot.clock, shot.position.x, shot.position.y
                );
                self.shots.push(shot);
            }
            MatchEvent::GoalAttributed {
                shot_index,
                player_id,
            } => {
                let len = self.shots.len();
                let shot = self
                    .shots
                    .get_mut(shot_index)
                    .ok_or(ValidationError::ShotIndexOutOfRange {
                        index: shot_index,
                        len,
                    })?;
                if shot.shot_type != ShotType::Goal {
                    return Err(ValidationError::AttributionOnNonGoal(shot_index));
                }
                let player = roster
                    .get(&player_id)
                    .ok_or_else(|| ValidationError::UnknownPlayer(player_id.clone()))?;
                shot.attribution = Some(Attribution {
                    player_id: player.id.clone(),
                    player_name: Some(player.name.clone()),
                });
            }
        }
        Ok(self.score)
    }

    /// Remove the most recent shot, reversing its effect on the score.
    pub fn undo(&mut self) -> Option<ShotRecord> {
        let shot = self.shots.pop()?;
        if shot.shot_type == ShotType::Goal {
            let slot = self.score.slot(shot.team);
            *slot = slot.saturating_sub(1);
        }
        debug!("Undid shot: {} {} at {}", shot.team, shot.shot_type, shot.clock);
        Some(shot)
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn len(&self) -> usize {
        self.shots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shots.is_empty()
    }

    /// Owned copy of the log for analysis.
    pub fn snapshot(&self) -> Vec<ShotRecord> {
        self.shots.clone()
    }

    pub fn shots(&self) -> &[ShotRecord] {
        &self.shots
    }
}
