use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::{info, warn};

use crate::shots::log::{MatchEvent, MatchLog};
use crate::shots::models::{ShotRecord, Team};
use crate::shots::roster::Roster;
use crate::shots::validation::{PlayerDraft, ShotDraft};

/// On-disk shape of a recorded match
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchFile {
    pub home_name: Option<String>,
    pub away_name: Option<String>,
    #[serde(default)]
    pub roster: Vec<PlayerDraft>,
    #[serde(default)]
    pub shots: Vec<ShotDraft>,
}

/// A match that has been through validation and replayed into a log
#[derive(Debug, Clone)]
pub struct LoadedMatch {
    pub log: MatchLog,
    pub roster: Roster,
    pub skipped: usize,
}

impl LoadedMatch {
    pub fn shots(&self) -> Vec<ShotRecord> {
        self.log.snapshot()
    }
}

pub fn load(path: impl AsRef<Path>, skip_invalid: bool) -> Result<LoadedMatch> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read match file {}", path.display()))?;
    let file: MatchFile = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse match file {}", path.display()))?;
    let loaded = replay(file, skip_invalid)?;
    info!(
        "Loaded {} shots from {} (score {}-{}, {} skipped, {} players)",
        loaded.log.len(),
        path.display(),
        loaded.log.score().home,
        loaded.log.score().away,
        loaded.skipped,
        loaded.roster.len()
    );
    Ok(loaded)
}

/// Validate the roster and every shot, then apply the shots in file order.
///
/// A scorer named on a goal is attributed through the log, so the player
/// must be on the roster and the stored name is the roster's. With
/// `skip_invalid` an unknown scorer leaves the goal unattributed.
pub fn replay(file: MatchFile, skip_invalid: bool) -> Result<LoadedMatch> {
    let roster = Roster::from_drafts(&file.roster).context("Invalid roster")?;
    let mut log = MatchLog::new();
    let mut skipped = 0usize;

    for (index, draft) in file.shots.iter().enumerate() {
        let mut shot = match draft.validate() {
            Ok(shot) => shot,
            Err(e) if skip_invalid => {
                warn!("Skipping shot #{}: {}", index, e);
                skipped += 1;
                continue;
            }
            Err(e) => {
                warn!("Rejected shot #{}: {}", index, e);
                return Err(e).with_context(|| format!("Invalid shot #{}", index));
            }
        };
        if draft.team_name.is_none() {
            let name = match shot.team {
                Team::Home => file.home_name.as_deref(),
                Team::Away => file.away_name.as_deref(),
            };
            if let Some(name) = name {
                shot.team_name = name.to_string();
            }
        }
        let attribution = shot.attribution.take();
        log.apply(MatchEvent::ShotRecorded(shot), &roster)
            .with_context(|| format!("Failed to record shot #{}", index))?;

        if let Some(attribution) = attribution {
            let event = MatchEvent::GoalAttributed {
                shot_index: log.len() - 1,
                player_id: attribution.player_id,
            };
            match log.apply(event, &roster) {
                Ok(_) => {}
                Err(e) if skip_invalid => {
                    warn!("Leaving shot #{} unattributed: {}", index, e);
                }
                Err(e) => {
                    warn!("Rejected attribution on shot #{}: {}", index, e);
                    return Err(e).with_context(|| format!("Invalid attribution on shot #{}", index));
                }
            }
        }
    }

    Ok(LoadedMatch {
        log,
        roster,
        skipped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use serde_json::json;

    fn file(shots: serde_json::Value) -> MatchFile {
        serde_json::from_value(json!({
            "home_name": "Rovers",
            "roster": [
                { "id": "p9", "name": "Nine", "number": 9 },
                { "id": "p10", "name": "Ten", "number": "10" }
            ],
            "shots": shots
        }))
        .unwrap()
    }

    #[test]
    fn test_replay_builds_score_and_names() {
        let f = file(json!([
            { "team": "home", "type": "Goal", "half": "First", "gameTime": "10:00",
              "position": { "x": 95, "y": 34 }, "playerId": "p9" },
            { "team": "away", "type": "Off Target", "half": "Second", "clockSeconds": 3000,
              "position": { "x": 70, "y": 20 } }
        ]));
        let loaded = replay(f, false).unwrap();
        assert_eq!(loaded.log.len(), 2);
        assert_eq!(loaded.log.score().home, 1);
        assert_eq!(loaded.log.score().away, 0);
        let shots = loaded.shots();
        assert_eq!(shots[0].team_name, "Rovers");
        assert_eq!(shots[1].team_name, "Away");
        assert_eq!(shots[1].game_time(), "50:00");
        assert_eq!(loaded.roster.len(), 2);
    }

    #[test]
    fn test_invalid_shot_fails_strict_load() {
        let f = file(json!([
            { "team": "home", "type": "Goal", "half": "First", "gameTime": "10:00",
              "position": { "x": 130, "y": 34 } }
        ]));
        let err = replay(f, false).unwrap_err();
        assert!(err.to_string().contains("Invalid shot #0"));
        assert!(matches!(
            err.downcast_ref::<ValidationError>(),
            Some(ValidationError::PositionOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_invalid_shot_skipped_when_allowed() {
        let f = file(json!([
            { "type": "Goal", "half": "First", "gameTime": "10:00",
              "position": { "x": 90, "y": 34 } },
            { "team": "away", "type": "Goal", "half": "First", "gameTime": "11:00",
              "position": { "x": 90, "y": 34 } }
        ]));
        let loaded = replay(f, true).unwrap();
        assert_eq!(loaded.skipped, 1);
        assert_eq!(loaded.log.len(), 1);
        assert_eq!(loaded.log.score().away, 1);
    }

    #[test]
    fn test_scorer_name_comes_from_roster() {
        let f = file(json!([
            { "team": "home", "type": "Goal", "half": "First", "gameTime": "10:00",
              "position": { "x": 95, "y": 34 }, "playerId": "p9", "playerName": "Someone Else" }
        ]));
        let loaded = replay(f, false).unwrap();
        let attribution = loaded.shots()[0].attribution.clone().unwrap();
        assert_eq!(attribution.player_id, "p9");
        assert_eq!(attribution.player_name.as_deref(), Some("Nine"));
    }

    #[test]
    fn test_scorer_missing_from_roster_fails_strict_load() {
        let f = file(json!([
            { "team": "home", "type": "Goal", "half": "First", "gameTime": "10:00",
              "position": { "x": 95, "y": 34 }, "playerId": "ghost", "playerName": "Bogus" }
        ]));
        let err = replay(f, false).unwrap_err();
        assert!(err.to_string().contains("Invalid attribution on shot #0"));
        assert_eq!(
            err.downcast_ref::<ValidationError>(),
            Some(&ValidationError::UnknownPlayer("ghost".into()))
        );
    }

    #[test]
    fn test_scorer_missing_from_roster_left_unattributed_when_skipping() {
        let f = file(json!([
            { "team": "home", "type": "Goal", "half": "First", "gameTime": "10:00",
              "position": { "x": 95, "y": 34 }, "playerId": "ghost", "playerName": "Bogus" }
        ]));
        let loaded = replay(f, true).unwrap();
        assert_eq!(loaded.log.len(), 1);
        assert_eq!(loaded.skipped, 0);
        assert_eq!(loaded.log.score().home, 1);
        assert!(loaded.shots()[0].attribution.is_none());
    }

    #[test]
    fn test_bad_clock_seconds_skipped_when_allowed() {
        let f = file(json!([
            { "team": "home", "type": "On Target", "half": "First", "clockSeconds": 12.5,
              "position": { "x": 90, "y": 34 } },
            { "team": "home", "type": "On Target", "half": "First", "clockSeconds": "600",
              "position": { "x": 90, "y": 34 } }
        ]));
        let loaded = replay(f, true).unwrap();
        assert_eq!(loaded.skipped, 1);
        assert_eq!(loaded.shots()[0].game_time(), "10:00");
    }

    #[test]
    fn test_roster_entry_without_name_rejected() {
        let f: MatchFile = serde_json::from_value(json!({
            "roster": [{ "id": "a", "number": 7 }]
        }))
        .unwrap();
        let err = replay(f, false).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ValidationError>(),
            Some(&ValidationError::MissingField("name"))
        );
    }

    #[test]
    fn test_duplicate_roster_number_rejected() {
        let f: MatchFile = serde_json::from_value(json!({
            "roster": [
                { "id": "a", "name": "Alice", "number": 7 },
                { "id": "b", "name": "Bea", "number": 7 }
            ]
        }))
        .unwrap();
        let err = replay(f, false).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ValidationError>(),
            Some(&ValidationError::DuplicatePlayerNumber {
                number: 7,
                existing_name: "Alice".into(),
            })
        );
    }

    #[test]
    fn test_load_reads_file() {
        let path = std::env::temp_dir().join(format!("shotmap-load-{}.json", std::process::id()));
        std::fs::write(
            &path,
            json!({ "shots": [
                { "team": "home", "type": "On Target", "half": "1st", "gameTime": "01:30",
                  "position": { "x": 88, "y": 40 } }
            ]})
            .to_string(),
        )
        .unwrap();
        let loaded = load(&path, false).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded.log.len(), 1);
        assert!(loaded.roster.is_empty());
    }

    #[test]
    fn test_load_missing_file_errors() {
        assert!(load("/nonexistent/shotmap/match.json", false).is_err());
    }
}
