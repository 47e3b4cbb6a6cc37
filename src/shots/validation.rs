//! Creation boundary for shots and players.
//!
//! Everything the capture UI (or a recorded match file) hands us arrives as a
//! loosely-typed draft. Drafts are checked here and either become typed
//! records or are rejected with a [`ValidationError`] naming the problem.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use crate::error::ValidationError;
use crate::shots::models::{
    default_team_name, Attribution, GameClock, Half, Player, Position, ShotRecord, ShotType, Team,
};

/// Raw position as submitted, before numeric and bounds checks
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PositionDraft {
    pub x: Option<Value>,
    pub y: Option<Value>,
}

/// Unvalidated shot as submitted by the capture surface
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShotDraft {
    pub team: Option<String>,
    pub team_name: Option<String>,
    #[serde(rename = "type")]
    pub shot_type: Option<String>,
    pub half: Option<String>,
    pub game_time: Option<String>,
    /// Integer seconds, as a number or numeric string
    pub clock_seconds: Option<Value>,
    pub position: Option<PositionDraft>,
    pub player_id: Option<String>,
    pub player_name: Option<String>,
    pub recorded_at: Option<DateTime<Utc>>,
}

/// Unvalidated roster entry
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlayerDraft {
    pub id: Option<String>,
    pub name: Option<String>,
    /// Accepts `10` or `"10"`; anything else is rejected as non-numeric
    pub number: Option<Value>,
}

impl ShotDraft {
    /// Validate every field and build the typed record.
    pub fn validate(&self) -> Result<ShotRecord, ValidationError> {
        let team: Team = required(&self.team, "team")?.parse()?;
        let shot_type: ShotType = required(&self.shot_type, "type")?.parse()?;
        let half: Half = required(&self.half, "half")?.parse()?;
        let clock_seconds = self
            .clock_seconds
            .as_ref()
            .filter(|v| !v.is_null())
            .map(parse_clock_seconds)
            .transpose()?;
        let clock = resolve_clock(self.game_time.as_deref(), clock_seconds)?;

        let position = self
            .position
            .as_ref()
            .ok_or(ValidationError::MissingField("position"))?;
        let position = Position::new(
            coordinate(position.x.as_ref(), "x")?,
            coordinate(position.y.as_ref(), "y")?,
        )?;

        // Attribution only means something on a goal; drop it otherwise.
        let attribution = match (&self.player_id, shot_type) {
            (Some(id), ShotType::Goal) if !id.trim().is_empty() => Some(Attribution {
                player_id: id.trim().to_string(),
                player_name: self.player_name.clone(),
            }),
            _ => None,
        };

        let team_name = self
            .team_name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(default_team_name(team))
            .to_string();

        Ok(ShotRecord {
            team,
            team_name,
            shot_type,
            half,
            clock,
            position,
            attribution,
            recorded_at: self.recorded_at,
        })
    }
}

impl PlayerDraft {
    pub fn validate(&self) -> Result<Player, ValidationError> {
        let id = required(&self.id, "id")?.trim();
        let name = self
            .name
            .as_deref()
            .ok_or(ValidationError::MissingField("name"))?;
        let name = validate_player_name(name)?;
        let number = self
            .number
            .as_ref()
            .filter(|v| !v.is_null())
            .ok_or(ValidationError::MissingField("number"))?;
        let number = parse_player_number(number)?;
        Ok(Player {
            id: id.to_string(),
            name,
            number,
        })
    }
}

fn required<'a>(field: &'a Option<String>, name: &'static str) -> Result<&'a str, ValidationError> {
    field
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .ok_or(ValidationError::MissingField(name))
}

fn coordinate(raw: Option<&Value>, axis: &'static str) -> Result<f64, ValidationError> {
    let raw = raw.ok_or(ValidationError::MissingField(if axis == "x" {
        "position.x"
    } else {
        "position.y"
    }))?;
    let value = match raw {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match value {
        Some(v) if v.is_finite() => Ok(v),
        _ => Err(ValidationError::NonNumericPosition {
            axis,
            raw: raw.to_string(),
        }),
    }
}

/// Whole seconds from a number or numeric string. Fractions are rejected.
pub fn parse_clock_seconds(raw: &Value) -> Result<i64, ValidationError> {
    let seconds = match raw {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    seconds.ok_or_else(|| {
        ValidationError::NonNumericClockSeconds(match raw {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    })
}

/// Reconcile the two clock encodings. Seconds win; when both are present they
/// must agree.
pub fn resolve_clock(
    game_time: Option<&str>,
    clock_seconds: Option<i64>,
) -> Result<GameClock, ValidationError> {
    let game_time = game_time.map(str::trim).filter(|s| !s.is_empty());
    match (game_time, clock_seconds) {
        (None, None) => Err(ValidationError::MissingField("gameTime")),
        (None, Some(seconds)) => GameClock::from_seconds(seconds),
        (Some(text), None) => GameClock::parse_game_time(text),
        (Some(text), Some(seconds)) => {
            let from_seconds = GameClock::from_seconds(seconds)?;
            let from_text = GameClock::parse_game_time(text)?;
            if from_text != from_seconds {
                return Err(ValidationError::ClockMismatch {
                    game_time: text.to_string(),
                    expected: from_text.seconds(),
                    actual: from_seconds.seconds(),
                });
            }
            Ok(from_seconds)
        }
    }
}

pub fn validate_player_name(name: &str) -> Result<String, ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyPlayerName);
    }
    Ok(trimmed.to_string())
}

pub fn parse_player_number(raw: &Value) -> Result<u8, ValidationError> {
    let number = match raw {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    let number = number.ok_or_else(|| {
        ValidationError::NonNumericPlayerNumber(match raw {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    })?;
    if !(1..=99).contains(&number) {
        return Err(ValidationError::PlayerNumberOutOfRange(number));
    }
    Ok(number as u8)
}
