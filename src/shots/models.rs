use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Pitch length in standard pitch units (x axis).
pub const PITCH_LENGTH: f64 = 105.0;
/// Pitch width in standard pitch units (y axis).
pub const PITCH_WIDTH: f64 = 68.0;
/// Full-time on the match clock, in seconds.
pub const MATCH_SECONDS: u32 = 90 * 60;

/// Which side took the shot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    Home,
    Away,
}

impl Team {
    pub const ALL: [Team; 2] = [Team::Home, Team::Away];

    pub fn as_str(&self) -> &'static str {
        match self {
            Team::Home => "home",
            Team::Away => "away",
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Team {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "home" => Ok(Team::Home),
            "away" => Ok(Team::Away),
            _ => Err(ValidationError::UnknownTeam(s.to_string())),
        }
    }
}

/// Outcome of a shot. A goal is always also on target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ShotType {
    #[serde(rename = "Goal")]
    Goal,
    #[serde(rename = "On Target")]
    OnTarget,
    #[serde(rename = "Off Target")]
    OffTarget,
}

impl ShotType {
    pub const ALL: [ShotType; 3] = [ShotType::Goal, ShotType::OnTarget, ShotType::OffTarget];

    pub fn label(&self) -> &'static str {
        match self {
            ShotType::Goal => "Goal",
            ShotType::OnTarget => "On Target",
            ShotType::OffTarget => "Off Target",
        }
    }

    pub fn is_on_target(&self) -> bool {
        matches!(self, ShotType::Goal | ShotType::OnTarget)
    }
}

impl fmt::Display for ShotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ShotType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .collect();
        match key.as_str() {
            "goal" => Ok(ShotType::Goal),
            "ontarget" => Ok(ShotType::OnTarget),
            "offtarget" => Ok(ShotType::OffTarget),
            _ => Err(ValidationError::UnknownShotType(s.to_string())),
        }
    }
}

/// Match period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Half {
    First,
    Second,
}

impl Half {
    pub const ALL: [Half; 2] = [Half::First, Half::Second];

    pub fn label(&self) -> &'static str {
        match self {
            Half::First => "First",
            Half::Second => "Second",
        }
    }
}

impl fmt::Display for Half {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Half {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "first" | "1st" | "1" => Ok(Half::First),
            "second" | "2nd" | "2" => Ok(Half::Second),
            _ => Err(ValidationError::UnknownHalf(s.to_string())),
        }
    }
}

/// Pitch coordinates. Always inside `[0, 105] x [0, 68]` once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPosition")]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

#[derive(Deserialize)]
struct RawPosition {
    x: f64,
    y: f64,
}

impl TryFrom<RawPosition> for Position {
    type Error = ValidationError;

    fn try_from(raw: RawPosition) -> Result<Self, Self::Error> {
        Position::new(raw.x, raw.y)
    }
}

impl Position {
    pub fn new(x: f64, y: f64) -> Result<Self, ValidationError> {
        if x.is_nan() {
            return Err(ValidationError::NonNumericPosition {
                axis: "x",
                raw: "NaN".into(),
            });
        }
        if y.is_nan() {
            return Err(ValidationError::NonNumericPosition {
                axis: "y",
                raw: "NaN".into(),
            });
        }
        if !(0.0..=PITCH_LENGTH).contains(&x) || !(0.0..=PITCH_WIDTH).contains(&y) {
            return Err(ValidationError::PositionOutOfBounds { x, y });
        }
        Ok(Position { x, y })
    }

    /// True when the shot was taken in the opponent's half.
    pub fn in_attacking_half(&self) -> bool {
        self.x > PITCH_LENGTH / 2.0
    }
}

/// Match clock. Seconds elapsed are authoritative; `MM:SS` is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
pub struct GameClock(u32);

impl GameClock {
    pub fn from_seconds(seconds: i64) -> Result<Self, ValidationError> {
        if !(0..=MATCH_SECONDS as i64).contains(&seconds) {
            return Err(ValidationError::ClockSecondsOutOfRange(seconds));
        }
        Ok(GameClock(seconds as u32))
    }

    /// Parse an `MM:SS` match-clock string.
    pub fn parse_game_time(s: &str) -> Result<Self, ValidationError> {
        let malformed = || ValidationError::MalformedGameTime(s.to_string());
        let (mm, ss) = s.trim().split_once(':').ok_or_else(malformed)?;
        let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(mm) || ss.len() != 2 || !all_digits(ss) {
            return Err(malformed());
        }
        let minutes: u32 = mm.parse().map_err(|_| malformed())?;
        let seconds: u32 = ss.parse().map_err(|_| malformed())?;
        if minutes > 90 || seconds >= 60 {
            return Err(ValidationError::GameTimeOutOfRange { minutes, seconds });
        }
        let total = minutes * 60 + seconds;
        if total > MATCH_SECONDS {
            return Err(ValidationError::GameTimeOutOfRange { minutes, seconds });
        }
        Ok(GameClock(total))
    }

    pub fn seconds(&self) -> u32 {
        self.0
    }

    pub fn game_time(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for GameClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

impl From<GameClock> for u32 {
    fn from(clock: GameClock) -> u32 {
        clock.0
    }
}

impl TryFrom<u32> for GameClock {
    type Error = ValidationError;

    fn try_from(seconds: u32) -> Result<Self, Self::Error> {
        GameClock::from_seconds(seconds as i64)
    }
}

/// Goal-scorer attribution. Can be set after the shot was recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribution {
    pub player_id: String,
    pub player_name: Option<String>,
}

/// One recorded attempt on goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShotRecord {
    pub team: Team,
    /// Display label only; `team` decides everything
    pub team_name: String,
    #[serde(rename = "type")]
    pub shot_type: ShotType,
    pub half: Half,
    pub clock: GameClock,
    pub position: Position,
    pub attribution: Option<Attribution>,
    pub recorded_at: Option<DateTime<Utc>>,
}

impl ShotRecord {
    pub fn new(
        team: Team,
        shot_type: ShotType,
        half: Half,
        clock: GameClock,
        position: Position,
    ) -> Self {
        ShotRecord {
            team,
            team_name: default_team_name(team).to_string(),
            shot_type,
            half,
            clock,
            position,
            attribution: None,
            recorded_at: None,
        }
    }

    pub fn game_time(&self) -> String {
        self.clock.game_time()
    }

    pub fn clock_seconds(&self) -> u32 {
        self.clock.seconds()
    }

    pub fn player_id(&self) -> Option<&str> {
        self.attribution.as_ref().map(|a| a.player_id.as_str())
    }
}

pub fn default_team_name(team: Team) -> &'static str {
    match team {
        Team::Home => "Home",
        Team::Away => "Away",
    }
}

/// A squad member that goals can be attributed to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub number: u8,
}
