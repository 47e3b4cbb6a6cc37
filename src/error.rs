use thiserror::Error;

/// Rejections raised where a shot or player is created or edited.
///
/// The analytics functions never produce these: once a record has made it
/// through the boundary it is trusted.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("unknown team `{0}` (expected home or away)")]
    UnknownTeam(String),

    #[error("unknown shot type `{0}` (expected Goal, On Target or Off Target)")]
    UnknownShotType(String),

    #[error("unknown half `{0}` (expected First or Second)")]
    UnknownHalf(String),

    #[error("malformed game time `{0}` (expected MM:SS)")]
    MalformedGameTime(String),

    #[error("game time {minutes}:{seconds:02} is outside the match clock")]
    GameTimeOutOfRange { minutes: u32, seconds: u32 },

    #[error("clock seconds `{0}` is not a whole number")]
    NonNumericClockSeconds(String),

    #[error("clock seconds {0} is outside [0, 5400]")]
    ClockSecondsOutOfRange(i64),

    #[error("game time {game_time} is {expected}s but clockSeconds says {actual}s")]
    ClockMismatch {
        game_time: String,
        expected: u32,
        actual: u32,
    },

    #[error("position {axis} is not a number: {raw}")]
    NonNumericPosition { axis: &'static str, raw: String },

    #[error("position ({x}, {y}) is outside the 105x68 pitch")]
    PositionOutOfBounds { x: f64, y: f64 },

    #[error("player name must not be empty")]
    EmptyPlayerName,

    #[error("player number `{0}` is not a number")]
    NonNumericPlayerNumber(String),

    #[error("player number {0} is outside [1, 99]")]
    PlayerNumberOutOfRange(i64),

    #[error("number {number} is already taken by {existing_name}")]
    DuplicatePlayerNumber { number: u8, existing_name: String },

    #[error("player id `{0}` is already on the roster")]
    DuplicatePlayerId(String),

    #[error("no shot at index {index} (log holds {len})")]
    ShotIndexOutOfRange { index: usize, len: usize },

    #[error("shot {0} is not a goal and cannot be attributed")]
    AttributionOnNonGoal(usize),

    #[error("player `{0}` is not on the roster")]
    UnknownPlayer(String),
}
