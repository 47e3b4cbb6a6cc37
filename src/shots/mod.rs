pub mod log;
pub mod models;
pub mod roster;
pub mod validation;

pub use log::{MatchEvent, MatchLog, Score};
pub use models::{Attribution, GameClock, Half, Player, Position, ShotRecord, ShotType, Team};
pub use roster::Roster;
pub use validation::{PlayerDraft, ShotDraft};
