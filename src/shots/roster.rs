use std::collections::HashMap;

use crate::error::ValidationError;
use crate::shots::models::Player;
use crate::shots::validation::PlayerDraft;

/// Label used when a goal references a player no longer on the roster.
pub const UNKNOWN_PLAYER: &str = "Unknown";

/// Read-only id → player lookup handed to the leaderboard step.
///
/// Numbers are unique within one roster.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    players: HashMap<String, Player>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a roster from drafts, rejecting the first invalid or conflicting entry.
    pub fn from_drafts(drafts: &[PlayerDraft]) -> Result<Self, ValidationError> {
        let mut roster = Roster::new();
        for draft in drafts {
            roster.add(draft.validate()?)?;
        }
        Ok(roster)
    }

    pub fn add(&mut self, player: Player) -> Result<(), ValidationError> {
        if self.players.contains_key(&player.id) {
            return Err(ValidationError::DuplicatePlayerId(player.id));
        }
        if let Some(existing) = self.players.values().find(|p| p.number == player.number) {
            return Err(ValidationError::DuplicatePlayerNumber {
                number: player.number,
                existing_name: existing.name.clone(),
            });
        }
        self.players.insert(player.id.clone(), player);
        Ok(())
    }

    /// Remove a player. Goals already attributed to them stay attributed.
    pub fn remove(&mut self, id: &str) -> Option<Player> {
        self.players.remove(id)
    }

    pub fn get(&self, id: &str) -> Option<&Player> {
        self.players.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.players.contains_key(id)
    }

    /// Display label for a player id, `"Unknown"` when absent.
    pub fn label_for(&self, id: &str) -> &str {
        self.players
            .get(id)
            .map(|p| p.name.as_str())
            .unwrap_or(UNKNOWN_PLAYER)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Players sorted by shirt number.
    pub fn players(&self) -> Vec<&Player> {
        let mut players: Vec<&Player> = self.players.values().collect();
        players.sort_by_key(|p| p.number);
        players
    }
}
