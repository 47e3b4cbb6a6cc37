use serde::Serialize;
use std::collections::HashMap;

use crate::shots::models::{ShotRecord, ShotType};
use crate::shots::roster::Roster;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScorerEntry {
    pub player_id: String,
    /// Roster name, or "Unknown" for players no longer on it
    pub label: String,
    pub number: Option<u8>,
    pub goals: u32,
}

/// Attributed goals per player, most goals first. Unattributed goals are skipped.
pub fn goal_scorers(shots: &[ShotRecord], roster: &Roster) -> Vec<ScorerEntry> {
    let mut goals: HashMap<&str, u32> = HashMap::new();
    for shot in shots.iter().filter(|s| s.shot_type == ShotType::Goal) {
        if let Some(id) = shot.player_id() {
            *goals.entry(id).or_insert(0) += 1;
        }
    }

    let mut board: Vec<ScorerEntry> = goals
        .into_iter()
        .map(|(id, goals)| ScorerEntry {
            player_id: id.to_string(),
            label: roster.label_for(id).to_string(),
            number: roster.get(id).map(|p| p.number),
            goals,
        })
        .collect();
    board.sort_by(|a, b| {
        b.goals
            .cmp(&a.goals)
            .then_with(|| a.label.cmp(&b.label))
            .then_with(|| a.player_id.cmp(&b.player_id))
    });
    board
}
