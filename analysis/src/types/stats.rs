//! Aggregate battle statistics

use std::collections::HashMap;

/// Battle-wide statistics
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Stats {
    /// Always equal to the number of turns in the summary
    pub total_turns: usize,
    /// Move id -> number of times used
    pub move_frequency: HashMap<String, u32>,
    pub total_moves: u32,
    pub switches: u32,
    pub super_effective_hits: u32,
    pub not_very_effective_hits: u32,
    pub critical_hits: u32,
    pub player1: PlayerTotals,
    pub player2: PlayerTotals,
    /// Damage taken by both sides divided by total turns
    pub avg_damage_per_turn: f64,
    /// Healing done by both sides divided by total turns
    pub avg_heal_per_turn: f64,
}

impl Stats {
    /// Times a move was used, by move id
    pub fn move_count(&self, move_id: &str) -> u32 {
        self.move_frequency.get(move_id).copied().unwrap_or(0)
    }

    /// Most used move id and its count (ties broken by id)
    pub fn most_used_move(&self) -> Option<(&str, u32)> {
        self.move_frequency
            .iter()
            .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
            .map(|(id, count)| (id.as_str(), *count))
    }
}

/// Damage and healing totals for one player, in percentage points of max HP
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PlayerTotals {
    pub damage_dealt: f64,
    pub damage_taken: f64,
    pub healing_done: f64,
}
