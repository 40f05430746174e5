//! Running counters behind the summary's Stats

use std::collections::HashMap;

use vgcscope_protocol::Player;

use super::battle::player_to_index;
use crate::types::{PlayerTotals, Stats};

#[derive(Debug, Clone, Default)]
pub struct StatsAggregator {
    move_frequency: HashMap<String, u32>,
    total_moves: u32,
    switches: u32,
    super_effective_hits: u32,
    not_very_effective_hits: u32,
    critical_hits: u32,
    totals: [PlayerTotals; 2],
}

impl StatsAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_move(&mut self, move_id: &str) {
        *self.move_frequency.entry(move_id.to_string()).or_insert(0) += 1;
        self.total_moves += 1;
    }

    pub fn record_switch(&mut self) {
        self.switches += 1;
    }

    pub fn record_super_effective(&mut self) {
        self.super_effective_hits += 1;
    }

    pub fn record_resisted(&mut self) {
        self.not_very_effective_hits += 1;
    }

    pub fn record_crit(&mut self) {
        self.critical_hits += 1;
    }

    /// Damage taken by `affected`'s combatant; the other side is credited
    /// with dealing it
    pub fn record_damage(&mut self, affected: Player, amount: f64) {
        self.totals[player_to_index(affected)].damage_taken += amount;
        self.totals[player_to_index(affected.opponent())].damage_dealt += amount;
    }

    /// Healing received by `affected`'s combatant
    pub fn record_heal(&mut self, affected: Player, amount: f64) {
        self.totals[player_to_index(affected)].healing_done += amount;
    }

    pub fn totals(&self, player: Player) -> &PlayerTotals {
        &self.totals[player_to_index(player)]
    }

    /// Build the final Stats; averages are taken over `total_turns`
    pub fn finish(self, total_turns: usize) -> Stats {
        let [player1, player2] = self.totals;

        let total_damage = player1.damage_taken + player2.damage_taken;
        let total_heal = player1.healing_done + player2.healing_done;
        let (avg_damage_per_turn, avg_heal_per_turn) = if total_turns == 0 {
            (0.0, 0.0)
        } else {
            let turns = total_turns as f64;
            (total_damage / turns, total_heal / turns)
        };

        Stats {
            total_turns,
            move_frequency: self.move_frequency,
            total_moves: self.total_moves,
            switches: self.switches,
            super_effective_hits: self.super_effective_hits,
            not_very_effective_hits: self.not_very_effective_hits,
            critical_hits: self.critical_hits,
            player1,
            player2,
            avg_damage_per_turn,
            avg_heal_per_turn,
        }
    }
}
