//! Battle summary: the result of analyzing one log

use super::moment::{KeyMoment, MomentType};
use super::stats::Stats;
use super::turn::Turn;

/// Winner designator for the first player slot
pub const PLAYER1: &str = "player1";
/// Winner designator for the second player slot
pub const PLAYER2: &str = "player2";

/// Structured summary of a battle log
///
/// Built once per parse and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct BattleSummary {
    /// Unique per parse call, even for identical input
    pub id: String,
    /// Format label from the tier line, verbatim (may be empty)
    pub format: String,
    pub player1: PlayerRecord,
    pub player2: PlayerRecord,
    /// Numbered 1, 2, 3... with no gaps
    pub turns: Vec<Turn>,
    /// "player1", "player2", or empty if the log has no winner
    pub winner: String,
    pub stats: Stats,
    pub key_moments: Vec<KeyMoment>,
}

impl BattleSummary {
    /// Record of the winning player, if the battle had one
    pub fn winning_player(&self) -> Option<&PlayerRecord> {
        match self.winner.as_str() {
            PLAYER1 => Some(&self.player1),
            PLAYER2 => Some(&self.player2),
            _ => None,
        }
    }

    /// Look up a turn by its number
    pub fn turn(&self, number: u32) -> Option<&Turn> {
        let idx = usize::try_from(number).ok()?.checked_sub(1)?;
        self.turns.get(idx)
    }

    /// Key moments of a given type, in battle order
    pub fn moments_of(&self, moment_type: MomentType) -> impl Iterator<Item = &KeyMoment> {
        self.key_moments
            .iter()
            .filter(move |m| m.moment_type == moment_type)
    }

    /// Total number of knockouts
    pub fn total_kos(&self) -> u32 {
        self.player1.losses + self.player2.losses
    }
}

/// One side of the battle
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PlayerRecord {
    /// Display name, empty if the log never named this player
    pub name: String,
    /// Ladder rating from the player declaration, if one was given
    pub rating: Option<u32>,
    /// Number of this player's own combatants that fainted
    pub losses: u32,
    /// Species revealed at team preview, in order
    pub team: Vec<String>,
}
