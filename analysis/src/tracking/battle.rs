//! BattleTracker - per-parse battle state

use std::collections::HashMap;

use uuid::Uuid;
use vgcscope_protocol::{Player, Pokemon};

use super::moments::KeyMomentDetector;
use super::stats::StatsAggregator;
use super::turns::TurnAssembler;
use crate::types::{BattleSummary, PlayerRecord, PLAYER1, PLAYER2};

/// State of one battle, rebuilt from its log
///
/// Created fresh for every parse and consumed by [`BattleTracker::into_summary`];
/// it is never shared between parses.
#[derive(Debug, Clone)]
pub struct BattleTracker {
    /// Format/tier name
    pub format: String,

    /// Player sides (indexed by Player enum)
    pub(crate) sides: [SideState; 2],

    /// Names from join announcements, in order, without duplicates
    pub(crate) joined: Vec<String>,

    /// Position ("p1a") -> key of the combatant occupying it
    pub(crate) active: HashMap<String, String>,

    /// Combatant key -> remaining health fraction
    pub(crate) health: HashMap<String, f64>,

    pub(crate) turns: TurnAssembler,
    pub(crate) moments: KeyMomentDetector,
    pub(crate) stats: StatsAggregator,

    // === Outcome ===
    /// Whether a win or tie marker has been processed
    pub ended: bool,

    /// Winning slot (if the winner could be matched to a player)
    pub winner: Option<Player>,
}

/// What is known about one player's side
#[derive(Debug, Clone, Default)]
pub(crate) struct SideState {
    /// Name from the |player| line
    pub declared: Option<String>,
    pub rating: Option<u32>,
    pub losses: u32,
    pub team: Vec<String>,
}

impl SideState {
    fn into_record(self, name: Option<&str>) -> PlayerRecord {
        PlayerRecord {
            name: name.unwrap_or_default().to_string(),
            rating: self.rating,
            losses: self.losses,
            team: self.team,
        }
    }
}

impl BattleTracker {
    pub fn new() -> Self {
        Self {
            format: String::new(),
            sides: [SideState::default(), SideState::default()],
            joined: Vec::new(),
            active: HashMap::new(),
            health: HashMap::new(),
            turns: TurnAssembler::new(),
            moments: KeyMomentDetector::new(),
            stats: StatsAggregator::new(),
            ended: false,
            winner: None,
        }
    }

    /// Display name for a player, if known yet
    pub fn player_name(&self, player: Player) -> Option<&str> {
        self.player_names()[player_to_index(player)]
    }

    /// Names of both sides
    ///
    /// A declared name always wins. A side without one takes the earliest
    /// join name that no other side is already using.
    pub(crate) fn player_names(&self) -> [Option<&str>; 2] {
        let mut names = [
            self.sides[0].declared.as_deref(),
            self.sides[1].declared.as_deref(),
        ];
        let mut joins = self.joined.iter().map(String::as_str);

        for idx in 0..names.len() {
            if names[idx].is_some() {
                continue;
            }
            let taken = names;
            let found = joins.by_ref().find(|join| {
                let id = user_id(join);
                !taken.iter().flatten().any(|name| user_id(name) == id)
            });
            names[idx] = found;
        }

        names
    }

    /// Number of fainted combatants for a player
    pub fn losses(&self, player: Player) -> u32 {
        self.sides[player_to_index(player)].losses
    }

    /// Combatant currently occupying a position like "p1a"
    pub fn active(&self, position: &str) -> Option<&str> {
        self.active.get(position).map(String::as_str)
    }

    /// Last known health fraction of a combatant
    ///
    /// Combatants not seen yet are assumed to be at full health.
    pub fn health(&self, combatant: &str) -> f64 {
        self.health.get(combatant).copied().unwrap_or(1.0)
    }

    /// Current turn number (1 before the first turn marker)
    pub fn turn(&self) -> u32 {
        self.turns.current_turn()
    }

    /// Find the slot whose player has this name
    pub(crate) fn player_by_name(&self, name: &str) -> Option<Player> {
        let wanted = user_id(name);
        if wanted.is_empty() {
            return None;
        }
        let names = self.player_names();
        [Player::P1, Player::P2]
            .into_iter()
            .find(|p| names[player_to_index(*p)].map(user_id).as_deref() == Some(wanted.as_str()))
    }

    /// Close everything and build the summary
    pub fn into_summary(self) -> BattleSummary {
        let [name1, name2] = self.player_names().map(|name| name.map(str::to_string));
        let turns = self.turns.finish();
        let stats = self.stats.finish(turns.len());
        let winner = match self.winner {
            Some(player) => designator(player).to_string(),
            None => String::new(),
        };
        let [player1, player2] = self.sides;

        BattleSummary {
            id: Uuid::new_v4().to_string(),
            format: self.format,
            player1: player1.into_record(name1.as_deref()),
            player2: player2.into_record(name2.as_deref()),
            turns,
            winner,
            stats,
            key_moments: self.moments.finish(),
        }
    }
}

impl Default for BattleTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert Player enum to array index
pub fn player_to_index(player: Player) -> usize {
    match player {
        Player::P1 => 0,
        Player::P2 => 1,
    }
}

/// Summary designator for a player slot
pub fn designator(player: Player) -> &'static str {
    match player {
        Player::P1 => PLAYER1,
        Player::P2 => PLAYER2,
    }
}

/// Acting-player designator for a combatant, falling back to its raw slot
pub fn pokemon_designator(pokemon: &Pokemon) -> String {
    match pokemon.player {
        Some(player) => designator(player).to_string(),
        None => pokemon.slot.clone(),
    }
}

/// Position key for the active-combatant map ("p1a")
pub fn position_key(pokemon: &Pokemon) -> String {
    format!("{}{}", pokemon.slot, pokemon.position.unwrap_or('a'))
}

/// Normalize a user name the way the simulator compares them
pub fn user_id(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}
