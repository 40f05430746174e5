//! Shared types for battle log messages

use anyhow::Result;

use crate::ParseError;

/// Player slot in a two-player battle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Player {
    P1,
    P2,
}

impl Player {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "p1" => Some(Player::P1),
            "p2" => Some(Player::P2),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Player::P1 => "p1",
            Player::P2 => "p2",
        }
    }

    /// The other side of the battle
    pub fn opponent(&self) -> Self {
        match self {
            Player::P1 => Player::P2,
            Player::P2 => Player::P1,
        }
    }
}

/// Combatant identifier in the form "POSITION: NAME" (e.g., "p1a: Pikachu")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pokemon {
    /// Side token with the position letter removed ("p1", or "p3" for a
    /// slot outside the two-player protocol)
    pub slot: String,
    /// Player who owns this pokemon, if the slot is one of the two known ones
    pub player: Option<Player>,
    /// Position letter (a, b, c for active slots, or None if inactive)
    pub position: Option<char>,
    /// Pokemon's name/nickname
    pub name: String,
}

impl Pokemon {
    /// Parse a pokemon ID string like "p1a: Pikachu" or "p1: Pikachu"
    pub fn parse(s: &str) -> Option<Self> {
        let (pos_part, name) = s.split_once(": ")?;
        let pos_part = pos_part.trim();
        if pos_part.is_empty() {
            return None;
        }

        let (slot, position) = split_position(pos_part);
        if !is_slot_token(slot) {
            return None;
        }

        Some(Pokemon {
            slot: slot.to_string(),
            player: Player::parse(slot),
            position,
            name: name.trim().to_string(),
        })
    }

    /// Key identifying this combatant independently of its position
    pub fn key(&self) -> String {
        format!("{}: {}", self.slot, self.name)
    }
}

/// Side tokens are "p" followed by a number ("p1", "p2", "p3"...)
fn is_slot_token(s: &str) -> bool {
    s.strip_prefix('p')
        .is_some_and(|n| !n.is_empty() && n.chars().all(|c| c.is_ascii_digit()))
}

/// Split "p1a" into ("p1", Some('a')); tokens without a trailing position
/// letter are returned whole
fn split_position(pos_part: &str) -> (&str, Option<char>) {
    let mut rev = pos_part.chars().rev();
    match (rev.next(), rev.next()) {
        (Some(pos), Some(prev)) if pos.is_ascii_lowercase() && prev.is_ascii_digit() => {
            (&pos_part[..pos_part.len() - 1], Some(pos))
        }
        _ => (pos_part, None),
    }
}

/// Pokemon details string (species, level, gender, shiny)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PokemonDetails {
    pub species: String,
    pub level: Option<u8>,
    pub gender: Option<char>,
    pub shiny: bool,
}

impl PokemonDetails {
    /// Parse a details string like "Pikachu, L50, M, shiny"
    pub fn parse(s: &str) -> Self {
        let mut details = PokemonDetails::default();
        let parts: Vec<&str> = s.split(", ").collect();

        if let Some(species) = parts.first() {
            details.species = species.trim().to_string();
        }

        for part in parts.iter().skip(1) {
            if let Some(level_str) = part.strip_prefix('L') {
                details.level = level_str.parse().ok();
            } else if *part == "M" {
                details.gender = Some('M');
            } else if *part == "F" {
                details.gender = Some('F');
            } else if *part == "shiny" {
                details.shiny = true;
            }
        }

        details
    }
}

/// HP and status condition (e.g., "100/100", "50/100 slp", "0 fnt")
#[derive(Debug, Clone, PartialEq)]
pub struct HpStatus {
    pub current: u32,
    /// Max HP, absent for "0 fnt"
    pub max: Option<u32>,
    /// Status condition (slp, par, brn, psn, tox, frz, fnt)
    pub status: Option<String>,
}

impl HpStatus {
    /// Parse an HP status string like "100/100", "50/100 slp", or "0 fnt"
    pub fn parse(s: &str) -> Option<Self> {
        let mut parts = s.split_whitespace();
        let hp_part = parts.next()?;
        let status = parts.next().map(|s| s.to_string());

        if let Some((current_str, max_str)) = hp_part.split_once('/') {
            Some(HpStatus {
                current: current_str.parse().ok()?,
                max: Some(max_str.parse().ok()?),
                status,
            })
        } else {
            Some(HpStatus {
                current: hp_part.parse().ok()?,
                max: None,
                status,
            })
        }
    }

    /// Remaining health as a fraction in `0.0..=1.0`
    ///
    /// Logs report opponent HP out of 100 when no max is given.
    pub fn fraction(&self) -> f64 {
        if self.is_fainted() {
            return 0.0;
        }
        let max = self.max.unwrap_or(100);
        if max == 0 {
            return 0.0;
        }
        (f64::from(self.current) / f64::from(max)).clamp(0.0, 1.0)
    }

    pub fn is_fainted(&self) -> bool {
        self.current == 0 || self.status.as_deref() == Some("fnt")
    }
}

/// Helper to parse Pokemon from message fields
pub fn parse_pokemon(args: &[&str], index: usize) -> Result<Pokemon> {
    args.get(index)
        .and_then(|s| Pokemon::parse(s))
        .ok_or_else(|| ParseError::MissingField("pokemon".to_string()).into())
}

/// Helper to parse PokemonDetails from message fields
pub fn parse_details(args: &[&str], index: usize) -> PokemonDetails {
    args.get(index)
        .map(|s| PokemonDetails::parse(s))
        .unwrap_or_default()
}

/// Helper to parse HpStatus from message fields
pub fn parse_hp_status(args: &[&str], index: usize) -> Option<HpStatus> {
    args.get(index).and_then(|s| HpStatus::parse(s))
}

/// Find a `[from] EFFECT` tag among trailing fields
pub fn parse_from_tag(args: &[&str], start: usize) -> Option<String> {
    args.iter()
        .skip(start)
        .find_map(|p| p.strip_prefix("[from]").map(|s| s.trim().to_string()))
}
