//! Major battle action message parsers
//!
//! These are the primary actions in battle: moves, switches, faints.

use anyhow::Result;

use super::battle::{parse_details, parse_hp_status, parse_pokemon, Pokemon};
use super::BattleMessage;
use crate::ParseError;

/// Parse |move|POKEMON|MOVE|TARGET with optional tags
pub fn parse_move(args: &[&str]) -> Result<BattleMessage> {
    let pokemon = parse_pokemon(args, 0)?;
    let move_name = args
        .get(1)
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ParseError::MissingField("move".to_string()))?
        .to_string();
    let target = args.get(2).and_then(|s| Pokemon::parse(s));
    let miss = args.iter().skip(3).any(|p| *p == "[miss]");

    Ok(BattleMessage::Move {
        pokemon,
        move_name,
        target,
        miss,
    })
}

/// Parse |switch|POKEMON|DETAILS|HP STATUS (also |drag|)
pub fn parse_switch(args: &[&str], forced: bool) -> Result<BattleMessage> {
    let pokemon = parse_pokemon(args, 0)?;
    let details = parse_details(args, 1);
    let hp_status = parse_hp_status(args, 2);

    Ok(BattleMessage::Switch {
        pokemon,
        details,
        hp_status,
        forced,
    })
}

/// Parse |faint|POKEMON
pub fn parse_faint(args: &[&str]) -> Result<BattleMessage> {
    let pokemon = parse_pokemon(args, 0)?;
    Ok(BattleMessage::Faint(pokemon))
}
