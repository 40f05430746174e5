//! Minor battle action message parsers
//!
//! These are secondary effects of an action: damage, healing and
//! effectiveness annotations.

use anyhow::Result;

use super::battle::{parse_from_tag, parse_hp_status, parse_pokemon};
use super::BattleMessage;

/// Parse |-damage|POKEMON|HP STATUS with optional [from]EFFECT
pub fn parse_damage(args: &[&str]) -> Result<BattleMessage> {
    let pokemon = parse_pokemon(args, 0)?;
    let hp_status = parse_hp_status(args, 1);
    let from = parse_from_tag(args, 2);

    Ok(BattleMessage::Damage {
        pokemon,
        hp_status,
        from,
    })
}

/// Parse |-heal|POKEMON|HP STATUS with optional [from]EFFECT
pub fn parse_heal(args: &[&str]) -> Result<BattleMessage> {
    let pokemon = parse_pokemon(args, 0)?;
    let hp_status = parse_hp_status(args, 1);
    let from = parse_from_tag(args, 2);

    Ok(BattleMessage::Heal {
        pokemon,
        hp_status,
        from,
    })
}

/// Parse |-crit|POKEMON
pub fn parse_crit(args: &[&str]) -> Result<BattleMessage> {
    let pokemon = parse_pokemon(args, 0)?;
    Ok(BattleMessage::Crit(pokemon))
}

/// Parse |-supereffective|POKEMON
pub fn parse_supereffective(args: &[&str]) -> Result<BattleMessage> {
    let pokemon = parse_pokemon(args, 0)?;
    Ok(BattleMessage::SuperEffective(pokemon))
}

/// Parse |-resisted|POKEMON
pub fn parse_resisted(args: &[&str]) -> Result<BattleMessage> {
    let pokemon = parse_pokemon(args, 0)?;
    Ok(BattleMessage::Resisted(pokemon))
}
