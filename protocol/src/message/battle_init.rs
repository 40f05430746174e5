//! Battle initialization message parsers
//!
//! These messages are sent before the first turn to set up the battle.

use anyhow::Result;

use super::battle::{Player, PokemonDetails};
use super::BattleMessage;
use crate::ParseError;

/// Parse |player|PLAYER|USERNAME|AVATAR|RATING
pub fn parse_player(args: &[&str]) -> Result<BattleMessage> {
    let slot = args
        .first()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ParseError::MissingField("player".to_string()))?;

    let username = args.get(1).unwrap_or(&"").trim().to_string();
    let rating = args.get(3).and_then(|s| s.parse().ok());

    Ok(BattleMessage::Player {
        player: Player::parse(slot),
        slot: slot.to_string(),
        username,
        rating,
    })
}

/// Parse |j|USER
///
/// Join announcements prefix the name with a rank or status glyph
/// (e.g. "☆Player1"); those are stripped.
pub fn parse_join(args: &[&str]) -> Result<BattleMessage> {
    let raw = args
        .first()
        .ok_or_else(|| ParseError::MissingField("user".to_string()))?;

    Ok(BattleMessage::Join(strip_user_marker(raw).to_string()))
}

const USER_MARKERS: &[char] = &[
    ' ', '☆', '★', '+', '%', '@', '*', '#', '&', '~', '§', '^', '!', '‽',
];

/// Remove leading rank/status glyphs from a user name
pub fn strip_user_marker(name: &str) -> &str {
    name.trim_start_matches(USER_MARKERS).trim_end()
}

/// Parse |gametype|GAMETYPE
pub fn parse_gametype(args: &[&str]) -> Result<BattleMessage> {
    let game_type = args
        .first()
        .ok_or_else(|| ParseError::MissingField("game type".to_string()))?;

    Ok(BattleMessage::GameType(game_type.to_string()))
}

/// Parse |gen|GENNUM
pub fn parse_gen(args: &[&str]) -> Result<BattleMessage> {
    let generation = args
        .first()
        .and_then(|s| s.trim().parse().ok())
        .ok_or_else(|| ParseError::InvalidFormat("generation".to_string()))?;

    Ok(BattleMessage::Gen(generation))
}

/// Parse |tier|FORMATNAME
pub fn parse_tier(args: &[&str]) -> Result<BattleMessage> {
    let format = args.first().unwrap_or(&"").to_string();
    Ok(BattleMessage::Tier(format))
}

/// Parse |rule|RULE: DESCRIPTION
pub fn parse_rule(args: &[&str]) -> Result<BattleMessage> {
    let rule = args.first().unwrap_or(&"").to_string();
    Ok(BattleMessage::Rule(rule))
}

/// Parse |poke|PLAYER|DETAILS|ITEM
pub fn parse_poke(args: &[&str]) -> Result<BattleMessage> {
    let player = args.first().and_then(|s| Player::parse(s));
    let details = args
        .get(1)
        .map(|s| PokemonDetails::parse(s))
        .ok_or_else(|| ParseError::MissingField("details".to_string()))?;

    Ok(BattleMessage::Poke { player, details })
}
