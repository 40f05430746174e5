//! Battle progress message parsers
//!
//! These messages mark the flow of a battle: turns and its end.

use anyhow::Result;

use super::BattleMessage;
use crate::ParseError;

/// Parse |turn|NUMBER
pub fn parse_turn(args: &[&str]) -> Result<BattleMessage> {
    let turn = args
        .first()
        .and_then(|s| s.trim().parse().ok())
        .ok_or_else(|| ParseError::InvalidFormat("turn number".to_string()))?;

    Ok(BattleMessage::Turn(turn))
}

/// Parse |win|USER
pub fn parse_win(args: &[&str]) -> Result<BattleMessage> {
    let user = args.first().unwrap_or(&"").trim().to_string();
    Ok(BattleMessage::Win(user))
}
