mod battle;
mod battle_init;
mod battle_major;
mod battle_minor;
mod battle_progress;
mod tests;

use anyhow::Result;

use crate::tokenizer::Line;
use crate::ParseError;

pub use battle::{
    parse_details, parse_from_tag, parse_hp_status, parse_pokemon, HpStatus, Player, Pokemon,
    PokemonDetails,
};

/// A single battle log message
///
/// Tags this crate does not know about parse to [`BattleMessage::Unknown`],
/// so new protocol messages never break a parse.
#[derive(Debug, Clone, PartialEq)]
pub enum BattleMessage {
    // === Initialization ===
    /// |player|PLAYER|USERNAME|AVATAR|RATING
    Player {
        /// None when the slot token is not p1/p2
        player: Option<Player>,
        slot: String,
        username: String,
        rating: Option<u32>,
    },
    /// |j|USER, |J|USER or |join|USER
    Join(String),
    /// |gametype|GAMETYPE
    GameType(String),
    /// |gen|GENNUM
    Gen(u8),
    /// |tier|FORMATNAME
    Tier(String),
    /// |rated| or |rated|MESSAGE
    Rated,
    /// |rule|RULE: DESCRIPTION
    Rule(String),
    /// |clearpoke
    ClearPoke,
    /// |poke|PLAYER|DETAILS|ITEM
    Poke {
        player: Option<Player>,
        details: PokemonDetails,
    },
    /// |teampreview
    TeamPreview,
    /// |teamsize|PLAYER|NUMBER
    TeamSize,
    /// |start
    BattleStart,

    // === Progress ===
    /// |t:|TIMESTAMP
    Timestamp,
    /// A bare `|` separating blocks of output
    Spacer,
    /// |turn|NUMBER
    Turn(u32),
    /// |upkeep
    Upkeep,
    /// |win|USER
    Win(String),
    /// |tie
    Tie,

    // === Major actions ===
    /// |switch| or |drag|POKEMON|DETAILS|HP STATUS
    Switch {
        pokemon: Pokemon,
        details: PokemonDetails,
        hp_status: Option<HpStatus>,
        /// True for |drag| (forced out by the opponent)
        forced: bool,
    },
    /// |move|POKEMON|MOVE|TARGET
    Move {
        pokemon: Pokemon,
        move_name: String,
        target: Option<Pokemon>,
        miss: bool,
    },
    /// |faint|POKEMON
    Faint(Pokemon),

    // === Minor actions ===
    /// |-damage|POKEMON|HP STATUS
    Damage {
        pokemon: Pokemon,
        hp_status: Option<HpStatus>,
        from: Option<String>,
    },
    /// |-heal|POKEMON|HP STATUS
    Heal {
        pokemon: Pokemon,
        hp_status: Option<HpStatus>,
        from: Option<String>,
    },
    /// |-supereffective|POKEMON
    SuperEffective(Pokemon),
    /// |-resisted|POKEMON
    Resisted(Pokemon),
    /// |-crit|POKEMON
    Crit(Pokemon),

    /// Any message type not listed above
    Unknown { kind: String, args: Vec<String> },

    /// A known message type whose fields could not be parsed
    Malformed { kind: String, args: Vec<String> },
}

impl BattleMessage {
    /// Build the catch-all variant from a tokenized line
    pub fn unknown(line: &Line<'_>) -> Self {
        BattleMessage::Unknown {
            kind: line.kind().to_string(),
            args: line.args().iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Build the variant for a known line that failed to parse
    pub fn malformed(line: &Line<'_>) -> Self {
        BattleMessage::Malformed {
            kind: line.kind().to_string(),
            args: line.args().iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Parse a tokenized line into a BattleMessage
///
/// Fails only when a known message type is missing a required field.
pub fn parse_battle_message(line: &Line<'_>) -> Result<BattleMessage> {
    let args = line.args();

    match line.kind() {
        // Initialization
        "player" => battle_init::parse_player(args),
        "j" | "J" | "join" => battle_init::parse_join(args),
        "gametype" => battle_init::parse_gametype(args),
        "gen" => battle_init::parse_gen(args),
        "tier" => battle_init::parse_tier(args),
        "rated" => Ok(BattleMessage::Rated),
        "rule" => battle_init::parse_rule(args),
        "clearpoke" => Ok(BattleMessage::ClearPoke),
        "poke" => battle_init::parse_poke(args),
        "teampreview" => Ok(BattleMessage::TeamPreview),
        "teamsize" => Ok(BattleMessage::TeamSize),
        "start" => Ok(BattleMessage::BattleStart),

        // Progress
        "t:" => Ok(BattleMessage::Timestamp),
        "" => Ok(BattleMessage::Spacer),
        "turn" => battle_progress::parse_turn(args),
        "upkeep" => Ok(BattleMessage::Upkeep),
        "win" => battle_progress::parse_win(args),
        "tie" => Ok(BattleMessage::Tie),

        // Major actions
        "switch" => battle_major::parse_switch(args, false),
        "drag" => battle_major::parse_switch(args, true),
        "move" => battle_major::parse_move(args),
        "faint" => battle_major::parse_faint(args),

        // Minor actions
        "-damage" => battle_minor::parse_damage(args),
        "-heal" => battle_minor::parse_heal(args),
        "-supereffective" => battle_minor::parse_supereffective(args),
        "-resisted" => battle_minor::parse_resisted(args),
        "-crit" => battle_minor::parse_crit(args),

        _ => Ok(BattleMessage::unknown(line)),
    }
}

/// Parse a single raw line (with its leading `|`)
pub fn parse_line(raw: &str) -> Result<BattleMessage> {
    let line = crate::tokenizer::tokenize_line(raw, 1).ok_or(ParseError::EmptyMessage)?;
    parse_battle_message(&line)
}
