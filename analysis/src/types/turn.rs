//! Turn and action records

/// One numbered round of the battle
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Turn {
    /// 1-based turn number
    pub number: u32,
    pub actions: Vec<Action>,
}

impl Turn {
    pub fn new(number: u32) -> Self {
        Self {
            number,
            actions: Vec::new(),
        }
    }

    /// Iterate over the move actions of this turn
    pub fn moves(&self) -> impl Iterator<Item = (&Action, &MoveRef)> {
        self.actions.iter().filter_map(|action| match &action.details {
            ActionDetails::Move { move_ref, .. } => Some((action, move_ref)),
            _ => None,
        })
    }
}

/// Prefix on the action type of a known line whose fields failed to parse
/// ("malformed:move"), so only well-formed moves are typed "move"
pub const MALFORMED_ACTION_PREFIX: &str = "malformed:";

/// Something a player's side did during a turn
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Action {
    /// "player1", "player2", or the raw slot token for an unknown slot
    pub player: String,
    /// "move", "switch", "drag", "faint", or the raw message type for other
    /// actions (prefixed with [`MALFORMED_ACTION_PREFIX`] if it failed to parse)
    pub action_type: String,
    pub details: ActionDetails,
}

impl Action {
    pub fn is_move(&self) -> bool {
        matches!(self.details, ActionDetails::Move { .. })
    }

    pub fn is_switch(&self) -> bool {
        matches!(self.details, ActionDetails::Switch { .. })
    }

    /// Move reference, for move actions
    pub fn move_ref(&self) -> Option<&MoveRef> {
        match &self.details {
            ActionDetails::Move { move_ref, .. } => Some(move_ref),
            _ => None,
        }
    }

    /// Species switched in, for switch actions
    pub fn switch_to(&self) -> Option<&str> {
        match &self.details {
            ActionDetails::Switch { switch_to } => Some(switch_to),
            _ => None,
        }
    }
}

/// Variant-specific action data
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")
)]
pub enum ActionDetails {
    Move {
        move_ref: MoveRef,
        /// Name of the targeted combatant, if any
        target: Option<String>,
        outcome: HitOutcome,
    },
    Switch {
        switch_to: String,
    },
    Faint {
        pokemon: String,
    },
    Other,
}

/// A move, by id and display name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveRef {
    pub id: String,
    pub name: String,
}

impl MoveRef {
    pub fn from_name(name: &str) -> Self {
        Self {
            id: move_id(name),
            name: name.to_string(),
        }
    }
}

/// Derive a move id from its display name
///
/// Lowercased, words joined by '-', other punctuation dropped:
/// "Thunder Wave" -> "thunder-wave", "King's Shield" -> "kings-shield".
pub fn move_id(name: &str) -> String {
    let mut id = String::with_capacity(name.len());
    let mut pending_dash = false;

    for c in name.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !id.is_empty() {
                id.push('-');
            }
            pending_dash = false;
            id.extend(c.to_lowercase());
        } else if c.is_whitespace() || c == '-' || c == '_' {
            pending_dash = true;
        }
    }

    id
}

/// Implied result of a move, filled in by the lines that follow it
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct HitOutcome {
    pub super_effective: bool,
    pub resisted: bool,
    pub critical: bool,
    pub missed: bool,
    /// Damage dealt, in percentage points of the target's max HP
    pub damage: f64,
}
