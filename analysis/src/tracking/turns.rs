//! Turn assembly: buffering actions into numbered turns

use std::collections::HashMap;
use std::mem;

use tracing::{debug, warn};

use crate::types::{Action, ActionDetails, HitOutcome, Turn};

/// Where the assembler is in the battle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    /// No turn marker seen yet; actions go to the pre-turn buffer
    NoTurnOpen,
    /// Turn `n` is collecting actions
    TurnOpen(u32),
}

/// Handle to an action in the turn currently being assembled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionRef(usize);

/// Collects actions into turns numbered 1, 2, 3... with no gaps
///
/// Actions recorded before the first turn marker are kept and become the
/// leading actions of turn 1.
#[derive(Debug, Clone)]
pub struct TurnAssembler {
    state: TurnState,
    /// Actions of the open turn, or the pre-turn buffer
    current: Vec<Action>,
    turns: Vec<Turn>,
    /// Most recent move aimed at each combatant, within the current turn
    last_move_against: HashMap<String, ActionRef>,
}

impl TurnAssembler {
    pub fn new() -> Self {
        Self {
            state: TurnState::NoTurnOpen,
            current: Vec::new(),
            turns: Vec::new(),
            last_move_against: HashMap::new(),
        }
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    pub fn is_turn_open(&self) -> bool {
        matches!(self.state, TurnState::TurnOpen(_))
    }

    /// Turn number new actions are attributed to
    ///
    /// Pre-turn actions end up in turn 1, so that is their number too.
    pub fn current_turn(&self) -> u32 {
        match self.state {
            TurnState::NoTurnOpen => 1,
            TurnState::TurnOpen(n) => n,
        }
    }

    /// Whether actions are waiting in the pre-turn buffer
    pub fn has_buffered_actions(&self) -> bool {
        self.state == TurnState::NoTurnOpen && !self.current.is_empty()
    }

    /// Number of turns closed so far
    pub fn closed_turns(&self) -> usize {
        self.turns.len()
    }

    /// Handle a turn marker declaring turn `declared`
    pub fn boundary(&mut self, declared: u32) {
        match self.state {
            TurnState::NoTurnOpen => {
                if declared != 1 {
                    debug!(declared, "first turn marker is not turn 1; numbering from 1");
                }
                // The pre-turn buffer becomes the start of turn 1
                self.state = TurnState::TurnOpen(1);
            }
            TurnState::TurnOpen(n) if declared == n + 1 => {
                self.close_current(n);
                self.state = TurnState::TurnOpen(n + 1);
            }
            TurnState::TurnOpen(n) if declared > n + 1 => {
                warn!(
                    expected = n + 1,
                    declared, "turn numbers skip ahead; renumbering contiguously"
                );
                self.close_current(n);
                self.state = TurnState::TurnOpen(n + 1);
            }
            TurnState::TurnOpen(n) => {
                debug!(current = n, declared, "ignoring stale turn marker");
            }
        }
    }

    /// Record an action in the current turn (or the pre-turn buffer)
    pub fn record(&mut self, action: Action) -> ActionRef {
        self.current.push(action);
        ActionRef(self.current.len() - 1)
    }

    pub fn action_mut(&mut self, action: ActionRef) -> Option<&mut Action> {
        self.current.get_mut(action.0)
    }

    /// Remember `action` as the latest move aimed at `combatant`
    pub fn note_move_against(&mut self, combatant: &str, action: ActionRef) {
        self.last_move_against.insert(combatant.to_string(), action);
    }

    /// Outcome of the latest move aimed at `combatant` in this turn
    pub fn outcome_against(&mut self, combatant: &str) -> Option<&mut HitOutcome> {
        let action = *self.last_move_against.get(combatant)?;
        match &mut self.action_mut(action)?.details {
            ActionDetails::Move { outcome, .. } => Some(outcome),
            _ => None,
        }
    }

    /// Close whatever is open and return every turn
    pub fn finish(mut self) -> Vec<Turn> {
        match self.state {
            TurnState::TurnOpen(n) => self.close_current(n),
            TurnState::NoTurnOpen if !self.current.is_empty() => self.close_current(1),
            TurnState::NoTurnOpen => {}
        }
        self.turns
    }

    fn close_current(&mut self, number: u32) {
        self.turns.push(Turn {
            number,
            actions: mem::take(&mut self.current),
        });
        self.last_move_against.clear();
    }
}

impl Default for TurnAssembler {
    fn default() -> Self {
        Self::new()
    }
}
