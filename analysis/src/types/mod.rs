//! Summary types produced by the analyzer

mod moment;
mod stats;
mod summary;
mod turn;

pub use moment::{KeyMoment, MomentType, Significance};
pub use stats::{PlayerTotals, Stats};
pub use summary::{BattleSummary, PlayerRecord, PLAYER1, PLAYER2};
pub use turn::{move_id, Action, ActionDetails, HitOutcome, MoveRef, Turn, MALFORMED_ACTION_PREFIX};
