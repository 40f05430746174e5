//! Battle state tracking from log messages

mod battle;
mod moments;
mod stats;
mod turns;
mod updater;

pub use battle::{designator, player_to_index, BattleTracker};
pub use moments::{KeyMomentDetector, BIG_HIT_THRESHOLD};
pub use stats::StatsAggregator;
pub use turns::{ActionRef, TurnAssembler, TurnState};
