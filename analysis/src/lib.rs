//! Battle log analysis for Pokemon Showdown logs.
//!
//! [`parse_showdown_log`] (or a configured [`LogAnalyzer`]) reads a raw log
//! and produces a [`BattleSummary`]: players, numbered turns with their
//! actions, aggregate statistics and notable moments.
//!
//! ```
//! let log = "|player|p1|Alice|1|\n|player|p2|Bob|1|\n|turn|1\n|move|p1a: Pikachu|Thunderbolt|p2a: Gyarados\n|win|Alice";
//! let summary = vgcscope_analysis::parse_showdown_log(log).unwrap();
//!
//! assert_eq!(summary.player1.name, "Alice");
//! assert_eq!(summary.winner, "player1");
//! assert_eq!(summary.stats.move_count("thunderbolt"), 1);
//! ```

use thiserror::Error;

mod analyzer;
mod config;
pub mod tracking;
pub mod types;

pub use analyzer::LogAnalyzer;
pub use config::{AnalyzerConfig, DEFAULT_MAX_INPUT_BYTES, MAX_LOG_BYTES_ENV};
pub use tracking::BattleTracker;
pub use types::{
    Action, ActionDetails, BattleSummary, HitOutcome, KeyMoment, MomentType, MoveRef,
    PlayerRecord, PlayerTotals, Significance, Stats, Turn,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("Battle log is {size} bytes, over the {limit} byte limit")]
    InputTooLarge { size: usize, limit: usize },
}

/// Parse a raw battle log with the default configuration
///
/// Never fails on malformed content; unrecognized or broken lines are
/// skipped or recorded as generic actions.
pub fn parse_showdown_log(raw: &str) -> Result<BattleSummary, AnalysisError> {
    LogAnalyzer::default().parse(raw)
}
