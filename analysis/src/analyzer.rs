//! Log analyzer - drives tokenizer, dispatcher and summary assembly

use tracing::{debug, instrument, warn};
use vgcscope_protocol::{parse_battle_message, tokenize, BattleMessage};

use crate::config::AnalyzerConfig;
use crate::tracking::BattleTracker;
use crate::types::BattleSummary;
use crate::AnalysisError;

/// Turns raw battle logs into summaries
///
/// Holds only configuration, so one analyzer can be shared freely between
/// threads; every call to [`LogAnalyzer::parse`] builds its own state.
#[derive(Debug, Clone, Default)]
pub struct LogAnalyzer {
    config: AnalyzerConfig,
}

impl LogAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Parse a raw battle log into a summary
    ///
    /// Malformed or partial logs produce a partial (possibly empty) summary.
    /// The only error is an input larger than the configured ceiling.
    #[instrument(level = "debug", skip(self, raw), fields(bytes = raw.len()))]
    pub fn parse(&self, raw: &str) -> Result<BattleSummary, AnalysisError> {
        if raw.len() > self.config.max_input_bytes {
            warn!(limit = self.config.max_input_bytes, "battle log too large");
            return Err(AnalysisError::InputTooLarge {
                size: raw.len(),
                limit: self.config.max_input_bytes,
            });
        }

        let mut battle = BattleTracker::new();

        for line in tokenize(raw) {
            let message = match parse_battle_message(&line) {
                Ok(message) => message,
                Err(err) => {
                    debug!(line = line.number, kind = line.kind(), %err, "malformed line");
                    BattleMessage::malformed(&line)
                }
            };

            battle.update(&message);

            if battle.ended {
                break;
            }
        }

        let summary = battle.into_summary();
        debug!(
            id = %summary.id,
            turns = summary.turns.len(),
            winner = %summary.winner,
            "battle log analyzed"
        );

        Ok(summary)
    }
}
