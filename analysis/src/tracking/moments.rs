//! Key moment detection, run inline with dispatch

use crate::types::{KeyMoment, MomentType, Significance};

/// Damage (in percentage points) a single hit needs to count as a big hit
pub const BIG_HIT_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, Default)]
pub struct KeyMomentDetector {
    moments: Vec<KeyMoment>,
}

impl KeyMomentDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn moments(&self) -> &[KeyMoment] {
        &self.moments
    }

    /// A combatant fainted
    pub fn on_faint(&mut self, turn: u32, pokemon: &str, player: &str) {
        let description = if player.is_empty() {
            format!("{} fainted", pokemon)
        } else {
            format!("{} ({}) fainted", pokemon, player)
        };
        self.push(turn, MomentType::KO, description, Significance::High);
    }

    /// A combatant's health dropped from `before` to `after` (fractions)
    pub fn on_damage(
        &mut self,
        turn: u32,
        pokemon: &str,
        before: f64,
        after: f64,
        super_effective: bool,
    ) {
        let lost = (before - after) * 100.0;

        if before >= 1.0 && after <= 0.0 {
            self.push(
                turn,
                MomentType::OneHitKO,
                format!("{} went down from full health in one hit", pokemon),
                Significance::High,
            );
        } else if lost >= BIG_HIT_THRESHOLD {
            let mut description = format!("{} lost {:.0}% of its HP in one hit", pokemon, lost);
            if super_effective {
                description.push_str(" (super effective)");
            }
            self.push(turn, MomentType::BigHit, description, Significance::Medium);
        }
    }

    /// A critical hit landed on `pokemon`
    pub fn on_crit(&mut self, turn: u32, pokemon: &str) {
        self.push(
            turn,
            MomentType::CriticalHit,
            format!("Critical hit on {}", pokemon),
            Significance::Medium,
        );
    }

    pub fn finish(self) -> Vec<KeyMoment> {
        self.moments
    }

    fn push(
        &mut self,
        turn: u32,
        moment_type: MomentType,
        description: String,
        significance: Significance,
    ) {
        self.moments.push(KeyMoment {
            turn,
            moment_type,
            description,
            significance,
        });
    }
}
