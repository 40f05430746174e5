//! Key moments: notable events picked out while parsing

use std::fmt;

/// A notable event, ranked by significance
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct KeyMoment {
    /// Turn the moment happened on
    pub turn: u32,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub moment_type: MomentType,
    pub description: String,
    pub significance: Significance,
}

/// Kind of key moment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MomentType {
    /// A combatant fainted
    #[cfg_attr(feature = "serde", serde(rename = "KO"))]
    KO,
    /// A combatant went from full health to fainted in a single hit
    #[cfg_attr(feature = "serde", serde(rename = "OHKO"))]
    OneHitKO,
    CriticalHit,
    /// A single hit took at least half of the target's max HP
    BigHit,
}

impl MomentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MomentType::KO => "KO",
            MomentType::OneHitKO => "OHKO",
            MomentType::CriticalHit => "CriticalHit",
            MomentType::BigHit => "BigHit",
        }
    }
}

impl fmt::Display for MomentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// How notable a key moment is (Low < Medium < High)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Significance {
    Low,
    Medium,
    High,
}

impl Significance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Significance::Low => "low",
            Significance::Medium => "medium",
            Significance::High => "high",
        }
    }
}

impl fmt::Display for Significance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
