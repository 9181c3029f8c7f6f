//! Damage descriptions

use serde::{Deserialize, Serialize};

/// Where a hit came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DamageSource {
    /// Touched by an enemy body.
    Enemy,
    /// A level hazard (spikes, crushers).
    Hazard,
    /// Scripted or debug damage.
    Script,
}

impl Default for DamageSource {
    fn default() -> Self {
        Self::Enemy
    }
}

/// Information about a single hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageInfo {
    /// Health points removed.
    pub amount: i32,
    /// What dealt the hit.
    pub source: DamageSource,
    /// Whether the hit should shove the victim.
    pub knockback: bool,
}

impl DamageInfo {
    /// Create new damage info with knockback enabled.
    pub fn new(amount: i32) -> Self {
        Self {
            amount,
            source: DamageSource::Enemy,
            knockback: true,
        }
    }

    /// Set the source of the hit.
    pub fn with_source(mut self, source: DamageSource) -> Self {
        self.source = source;
        self
    }

    /// Disable the knockback shove for this hit.
    pub fn without_knockback(mut self) -> Self {
        self.knockback = false;
        self
    }
}
