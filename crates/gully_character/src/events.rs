//! Tick outputs
//!
//! Everything the outside world learns from a tick comes back as explicit
//! return values; the core holds no callbacks and emits no signals.

use crate::animation::AnimationKey;
use crate::state::{Facing, LifeCycle};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Why the character died.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeathCause {
    /// Fell farther than the lethal distance.
    LethalFall,
    /// Health reached zero.
    HealthDepleted,
    /// Touched an instant-kill hazard.
    Hazard,
}

/// A state transition that occurred during a tick or a damage/revive call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickEvent {
    /// Health changed; carries the new value.
    HealthChanged(i32),
    /// The character died.
    Died(DeathCause),
    /// The character returned from the dead.
    Revived,
    /// Touched down after a tracked descent.
    Landed {
        /// Total descent distance of the span.
        fall_distance: f32,
    },
    /// Bounced off a hostile body struck from above.
    Bounced,
    /// The apex hover engaged.
    ApexHoverStarted,
    /// The apex hover released.
    ApexHoverEnded,
    /// The hurt lockout ended; input control returns.
    HurtEnded,
    /// The invincibility window closed.
    InvincibilityEnded,
}

/// Cosmetic camera request emitted by a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraRequest {
    /// Ease the camera zoom toward this target.
    Zoom { target: f32 },
    /// One-shot shake, e.g. on a hard landing after death.
    Shake {
        intensity: f32,
        duration: f32,
        bursts: u32,
    },
}

/// Everything a tick produced.
#[derive(Debug, Clone)]
pub struct TickReport {
    /// Animation to show for this tick.
    pub animation: AnimationKey,
    /// Current facing.
    pub facing: Facing,
    /// Position after the resolved move.
    pub position: Vec2,
    /// Velocity after the resolved move and reactions.
    pub velocity: Vec2,
    /// Current health.
    pub health: i32,
    /// Alive or dead.
    pub life_cycle: LifeCycle,
    /// Camera feedback for this tick, if any.
    pub camera: Option<CameraRequest>,
    /// Transitions that occurred this tick, in order.
    pub events: Vec<TickEvent>,
}
