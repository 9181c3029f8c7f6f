//! Mutable character state
//!
//! Exclusively owned and mutated by the controller; no other component
//! holds a reference across ticks.

use crate::fall::FallTracker;
use glam::Vec2;
use gully_combat::HealthState;
use serde::{Deserialize, Serialize};

/// Whether the character is alive or dead.
///
/// Dead is terminal until an explicit revive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LifeCycle {
    Alive,
    Dead,
}

/// Horizontal facing, flipped by movement input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    /// Direction sign: -1 for left, +1 for right.
    pub fn sign(self) -> f32 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }
}

/// Full mutable state of one character.
#[derive(Debug, Clone)]
pub struct CharacterState {
    /// World position, synced from the body after each resolved move.
    pub position: Vec2,
    /// Velocity fed to the next resolved move.
    pub velocity: Vec2,
    /// Standing on a floor. Derived each tick from the physics query.
    pub grounded: bool,
    /// Which way the character faces.
    pub facing: Facing,
    /// Health, damage windows, and death.
    pub health: HealthState,

    /// Remaining jump-buffer window.
    pub jump_buffer_timer: f32,
    /// Remaining coyote window.
    pub coyote_timer: f32,
    /// Jumps consumed this airborne span.
    pub jump_count: u32,
    /// The double-jump animation set is active.
    pub double_jump_set: bool,
    /// A double jump just started; holds the rise animation for a beat.
    pub double_jump_starting: bool,

    /// Gravity is suspended at the jump apex.
    pub apex_locked: bool,
    /// Remaining hover time while apex-locked.
    pub float_timer: f32,
    /// The one hover allowed this airborne span has been used.
    pub floated_this_span: bool,
    /// The hover ended this tick; forces the fall animation immediately.
    pub apex_just_ended: bool,

    /// Post-touchdown movement penalty is active.
    pub landing: bool,
    /// Remaining landing-penalty time.
    pub landing_timer: f32,

    /// Descent measurement for lethal falls.
    pub fall: FallTracker,
    /// The character has actually fallen this span (not just left the
    /// floor query for a frame); gates the landing transition.
    pub was_airborne: bool,
    /// Vertical velocity at the end of the previous tick, for classifying
    /// the touchdown.
    pub previous_velocity_y: f32,

    /// Time spent falling since the last rise, for the fall-animation beat.
    pub fall_anim_timer: f32,
    /// Run input currently shaping the target speed.
    pub running: bool,
}

impl CharacterState {
    /// Fresh state at a spawn point: full health, all timers zero, alive.
    pub fn new(spawn: Vec2, health: HealthState) -> Self {
        Self {
            position: spawn,
            velocity: Vec2::ZERO,
            grounded: false,
            facing: Facing::Right,
            health,
            jump_buffer_timer: 0.0,
            coyote_timer: 0.0,
            jump_count: 0,
            double_jump_set: false,
            double_jump_starting: false,
            apex_locked: false,
            float_timer: 0.0,
            floated_this_span: false,
            apex_just_ended: false,
            landing: false,
            landing_timer: 0.0,
            fall: FallTracker::default(),
            was_airborne: false,
            previous_velocity_y: 0.0,
            fall_anim_timer: 0.0,
            running: false,
        }
    }

    /// Current life-cycle phase, derived from health.
    pub fn life_cycle(&self) -> LifeCycle {
        if self.health.is_dead() {
            LifeCycle::Dead
        } else {
            LifeCycle::Alive
        }
    }

    /// Whether normal input processing is enabled: alive and not inside
    /// the hurt lockout.
    pub fn can_act(&self) -> bool {
        self.health.is_alive() && !self.health.is_hurt()
    }
}
