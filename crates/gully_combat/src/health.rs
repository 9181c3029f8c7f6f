//! Health state and the hurt/invincible window machine
//!
//! The state machine is Normal -> Hurt -> Invincible -> Normal, with an
//! orthogonal terminal Dead state. Hurt is always a strict sub-window of
//! Invincible: taking a hit starts both countdowns, the hurt lockout ends
//! first, and further damage is dropped until the invincibility window
//! closes.

use crate::damage::DamageInfo;
use serde::{Deserialize, Serialize};

/// Windows that expired during an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthEvent {
    /// The hurt lockout ended; input control returns.
    HurtEnded,
    /// The invincibility window closed; damage lands again.
    InvincibilityEnded,
}

/// What a damage application did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Dropped: the victim was dead or inside its invincibility window.
    Ignored,
    /// Health was reduced and the hurt/invincible windows started.
    Hurt { remaining: i32 },
    /// Health reached zero; the victim is now dead.
    Fatal,
}

/// Health component for a character.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthState {
    /// Current health, always in `[0, max]`.
    pub current: i32,
    /// Maximum health.
    pub max: i32,
    /// Invincibility window started by each hit (i-frames).
    pub invincibility_on_hit: f32,
    /// Hurt lockout started by each hit; must not exceed the i-frame window.
    pub hurt_lock: f32,
    /// Remaining invincibility time.
    #[serde(skip)]
    pub invincible_timer: f32,
    /// Remaining hurt lockout time.
    #[serde(skip)]
    pub hurt_timer: f32,
    /// Whether the character is dead. Terminal until an explicit revive.
    #[serde(skip)]
    pub dead: bool,
}

impl HealthState {
    /// Create a new health state at full health.
    pub fn new(max: i32) -> Self {
        Self {
            current: max,
            max,
            invincibility_on_hit: 0.0,
            hurt_lock: 0.0,
            invincible_timer: 0.0,
            hurt_timer: 0.0,
            dead: false,
        }
    }

    /// Set the invincibility window started by each hit.
    pub fn with_invincibility_on_hit(mut self, duration: f32) -> Self {
        self.invincibility_on_hit = duration;
        self
    }

    /// Set the hurt lockout started by each hit.
    pub fn with_hurt_lock(mut self, duration: f32) -> Self {
        self.hurt_lock = duration;
        self
    }

    /// Check if alive.
    pub fn is_alive(&self) -> bool {
        !self.dead
    }

    /// Check if dead.
    pub fn is_dead(&self) -> bool {
        self.dead
    }

    /// Whether the hurt lockout is active.
    pub fn is_hurt(&self) -> bool {
        self.hurt_timer > 0.0
    }

    /// Whether the invincibility window is active.
    pub fn is_invincible(&self) -> bool {
        self.invincible_timer > 0.0
    }

    /// Apply a hit.
    ///
    /// Hits landing while dead or invincible are silently dropped; that is
    /// the i-frame contract, not an error. A fatal hit clamps health to
    /// zero and zeroes both windows: Dead preempts Hurt and Invincible.
    pub fn apply_damage(&mut self, damage: &DamageInfo) -> DamageOutcome {
        if self.dead || self.is_invincible() {
            return DamageOutcome::Ignored;
        }

        self.current = (self.current - damage.amount).clamp(0, self.max);

        if self.current == 0 {
            self.dead = true;
            self.invincible_timer = 0.0;
            self.hurt_timer = 0.0;
            return DamageOutcome::Fatal;
        }

        self.invincible_timer = self.invincibility_on_hit;
        self.hurt_timer = self.hurt_lock.min(self.invincibility_on_hit);
        DamageOutcome::Hurt {
            remaining: self.current,
        }
    }

    /// Kill outright, bypassing the invincibility window.
    ///
    /// Used for instant-death causes (lethal falls, kill planes). Returns
    /// true if the character died now; killing a corpse is a no-op.
    pub fn kill(&mut self) -> bool {
        if self.dead {
            return false;
        }
        self.dead = true;
        self.current = 0;
        self.invincible_timer = 0.0;
        self.hurt_timer = 0.0;
        true
    }

    /// Return from the dead at full health.
    ///
    /// Only meaningful from Dead; reviving the living is a no-op. Returns
    /// true if a revive happened.
    pub fn revive(&mut self) -> bool {
        if !self.dead {
            return false;
        }
        self.dead = false;
        self.current = self.max;
        self.invincible_timer = 0.0;
        self.hurt_timer = 0.0;
        log::info!("character revived at {} health", self.current);
        true
    }

    /// Advance the windows by one tick.
    pub fn update(&mut self, delta: f32) -> Vec<HealthEvent> {
        let mut events = Vec::new();

        if self.hurt_timer > 0.0 {
            self.hurt_timer -= delta;
            if self.hurt_timer <= 0.0 {
                self.hurt_timer = 0.0;
                events.push(HealthEvent::HurtEnded);
            }
        }

        if self.invincible_timer > 0.0 {
            self.invincible_timer -= delta;
            if self.invincible_timer <= 0.0 {
                self.invincible_timer = 0.0;
                events.push(HealthEvent::InvincibilityEnded);
            }
        }

        events
    }
}
