//! Character tuning parameters

use crate::error::{CharacterError, Result};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Tunable parameters for one character.
///
/// Immutable once the controller is built. Y points down, so upward
/// velocities (`jump_velocity`, `enemy_bounce_velocity`, the Y component of
/// `knockback`) are negative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterConfig {
    /// Top horizontal speed while walking.
    pub walk_speed: f32,

    /// Top horizontal speed while the run input is held.
    pub run_speed: f32,

    /// Horizontal velocity change per tick toward the target speed.
    pub acceleration: f32,

    /// Vertical velocity set on a jump (negative = up).
    pub jump_velocity: f32,

    /// Multiplier applied to upward velocity when the jump input is
    /// released early, shortening the hop.
    pub jump_cut_factor: f32,

    /// Total jumps per airborne span, ground jump included.
    pub max_jumps: u32,

    /// How long the apex hover holds the character in place.
    pub max_float_time: f32,

    /// Vertical speed band around zero that triggers the apex hover.
    pub apex_trigger_range: f32,

    /// Grace window during which an early jump press is honored on landing.
    pub jump_buffer_time: f32,

    /// Grace window after leaving a ledge during which a jump still counts
    /// as grounded.
    pub coyote_time: f32,

    /// Gravity multiplier while already descending.
    pub fall_gravity_multiplier: f32,

    /// Minimum downward speed at touchdown that counts as a hard landing.
    pub landing_velocity_threshold: f32,

    /// How long the post-touchdown movement penalty lasts.
    pub landing_stun_time: f32,

    /// Total descent distance that kills on the way down.
    pub lethal_fall_distance: f32,

    /// Maximum health.
    pub max_health: i32,

    /// Invincibility window after taking a hit.
    pub invincibility_duration: f32,

    /// Input lockout after taking a hit; capped to the invincibility window.
    pub hurt_lock_duration: f32,

    /// Shove applied on a hit, mirrored away from facing (Y up = negative).
    pub knockback: Vec2,

    /// Vertical velocity granted by stomping a hostile body (negative = up).
    pub enemy_bounce_velocity: f32,

    /// How long a fall must last before the fall animation replaces rise.
    pub fall_animation_delay: f32,

    /// Camera zoom target requested while sprinting.
    pub run_zoom: f32,

    /// Camera shake intensity on a hard landing after death.
    pub death_shake_intensity: f32,

    /// Camera shake duration on a hard landing after death.
    pub death_shake_duration: f32,
}

impl Default for CharacterConfig {
    fn default() -> Self {
        Self {
            walk_speed: 300.0,
            run_speed: 650.0,
            acceleration: 25.0,
            jump_velocity: -550.0,
            jump_cut_factor: 0.5,
            max_jumps: 2,
            max_float_time: 0.15,
            apex_trigger_range: 40.0,
            jump_buffer_time: 0.15,
            coyote_time: 0.15,
            fall_gravity_multiplier: 2.5,
            landing_velocity_threshold: 500.0,
            landing_stun_time: 0.2,
            lethal_fall_distance: 2160.0,
            max_health: 100,
            invincibility_duration: 0.8,
            hurt_lock_duration: 0.3,
            knockback: Vec2::new(350.0, -300.0),
            enemy_bounce_velocity: -600.0,
            fall_animation_delay: 0.4,
            run_zoom: 0.9,
            death_shake_intensity: 8.0,
            death_shake_duration: 0.15,
        }
    }
}

impl CharacterConfig {
    /// Set the jump velocity (negative = up).
    pub fn with_jump_velocity(mut self, velocity: f32) -> Self {
        self.jump_velocity = velocity;
        self
    }

    /// Set the number of jumps per airborne span.
    pub fn with_max_jumps(mut self, jumps: u32) -> Self {
        self.max_jumps = jumps;
        self
    }

    /// Set the input-forgiveness windows.
    pub fn with_forgiveness(mut self, buffer: f32, coyote: f32) -> Self {
        self.jump_buffer_time = buffer;
        self.coyote_time = coyote;
        self
    }

    /// Set the lethal fall distance.
    pub fn with_lethal_fall_distance(mut self, distance: f32) -> Self {
        self.lethal_fall_distance = distance;
        self
    }

    /// Set maximum health.
    pub fn with_max_health(mut self, health: i32) -> Self {
        self.max_health = health;
        self
    }

    /// Set the hit-response windows.
    pub fn with_hit_windows(mut self, invincibility: f32, hurt_lock: f32) -> Self {
        self.invincibility_duration = invincibility;
        self.hurt_lock_duration = hurt_lock;
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        let durations = [
            ("max_float_time", self.max_float_time),
            ("jump_buffer_time", self.jump_buffer_time),
            ("coyote_time", self.coyote_time),
            ("landing_stun_time", self.landing_stun_time),
            ("invincibility_duration", self.invincibility_duration),
            ("hurt_lock_duration", self.hurt_lock_duration),
            ("fall_animation_delay", self.fall_animation_delay),
            ("death_shake_duration", self.death_shake_duration),
        ];
        for (name, value) in durations {
            if value < 0.0 {
                return Err(CharacterError::InvalidConfig(format!(
                    "{name} must be >= 0, got {value}"
                )));
            }
        }

        if self.max_jumps < 1 {
            return Err(CharacterError::InvalidConfig(
                "max_jumps must be at least 1".into(),
            ));
        }
        if self.max_health < 1 {
            return Err(CharacterError::InvalidConfig(
                "max_health must be at least 1".into(),
            ));
        }
        if self.jump_velocity >= 0.0 {
            return Err(CharacterError::InvalidConfig(
                "jump_velocity must point up (negative)".into(),
            ));
        }
        if self.enemy_bounce_velocity >= 0.0 {
            return Err(CharacterError::InvalidConfig(
                "enemy_bounce_velocity must point up (negative)".into(),
            ));
        }
        if self.walk_speed < 0.0 || self.run_speed < 0.0 || self.acceleration < 0.0 {
            return Err(CharacterError::InvalidConfig(
                "speeds and acceleration must be >= 0".into(),
            ));
        }
        if self.lethal_fall_distance <= 0.0 {
            return Err(CharacterError::InvalidConfig(
                "lethal_fall_distance must be positive".into(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(CharacterConfig::default().validate().is_ok());
    }

    #[test]
    fn test_negative_duration_rejected() {
        let config = CharacterConfig {
            coyote_time: -0.1,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_jumps_rejected() {
        let config = CharacterConfig::default().with_max_jumps(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_downward_jump_rejected() {
        let config = CharacterConfig::default().with_jump_velocity(550.0);
        assert!(config.validate().is_err());
    }
}
