//! Animation key selection
//!
//! A pure mapping from character state to a symbolic key, evaluated last in
//! the tick and never mutating state. Priority: Dead > Hurt > Landing >
//! ApexHover > Airborne > Grounded.

use crate::config::CharacterConfig;
use crate::movement::FALLING_THRESHOLD;
use crate::state::CharacterState;
use serde::{Deserialize, Serialize};

/// Horizontal speed below which the character reads as standing still.
const IDLE_SPEED: f32 = 5.0;
/// Margin over walk speed that distinguishes the sprint animation.
const SPRINT_MARGIN: f32 = 50.0;
/// Downward speed that forces the fall animation regardless of the delay.
const FAST_FALL_SPEED: f32 = 400.0;

/// Closed set of animation keys the controller can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnimationKey {
    Idle,
    Run,
    Sprint,
    JumpRise,
    JumpFall,
    DoubleJumpRise,
    DoubleJumpFall,
    DoubleJumpApex,
    Land,
    DoubleJumpLand,
    Hurt,
    Death,
}

impl AnimationKey {
    /// Asset name for this key.
    ///
    /// The table is total over the enum, so a key can never fail to resolve
    /// at runtime.
    pub const fn asset_name(self) -> &'static str {
        match self {
            Self::Idle => "Idle_Animation",
            Self::Run => "Run",
            Self::Sprint => "Sprint",
            Self::JumpRise => "Jump_Rise",
            Self::JumpFall => "Jump_Fall",
            Self::DoubleJumpRise => "DoubleJump_Rise",
            Self::DoubleJumpFall => "DoubleJump_Fall",
            Self::DoubleJumpApex => "DoubleJump_Apex",
            Self::Land => "Land",
            Self::DoubleJumpLand => "DoubleJump_Land",
            Self::Hurt => "Hurt",
            Self::Death => "Death_Animation",
        }
    }
}

/// Derive the animation key for the current state.
pub(crate) fn select(state: &CharacterState, config: &CharacterConfig) -> AnimationKey {
    if state.health.is_dead() {
        return AnimationKey::Death;
    }
    if state.health.is_hurt() {
        return AnimationKey::Hurt;
    }
    if state.landing {
        return if state.double_jump_set {
            AnimationKey::DoubleJumpLand
        } else {
            AnimationKey::Land
        };
    }
    if state.apex_locked {
        return AnimationKey::DoubleJumpApex;
    }

    if !state.grounded {
        let (rise, fall) = if state.double_jump_set {
            (AnimationKey::DoubleJumpRise, AnimationKey::DoubleJumpFall)
        } else {
            (AnimationKey::JumpRise, AnimationKey::JumpFall)
        };

        // A just-started double jump holds its rise pose for a beat
        if state.double_jump_starting {
            return rise;
        }
        if state.velocity.y <= FALLING_THRESHOLD {
            return rise;
        }
        // Falling: hold the rise pose until the delay passes, unless the
        // fall is already fast or the apex hover just released
        if state.fall_anim_timer > config.fall_animation_delay
            || state.velocity.y > FAST_FALL_SPEED
            || state.apex_just_ended
        {
            return fall;
        }
        return rise;
    }

    let speed = state.velocity.x.abs();
    if speed < IDLE_SPEED {
        AnimationKey::Idle
    } else if speed > config.walk_speed + SPRINT_MARGIN {
        AnimationKey::Sprint
    } else {
        AnimationKey::Run
    }
}
