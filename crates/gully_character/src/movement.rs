//! Horizontal acceleration and gravity integration

use crate::config::CharacterConfig;
use crate::input::InputFrame;
use crate::state::{CharacterState, Facing};

/// Axis magnitude below which input counts as neutral.
pub(crate) const AXIS_DEADZONE: f32 = 0.1;
/// Horizontal speed below which velocity snaps to exactly zero, keeping
/// the idle animation from flickering.
pub(crate) const SNAP_EPSILON: f32 = 1.0;
/// Small downward velocity held while grounded so the floor query stays
/// stable between ticks.
pub(crate) const GROUND_STICK_VELOCITY: f32 = 10.0;
/// Downward speed past which the character counts as genuinely falling.
pub(crate) const FALLING_THRESHOLD: f32 = 5.0;
/// Target-speed factor while the landing penalty is active.
const LANDING_SPEED_FACTOR: f32 = 0.7;
/// Deceleration factor while hurt.
const HURT_DRAG_FACTOR: f32 = 0.5;

/// Move `current` toward `target` by at most `max_delta`.
pub(crate) fn move_toward(current: f32, target: f32, max_delta: f32) -> f32 {
    let diff = target - current;
    if diff.abs() <= max_delta {
        target
    } else {
        current + max_delta * diff.signum()
    }
}

/// Horizontal control: constant acceleration toward the walk or run speed,
/// landing penalty, facing flip. Returns the camera zoom target hint.
pub(crate) fn horizontal(
    state: &mut CharacterState,
    config: &CharacterConfig,
    input: &InputFrame,
    delta: f32,
) -> f32 {
    if state.landing {
        // A deliberate move cancels the penalty early
        if input.axis.x.abs() > AXIS_DEADZONE {
            state.landing = false;
        }
        state.landing_timer -= delta;
        if state.landing_timer <= 0.0 {
            state.landing = false;
        }
    }

    state.running = input.run_held && input.axis.x.abs() > AXIS_DEADZONE;
    let max_speed = if state.running {
        config.run_speed
    } else {
        config.walk_speed
    };
    let target_speed = if state.landing {
        max_speed * LANDING_SPEED_FACTOR
    } else {
        max_speed
    };

    if input.axis.x.abs() > AXIS_DEADZONE {
        state.facing = if input.axis.x < 0.0 {
            Facing::Left
        } else {
            Facing::Right
        };
        state.velocity.x = move_toward(
            state.velocity.x,
            input.axis.x * target_speed,
            config.acceleration,
        );
    } else {
        state.velocity.x = move_toward(state.velocity.x, 0.0, config.acceleration);
        if state.velocity.x.abs() < SNAP_EPSILON {
            state.velocity.x = 0.0;
        }
    }

    if state.running && state.velocity.x.abs() > config.walk_speed {
        config.run_zoom
    } else {
        1.0
    }
}

/// Deceleration while the hurt lockout suppresses input.
pub(crate) fn hurt_drag(state: &mut CharacterState, config: &CharacterConfig) {
    state.velocity.x = move_toward(state.velocity.x, 0.0, config.acceleration * HURT_DRAG_FACTOR);
}

/// Gravity integration while airborne.
///
/// The fall multiplier amplifies gravity only while already descending, so
/// the fall is snappier than the rise. The apex lock suspends gravity
/// entirely; the two are mutually exclusive within a tick.
pub(crate) fn vertical(
    state: &mut CharacterState,
    config: &CharacterConfig,
    gravity: f32,
    delta: f32,
) {
    if state.grounded || state.apex_locked {
        return;
    }

    let effective = if state.velocity.y > 0.0 {
        gravity * config.fall_gravity_multiplier
    } else {
        gravity
    };
    state.velocity.y += effective * delta;

    if state.velocity.y > FALLING_THRESHOLD {
        state.was_airborne = true;
    }
}
