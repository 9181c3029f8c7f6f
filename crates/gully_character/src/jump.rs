//! Jump admission: buffered input, coyote grace, air jumps, apex hover
//!
//! Rules evaluate in a fixed order each tick: buffer refresh, ground reset
//! or coyote decay, primary/coyote jump, air jump, jump cut, hover trigger,
//! hover tick. The buffer and coyote windows are consumed atomically on a
//! successful jump, so a press never grants more than one.

use crate::config::CharacterConfig;
use crate::input::InputFrame;
use crate::state::CharacterState;

/// Which jump was admitted this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum JumpStart {
    /// Ground or coyote jump.
    Primary,
    /// Mid-air jump.
    Air,
}

/// Apex-hover transition observed this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HoverChange {
    None,
    Started,
    /// The hover ended; fall tracking must re-arm from the current height.
    Ended,
}

/// Refresh the jump buffer on a press, otherwise let it decay.
pub(crate) fn refresh_buffer(
    state: &mut CharacterState,
    config: &CharacterConfig,
    input: &InputFrame,
    delta: f32,
) {
    if input.jump_pressed {
        state.jump_buffer_timer = config.jump_buffer_time;
    } else {
        state.jump_buffer_timer = (state.jump_buffer_timer - delta).max(0.0);
    }
}

/// Strict reset while standing on a floor.
pub(crate) fn ground_reset(state: &mut CharacterState, config: &CharacterConfig) {
    state.jump_count = 0;
    state.coyote_timer = config.coyote_time;
    state.double_jump_starting = false;
    state.apex_locked = false;
    state.floated_this_span = false;
    state.double_jump_set = false;
    state.float_timer = 0.0;
    state.apex_just_ended = false;
}

/// Coyote decay while airborne.
pub(crate) fn decay_coyote(state: &mut CharacterState, delta: f32) {
    state.coyote_timer = (state.coyote_timer - delta).max(0.0);
}

/// Evaluate jump admission and the jump cut for this tick's input.
pub(crate) fn process_input(
    state: &mut CharacterState,
    config: &CharacterConfig,
    input: &InputFrame,
) -> Option<JumpStart> {
    let mut started = None;

    if state.jump_buffer_timer > 0.0 && state.coyote_timer > 0.0 {
        // Both windows are consumed together; a buffered press cannot be
        // spent twice
        state.velocity.y = config.jump_velocity;
        state.jump_count = 1;
        state.jump_buffer_timer = 0.0;
        state.coyote_timer = 0.0;
        state.double_jump_set = false;
        state.landing = false;
        started = Some(JumpStart::Primary);
    } else if input.jump_pressed && state.jump_count > 0 && state.jump_count < config.max_jumps {
        state.velocity.y = config.jump_velocity;
        state.jump_count += 1;
        state.double_jump_set = true;
        state.double_jump_starting = true;
        state.apex_locked = false;
        started = Some(JumpStart::Air);
    }

    if input.jump_released && state.velocity.y < 0.0 {
        state.velocity.y *= config.jump_cut_factor;
    }

    if let Some(kind) = started {
        log::debug!("jump admitted: {kind:?}, count {}", state.jump_count);
    }
    started
}

/// Apex hover trigger and hold. Call only while airborne.
pub(crate) fn update_hover(
    state: &mut CharacterState,
    config: &CharacterConfig,
    on_ceiling: bool,
    delta: f32,
) -> HoverChange {
    let mut change = HoverChange::None;

    if !state.apex_locked
        && state.jump_count == config.max_jumps
        && !state.floated_this_span
        && state.velocity.y.abs() < config.apex_trigger_range
        && !on_ceiling
    {
        state.apex_locked = true;
        state.double_jump_starting = false;
        state.float_timer = config.max_float_time;
        state.floated_this_span = true;
        state.velocity.y = 0.0;
        state.fall_anim_timer = 0.0;
        change = HoverChange::Started;
        log::debug!("apex hover engaged for {}s", config.max_float_time);
    }

    if state.apex_locked {
        state.velocity.y = 0.0;
        state.float_timer -= delta;
        if state.float_timer <= 0.0 || on_ceiling {
            state.apex_locked = false;
            state.float_timer = 0.0;
            state.apex_just_ended = true;
            change = HoverChange::Ended;
            log::debug!("apex hover released");
        }
    }

    change
}
