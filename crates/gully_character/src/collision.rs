//! Reactions to resolved contacts: the stomp bounce
//!
//! Runs strictly after the physics move, over the contacts that move
//! produced. A hostile body struck from above while not already being
//! launched upward grants an upward bounce and one fresh jump.

use crate::config::CharacterConfig;
use crate::state::CharacterState;
use gully_physics::MoveResult;

/// Distance the character is nudged up after a bounce so the contact is
/// broken and cannot re-trigger next tick.
const CONTACT_BREAK_NUDGE: f32 = 2.0;

/// Inspect this tick's contacts for a stomp. Returns true if a bounce was
/// applied; the caller must push the nudged position back to the body and
/// clear fall tracking.
pub(crate) fn respond(
    state: &mut CharacterState,
    config: &CharacterConfig,
    result: &MoveResult,
) -> bool {
    for contact in &result.contacts {
        // Ignore the hostile body while already flying up, otherwise the
        // bounce re-triggers every tick the contact persists
        if contact.is_hostile() && contact.struck_from_above() && state.velocity.y >= 0.0 {
            state.velocity.y = config.enemy_bounce_velocity;
            state.position.y -= CONTACT_BREAK_NUDGE;
            state.landing = false;
            state.was_airborne = true;
            state.grounded = false;
            state.jump_count = 1;
            state.floated_this_span = false;
            log::debug!("stomp bounce at y {}", state.position.y);
            return true;
        }
    }
    false
}
