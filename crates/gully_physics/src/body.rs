//! Kinematic body capability

use crate::contact::Contact;
use glam::Vec2;

/// Outcome of one resolved move.
#[derive(Debug, Clone, Default)]
pub struct MoveResult {
    /// Position after the move.
    pub position: Vec2,
    /// Velocity after the solver clipped it against surfaces.
    pub velocity: Vec2,
    /// Whether the body ended the move standing on a floor.
    pub grounded: bool,
    /// Whether the body struck a ceiling during the move.
    pub on_ceiling: bool,
    /// Whether the body is pressed against a wall.
    pub on_wall: bool,
    /// Contacts resolved during the move.
    pub contacts: Vec<Contact>,
}

/// Capability the character controller requires from a physics body.
///
/// The floor/ceiling/wall queries reflect the most recent
/// [`move_and_resolve`](KinematicBody::move_and_resolve) call, matching how
/// a kinematic solver exposes the result of its last slide.
pub trait KinematicBody {
    /// Current world position.
    fn position(&self) -> Vec2;

    /// Teleport the body without resolving collisions.
    ///
    /// Used for contact-break nudges after a bounce.
    fn set_position(&mut self, position: Vec2);

    /// Whether the last resolved move left the body on a floor.
    fn on_floor(&self) -> bool;

    /// Whether the last resolved move struck a ceiling.
    fn on_ceiling(&self) -> bool;

    /// Whether the last resolved move pressed the body against a wall.
    fn on_wall(&self) -> bool;

    /// Move by `velocity * delta`, resolving collisions against the world,
    /// and report the contacts produced by the move.
    fn move_and_resolve(&mut self, velocity: Vec2, delta: f32) -> MoveResult;
}
