//! Gully Physics - Kinematic Capability Layer
//!
//! This crate defines the narrow physics surface the character core depends
//! on: contact data returned by a resolved move, and the [`KinematicBody`]
//! capability trait. The collision solver itself lives outside this layer;
//! anything that can move a body by a velocity, resolve collisions, and
//! report what it touched can drive the character controller.
//!
//! # Coordinate convention
//!
//! The Y axis points down. Gravity is positive, upward velocities are
//! negative, and a floor pushes the character up with a normal whose Y
//! component is negative.

pub mod body;
pub mod contact;

pub mod prelude {
    //! Common imports for the physics capability layer
    pub use crate::body::{KinematicBody, MoveResult};
    pub use crate::contact::{BodyTag, Contact};
}

pub use prelude::*;
