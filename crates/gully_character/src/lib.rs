//! Gully Character - Side-Scroller Control Core
//!
//! Real-time character control for a 2D side-scrolling platformer: per-tick
//! input plus a kinematic-body capability in, velocity, health, life-cycle,
//! and a symbolic animation key out.
//!
//! # Features
//!
//! - Forgiving jump model: buffered input, coyote grace, double jump with a
//!   one-per-span apex hover
//! - Constant-acceleration horizontal movement with walk/run tiers and a
//!   post-touchdown penalty
//! - Lethal-fall distance tracking that kills mid-air, on the crossing tick
//! - Damage with hurt lockout, invincibility windows, knockback, terminal
//!   death and explicit revive
//! - Stomp bounces off hostile bodies struck from above
//! - A closed animation-key set with a total key-to-asset table
//!
//! # Example
//!
//! ```ignore
//! use gully_character::prelude::*;
//!
//! let mut controller = CharacterController::new(
//!     CharacterConfig::default(),
//!     glam::Vec2::ZERO,
//! )?;
//!
//! // Once per fixed step, with `body` adapting the game's physics world:
//! let report = controller.tick(1.0 / 60.0, &input, gravity, &mut body);
//! sprite.play(report.animation.asset_name());
//! ```

pub mod animation;
pub mod config;
pub mod controller;
pub mod error;
pub mod events;
pub mod fall;
pub mod input;
pub mod state;

mod collision;
mod jump;
mod movement;

pub mod prelude {
    //! Common imports for the character core
    pub use crate::animation::AnimationKey;
    pub use crate::config::CharacterConfig;
    pub use crate::controller::CharacterController;
    pub use crate::error::{CharacterError, Result};
    pub use crate::events::{CameraRequest, DeathCause, TickEvent, TickReport};
    pub use crate::input::InputFrame;
    pub use crate::state::{CharacterState, Facing, LifeCycle};
    pub use gully_combat::{DamageInfo, DamageSource};
    pub use gully_physics::{BodyTag, Contact, KinematicBody, MoveResult};
}

pub use prelude::*;
