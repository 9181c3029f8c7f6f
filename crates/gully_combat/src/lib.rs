//! Gully Combat - Health, Damage, and Invincibility Windows
//!
//! This crate provides the damage side of the character core:
//!
//! - Health with a hard `[0, max]` clamp
//! - Hurt lockout and invincibility windows as plain countdowns
//! - Terminal death and explicit revive
//!
//! All transitions resolve synchronously inside a single `update` or damage
//! call; there are no deferred sequences that could still be pending when
//! death preempts them.
//!
//! # Example
//!
//! ```ignore
//! use gully_combat::prelude::*;
//!
//! let mut health = HealthState::new(100)
//!     .with_invincibility_on_hit(0.8)
//!     .with_hurt_lock(0.3);
//!
//! match health.apply_damage(&DamageInfo::new(20)) {
//!     DamageOutcome::Hurt { remaining } => println!("ouch, {remaining} left"),
//!     DamageOutcome::Fatal => println!("down"),
//!     DamageOutcome::Ignored => {}
//! }
//! ```

pub mod damage;
pub mod health;

pub mod prelude {
    pub use crate::damage::{DamageInfo, DamageSource};
    pub use crate::health::{DamageOutcome, HealthEvent, HealthState};
}

pub use prelude::*;
