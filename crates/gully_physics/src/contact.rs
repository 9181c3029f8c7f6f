//! Contact data from a resolved move

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Classification of a body the character can touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyTag {
    /// Static level geometry (floors, walls, ceilings).
    World,
    /// A body that hurts on contact and can be stomped from above.
    Hostile,
}

impl Default for BodyTag {
    fn default() -> Self {
        Self::World
    }
}

/// A single contact reported by the solver for this tick's move.
#[derive(Debug, Clone, Copy)]
pub struct Contact {
    /// Surface normal at the contact, pointing away from the touched body.
    pub normal: Vec2,
    /// Tag of the touched body.
    pub tag: BodyTag,
}

impl Contact {
    /// Create a new contact.
    pub fn new(normal: Vec2, tag: BodyTag) -> Self {
        Self { normal, tag }
    }

    /// Whether the character struck this body from above.
    ///
    /// Y points down, so a surface pushing the character up has a normal
    /// with a strongly negative Y component.
    pub fn struck_from_above(&self) -> bool {
        self.normal.y < -0.5
    }

    /// Whether the touched body is tagged hostile.
    pub fn is_hostile(&self) -> bool {
        self.tag == BodyTag::Hostile
    }
}
