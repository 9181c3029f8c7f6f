//! Lethal-fall distance tracking
//!
//! Tracks vertical descent while airborne and reports the moment the drop
//! exceeds the lethal distance. The lethal check fires mid-air on the tick
//! the threshold is crossed, never deferred to touchdown; the landing-tick
//! comparison only covers a drop that crosses the threshold on the same
//! step it lands.

use serde::{Deserialize, Serialize};

/// What the tracker observed this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FallEvent {
    /// The drop exceeded the lethal distance.
    Lethal,
    /// The character touched down after a tracked descent.
    Landed {
        /// Total descent distance of the tracked span.
        distance: f32,
    },
}

/// Descent tracker. Active only while airborne and moving down.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FallTracker {
    tracking: bool,
    start_y: f32,
}

impl FallTracker {
    /// Whether a descent is currently being measured.
    pub fn is_tracking(&self) -> bool {
        self.tracking
    }

    /// Advance the tracker by one tick.
    pub fn update(
        &mut self,
        grounded: bool,
        velocity_y: f32,
        position_y: f32,
        lethal_distance: f32,
    ) -> Option<FallEvent> {
        if grounded {
            if !self.tracking {
                return None;
            }
            self.tracking = false;
            let distance = position_y - self.start_y;
            // Covers a drop that crossed the threshold on the landing step
            if distance > lethal_distance {
                return Some(FallEvent::Lethal);
            }
            return Some(FallEvent::Landed {
                distance: distance.max(0.0),
            });
        }

        // Y points down: positive velocity means descending
        if velocity_y > 0.0 && !self.tracking {
            self.tracking = true;
            self.start_y = position_y;
        }

        if self.tracking && position_y - self.start_y > lethal_distance {
            self.tracking = false;
            return Some(FallEvent::Lethal);
        }

        None
    }

    /// Restart the measurement from a new height.
    ///
    /// Called when an apex hover ends: the hover zeroed vertical velocity,
    /// so distance accumulated above it must not count.
    pub fn rearm(&mut self, position_y: f32) {
        if self.tracking {
            self.start_y = position_y;
        }
    }

    /// Stop tracking entirely. Called on an enemy bounce; tracking restarts
    /// on the next descending tick from whatever height the bounce reached.
    pub fn clear(&mut self) {
        self.tracking = false;
    }
}
