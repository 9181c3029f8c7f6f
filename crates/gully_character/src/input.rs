//! Per-tick input sample

use glam::Vec2;

/// One tick of input from the polling layer.
///
/// `jump_pressed` and `jump_released` are edges, true only on the tick the
/// button changed. The axis is clamped to `[-1, 1]` per component before
/// use.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputFrame {
    /// Movement axis, `-1..1` each component.
    pub axis: Vec2,
    /// Jump button went down this tick.
    pub jump_pressed: bool,
    /// Jump button went up this tick.
    pub jump_released: bool,
    /// Run modifier is held.
    pub run_held: bool,
}

impl InputFrame {
    /// A frame with no input at all.
    pub fn idle() -> Self {
        Self::default()
    }

    /// Set the movement axis.
    pub fn with_axis(mut self, x: f32, y: f32) -> Self {
        self.axis = Vec2::new(x, y);
        self
    }

    /// Mark the jump button as pressed this tick.
    pub fn pressing_jump(mut self) -> Self {
        self.jump_pressed = true;
        self
    }

    /// Mark the jump button as released this tick.
    pub fn releasing_jump(mut self) -> Self {
        self.jump_released = true;
        self
    }

    /// Mark the run modifier as held.
    pub fn running(mut self) -> Self {
        self.run_held = true;
        self
    }

    /// Copy with the axis clamped to the unit box.
    pub(crate) fn clamped(&self) -> Self {
        Self {
            axis: self.axis.clamp(Vec2::splat(-1.0), Vec2::splat(1.0)),
            ..*self
        }
    }
}
