use glam::Vec2;

/// Movement intent and aim point, as last reported by the input collaborator.
///
/// The simulation reads a copy once per step; changes made mid-step are seen next step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputState {
    pub move_up: bool,
    pub move_down: bool,
    pub move_left: bool,
    pub move_right: bool,
    /// Arena-local pointer position. Out-of-arena values are valid.
    pub aim_target: Vec2,
}

impl InputState {
    /// No movement held, aiming at the given point (usually the arena center).
    pub fn idle(aim_target: Vec2) -> Self {
        Self {
            move_up: false,
            move_down: false,
            move_left: false,
            move_right: false,
            aim_target,
        }
    }

    /// Unnormalized direction: each held axis contributes a full unit.
    pub fn movement_axes(&self) -> Vec2 {
        let mut axes = Vec2::ZERO;
        if self.move_up {
            axes.y -= 1.0;
        }
        if self.move_down {
            axes.y += 1.0;
        }
        if self.move_left {
            axes.x -= 1.0;
        }
        if self.move_right {
            axes.x += 1.0;
        }
        axes
    }
}
