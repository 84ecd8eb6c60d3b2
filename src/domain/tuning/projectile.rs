//! Gameplay tuning for projectiles.

use crate::domain::geometry::Size;

#[derive(Debug, Clone, Copy)]
pub struct ProjectileTuning {
    /// Projectile speed in pixels per second.
    pub speed: f32,

    pub size: Size,

    /// Health removed from an enemy on hit.
    pub damage: i32,

    /// Score awarded when a hit destroys an enemy.
    pub kill_score: u32,
}

impl Default for ProjectileTuning {
    fn default() -> Self {
        Self {
            speed: 500.0,
            size: Size::new(8.0, 8.0),
            damage: 10,
            kill_score: 10,
        }
    }
}
