//! Gameplay tuning for the player ship.

use crate::domain::geometry::Size;

#[derive(Debug, Clone, Copy)]
pub struct PlayerTuning {
    /// Health at session start.
    pub initial_health: f32,

    /// Movement speed in pixels per second, per held direction.
    pub speed: f32,

    pub size: Size,

    /// Minimum time between two accepted shots, in milliseconds.
    pub shoot_cooldown_ms: f64,

    /// Gap between the ship's bottom edge and the arena floor at spawn.
    pub spawn_floor_gap: f32,

    /// Contact damage per second, scaled by `contact_damage_multiplier`.
    pub contact_damage_per_second: f32,

    pub contact_damage_multiplier: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            initial_health: 100.0,
            speed: 250.0,
            size: Size::new(30.0, 30.0),
            shoot_cooldown_ms: 200.0,
            spawn_floor_gap: 20.0,
            contact_damage_per_second: 10.0,
            contact_damage_multiplier: 5.0,
        }
    }
}
