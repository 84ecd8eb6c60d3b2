//! Gameplay tuning for enemies and their spawn cadence.

use crate::domain::geometry::Size;

/// Stats a freshly spawned enemy of one kind starts with.
#[derive(Debug, Clone, Copy)]
pub struct EnemyProfile {
    pub health: i32,

    /// Homing speed in pixels per second.
    pub speed: f32,

    pub size: Size,
}

/// Per-kind profiles. Only `standard` is spawned today.
#[derive(Debug, Clone, Copy)]
pub struct EnemyTuning {
    pub standard: EnemyProfile,
    pub fast: EnemyProfile,
    pub tough: EnemyProfile,
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            standard: EnemyProfile {
                health: 30,
                speed: 100.0,
                size: Size::new(35.0, 35.0),
            },
            fast: EnemyProfile {
                health: 20,
                speed: 160.0,
                size: Size::new(28.0, 28.0),
            },
            tough: EnemyProfile {
                health: 60,
                speed: 70.0,
                size: Size::new(45.0, 45.0),
            },
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SpawnTuning {
    /// Lower bound of the randomized spawn interval, in milliseconds.
    pub interval_min_ms: f32,

    /// Upper bound of the randomized spawn interval, in milliseconds.
    pub interval_max_ms: f32,

    /// Cap on concurrently live enemies.
    pub max_enemies: usize,
}

impl Default for SpawnTuning {
    fn default() -> Self {
        Self {
            interval_min_ms: 1000.0,
            interval_max_ms: 3000.0,
            max_enemies: 10,
        }
    }
}
