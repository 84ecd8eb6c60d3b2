//! Gameplay tuning.
//!
//! Keep this separate from runtime/server configuration (tick rates, buffer sizes, etc.).

pub mod arena;
pub mod enemy;
pub mod player;
pub mod projectile;

pub use arena::ArenaTuning;
pub use enemy::{EnemyProfile, EnemyTuning, SpawnTuning};
pub use player::PlayerTuning;
pub use projectile::ProjectileTuning;

/// Every gameplay constant the simulation reads, grouped by concern.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tuning {
    pub arena: ArenaTuning,
    pub player: PlayerTuning,
    pub enemy: EnemyTuning,
    pub spawn: SpawnTuning,
    pub projectile: ProjectileTuning,
}
