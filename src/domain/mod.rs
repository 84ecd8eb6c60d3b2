// Domain layer: core simulation types and rules.

pub mod geometry;
pub mod ids;
pub mod input;
pub mod session;
pub mod state;
pub mod systems;
pub mod tuning;
pub mod world;

pub use ids::EntityId;
pub use input::InputState;
pub use session::{GameOverMessage, Session, SessionStatus};
pub use state::{
    EnemyKind, EnemySnapshot, PlayerSnapshot, ProjectileOwner, ProjectileSnapshot,
};
pub use tuning::Tuning;
pub use world::{StepOutcome, World, WorldSnapshot};
