// Per-step simulation systems. Each one mutates a slice of the entity store.

pub mod collision;
pub mod combat;
pub mod movement;
pub mod spawning;
