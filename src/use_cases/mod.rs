// Use cases layer: application workflows for the game server.

pub mod flavor;
pub mod game;
pub mod handle;
pub mod types;

pub use flavor::{CannedFlavorText, FlavorTextError, FlavorTextSource};
pub use handle::{GameHandle, GameSettings};
pub use types::{GameEvent, SessionView, WorldUpdate};
