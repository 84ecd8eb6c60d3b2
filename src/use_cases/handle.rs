// Channel wiring for the single game world and its driver task.

use super::flavor::FlavorTextSource;
use super::game::game_task;
use super::types::{GameEvent, SessionView, WorldUpdate};
use crate::domain::Tuning;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Notify, broadcast, mpsc, watch};

/// Settings for spawning the game world.
#[derive(Debug, Clone)]
pub struct GameSettings {
    /// Capacity for inbound client events.
    pub input_channel_capacity: usize,
    /// Capacity for broadcast world updates.
    pub world_broadcast_capacity: usize,
    /// Tick interval for the driver loop.
    pub tick_interval: Duration,
    /// Gameplay constants handed to the world.
    pub tuning: Tuning,
}

/// Channels into and out of the running game task.
#[derive(Clone)]
pub struct GameHandle {
    /// Sender for client events into the game task.
    pub event_tx: mpsc::Sender<GameEvent>,
    /// Broadcast sender for per-tick world updates.
    pub world_tx: broadcast::Sender<WorldUpdate>,
    /// Watch sender holding the latest session view.
    pub session_tx: watch::Sender<SessionView>,
    shutdown: Arc<Notify>,
}

impl GameHandle {
    /// Creates the channels and spawns the driver task.
    pub fn spawn(settings: GameSettings, flavor: Arc<dyn FlavorTextSource>) -> Self {
        let (event_tx, event_rx) = mpsc::channel::<GameEvent>(settings.input_channel_capacity);
        let (world_tx, _world_rx) =
            broadcast::channel::<WorldUpdate>(settings.world_broadcast_capacity);
        let (session_tx, _session_rx) = watch::channel(SessionView::default());
        let shutdown = Arc::new(Notify::new());

        tokio::spawn(game_task(
            event_rx,
            world_tx.clone(),
            session_tx.clone(),
            flavor,
            settings.tuning,
            settings.tick_interval,
            shutdown.clone(),
        ));

        Self {
            event_tx,
            world_tx,
            session_tx,
            shutdown,
        }
    }

    /// Latest published session view.
    pub fn session(&self) -> SessionView {
        self.session_tx.borrow().clone()
    }

    /// Stops the driver task after its current tick.
    pub fn shutdown(&self) {
        self.shutdown.notify_one();
    }
}
