use crate::use_cases::GameHandle;
use axum::extract::ws::Utf8Bytes;
use tokio::sync::{broadcast, watch};

#[derive(Clone)]
pub struct AppState {
    // Channels into and out of the game task.
    pub game: GameHandle,
    // Serialized world updates, shared across all connections.
    pub world_bytes_tx: broadcast::Sender<Utf8Bytes>,
    // Latest serialized world update for lag recovery.
    pub world_latest_tx: watch::Sender<Utf8Bytes>,
}
