use crate::interface_adapters::protocol::SessionDto;
use crate::interface_adapters::state::AppState;

use axum::{Json, extract::State, response::IntoResponse};
use std::sync::Arc;

// Read-only view of the current session for clients that are not on the socket.
pub async fn session_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(SessionDto::from(state.game.session()))
}
