use crate::domain::ids::next_raw_id;
use crate::interface_adapters::protocol::{
    ClientMessage, ServerMessage, SessionDto, WorldUpdateDto,
};
use crate::interface_adapters::state::AppState;
use crate::use_cases::{GameEvent, SessionView, WorldUpdate};

use axum::{
    Error,
    extract::{
        State,
        ws::{CloseFrame, Message, Utf8Bytes, WebSocket, WebSocketUpgrade, close_code},
    },
    response::IntoResponse,
};
use futures::SinkExt;
use std::{
    sync::Arc,
    time::{Duration, Instant},
};
use tokio::sync::{broadcast, mpsc, watch};
use tracing::{Instrument, debug, error, info, info_span, warn};

#[derive(Debug)]
enum NetError {
    #[allow(dead_code)]
    Ws(axum::Error),
    #[allow(dead_code)]
    Serialization(serde_json::Error),
    EventsClosed,
    WorldUpdatesClosed,
    SessionClosed,
}

impl From<axum::Error> for NetError {
    fn from(e: axum::Error) -> Self {
        NetError::Ws(e)
    }
}

const LOG_THROTTLE: Duration = Duration::from_secs(2);
const MAX_INVALID_JSON: u32 = 10;

/// Serializes each world update once and fans the shared bytes out to every connection.
pub async fn world_update_serializer(
    mut world_rx: broadcast::Receiver<WorldUpdate>,
    world_bytes_tx: broadcast::Sender<Utf8Bytes>,
    world_latest_tx: watch::Sender<Utf8Bytes>,
) {
    loop {
        match world_rx.recv().await {
            Ok(update) => {
                let msg = ServerMessage::WorldUpdate(WorldUpdateDto::from(update));
                let txt = match serde_json::to_string(&msg) {
                    Ok(txt) => txt,
                    Err(e) => {
                        error!(error = ?e, "failed to serialize world update");
                        continue;
                    }
                };

                let bytes = Utf8Bytes::from(txt);
                // Kept for lag recovery.
                world_latest_tx.send_replace(bytes.clone());
                let _ = world_bytes_tx.send(bytes);
            }
            Err(broadcast::error::RecvError::Lagged(n)) => {
                warn!(
                    missed = n,
                    "world serializer lagged; skipping to latest update"
                );
            }
            Err(broadcast::error::RecvError::Closed) => {
                warn!("world updates channel closed; serializer exiting");
                break;
            }
        }
    }
}

pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let conn_id = next_raw_id();
    ws.on_upgrade(move |socket| {
        handle_socket(socket, state).instrument(info_span!("conn", conn_id))
    })
}

async fn handle_socket(mut socket: WebSocket, state: Arc<AppState>) {
    let mut ctx = match bootstrap_connection(&mut socket, &state).await {
        Ok(ctx) => ctx,
        Err(e) => {
            error!(error = ?e, "failed to bootstrap connection");
            let _ = socket.close().await;
            return;
        }
    };

    info!("client connected");

    if let Err(e) = run_client_loop(&mut socket, &mut ctx).await {
        warn!(error = ?e, "client loop exited with error");
    }
}

async fn send_message(socket: &mut WebSocket, msg: &ServerMessage) -> Result<usize, NetError> {
    let txt = serde_json::to_string(msg).map_err(NetError::Serialization)?;
    let bytes = txt.len();
    socket
        .send(Message::Text(txt.into()))
        .await
        .map_err(NetError::Ws)?;
    Ok(bytes)
}

fn session_message(view: SessionView) -> ServerMessage {
    ServerMessage::Session(SessionDto::from(view))
}

struct ConnCtx {
    pub event_tx: mpsc::Sender<GameEvent>,
    pub world_bytes_rx: broadcast::Receiver<Utf8Bytes>,
    pub world_latest_rx: watch::Receiver<Utf8Bytes>,
    pub session_rx: watch::Receiver<SessionView>,
    pub lag_recovery_count: u64,

    pub msgs_in: u64,
    pub msgs_out: u64,
    pub bytes_in: u64,
    pub bytes_out: u64,

    pub invalid_json: u32,

    pub last_input_full_log: Instant,
    pub last_world_lag_log: Instant,
    pub last_invalid_input_log: Instant,

    pub close_frame: Option<CloseFrame>,
}

async fn bootstrap_connection(
    socket: &mut WebSocket,
    state: &AppState,
) -> Result<ConnCtx, NetError> {
    // Subscribe before the first await so nothing published meanwhile is missed.
    let world_bytes_rx = state.world_bytes_tx.subscribe();
    let world_latest_rx = state.world_latest_tx.subscribe();
    let mut session_rx = state.game.session_tx.subscribe();

    // Mark the current value seen; the loop only forwards later changes.
    let initial = session_rx.borrow_and_update().clone();
    let bytes_out = send_message(socket, &session_message(initial)).await?;

    let now = Instant::now() - LOG_THROTTLE;
    Ok(ConnCtx {
        event_tx: state.game.event_tx.clone(),
        world_bytes_rx,
        world_latest_rx,
        session_rx,
        lag_recovery_count: 0,

        msgs_in: 0,
        msgs_out: 1,
        bytes_in: 0,
        bytes_out: bytes_out as u64,

        invalid_json: 0,

        last_input_full_log: now,
        last_world_lag_log: now,
        last_invalid_input_log: now,

        close_frame: None,
    })
}

enum LoopControl {
    Continue,
    Disconnect,
}

fn should_log(last: &mut Instant) -> bool {
    if last.elapsed() >= LOG_THROTTLE {
        *last = Instant::now();
        true
    } else {
        false
    }
}

// Movement snapshots are lossy: a full channel drops the update and the next one replaces it.
fn forward_input(
    event_tx: &mpsc::Sender<GameEvent>,
    event: GameEvent,
    last_input_full_log: &mut Instant,
) -> Result<LoopControl, NetError> {
    match event_tx.try_send(event) {
        Ok(()) => Ok(LoopControl::Continue),
        Err(mpsc::error::TrySendError::Full(_evt)) => {
            if should_log(last_input_full_log) {
                warn!("event channel full; dropping input");
            }
            Ok(LoopControl::Continue)
        }
        Err(mpsc::error::TrySendError::Closed(_evt)) => Err(NetError::EventsClosed),
    }
}

// Start and fire must not be dropped, so they wait for channel capacity.
async fn forward_command(
    event_tx: &mpsc::Sender<GameEvent>,
    event: GameEvent,
) -> Result<LoopControl, NetError> {
    event_tx
        .send(event)
        .await
        .map_err(|_| NetError::EventsClosed)?;
    Ok(LoopControl::Continue)
}

async fn run_client_loop(socket: &mut WebSocket, ctx: &mut ConnCtx) -> Result<(), NetError> {
    // Split borrows so `tokio::select!` can hold them concurrently.
    let ConnCtx {
        event_tx,
        world_bytes_rx,
        world_latest_rx,
        session_rx,
        lag_recovery_count,
        msgs_in,
        msgs_out,
        bytes_in,
        bytes_out,
        invalid_json,
        last_input_full_log,
        last_world_lag_log,
        last_invalid_input_log,
        close_frame,
    } = ctx;

    let mut fatal: Option<NetError> = None;

    loop {
        let disconnect: bool = tokio::select! {
            incoming = socket.recv() => {
                match handle_incoming_ws(
                    incoming,
                    event_tx,
                    msgs_in,
                    bytes_in,
                    invalid_json,
                    last_input_full_log,
                    last_invalid_input_log,
                    close_frame,
                ).await {
                    Ok(LoopControl::Continue) => false,
                    Ok(LoopControl::Disconnect) => true,
                    Err(e) => {
                        fatal = Some(e);
                        true
                    }
                }
            }

            world_msg = world_bytes_rx.recv() => {
                match world_msg {
                    Ok(bytes) => match forward_world_bytes(bytes, socket, msgs_out, bytes_out).await {
                        LoopControl::Continue => false,
                        LoopControl::Disconnect => true,
                    },
                    Err(broadcast::error::RecvError::Lagged(n)) => {
                        if should_log(last_world_lag_log) {
                            warn!(missed = n, "world updates lagged; sending snapshot");
                        }

                        // Resync with the latest serialized snapshot.
                        let latest = world_latest_rx.borrow().clone();
                        if latest.is_empty() {
                            false
                        } else {
                            *lag_recovery_count += 1;
                            match forward_world_bytes(latest, socket, msgs_out, bytes_out).await {
                                LoopControl::Continue => false,
                                LoopControl::Disconnect => true,
                            }
                        }
                    }
                    Err(broadcast::error::RecvError::Closed) => {
                        fatal = Some(NetError::WorldUpdatesClosed);
                        true
                    }
                }
            }

            changed = session_rx.changed() => {
                match changed {
                    Ok(()) => {
                        let view = session_rx.borrow_and_update().clone();
                        match forward_session(view, socket, msgs_out, bytes_out).await {
                            LoopControl::Continue => false,
                            LoopControl::Disconnect => true,
                        }
                    }
                    Err(_) => {
                        warn!("session channel closed; disconnecting");
                        fatal = Some(NetError::SessionClosed);
                        true
                    }
                }
            }
        };

        if disconnect {
            if let Some(frame) = close_frame.take() {
                let _ = socket.send(Message::Close(Some(frame))).await;
            }
            if let Err(err) = socket.close().await.map_err(NetError::Ws) {
                debug!(error = ?err, "socket close error");
            }
            break;
        }
    }

    debug!(
        msgs_in = *msgs_in,
        msgs_out = *msgs_out,
        bytes_in = *bytes_in,
        bytes_out = *bytes_out,
        invalid_json = *invalid_json,
        lag_recovery_count = *lag_recovery_count,
        "connection stats"
    );
    info!("client disconnected");

    match fatal {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

#[allow(clippy::too_many_arguments)]
async fn handle_incoming_ws(
    incoming: Option<Result<Message, Error>>,
    event_tx: &mpsc::Sender<GameEvent>,
    msgs_in: &mut u64,
    bytes_in: &mut u64,
    invalid_json: &mut u32,
    last_input_full_log: &mut Instant,
    last_invalid_input_log: &mut Instant,
    close_frame: &mut Option<CloseFrame>,
) -> Result<LoopControl, NetError> {
    match incoming {
        Some(Ok(msg)) => match msg {
            Message::Text(text) => {
                *msgs_in += 1;
                *bytes_in += text.len() as u64;

                match serde_json::from_str::<ClientMessage>(&text) {
                    Ok(ClientMessage::Start | ClientMessage::Restart) => {
                        forward_command(event_tx, GameEvent::Start).await
                    }
                    Ok(ClientMessage::Fire) => forward_command(event_tx, GameEvent::Fire).await,
                    Ok(ClientMessage::Input(dto)) => {
                        let Some(input) = dto.into_input() else {
                            if should_log(last_invalid_input_log) {
                                warn!("invalid aim values (NaN/inf); dropping");
                            }
                            return Ok(LoopControl::Continue);
                        };
                        forward_input(event_tx, GameEvent::Input(input), last_input_full_log)
                    }
                    Err(parse_err) => {
                        *invalid_json += 1;
                        if should_log(last_invalid_input_log) {
                            warn!(
                                bytes = text.len(),
                                error = %parse_err,
                                "failed to parse client message"
                            );
                        }

                        if *invalid_json > MAX_INVALID_JSON {
                            *close_frame = Some(CloseFrame {
                                code: close_code::POLICY,
                                reason: "too many invalid messages".into(),
                            });
                            return Ok(LoopControl::Disconnect);
                        }

                        Ok(LoopControl::Continue)
                    }
                }
            }
            Message::Binary(_) => {
                *close_frame = Some(CloseFrame {
                    code: close_code::UNSUPPORTED,
                    reason: "binary messages not supported".into(),
                });
                Ok(LoopControl::Disconnect)
            }
            Message::Ping(_) | Message::Pong(_) => Ok(LoopControl::Continue),
            Message::Close(_) => Ok(LoopControl::Disconnect),
        },
        Some(Err(e)) => {
            warn!(error = %e, "websocket recv error");
            Ok(LoopControl::Disconnect)
        }
        None => {
            info!("websocket closed");
            Ok(LoopControl::Disconnect)
        }
    }
}

async fn forward_world_bytes(
    world_msg: Utf8Bytes,
    socket: &mut WebSocket,
    msgs_out: &mut u64,
    bytes_out: &mut u64,
) -> LoopControl {
    let bytes_len = world_msg.len();
    match socket
        .send(Message::Text(world_msg))
        .await
        .map_err(NetError::Ws)
    {
        Ok(()) => {
            *msgs_out += 1;
            *bytes_out += bytes_len as u64;
            LoopControl::Continue
        }
        Err(err) => {
            warn!(error = ?err, "failed to send world update");
            LoopControl::Disconnect
        }
    }
}

async fn forward_session(
    view: SessionView,
    socket: &mut WebSocket,
    msgs_out: &mut u64,
    bytes_out: &mut u64,
) -> LoopControl {
    match send_message(socket, &session_message(view)).await {
        Ok(bytes) => {
            *msgs_out += 1;
            *bytes_out += bytes as u64;
            LoopControl::Continue
        }
        Err(err) => {
            warn!(error = ?err, "failed to send session update");
            LoopControl::Disconnect
        }
    }
}
