// Framework bootstrap for the game server runtime.

use crate::frameworks::config;
use crate::interface_adapters::clients::GenerativeTextClient;
use crate::interface_adapters::net::{session_handler, world_update_serializer, ws_handler};
use crate::interface_adapters::state::AppState;
use crate::use_cases::{CannedFlavorText, FlavorTextSource, GameHandle, GameSettings};

use axum::{Router, extract::ws::Utf8Bytes, routing::get};
use std::net::SocketAddr;
use std::{io::Result, sync::Arc};
use tokio::sync::{broadcast, watch};

fn init_runtime() {
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

pub async fn run(listener: tokio::net::TcpListener) -> Result<()> {
    let address = listener.local_addr()?;
    let state = build_state()?;
    let app = Router::new()
        .route("/ws", get(ws_handler))
        .route("/session", get(session_handler))
        .with_state(state.clone());

    tracing::info!(%address, "listening");

    let served = axum::serve(listener, app).await.inspect_err(|e| {
        tracing::error!(error = %e, "server error");
    });
    state.game.shutdown();
    served
}

pub async fn run_with_config() -> Result<()> {
    init_runtime();

    let address = SocketAddr::from(([127, 0, 0, 1], config::http_port()));

    let listener = tokio::net::TcpListener::bind(address)
        .await
        .inspect_err(|e| {
            tracing::error!(%address, error = %e, "failed to bind");
        })?;

    run(listener).await
}

fn build_flavor_source() -> Result<Arc<dyn FlavorTextSource>> {
    let Some(api_key) = config::flavor_api_key() else {
        tracing::warn!("GEMINI_API_KEY not set; game-over messages will be canned");
        return Ok(Arc::new(CannedFlavorText));
    };

    let base_url = config::flavor_base_url();
    let model = config::flavor_model();
    let timeout = config::flavor_timeout();
    let client = GenerativeTextClient::new(base_url.clone(), model.clone(), api_key, timeout)
        .map_err(|e| std::io::Error::other(format!("failed to initialize flavor client: {e}")))?;
    tracing::debug!(
        flavor_base_url = %base_url,
        flavor_model = %model,
        flavor_timeout_ms = timeout.as_millis(),
        "flavor client configured"
    );
    Ok(Arc::new(client))
}

fn build_state() -> Result<Arc<AppState>> {
    let flavor = build_flavor_source()?;

    // The single arena; its task runs for the lifetime of the server.
    let game = GameHandle::spawn(
        GameSettings {
            input_channel_capacity: config::INPUT_CHANNEL_CAPACITY,
            world_broadcast_capacity: config::WORLD_BROADCAST_CAPACITY,
            tick_interval: config::TICK_INTERVAL,
            tuning: Default::default(),
        },
        flavor,
    );

    let (world_bytes_tx, _world_bytes_rx) =
        broadcast::channel::<Utf8Bytes>(config::WORLD_BROADCAST_CAPACITY);
    let (world_latest_tx, _world_latest_rx) = watch::channel::<Utf8Bytes>(Utf8Bytes::from(""));

    tokio::spawn(world_update_serializer(
        game.world_tx.subscribe(),
        world_bytes_tx.clone(),
        world_latest_tx.clone(),
    ));

    Ok(Arc::new(AppState {
        game,
        world_bytes_tx,
        world_latest_tx,
    }))
}
