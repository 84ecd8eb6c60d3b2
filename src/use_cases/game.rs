use super::flavor::{self, FlavorTextSource};
use super::types::{GameEvent, SessionView, WorldUpdate};
use crate::domain::{InputState, Tuning, World};
use glam::Vec2;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Notify, broadcast, mpsc, watch};
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info};

// Result of a game-over text request, tagged with the round that asked for it.
struct MessageReply {
    round: u64,
    text: String,
}

/// Drives the simulation once per tick while a session is running.
///
/// Owns the `World`: inbound events are drained at the top of each tick, then the step
/// runs with the real time elapsed since the previous tick.
pub async fn game_task(
    mut event_rx: mpsc::Receiver<GameEvent>,
    world_tx: broadcast::Sender<WorldUpdate>,
    session_tx: watch::Sender<SessionView>,
    flavor: Arc<dyn FlavorTextSource>,
    tuning: Tuning,
    tick_interval: Duration,
    shutdown: Arc<Notify>,
) {
    let mut world = World::new(tuning);
    let arena = tuning.arena;
    // Pointer starts at the arena center until the client reports otherwise.
    let mut input = InputState::idle(Vec2::new(arena.width / 2.0, arena.height / 2.0));

    let (reply_tx, mut reply_rx) = mpsc::channel::<MessageReply>(4);

    let mut interval = tokio::time::interval(tick_interval);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    // Cleared on every (re)start so the first step never sees a huge delta.
    let mut last_frame: Option<Instant> = None;
    let mut tick: u64 = 0;

    loop {
        let now = tokio::select! {
            _ = shutdown.notified() => {
                break;
            }
            Some(reply) = reply_rx.recv() => {
                // Only the message slot changes; entities are untouched.
                if world.resolve_message(reply.round, reply.text) {
                    publish_session(&session_tx, &world);
                }
                continue;
            }
            now = interval.tick() => now,
        };

        while let Ok(ev) = event_rx.try_recv() {
            match ev {
                GameEvent::Start => {
                    if world.start() {
                        last_frame = None;
                        publish_session(&session_tx, &world);
                    }
                }
                GameEvent::Input(next) => input = next,
                GameEvent::Fire => {
                    if let Some(id) = world.fire(input.aim_target) {
                        debug!(projectile_id = %id, "projectile fired");
                    }
                }
            }
        }

        if world.session().is_running() {
            let dt = last_frame
                .map(|prev| now.saturating_duration_since(prev))
                .unwrap_or_default();
            last_frame = Some(now);

            let outcome = world.step(dt.as_secs_f32(), &input);
            if outcome.kills > 0 {
                debug!(
                    kills = outcome.kills,
                    score = world.session().score(),
                    "enemies destroyed"
                );
            }
            if outcome.score_changed || outcome.game_over {
                publish_session(&session_tx, &world);
            }
            if outcome.game_over {
                request_message(
                    flavor.clone(),
                    reply_tx.clone(),
                    world.session().round(),
                    world.session().score(),
                );
            }
        }

        tick += 1;
        let _ = world_tx.send(WorldUpdate {
            tick,
            snapshot: world.snapshot(),
        });
    }

    info!(tick, "game loop stopped");
}

fn publish_session(session_tx: &watch::Sender<SessionView>, world: &World) {
    // send_replace keeps the latest view even with no subscribers yet.
    session_tx.send_replace(SessionView::from(world.session()));
}

// Fire-and-forget: the reply comes back through the loop, or is dropped if the loop is gone.
fn request_message(
    source: Arc<dyn FlavorTextSource>,
    reply_tx: mpsc::Sender<MessageReply>,
    round: u64,
    score: u32,
) {
    tokio::spawn(async move {
        let text = flavor::game_over_message(source.as_ref(), score).await;
        let _ = reply_tx.send(MessageReply { round, text }).await;
    });
}
