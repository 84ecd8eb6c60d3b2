use crate::domain::state::{Player, Projectile};
use crate::domain::tuning::ProjectileTuning;
use glam::Vec2;

/// Rate limiter for the fire action, driven by the session clock.
#[derive(Debug, Clone)]
pub struct FireControl {
    cooldown_ms: f64,
    last_fired_at_ms: Option<f64>,
}

impl FireControl {
    pub fn new(cooldown_ms: f64) -> Self {
        Self {
            cooldown_ms,
            last_fired_at_ms: None,
        }
    }

    pub fn reset(&mut self) {
        self.last_fired_at_ms = None;
    }

    /// Accepts the shot if the cooldown has passed; only accepted shots restart it.
    pub fn try_trigger(&mut self, now_ms: f64) -> bool {
        if self
            .last_fired_at_ms
            .is_some_and(|last| now_ms - last < self.cooldown_ms)
        {
            return false;
        }
        self.last_fired_at_ms = Some(now_ms);
        true
    }
}

/// Fires one projectile from `player` toward `aim_target` if the trigger allows it.
pub fn fire(
    trigger: &mut FireControl,
    now_ms: f64,
    player: &Player,
    aim_target: Vec2,
    tuning: &ProjectileTuning,
) -> Option<Projectile> {
    if !trigger.try_trigger(now_ms) {
        return None;
    }
    Some(Projectile::fired_by(player, aim_target, tuning))
}
