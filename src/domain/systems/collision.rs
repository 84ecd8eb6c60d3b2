use crate::domain::state::{Enemy, Player, Projectile, ProjectileOwner};
use tracing::debug;

/// What the projectile pass changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HitReport {
    pub kills: u32,
    pub score: u32,
}

/// Projectile vs enemy pass.
///
/// Projectiles are visited in insertion order; each player-owned projectile strikes the
/// first live enemy (also in insertion order) it overlaps and is consumed. Destroyed
/// enemies are purged once the pass is done.
pub fn resolve_projectile_hits(
    projectiles: &mut Vec<Projectile>,
    enemies: &mut Vec<Enemy>,
    kill_score: u32,
) -> HitReport {
    let mut report = HitReport::default();

    projectiles.retain(|p| {
        // Enemy-owned projectiles are never matched against anything here.
        if p.owner != ProjectileOwner::Player {
            return true;
        }

        let bounds = p.body.bounds();
        let Some(enemy) = enemies
            .iter_mut()
            .find(|e| e.is_alive() && e.body.bounds().overlaps(&bounds))
        else {
            return true;
        };

        enemy.take_damage(p.damage);
        if !enemy.is_alive() {
            report.kills += 1;
            report.score += kill_score;
            debug!(enemy_id = %enemy.body.id, projectile_id = %p.body.id, "enemy destroyed");
        }
        false
    });

    enemies.retain(Enemy::is_alive);
    report
}

/// Player vs enemy pass. Every overlapping enemy deals `damage_per_second * dt`.
///
/// Returns the damage applied; health is clamped at zero.
pub fn resolve_contact_damage(
    player: &mut Player,
    enemies: &[Enemy],
    damage_per_second: f32,
    dt: f32,
) -> f32 {
    let bounds = player.body.bounds();
    let touching = enemies
        .iter()
        .filter(|e| e.body.bounds().overlaps(&bounds))
        .count();
    if touching == 0 {
        return 0.0;
    }

    let before = player.health;
    let damage = touching as f32 * damage_per_second * dt;
    player.health = (player.health - damage).max(0.0);
    before - player.health
}
