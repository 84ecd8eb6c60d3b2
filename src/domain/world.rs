// Entity store plus the step pipeline that advances it.

use crate::domain::ids::EntityId;
use crate::domain::input::InputState;
use crate::domain::session::{Session, SessionStatus};
use crate::domain::state::{
    Enemy, EnemySnapshot, Player, PlayerSnapshot, Projectile, ProjectileSnapshot,
};
use crate::domain::systems::{collision, combat, movement, spawning};
use crate::domain::tuning::Tuning;
use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use tracing::{debug, info};

/// What a single step did, for the driver to publish and log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepOutcome {
    pub kills: u32,
    pub score_changed: bool,
    pub game_over: bool,
}

/// Read-only view handed to renderers.
#[derive(Debug, Clone)]
pub struct WorldSnapshot {
    pub status: SessionStatus,
    pub score: u32,
    pub player: Option<PlayerSnapshot>,
    pub enemies: Vec<EnemySnapshot>,
    pub projectiles: Vec<ProjectileSnapshot>,
}

pub struct World {
    tuning: Tuning,
    session: Session,
    player: Option<Player>,
    enemies: Vec<Enemy>,
    projectiles: Vec<Projectile>,
    spawner: spawning::SpawnScheduler,
    trigger: combat::FireControl,
    // Simulated time since the session started, in milliseconds.
    clock_ms: f64,
    rng: Pcg32,
}

impl World {
    pub fn new(tuning: Tuning) -> Self {
        Self::with_seed(tuning, rand::random())
    }

    pub fn with_seed(tuning: Tuning, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        Self {
            spawner: spawning::SpawnScheduler::new(tuning.spawn, &mut rng),
            trigger: combat::FireControl::new(tuning.player.shoot_cooldown_ms),
            tuning,
            session: Session::default(),
            player: None,
            enemies: Vec::new(),
            projectiles: Vec::new(),
            clock_ms: 0.0,
            rng,
        }
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn player(&self) -> Option<&Player> {
        self.player.as_ref()
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }

    pub fn clock_ms(&self) -> f64 {
        self.clock_ms
    }

    /// Starts a session, or restarts one after game over.
    ///
    /// Replaces the whole entity store and every timer. No-op while running.
    pub fn start(&mut self) -> bool {
        if !self.session.begin() {
            return false;
        }

        let arena = self.tuning.arena;
        self.player = Some(Player::spawn(
            &self.tuning.player,
            arena.width,
            arena.height,
        ));
        self.enemies.clear();
        self.projectiles.clear();
        self.spawner.reset(&mut self.rng);
        self.trigger.reset();
        self.clock_ms = 0.0;

        info!(round = self.session.round(), "session started");
        true
    }

    /// Handles a fire request. Returns the new projectile's id when the shot is accepted.
    pub fn fire(&mut self, aim_target: Vec2) -> Option<EntityId> {
        if !self.session.is_running() {
            return None;
        }
        let player = self.player.as_ref()?;

        let projectile = combat::fire(
            &mut self.trigger,
            self.clock_ms,
            player,
            aim_target,
            &self.tuning.projectile,
        )?;
        let id = projectile.body.id.clone();
        self.projectiles.push(projectile);
        Some(id)
    }

    /// Advances the simulation by `dt` seconds using the given input snapshot.
    ///
    /// Does nothing unless the session is running. Non-finite or negative deltas count
    /// as zero; deltas above the arena's max step are clamped.
    pub fn step(&mut self, dt: f32, input: &InputState) -> StepOutcome {
        let mut outcome = StepOutcome::default();
        if !self.session.is_running() {
            return outcome;
        }
        let Some(player) = self.player.as_mut() else {
            return outcome;
        };

        let dt = clamp_step(dt, self.tuning.arena.max_step_seconds);
        self.clock_ms += f64::from(dt) * 1000.0;

        movement::move_player(player, input, dt, &self.tuning.arena);

        if self
            .spawner
            .tick(dt, self.enemies.len(), &mut self.rng)
        {
            let enemy =
                spawning::spawn_enemy(&mut self.rng, &self.tuning.arena, &self.tuning.enemy);
            self.enemies.push(enemy);
        }

        // Enemies chase where the player is now, not where it was last step.
        movement::move_enemies(&mut self.enemies, player.body.center(), dt);
        movement::advance_projectiles(&mut self.projectiles, dt);
        movement::prune_projectiles(&mut self.projectiles, &self.tuning.arena);

        let hits = collision::resolve_projectile_hits(
            &mut self.projectiles,
            &mut self.enemies,
            self.tuning.projectile.kill_score,
        );
        if hits.score > 0 {
            self.session.award(hits.score);
            outcome.score_changed = true;
        }
        outcome.kills = hits.kills;

        let player_tuning = &self.tuning.player;
        let damage = collision::resolve_contact_damage(
            player,
            &self.enemies,
            player_tuning.contact_damage_per_second * player_tuning.contact_damage_multiplier,
            dt,
        );
        if damage > 0.0 {
            debug!(damage, health = player.health, "player took contact damage");
        }

        if !player.is_alive() && self.session.end() {
            outcome.game_over = true;
            info!(
                score = self.session.score(),
                round = self.session.round(),
                "game over"
            );
        }

        outcome
    }

    /// Applies a game-over message produced for `round`. Never touches entities.
    pub fn resolve_message(&mut self, round: u64, text: String) -> bool {
        self.session.resolve_message(round, text)
    }

    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            status: self.session.status(),
            score: self.session.score(),
            player: self.player.as_ref().map(PlayerSnapshot::from),
            enemies: self.enemies.iter().map(EnemySnapshot::from).collect(),
            projectiles: self.projectiles.iter().map(ProjectileSnapshot::from).collect(),
        }
    }
}

fn clamp_step(dt: f32, max_step: f32) -> f32 {
    if !dt.is_finite() || dt <= 0.0 {
        return 0.0;
    }
    dt.min(max_step)
}
