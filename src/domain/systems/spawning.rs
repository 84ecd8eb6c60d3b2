use crate::domain::geometry::Size;
use crate::domain::state::{Enemy, EnemyKind};
use crate::domain::tuning::{ArenaTuning, EnemyTuning, SpawnTuning};
use glam::Vec2;
use rand::Rng;
use tracing::debug;

/// Arena side an enemy enters from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnEdge {
    Top,
    Right,
    Bottom,
    Left,
}

impl SpawnEdge {
    pub const ALL: [SpawnEdge; 4] = [
        SpawnEdge::Top,
        SpawnEdge::Right,
        SpawnEdge::Bottom,
        SpawnEdge::Left,
    ];

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    /// Top-left spawn position for a box of `size` just outside this edge.
    ///
    /// `along` in `[0, 1)` picks the spot along the edge.
    pub fn spawn_position(self, along: f32, arena: &ArenaTuning, size: Size) -> Vec2 {
        match self {
            SpawnEdge::Top => Vec2::new(along * arena.width, -size.height),
            SpawnEdge::Right => Vec2::new(arena.width, along * arena.height),
            SpawnEdge::Bottom => Vec2::new(along * arena.width, arena.height),
            SpawnEdge::Left => Vec2::new(-size.width, along * arena.height),
        }
    }
}

/// Decides when the next enemy materializes.
///
/// The timer keeps running while the arena is full, so a freed slot is refilled on the
/// next step once the interval has elapsed.
#[derive(Debug, Clone)]
pub struct SpawnScheduler {
    tuning: SpawnTuning,
    time_since_last_spawn_ms: f32,
    next_interval_ms: f32,
}

impl SpawnScheduler {
    pub fn new<R: Rng + ?Sized>(tuning: SpawnTuning, rng: &mut R) -> Self {
        let mut scheduler = Self {
            tuning,
            time_since_last_spawn_ms: 0.0,
            next_interval_ms: 0.0,
        };
        scheduler.reset(rng);
        scheduler
    }

    /// Zeroes the timer and rolls a fresh interval (session start).
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.time_since_last_spawn_ms = 0.0;
        self.next_interval_ms = self.roll_interval(rng);
    }

    pub fn next_interval_ms(&self) -> f32 {
        self.next_interval_ms
    }

    pub fn time_since_last_spawn_ms(&self) -> f32 {
        self.time_since_last_spawn_ms
    }

    /// Advances the timer by `dt` seconds; returns true when an enemy should spawn now.
    pub fn tick<R: Rng + ?Sized>(&mut self, dt: f32, live_enemies: usize, rng: &mut R) -> bool {
        self.time_since_last_spawn_ms += dt * 1000.0;
        if live_enemies >= self.tuning.max_enemies
            || self.time_since_last_spawn_ms <= self.next_interval_ms
        {
            return false;
        }

        self.time_since_last_spawn_ms = 0.0;
        self.next_interval_ms = self.roll_interval(rng);
        true
    }

    fn roll_interval<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        let (min, max) = (self.tuning.interval_min_ms, self.tuning.interval_max_ms);
        if max <= min {
            return min;
        }
        rng.random_range(min..max)
    }
}

/// Builds a standard enemy on a random edge, fully outside the arena.
pub fn spawn_enemy<R: Rng + ?Sized>(
    rng: &mut R,
    arena: &ArenaTuning,
    enemy_tuning: &EnemyTuning,
) -> Enemy {
    let kind = EnemyKind::Standard;
    let edge = SpawnEdge::random(rng);
    let along: f32 = rng.random();
    let size = kind.profile(enemy_tuning).size;
    let position = edge.spawn_position(along, arena, size);

    let enemy = Enemy::spawn(kind, position, enemy_tuning);
    debug!(
        enemy_id = %enemy.body.id,
        ?edge,
        x = position.x,
        y = position.y,
        "enemy spawned"
    );
    enemy
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::geometry::Aabb;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(7)
    }

    fn arena_box(arena: &ArenaTuning) -> Aabb {
        Aabb::from_top_left(Vec2::ZERO, Size::new(arena.width, arena.height))
    }

    #[test]
    fn when_scheduler_is_created_then_interval_is_within_bounds() {
        let tuning = SpawnTuning::default();
        let mut rng = rng();

        for _ in 0..100 {
            let scheduler = SpawnScheduler::new(tuning, &mut rng);
            let interval = scheduler.next_interval_ms();
            assert!(interval >= tuning.interval_min_ms && interval < tuning.interval_max_ms);
        }
    }

    #[test]
    fn when_interval_has_not_elapsed_then_no_spawn_is_due() {
        let mut rng = rng();
        let mut scheduler = SpawnScheduler::new(SpawnTuning::default(), &mut rng);

        // Minimum interval is one second.
        assert!(!scheduler.tick(0.5, 0, &mut rng));
        assert!(!scheduler.tick(0.5, 0, &mut rng));
    }

    #[test]
    fn when_interval_has_elapsed_then_spawn_is_due_and_timer_rearms() {
        let mut rng = rng();
        let mut scheduler = SpawnScheduler::new(SpawnTuning::default(), &mut rng);

        assert!(scheduler.tick(3.5, 0, &mut rng));
        assert_eq!(scheduler.time_since_last_spawn_ms(), 0.0);
        assert!(!scheduler.tick(0.0, 0, &mut rng));
    }

    #[test]
    fn when_arena_is_full_then_timer_keeps_running_but_nothing_spawns() {
        let tuning = SpawnTuning::default();
        let mut rng = rng();
        let mut scheduler = SpawnScheduler::new(tuning, &mut rng);

        assert!(!scheduler.tick(5.0, tuning.max_enemies, &mut rng));
        assert!(scheduler.time_since_last_spawn_ms() > 0.0);

        // A slot frees up: spawn immediately.
        assert!(scheduler.tick(0.0, tuning.max_enemies - 1, &mut rng));
    }

    #[test]
    fn when_min_equals_max_then_interval_is_fixed() {
        let tuning = SpawnTuning {
            interval_min_ms: 500.0,
            interval_max_ms: 500.0,
            max_enemies: 3,
        };
        let mut rng = rng();

        let scheduler = SpawnScheduler::new(tuning, &mut rng);

        assert_eq!(scheduler.next_interval_ms(), 500.0);
    }

    #[test]
    fn when_enemy_spawns_on_any_edge_then_it_starts_outside_the_arena() {
        let arena = ArenaTuning::default();
        let size = EnemyTuning::default().standard.size;
        for edge in SpawnEdge::ALL {
            for along in [0.0, 0.25, 0.5, 0.999] {
                let position = edge.spawn_position(along, &arena, size);
                let bounds = Aabb::from_top_left(position, size);
                assert!(
                    !bounds.overlaps(&arena_box(&arena)),
                    "{edge:?} at {along} overlaps the arena"
                );
            }
        }
    }

    #[test]
    fn when_spawning_randomly_then_enemies_are_standard_and_off_screen() {
        let arena = ArenaTuning::default();
        let tuning = EnemyTuning::default();
        let mut rng = rng();

        for _ in 0..200 {
            let enemy = spawn_enemy(&mut rng, &arena, &tuning);
            assert_eq!(enemy.kind, EnemyKind::Standard);
            assert_eq!(enemy.health, tuning.standard.health);
            assert!(!enemy.body.bounds().overlaps(&arena_box(&arena)));
        }
    }
}
