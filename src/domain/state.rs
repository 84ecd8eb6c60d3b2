// Domain-level simulation entities and their read-only snapshots.

use crate::domain::geometry::{Aabb, Size, heading_radians, radians_to_degrees};
use crate::domain::ids::EntityId;
use crate::domain::tuning::{EnemyProfile, EnemyTuning, PlayerTuning, ProjectileTuning};
use glam::Vec2;

/// Shape shared by every entity: identity, top-left position, size and facing.
#[derive(Debug, Clone)]
pub struct Body {
    pub id: EntityId,
    pub position: Vec2,
    pub size: Size,
    /// Degrees from +x toward the facing direction.
    pub rotation: f32,
}

impl Body {
    fn spawn(position: Vec2, size: Size) -> Self {
        Self {
            id: EntityId::generate(),
            position,
            size,
            rotation: 0.0,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.position + self.size.half()
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_top_left(self.position, self.size)
    }
}

pub struct Player {
    pub body: Body,
    // Fractional so per-step contact damage accrues; observers see it rounded.
    pub health: f32,
    pub speed: f32,
}

impl Player {
    /// Spawns the ship centered horizontally, just above the arena floor.
    pub fn spawn(tuning: &PlayerTuning, arena_width: f32, arena_height: f32) -> Self {
        let position = Vec2::new(
            arena_width / 2.0 - tuning.size.width / 2.0,
            arena_height - tuning.size.height - tuning.spawn_floor_gap,
        );
        Self {
            body: Body::spawn(position, tuning.size),
            health: tuning.initial_health,
            speed: tuning.speed,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }

    /// Health as observers see it.
    pub fn display_health(&self) -> i32 {
        self.health.max(0.0).round() as i32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyKind {
    Standard,
    Fast,
    Tough,
}

impl EnemyKind {
    pub fn profile(self, tuning: &EnemyTuning) -> EnemyProfile {
        match self {
            EnemyKind::Standard => tuning.standard,
            EnemyKind::Fast => tuning.fast,
            EnemyKind::Tough => tuning.tough,
        }
    }
}

pub struct Enemy {
    pub body: Body,
    pub health: i32,
    pub speed: f32,
    pub kind: EnemyKind,
}

impl Enemy {
    pub fn spawn(kind: EnemyKind, position: Vec2, tuning: &EnemyTuning) -> Self {
        let profile = kind.profile(tuning);
        Self {
            body: Body::spawn(position, profile.size),
            health: profile.health,
            speed: profile.speed,
            kind,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Applies damage, clamping stored health at zero.
    pub fn take_damage(&mut self, damage: i32) {
        self.health = (self.health - damage).max(0);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectileOwner {
    Player,
    // Reserved: nothing fires enemy projectiles yet.
    Enemy,
}

pub struct Projectile {
    pub body: Body,
    pub velocity: Vec2,
    pub damage: i32,
    pub owner: ProjectileOwner,
}

impl Projectile {
    /// Creates a projectile centered on the player, heading toward `aim_target`.
    pub fn fired_by(player: &Player, aim_target: Vec2, tuning: &ProjectileTuning) -> Self {
        let origin = player.body.center();
        let heading = heading_radians(origin, aim_target);
        let mut body = Body::spawn(origin - tuning.size.half(), tuning.size);
        body.rotation = radians_to_degrees(heading);
        Self {
            body,
            velocity: Vec2::from_angle(heading) * tuning.speed,
            damage: tuning.damage,
            owner: ProjectileOwner::Player,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlayerSnapshot {
    pub id: EntityId,
    pub position: Vec2,
    pub size: Size,
    pub rotation: f32,
    pub health: i32,
}

#[derive(Debug, Clone)]
pub struct EnemySnapshot {
    pub id: EntityId,
    pub position: Vec2,
    pub size: Size,
    pub rotation: f32,
    pub health: i32,
    pub kind: EnemyKind,
}

#[derive(Debug, Clone)]
pub struct ProjectileSnapshot {
    pub id: EntityId,
    pub position: Vec2,
    pub size: Size,
    pub rotation: f32,
    pub owner: ProjectileOwner,
}

impl From<&Player> for PlayerSnapshot {
    fn from(p: &Player) -> Self {
        Self {
            id: p.body.id.clone(),
            position: p.body.position,
            size: p.body.size,
            rotation: p.body.rotation,
            health: p.display_health(),
        }
    }
}

impl From<&Enemy> for EnemySnapshot {
    fn from(e: &Enemy) -> Self {
        Self {
            id: e.body.id.clone(),
            position: e.body.position,
            size: e.body.size,
            rotation: e.body.rotation,
            health: e.health,
            kind: e.kind,
        }
    }
}

impl From<&Projectile> for ProjectileSnapshot {
    fn from(p: &Projectile) -> Self {
        Self {
            id: p.body.id.clone(),
            position: p.body.position,
            size: p.body.size,
            rotation: p.body.rotation,
            owner: p.owner,
        }
    }
}
