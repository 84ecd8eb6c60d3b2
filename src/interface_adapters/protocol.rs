// Wire protocol DTOs and conversions for public game server messages.

use crate::domain::{
    EnemyKind, EnemySnapshot, InputState, PlayerSnapshot, ProjectileOwner, ProjectileSnapshot,
    SessionStatus,
};
use crate::use_cases::{SessionView, WorldUpdate};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Messages the server sends to connected clients over the WebSocket.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum ServerMessage {
    // Snapshot of the arena for a given tick.
    WorldUpdate(WorldUpdateDto),
    // Session status, score and game-over message.
    Session(SessionDto),
}

/// Messages the client sends to the server over the WebSocket.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ClientMessage {
    Start,
    Restart,
    // Held directions and pointer position, sent whenever either changes.
    Input(InputDto),
    Fire,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InputDto {
    #[serde(default)]
    pub up: bool,
    #[serde(default)]
    pub down: bool,
    #[serde(default)]
    pub left: bool,
    #[serde(default)]
    pub right: bool,
    pub aim_x: f32,
    pub aim_y: f32,
}

impl InputDto {
    /// Converts to the domain snapshot, rejecting non-finite aim coordinates.
    pub fn into_input(self) -> Option<InputState> {
        if !self.aim_x.is_finite() || !self.aim_y.is_finite() {
            return None;
        }
        Some(InputState {
            move_up: self.up,
            move_down: self.down,
            move_left: self.left,
            move_right: self.right,
            aim_target: Vec2::new(self.aim_x, self.aim_y),
        })
    }
}

/// Snapshot of the arena sent to clients on each tick.
#[derive(Debug, Clone, Serialize)]
pub struct WorldUpdateDto {
    pub tick: u64,
    pub score: u32,
    pub player: Option<PlayerDto>,
    pub enemies: Vec<EnemyDto>,
    pub projectiles: Vec<ProjectileDto>,
}

impl From<WorldUpdate> for WorldUpdateDto {
    fn from(update: WorldUpdate) -> Self {
        let snapshot = update.snapshot;
        Self {
            tick: update.tick,
            score: snapshot.score,
            player: snapshot.player.as_ref().map(PlayerDto::from),
            enemies: snapshot.enemies.iter().map(EnemyDto::from).collect(),
            projectiles: snapshot
                .projectiles
                .iter()
                .map(ProjectileDto::from)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerDto {
    pub id: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub rot: f32,
    pub hp: i32,
}

impl From<&PlayerSnapshot> for PlayerDto {
    fn from(player: &PlayerSnapshot) -> Self {
        Self {
            id: player.id.to_string(),
            x: player.position.x,
            y: player.position.y,
            width: player.size.width,
            height: player.size.height,
            rot: player.rotation,
            hp: player.health,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnemyKindDto {
    Standard,
    Fast,
    Tough,
}

impl From<EnemyKind> for EnemyKindDto {
    fn from(kind: EnemyKind) -> Self {
        match kind {
            EnemyKind::Standard => EnemyKindDto::Standard,
            EnemyKind::Fast => EnemyKindDto::Fast,
            EnemyKind::Tough => EnemyKindDto::Tough,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EnemyDto {
    pub id: String,
    pub kind: EnemyKindDto,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub rot: f32,
    pub hp: i32,
}

impl From<&EnemySnapshot> for EnemyDto {
    fn from(enemy: &EnemySnapshot) -> Self {
        Self {
            id: enemy.id.to_string(),
            kind: enemy.kind.into(),
            x: enemy.position.x,
            y: enemy.position.y,
            width: enemy.size.width,
            height: enemy.size.height,
            rot: enemy.rotation,
            hp: enemy.health,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OwnerDto {
    Player,
    Enemy,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectileDto {
    pub id: String,
    pub owner: OwnerDto,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub rot: f32,
}

impl From<&ProjectileSnapshot> for ProjectileDto {
    fn from(projectile: &ProjectileSnapshot) -> Self {
        Self {
            id: projectile.id.to_string(),
            owner: match projectile.owner {
                ProjectileOwner::Player => OwnerDto::Player,
                ProjectileOwner::Enemy => OwnerDto::Enemy,
            },
            x: projectile.position.x,
            y: projectile.position.y,
            width: projectile.size.width,
            height: projectile.size.height,
            rot: projectile.rotation,
        }
    }
}

/// Session lifecycle sent to clients for UI flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatusDto {
    NotStarted,
    Running,
    GameOver,
}

impl From<SessionStatus> for SessionStatusDto {
    fn from(status: SessionStatus) -> Self {
        match status {
            SessionStatus::NotStarted => SessionStatusDto::NotStarted,
            SessionStatus::Running => SessionStatusDto::Running,
            SessionStatus::GameOver => SessionStatusDto::GameOver,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionDto {
    pub status: SessionStatusDto,
    pub score: u32,
    // Placeholder while the game-over line is loading, then the line itself.
    pub message: Option<String>,
}

impl From<SessionView> for SessionDto {
    fn from(view: SessionView) -> Self {
        Self {
            status: view.status.into(),
            score: view.score,
            message: view.message,
        }
    }
}
