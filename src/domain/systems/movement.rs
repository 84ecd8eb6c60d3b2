use crate::domain::geometry::{heading_radians, radians_to_degrees};
use crate::domain::input::InputState;
use crate::domain::state::{Enemy, Player, Projectile};
use crate::domain::tuning::ArenaTuning;
use glam::Vec2;

pub fn move_player(player: &mut Player, input: &InputState, dt: f32, arena: &ArenaTuning) {
    // Diagonals are not normalized: holding two axes moves speed*dt on each.
    let step = input.movement_axes() * player.speed * dt;
    let mut position = player.body.position + step;

    // Keep the whole box inside the arena.
    position.x = position.x.min(arena.width - player.body.size.width).max(0.0);
    position.y = position.y.min(arena.height - player.body.size.height).max(0.0);
    player.body.position = position;

    // Face the aim point regardless of movement.
    let heading = heading_radians(player.body.center(), input.aim_target);
    player.body.rotation = radians_to_degrees(heading);
}

/// Steers every enemy straight at `target` (the player's center after this step's move).
pub fn move_enemies(enemies: &mut [Enemy], target: Vec2, dt: f32) {
    for e in enemies.iter_mut() {
        let heading = heading_radians(e.body.center(), target);
        e.body.position += Vec2::from_angle(heading) * e.speed * dt;
        e.body.rotation = radians_to_degrees(heading);
    }
}

pub fn advance_projectiles(projectiles: &mut [Projectile], dt: f32) {
    for p in projectiles.iter_mut() {
        p.body.position += p.velocity * dt;
    }
}

/// Drops projectiles that have fully left the arena.
pub fn prune_projectiles(projectiles: &mut Vec<Projectile>, arena: &ArenaTuning) {
    projectiles.retain(|p| {
        let pos = p.body.position;
        let size = p.body.size;
        pos.x > -size.width && pos.x < arena.width && pos.y > -size.height && pos.y < arena.height
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::state::EnemyKind;
    use crate::domain::tuning::{EnemyTuning, PlayerTuning, ProjectileTuning};

    fn arena() -> ArenaTuning {
        ArenaTuning::default()
    }

    fn player() -> Player {
        Player::spawn(&PlayerTuning::default(), 800.0, 600.0)
    }

    fn held(up: bool, down: bool, left: bool, right: bool) -> InputState {
        InputState {
            move_up: up,
            move_down: down,
            move_left: left,
            move_right: right,
            aim_target: Vec2::new(400.0, 300.0),
        }
    }

    #[test]
    fn when_moving_right_then_player_moves_speed_times_dt() {
        let mut p = player();

        move_player(&mut p, &held(false, false, false, true), 0.1, &arena());

        assert!((p.body.position.x - 410.0).abs() < 1e-3);
        assert!((p.body.position.y - 550.0).abs() < 1e-3);
    }

    #[test]
    fn when_moving_diagonally_then_each_axis_gets_full_displacement() {
        let mut p = player();

        move_player(&mut p, &held(true, false, true, false), 0.1, &arena());

        assert!((p.body.position.x - 360.0).abs() < 1e-3);
        assert!((p.body.position.y - 525.0).abs() < 1e-3);
    }

    #[test]
    fn when_pushing_past_every_edge_then_the_box_stays_inside_the_arena() {
        let arena = arena();
        for input in [
            held(true, false, true, false),
            held(false, true, false, true),
            held(true, false, false, true),
            held(false, true, true, false),
        ] {
            let mut p = player();
            move_player(&mut p, &input, 10.0, &arena);

            let pos = p.body.position;
            assert!(pos.x >= 0.0 && pos.x <= arena.width - p.body.size.width);
            assert!(pos.y >= 0.0 && pos.y <= arena.height - p.body.size.height);
        }
    }

    #[test]
    fn when_aim_is_directly_above_then_rotation_is_minus_ninety_degrees() {
        let mut p = player();
        let mut input = held(false, false, false, false);
        input.aim_target = Vec2::new(400.0, 0.0);

        move_player(&mut p, &input, 0.016, &arena());

        assert!((p.body.rotation + 90.0).abs() < 1e-3);
    }

    #[test]
    fn when_enemy_homes_then_it_moves_toward_target_center_by_its_speed() {
        let tuning = EnemyTuning::default();
        let mut enemies = vec![Enemy::spawn(EnemyKind::Standard, Vec2::new(0.0, 0.0), &tuning)];
        let start = enemies[0].body.center();
        let target = start + Vec2::new(300.0, 400.0);

        move_enemies(&mut enemies, target, 0.5);

        let moved = enemies[0].body.center() - start;
        assert!((moved.length() - 50.0).abs() < 1e-3);
        assert!((moved.x - 30.0).abs() < 1e-3);
        assert!((moved.y - 40.0).abs() < 1e-3);
        assert!((enemies[0].body.rotation - 53.130_1).abs() < 1e-2);
    }

    #[test]
    fn when_projectile_leaves_the_arena_then_it_is_pruned() {
        let p = player();
        let tuning = ProjectileTuning::default();
        let aim = p.body.center() + Vec2::new(0.0, 100.0);
        let mut projectiles = vec![Projectile::fired_by(&p, aim, &tuning)];

        advance_projectiles(&mut projectiles, 0.01);
        prune_projectiles(&mut projectiles, &arena());
        assert_eq!(projectiles.len(), 1);

        advance_projectiles(&mut projectiles, 0.2);
        prune_projectiles(&mut projectiles, &arena());
        assert!(projectiles.is_empty());
    }
}
