//! Bomb drop system: frontline selection and bomb creation.
//!
//! A frontline enemy is one with no live enemy occupying the probe point
//! one vertical spacing unit below it — per column, the lowest survivor.
//! One drop per scheduler fire, chosen uniformly at random.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use invaders_core::components::{Enemy, Extent};
use invaders_core::constants::ENEMY_VERTICAL_SPACING;
use invaders_core::events::GameEvent;
use invaders_core::types::{Position, Rect};

use crate::world_setup;

/// Collect the live enemies eligible to drop a bomb.
pub fn frontline_enemies(world: &World) -> Vec<(Entity, Position)> {
    let enemies: Vec<(Entity, Position, Rect)> = world
        .query::<(&Enemy, &Position, &Extent)>()
        .iter()
        .map(|(entity, (_enemy, pos, extent))| {
            (entity, *pos, Rect::new(*pos, extent.width, extent.height))
        })
        .collect();

    enemies
        .iter()
        .filter(|(_, pos, _)| {
            let probe = Position::new(pos.x, pos.y - ENEMY_VERTICAL_SPACING);
            !enemies.iter().any(|(_, _, rect)| rect.contains(probe))
        })
        .map(|(entity, pos, _)| (*entity, *pos))
        .collect()
}

/// Drop one bomb from a uniformly chosen frontline enemy.
/// No-op when no enemies remain.
pub fn run(world: &mut World, rng: &mut ChaCha8Rng, events: &mut Vec<GameEvent>) {
    let frontline = frontline_enemies(world);
    if frontline.is_empty() {
        return;
    }

    let (_, shooter_pos) = frontline[rng.gen_range(0..frontline.len())];
    let position = Position::new(
        shooter_pos.x,
        shooter_pos.y - ENEMY_VERTICAL_SPACING / 2.0,
    );
    world_setup::spawn_bomb(world, position, events);
    tracing::debug!(x = position.x, y = position.y, "bomb dropped");
}
