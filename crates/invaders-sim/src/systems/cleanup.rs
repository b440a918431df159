//! Cleanup system: removes projectiles that left the vertical play area.
//!
//! Runs first in every tick without exception, bounding the live
//! projectile set. Uses a pre-allocated buffer to avoid per-tick
//! allocation.

use hecs::{Entity, World};

use invaders_core::components::{Bomb, Shot};
use invaders_core::constants::PROJECTILE_Y_LIMIT;
use invaders_core::events::GameEvent;
use invaders_core::types::Position;

use super::despawn_buffered;

/// Despawn shots and bombs with |y| beyond the play-area limit.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>, events: &mut Vec<GameEvent>) {
    despawn_buffer.clear();

    for (entity, (pos, _shot)) in world.query_mut::<(&Position, &Shot)>() {
        if pos.y > PROJECTILE_Y_LIMIT || pos.y < -PROJECTILE_Y_LIMIT {
            despawn_buffer.push(entity);
        }
    }

    for (entity, (pos, _bomb)) in world.query_mut::<(&Position, &Bomb)>() {
        if pos.y > PROJECTILE_Y_LIMIT || pos.y < -PROJECTILE_Y_LIMIT {
            despawn_buffer.push(entity);
        }
    }

    despawn_buffered(world, despawn_buffer, events);
}
