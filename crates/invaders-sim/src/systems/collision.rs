//! Collision resolution system.
//!
//! Runs once per tick after all movement, applying the category-pair
//! rules with axis-aligned rect overlap:
//!
//! - Shot × Enemy: both destroyed, score += tier value.
//! - Bomb × Ship: bomb destroyed; the ship absorbs the hit.
//! - Shot/Bomb × HouseBlock: projectile and block destroyed, the
//!   house's impact counter incremented.
//!
//! An entity marked destroyed earlier in the tick is excluded from all
//! further pair checks, so nothing resolves twice.

use hecs::{Entity, World};

use invaders_core::components::{Bomb, Enemy, Extent, HouseBlock, PlayerShip, Shot};
use invaders_core::constants::HOUSE_COUNT;
use invaders_core::enums::EnemyTier;
use invaders_core::events::GameEvent;
use invaders_core::types::{Position, Rect};

use super::despawn_buffered;

/// Resolve all collisions for this tick.
pub fn run(
    world: &mut World,
    despawn_buffer: &mut Vec<Entity>,
    score: &mut u32,
    house_impacts: &mut [u32; HOUSE_COUNT],
    events: &mut Vec<GameEvent>,
) {
    let shots = collect_rects::<Shot>(world);
    let bombs = collect_rects::<Bomb>(world);

    let enemies: Vec<(Entity, EnemyTier, Rect)> = world
        .query::<(&Enemy, &Position, &Extent)>()
        .iter()
        .map(|(entity, (enemy, pos, extent))| {
            (entity, enemy.tier, Rect::new(*pos, extent.width, extent.height))
        })
        .collect();

    let blocks: Vec<(Entity, u8, Rect)> = world
        .query::<(&HouseBlock, &Position, &Extent)>()
        .iter()
        .map(|(entity, (block, pos, extent))| {
            (entity, block.house, Rect::new(*pos, extent.width, extent.height))
        })
        .collect();

    let ship_rect = world
        .query::<(&PlayerShip, &Position, &Extent)>()
        .iter()
        .next()
        .map(|(_, (_, pos, extent))| Rect::new(*pos, extent.width, extent.height));

    // Insertion-ordered so despawns and events stay deterministic.
    let mut destroyed: Vec<Entity> = Vec::new();

    // Shot × Enemy: a shot never passes through, so one kill each.
    for (shot, shot_rect) in &shots {
        if destroyed.contains(shot) {
            continue;
        }
        for (enemy, tier, enemy_rect) in &enemies {
            if destroyed.contains(enemy) {
                continue;
            }
            if shot_rect.intersects(enemy_rect) {
                destroyed.push(*shot);
                destroyed.push(*enemy);
                *score += tier.points();
                events.push(GameEvent::ScoreChanged { score: *score });
                tracing::debug!(score = u64::from(*score), ?tier, "enemy destroyed");
                break;
            }
        }
    }

    // Bomb × Ship: the bomb is spent; ship damage is not modeled.
    if let Some(ship_rect) = ship_rect {
        for (bomb, bomb_rect) in &bombs {
            if destroyed.contains(bomb) {
                continue;
            }
            if bomb_rect.intersects(&ship_rect) {
                destroyed.push(*bomb);
                tracing::debug!("bomb absorbed by ship");
            }
        }
    }

    // Projectile × HouseBlock: one impact removes the block.
    for (projectile, rect) in shots.iter().chain(bombs.iter()) {
        if destroyed.contains(projectile) {
            continue;
        }
        for (block, house, block_rect) in &blocks {
            if destroyed.contains(block) {
                continue;
            }
            if rect.intersects(block_rect) {
                destroyed.push(*projectile);
                destroyed.push(*block);
                house_impacts[*house as usize] += 1;
                tracing::debug!(house = u64::from(*house), "house block destroyed");
                break;
            }
        }
    }

    despawn_buffer.clear();
    despawn_buffer.extend(destroyed);
    despawn_buffered(world, despawn_buffer, events);
}

/// Gather (entity, rect) pairs for one projectile marker type.
fn collect_rects<M: hecs::Component>(world: &World) -> Vec<(Entity, Rect)> {
    world
        .query::<(&M, &Position, &Extent)>()
        .iter()
        .map(|(entity, (_, pos, extent))| (entity, Rect::new(*pos, extent.width, extent.height)))
        .collect()
}
