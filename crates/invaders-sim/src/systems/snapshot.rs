//! Snapshot system: queries the ECS world and builds a complete
//! `GameSnapshot`.
//!
//! This system is read-only — it never modifies the world. Views are
//! sorted so equal worlds serialize identically.

use hecs::World;

use invaders_core::components::{Bomb, Enemy, Extent, HouseBlock, PlayerShip, Shot};
use invaders_core::constants::HOUSE_COUNT;
use invaders_core::enums::ProjectileKind;
use invaders_core::events::GameEvent;
use invaders_core::state::{EnemyView, GameSnapshot, HouseBlockView, ProjectileView, ShipView};
use invaders_core::types::{Position, SimTime};

use super::entity_id;

/// Build a complete `GameSnapshot` from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    score: u32,
    house_impacts: [u32; HOUSE_COUNT],
    events: Vec<GameEvent>,
) -> GameSnapshot {
    GameSnapshot {
        time: *time,
        score,
        house_impacts,
        ship: build_ship(world),
        enemies: build_enemies(world),
        projectiles: build_projectiles(world),
        house_blocks: build_house_blocks(world),
        events,
    }
}

fn build_ship(world: &World) -> ShipView {
    world
        .query::<(&PlayerShip, &Position)>()
        .iter()
        .next()
        .map(|(entity, (_, pos))| ShipView {
            id: entity_id(entity),
            position: *pos,
        })
        .unwrap_or_default()
}

fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&Enemy, &Position)>()
        .iter()
        .map(|(entity, (enemy, pos))| EnemyView {
            id: entity_id(entity),
            tier: enemy.tier,
            position: *pos,
        })
        .collect();

    enemies.sort_by_key(|e| e.id);
    enemies
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut projectiles: Vec<ProjectileView> = world
        .query::<(&Shot, &Position)>()
        .iter()
        .map(|(entity, (_, pos))| ProjectileView {
            id: entity_id(entity),
            kind: ProjectileKind::Shot,
            position: *pos,
        })
        .collect();

    projectiles.extend(
        world
            .query::<(&Bomb, &Position)>()
            .iter()
            .map(|(entity, (_, pos))| ProjectileView {
                id: entity_id(entity),
                kind: ProjectileKind::Bomb,
                position: *pos,
            }),
    );

    projectiles.sort_by_key(|p| p.id);
    projectiles
}

fn build_house_blocks(world: &World) -> Vec<HouseBlockView> {
    let mut blocks: Vec<HouseBlockView> = world
        .query::<(&HouseBlock, &Position, &Extent)>()
        .iter()
        .map(|(entity, (block, pos, extent))| HouseBlockView {
            id: entity_id(entity),
            house: block.house,
            row: block.row,
            col: block.col,
            position: *pos,
            width: extent.width,
            height: extent.height,
        })
        .collect();

    blocks.sort_by_key(|b| (b.house, b.row, b.col));
    blocks
}
