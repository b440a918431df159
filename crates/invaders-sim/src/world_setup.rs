//! Entity spawn factories for setting up the simulation world.
//!
//! Creates the player ship, the 5×9 enemy formation, the four houses,
//! and the in-flight projectiles. Every factory pushes one
//! `EntitySpawned` event so the presentation layer can attach sprites
//! and play creation cues.

use hecs::World;

use invaders_core::components::{Bomb, Enemy, Extent, HouseBlock, PlayerShip, Shot, ShipControl};
use invaders_core::constants::*;
use invaders_core::enums::{EnemyTier, EntityKind};
use invaders_core::events::GameEvent;
use invaders_core::types::{Position, Velocity};

use crate::engine::SimConfig;
use crate::systems::entity_id;

/// Set up the initial world: ship, enemy formation, houses.
/// Returns the ship entity.
pub fn setup_world(
    world: &mut World,
    config: &SimConfig,
    events: &mut Vec<GameEvent>,
) -> hecs::Entity {
    let ship = spawn_ship(world, config, events);
    spawn_formation(world, config, events);
    spawn_houses(world, config, events);
    ship
}

/// Spawn the player ship centered horizontally, near the bottom edge.
pub fn spawn_ship(
    world: &mut World,
    config: &SimConfig,
    events: &mut Vec<GameEvent>,
) -> hecs::Entity {
    let position = Position::new(0.0, ship_y(config));
    let ship = world.spawn((
        PlayerShip,
        position,
        Extent {
            width: SHIP_WIDTH,
            height: SHIP_HEIGHT,
        },
        ShipControl {
            target_x: position.x,
            remaining_secs: 0.0,
        },
    ));
    events.push(GameEvent::EntitySpawned {
        id: entity_id(ship),
        kind: EntityKind::Ship,
        position,
    });
    ship
}

/// Spawn the full formation: 5 rows of 9, top row first, row tiers
/// 1, 2, 2, 3, 3 from top to bottom.
pub fn spawn_formation(world: &mut World, config: &SimConfig, events: &mut Vec<GameEvent>) {
    let spacing = config.screen_width / ENEMY_SPACING_DIVISOR;
    let start_x = -(config.screen_width / 2.0) + ENEMY_LEFT_MARGIN;
    let mut y = config.screen_height / 2.0 - ENEMY_TOP_OFFSET;

    for tier in row_tiers() {
        for col in 0..ENEMY_COLUMNS {
            let x = start_x + ENEMY_COLUMN_FACTOR * col as f64 * spacing;
            spawn_enemy(world, tier, Position::new(x, y), events);
        }
        y -= ENEMY_VERTICAL_SPACING;
    }
}

/// Tier of each formation row, top to bottom.
fn row_tiers() -> [EnemyTier; ENEMY_ROWS] {
    [
        EnemyTier::Tier1,
        EnemyTier::Tier2,
        EnemyTier::Tier2,
        EnemyTier::Tier3,
        EnemyTier::Tier3,
    ]
}

/// Spawn a single enemy.
pub fn spawn_enemy(
    world: &mut World,
    tier: EnemyTier,
    position: Position,
    events: &mut Vec<GameEvent>,
) -> hecs::Entity {
    let enemy = world.spawn((
        Enemy { tier },
        position,
        Extent {
            width: ENEMY_WIDTH,
            height: ENEMY_HEIGHT,
        },
    ));
    events.push(GameEvent::EntitySpawned {
        id: entity_id(enemy),
        kind: EntityKind::Enemy,
        position,
    });
    enemy
}

/// Spawn all four houses, evenly pitched across the screen width,
/// one house-height band above the ship row.
pub fn spawn_houses(world: &mut World, config: &SimConfig, events: &mut Vec<GameEvent>) {
    let pitch = config.screen_width / HOUSE_SPACING_DIVISOR;
    let mut anchor_x = -(config.screen_width / 2.0) + HOUSE_START_FACTOR * pitch;
    let anchor_y = ship_y(config) + HOUSE_BOTTOM_OFFSET;

    for house in 0..HOUSE_COUNT {
        spawn_house(
            world,
            house as u8,
            Position::new(anchor_x, anchor_y),
            events,
        );
        anchor_x += HOUSE_STEP_FACTOR * pitch;
    }
}

/// Spawn one house: a 3×3 grid of destructible blocks around the anchor.
fn spawn_house(world: &mut World, house: u8, anchor: Position, events: &mut Vec<GameEvent>) {
    for idx in 0..HOUSE_GRID * HOUSE_GRID {
        let row = idx / HOUSE_GRID;
        let col = idx % HOUSE_GRID;
        let height = HOUSE_ROW_HEIGHTS[row];
        let position = Position::new(
            anchor.x + (col as f64 + 1.0) * HOUSE_COLUMN_PITCH,
            anchor.y - (row as f64 - 1.0) * height,
        );
        let block = world.spawn((
            HouseBlock {
                house,
                row: row as u8,
                col: col as u8,
            },
            position,
            Extent {
                width: HOUSE_BLOCK_WIDTH,
                height,
            },
        ));
        events.push(GameEvent::EntitySpawned {
            id: entity_id(block),
            kind: EntityKind::HouseBlock,
            position,
        });
    }
}

/// Spawn a player shot one vertical spacing unit above the ship,
/// climbing at constant velocity.
pub fn spawn_shot(
    world: &mut World,
    ship_position: Position,
    events: &mut Vec<GameEvent>,
) -> hecs::Entity {
    let position = Position::new(ship_position.x, ship_position.y + ENEMY_VERTICAL_SPACING);
    let shot = world.spawn((
        Shot,
        position,
        Velocity::new(0.0, SHOT_SPEED),
        Extent {
            width: PROJECTILE_WIDTH,
            height: PROJECTILE_HEIGHT,
        },
    ));
    events.push(GameEvent::EntitySpawned {
        id: entity_id(shot),
        kind: EntityKind::Shot,
        position,
    });
    shot
}

/// Spawn an enemy bomb at rest; gravity takes it from here.
pub fn spawn_bomb(
    world: &mut World,
    position: Position,
    events: &mut Vec<GameEvent>,
) -> hecs::Entity {
    let bomb = world.spawn((
        Bomb,
        position,
        Velocity::new(0.0, 0.0),
        Extent {
            width: PROJECTILE_WIDTH,
            height: PROJECTILE_HEIGHT,
        },
    ));
    events.push(GameEvent::EntitySpawned {
        id: entity_id(bomb),
        kind: EntityKind::Bomb,
        position,
    });
    bomb
}

/// Ship row height for a given screen size.
fn ship_y(config: &SimConfig) -> f64 {
    -(config.screen_height / 2.0) + SHIP_BOTTOM_OFFSET
}
