//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are pure functions that take `&mut World` plus whatever
//! engine-owned state they write. They do not own state themselves.

pub mod bombardier;
pub mod cleanup;
pub mod collision;
pub mod formation;
pub mod movement;
pub mod ship_control;
pub mod snapshot;

use hecs::{Entity, World};

use invaders_core::components::{Bomb, Enemy, HouseBlock, PlayerShip, Shot};
use invaders_core::enums::EntityKind;
use invaders_core::events::GameEvent;

/// Raw id bits for an entity, as exposed to the presentation layer.
pub fn entity_id(entity: Entity) -> u64 {
    entity.to_bits().get()
}

/// Despawn every entity in the buffer, emitting one `EntityDestroyed`
/// event per entity actually removed. Duplicates and already-dead
/// entities are skipped, so removal is idempotent and the destroy
/// notification fires exactly once.
pub fn despawn_buffered(
    world: &mut World,
    buffer: &mut Vec<Entity>,
    events: &mut Vec<GameEvent>,
) {
    for entity in buffer.drain(..) {
        let kind = match kind_of(world, entity) {
            Some(kind) => kind,
            None => continue,
        };
        if world.despawn(entity).is_ok() {
            events.push(GameEvent::EntityDestroyed {
                id: entity_id(entity),
                kind,
            });
        }
    }
}

/// Entity category from its marker component; `None` once despawned.
fn kind_of(world: &World, entity: Entity) -> Option<EntityKind> {
    if world.get::<&Enemy>(entity).is_ok() {
        Some(EntityKind::Enemy)
    } else if world.get::<&Shot>(entity).is_ok() {
        Some(EntityKind::Shot)
    } else if world.get::<&Bomb>(entity).is_ok() {
        Some(EntityKind::Bomb)
    } else if world.get::<&HouseBlock>(entity).is_ok() {
        Some(EntityKind::HouseBlock)
    } else if world.get::<&PlayerShip>(entity).is_ok() {
        Some(EntityKind::Ship)
    } else {
        None
    }
}
