//! Game state snapshot — the complete visible state sent to the
//! presentation layer each tick.

use serde::{Deserialize, Serialize};

use crate::constants::HOUSE_COUNT;
use crate::enums::{EnemyTier, ProjectileKind};
use crate::events::GameEvent;
use crate::types::{Position, SimTime};

/// Complete game state broadcast to the presentation layer after each tick.
///
/// Entity positions travel in the views; spawn/destroy/score transitions
/// travel in `events`, each emitted exactly once.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub time: SimTime,
    pub score: u32,
    /// Cumulative projectile impacts per house. Tracked for a future
    /// durability model; blocks currently vanish on the first hit.
    pub house_impacts: [u32; HOUSE_COUNT],
    pub ship: ShipView,
    pub enemies: Vec<EnemyView>,
    pub projectiles: Vec<ProjectileView>,
    pub house_blocks: Vec<HouseBlockView>,
    pub events: Vec<GameEvent>,
}

/// The player ship.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShipView {
    pub id: u64,
    pub position: Position,
}

/// A live formation enemy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: u64,
    pub tier: EnemyTier,
    pub position: Position,
}

/// A live shot or bomb.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: u64,
    pub kind: ProjectileKind,
    pub position: Position,
}

/// A surviving house block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HouseBlockView {
    pub id: u64,
    pub house: u8,
    pub row: u8,
    pub col: u8,
    pub position: Position,
    pub width: f64,
    pub height: f64,
}
