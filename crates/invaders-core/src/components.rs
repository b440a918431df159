//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::EnemyTier;

/// Marks the player's ship.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerShip;

/// Marks a formation enemy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy {
    pub tier: EnemyTier,
}

/// Marks a player shot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Shot;

/// Marks an enemy bomb.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bomb;

/// One destructible block of a house's 3×3 grid.
/// Row/column select the `house_rc` sprite; the house index keys the
/// per-house impact counter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HouseBlock {
    pub house: u8,
    pub row: u8,
    pub col: u8,
}

/// Collision footprint (width × height in points).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Extent {
    pub width: f64,
    pub height: f64,
}

/// Ship glide state toward a commanded target x.
/// Idle when `remaining_secs` is zero.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ShipControl {
    pub target_x: f64,
    pub remaining_secs: f64,
}
