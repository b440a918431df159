//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::constants::{
    SHIP_REPOSITION_SECS, SHIP_TRACK_SECS, TIER1_POINTS, TIER2_POINTS, TIER3_POINTS,
};

/// Enemy tier. Determines point value and which sprite set the
/// presentation layer draws. Immutable after spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyTier {
    /// Top formation row.
    Tier1,
    /// Middle two rows.
    Tier2,
    /// Bottom two rows.
    Tier3,
}

impl EnemyTier {
    /// Score awarded when an enemy of this tier is destroyed.
    pub fn points(self) -> u32 {
        match self {
            EnemyTier::Tier1 => TIER1_POINTS,
            EnemyTier::Tier2 => TIER2_POINTS,
            EnemyTier::Tier3 => TIER3_POINTS,
        }
    }
}

/// Projectile kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectileKind {
    /// Player shot, climbing at constant velocity.
    Shot,
    /// Enemy bomb, falling under constant acceleration.
    Bomb,
}

/// Entity category, mirrored into lifecycle events so the presentation
/// layer can pick sprites and sound cues without extra lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Ship,
    Enemy,
    Shot,
    Bomb,
    HouseBlock,
}

/// Ship glide pace. The presentation layer picks `Reposition` for a fresh
/// touch-down and `Track` for touch-move updates while held.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MovePace {
    #[default]
    Reposition,
    Track,
}

impl MovePace {
    /// Glide duration for this pace (seconds).
    pub fn duration_secs(self) -> f64 {
        match self {
            MovePace::Reposition => SHIP_REPOSITION_SECS,
            MovePace::Track => SHIP_TRACK_SECS,
        }
    }
}
