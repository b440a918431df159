//! Events emitted by the simulation for rendering and audio feedback.
//!
//! Each lifecycle transition is emitted exactly once. The presentation
//! layer derives sound cues from these: laser on a `Shot` spawn, bomb
//! whistle on a `Bomb` spawn, boom on an `Enemy` destruction.

use serde::{Deserialize, Serialize};

use crate::enums::EntityKind;
use crate::types::Position;

/// Lifecycle and scoring events, delivered in the per-tick snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// An entity entered the world.
    EntitySpawned {
        id: u64,
        kind: EntityKind,
        position: Position,
    },
    /// An entity left the world (collision or cleanup).
    EntityDestroyed { id: u64, kind: EntityKind },
    /// The score changed; carries the new total.
    ScoreChanged { score: u32 },
}
