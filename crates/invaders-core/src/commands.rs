//! Player commands sent from the presentation layer to the simulation.
//!
//! Commands are queued and processed at the next tick boundary. The core
//! never sees raw touches — the presentation layer maps gestures to these.

use serde::{Deserialize, Serialize};

use crate::enums::MovePace;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Glide the ship toward a target x at the given pace.
    SetShipTarget { x: f64, pace: MovePace },
    /// Fire one shot from the ship's current position.
    FireShot,
}
