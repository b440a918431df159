//! Ship glide system.
//!
//! Moves the ship toward its commanded target x over the remaining glide
//! time, linearly, snapping to the target on the final step. The glide
//! duration comes from the command's pace (reposition vs track); easing
//! curves are a presentation concern.

use hecs::World;

use invaders_core::components::{PlayerShip, ShipControl};
use invaders_core::constants::DT;
use invaders_core::types::Position;

/// Advance the ship's glide by one tick.
pub fn run(world: &mut World) {
    for (_entity, (pos, control, _ship)) in
        world.query_mut::<(&mut Position, &mut ShipControl, &PlayerShip)>()
    {
        if control.remaining_secs <= 0.0 {
            continue;
        }
        if control.remaining_secs <= DT {
            pos.x = control.target_x;
            control.remaining_secs = 0.0;
        } else {
            pos.x += (control.target_x - pos.x) * (DT / control.remaining_secs);
            control.remaining_secs -= DT;
        }
    }
}
