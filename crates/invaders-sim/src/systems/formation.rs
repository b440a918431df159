//! Formation movement system: horizontal advance and bounds reversal.
//!
//! Every live enemy steps by direction × speed, then the direction flips
//! if *any* live enemy reached the bound for the current travel
//! direction. With no live enemies the direction is left untouched.

use hecs::World;

use invaders_core::components::Enemy;
use invaders_core::types::Position;

use crate::formation::{FormationDirection, FormationState};

/// Advance the formation one tick and re-evaluate the travel direction.
pub fn run(world: &mut World, formation: &mut FormationState) {
    let step = formation.direction.sign() * formation.speed;

    let mut min_x = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut any_alive = false;

    for (_entity, (pos, _enemy)) in world.query_mut::<(&mut Position, &Enemy)>() {
        pos.x += step;
        min_x = min_x.min(pos.x);
        max_x = max_x.max(pos.x);
        any_alive = true;
    }

    if !any_alive {
        return;
    }

    match formation.direction {
        FormationDirection::Right if max_x >= formation.right_bound => {
            formation.direction = FormationDirection::Left;
            tracing::debug!(max_x, bound = formation.right_bound, "formation reversing left");
        }
        FormationDirection::Left if min_x <= formation.left_bound => {
            formation.direction = FormationDirection::Right;
            tracing::debug!(min_x, bound = formation.left_bound, "formation reversing right");
        }
        _ => {}
    }
}
