//! Projectile kinematics system.
//!
//! Shots climb at constant velocity. Bombs fall under constant downward
//! acceleration (semi-implicit Euler: velocity first, then position).

use hecs::World;

use invaders_core::components::{Bomb, Shot};
use invaders_core::constants::{BOMB_GRAVITY, DT};
use invaders_core::types::{Position, Velocity};

/// Integrate all projectile motion for one tick.
pub fn run(world: &mut World) {
    for (_entity, (pos, vel, _shot)) in world.query_mut::<(&mut Position, &Velocity, &Shot)>() {
        pos.x += vel.x * DT;
        pos.y += vel.y * DT;
    }

    for (_entity, (pos, vel, _bomb)) in
        world.query_mut::<(&mut Position, &mut Velocity, &Bomb)>()
    {
        vel.y -= BOMB_GRAVITY * DT;
        pos.x += vel.x * DT;
        pos.y += vel.y * DT;
    }
}
