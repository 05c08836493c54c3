//! Keeping boids inside the world and within the speed limits.

use core::f64::consts::SQRT_2;

use crate::boid::Boid;
use crate::params::Bounds;
use crate::vector::Velocity;

/// Fraction of the extent, from each edge, where the boundary push starts.
const EDGE_MARGIN: f64 = 0.015;
/// Boundary push, as a multiple of the current speed.
const EDGE_PUSH: f64 = 1.5;
/// Fraction of the extent, from each corner, where predators bail out.
const ESCAPE_MARGIN: f64 = 0.045;
/// Escape speed, as a multiple of the current speed.
const ESCAPE_BOOST: f64 = 2.5;

/// Clamps the speed into `(min_speed, max_speed)`, keeping the direction.
///
/// The checks run in a fixed order: an oversized vector is brought down to
/// 95% of the ceiling, a null vector is given a diagonal heading just above
/// the floor, and anything left at or below the floor is lifted to 105% of
/// it.
pub fn normalize(velocity: Velocity, min_speed: f64, max_speed: f64) -> Velocity {
    assert!(
        min_speed > 0.0 && min_speed < max_speed,
        "speed limits must satisfy 0 < min_speed < max_speed"
    );
    let mut v = velocity;
    if v.norm() >= max_speed {
        v *= 0.95 * max_speed / v.norm();
    }
    if v.norm() == 0.0 {
        v = Velocity::new(1.0, 1.0) * (1.05 * min_speed / SQRT_2);
    }
    if v.norm() <= min_speed {
        v *= 1.05 * min_speed / v.norm();
    }
    assert!(
        v.norm() > min_speed && v.norm() < max_speed,
        "speed {} escaped ({}, {})",
        v.norm(),
        min_speed,
        max_speed
    );
    v
}

/// Pushes a boid back from the edges of the world.
///
/// Each edge is checked on its own, so a boid close to two edges is pushed
/// by both. Predators additionally flee the corners afterwards, see
/// [`leave_corner`].
pub fn bound_position(boid: &mut Boid, bounds: &Bounds) {
    let speed = boid.speed();
    let p = boid.position();
    let margin_x = EDGE_MARGIN * bounds.width();
    let margin_y = EDGE_MARGIN * bounds.height();
    let mut v = boid.velocity().as_vector();

    if p.x() < bounds.x_min + margin_x {
        v.x += speed * EDGE_PUSH;
    }
    if p.x() > bounds.x_max - margin_x {
        v.x -= speed * EDGE_PUSH;
    }
    if p.y() < bounds.y_min + margin_y {
        v.y += speed * EDGE_PUSH;
    }
    if p.y() > bounds.y_max - margin_y {
        v.y -= speed * EDGE_PUSH;
    }
    boid.set_velocity(Velocity::new(v.x, v.y));

    if boid.is_predator() {
        leave_corner(boid, bounds);
    }
}

/// Sends a predator that reached a corner diagonally back into the world.
///
/// The velocity is replaced, not adjusted: corners are the prey's refuge.
pub fn leave_corner(boid: &mut Boid, bounds: &Bounds) {
    assert!(boid.is_predator(), "only predators are driven out of corners");

    let p = boid.position();
    let margin_x = ESCAPE_MARGIN * bounds.width();
    let margin_y = ESCAPE_MARGIN * bounds.height();
    let left = p.x() < bounds.x_min + margin_x;
    let right = p.x() > bounds.x_max - margin_x;
    let bottom = p.y() < bounds.y_min + margin_y;
    let top = p.y() > bounds.y_max - margin_y;

    let away = match (left, right, bottom, top) {
        (true, _, true, _) => Velocity::new(1.0, 1.0),
        (true, _, _, true) => Velocity::new(1.0, -1.0),
        (_, true, _, true) => Velocity::new(-1.0, -1.0),
        (_, true, true, _) => Velocity::new(-1.0, 1.0),
        _ => return,
    };
    let speed = boid.speed();
    boid.set_velocity(away * (ESCAPE_BOOST * speed / SQRT_2));
}
