//! Pairwise geometric tests shared by every rule.

use core::f64::consts::PI;

use crate::boid::Boid;
use crate::math;
use crate::params::Bounds;

/// Fraction of the world's extent, on each axis, that counts as a corner
/// refuge.
const CORNER_MARGIN: f64 = 0.1;

/// Euclidean distance between the positions of two boids.
pub fn distance(b1: &Boid, b2: &Boid) -> f64 {
    (b1.position() - b2.position()).norm()
}

/// Whether `b2` lies inside the field of view of `b1`.
///
/// The field of view is a cone of half-width `angle_of_view / 2` degrees
/// around `b1`'s heading. Boids sharing a position always see each other,
/// whatever the angle.
pub fn is_seen(b1: &Boid, b2: &Boid, angle_of_view: f64) -> bool {
    if b1.position() == b2.position() {
        return true;
    }
    let offset = b2.position() - b1.position();
    let heading = b1.velocity().as_vector();
    let cos = offset.dot(&heading) / (heading.norm() * offset.norm());
    cos >= math::cos(PI * angle_of_view / 360.0)
}

/// Whether the boid sits in one of the four corner refuges, i.e. inside the
/// outer margin of both axes at once.
pub fn in_corner(boid: &Boid, bounds: &Bounds) -> bool {
    let p = boid.position();
    let margin_x = CORNER_MARGIN * bounds.width();
    let margin_y = CORNER_MARGIN * bounds.height();
    let left = p.x() < bounds.x_min + margin_x;
    let right = p.x() > bounds.x_max - margin_x;
    let bottom = p.y() < bounds.y_min + margin_y;
    let top = p.y() > bounds.y_max - margin_y;
    (left || right) && (bottom || top)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::{Position, Velocity};

    fn regular(x: f64, y: f64, vx: f64, vy: f64) -> Boid {
        Boid::regular(Position::new(x, y), Velocity::new(vx, vy))
    }

    #[test]
    fn test_distance() {
        let b1 = regular(0.0, 0.0, 1.0, 0.0);
        let b2 = regular(3.0, 4.0, 0.0, 1.0);
        assert_eq!(distance(&b1, &b2), 5.0);
        assert_eq!(distance(&b2, &b1), 5.0);
        assert_eq!(distance(&b1, &b1), 0.0);
    }

    #[test]
    fn test_coincident_boids_always_see_each_other() {
        let b1 = regular(7.0, 7.0, 1.0, 0.0);
        let b2 = Boid::predator(Position::new(7.0, 7.0), Velocity::new(-1.0, 0.0));
        for angle in [1e-9, 0.5, 90.0, 359.9] {
            assert!(is_seen(&b1, &b2, angle));
            assert!(is_seen(&b2, &b1, angle));
        }
    }

    #[test]
    fn test_field_of_view() {
        let observer = regular(0.0, 0.0, 0.0, 1.0);
        let ahead_right = regular(1.0, 1.0, 0.0, 0.0);
        let behind = regular(-1.0, -1.0, 0.0, 0.0);
        let abeam = regular(5.0, 0.0, 0.0, 0.0);

        assert!(is_seen(&observer, &ahead_right, 180.0));
        assert!(!is_seen(&observer, &ahead_right, 60.0));
        assert!(!is_seen(&observer, &behind, 180.0));
        assert!(is_seen(&observer, &behind, 300.0));
        // exactly on the edge of a 180 degree cone
        assert!(!is_seen(&observer, &abeam, 180.0));
        assert!(is_seen(&observer, &abeam, 185.0));
    }

    #[test]
    fn test_visibility_is_not_symmetric() {
        let chaser = regular(0.0, 0.0, 1.0, 0.0);
        let leader = regular(2.0, 0.0, 1.0, 0.0);
        assert!(is_seen(&chaser, &leader, 90.0));
        assert!(!is_seen(&leader, &chaser, 90.0));
    }

    #[test]
    fn test_in_corner() {
        let bounds = Bounds::default();
        assert!(in_corner(&regular(5.0, 5.0, 1.0, 0.0), &bounds));
        assert!(in_corner(&regular(5.0, 95.0, 1.0, 0.0), &bounds));
        assert!(in_corner(&regular(95.0, 95.0, 1.0, 0.0), &bounds));
        assert!(in_corner(&regular(95.0, 5.0, 1.0, 0.0), &bounds));
        assert!(!in_corner(&regular(5.0, 50.0, 1.0, 0.0), &bounds));
        assert!(!in_corner(&regular(50.0, 95.0, 1.0, 0.0), &bounds));
        assert!(!in_corner(&regular(10.0, 10.0, 1.0, 0.0), &bounds));
    }
}
