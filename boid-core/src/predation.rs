use crate::boid::{Boid, Predator};
use crate::flock::Flock;
use crate::params::Parameters;
use crate::perception::{distance, is_seen};

/// Whether `predator` catches `other` right now: a living regular boid, in
/// sight and inside the capture radius.
pub fn is_victim(predator: Predator<'_>, other: &Boid, params: &Parameters) -> bool {
    !other.is_predator()
        && !other.is_eaten()
        && is_seen(&predator, other, params.angle_of_view)
        && distance(&predator, other) < params.capture_radius()
}

/// Lets `boid`, if it is a predator, eat every victim in the flock.
///
/// Each capture flags the victim and bumps the flock's counter once; an
/// eaten boid is never a victim again. Returns the number of captures.
pub fn set_victims(boid: &Boid, flock: &mut Flock, params: &Parameters) -> usize {
    let Some(predator) = boid.as_predator() else {
        return 0;
    };

    let mut captured = 0;
    for other in flock.boids_mut().iter_mut() {
        if is_victim(predator, other, params) {
            other.mark_eaten();
            captured += 1;
        }
    }
    if captured > 0 {
        log::debug!(
            "predator at ({:.3}, {:.3}) caught {} boid(s)",
            predator.position().x(),
            predator.position().y(),
            captured
        );
    }
    flock.record_captures(captured);
    captured
}
