//! Steering rules. Each returns a velocity delta computed from the current
//! flock snapshot only.

use alloc::vec::Vec;

use crate::boid::{Boid, BoidKind, Predator, Regular};
use crate::flock::{competitors, neighbours, predators, Flock};
use crate::math;
use crate::params::{Parameters, SeekStrategy};
use crate::perception::{distance, in_corner, is_seen};
use crate::vector::Velocity;

/// Sum of `(boid - other) * factor` over `others`. A self entry adds zero.
fn repulsion(boid: &Boid, others: &[&Boid], factor: f64) -> Velocity {
    others.iter().fold(Velocity::zero(), |sum, other| {
        sum + Velocity::from_displacement((boid.position() - other.position()) * factor)
    })
}

/// Steers away from crowding.
///
/// Predators keep their distance from other predators only, with the
/// regular separation range and factor. Regular boids move away from close
/// neighbours, and much more strongly from predators in the wider
/// predator range.
pub fn separation(boid: &Boid, flock: &Flock, params: &Parameters) -> Velocity {
    let angle = params.angle_of_view;
    match boid.kind() {
        BoidKind::Predator(predator) => {
            let mut comps = Vec::new();
            competitors(predator, flock, &mut comps, angle, params.separation_distance);
            repulsion(boid, &comps, params.separation_factor)
        }
        BoidKind::Regular(regular) => {
            let mut close = Vec::new();
            neighbours(boid, flock, &mut close, angle, params.separation_distance);
            let mut preds = Vec::new();
            predators(
                regular,
                flock,
                &mut preds,
                angle,
                params.predator_separation_distance(),
            );
            repulsion(boid, &close, params.separation_factor)
                + repulsion(boid, &preds, params.predator_separation_factor())
        }
    }
}

/// Steers towards the mean heading of the neighbours.
pub fn alignment(boid: Regular<'_>, flock: &Flock, params: &Parameters) -> Velocity {
    let mut nbrs = Vec::new();
    neighbours(
        &boid,
        flock,
        &mut nbrs,
        params.angle_of_view,
        params.neighbour_distance,
    );
    // nbrs holds the boid itself
    if nbrs.len() <= 1 {
        return Velocity::zero();
    }
    let weight = params.alignment_factor / (nbrs.len() - 1) as f64;
    nbrs.iter().fold(Velocity::zero(), |sum, other| {
        sum + (other.velocity() - boid.velocity()) * weight
    })
}

/// Steers towards the centre of mass of the neighbours.
///
/// Predators look for regular boids within the predator separation range;
/// since a predator is never its own neighbour, a single prey in range
/// produces no pull.
pub fn cohesion(boid: &Boid, flock: &Flock, params: &Parameters) -> Velocity {
    let range = if boid.is_predator() {
        params.predator_separation_distance()
    } else {
        params.neighbour_distance
    };
    let mut nbrs = Vec::new();
    neighbours(boid, flock, &mut nbrs, params.angle_of_view, range);
    if nbrs.len() <= 1 {
        return Velocity::zero();
    }
    let weight = params.cohesion_factor / (nbrs.len() - 1) as f64;
    nbrs.iter().fold(Velocity::zero(), |sum, other| {
        sum + Velocity::from_displacement((other.position() - boid.position()) * weight)
    })
}

/// Predator pursuit, according to `params.seek`.
///
/// Prey hiding in a corner refuge is left alone. Otherwise the predator
/// aims at where the prey is heading, with a magnitude proportional to the
/// distance and to how fast the predator already flies.
pub fn seek(predator: Predator<'_>, flock: &Flock, params: &Parameters) -> Velocity {
    let prey = match params.seek {
        SeekStrategy::CenterOfMass => return cohesion(&predator, flock, params),
        SeekStrategy::Nearest => find_prey(predator, flock, params.angle_of_view),
        SeekStrategy::Isolated => find_isolated_prey(
            predator,
            flock,
            params.angle_of_view,
            params.predator_separation_distance(),
        ),
    };

    let Some(prey) = prey else {
        return Velocity::zero();
    };
    if in_corner(prey, &params.bounds) {
        return Velocity::zero();
    }

    let pos_diff = prey.position() - predator.position();
    let look_ahead = pos_diff + prey.velocity().as_vector();
    if look_ahead.norm() == 0.0 || pos_diff.norm() == 0.0 {
        return Velocity::from_displacement(look_ahead);
    }
    let reach = pos_diff.norm() * (predator.speed() / params.max_speed);
    Velocity::from_displacement(look_ahead / look_ahead.norm() * reach)
}

/// The closest living regular boid the predator can see, at any distance.
/// Ties go to the boid that comes first in the flock.
pub fn find_prey<'a>(predator: Predator<'_>, flock: &'a Flock, angle: f64) -> Option<&'a Boid> {
    flock
        .iter()
        .filter(|b| !b.is_predator() && !b.is_eaten() && is_seen(&predator, b, angle))
        .min_by(|a, b| distance(&predator, a).total_cmp(&distance(&predator, b)))
}

/// Among the living regular boids in sight and within `range`, the one
/// whose nearest fellow (by bearing from the predator) is farthest away.
/// Ties go to the boid that comes first in the flock.
pub fn find_isolated_prey<'a>(
    predator: Predator<'_>,
    flock: &'a Flock,
    angle: f64,
    range: f64,
) -> Option<&'a Boid> {
    let mut candidates = Vec::new();
    neighbours(&predator, flock, &mut candidates, angle, range);

    let mut best: Option<(&'a Boid, f64)> = None;
    for &candidate in &candidates {
        let isolation = min_angular_distance(&predator, candidate, &candidates);
        match best {
            Some((_, top)) if isolation <= top => {}
            _ => best = Some((candidate, isolation)),
        }
    }
    best.map(|(boid, _)| boid)
}

/// Bearing of `boid` as seen from `predator`, folded into (-pi/2, pi/2].
fn bearing(predator: &Boid, boid: &Boid) -> f64 {
    let offset = boid.position() - predator.position();
    math::atan(offset.y / offset.x)
}

/// Smallest bearing difference between `boid` and any other candidate at a
/// distinct position; infinite when there is none.
fn min_angular_distance(predator: &Boid, boid: &Boid, candidates: &[&Boid]) -> f64 {
    let own = bearing(predator, boid);
    candidates
        .iter()
        .filter(|other| other.position() != boid.position())
        .map(|other| math::abs(bearing(predator, other) - own))
        .fold(f64::INFINITY, f64::min)
}
