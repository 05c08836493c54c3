//! Random initial conditions.

use core::f64::consts::SQRT_2;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::boid::Boid;
use crate::containment::normalize;
use crate::flock::Flock;
use crate::params::Parameters;
use crate::vector::{Position, Velocity};

fn random_position<R: Rng + ?Sized>(params: &Parameters, rng: &mut R) -> Position {
    let b = &params.bounds;
    Position::new(
        rng.gen_range(b.x_min..=b.x_max),
        rng.gen_range(b.y_min..=b.y_max),
    )
}

fn random_velocity<R: Rng + ?Sized>(params: &Parameters, rng: &mut R) -> Velocity {
    let limit = params.max_speed / SQRT_2;
    let v = Velocity::new(rng.gen_range(-limit..=limit), rng.gen_range(-limit..=limit));
    normalize(v, params.min_speed, params.max_speed)
}

/// A flock of `count` regular boids spread uniformly over the world.
pub fn fill<R: Rng + ?Sized>(count: usize, params: &Parameters, rng: &mut R) -> Flock {
    assert!(count > 1, "a flock needs more than one boid");
    let boids = (0..count)
        .map(|_| Boid::regular(random_position(params, rng), random_velocity(params, rng)))
        .collect();
    Flock::new(boids)
}

/// Appends `count` predators at random positions.
pub fn add_predators<R: Rng + ?Sized>(
    flock: &mut Flock,
    count: usize,
    params: &Parameters,
    rng: &mut R,
) {
    for _ in 0..count {
        let position = random_position(params, rng);
        add_predator_at(flock, position, params, rng);
    }
}

/// Appends one predator at `position`, heading in a random direction.
pub fn add_predator_at<R: Rng + ?Sized>(
    flock: &mut Flock,
    position: Position,
    params: &Parameters,
    rng: &mut R,
) {
    assert!(
        params.bounds.contains(position.x(), position.y()),
        "predator placed outside the world"
    );
    flock.add_boid(Boid::predator(position, random_velocity(params, rng)));
}

/// Builds a full starting flock from a seed: `boids` regular boids followed
/// by `predators` predators. The same seed always gives the same flock.
pub fn populate(boids: usize, predators: usize, params: &Parameters, seed: u64) -> Flock {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut flock = fill(boids, params, &mut rng);
    add_predators(&mut flock, predators, params, &mut rng);
    log::debug!(
        "populated flock of {} boids and {} predators from seed {}",
        boids,
        predators,
        seed
    );
    flock
}
