use alloc::vec::Vec;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::behavior;
use crate::boid::{Boid, BoidKind, Predator, Regular};
use crate::containment;
use crate::params::Parameters;
use crate::perception::{distance, is_seen};
use crate::predation;

/// The ordered collection of boids being simulated, plus the running count
/// of captures.
///
/// Order is significant and preserved by every step. Boids are never
/// removed: an eaten boid stays in place, frozen.
#[derive(Debug, Clone, PartialEq)]
pub struct Flock {
    boids: Vec<Boid>,
    eaten: usize,
}

impl Flock {
    pub fn new(boids: Vec<Boid>) -> Self {
        assert!(boids.len() > 1, "a flock needs more than one boid");
        Self { boids, eaten: 0 }
    }

    pub fn boids(&self) -> &[Boid] {
        &self.boids
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Boid> {
        self.boids.iter()
    }

    pub fn len(&self) -> usize {
        self.boids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boids.is_empty()
    }

    /// Number of capture events since the flock was created.
    pub fn eaten(&self) -> usize {
        self.eaten
    }

    pub fn predator_count(&self) -> usize {
        self.boids.iter().filter(|b| b.is_predator()).count()
    }

    /// Regular boids that have not been eaten yet.
    pub fn alive_count(&self) -> usize {
        self.boids
            .iter()
            .filter(|b| !b.is_predator() && !b.is_eaten())
            .count()
    }

    pub fn add_boid(&mut self, boid: Boid) {
        assert!(!self.is_empty(), "cannot grow an empty flock");
        self.boids.push(boid);
    }

    pub(crate) fn boids_mut(&mut self) -> &mut [Boid] {
        &mut self.boids
    }

    pub(crate) fn record_captures(&mut self, count: usize) {
        self.eaten += count;
    }

    /// Next state of a single boid, computed against this (unmodified)
    /// flock.
    pub fn solve(&self, boid: &Boid, params: &Parameters) -> Boid {
        if boid.is_eaten() {
            return *boid;
        }

        let delta = match boid.kind() {
            BoidKind::Predator(predator) => {
                behavior::separation(boid, self, params) + behavior::seek(predator, self, params)
            }
            BoidKind::Regular(regular) => {
                behavior::separation(boid, self, params)
                    + behavior::alignment(regular, self, params)
                    + behavior::cohesion(boid, self, params)
            }
        };

        let dt = params.dt();
        assert!(dt > 0.0, "time step must be positive");

        // Position moves with the velocity the boid had at the start of the
        // step.
        let position = boid.position().advanced(boid.velocity(), dt);
        let mut next = Boid::with_role(position, boid.velocity() + delta, boid.role());

        containment::bound_position(&mut next, &params.bounds);
        next.set_velocity(containment::normalize(
            next.velocity(),
            params.min_speed,
            params.max_speed,
        ));
        next
    }

    /// Advances the whole flock by one time step.
    ///
    /// Every boid is solved against the same snapshot, the snapshot is then
    /// replaced wholesale, and only afterwards do predators eat whatever is
    /// within reach in the new state.
    pub fn evolve(&mut self, params: &Parameters) {
        assert!(self.len() > 1, "a flock needs more than one boid");

        #[cfg(feature = "parallel")]
        let next: Vec<Boid> = self
            .boids
            .par_iter()
            .map(|boid| self.solve(boid, params))
            .collect();
        #[cfg(not(feature = "parallel"))]
        let next: Vec<Boid> = self
            .boids
            .iter()
            .map(|boid| self.solve(boid, params))
            .collect();

        assert_eq!(self.boids.len(), next.len(), "evolve changed the flock size");
        assert!(
            self.boids
                .iter()
                .zip(next.iter())
                .all(|(before, after)| before.role() == after.role()),
            "evolve changed a boid's role or the flock order"
        );

        self.boids = next;

        for index in 0..self.boids.len() {
            let boid = self.boids[index];
            predation::set_victims(&boid, self, params);
        }

        log::trace!(
            "evolved {} boids, {} alive, {} eaten",
            self.boids.len(),
            self.alive_count(),
            self.eaten
        );
    }
}

impl<'a> IntoIterator for &'a Flock {
    type Item = &'a Boid;
    type IntoIter = core::slice::Iter<'a, Boid>;

    fn into_iter(self) -> Self::IntoIter {
        self.boids.iter()
    }
}

/// Runs `params.steps` evolutions back to back.
pub fn simulate(flock: &mut Flock, params: &Parameters) {
    for _ in 0..params.steps {
        flock.evolve(params);
    }
}

/// Collects the living regular boids that `boid` sees within `range`.
///
/// A regular `boid` finds itself (distance zero, always visible). The rules
/// rely on this: the self term contributes nothing to their sums and they
/// divide by `count - 1`.
pub fn neighbours<'a>(
    boid: &Boid,
    flock: &'a Flock,
    nbrs: &mut Vec<&'a Boid>,
    angle: f64,
    range: f64,
) {
    assert!(nbrs.is_empty(), "neighbour accumulator must start empty");
    assert!(flock.len() > 1, "a flock needs more than one boid");
    nbrs.extend(flock.iter().filter(|other| {
        !other.is_predator()
            && !other.is_eaten()
            && is_seen(boid, other, angle)
            && distance(boid, other) < range
    }));
}

/// Collects the predators a regular boid sees within `range`.
pub fn predators<'a>(
    boid: Regular<'_>,
    flock: &'a Flock,
    preds: &mut Vec<&'a Boid>,
    angle: f64,
    range: f64,
) {
    assert!(preds.is_empty(), "predator accumulator must start empty");
    assert!(flock.len() > 1, "a flock needs more than one boid");
    preds.extend(flock.iter().filter(|other| {
        other.is_predator() && is_seen(&boid, other, angle) && distance(&boid, other) < range
    }));
}

/// Collects the predators a predator sees within `range`, itself included.
pub fn competitors<'a>(
    boid: Predator<'_>,
    flock: &'a Flock,
    comps: &mut Vec<&'a Boid>,
    angle: f64,
    range: f64,
) {
    assert!(comps.is_empty(), "competitor accumulator must start empty");
    assert!(flock.len() > 1, "a flock needs more than one boid");
    comps.extend(flock.iter().filter(|other| {
        other.is_predator() && is_seen(&boid, other, angle) && distance(&boid, other) < range
    }));
}
