//! Rule engine for a 2D flock of boids hunted by predators.
//!
//! A [`Flock`] advances in discrete steps. Every boid is solved against the
//! same snapshot of the flock (separation, alignment and cohesion for
//! regular boids, separation and seeking for predators), the new state
//! replaces the old one, and predators then eat whatever they can reach.
//!
//! The crate builds without `std`; initial-condition generation
//! ([`spawn`]) needs it.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod math;

pub mod behavior;
pub mod boid;
pub mod containment;
pub mod flock;
pub mod params;
pub mod perception;
pub mod predation;
#[cfg(feature = "std")]
pub mod spawn;
pub mod vector;

pub use boid::{Boid, BoidKind, Predator, Regular, Role};
pub use flock::{simulate, Flock};
pub use params::{Bounds, Parameters, SeekStrategy};
pub use vector::{Position, Vector2D, Velocity};

#[cfg(feature = "std")]
pub use spawn::{add_predator_at, add_predators, fill, populate};
