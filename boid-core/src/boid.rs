use core::ops::Deref;

use crate::vector::{Position, Velocity};

/// What a boid is. Fixed when the boid is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Regular,
    Predator,
}

/// A single boid entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Boid {
    position: Position,
    velocity: Velocity,
    role: Role,
    eaten: bool,
}

impl Boid {
    pub fn regular(position: Position, velocity: Velocity) -> Self {
        Self::with_role(position, velocity, Role::Regular)
    }

    pub fn predator(position: Position, velocity: Velocity) -> Self {
        Self::with_role(position, velocity, Role::Predator)
    }

    pub fn with_role(position: Position, velocity: Velocity, role: Role) -> Self {
        Self {
            position,
            velocity,
            role,
            eaten: false,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn is_predator(&self) -> bool {
        self.role == Role::Predator
    }

    pub fn is_eaten(&self) -> bool {
        self.eaten
    }

    pub fn speed(&self) -> f64 {
        self.velocity.norm()
    }

    /// Splits the boid by role so role-specific rules can demand the right
    /// kind at compile time.
    pub fn kind(&self) -> BoidKind<'_> {
        match self.role {
            Role::Regular => BoidKind::Regular(Regular(self)),
            Role::Predator => BoidKind::Predator(Predator(self)),
        }
    }

    pub fn as_regular(&self) -> Option<Regular<'_>> {
        match self.kind() {
            BoidKind::Regular(regular) => Some(regular),
            BoidKind::Predator(_) => None,
        }
    }

    pub fn as_predator(&self) -> Option<Predator<'_>> {
        match self.kind() {
            BoidKind::Predator(predator) => Some(predator),
            BoidKind::Regular(_) => None,
        }
    }

    pub(crate) fn set_velocity(&mut self, velocity: Velocity) {
        self.velocity = velocity;
    }

    /// Eaten is terminal: there is no way back to `false`.
    pub(crate) fn mark_eaten(&mut self) {
        self.eaten = true;
    }
}

/// Role-tagged view of a [`Boid`].
#[derive(Debug, Clone, Copy)]
pub enum BoidKind<'a> {
    Regular(Regular<'a>),
    Predator(Predator<'a>),
}

/// A boid known to be a regular (prey) boid.
#[derive(Debug, Clone, Copy)]
pub struct Regular<'a>(&'a Boid);

/// A boid known to be a predator.
#[derive(Debug, Clone, Copy)]
pub struct Predator<'a>(&'a Boid);

impl<'a> Regular<'a> {
    pub fn boid(&self) -> &'a Boid {
        self.0
    }
}

impl<'a> Predator<'a> {
    pub fn boid(&self) -> &'a Boid {
        self.0
    }
}

impl Deref for Regular<'_> {
    type Target = Boid;

    fn deref(&self) -> &Boid {
        self.0
    }
}

impl Deref for Predator<'_> {
    type Target = Boid;

    fn deref(&self) -> &Boid {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boid_creation() {
        let boid = Boid::regular(Position::new(10.0, 20.0), Velocity::new(1.0, 1.0));

        assert_eq!(boid.position(), Position::new(10.0, 20.0));
        assert_eq!(boid.velocity(), Velocity::new(1.0, 1.0));
        assert!(!boid.is_predator());
        assert!(!boid.is_eaten());
    }

    #[test]
    fn test_role_views() {
        let regular = Boid::regular(Position::zero(), Velocity::new(1.0, 0.0));
        let predator = Boid::predator(Position::zero(), Velocity::new(1.0, 0.0));

        assert!(regular.as_regular().is_some());
        assert!(regular.as_predator().is_none());
        assert!(predator.as_predator().is_some());
        assert!(predator.as_regular().is_none());
        assert!(matches!(predator.kind(), BoidKind::Predator(_)));
        assert_eq!(predator.as_predator().map(|p| p.speed()), Some(1.0));
    }

    #[test]
    fn test_mark_eaten_is_sticky() {
        let mut boid = Boid::regular(Position::zero(), Velocity::new(1.0, 0.0));
        boid.mark_eaten();
        boid.mark_eaten();
        assert!(boid.is_eaten());
        assert_eq!(boid.role(), Role::Regular);
    }
}
