use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::math;

/// A 2D vector, the algebra shared by [`Position`] and [`Velocity`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

impl Vector2D {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    pub fn norm(&self) -> f64 {
        math::sqrt(self.x * self.x + self.y * self.y)
    }

    pub fn dot(&self, other: &Vector2D) -> f64 {
        self.x * other.x + self.y * other.y
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

impl Add for Vector2D {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Vector2D {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Neg for Vector2D {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl Mul<f64> for Vector2D {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        assert!(scalar != 0.0, "vector multiplied by zero");
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

impl Div<f64> for Vector2D {
    type Output = Self;

    fn div(self, scalar: f64) -> Self {
        assert!(scalar != 0.0, "vector divided by zero");
        Self {
            x: self.x / scalar,
            y: self.y / scalar,
        }
    }
}

impl AddAssign for Vector2D {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl SubAssign for Vector2D {
    fn sub_assign(&mut self, other: Self) {
        self.x -= other.x;
        self.y -= other.y;
    }
}

impl MulAssign<f64> for Vector2D {
    fn mul_assign(&mut self, scalar: f64) {
        *self = *self * scalar;
    }
}

impl DivAssign<f64> for Vector2D {
    fn div_assign(&mut self, scalar: f64) {
        *self = *self / scalar;
    }
}

/// Lifts the vector algebra onto a newtype without making it
/// interchangeable with other newtypes over the same vector.
macro_rules! vector_newtype {
    ($name:ident) => {
        impl $name {
            pub const fn new(x: f64, y: f64) -> Self {
                Self(Vector2D::new(x, y))
            }

            pub const fn zero() -> Self {
                Self(Vector2D::zero())
            }

            pub fn x(&self) -> f64 {
                self.0.x
            }

            pub fn y(&self) -> f64 {
                self.0.y
            }

            pub fn as_vector(&self) -> Vector2D {
                self.0
            }

            pub fn norm(&self) -> f64 {
                self.0.norm()
            }
        }

        impl Add for $name {
            type Output = Self;

            fn add(self, other: Self) -> Self {
                Self(self.0 + other.0)
            }
        }

        impl AddAssign for $name {
            fn add_assign(&mut self, other: Self) {
                self.0 += other.0;
            }
        }

        impl Mul<f64> for $name {
            type Output = Self;

            fn mul(self, scalar: f64) -> Self {
                Self(self.0 * scalar)
            }
        }

        impl Div<f64> for $name {
            type Output = Self;

            fn div(self, scalar: f64) -> Self {
                Self(self.0 / scalar)
            }
        }

        impl MulAssign<f64> for $name {
            fn mul_assign(&mut self, scalar: f64) {
                self.0 *= scalar;
            }
        }
    };
}

/// A point in the world.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position(Vector2D);

/// A velocity, or a change of velocity produced by a steering rule.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Velocity(Vector2D);

vector_newtype!(Position);
vector_newtype!(Velocity);

impl Position {
    /// Explicit Euler step: where this point is after moving at `velocity`
    /// for `dt`.
    pub fn advanced(self, velocity: Velocity, dt: f64) -> Position {
        Position::new(self.0.x + velocity.0.x * dt, self.0.y + velocity.0.y * dt)
    }
}

/// The difference of two positions is a plain displacement, not a position.
impl Sub for Position {
    type Output = Vector2D;

    fn sub(self, other: Self) -> Vector2D {
        self.0 - other.0
    }
}

impl Velocity {
    /// Reinterprets a displacement as a velocity delta.
    pub fn from_displacement(displacement: Vector2D) -> Self {
        Self(displacement)
    }
}

impl Sub for Velocity {
    type Output = Velocity;

    fn sub(self, other: Self) -> Velocity {
        Velocity(self.0 - other.0)
    }
}
