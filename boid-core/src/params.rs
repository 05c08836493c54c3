/// How a predator picks the prey it steers towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SeekStrategy {
    /// The closest living regular boid in sight.
    #[default]
    Nearest,
    /// The regular boid in sight and in range that is angularly farthest
    /// from its fellows, as seen from the predator.
    Isolated,
    /// The centre of mass of the regular boids in sight and in range.
    CenterOfMass,
}

/// Axis-aligned world rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Bounds {
    pub const fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x_min && x <= self.x_max && y >= self.y_min && y <= self.y_max
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(0.0, 100.0, 0.0, 100.0)
    }
}

/// Simulation parameters.
///
/// The engine consumes these read-only and assumes they were validated by
/// whoever built them (see `boid-cli`'s config module).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    /// Field of view in degrees, in (0, 360).
    pub angle_of_view: f64,
    pub neighbour_distance: f64,
    /// Must stay below half of `neighbour_distance`.
    pub separation_distance: f64,
    pub separation_factor: f64,
    pub cohesion_factor: f64,
    pub alignment_factor: f64,
    pub max_speed: f64,
    pub min_speed: f64,
    /// Simulated time covered by `steps` evolutions.
    pub duration: f64,
    pub steps: u32,
    pub bounds: Bounds,
    pub seek: SeekStrategy,
}

impl Parameters {
    /// Time step of a single evolution.
    pub fn dt(&self) -> f64 {
        self.duration / f64::from(self.steps)
    }

    /// Range at which regular boids flee predators.
    pub fn predator_separation_distance(&self) -> f64 {
        7.0 * self.separation_distance
    }

    /// Strength with which regular boids flee predators.
    pub fn predator_separation_factor(&self) -> f64 {
        10.5 * self.separation_factor
    }

    /// A predator eats a visible regular boid closer than this.
    pub fn capture_radius(&self) -> f64 {
        self.predator_separation_distance() / 24.5
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            angle_of_view: 300.0,
            neighbour_distance: 35.0,
            separation_distance: 3.5,
            separation_factor: 0.7,
            cohesion_factor: 0.045,
            alignment_factor: 0.8,
            max_speed: 80.0,
            min_speed: 4.0,
            duration: 200.0,
            steps: 2000,
            bounds: Bounds::default(),
            seek: SeekStrategy::Nearest,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_constants() {
        let params = Parameters {
            separation_distance: 2.0,
            separation_factor: 1.0,
            duration: 30.0,
            steps: 3000,
            ..Parameters::default()
        };

        assert_eq!(params.predator_separation_distance(), 14.0);
        assert_eq!(params.predator_separation_factor(), 10.5);
        assert!((params.capture_radius() - 14.0 / 24.5).abs() < 1e-12);
        assert!((params.dt() - 0.01).abs() < 1e-12);
    }

    #[test]
    fn test_default_parameters_are_consistent() {
        let params = Parameters::default();
        assert!(params.separation_distance < params.neighbour_distance / 2.0);
        assert!(params.min_speed > 0.0 && params.min_speed < params.max_speed);
        assert_eq!(params.capture_radius(), 1.0);
        assert_eq!(params.seek, SeekStrategy::Nearest);
    }

    #[test]
    fn test_bounds() {
        let bounds = Bounds::new(-10.0, 30.0, 0.0, 50.0);
        assert_eq!(bounds.width(), 40.0);
        assert_eq!(bounds.height(), 50.0);
        assert!(bounds.contains(-10.0, 50.0));
        assert!(!bounds.contains(30.5, 10.0));
    }
}
