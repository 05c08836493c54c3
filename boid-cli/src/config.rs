//! Loading settings, applying command-line overrides and validating the
//! result into a runnable plan.

use std::fs;
use std::path::{Path, PathBuf};

use boid_core::{Bounds, Parameters, SeekStrategy};
use boid_shared::{SeekType, SimulationSettings};
use clap::Args;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} = {value} must lie in ({low}, {high})")]
    OutOfRange {
        field: &'static str,
        value: f64,
        low: f64,
        high: f64,
    },

    #[error("{field} = {value} must be greater than {min}")]
    TooSmall {
        field: &'static str,
        value: f64,
        min: f64,
    },

    #[error("cannot read settings file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Command-line overrides, one per settings field. Unset flags keep the
/// value from the settings file (or the default).
#[derive(Args, Debug, Clone, Default)]
pub struct Overrides {
    /// Angle of view, in degrees
    #[arg(short = 'A', long = "angle")]
    pub angle_of_view: Option<f64>,

    /// Neighbour distance
    #[arg(short = 'D', long = "distance")]
    pub neighbour_distance: Option<f64>,

    /// Separation distance
    #[arg(short = 'd', long = "separation-distance")]
    pub separation_distance: Option<f64>,

    /// Separation factor
    #[arg(short = 's', long = "separation-factor")]
    pub separation_factor: Option<f64>,

    /// Cohesion factor
    #[arg(short = 'c', long = "cohesion-factor")]
    pub cohesion_factor: Option<f64>,

    /// Alignment factor
    #[arg(short = 'a', long = "alignment-factor")]
    pub alignment_factor: Option<f64>,

    /// Maximum speed
    #[arg(short = 'V', long = "max-speed")]
    pub max_speed: Option<f64>,

    /// Minimum speed, as a fraction of the maximum speed
    #[arg(short = 'v', long = "min-speed-fraction")]
    pub min_speed_fraction: Option<f64>,

    /// Simulated duration
    #[arg(short = 't', long = "duration")]
    pub duration: Option<f64>,

    /// Number of evolution steps
    #[arg(short = 'S', long = "steps")]
    pub steps: Option<u32>,

    /// Record statistics every this many steps
    #[arg(short = 'p', long = "prescale")]
    pub prescale: Option<u32>,

    /// Number of regular boids
    #[arg(short = 'b', long = "boids")]
    pub boids: Option<usize>,

    /// Number of predators
    #[arg(short = 'P', long = "predators")]
    pub predators: Option<usize>,

    /// Prey selection: nearest, isolated, center-of-mass (or 0, 1, 2)
    #[arg(long = "seek-type")]
    pub seek_type: Option<SeekType>,

    /// Seed for the initial flock
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Overrides {
    pub fn apply(&self, settings: &mut SimulationSettings) {
        fn set<T: Copy>(target: &mut T, value: Option<T>) {
            if let Some(value) = value {
                *target = value;
            }
        }

        set(&mut settings.angle_of_view, self.angle_of_view);
        set(&mut settings.neighbour_distance, self.neighbour_distance);
        set(&mut settings.separation_distance, self.separation_distance);
        set(&mut settings.separation_factor, self.separation_factor);
        set(&mut settings.cohesion_factor, self.cohesion_factor);
        set(&mut settings.alignment_factor, self.alignment_factor);
        set(&mut settings.max_speed, self.max_speed);
        set(&mut settings.min_speed_fraction, self.min_speed_fraction);
        set(&mut settings.duration, self.duration);
        set(&mut settings.steps, self.steps);
        set(&mut settings.prescale, self.prescale);
        set(&mut settings.boids, self.boids);
        set(&mut settings.predators, self.predators);
        set(&mut settings.seek_type, self.seek_type);
        if self.seed.is_some() {
            settings.seed = self.seed;
        }
    }
}

/// Reads settings from a JSON file, or starts from the defaults when no
/// file is given.
pub fn load_settings(path: Option<&Path>) -> Result<SimulationSettings, ConfigError> {
    let Some(path) = path else {
        return Ok(SimulationSettings::default());
    };
    let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    SimulationSettings::from_json(&json).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Everything a run needs, validated.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationPlan {
    pub parameters: Parameters,
    pub boids: usize,
    pub predators: usize,
    pub prescale: u32,
    pub seed: u64,
}

impl SimulationPlan {
    /// Validates `settings`. A missing seed is drawn at random and logged so
    /// the run can be replayed.
    pub fn from_settings(settings: &SimulationSettings) -> Result<Self, ConfigError> {
        let parameters = validate(settings)?;
        let seed = settings.seed.unwrap_or_else(|| {
            let seed = rand::random();
            log::info!("No seed given, using {}", seed);
            seed
        });
        Ok(Self {
            parameters,
            boids: settings.boids,
            predators: settings.predators,
            prescale: settings.prescale,
            seed,
        })
    }

    pub fn seek_type(&self) -> SeekType {
        seek_type_of(self.parameters.seek)
    }
}

pub fn seek_strategy(seek: SeekType) -> SeekStrategy {
    match seek {
        SeekType::Nearest => SeekStrategy::Nearest,
        SeekType::Isolated => SeekStrategy::Isolated,
        SeekType::CenterOfMass => SeekStrategy::CenterOfMass,
    }
}

pub fn seek_type_of(seek: SeekStrategy) -> SeekType {
    match seek {
        SeekStrategy::Nearest => SeekType::Nearest,
        SeekStrategy::Isolated => SeekType::Isolated,
        SeekStrategy::CenterOfMass => SeekType::CenterOfMass,
    }
}

fn check_open(field: &'static str, value: f64, low: f64, high: f64) -> Result<(), ConfigError> {
    // written so that NaN fails
    if value > low && value < high {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            value,
            low,
            high,
        })
    }
}

fn check_above(field: &'static str, value: f64, min: f64) -> Result<(), ConfigError> {
    if value > min {
        Ok(())
    } else {
        Err(ConfigError::TooSmall { field, value, min })
    }
}

/// Checks every knob against its admissible range and builds the engine
/// parameters.
pub fn validate(settings: &SimulationSettings) -> Result<Parameters, ConfigError> {
    let s = settings;
    check_above("world.width", s.world.width, 0.0)?;
    check_above("world.height", s.world.height, 0.0)?;
    check_open("angle_of_view", s.angle_of_view, 0.0, 360.0)?;
    check_open(
        "neighbour_distance",
        s.neighbour_distance,
        0.0,
        s.world.width.min(s.world.height),
    )?;
    check_open(
        "separation_distance",
        s.separation_distance,
        0.0,
        s.neighbour_distance / 2.0,
    )?;
    check_open("separation_factor", s.separation_factor, 0.0, 5.0)?;
    check_open("cohesion_factor", s.cohesion_factor, 0.0, 5.0)?;
    check_open("alignment_factor", s.alignment_factor, 0.0, 5.0)?;
    check_above("max_speed", s.max_speed, 0.0)?;
    // 1.05 * min must stay below 0.95 * max
    check_open("min_speed_fraction", s.min_speed_fraction, 0.0, 0.9)?;
    check_above("duration", s.duration, 0.0)?;
    check_above("steps", f64::from(s.steps), 1.0)?;
    check_open("prescale", f64::from(s.prescale), 0.0, f64::from(s.steps))?;
    check_above("boids", s.boids as f64, 1.0)?;
    check_above("predators", s.predators as f64, 0.0)?;

    Ok(Parameters {
        angle_of_view: s.angle_of_view,
        neighbour_distance: s.neighbour_distance,
        separation_distance: s.separation_distance,
        separation_factor: s.separation_factor,
        cohesion_factor: s.cohesion_factor,
        alignment_factor: s.alignment_factor,
        max_speed: s.max_speed,
        min_speed: s.min_speed_fraction * s.max_speed,
        duration: s.duration,
        steps: s.steps,
        bounds: Bounds::new(0.0, s.world.width, 0.0, s.world.height),
        seek: seek_strategy(s.seek_type),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_of(err: ConfigError) -> &'static str {
        match err {
            ConfigError::OutOfRange { field, .. } | ConfigError::TooSmall { field, .. } => field,
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_defaults_are_valid() {
        let params = validate(&SimulationSettings::default()).unwrap();
        assert_eq!(params.angle_of_view, 300.0);
        assert!((params.min_speed - 4.0).abs() < 1e-12);
        assert_eq!(params.bounds, Bounds::new(0.0, 100.0, 0.0, 100.0));
        assert_eq!(params.seek, SeekStrategy::Nearest);
    }

    #[test]
    fn test_out_of_range_fields() {
        let base = SimulationSettings::default();
        let cases: Vec<(SimulationSettings, &str)> = vec![
            (SimulationSettings { angle_of_view: 360.0, ..base.clone() }, "angle_of_view"),
            (SimulationSettings { angle_of_view: f64::NAN, ..base.clone() }, "angle_of_view"),
            (SimulationSettings { neighbour_distance: 100.0, ..base.clone() }, "neighbour_distance"),
            (SimulationSettings { separation_distance: 17.5, ..base.clone() }, "separation_distance"),
            (SimulationSettings { separation_factor: 0.0, ..base.clone() }, "separation_factor"),
            (SimulationSettings { cohesion_factor: 5.0, ..base.clone() }, "cohesion_factor"),
            (SimulationSettings { alignment_factor: -1.0, ..base.clone() }, "alignment_factor"),
            (SimulationSettings { max_speed: 0.0, ..base.clone() }, "max_speed"),
            (SimulationSettings { min_speed_fraction: 0.95, ..base.clone() }, "min_speed_fraction"),
            (SimulationSettings { duration: 0.0, ..base.clone() }, "duration"),
            (SimulationSettings { steps: 1, prescale: 1, ..base.clone() }, "steps"),
            (SimulationSettings { prescale: 2000, ..base.clone() }, "prescale"),
            (SimulationSettings { prescale: 0, ..base.clone() }, "prescale"),
            (SimulationSettings { boids: 1, ..base.clone() }, "boids"),
            (SimulationSettings { predators: 0, ..base.clone() }, "predators"),
        ];
        for (settings, field) in cases {
            assert_eq!(field_of(validate(&settings).unwrap_err()), field);
        }
    }

    #[test]
    fn test_neighbour_distance_bounded_by_smaller_side() {
        let mut settings = SimulationSettings::default();
        settings.world.height = 30.0;
        assert_eq!(field_of(validate(&settings).unwrap_err()), "neighbour_distance");

        settings.neighbour_distance = 29.0;
        let params = validate(&settings).unwrap();
        assert_eq!(params.bounds.y_max, 30.0);
    }

    #[test]
    fn test_overrides_replace_only_given_fields() {
        let mut settings = SimulationSettings::default();
        let overrides = Overrides {
            boids: Some(15),
            seek_type: Some(SeekType::Isolated),
            seed: Some(5),
            ..Overrides::default()
        };
        overrides.apply(&mut settings);

        assert_eq!(settings.boids, 15);
        assert_eq!(settings.seek_type, SeekType::Isolated);
        assert_eq!(settings.seed, Some(5));
        assert_eq!(settings.predators, 1);
        assert_eq!(settings.angle_of_view, 300.0);
    }

    #[test]
    fn test_plan_keeps_given_seed() {
        let settings = SimulationSettings {
            seed: Some(1234),
            seek_type: SeekType::CenterOfMass,
            ..SimulationSettings::default()
        };
        let plan = SimulationPlan::from_settings(&settings).unwrap();
        assert_eq!(plan.seed, 1234);
        assert_eq!(plan.boids, 120);
        assert_eq!(plan.prescale, 40);
        assert_eq!(plan.seek_type(), SeekType::CenterOfMass);
    }

    #[test]
    fn test_load_settings_without_file() {
        assert_eq!(load_settings(None).unwrap(), SimulationSettings::default());
    }

    #[test]
    fn test_load_settings_missing_file() {
        let err = load_settings(Some(Path::new("/nonexistent/boids.json"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
