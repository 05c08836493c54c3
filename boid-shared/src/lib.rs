#![cfg_attr(not(feature = "std"), no_std)]

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// How predators choose their prey
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SeekType {
    #[default]
    Nearest,
    Isolated,
    CenterOfMass,
}

impl SeekType {
    pub const ALL: [SeekType; 3] = [
        SeekType::Nearest,
        SeekType::Isolated,
        SeekType::CenterOfMass,
    ];

    /// Numeric code used on the command line and in count files
    pub fn index(self) -> u8 {
        match self {
            SeekType::Nearest => 0,
            SeekType::Isolated => 1,
            SeekType::CenterOfMass => 2,
        }
    }

    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            SeekType::Nearest => "nearest",
            SeekType::Isolated => "isolated",
            SeekType::CenterOfMass => "center-of-mass",
        }
    }
}

impl fmt::Display for SeekType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string names no seek type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSeekTypeError;

impl fmt::Display for ParseSeekTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("expected one of nearest, isolated, center-of-mass (or 0, 1, 2)")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseSeekTypeError {}

impl FromStr for SeekType {
    type Err = ParseSeekTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(seek) = Self::ALL.iter().find(|seek| seek.name() == s) {
            return Ok(*seek);
        }
        s.parse::<u8>()
            .ok()
            .and_then(Self::from_index)
            .ok_or(ParseSeekTypeError)
    }
}

/// Size of the simulated world, anchored at the origin
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WorldSize {
    pub width: f64,
    pub height: f64,
}

impl Default for WorldSize {
    fn default() -> Self {
        Self {
            width: 100.0,
            height: 100.0,
        }
    }
}

/// Simulation configuration as read from a settings file.
///
/// Nothing here is validated; every missing field takes its default.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimulationSettings {
    /// Degrees
    pub angle_of_view: f64,
    pub neighbour_distance: f64,
    pub separation_distance: f64,
    pub separation_factor: f64,
    pub cohesion_factor: f64,
    pub alignment_factor: f64,
    pub max_speed: f64,
    /// Minimum speed as a fraction of `max_speed`
    pub min_speed_fraction: f64,
    pub duration: f64,
    pub steps: u32,
    /// Statistics are recorded every `prescale` steps
    pub prescale: u32,
    pub boids: usize,
    pub predators: usize,
    pub seek_type: SeekType,
    pub world: WorldSize,
    pub seed: Option<u64>,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            angle_of_view: 300.0,
            neighbour_distance: 35.0,
            separation_distance: 3.5,
            separation_factor: 0.7,
            cohesion_factor: 0.045,
            alignment_factor: 0.8,
            max_speed: 80.0,
            min_speed_fraction: 0.05,
            duration: 200.0,
            steps: 2000,
            prescale: 40,
            boids: 120,
            predators: 1,
            seek_type: SeekType::Nearest,
            world: WorldSize::default(),
            seed: None,
        }
    }
}

#[cfg(feature = "std")]
impl SimulationSettings {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Mean and sample standard deviation of a set of values
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Summary {
    pub mean: f64,
    pub std_dev: f64,
}

impl Summary {
    pub fn new(mean: f64, std_dev: f64) -> Self {
        Self { mean, std_dev }
    }
}

/// Flock statistics recorded at one step
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct StepStats {
    pub step: u32,
    pub distance: Summary,
    pub speed: Summary,
}

/// Outcome of one simulation in a batch
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RunRecord {
    pub run: u32,
    pub seek_type: SeekType,
    pub seed: u64,
    pub eaten: usize,
}
