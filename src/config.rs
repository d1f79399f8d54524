//! Configuration module
//!
//! This module contains the configuration for the robot, the planner limits, the input
//! waypoints and the optional CSV outputs.
//! The configuration is loaded from a YAML file using the serde library.

use crate::{PlanningError, Waypoint};

#[derive(Clone, Debug, serde::Deserialize)]
/// Configuration for a planning run
pub struct Config {
    /// Robot configuration
    #[serde(default)]
    pub robot: RobotConfig,
    /// Planner configuration
    #[serde(default)]
    pub planner: PlannerConfig,
    /// Waypoints to plan through, in order
    pub waypoints: Vec<WaypointConfig>,
    /// Output files
    pub output: Option<OutputConfig>,
}

#[derive(Clone, Debug, serde::Deserialize)]
#[serde(default)]
/// Configuration for the robot
pub struct RobotConfig {
    /// Distance between the left and right wheels in feet
    pub track_width: f64,
}

impl Default for RobotConfig {
    fn default() -> Self {
        RobotConfig { track_width: 2.0 }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(default)]
/// Configuration for the segment planner
pub struct PlannerConfig {
    /// Sampling step of the trajectory in seconds
    pub time_step: f64,
    /// First candidate segment duration in seconds
    pub min_duration: f64,
    /// Last candidate segment duration in seconds
    pub max_duration: f64,
    /// Increment between candidate segment durations in seconds
    pub duration_step: f64,
    /// Bound on the sampled acceleration magnitude in feet per second squared
    pub max_acceleration: f64,
    /// Solve segments on the rayon thread pool
    pub use_multithreading: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        PlannerConfig {
            time_step: 0.01,
            min_duration: 0.1,
            max_duration: 10.0,
            duration_step: 0.01,
            max_acceleration: 8.0,
            use_multithreading: false,
        }
    }
}

impl PlannerConfig {
    /// Check that every limit is usable
    /// # Errors
    /// * Returns `PlanningError::ConfigError` naming the first invalid field
    pub fn validate(&self) -> Result<(), PlanningError> {
        let positive = [
            ("time_step", self.time_step),
            ("min_duration", self.min_duration),
            ("max_duration", self.max_duration),
            ("duration_step", self.duration_step),
            ("max_acceleration", self.max_acceleration),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(PlanningError::ConfigError(format!(
                    "planner.{name} must be positive and finite, got {value}"
                )));
            }
        }
        if self.max_duration < self.min_duration {
            return Err(PlanningError::ConfigError(format!(
                "planner.max_duration ({}) is less than planner.min_duration ({})",
                self.max_duration, self.min_duration
            )));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, serde::Deserialize)]
/// Configuration for a single waypoint
pub struct WaypointConfig {
    /// X position in feet
    pub x: f64,
    /// Y position in feet
    pub y: f64,
    /// Heading in degrees
    #[serde(default)]
    pub heading: f64,
    /// Velocity in feet per second
    #[serde(default)]
    pub velocity: f64,
    /// Acceleration in feet per second squared
    #[serde(default)]
    pub acceleration: f64,
}

impl From<WaypointConfig> for Waypoint {
    fn from(config: WaypointConfig) -> Self {
        Waypoint::from_degrees(
            config.x,
            config.y,
            config.heading,
            config.velocity,
            config.acceleration,
        )
    }
}

#[derive(Clone, Debug, Default, serde::Deserialize)]
/// Configuration for the CSV outputs, each one optional
pub struct OutputConfig {
    /// Center trajectory CSV path
    pub center_csv: Option<String>,
    /// Left wheel CSV path
    pub left_csv: Option<String>,
    /// Right wheel CSV path
    pub right_csv: Option<String>,
}
/// Implementation of the Config struct
impl Config {
    /// Load configuration from a YAML file.
    /// # Arguments
    /// * `filename` - The name of the file to load.
    /// # Returns
    /// * The configuration object.
    /// # Errors
    /// * If the file cannot be read, the YAML cannot be parsed, or the values are invalid.
    pub fn from_yaml(filename: &str) -> Result<Self, PlanningError> {
        let contents = std::fs::read_to_string(filename)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }
    /// Check the robot and planner parameters
    pub fn validate(&self) -> Result<(), PlanningError> {
        let track_width = self.robot.track_width;
        if !(track_width.is_finite() && track_width > 0.0) {
            return Err(PlanningError::ConfigError(format!(
                "robot.track_width must be positive and finite, got {track_width}"
            )));
        }
        self.planner.validate()
    }
    /// The configured waypoints as planner inputs
    pub fn waypoints(&self) -> Vec<Waypoint> {
        self.waypoints.iter().copied().map(Waypoint::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_config() {
        let config = Config::from_yaml("tests/testdata/test_config_base.yaml").unwrap();
        assert_eq!(config.robot.track_width, 2.0);
        assert_eq!(config.planner.time_step, 0.01);
        assert_eq!(config.planner.max_acceleration, 8.0);
        assert!(!config.planner.use_multithreading);
        let waypoints = config.waypoints();
        assert_eq!(waypoints.len(), 3);
        assert_eq!(waypoints[1].heading_deg(), 90.0);
        assert_eq!(waypoints[1].velocity, 3.0);
        assert_eq!(waypoints[0].acceleration, 0.0);
        let output = config.output.unwrap();
        assert_eq!(output.center_csv.as_deref(), Some("center.csv"));
        assert!(output.left_csv.is_none());
    }

    #[test]
    fn test_defaults_fill_missing_sections() {
        let config: Config = serde_yaml::from_str("waypoints:\n  - { x: 1.0, y: 2.0 }\n").unwrap();
        assert_eq!(config.planner, PlannerConfig::default());
        assert_eq!(config.robot.track_width, 2.0);
        assert!(config.output.is_none());
        assert_eq!(config.waypoints()[0], Waypoint::new(1.0, 2.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let result = Config::from_yaml("tests/testdata/test_config_invalid.yaml");
        assert!(matches!(result, Err(PlanningError::ConfigError(_))));
        let planner = PlannerConfig {
            min_duration: 5.0,
            max_duration: 1.0,
            ..Default::default()
        };
        assert!(planner.validate().is_err());
    }

    #[test]
    fn test_missing_file() {
        let result = Config::from_yaml("tests/testdata/does_not_exist.yaml");
        assert!(matches!(result, Err(PlanningError::IoError(_))));
    }
}
