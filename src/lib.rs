//! # Quintic Drive
//! This crate turns a sparse list of kinematic waypoints into a dense, time-parameterized
//! trajectory for a differential-drive robot, and splits that center trajectory into
//! left and right wheel trajectories for a given track width.
//! ## Features
//! - Closed-form quintic fitting of each segment, independently per axis
//! - Duration search per segment against an acceleration bound
//! - Stitching of all segments into one time-monotonic trajectory buffer
//! - Curvature-based derivation of offset wheel paths and wheel velocities
//! - YAML configuration and CSV export for the command line tool
//! ## Example
//! ```
//! use quintic_drive::{derive_wheel_paths, plan, Waypoint};
//! let waypoints = vec![
//!     Waypoint::new(0.0, 0.0, 0.0, 0.0, 0.0),
//!     Waypoint::new(10.0, 0.0, 0.0, 5.0, 0.0),
//! ];
//! let trajectory = plan(&waypoints).unwrap();
//! let wheels = derive_wheel_paths(&trajectory, 2.0);
//! assert_eq!(wheels.left.len(), trajectory.len());
//! ```
pub mod config;
pub mod drive;
pub mod export;
pub mod path;
pub mod planners;
pub mod trajectory;
pub mod waypoint;

pub use drive::{derive_wheel_paths, WheelPaths};
pub use path::Path;
pub use planners::{plan, QuinticPathPlanner, QuinticPolynomial, SegmentPlan};
pub use trajectory::{TrajectoryBuffer, TrajectorySample};
pub use waypoint::Waypoint;

#[derive(thiserror::Error, Debug)]
/// Represents errors that can occur while planning or exporting a path
/// # Example
/// ```
/// use quintic_drive::PlanningError;
/// let error = PlanningError::NalgebraError("Matrix is singular".to_string());
/// ```
pub enum PlanningError {
    /// Error related to linear algebra operations
    #[error("Nalgebra error: {0}")]
    NalgebraError(String),
    /// A plan needs at least a start and an end waypoint
    #[error("At least two waypoints are required, got {0}")]
    InsufficientWaypoints(usize),
    /// Invalid configuration values
    #[error("Config error: {0}")]
    ConfigError(String),
    /// Error reading or writing files
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    /// Error parsing YAML configuration
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),
    /// Error writing CSV output
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    /// Other general errors
    #[error("Other error: {0}")]
    OtherError(String),
}

/// Round a value to a fixed number of decimal places
/// # Arguments
/// * `value` - The value to round
/// * `decimals` - The number of decimal places to keep
/// # Returns
/// * The rounded value
/// # Example
/// ```
/// use quintic_drive::round_to;
/// assert_eq!(round_to(0.1 + 0.2, 3), 0.3);
/// ```
#[inline]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}
