//! Differential-drive wheel paths
//!
//! Offsets the center trajectory by half the track width on each side and splits the
//! center velocity into left and right wheel velocities using the angular velocity
//! implied by the radius of curvature.
//!
//! # Example
//! ```
//! use quintic_drive::{derive_wheel_paths, plan, Waypoint};
//! let trajectory = plan(&[
//!     Waypoint::new(0.0, 0.0, 0.0, 0.0, 0.0),
//!     Waypoint::new(10.0, 0.0, 0.0, 5.0, 0.0),
//! ])
//! .unwrap();
//! let wheels = derive_wheel_paths(&trajectory, 2.0);
//! assert!((wheels.left[10].y - 1.0).abs() < 1e-9);
//! assert!((wheels.right[10].y + 1.0).abs() < 1e-9);
//! ```

use crate::{TrajectoryBuffer, Waypoint};
use std::f64::consts::FRAC_PI_2;

/// Left and right wheel trajectories
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WheelPaths {
    /// Left wheel points, velocity is the left wheel velocity
    pub left: Vec<Waypoint>,
    /// Right wheel points, velocity is the right wheel velocity
    pub right: Vec<Waypoint>,
}

/// Derive the wheel trajectories of a differential-drive robot from its center trajectory
///
/// For each sample the left point sits `track_width / 2` along `heading + 90°` and the
/// right point along `heading - 90°`. With `ω = v / radius_of_curvature` (zero for an
/// infinite radius) the left wheel runs at `v - ω·w/2` and the right wheel at
/// `v + ω·w/2`. Wheel points keep the center heading and acceleration.
///
/// A one-sample trajectory yields a single left point equal to the center point and no
/// right point.
/// # Arguments
/// * `trajectory` - The stitched center trajectory
/// * `track_width` - Distance between the wheels in feet
/// # Returns
/// * The left and right wheel trajectories
pub fn derive_wheel_paths(trajectory: &TrajectoryBuffer, track_width: f64) -> WheelPaths {
    if trajectory.len() == 1 {
        return WheelPaths {
            left: trajectory.to_waypoints(),
            right: Vec::new(),
        };
    }
    let half_width = track_width / 2.0;
    let mut wheels = WheelPaths {
        left: Vec::with_capacity(trajectory.len()),
        right: Vec::with_capacity(trajectory.len()),
    };
    for sample in trajectory.iter() {
        let heading = sample.heading_rad;
        let omega = angular_velocity(sample.velocity, sample.radius_of_curvature);
        let offset = |angle: f64, velocity: f64| {
            Waypoint::new(
                sample.x + half_width * angle.cos(),
                sample.y + half_width * angle.sin(),
                heading,
                velocity,
                sample.acceleration,
            )
        };
        wheels
            .left
            .push(offset(heading + FRAC_PI_2, sample.velocity - omega * half_width));
        wheels
            .right
            .push(offset(heading - FRAC_PI_2, sample.velocity + omega * half_width));
    }
    wheels
}

/// Angular velocity for a speed and radius of curvature, zero when the radius is infinite
#[inline]
pub fn angular_velocity(velocity: f64, radius_of_curvature: f64) -> f64 {
    if radius_of_curvature.is_finite() && radius_of_curvature != 0.0 {
        velocity / radius_of_curvature
    } else {
        0.0
    }
}
