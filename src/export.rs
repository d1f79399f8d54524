//! CSV export of planned trajectories
//!
//! One header row followed by one row per sample. Infinite radii are written as `inf`.

use crate::{PlanningError, TrajectoryBuffer, Waypoint};
use std::path::Path;

/// Write every channel of a trajectory buffer to a CSV file
/// # Arguments
/// * `path` - The output file path
/// * `trajectory` - The trajectory to write
/// # Errors
/// * If the file cannot be created or a row cannot be written
pub fn write_trajectory_csv<P: AsRef<Path>>(
    path: P,
    trajectory: &TrajectoryBuffer,
) -> Result<(), PlanningError> {
    let mut writer = csv::Writer::from_path(path)?;
    for sample in trajectory.iter() {
        writer.serialize(sample)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write a waypoint sequence to a CSV file
/// # Errors
/// * If the file cannot be created or a row cannot be written
pub fn write_waypoints_csv<P: AsRef<Path>>(
    path: P,
    waypoints: &[Waypoint],
) -> Result<(), PlanningError> {
    let mut writer = csv::Writer::from_path(path)?;
    for waypoint in waypoints {
        writer.serialize(waypoint)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{derive_wheel_paths, plan};

    #[test]
    fn test_trajectory_csv_has_one_row_per_sample() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("center.csv");
        let trajectory = plan(&[
            Waypoint::new(0.0, 0.0, 0.0, 0.0, 0.0),
            Waypoint::new(4.0, 0.0, 0.0, 0.0, 0.0),
        ])
        .unwrap();
        write_trajectory_csv(&file, &trajectory).unwrap();
        let contents = std::fs::read_to_string(&file).unwrap();
        let mut lines = contents.lines();
        assert_eq!(
            lines.next(),
            Some("time,x,y,heading_rad,heading_deg,velocity,acceleration,jerk,radius_of_curvature,cumulative_distance,angular_velocity")
        );
        assert_eq!(lines.count(), trajectory.len());
        assert!(contents.contains("inf"));
    }

    #[test]
    fn test_waypoints_csv() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("left.csv");
        let trajectory = TrajectoryBuffer::from_waypoint(&Waypoint::new(1.0, 2.0, 0.0, 0.0, 0.0));
        let wheels = derive_wheel_paths(&trajectory, 2.0);
        write_waypoints_csv(&file, &wheels.left).unwrap();
        let contents = std::fs::read_to_string(&file).unwrap();
        let mut lines = contents.lines();
        assert_eq!(
            lines.next(),
            Some("x,y,heading_rad,heading_deg,velocity,acceleration")
        );
        assert_eq!(lines.count(), 1);
    }

    #[test]
    fn test_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("missing").join("center.csv");
        let result = write_trajectory_csv(&file, &TrajectoryBuffer::new());
        assert!(result.is_err());
    }
}
