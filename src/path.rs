//! Editable path aggregate
//!
//! Holds the authored click points and the center and wheel sequences derived from them.
//! Every edit regenerates all derived sequences from scratch.

use crate::{derive_wheel_paths, PlanningError, QuinticPathPlanner, TrajectoryBuffer, Waypoint};

/// Click points together with the center and wheel trajectories derived from them
/// # Example
/// ```
/// use quintic_drive::{Path, QuinticPathPlanner, Waypoint};
/// let planner = QuinticPathPlanner::default();
/// let mut path = Path::new(2.0);
/// path.add_click_point(&planner, Waypoint::new(0.0, 0.0, 0.0, 0.0, 0.0)).unwrap();
/// path.add_click_point(&planner, Waypoint::new(6.0, 0.0, 0.0, 0.0, 0.0)).unwrap();
/// assert_eq!(path.left_points.len(), path.path_points.len());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Path {
    /// Authored waypoints, the only input
    pub click_points: Vec<Waypoint>,
    /// Dense center trajectory
    pub path_points: Vec<Waypoint>,
    /// Dense left wheel trajectory
    pub left_points: Vec<Waypoint>,
    /// Dense right wheel trajectory
    pub right_points: Vec<Waypoint>,
    /// Track width used for the wheel trajectories in feet
    pub track_width: f64,
    /// Center trajectory from the last regeneration
    trajectory: TrajectoryBuffer,
}

impl Path {
    /// Creates an empty path for a robot with the given track width
    pub fn new(track_width: f64) -> Self {
        Self {
            track_width,
            ..Default::default()
        }
    }
    /// Creates a path from click points and plans it immediately
    /// # Errors
    /// * Returns an error if planning fails
    pub fn with_click_points(
        planner: &QuinticPathPlanner,
        click_points: Vec<Waypoint>,
        track_width: f64,
    ) -> Result<Self, PlanningError> {
        let mut path = Self {
            click_points,
            track_width,
            ..Default::default()
        };
        path.regenerate(planner)?;
        Ok(path)
    }
    /// Recomputes every derived sequence from the click points
    ///
    /// With no click points everything is cleared. A single click point becomes a
    /// one-sample trajectory. On error the derived sequences are left empty.
    /// # Errors
    /// * Returns an error if any segment fails to plan
    pub fn regenerate(&mut self, planner: &QuinticPathPlanner) -> Result<(), PlanningError> {
        self.trajectory.clear();
        self.path_points.clear();
        self.left_points.clear();
        self.right_points.clear();
        self.trajectory = match self.click_points.as_slice() {
            [] => return Ok(()),
            [single] => TrajectoryBuffer::from_waypoint(single),
            points => planner.plan(points)?,
        };
        let wheels = derive_wheel_paths(&self.trajectory, self.track_width);
        self.path_points = self.trajectory.to_waypoints();
        self.left_points = wheels.left;
        self.right_points = wheels.right;
        Ok(())
    }
    /// Appends a click point and regenerates
    pub fn add_click_point(
        &mut self,
        planner: &QuinticPathPlanner,
        waypoint: Waypoint,
    ) -> Result<(), PlanningError> {
        self.click_points.push(waypoint);
        self.regenerate(planner)
    }
    /// Inserts a click point before `index` and regenerates
    /// # Errors
    /// * Returns `PlanningError::OtherError` if `index` is past the end
    pub fn insert_click_point(
        &mut self,
        planner: &QuinticPathPlanner,
        index: usize,
        waypoint: Waypoint,
    ) -> Result<(), PlanningError> {
        if index > self.click_points.len() {
            return Err(PlanningError::OtherError(format!(
                "Click point index {index} out of range"
            )));
        }
        self.click_points.insert(index, waypoint);
        self.regenerate(planner)
    }
    /// Replaces the click point at `index` and regenerates
    /// # Errors
    /// * Returns `PlanningError::OtherError` if `index` is out of range
    pub fn move_click_point(
        &mut self,
        planner: &QuinticPathPlanner,
        index: usize,
        waypoint: Waypoint,
    ) -> Result<(), PlanningError> {
        let point = self.click_points.get_mut(index).ok_or_else(|| {
            PlanningError::OtherError(format!("Click point index {index} out of range"))
        })?;
        *point = waypoint;
        self.regenerate(planner)
    }
    /// Removes the click point at `index`, regenerates and returns it
    /// # Errors
    /// * Returns `PlanningError::OtherError` if `index` is out of range
    pub fn remove_click_point(
        &mut self,
        planner: &QuinticPathPlanner,
        index: usize,
    ) -> Result<Waypoint, PlanningError> {
        if index >= self.click_points.len() {
            return Err(PlanningError::OtherError(format!(
                "Click point index {index} out of range"
            )));
        }
        let removed = self.click_points.remove(index);
        self.regenerate(planner)?;
        Ok(removed)
    }
    /// Index of the click point at exactly `(x, y)`, matching by position only
    pub fn find_click_point(&self, x: f64, y: f64) -> Option<usize> {
        let target = Waypoint::new(x, y, 0.0, 0.0, 0.0);
        self.click_points
            .iter()
            .position(|point| point.positions_equal(&target))
    }
    /// Center trajectory from the last regeneration
    pub fn trajectory(&self) -> &TrajectoryBuffer {
        &self.trajectory
    }
    /// Duration of the center trajectory in seconds
    pub fn total_time(&self) -> f64 {
        self.trajectory.last().map_or(0.0, |s| s.time)
    }
    /// Length of the center trajectory in feet
    pub fn total_distance(&self) -> f64 {
        self.trajectory.last().map_or(0.0, |s| s.cumulative_distance)
    }
}
