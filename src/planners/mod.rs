use crate::config::PlannerConfig;
use crate::{PlanningError, TrajectoryBuffer, Waypoint};
use rayon::prelude::*;

mod quintic;
mod segment;
mod stitch;

// Re-export the types you need at the top-level
pub use quintic::QuinticPolynomial;
pub use segment::{plan_segment, radius_of_curvature, SegmentPlan};
pub use stitch::stitch_segments;

/// Planner turning a waypoint chain into a stitched quintic trajectory
///
/// Every call recomputes the whole chain; nothing is cached between calls.
/// # Example
/// ```
/// use quintic_drive::config::PlannerConfig;
/// use quintic_drive::{QuinticPathPlanner, Waypoint};
/// let planner = QuinticPathPlanner::new(PlannerConfig {
///     use_multithreading: true,
///     ..Default::default()
/// });
/// let trajectory = planner
///     .plan(&[
///         Waypoint::new(0.0, 0.0, 0.0, 0.0, 0.0),
///         Waypoint::new(6.0, 2.0, 0.0, 2.0, 0.0),
///         Waypoint::new(12.0, 0.0, 0.0, 0.0, 0.0),
///     ])
///     .unwrap();
/// assert!(!trajectory.is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct QuinticPathPlanner {
    /// Planner limits
    pub config: PlannerConfig,
}
/// Implementation of the QuinticPathPlanner
impl QuinticPathPlanner {
    /// Creates a new planner with the given limits
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }
    /// Plans the segment between two waypoints
    /// # Errors
    /// * Returns an error if the limits are unusable or a quintic system is singular
    pub fn plan_segment(
        &self,
        start: &Waypoint,
        end: &Waypoint,
    ) -> Result<SegmentPlan, PlanningError> {
        plan_segment(&self.config, start, end)
    }
    /// Plans every consecutive waypoint pair
    ///
    /// Segments are independent of each other, so with `use_multithreading` they are
    /// solved on the rayon pool. The returned plans are always in path order.
    /// # Errors
    /// * Returns `PlanningError::ConfigError` if the limits are unusable
    /// * Returns `PlanningError::InsufficientWaypoints` for fewer than two waypoints
    /// * Returns the first segment error otherwise
    pub fn plan_segments(&self, waypoints: &[Waypoint]) -> Result<Vec<SegmentPlan>, PlanningError> {
        self.config.validate()?;
        if waypoints.len() < 2 {
            return Err(PlanningError::InsufficientWaypoints(waypoints.len()));
        }
        if self.config.use_multithreading {
            waypoints
                .par_windows(2)
                .map(|pair| self.plan_segment(&pair[0], &pair[1]))
                .collect()
        } else {
            waypoints
                .windows(2)
                .map(|pair| self.plan_segment(&pair[0], &pair[1]))
                .collect()
        }
    }
    /// Plans the full trajectory through all waypoints
    /// # Arguments
    /// * `waypoints` - The waypoints in path order, at least two
    /// # Returns
    /// * The stitched trajectory buffer
    /// # Errors
    /// * Returns `PlanningError::ConfigError` if the limits are unusable
    /// * Returns `PlanningError::InsufficientWaypoints` for fewer than two waypoints
    /// * Returns `PlanningError::NalgebraError` if any segment's quintic system is singular
    pub fn plan(&self, waypoints: &[Waypoint]) -> Result<TrajectoryBuffer, PlanningError> {
        let segments = self.plan_segments(waypoints)?;
        let final_waypoint = waypoints
            .last()
            .ok_or(PlanningError::InsufficientWaypoints(0))?;
        let trajectory = stitch_segments(&segments, final_waypoint);
        let relaxed = segments.iter().filter(|s| !s.within_bound).count();
        if relaxed > 0 {
            log::warn!(
                "{relaxed} of {} segments exceed the acceleration bound of {:.3}",
                segments.len(),
                self.config.max_acceleration
            );
        }
        log::info!(
            "Planned {} segments: {} samples over {:.3} s",
            segments.len(),
            trajectory.len(),
            trajectory.last().map_or(0.0, |s| s.time)
        );
        Ok(trajectory)
    }
}

/// Plans a trajectory through the waypoints with the default planner limits
/// # Example
/// ```
/// use quintic_drive::{plan, PlanningError, Waypoint};
/// let result = plan(&[Waypoint::new(0.0, 0.0, 0.0, 0.0, 0.0)]);
/// assert!(matches!(result, Err(PlanningError::InsufficientWaypoints(1))));
/// ```
pub fn plan(waypoints: &[Waypoint]) -> Result<TrajectoryBuffer, PlanningError> {
    QuinticPathPlanner::default().plan(waypoints)
}
