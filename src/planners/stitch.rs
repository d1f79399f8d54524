use crate::planners::SegmentPlan;
use crate::{TrajectoryBuffer, Waypoint};

/// Concatenate segment plans into one continuous trajectory
///
/// Every segment after the first loses its leading sample, which repeats the previous
/// segment's final sample, and its times are shifted past the running end time. Once all
/// segments are in, the degree headings are refreshed, the final heading is pinned to the
/// requested terminal heading, and the distance and angular velocity channels are filled.
/// # Arguments
/// * `segments` - Segment plans in path order
/// * `final_waypoint` - The last input waypoint, whose heading ends the trajectory
/// # Returns
/// * The stitched trajectory buffer
pub fn stitch_segments(segments: &[SegmentPlan], final_waypoint: &Waypoint) -> TrajectoryBuffer {
    let capacity = segments.iter().map(|s| s.trajectory.len()).sum();
    let mut trajectory = TrajectoryBuffer::with_capacity(capacity);
    for (i, segment) in segments.iter().enumerate() {
        trajectory.append_segment(&segment.trajectory, i > 0);
    }
    trajectory.sync_heading_degrees();
    trajectory.override_final_heading(final_waypoint);
    trajectory.compute_cumulative_distance();
    trajectory.compute_angular_velocity();
    trajectory
}
