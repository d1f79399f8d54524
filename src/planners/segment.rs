use crate::config::PlannerConfig;
use crate::planners::QuinticPolynomial;
use crate::{round_to, PlanningError, TrajectoryBuffer, TrajectorySample, Waypoint};

/// Denominator magnitude below which a sample is treated as straight motion
const CURVATURE_EPSILON: f64 = 1e-9;
/// Speed below which the velocity direction gives no usable heading
const STATIONARY_SPEED: f64 = 1e-9;

/// Result of planning a single segment between two waypoints
/// # Example
/// ```
/// use quintic_drive::config::PlannerConfig;
/// use quintic_drive::planners::plan_segment;
/// use quintic_drive::Waypoint;
/// let start = Waypoint::new(0.0, 0.0, 0.0, 0.0, 0.0);
/// let end = Waypoint::new(4.0, 0.0, 0.0, 0.0, 0.0);
/// let plan = plan_segment(&PlannerConfig::default(), &start, &end).unwrap();
/// assert!(plan.within_bound);
/// ```
#[derive(Clone, Debug)]
pub struct SegmentPlan {
    /// Accepted segment duration in seconds
    pub duration: f64,
    /// Whether the sampled acceleration stayed within the configured bound
    pub within_bound: bool,
    /// Sampled segment, with time starting at zero
    pub trajectory: TrajectoryBuffer,
    /// Quintic for the x axis
    pub x_polynomial: QuinticPolynomial,
    /// Quintic for the y axis
    pub y_polynomial: QuinticPolynomial,
}

/// Plan one segment by scanning candidate durations until the acceleration bound holds
///
/// Durations are tried from `min_duration` upwards in `duration_step` increments, each
/// rounded to three decimals, and the first one whose sampled acceleration magnitude
/// stays within `max_acceleration` is accepted. If none does, the plan for the last
/// candidate is returned with `within_bound` unset.
/// # Arguments
/// * `config` - The planner limits
/// * `start` - The waypoint at the start of the segment
/// * `end` - The waypoint at the end of the segment
/// # Errors
/// * Returns `PlanningError::ConfigError` if the limits are unusable
/// * Returns `PlanningError::NalgebraError` if a quintic system cannot be solved
pub fn plan_segment(
    config: &PlannerConfig,
    start: &Waypoint,
    end: &Waypoint,
) -> Result<SegmentPlan, PlanningError> {
    config.validate()?;
    let (vxs, vys) = start.velocity_components();
    let (axs, ays) = start.acceleration_components();
    let (vxe, vye) = end.velocity_components();
    let (axe, aye) = end.acceleration_components();
    let mut duration = round_to(config.min_duration, 3);
    loop {
        let x_polynomial = QuinticPolynomial::new(start.x, vxs, axs, end.x, vxe, axe, duration)?;
        let y_polynomial = QuinticPolynomial::new(start.y, vys, ays, end.y, vye, aye, duration)?;
        let trajectory = sample_segment(
            &x_polynomial,
            &y_polynomial,
            config.time_step,
            start.heading_rad(),
        );
        let peak = peak_acceleration(&trajectory);
        let within_bound = peak <= config.max_acceleration;
        let next = round_to(duration + config.duration_step, 3);
        if within_bound || next > config.max_duration || next <= duration {
            if within_bound {
                log::debug!("Segment accepted at {duration:.3} s, peak acceleration {peak:.3}");
            } else {
                // Best effort: the bound is exceeded but the caller still gets a plan.
                log::warn!(
                    "No duration up to {duration:.3} s keeps acceleration within {:.3} (peak {peak:.3})",
                    config.max_acceleration
                );
            }
            return Ok(SegmentPlan {
                duration,
                within_bound,
                trajectory,
                x_polynomial,
                y_polynomial,
            });
        }
        duration = next;
    }
}

/// Sample a pair of axis quintics from `0` to their duration inclusive
///
/// Velocity, acceleration and jerk are magnitudes signed by trend: velocity and
/// acceleration turn negative when the speed just dropped below the previous sample,
/// and jerk turns negative when the acceleration magnitude just dropped.
///
/// The heading follows the velocity direction. While the robot is stationary it holds
/// the previous heading, starting from `start_heading`.
pub(crate) fn sample_segment(
    x_polynomial: &QuinticPolynomial,
    y_polynomial: &QuinticPolynomial,
    time_step: f64,
    start_heading: f64,
) -> TrajectoryBuffer {
    let duration = x_polynomial.duration;
    let steps = ((duration / time_step).round() as usize).max(1);
    let mut buffer = TrajectoryBuffer::with_capacity(steps + 1);
    let mut previous: Option<(f64, f64)> = None;
    let mut heading = start_heading;
    for i in 0..=steps {
        let t = if i == steps {
            duration
        } else {
            i as f64 * time_step
        };
        let (vx, vy) = (x_polynomial.velocity(t), y_polynomial.velocity(t));
        let (ax, ay) = (x_polynomial.acceleration(t), y_polynomial.acceleration(t));
        let (jx, jy) = (x_polynomial.jerk(t), y_polynomial.jerk(t));
        let speed = vx.hypot(vy);
        let accel = ax.hypot(ay);
        let (speed_dropped, accel_dropped) = match previous {
            Some((prev_speed, prev_accel)) => (speed < prev_speed, accel < prev_accel),
            None => (false, false),
        };
        previous = Some((speed, accel));
        let sign = |dropped: bool| if dropped { -1.0 } else { 1.0 };
        if speed >= STATIONARY_SPEED {
            heading = vy.atan2(vx);
        }
        buffer.push(TrajectorySample {
            time: t,
            x: x_polynomial.position(t),
            y: y_polynomial.position(t),
            heading_rad: heading,
            heading_deg: heading.to_degrees(),
            velocity: sign(speed_dropped) * speed,
            acceleration: sign(speed_dropped) * accel,
            jerk: sign(accel_dropped) * jx.hypot(jy),
            radius_of_curvature: radius_of_curvature(vx, vy, ax, ay),
            cumulative_distance: 0.0,
            angular_velocity: 0.0,
        });
    }
    buffer
}

/// Radius of curvature from first and second derivatives, infinite on straight motion
pub fn radius_of_curvature(vx: f64, vy: f64, ax: f64, ay: f64) -> f64 {
    let denominator = vx * ay - vy * ax;
    if denominator.abs() < CURVATURE_EPSILON {
        f64::INFINITY
    } else {
        (vx * vx + vy * vy).powf(1.5) / denominator
    }
}

fn peak_acceleration(trajectory: &TrajectoryBuffer) -> f64 {
    trajectory
        .acceleration()
        .iter()
        .fold(0.0, |peak: f64, a| peak.max(a.abs()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn straight() -> (Waypoint, Waypoint) {
        (
            Waypoint::new(0.0, 0.0, 0.0, 0.0, 0.0),
            Waypoint::new(10.0, 0.0, 0.0, 5.0, 0.0),
        )
    }

    #[test]
    fn test_straight_segment_meets_bound() {
        let config = PlannerConfig::default();
        let (start, end) = straight();
        let plan = plan_segment(&config, &start, &end).unwrap();
        assert!(plan.within_bound);
        assert!(peak_acceleration(&plan.trajectory) <= config.max_acceleration);
        let trajectory = &plan.trajectory;
        let expected_len = (plan.duration / config.time_step).round() as usize + 1;
        assert_eq!(trajectory.len(), expected_len);
        assert_eq!(trajectory.time()[0], 0.0);
        assert_eq!(*trajectory.time().last().unwrap(), plan.duration);
        assert_eq!(trajectory.velocity()[0], 0.0);
        // Speed overshoots 5 ft/s and settles back onto it, so the trend rule signs
        // the final sample negative even though the robot is still moving forward.
        let final_velocity = *trajectory.velocity().last().unwrap();
        assert!(final_velocity < 0.0);
        assert!((final_velocity.abs() - 5.0).abs() < 1e-9);
        assert!((trajectory.x().last().unwrap() - 10.0).abs() < 1e-9);
        assert!(trajectory.x().windows(2).all(|w| w[1] > w[0]));
        assert!(trajectory.heading_rad().iter().all(|h| h.abs() < 1e-9));
        assert!(trajectory
            .radius_of_curvature()
            .iter()
            .all(|r| r.is_infinite()));
    }

    #[test]
    fn test_first_feasible_duration_is_accepted() {
        let config = PlannerConfig::default();
        let (start, end) = straight();
        let plan = plan_segment(&config, &start, &end).unwrap();
        assert!(plan.duration > config.min_duration);
        let shorter = round_to(plan.duration - config.duration_step, 3);
        let x = QuinticPolynomial::new(0.0, 0.0, 0.0, 10.0, 5.0, 0.0, shorter).unwrap();
        let y = QuinticPolynomial::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0, shorter).unwrap();
        let rejected = sample_segment(&x, &y, config.time_step, 0.0);
        assert!(peak_acceleration(&rejected) > config.max_acceleration);
    }

    #[test]
    fn test_infeasible_segment_returns_last_attempt() {
        let config = PlannerConfig::default();
        let start = Waypoint::new(0.0, 0.0, 0.0, 0.0, 0.0);
        let end = Waypoint::new(1000.0, 0.0, 0.0, 0.0, 0.0);
        let plan = plan_segment(&config, &start, &end).unwrap();
        assert!(!plan.within_bound);
        assert_eq!(plan.duration, config.max_duration);
        assert!((plan.trajectory.x().last().unwrap() - 1000.0).abs() < 1e-6);
    }

    #[test]
    fn test_sign_follows_trend() {
        // Decelerate from 4 ft/s to rest along x.
        let x = QuinticPolynomial::new(0.0, 4.0, 0.0, 4.0, 0.0, 0.0, 2.0).unwrap();
        let y = QuinticPolynomial::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 2.0).unwrap();
        let trajectory = sample_segment(&x, &y, 0.01, 0.0);
        let velocity = trajectory.velocity();
        let acceleration = trajectory.acceleration();
        let jerk = trajectory.jerk();
        assert!(velocity[0] > 0.0);
        assert!(jerk[0] >= 0.0);
        let mut jerk_flips = 0;
        for i in 1..trajectory.len() {
            if velocity[i].abs() < velocity[i - 1].abs() {
                assert!(velocity[i] <= 0.0 && acceleration[i] <= 0.0);
            } else {
                assert!(velocity[i] >= 0.0 && acceleration[i] >= 0.0);
            }
            if acceleration[i].abs() < acceleration[i - 1].abs() {
                assert!(jerk[i] <= 0.0, "jerk at sample {i} should be negative");
                jerk_flips += 1;
            } else {
                assert!(jerk[i] >= 0.0, "jerk at sample {i} should be positive");
            }
        }
        assert!(jerk_flips > 0);
    }

    #[test]
    fn test_stationary_start_keeps_waypoint_heading() {
        let config = PlannerConfig::default();
        let start = Waypoint::from_degrees(0.0, 0.0, 90.0, 0.0, 0.0);
        let end = Waypoint::from_degrees(0.0, 6.0, 90.0, 0.0, 0.0);
        let plan = plan_segment(&config, &start, &end).unwrap();
        let heading = plan.trajectory.heading_deg();
        assert_eq!(plan.trajectory.velocity()[0], 0.0);
        assert!(heading.iter().all(|h| (h - 90.0).abs() < 1e-9));
    }

    #[test]
    fn test_invalid_limits_are_rejected() {
        let (start, end) = straight();
        let config = PlannerConfig {
            time_step: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            plan_segment(&config, &start, &end),
            Err(PlanningError::ConfigError(_))
        ));
        let config = PlannerConfig {
            max_duration: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(
            plan_segment(&config, &start, &end),
            Err(PlanningError::ConfigError(_))
        ));
    }

    #[test]
    fn test_radius_of_curvature() {
        assert!(radius_of_curvature(1.0, 0.0, 5.0, 0.0).is_infinite());
        // Unit circle traversed counter-clockwise at unit speed.
        assert!((radius_of_curvature(0.0, 1.0, -1.0, 0.0) - 1.0).abs() < 1e-12);
        assert!((radius_of_curvature(0.0, -1.0, -1.0, 0.0) + 1.0).abs() < 1e-12);
    }
}
