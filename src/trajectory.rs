//! Trajectory result buffer
//!
//! A multi-channel time series where every channel has the same length. Rows are only
//! ever added whole through [`TrajectoryBuffer::push`], so a sample index always refers to
//! the same instant in every channel.

use crate::drive::angular_velocity;
use crate::Waypoint;

/// One row of a trajectory buffer
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct TrajectorySample {
    /// Time since the start of the trajectory in seconds
    pub time: f64,
    /// X position in feet
    pub x: f64,
    /// Y position in feet
    pub y: f64,
    /// Heading in radians
    pub heading_rad: f64,
    /// Heading in degrees
    pub heading_deg: f64,
    /// Signed speed in feet per second, negative while the speed is decreasing
    pub velocity: f64,
    /// Signed acceleration magnitude in feet per second squared
    pub acceleration: f64,
    /// Signed jerk magnitude in feet per second cubed
    pub jerk: f64,
    /// Radius of curvature in feet, `f64::INFINITY` on straight motion
    pub radius_of_curvature: f64,
    /// Distance travelled along the sampled path in feet
    pub cumulative_distance: f64,
    /// Angular velocity in radians per second
    pub angular_velocity: f64,
}

/// Index-aligned trajectory channels
/// # Example
/// ```
/// use quintic_drive::{TrajectoryBuffer, Waypoint};
/// let buffer = TrajectoryBuffer::from_waypoint(&Waypoint::new(1.0, 2.0, 0.0, 0.0, 0.0));
/// assert_eq!(buffer.len(), 1);
/// assert_eq!(buffer.x(), &[1.0]);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrajectoryBuffer {
    time: Vec<f64>,
    x: Vec<f64>,
    y: Vec<f64>,
    heading_rad: Vec<f64>,
    heading_deg: Vec<f64>,
    velocity: Vec<f64>,
    acceleration: Vec<f64>,
    jerk: Vec<f64>,
    radius_of_curvature: Vec<f64>,
    cumulative_distance: Vec<f64>,
    angular_velocity: Vec<f64>,
}

impl TrajectoryBuffer {
    /// Creates an empty buffer
    pub fn new() -> Self {
        Self::default()
    }
    /// Creates an empty buffer with room for `capacity` samples in every channel
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            time: Vec::with_capacity(capacity),
            x: Vec::with_capacity(capacity),
            y: Vec::with_capacity(capacity),
            heading_rad: Vec::with_capacity(capacity),
            heading_deg: Vec::with_capacity(capacity),
            velocity: Vec::with_capacity(capacity),
            acceleration: Vec::with_capacity(capacity),
            jerk: Vec::with_capacity(capacity),
            radius_of_curvature: Vec::with_capacity(capacity),
            cumulative_distance: Vec::with_capacity(capacity),
            angular_velocity: Vec::with_capacity(capacity),
        }
    }
    /// Creates a one-sample buffer standing still at the given waypoint
    pub fn from_waypoint(waypoint: &Waypoint) -> Self {
        let mut buffer = Self::with_capacity(1);
        buffer.push(TrajectorySample {
            time: 0.0,
            x: waypoint.x,
            y: waypoint.y,
            heading_rad: waypoint.heading_rad(),
            heading_deg: waypoint.heading_deg(),
            velocity: waypoint.velocity,
            acceleration: waypoint.acceleration,
            jerk: 0.0,
            radius_of_curvature: f64::INFINITY,
            cumulative_distance: 0.0,
            angular_velocity: 0.0,
        });
        buffer
    }
    /// Appends one sample to every channel
    pub fn push(&mut self, sample: TrajectorySample) {
        self.time.push(sample.time);
        self.x.push(sample.x);
        self.y.push(sample.y);
        self.heading_rad.push(sample.heading_rad);
        self.heading_deg.push(sample.heading_deg);
        self.velocity.push(sample.velocity);
        self.acceleration.push(sample.acceleration);
        self.jerk.push(sample.jerk);
        self.radius_of_curvature.push(sample.radius_of_curvature);
        self.cumulative_distance.push(sample.cumulative_distance);
        self.angular_velocity.push(sample.angular_velocity);
    }
    /// Number of samples
    pub fn len(&self) -> usize {
        self.time.len()
    }
    /// Whether the buffer holds no samples
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }
    /// Removes every sample from every channel
    pub fn clear(&mut self) {
        self.time.clear();
        self.x.clear();
        self.y.clear();
        self.heading_rad.clear();
        self.heading_deg.clear();
        self.velocity.clear();
        self.acceleration.clear();
        self.jerk.clear();
        self.radius_of_curvature.clear();
        self.cumulative_distance.clear();
        self.angular_velocity.clear();
    }
    /// Returns the sample at `index`, if any
    pub fn sample(&self, index: usize) -> Option<TrajectorySample> {
        if index >= self.len() {
            return None;
        }
        Some(TrajectorySample {
            time: self.time[index],
            x: self.x[index],
            y: self.y[index],
            heading_rad: self.heading_rad[index],
            heading_deg: self.heading_deg[index],
            velocity: self.velocity[index],
            acceleration: self.acceleration[index],
            jerk: self.jerk[index],
            radius_of_curvature: self.radius_of_curvature[index],
            cumulative_distance: self.cumulative_distance[index],
            angular_velocity: self.angular_velocity[index],
        })
    }
    /// Returns the last sample, if any
    pub fn last(&self) -> Option<TrajectorySample> {
        self.len().checked_sub(1).and_then(|i| self.sample(i))
    }
    /// Iterates over the samples in order
    pub fn iter(&self) -> impl Iterator<Item = TrajectorySample> + '_ {
        (0..self.len()).filter_map(move |i| self.sample(i))
    }
    pub fn time(&self) -> &[f64] {
        &self.time
    }
    pub fn x(&self) -> &[f64] {
        &self.x
    }
    pub fn y(&self) -> &[f64] {
        &self.y
    }
    pub fn heading_rad(&self) -> &[f64] {
        &self.heading_rad
    }
    pub fn heading_deg(&self) -> &[f64] {
        &self.heading_deg
    }
    pub fn velocity(&self) -> &[f64] {
        &self.velocity
    }
    pub fn acceleration(&self) -> &[f64] {
        &self.acceleration
    }
    pub fn jerk(&self) -> &[f64] {
        &self.jerk
    }
    pub fn radius_of_curvature(&self) -> &[f64] {
        &self.radius_of_curvature
    }
    pub fn cumulative_distance(&self) -> &[f64] {
        &self.cumulative_distance
    }
    pub fn angular_velocity(&self) -> &[f64] {
        &self.angular_velocity
    }
    /// Appends a segment buffer, shifting its time channel so time keeps increasing
    ///
    /// The segment's times are offset by the last time held before the append. With
    /// `skip_first` the segment's first sample is dropped, since it repeats the final
    /// sample of the previous segment.
    /// # Arguments
    /// * `segment` - The segment buffer to append, with time starting at zero
    /// * `skip_first` - Whether to drop the first sample of the segment
    /// # Example
    /// ```
    /// use quintic_drive::{TrajectoryBuffer, Waypoint};
    /// let mut path = TrajectoryBuffer::from_waypoint(&Waypoint::new(0.0, 0.0, 0.0, 0.0, 0.0));
    /// let segment = TrajectoryBuffer::from_waypoint(&Waypoint::new(0.0, 0.0, 0.0, 0.0, 0.0));
    /// path.append_segment(&segment, true);
    /// assert_eq!(path.len(), 1);
    /// ```
    pub fn append_segment(&mut self, segment: &TrajectoryBuffer, skip_first: bool) {
        let time_offset = self.time.last().copied().unwrap_or(0.0);
        let skip = usize::from(skip_first);
        for mut sample in segment.iter().skip(skip) {
            sample.time += time_offset;
            self.push(sample);
        }
    }
    /// Recomputes the degree heading channel from the radian channel
    pub fn sync_heading_degrees(&mut self) {
        for (deg, rad) in self.heading_deg.iter_mut().zip(&self.heading_rad) {
            *deg = rad.to_degrees();
        }
    }
    /// Overwrites the heading of the final sample with the requested terminal heading
    pub fn override_final_heading(&mut self, waypoint: &Waypoint) {
        if let (Some(rad), Some(deg)) = (self.heading_rad.last_mut(), self.heading_deg.last_mut()) {
            *rad = waypoint.heading_rad();
            *deg = waypoint.heading_deg();
        }
    }
    /// Fills the cumulative distance channel with the running length of the sampled path
    pub fn compute_cumulative_distance(&mut self) {
        let mut distance = 0.0;
        for i in 0..self.len() {
            if i > 0 {
                distance += (self.x[i] - self.x[i - 1]).hypot(self.y[i] - self.y[i - 1]);
            }
            self.cumulative_distance[i] = distance;
        }
    }
    /// Fills the angular velocity channel with `velocity / radius_of_curvature`
    pub fn compute_angular_velocity(&mut self) {
        for ((omega, v), r) in self
            .angular_velocity
            .iter_mut()
            .zip(&self.velocity)
            .zip(&self.radius_of_curvature)
        {
            *omega = angular_velocity(*v, *r);
        }
    }
    /// Converts every sample into a dense waypoint
    pub fn to_waypoints(&self) -> Vec<Waypoint> {
        self.iter()
            .map(|s| Waypoint::new(s.x, s.y, s.heading_rad, s.velocity, s.acceleration))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_at(time: f64, x: f64, y: f64) -> TrajectorySample {
        TrajectorySample {
            time,
            x,
            y,
            heading_rad: 0.0,
            heading_deg: 0.0,
            velocity: 1.0,
            acceleration: 0.0,
            jerk: 0.0,
            radius_of_curvature: f64::INFINITY,
            cumulative_distance: 0.0,
            angular_velocity: 0.0,
        }
    }

    #[test]
    fn test_push_keeps_channels_aligned() {
        let mut buffer = TrajectoryBuffer::new();
        buffer.push(sample_at(0.0, 0.0, 0.0));
        buffer.push(sample_at(0.1, 1.0, 0.0));
        assert_eq!(buffer.len(), 2);
        assert_eq!(buffer.time().len(), buffer.angular_velocity().len());
        assert_eq!(buffer.x(), &[0.0, 1.0]);
        assert_eq!(buffer.sample(1), Some(sample_at(0.1, 1.0, 0.0)));
        assert_eq!(buffer.sample(2), None);
        buffer.clear();
        assert!(buffer.is_empty());
        assert!(buffer.last().is_none());
    }

    #[test]
    fn test_append_segment_offsets_time_and_skips_duplicate() {
        let mut first = TrajectoryBuffer::new();
        first.push(sample_at(0.0, 0.0, 0.0));
        first.push(sample_at(0.5, 1.0, 0.0));
        let mut second = TrajectoryBuffer::new();
        second.push(sample_at(0.0, 1.0, 0.0));
        second.push(sample_at(0.25, 2.0, 0.0));
        let mut path = TrajectoryBuffer::new();
        path.append_segment(&first, false);
        path.append_segment(&second, true);
        assert_eq!(path.time(), &[0.0, 0.5, 0.75]);
        assert_eq!(path.x(), &[0.0, 1.0, 2.0]);
    }

    #[test]
    fn test_cumulative_distance_and_angular_velocity() {
        let mut buffer = TrajectoryBuffer::new();
        buffer.push(sample_at(0.0, 0.0, 0.0));
        buffer.push(sample_at(1.0, 3.0, 4.0));
        let mut curved = sample_at(2.0, 3.0, 5.0);
        curved.radius_of_curvature = 2.0;
        buffer.push(curved);
        buffer.compute_cumulative_distance();
        buffer.compute_angular_velocity();
        assert_eq!(buffer.cumulative_distance(), &[0.0, 5.0, 6.0]);
        assert_eq!(buffer.angular_velocity(), &[0.0, 0.0, 0.5]);
    }

    #[test]
    fn test_heading_finalization() {
        let mut buffer = TrajectoryBuffer::new();
        let mut sample = sample_at(0.0, 0.0, 0.0);
        sample.heading_rad = std::f64::consts::FRAC_PI_2;
        buffer.push(sample);
        buffer.push(sample);
        buffer.sync_heading_degrees();
        assert!((buffer.heading_deg()[0] - 90.0).abs() < 1e-12);
        buffer.override_final_heading(&Waypoint::from_degrees(0.0, 0.0, 45.0, 0.0, 0.0));
        assert_eq!(buffer.heading_deg()[1], 45.0);
        assert!((buffer.heading_deg()[0] - 90.0).abs() < 1e-12);
    }

    #[test]
    fn test_to_waypoints() {
        let mut buffer = TrajectoryBuffer::new();
        buffer.push(sample_at(0.0, 2.0, 3.0));
        let waypoints = buffer.to_waypoints();
        assert_eq!(waypoints, vec![Waypoint::new(2.0, 3.0, 0.0, 1.0, 0.0)]);
    }
}
