//! Kinematic waypoint type
//!
//! A waypoint is a single kinematic sample of the robot: a 2D position (ft), a heading,
//! a scalar velocity (ft/s) and a scalar acceleration (ft/s^2). The heading is kept in
//! both radians and degrees, and the two are always updated together.

/// A single kinematic sample of the robot
/// # Example
/// ```
/// use quintic_drive::Waypoint;
/// let waypoint = Waypoint::from_degrees(1.0, 2.0, 90.0, 3.0, 0.0);
/// assert!((waypoint.heading_rad() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Waypoint {
    /// X position in feet
    pub x: f64,
    /// Y position in feet
    pub y: f64,
    /// Heading in radians
    heading_rad: f64,
    /// Heading in degrees, kept in sync with `heading_rad`
    heading_deg: f64,
    /// Velocity in feet per second
    pub velocity: f64,
    /// Acceleration in feet per second squared
    pub acceleration: f64,
}
/// Implementation of the Waypoint
impl Waypoint {
    /// Creates a new waypoint with the heading given in radians
    /// # Arguments
    /// * `x` - X position in feet
    /// * `y` - Y position in feet
    /// * `heading_rad` - Heading in radians
    /// * `velocity` - Velocity in feet per second
    /// * `acceleration` - Acceleration in feet per second squared
    /// # Returns
    /// * A new Waypoint instance
    pub fn new(x: f64, y: f64, heading_rad: f64, velocity: f64, acceleration: f64) -> Self {
        Self {
            x,
            y,
            heading_rad,
            heading_deg: heading_rad.to_degrees(),
            velocity,
            acceleration,
        }
    }
    /// Creates a new waypoint with the heading given in degrees
    pub fn from_degrees(
        x: f64,
        y: f64,
        heading_deg: f64,
        velocity: f64,
        acceleration: f64,
    ) -> Self {
        Self {
            x,
            y,
            heading_rad: heading_deg.to_radians(),
            heading_deg,
            velocity,
            acceleration,
        }
    }
    /// Heading in radians
    pub fn heading_rad(&self) -> f64 {
        self.heading_rad
    }
    /// Heading in degrees
    pub fn heading_deg(&self) -> f64 {
        self.heading_deg
    }
    /// Sets the heading from radians, updating the degree form as well
    pub fn set_heading_rad(&mut self, heading_rad: f64) {
        self.heading_rad = heading_rad;
        self.heading_deg = heading_rad.to_degrees();
    }
    /// Sets the heading from degrees, updating the radian form as well
    pub fn set_heading_deg(&mut self, heading_deg: f64) {
        self.heading_deg = heading_deg;
        self.heading_rad = heading_deg.to_radians();
    }
    /// Moves the waypoint to a new position, leaving its kinematics untouched
    pub fn set_position(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }
    /// Velocity split into x and y components along the heading
    pub fn velocity_components(&self) -> (f64, f64) {
        (
            self.velocity * self.heading_rad.cos(),
            self.velocity * self.heading_rad.sin(),
        )
    }
    /// Acceleration split into x and y components along the heading
    pub fn acceleration_components(&self) -> (f64, f64) {
        (
            self.acceleration * self.heading_rad.cos(),
            self.acceleration * self.heading_rad.sin(),
        )
    }
    /// Compares positions only, ignoring heading, velocity and acceleration.
    ///
    /// Point picking matches waypoints by location alone; everywhere else the
    /// structural `PartialEq` applies.
    /// # Example
    /// ```
    /// use quintic_drive::Waypoint;
    /// let a = Waypoint::new(1.0, 1.0, 0.0, 0.0, 0.0);
    /// let b = Waypoint::new(1.0, 1.0, 1.0, 4.0, 2.0);
    /// assert!(a.positions_equal(&b));
    /// assert_ne!(a, b);
    /// ```
    pub fn positions_equal(&self, other: &Waypoint) -> bool {
        self.x == other.x && self.y == other.y
    }
    /// Euclidean distance to another waypoint
    pub fn distance_to(&self, other: &Waypoint) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}
