use crate::PlanningError;
use nalgebra::{Matrix3, Vector3, Vector6};

/// Determinant magnitude below which the end-condition system is treated as singular
const SINGULARITY_TOLERANCE: f64 = f64::EPSILON;

/// Quintic polynomial interpolating one axis over a segment
///
/// The polynomial matches position, velocity and acceleration at both ends of the
/// segment. The first three coefficients follow directly from the start conditions, and
/// the last three solve a 3x3 system built from powers of the duration.
/// # Example
/// ```
/// use quintic_drive::QuinticPolynomial;
/// let poly = QuinticPolynomial::new(0.0, 0.0, 0.0, 10.0, 0.0, 0.0, 2.0).unwrap();
/// assert!((poly.position(2.0) - 10.0).abs() < 1e-9);
/// assert!(poly.velocity(2.0).abs() < 1e-9);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct QuinticPolynomial {
    /// Coefficients `a0..a5` in increasing powers of time
    pub coefficients: Vector6<f64>,
    /// Duration of the segment in seconds
    pub duration: f64,
}
/// Implementation of the QuinticPolynomial
impl QuinticPolynomial {
    /// Solve for the quintic satisfying the six boundary conditions
    /// # Arguments
    /// * `xs` - Start position
    /// * `vxs` - Start velocity
    /// * `axs` - Start acceleration
    /// * `xe` - End position
    /// * `vxe` - End velocity
    /// * `axe` - End acceleration
    /// * `duration` - Segment duration in seconds, must be positive
    /// # Errors
    /// * Returns `PlanningError::NalgebraError` if the duration is not a positive finite
    ///   number or the end-condition system is singular
    pub fn new(
        xs: f64,
        vxs: f64,
        axs: f64,
        xe: f64,
        vxe: f64,
        axe: f64,
        duration: f64,
    ) -> Result<Self, PlanningError> {
        if !(duration.is_finite() && duration > 0.0) {
            return Err(PlanningError::NalgebraError(format!(
                "Quintic segment duration must be positive and finite, got {duration}"
            )));
        }
        let (a0, a1, a2) = (xs, vxs, axs / 2.0);
        let t = duration;
        let (t2, t3, t4, t5) = (t * t, t * t * t, t.powi(4), t.powi(5));
        #[rustfmt::skip]
        let a = Matrix3::new(
            t3,       t4,        t5,
            3.0 * t2, 4.0 * t3,  5.0 * t4,
            6.0 * t,  12.0 * t2, 20.0 * t3,
        );
        let b = Vector3::new(
            xe - a0 - a1 * t - a2 * t2,
            vxe - a1 - 2.0 * a2 * t,
            axe - 2.0 * a2,
        );
        let lu = a.lu();
        if lu.determinant().abs() < SINGULARITY_TOLERANCE {
            return Err(PlanningError::NalgebraError(format!(
                "Quintic end-condition system is singular for duration {duration}"
            )));
        }
        let tail = lu.solve(&b).ok_or(PlanningError::NalgebraError(
            "Failed to solve for coefficients in QuinticPolynomial".to_string(),
        ))?;
        let coefficients = Vector6::new(a0, a1, a2, tail[0], tail[1], tail[2]);
        if coefficients.iter().any(|c| !c.is_finite()) {
            return Err(PlanningError::NalgebraError(format!(
                "Quintic coefficients are not finite for duration {duration}"
            )));
        }
        Ok(Self {
            coefficients,
            duration,
        })
    }
    /// Position at time `t`
    pub fn position(&self, t: f64) -> f64 {
        let c = &self.coefficients;
        c[0] + t * (c[1] + t * (c[2] + t * (c[3] + t * (c[4] + t * c[5]))))
    }
    /// First derivative at time `t`
    pub fn velocity(&self, t: f64) -> f64 {
        let c = &self.coefficients;
        c[1] + t * (2.0 * c[2] + t * (3.0 * c[3] + t * (4.0 * c[4] + t * 5.0 * c[5])))
    }
    /// Second derivative at time `t`
    pub fn acceleration(&self, t: f64) -> f64 {
        let c = &self.coefficients;
        2.0 * c[2] + t * (6.0 * c[3] + t * (12.0 * c[4] + t * 20.0 * c[5]))
    }
    /// Third derivative at time `t`
    pub fn jerk(&self, t: f64) -> f64 {
        let c = &self.coefficients;
        6.0 * c[3] + t * (24.0 * c[4] + t * 60.0 * c[5])
    }
}
