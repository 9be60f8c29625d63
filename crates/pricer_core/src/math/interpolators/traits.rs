//! Core interpolation trait.

use crate::types::InterpolationError;
use num_traits::Float;

/// Common interface for one-dimensional interpolators.
///
/// Implementors store a set of data points at construction time and
/// evaluate the interpolated value at arbitrary query points.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`, `Dual64`)
pub trait Interpolator<T: Float> {
    /// Interpolate the value at point `x`.
    ///
    /// # Returns
    ///
    /// * `Ok(y)` - The interpolated value
    /// * `Err(InterpolationError::OutOfBounds)` - If `x` is outside the
    ///   domain and the interpolator does not extrapolate
    fn interpolate(&self, x: T) -> Result<T, InterpolationError>;

    /// Return the valid interpolation domain as `(x_min, x_max)`.
    fn domain(&self) -> (T, T);
}
