//! Linear interpolation implementation.

use super::Interpolator;
use crate::types::InterpolationError;
use num_traits::Float;

/// Piecewise linear interpolator.
///
/// Stores sorted (x, y) data points and performs linear interpolation
/// between adjacent points. Supports automatic differentiation through
/// the generic `T: Float` type parameter.
///
/// # Construction
///
/// Data points are automatically sorted by x-coordinate during
/// construction. At least 2 data points are required. By default queries
/// outside the data range return `InterpolationError::OutOfBounds`;
/// [`with_flat_extrapolation`](Self::with_flat_extrapolation) switches to
/// clamping at the endpoint values instead.
///
/// # Example
///
/// ```
/// use pricer_core::math::interpolators::{Interpolator, LinearInterpolator};
///
/// let xs = [0.0, 1.0, 2.0, 3.0];
/// let ys = [0.0, 2.0, 4.0, 6.0];
///
/// let interp = LinearInterpolator::new(&xs, &ys).unwrap();
/// assert_eq!(interp.domain(), (0.0, 3.0));
/// ```
#[derive(Debug, Clone)]
pub struct LinearInterpolator<T: Float> {
    /// Sorted x-coordinates
    xs: Vec<T>,
    /// Corresponding y-values (in same order as xs after sorting)
    ys: Vec<T>,
    /// Clamp out-of-range queries to the endpoint values
    flat_extrapolation: bool,
}

impl<T: Float> LinearInterpolator<T> {
    /// Construct a linear interpolator from x and y data points.
    ///
    /// Data points are automatically sorted by x-coordinate if not already
    /// sorted. Requires at least 2 data points.
    ///
    /// # Returns
    ///
    /// * `Ok(LinearInterpolator)` - Successfully constructed interpolator
    /// * `Err(InterpolationError::InsufficientData)` - Fewer than 2 data points
    /// * `Err(InterpolationError::InvalidInput)` - Mismatched array lengths
    pub fn new(xs: &[T], ys: &[T]) -> Result<Self, InterpolationError> {
        if xs.len() != ys.len() {
            return Err(InterpolationError::InvalidInput(format!(
                "xs and ys must have same length: got {} and {}",
                xs.len(),
                ys.len()
            )));
        }

        if xs.len() < 2 {
            return Err(InterpolationError::InsufficientData {
                got: xs.len(),
                need: 2,
            });
        }

        let mut pairs: Vec<(T, T)> = xs.iter().copied().zip(ys.iter().copied()).collect();
        pairs.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

        let (sorted_xs, sorted_ys): (Vec<T>, Vec<T>) = pairs.into_iter().unzip();

        Ok(Self {
            xs: sorted_xs,
            ys: sorted_ys,
            flat_extrapolation: false,
        })
    }

    /// Enable flat extrapolation: queries below the first knot return the
    /// first y-value, queries above the last knot return the last y-value.
    #[must_use]
    pub fn with_flat_extrapolation(mut self) -> Self {
        self.flat_extrapolation = true;
        self
    }

    /// Returns a reference to the sorted x-coordinates.
    #[inline]
    pub fn xs(&self) -> &[T] {
        &self.xs
    }

    /// Returns a reference to the y-values (in sorted x order).
    #[inline]
    pub fn ys(&self) -> &[T] {
        &self.ys
    }

    /// Returns the number of data points.
    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Returns true if the interpolator has no data points.
    /// Note: This should never be true for a valid interpolator.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Find the segment index for interpolation using binary search.
    ///
    /// Returns the index `i` such that `xs[i] <= x < xs[i+1]`,
    /// clamped to valid segment range [0, n-2].
    #[inline]
    fn find_segment(&self, x: T) -> usize {
        let pos = self.xs.partition_point(|&xi| xi <= x);

        // pos can be 0 (x < xs[0]) or n (x >= xs[n-1])
        if pos == 0 {
            0
        } else if pos >= self.xs.len() {
            self.xs.len() - 2
        } else {
            pos - 1
        }
    }
}

impl<T: Float> Interpolator<T> for LinearInterpolator<T> {
    /// Interpolate value at point `x` using piecewise linear interpolation.
    ///
    /// Uses binary search (O(log n)) to find the appropriate segment,
    /// then applies `y = y0 + (y1 - y0) * (x - x0) / (x1 - x0)`.
    fn interpolate(&self, x: T) -> Result<T, InterpolationError> {
        let n = self.xs.len();
        let x_min = self.xs[0];
        let x_max = self.xs[n - 1];

        if x < x_min || x > x_max {
            if self.flat_extrapolation {
                return Ok(if x < x_min { self.ys[0] } else { self.ys[n - 1] });
            }
            return Err(InterpolationError::OutOfBounds {
                x: x.to_f64().unwrap_or(f64::NAN),
                min: x_min.to_f64().unwrap_or(f64::NAN),
                max: x_max.to_f64().unwrap_or(f64::NAN),
            });
        }

        let i = self.find_segment(x);

        let x0 = self.xs[i];
        let x1 = self.xs[i + 1];
        let y0 = self.ys[i];
        let y1 = self.ys[i + 1];

        let t = (x - x0) / (x1 - x0);
        Ok(y0 + (y1 - y0) * t)
    }

    #[inline]
    fn domain(&self) -> (T, T) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new_with_minimum_points() {
        let interp = LinearInterpolator::new(&[0.0, 1.0], &[0.0, 1.0]).unwrap();
        assert_eq!(interp.len(), 2);
    }

    #[test]
    fn test_new_rejects_single_point() {
        let result = LinearInterpolator::new(&[0.0], &[1.0]);
        assert!(matches!(
            result,
            Err(InterpolationError::InsufficientData { got: 1, need: 2 })
        ));
    }

    #[test]
    fn test_new_rejects_mismatched_lengths() {
        let result = LinearInterpolator::new(&[0.0, 1.0, 2.0], &[0.0, 1.0]);
        assert!(matches!(result, Err(InterpolationError::InvalidInput(_))));
    }

    #[test]
    fn test_new_sorts_unsorted_input() {
        let interp = LinearInterpolator::new(&[2.0, 0.0, 1.0], &[4.0, 0.0, 2.0]).unwrap();
        assert_eq!(interp.xs(), &[0.0, 1.0, 2.0]);
        assert_eq!(interp.ys(), &[0.0, 2.0, 4.0]);
    }

    #[test]
    fn test_interpolate_at_knots() {
        let interp = LinearInterpolator::new(&[0.0, 1.0, 2.0], &[1.0, 3.0, 7.0]).unwrap();
        assert_relative_eq!(interp.interpolate(0.0).unwrap(), 1.0);
        assert_relative_eq!(interp.interpolate(1.0).unwrap(), 3.0);
        assert_relative_eq!(interp.interpolate(2.0).unwrap(), 7.0);
    }

    #[test]
    fn test_interpolate_midpoints() {
        let interp = LinearInterpolator::new(&[0.0, 1.0, 2.0], &[1.0, 3.0, 7.0]).unwrap();
        assert_relative_eq!(interp.interpolate(0.5).unwrap(), 2.0, epsilon = 1e-12);
        assert_relative_eq!(interp.interpolate(1.5).unwrap(), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_out_of_bounds_errors_by_default() {
        let interp = LinearInterpolator::new(&[0.0, 1.0], &[0.0, 1.0]).unwrap();
        assert!(matches!(
            interp.interpolate(-0.5),
            Err(InterpolationError::OutOfBounds { .. })
        ));
        assert!(interp.interpolate(1.5).is_err());
    }

    #[test]
    fn test_flat_extrapolation_clamps() {
        let interp = LinearInterpolator::new(&[0.0, 1.0, 2.0], &[1.0, 3.0, 7.0])
            .unwrap()
            .with_flat_extrapolation();
        assert_relative_eq!(interp.interpolate(-5.0).unwrap(), 1.0);
        assert_relative_eq!(interp.interpolate(10.0).unwrap(), 7.0);
    }

    #[test]
    fn test_domain() {
        let interp = LinearInterpolator::new(&[1.0, 2.0, 3.0], &[1.0, 4.0, 9.0]).unwrap();
        assert_eq!(interp.domain(), (1.0, 3.0));
    }

    proptest::proptest! {
        #[test]
        fn prop_interpolated_value_within_segment_bounds(t in 0.0..1.0f64) {
            let interp = LinearInterpolator::new(&[0.0, 1.0], &[2.0, 5.0]).unwrap();
            let y = interp.interpolate(t).unwrap();
            proptest::prop_assert!((2.0..=5.0).contains(&y));
        }
    }
}
