//! Interpolation methods for numerical computation.
//!
//! This module provides the interpolation used across curve and surface
//! lookups, with support for automatic differentiation through generic
//! `T: Float` type parameters.
//!
//! ## Available Interpolators
//!
//! - [`LinearInterpolator`]: Piecewise linear interpolation between data
//!   points, with optional flat extrapolation beyond the endpoints
//!
//! ## Core Trait
//!
//! Interpolators implement the [`Interpolator`] trait, which defines:
//! - `interpolate(x: T) -> Result<T, InterpolationError>`: Compute interpolated value
//! - `domain() -> (T, T)`: Return valid interpolation range
//!
//! ## Example
//!
//! ```
//! use pricer_core::math::interpolators::{Interpolator, LinearInterpolator};
//!
//! let xs = [0.0_f64, 1.0, 2.0, 3.0];
//! let ys = [0.0_f64, 1.0, 4.0, 9.0];
//!
//! let interp = LinearInterpolator::new(&xs, &ys).unwrap();
//! assert_eq!(interp.domain(), (0.0, 3.0));
//!
//! // Interpolate at x = 1.5 (between y=1.0 and y=4.0)
//! let y = interp.interpolate(1.5).unwrap();
//! assert!((y - 2.5).abs() < 1e-10);
//! ```

mod linear;
mod traits;

// Re-export public types at module level
pub use linear::LinearInterpolator;
pub use traits::Interpolator;
