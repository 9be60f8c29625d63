//! Solver configuration types.

use num_traits::Float;

/// Convergence settings shared by the root finders.
///
/// # Example
///
/// ```
/// use pricer_core::math::solvers::SolverConfig;
///
/// let config: SolverConfig<f64> = SolverConfig::default();
/// assert!(config.tolerance < 1e-8);
/// assert!(config.max_iterations >= 50);
///
/// let custom = SolverConfig {
///     tolerance: 1e-12,
///     max_iterations: 200,
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig<T: Float> {
    /// The solver stops when `|f(x)| < tolerance`.
    pub tolerance: T,

    /// Iteration budget before the solver gives up with
    /// `SolverError::MaxIterationsExceeded`.
    pub max_iterations: usize,
}

impl<T: Float> Default for SolverConfig<T> {
    /// Tolerance 1e-10, iteration budget 100.
    fn default() -> Self {
        Self {
            tolerance: T::from(1e-10).unwrap(),
            max_iterations: 100,
        }
    }
}

impl<T: Float> SolverConfig<T> {
    /// Create a configuration from explicit values.
    ///
    /// # Panics
    ///
    /// Panics if `tolerance <= 0` or `max_iterations == 0`.
    pub fn new(tolerance: T, max_iterations: usize) -> Self {
        assert!(tolerance > T::zero(), "tolerance must be positive");
        assert!(max_iterations > 0, "max_iterations must be > 0");
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Tolerance 1e-14, iteration budget 500. Curve bootstrapping uses
    /// this so pillar residuals reprice to within rounding.
    pub fn high_precision() -> Self {
        Self {
            tolerance: T::from(1e-14).unwrap(),
            max_iterations: 500,
        }
    }

    /// Tolerance 1e-6, iteration budget 50, for callers that trade
    /// precision for speed.
    pub fn fast() -> Self {
        Self {
            tolerance: T::from(1e-6).unwrap(),
            max_iterations: 50,
        }
    }
}
