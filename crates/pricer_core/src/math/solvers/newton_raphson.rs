//! Newton-Raphson root-finding solver.

use super::SolverConfig;
use crate::types::SolverError;
use num_traits::Float;

/// Newton-Raphson root finder with optional AD support.
///
/// Iterates `x_{n+1} = x_n - f(x_n) / f'(x_n)`. This is the primary
/// solver for discount factor bootstrapping, where the repricing
/// residual is smooth and nearly linear in the pillar discount factor,
/// so a handful of iterations suffice.
///
/// Convergence is quadratic near a root but not guaranteed: a flat
/// derivative or a poor initial guess can stall it. Callers that need a
/// guarantee fall back to [`BrentSolver`](super::BrentSolver) with a
/// bracket.
///
/// # Example
///
/// ```
/// use pricer_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
///
/// let solver = NewtonRaphsonSolver::new(SolverConfig::default());
///
/// let f = |x: f64| x * x - 2.0;
/// let f_prime = |x: f64| 2.0 * x;
///
/// let root = solver.find_root(f, f_prime, 1.0).unwrap();
/// assert!((root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct NewtonRaphsonSolver<T: Float> {
    config: SolverConfig<T>,
}

impl<T: Float> NewtonRaphsonSolver<T> {
    /// Create a solver with the given configuration.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Create a solver with the default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }

    /// Find a root of `f` from the initial guess `x0` using the
    /// explicit derivative `f_prime`.
    ///
    /// # Errors
    ///
    /// `SolverError::DerivativeNearZero` when an iterate lands on a
    /// flat spot, `SolverError::NumericalInstability` when an update
    /// leaves the finite range, `SolverError::MaxIterationsExceeded`
    /// when the tolerance is not reached within the iteration budget.
    ///
    /// # Example
    ///
    /// ```
    /// use pricer_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
    ///
    /// // Discount factor of a 1Y deposit quoted at 5%
    /// let f = |df: f64| df * 1.05 - 1.0;
    /// let f_prime = |_df: f64| 1.05;
    ///
    /// let solver = NewtonRaphsonSolver::new(SolverConfig::default());
    /// let df = solver.find_root(f, f_prime, 1.0).unwrap();
    /// assert!((df - 1.0 / 1.05).abs() < 1e-12);
    /// ```
    pub fn find_root<F, G>(&self, f: F, f_prime: G, x0: T) -> Result<T, SolverError>
    where
        F: Fn(T) -> T,
        G: Fn(T) -> T,
    {
        let mut x = x0;
        let epsilon = T::from(1e-30).unwrap();

        for _iteration in 0..self.config.max_iterations {
            let f_val = f(x);

            if f_val.abs() < self.config.tolerance {
                return Ok(x);
            }

            let f_prime_val = f_prime(x);

            if f_prime_val.abs() < epsilon {
                return Err(SolverError::DerivativeNearZero {
                    x: x.to_f64().unwrap_or(f64::NAN),
                });
            }

            // Newton update
            #[allow(clippy::assign_op_pattern)]
            {
                x = x - f_val / f_prime_val;
            }

            if !x.is_finite() {
                return Err(SolverError::NumericalInstability(
                    "Newton iteration produced non-finite value".to_string(),
                ));
            }
        }

        Err(SolverError::MaxIterationsExceeded {
            iterations: self.config.max_iterations,
        })
    }

    /// The solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }
}

#[cfg(feature = "num-dual-mode")]
impl NewtonRaphsonSolver<f64> {
    /// Find a root with the derivative computed by dual numbers, so no
    /// explicit derivative function is needed.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`find_root`](Self::find_root).
    pub fn find_root_ad<F>(&self, f: F, x0: f64) -> Result<f64, SolverError>
    where
        F: Fn(num_dual::Dual64) -> num_dual::Dual64,
    {
        use num_dual::Dual64;

        let mut x = x0;
        let epsilon = 1e-30;

        for _iteration in 0..self.config.max_iterations {
            // Seed the derivative
            let x_dual = Dual64::new(x, 1.0);
            let f_dual = f(x_dual);

            let f_val = f_dual.re;
            let f_prime_val = f_dual.eps;

            if f_val.abs() < self.config.tolerance {
                return Ok(x);
            }

            if f_prime_val.abs() < epsilon {
                return Err(SolverError::DerivativeNearZero { x });
            }

            x -= f_val / f_prime_val;

            if !x.is_finite() {
                return Err(SolverError::NumericalInstability(
                    "Newton iteration produced non-finite value".to_string(),
                ));
            }
        }

        Err(SolverError::MaxIterationsExceeded {
            iterations: self.config.max_iterations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_sqrt_two() {
        let solver = NewtonRaphsonSolver::new(SolverConfig::default());
        let f = |x: f64| x * x - 2.0;
        let f_prime = |x: f64| 2.0 * x;
        let root = solver.find_root(f, f_prime, 1.0).unwrap();
        assert!((root - std::f64::consts::SQRT_2).abs() < 1e-10);
    }

    #[test]
    fn solves_a_deposit_discount_factor() {
        let solver = NewtonRaphsonSolver::new(SolverConfig::high_precision());

        // Deposit repricing residual: df * (1 + r * t) - 1 = 0
        let (rate, t) = (0.035, 0.25);
        let f = |df: f64| df * (1.0 + rate * t) - 1.0;
        let f_prime = |_df: f64| 1.0 + rate * t;

        let df = solver.find_root(f, f_prime, 1.0).unwrap();
        assert!((df - 1.0 / (1.0 + rate * t)).abs() < 1e-14);
    }

    #[test]
    fn finds_the_natural_log_of_two() {
        let solver = NewtonRaphsonSolver::new(SolverConfig::default());
        let f = |x: f64| x.exp() - 2.0;
        let f_prime = |x: f64| x.exp();
        let root = solver.find_root(f, f_prime, 0.5).unwrap();
        assert!((root - 2.0_f64.ln()).abs() < 1e-10);
    }

    #[test]
    fn rejects_a_flat_derivative() {
        let solver = NewtonRaphsonSolver::new(SolverConfig::default());
        let f = |x: f64| x * x * x;
        let f_prime = |_x: f64| 0.0;
        let result = solver.find_root(f, f_prime, 0.5);
        assert!(matches!(
            result.unwrap_err(),
            SolverError::DerivativeNearZero { .. }
        ));
    }

    #[test]
    fn reports_an_exhausted_iteration_budget() {
        let config = SolverConfig::new(1e-100, 3);
        let solver = NewtonRaphsonSolver::new(config);
        let f = |x: f64| x * x - 2.0;
        let f_prime = |x: f64| 2.0 * x;
        match solver.find_root(f, f_prime, 1.0).unwrap_err() {
            SolverError::MaxIterationsExceeded { iterations } => assert_eq!(iterations, 3),
            other => panic!("expected MaxIterationsExceeded, got {other:?}"),
        }
    }

    #[test]
    fn default_configuration_is_exposed() {
        let solver: NewtonRaphsonSolver<f64> = NewtonRaphsonSolver::with_defaults();
        assert_eq!(solver.config().max_iterations, 100);

        let f = |x: f64| x - 1.0;
        let f_prime = |_x: f64| 1.0;
        let root = solver.find_root(f, f_prime, 0.0).unwrap();
        assert!((root - 1.0).abs() < 1e-10);
    }

    #[test]
    fn works_in_single_precision() {
        let solver: NewtonRaphsonSolver<f32> = NewtonRaphsonSolver::with_defaults();
        let f = |x: f32| x * x - 2.0;
        let f_prime = |x: f32| 2.0 * x;
        let root = solver.find_root(f, f_prime, 1.0_f32).unwrap();
        assert!((root - std::f32::consts::SQRT_2).abs() < 1e-5);
    }

    #[cfg(feature = "num-dual-mode")]
    mod ad_tests {
        use super::*;
        use num_dual::Dual64;

        #[test]
        fn dual_seeded_iteration_finds_sqrt_two() {
            let solver = NewtonRaphsonSolver::new(SolverConfig::default());
            let f = |x: Dual64| x * x - Dual64::from(2.0);
            let root = solver.find_root_ad(f, 1.0).unwrap();
            assert!((root - std::f64::consts::SQRT_2).abs() < 1e-10);
        }

        #[test]
        fn dual_derivative_matches_the_explicit_one() {
            let solver = NewtonRaphsonSolver::new(SolverConfig::default());

            let f = |x: f64| x * x - 2.0;
            let f_prime = |x: f64| 2.0 * x;
            let f_ad = |x: Dual64| x * x - Dual64::from(2.0);

            let root_explicit = solver.find_root(f, f_prime, 1.0).unwrap();
            let root_ad = solver.find_root_ad(f_ad, 1.0).unwrap();

            assert!((root_explicit - root_ad).abs() < 1e-10);
        }
    }
}
