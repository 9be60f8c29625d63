//! Brent's method root-finding solver.

use super::SolverConfig;
use crate::types::SolverError;
use num_traits::Float;

/// Bracketing root finder after Brent.
///
/// Mixes bisection with secant steps and inverse quadratic
/// interpolation, so it needs no derivative and cannot leave the
/// bracket. The curve bootstrapper falls back to it when a
/// Newton-Raphson step stalls on a flat residual.
///
/// # Example
///
/// ```
/// use pricer_core::math::solvers::{BrentSolver, SolverConfig};
///
/// let solver = BrentSolver::new(SolverConfig::default());
/// let f = |x: f64| x * x * x - x - 2.0;
///
/// let root = solver.find_root(f, 1.0, 2.0).unwrap();
/// assert!((f(root)).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct BrentSolver<T: Float> {
    config: SolverConfig<T>,
}

impl<T: Float> BrentSolver<T> {
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

    /// Find a root of `f` inside the bracket `[a, b]`.
    ///
    /// The endpoints may be given in either order but `f(a)` and `f(b)`
    /// must differ in sign.
    ///
    /// # Errors
    ///
    /// `SolverError::NoBracket` when the endpoint values share a sign,
    /// `SolverError::MaxIterationsExceeded` when the tolerance is not
    /// reached within the configured iteration budget.
    pub fn find_root<F>(&self, f: F, a: T, b: T) -> Result<T, SolverError>
    where
        F: Fn(T) -> T,
    {
        let mut a = a;
        let mut b = b;
        let mut fa = f(a);
        let mut fb = f(b);

        if fa * fb > T::zero() {
            return Err(SolverError::NoBracket {
                a: a.to_f64().unwrap_or(f64::NAN),
                b: b.to_f64().unwrap_or(f64::NAN),
            });
        }

        // Keep b the better estimate: |f(a)| >= |f(b)|
        if fa.abs() < fb.abs() {
            std::mem::swap(&mut a, &mut b);
            std::mem::swap(&mut fa, &mut fb);
        }

        let mut c = a;
        let mut fc = fa;
        let mut d = b - a;
        let mut e = d;

        let two = T::from(2.0).unwrap();
        let three = T::from(3.0).unwrap();

        for _iteration in 0..self.config.max_iterations {
            if fb.abs() < self.config.tolerance {
                return Ok(b);
            }

            let tol = self.config.tolerance;
            let m = (c - b) / two;

            if m.abs() <= tol {
                return Ok(b);
            }

            // Interpolate when the step stays well inside the bracket,
            // bisect otherwise.
            let use_bisection;

            if fa != fc && fb != fc {
                // Inverse quadratic interpolation
                let r = fb / fc;
                let s = fb / fa;
                let t = fa / fc;

                let p = s * (t * (r - t) * (c - b) - (T::one() - r) * (b - a));
                let q = (t - T::one()) * (r - T::one()) * (s - T::one());

                if p.abs() < (three * m * q).abs() / two && p.abs() < (e * q).abs() / two {
                    e = d;
                    d = p / q;
                    use_bisection = false;
                } else {
                    use_bisection = true;
                }
            } else if fb != fa {
                // Secant step
                let s = fb / fa;
                let p = two * m * s;
                let q = T::one() - s;

                if p.abs() < (three * m * q).abs() / two && p.abs() < (e * q).abs() / two {
                    e = d;
                    d = p / q;
                    use_bisection = false;
                } else {
                    use_bisection = true;
                }
            } else {
                use_bisection = true;
            }

            if use_bisection {
                d = m;
                e = m;
            }

            a = b;
            fa = fb;

            if d.abs() > tol {
                b = b + d;
            } else {
                // Minimum step towards the midpoint
                b = b + if m > T::zero() { tol } else { -tol };
            }

            fb = f(b);

            // Restore the bracket: f(b) and f(c) must differ in sign
            if (fb > T::zero() && fc > T::zero()) || (fb < T::zero() && fc < T::zero()) {
                c = a;
                fc = fa;
                d = b - a;
                e = d;
            }

            // Keep b the better estimate: |f(c)| >= |f(b)|
            if fc.abs() < fb.abs() {
                a = b;
                b = c;
                c = a;
                fa = fb;
                fb = fc;
                fc = fa;
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
