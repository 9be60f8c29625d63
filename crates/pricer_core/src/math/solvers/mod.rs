//! Root-finding solvers for numerical computation.
//!
//! This module provides the root-finding algorithms used for implied
//! volatility inversion and discount factor bootstrapping:
//!
//! - [`NewtonRaphsonSolver`]: Fast quadratic convergence using derivatives
//! - [`BrentSolver`]: Robust bracketing method without derivative requirement
//!
//! The usual pattern is Newton-Raphson first, falling back to Brent with
//! a wide bracket when the derivative is unreliable.
//!
//! ## Configuration
//!
//! Solvers use [`SolverConfig`] for configuring:
//! - `tolerance`: Convergence tolerance (default: 1e-10)
//! - `max_iterations`: Maximum iteration count (default: 100)
//!
//! ## AD Compatibility
//!
//! The Newton-Raphson solver provides an AD-powered `find_root_ad` method
//! (feature `num-dual-mode`) that computes derivatives using `Dual64`,
//! eliminating the need for explicit derivative functions.
//!
//! ## Examples
//!
//! ```
//! use pricer_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
//!
//! // Solve for the discount factor of a 6M deposit at 4%:
//! // f(df) = df * (1 + r * t) - 1 = 0
//! let (rate, t) = (0.04, 0.5);
//! let f = |df: f64| df * (1.0 + rate * t) - 1.0;
//! let f_prime = |_df: f64| 1.0 + rate * t;
//!
//! let solver = NewtonRaphsonSolver::new(SolverConfig::default());
//! let df = solver.find_root(f, f_prime, 1.0).unwrap();
//! assert!((df - 1.0 / 1.02).abs() < 1e-12);
//! ```

mod brent;
mod config;
mod newton_raphson;

// Re-export public types at module level
pub use brent::BrentSolver;
pub use config::SolverConfig;
pub use newton_raphson::NewtonRaphsonSolver;
