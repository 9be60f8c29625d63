//! Sequential bootstrapping engine.
//!
//! This module provides `SequentialBootstrapper<T>`, the main bootstrapping
//! engine that constructs yield curves from market instruments using
//! Newton-Raphson with Brent fallback.

use super::config::BootstrapConfig;
use super::curve::BootstrappedCurve;
use crate::error::BootstrapError;
use num_traits::Float;
use pricer_core::market_data::{curves::YieldCurve, MarketDataError};
use pricer_core::math::solvers::{BrentSolver, SolverConfig};
use pricer_models::instruments::rates::BootstrapInstrument;

/// Result of a bootstrap operation.
#[derive(Debug, Clone)]
pub struct BootstrapResult<T: Float> {
    /// The bootstrapped curve
    pub curve: BootstrappedCurve<T>,
    /// Pillar maturities
    pub pillars: Vec<T>,
    /// Discount factors at each pillar
    pub discount_factors: Vec<T>,
    /// Residual at each pillar
    pub residuals: Vec<T>,
    /// Number of iterations used for each pillar
    pub iterations: Vec<usize>,
}

/// The partially built curve seen by the instrument being solved.
///
/// Log-linear between the pillars stripped so far, flat-rate
/// extrapolation on both sides, and identically 1 while no pillar
/// exists yet.
struct PartialCurve<'a, T: Float> {
    pillars: &'a [T],
    discount_factors: &'a [T],
}

impl<T: Float> YieldCurve<T> for PartialCurve<'_, T> {
    fn discount_factor(&self, t: T) -> Result<T, MarketDataError> {
        if t <= T::zero() || self.pillars.is_empty() {
            return Ok(T::one());
        }

        if t < self.pillars[0] {
            let r = -self.discount_factors[0].ln() / self.pillars[0];
            return Ok((-r * t).exp());
        }

        let n = self.pillars.len();
        if t > self.pillars[n - 1] {
            let r = -self.discount_factors[n - 1].ln() / self.pillars[n - 1];
            return Ok((-r * t).exp());
        }

        let mut lo = 0;
        let mut hi = n - 1;
        while lo < hi {
            let mid = (lo + hi + 1) / 2;
            if self.pillars[mid] <= t {
                lo = mid;
            } else {
                hi = mid - 1;
            }
        }

        if lo + 1 < n {
            let t1 = self.pillars[lo];
            let t2 = self.pillars[lo + 1];
            let df1 = self.discount_factors[lo];
            let df2 = self.discount_factors[lo + 1];

            let w = (t - t1) / (t2 - t1);
            let log_df = df1.ln() * (T::one() - w) + df2.ln() * w;
            Ok(log_df.exp())
        } else {
            Ok(self.discount_factors[lo])
        }
    }
}

/// Sequential bootstrapping engine.
///
/// Implements the standard sequential stripping algorithm:
/// 1. Sort instruments by maturity
/// 2. For each instrument, solve for the discount factor at maturity
/// 3. Use Newton-Raphson with Brent fallback for root-finding
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`) for AD compatibility
///
/// # Examples
///
/// ```
/// use pricer_curves::bootstrap::{SequentialBootstrapper, BootstrapConfig};
/// use pricer_curves::BootstrapInstrument;
///
/// let instruments: Vec<BootstrapInstrument<f64>> = vec![
///     BootstrapInstrument::Deposit { start: 0.0, maturity: 1.0, rate: 0.030, accrual: 1.0 },
///     BootstrapInstrument::Deposit { start: 0.0, maturity: 2.0, rate: 0.032, accrual: 2.0 },
/// ];
///
/// let bootstrapper = SequentialBootstrapper::new(BootstrapConfig::default());
/// let result = bootstrapper.bootstrap(&instruments).unwrap();
///
/// assert_eq!(result.pillars.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct SequentialBootstrapper<T: Float> {
    /// Bootstrap configuration
    config: BootstrapConfig<T>,
}

impl<T: Float> SequentialBootstrapper<T> {
    /// Create a new sequential bootstrapper.
    pub fn new(config: BootstrapConfig<T>) -> Self {
        Self { config }
    }

    /// Create a bootstrapper with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(BootstrapConfig::default())
    }

    /// Get the configuration.
    pub fn config(&self) -> &BootstrapConfig<T> {
        &self.config
    }

    /// Bootstrap a yield curve from instruments.
    ///
    /// Instruments may arrive in any order; pillars are stripped in
    /// ascending maturity.
    pub fn bootstrap(
        &self,
        instruments: &[BootstrapInstrument<T>],
    ) -> Result<BootstrapResult<T>, BootstrapError> {
        self.validate_instruments(instruments)?;

        let mut sorted_indices: Vec<usize> = (0..instruments.len()).collect();
        sorted_indices.sort_by(|&a, &b| {
            instruments[a]
                .maturity()
                .partial_cmp(&instruments[b].maturity())
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let mut pillars: Vec<T> = Vec::with_capacity(instruments.len());
        let mut discount_factors: Vec<T> = Vec::with_capacity(instruments.len());
        let mut residuals: Vec<T> = Vec::with_capacity(instruments.len());
        let mut iterations: Vec<usize> = Vec::with_capacity(instruments.len());

        for &idx in &sorted_indices {
            let instrument = &instruments[idx];
            let maturity = instrument.maturity();

            if pillars.last().map_or(false, |&last| {
                (last - maturity).abs() < T::from(1e-10).unwrap()
            }) {
                return Err(BootstrapError::duplicate_maturity(
                    maturity.to_f64().unwrap_or(0.0),
                ));
            }

            let (df, iter_count, final_residual) = {
                let partial = PartialCurve {
                    pillars: &pillars,
                    discount_factors: &discount_factors,
                };
                self.solve_for_df(instrument, &partial)?
            };

            if !self.config.allow_negative_rates {
                let implied_rate = -df.ln() / maturity;
                if implied_rate < T::zero() {
                    return Err(BootstrapError::negative_rate(
                        maturity.to_f64().unwrap_or(0.0),
                        implied_rate.to_f64().unwrap_or(0.0),
                    ));
                }
            }

            // DFs must be decreasing across pillars
            if let Some(&last_df) = discount_factors.last() {
                if df >= last_df {
                    return Err(BootstrapError::arbitrage_detected(
                        maturity.to_f64().unwrap_or(0.0),
                    ));
                }
            }

            tracing::debug!(
                maturity = maturity.to_f64().unwrap_or(0.0),
                df = df.to_f64().unwrap_or(0.0),
                iterations = iter_count,
                "pillar solved"
            );

            pillars.push(maturity);
            discount_factors.push(df);
            residuals.push(final_residual);
            iterations.push(iter_count);
        }

        let curve = BootstrappedCurve::new(
            pillars.clone(),
            discount_factors.clone(),
            self.config.interpolation,
            self.config.allow_extrapolation,
        )?;

        Ok(BootstrapResult {
            curve,
            pillars,
            discount_factors,
            residuals,
            iterations,
        })
    }

    /// Validate input instruments.
    fn validate_instruments(
        &self,
        instruments: &[BootstrapInstrument<T>],
    ) -> Result<(), BootstrapError> {
        if instruments.is_empty() {
            return Err(BootstrapError::insufficient_data(1, 0));
        }

        for inst in instruments {
            let maturity = inst.maturity();
            if maturity <= T::zero() {
                return Err(BootstrapError::invalid_input(
                    "instrument maturity must be positive",
                ));
            }
            if maturity > self.config.max_maturity {
                return Err(BootstrapError::invalid_input(format!(
                    "instrument maturity {:?} exceeds maximum {:?}",
                    maturity.to_f64(),
                    self.config.max_maturity.to_f64()
                )));
            }
            if let BootstrapInstrument::Swap {
                payment_times,
                accrual_factors,
                ..
            } = inst
            {
                if payment_times.is_empty() {
                    return Err(BootstrapError::invalid_input(
                        "swap instrument has no payment times",
                    ));
                }
                if payment_times.len() != accrual_factors.len() {
                    return Err(BootstrapError::invalid_input(
                        "swap payment times and accrual factors differ in length",
                    ));
                }
            }
        }

        Ok(())
    }

    /// Solve for the pillar discount factor using Newton-Raphson with
    /// Brent fallback.
    fn solve_for_df<C: YieldCurve<T>>(
        &self,
        instrument: &BootstrapInstrument<T>,
        partial: &C,
    ) -> Result<(T, usize, T), BootstrapError> {
        let initial_df = Self::initial_guess(instrument);

        match self.newton_raphson_solve(instrument, partial, initial_df) {
            Ok((df, iterations)) => {
                let residual = instrument.residual(df, partial)?;
                Ok((df, iterations, residual))
            }
            Err(_) => self.brent_solve(instrument, partial),
        }
    }

    /// Starting point for the Newton iteration: plain money-market
    /// discounting at the quoted rate.
    fn initial_guess(instrument: &BootstrapInstrument<T>) -> T {
        let rate = match instrument {
            BootstrapInstrument::Deposit { rate, .. }
            | BootstrapInstrument::Fra { rate, .. }
            | BootstrapInstrument::Future { rate, .. }
            | BootstrapInstrument::Swap { rate, .. } => *rate,
        };
        T::one() / (T::one() + rate * instrument.maturity())
    }

    /// Newton-Raphson solver with a df-halving guard.
    fn newton_raphson_solve<C: YieldCurve<T>>(
        &self,
        instrument: &BootstrapInstrument<T>,
        partial: &C,
        initial_df: T,
    ) -> Result<(T, usize), BootstrapError> {
        let mut df = initial_df;
        let epsilon = T::from(1e-30).unwrap();

        for iteration in 0..self.config.max_iterations {
            let residual = instrument.residual(df, partial)?;

            if residual.abs() < self.config.tolerance {
                return Ok((df, iteration));
            }

            let derivative = instrument.residual_derivative();

            if derivative.abs() < epsilon {
                return Err(BootstrapError::convergence_failure(
                    instrument.maturity().to_f64().unwrap_or(0.0),
                    residual.to_f64().unwrap_or(0.0),
                    iteration,
                ));
            }

            let new_df = df - residual / derivative;

            // Keep the trial DF positive
            df = if new_df > T::zero() {
                new_df
            } else {
                df / T::from(2.0).unwrap()
            };

            if !df.is_finite() {
                return Err(BootstrapError::convergence_failure(
                    instrument.maturity().to_f64().unwrap_or(0.0),
                    residual.to_f64().unwrap_or(0.0),
                    iteration,
                ));
            }
        }

        let residual = instrument.residual(df, partial)?;
        Err(BootstrapError::convergence_failure(
            instrument.maturity().to_f64().unwrap_or(0.0),
            residual.to_f64().unwrap_or(0.0),
            self.config.max_iterations,
        ))
    }

    /// Brent fallback over a DF bracket.
    fn brent_solve<C: YieldCurve<T>>(
        &self,
        instrument: &BootstrapInstrument<T>,
        partial: &C,
    ) -> Result<(T, usize, T), BootstrapError> {
        // DF bracket: typically between 0.001 and 1.0
        let mut a = T::from(0.001).unwrap();
        let mut b = T::one();

        let fa = instrument.residual(a, partial)?;
        let fb = instrument.residual(b, partial)?;

        if fa * fb > T::zero() {
            // Widen the bracket over a grid of candidate DFs
            let candidates = [0.0001, 0.01, 0.1, 0.5, 0.9, 0.99, 0.999];
            let mut found_bracket = false;

            for &x in &candidates {
                let df_test = T::from(x).unwrap();
                let f_test = instrument.residual(df_test, partial)?;

                if f_test * fb <= T::zero() {
                    a = df_test;
                    found_bracket = true;
                    break;
                }
                if f_test * fa <= T::zero() {
                    b = df_test;
                    found_bracket = true;
                    break;
                }
            }

            if !found_bracket {
                return Err(BootstrapError::convergence_failure(
                    instrument.maturity().to_f64().unwrap_or(0.0),
                    fa.to_f64().unwrap_or(0.0),
                    0,
                ));
            }
        }

        let solver = BrentSolver::new(SolverConfig::new(
            self.config.tolerance,
            self.config.max_iterations,
        ));
        let objective =
            |df: T| -> T { instrument.residual(df, partial).unwrap_or_else(|_| T::nan()) };
        let df = solver.find_root(objective, a, b)?;

        let residual = instrument.residual(df, partial)?;
        Ok((df, self.config.max_iterations, residual))
    }
}
