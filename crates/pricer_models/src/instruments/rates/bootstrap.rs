//! Time-based residual form consumed by the curve bootstrapper.

use num_traits::Float;
use pricer_core::market_data::curves::YieldCurve;
use pricer_core::market_data::error::MarketDataError;

/// One instrument reduced to a root-finding residual on the discount
/// factor at its pillar maturity.
///
/// Times are year fractions from the valuation date. All discount
/// factors strictly before the pillar are read from the partially built
/// curve; the pillar's own discount factor is the solver unknown.
///
/// The residual is zero exactly when the instrument is repriced at its
/// market quote:
///
/// - Deposit / FRA / future: `D(start) - df·(1 + r·τ)`
/// - Swap / bond: `target·D(start) - r·Σᵢ τᵢ·D(tᵢ) - (1 + r·τₙ)·df`
///   with `target = 1` for a par swap and the dirty price for a bond.
#[derive(Debug, Clone, PartialEq)]
pub enum BootstrapInstrument<T: Float> {
    /// Cash deposit (also used for bills quoted as a money-market yield).
    Deposit {
        /// Settlement time.
        start: T,
        /// Pillar maturity.
        maturity: T,
        /// Simply compounded rate over the deposit period.
        rate: T,
        /// Accrual factor of the deposit period.
        accrual: T,
    },
    /// Forward rate agreement on the index period.
    Fra {
        /// Accrual start time.
        start: T,
        /// Accrual end time, the pillar maturity.
        maturity: T,
        /// Agreed forward rate.
        rate: T,
        /// Accrual factor of the index period.
        accrual: T,
    },
    /// Fixed-vs-ibor swap, or a fixed-coupon bond via the price target.
    Swap {
        /// Effective time of the swap (settlement for a bond).
        start: T,
        /// Fixed-leg payment times, ascending; the last is the pillar.
        payment_times: Vec<T>,
        /// Accrual factor of each fixed period.
        accrual_factors: Vec<T>,
        /// Fixed rate (coupon rate for a bond).
        rate: T,
        /// Value of the floating leg plus redemption per unit notional
        /// at `start`: 1 for a par swap, the dirty price for a bond.
        target: T,
    },
    /// Margined rate future over the index period.
    Future {
        /// Futures expiry, start of the index accrual.
        start: T,
        /// End of the index accrual, the pillar maturity.
        maturity: T,
        /// Rate implied by the price quote, `1 - price`.
        rate: T,
        /// Accrual factor of the index period.
        accrual: T,
    },
}

impl<T: Float> BootstrapInstrument<T> {
    /// The pillar maturity this instrument determines.
    pub fn maturity(&self) -> T {
        match self {
            BootstrapInstrument::Deposit { maturity, .. }
            | BootstrapInstrument::Fra { maturity, .. }
            | BootstrapInstrument::Future { maturity, .. } => *maturity,
            BootstrapInstrument::Swap { payment_times, .. } => payment_times
                .last()
                .copied()
                .unwrap_or_else(T::zero),
        }
    }

    /// Residual at a trial pillar discount factor `df`, with all earlier
    /// discount factors taken from `curve`.
    pub fn residual<C: YieldCurve<T>>(&self, df: T, curve: &C) -> Result<T, MarketDataError> {
        match self {
            BootstrapInstrument::Deposit {
                start,
                rate,
                accrual,
                ..
            }
            | BootstrapInstrument::Fra {
                start,
                rate,
                accrual,
                ..
            }
            | BootstrapInstrument::Future {
                start,
                rate,
                accrual,
                ..
            } => {
                let df_start = curve.discount_factor(*start)?;
                Ok(df_start - df * (T::one() + *rate * *accrual))
            }
            BootstrapInstrument::Swap {
                start,
                payment_times,
                accrual_factors,
                rate,
                target,
            } => {
                let df_start = curve.discount_factor(*start)?;
                let n = payment_times.len();
                let mut annuity = T::zero();
                for i in 0..n.saturating_sub(1) {
                    let df_i = curve.discount_factor(payment_times[i])?;
                    annuity = annuity + accrual_factors[i] * df_i;
                }
                let tau_last = accrual_factors
                    .last()
                    .copied()
                    .unwrap_or_else(T::zero);
                Ok(*target * df_start - *rate * annuity - (T::one() + *rate * tau_last) * df)
            }
        }
    }

    /// Analytic derivative of [`residual`](Self::residual) with respect
    /// to the trial discount factor.
    pub fn residual_derivative(&self) -> T {
        match self {
            BootstrapInstrument::Deposit { rate, accrual, .. }
            | BootstrapInstrument::Fra { rate, accrual, .. }
            | BootstrapInstrument::Future { rate, accrual, .. } => {
                -(T::one() + *rate * *accrual)
            }
            BootstrapInstrument::Swap {
                accrual_factors,
                rate,
                ..
            } => {
                let tau_last = accrual_factors
                    .last()
                    .copied()
                    .unwrap_or_else(T::zero);
                -(T::one() + *rate * tau_last)
            }
        }
    }

    /// Central-difference derivative, for cross-checking the analytic one
    /// or when the residual is composed with a transformed unknown.
    pub fn residual_derivative_fd<C: YieldCurve<T>>(
        &self,
        df: T,
        curve: &C,
        bump: T,
    ) -> Result<T, MarketDataError> {
        let up = self.residual(df + bump, curve)?;
        let down = self.residual(df - bump, curve)?;
        Ok((up - down) / (bump + bump))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pricer_core::market_data::curves::FlatCurve;

    #[test]
    fn deposit_residual_is_zero_at_the_implied_df() {
        let curve = FlatCurve::new(0.0_f64);
        let instr = BootstrapInstrument::Deposit {
            start: 0.0,
            maturity: 0.5,
            rate: 0.03,
            accrual: 0.5,
        };
        // With D(start) = 1, the repricing df is 1 / (1 + r tau).
        let df = 1.0 / (1.0 + 0.03 * 0.5);
        let res = instr.residual(df, &curve).unwrap();
        assert_relative_eq!(res, 0.0, epsilon = 1e-14);
    }

    #[test]
    fn swap_residual_matches_the_par_identity() {
        // Flat 2% curve; a 2y annual swap at the flat-implied par rate
        // must have zero residual at the curve's own 2y df.
        let r = 0.02_f64;
        let curve = FlatCurve::new(r);
        let d1 = (-r * 1.0_f64).exp();
        let d2 = (-r * 2.0_f64).exp();
        let par = (1.0 - d2) / (d1 + d2);
        let instr = BootstrapInstrument::Swap {
            start: 0.0,
            payment_times: vec![1.0, 2.0],
            accrual_factors: vec![1.0, 1.0],
            rate: par,
            target: 1.0,
        };
        let res = instr.residual(d2, &curve).unwrap();
        assert_relative_eq!(res, 0.0, epsilon = 1e-14);
    }

    #[test]
    fn analytic_derivative_agrees_with_central_difference() {
        let curve = FlatCurve::new(0.015_f64);
        let instr = BootstrapInstrument::Swap {
            start: 0.0,
            payment_times: vec![1.0, 2.0, 3.0],
            accrual_factors: vec![1.0, 1.0, 1.0],
            rate: 0.02,
            target: 1.0,
        };
        let df = 0.94;
        let fd = instr.residual_derivative_fd(df, &curve, 1e-6).unwrap();
        assert_relative_eq!(instr.residual_derivative(), fd, epsilon = 1e-8);
    }

    #[test]
    fn maturity_is_the_last_payment_time() {
        let instr: BootstrapInstrument<f64> = BootstrapInstrument::Swap {
            start: 0.0,
            payment_times: vec![0.5, 1.0, 1.5],
            accrual_factors: vec![0.5, 0.5, 0.5],
            rate: 0.02,
            target: 1.0,
        };
        assert_eq!(instr.maturity(), 1.5);
    }
}
