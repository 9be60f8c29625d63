//! Yield curve trait definition.

use crate::market_data::error::MarketDataError;
use num_traits::Float;

/// Generic yield curve trait for discount factor and rate calculations.
///
/// All implementations are generic over `T: Float` for AD compatibility,
/// so the curve can be used with both standard floating-point types and
/// dual numbers.
///
/// # Invariants
///
/// - `D(0) = 1` (discount factor at time 0 is 1)
/// - `D(t) > 0` for all `t >= 0`
/// - `D(t1) >= D(t2)` for `t1 <= t2` on arbitrage-free curves
///
/// # Example
///
/// ```
/// use pricer_core::market_data::curves::{FlatCurve, YieldCurve};
///
/// let curve = FlatCurve::new(0.05_f64);
///
/// let df = curve.discount_factor(1.0).unwrap();
/// assert!((df - 0.951229).abs() < 1e-5);
///
/// let rate = curve.zero_rate(1.0).unwrap();
/// assert!((rate - 0.05).abs() < 1e-10);
///
/// let fwd = curve.forward_rate(1.0, 2.0).unwrap();
/// assert!((fwd - 0.05).abs() < 1e-10);
/// ```
pub trait YieldCurve<T: Float> {
    /// Return the discount factor for maturity `t`.
    ///
    /// The discount factor `D(t)` is the present value of 1 unit of
    /// currency received at time `t`.
    ///
    /// # Returns
    ///
    /// * `Ok(D(t))` - Discount factor at time t
    /// * `Err(MarketDataError::InvalidMaturity)` - If t < 0
    fn discount_factor(&self, t: T) -> Result<T, MarketDataError>;

    /// Return the continuously compounded zero rate for maturity `t`.
    ///
    /// Default implementation: `r(t) = -ln(D(t)) / t`, requiring `t > 0`.
    fn zero_rate(&self, t: T) -> Result<T, MarketDataError> {
        let df = self.discount_factor(t)?;
        if t <= T::zero() {
            return Err(MarketDataError::InvalidMaturity {
                t: t.to_f64().unwrap_or(0.0),
            });
        }
        Ok(-df.ln() / t)
    }

    /// Return the continuously compounded forward rate between `t1` and `t2`.
    ///
    /// Default implementation: `f(t1, t2) = -ln(D(t2) / D(t1)) / (t2 - t1)`,
    /// requiring `t2 > t1`.
    fn forward_rate(&self, t1: T, t2: T) -> Result<T, MarketDataError> {
        let df1 = self.discount_factor(t1)?;
        let df2 = self.discount_factor(t2)?;
        let dt = t2 - t1;
        if dt <= T::zero() {
            return Err(MarketDataError::InvalidMaturity {
                t: dt.to_f64().unwrap_or(0.0),
            });
        }
        Ok(-(df2 / df1).ln() / dt)
    }
}
