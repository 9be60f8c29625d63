//! Smile term structure across expiries.

use super::SmileDeltaParameters;
use crate::market_data::error::SurfaceError;
use crate::math::interpolators::{Interpolator, LinearInterpolator};
use num_traits::Float;

/// Ascending-expiry collection of delta-quoted smiles.
///
/// Between two pillar expiries each delta pillar's volatility is
/// interpolated linearly in total variance `σ²t`; beyond the first and
/// last expiry the pillar volatilities are held flat. A strike query
/// first builds the smile at the requested expiry, converts the delta
/// pillars to strikes at the given forward, then interpolates the
/// volatility linearly in strike with flat extrapolation in the wings.
///
/// # Example
///
/// ```
/// use pricer_core::market_data::{SmileDeltaParameters, SmileDeltaTermStructure};
///
/// let smiles = vec![
///     SmileDeltaParameters::from_market_quotes(0.25, 0.10, &[0.25], &[0.01], &[0.002]).unwrap(),
///     SmileDeltaParameters::from_market_quotes(1.00, 0.12, &[0.25], &[0.012], &[0.003]).unwrap(),
/// ];
/// let surface = SmileDeltaTermStructure::new(smiles).unwrap();
///
/// let vol = surface.volatility(0.5, 1.40, 1.38).unwrap();
/// assert!(vol > 0.09 && vol < 0.14);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SmileDeltaTermStructure<T: Float> {
    smiles: Vec<SmileDeltaParameters<T>>,
}

impl<T: Float> SmileDeltaTermStructure<T> {
    /// Build a term structure from smiles with strictly ascending expiries.
    ///
    /// All smiles must share the same delta ladder.
    pub fn new(smiles: Vec<SmileDeltaParameters<T>>) -> Result<Self, SurfaceError> {
        if smiles.is_empty() {
            return Err(SurfaceError::EmptyTermStructure);
        }
        for w in smiles.windows(2) {
            if w[1].expiry() <= w[0].expiry() {
                return Err(SurfaceError::NonAscendingExpiries);
            }
            if w[1].delta() != w[0].delta() {
                return Err(SurfaceError::InconsistentDeltaLadder);
            }
        }
        Ok(Self { smiles })
    }

    /// The pillar smiles in ascending expiry order.
    pub fn smiles(&self) -> &[SmileDeltaParameters<T>] {
        &self.smiles
    }

    /// Expiries of the pillar smiles.
    pub fn expiries(&self) -> Vec<T> {
        self.smiles.iter().map(|s| s.expiry()).collect()
    }

    /// Build the smile at an arbitrary expiry `t`.
    ///
    /// Pillar volatilities interpolate linearly in total variance between
    /// the bracketing expiries; outside the quoted range the nearest
    /// pillar's volatilities apply unchanged (flat extrapolation).
    pub fn smile_for_expiry(&self, t: T) -> Result<SmileDeltaParameters<T>, SurfaceError> {
        if t <= T::zero() {
            return Err(SurfaceError::InvalidExpiry {
                expiry: t.to_f64().unwrap_or(f64::NAN),
            });
        }

        let first = &self.smiles[0];
        let last = &self.smiles[self.smiles.len() - 1];

        if t <= first.expiry() {
            return SmileDeltaParameters::new(
                t,
                first.delta().to_vec(),
                first.volatilities().to_vec(),
            );
        }
        if t >= last.expiry() {
            return SmileDeltaParameters::new(
                t,
                last.delta().to_vec(),
                last.volatilities().to_vec(),
            );
        }

        // Bracketing pillars: expiries are strictly ascending
        let hi = self
            .smiles
            .iter()
            .position(|s| s.expiry() >= t)
            .unwrap_or(self.smiles.len() - 1);
        let lo = hi - 1;
        let (s0, s1) = (&self.smiles[lo], &self.smiles[hi]);
        let (t0, t1) = (s0.expiry(), s1.expiry());
        let weight = (t - t0) / (t1 - t0);

        let vols: Vec<T> = s0
            .volatilities()
            .iter()
            .zip(s1.volatilities())
            .map(|(&v0, &v1)| {
                // Linear in total variance sigma^2 * t
                let var0 = v0 * v0 * t0;
                let var1 = v1 * v1 * t1;
                let var = var0 + (var1 - var0) * weight;
                (var / t).sqrt()
            })
            .collect();

        SmileDeltaParameters::new(t, s0.delta().to_vec(), vols)
    }

    /// Volatility at (expiry, strike) for the given forward.
    pub fn volatility(&self, expiry: T, strike: T, forward: T) -> Result<T, SurfaceError> {
        let smile = self.smile_for_expiry(expiry)?;
        let strikes = smile.strikes(forward)?;
        let interpolator =
            LinearInterpolator::new(&strikes, smile.volatilities())?.with_flat_extrapolation();
        Ok(interpolator.interpolate(strike)?)
    }
}
