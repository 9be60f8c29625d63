//! Single-expiry smile quoted by delta.

use crate::market_data::error::SurfaceError;
use crate::math::distributions::inverse_norm_cdf;
use num_traits::Float;

/// One expiry's volatility smile described by delta quotes.
///
/// The smile is built from the market quoting convention: an at-the-money
/// volatility plus risk reversals and butterflies (strangles) at a ladder
/// of deltas `Δ₁ < Δ₂ < … < 0.5`:
///
/// ```text
/// σ_put(Δ)  = atm + bf(Δ) − rr(Δ) / 2
/// σ_call(Δ) = atm + bf(Δ) + rr(Δ) / 2
/// ```
///
/// Volatilities are stored in strike order: puts by ascending delta, the
/// at-the-money point, then calls by descending delta. For n deltas that
/// gives 2n + 1 pillars.
///
/// Deltas are forward deltas without premium adjustment; the
/// at-the-money convention is the delta-neutral straddle.
///
/// # Example
///
/// ```
/// use pricer_core::market_data::SmileDeltaParameters;
///
/// // 25Δ ladder: atm 10%, risk reversal 1%, strangle 0.2%
/// let smile = SmileDeltaParameters::<f64>::from_market_quotes(
///     1.0, 0.10, &[0.25], &[0.010], &[0.002],
/// ).unwrap();
///
/// // [25Δ put, atm, 25Δ call]
/// assert_eq!(smile.volatilities().len(), 3);
/// assert!((smile.volatilities()[0] - 0.097).abs() < 1e-12);
/// assert!((smile.volatilities()[2] - 0.107).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SmileDeltaParameters<T: Float> {
    /// Time to expiry in years
    expiry: T,
    /// Call/put delta ladder, strictly ascending in (0, 0.5)
    delta: Vec<T>,
    /// Volatilities in strike order: puts ascending Δ, atm, calls descending Δ
    volatility: Vec<T>,
}

impl<T: Float> SmileDeltaParameters<T> {
    /// Build a smile directly from a delta ladder and pillar volatilities.
    ///
    /// `volatility` must hold `2 * delta.len() + 1` entries in strike order.
    pub fn new(expiry: T, delta: Vec<T>, volatility: Vec<T>) -> Result<Self, SurfaceError> {
        if expiry <= T::zero() {
            return Err(SurfaceError::InvalidExpiry {
                expiry: expiry.to_f64().unwrap_or(f64::NAN),
            });
        }
        let expected = 2 * delta.len() + 1;
        if volatility.len() != expected {
            return Err(SurfaceError::MismatchedLengths {
                what: "volatility",
                got: volatility.len(),
                expected,
            });
        }
        Self::check_delta_ladder(&delta)?;
        for &vol in &volatility {
            if vol <= T::zero() {
                return Err(SurfaceError::InvalidVolatility {
                    volatility: vol.to_f64().unwrap_or(f64::NAN),
                });
            }
        }
        Ok(Self {
            expiry,
            delta,
            volatility,
        })
    }

    /// Build a smile from market quotes: ATM volatility, risk reversals and
    /// butterflies at each delta of the ladder.
    pub fn from_market_quotes(
        expiry: T,
        atm: T,
        delta: &[T],
        risk_reversal: &[T],
        butterfly: &[T],
    ) -> Result<Self, SurfaceError> {
        let n = delta.len();
        if risk_reversal.len() != n {
            return Err(SurfaceError::MismatchedLengths {
                what: "risk_reversal",
                got: risk_reversal.len(),
                expected: n,
            });
        }
        if butterfly.len() != n {
            return Err(SurfaceError::MismatchedLengths {
                what: "butterfly",
                got: butterfly.len(),
                expected: n,
            });
        }

        let half = T::from(0.5).unwrap();
        let mut volatility = vec![T::zero(); 2 * n + 1];
        volatility[n] = atm;
        for i in 0..n {
            // Put pillar (ascending delta from the left)
            volatility[i] = atm + butterfly[i] - risk_reversal[i] * half;
            // Matching call pillar mirrored from the right
            volatility[2 * n - i] = atm + butterfly[i] + risk_reversal[i] * half;
        }

        Self::new(expiry, delta.to_vec(), volatility)
    }

    fn check_delta_ladder(delta: &[T]) -> Result<(), SurfaceError> {
        let half = T::from(0.5).unwrap();
        for window in delta.windows(2) {
            if window[1] <= window[0] {
                return Err(SurfaceError::InvalidDeltaLadder);
            }
        }
        for &d in delta {
            if d <= T::zero() || d >= half {
                return Err(SurfaceError::InvalidDelta {
                    delta: d.to_f64().unwrap_or(f64::NAN),
                });
            }
        }
        Ok(())
    }

    /// Time to expiry in years.
    pub fn expiry(&self) -> T {
        self.expiry
    }

    /// The delta ladder (ascending, shared between puts and calls).
    pub fn delta(&self) -> &[T] {
        &self.delta
    }

    /// Pillar volatilities in strike order.
    pub fn volatilities(&self) -> &[T] {
        &self.volatility
    }

    /// The at-the-money volatility.
    pub fn atm_volatility(&self) -> T {
        self.volatility[self.delta.len()]
    }

    /// Risk reversal recovered from the stored pillar volatilities:
    /// `σ_call(Δᵢ) − σ_put(Δᵢ)`.
    pub fn risk_reversal(&self, i: usize) -> T {
        let n = self.delta.len();
        self.volatility[2 * n - i] - self.volatility[i]
    }

    /// Butterfly recovered from the stored pillar volatilities:
    /// `(σ_call(Δᵢ) + σ_put(Δᵢ)) / 2 − atm`.
    pub fn butterfly(&self, i: usize) -> T {
        let n = self.delta.len();
        let half = T::from(0.5).unwrap();
        (self.volatility[2 * n - i] + self.volatility[i]) * half - self.atm_volatility()
    }

    /// Convert the delta pillars to strikes for the given forward.
    ///
    /// Uses the forward-delta inversion
    /// `K = F · exp(−ω · Φ⁻¹(ω·Δ_signed) · σ√T + σ²T/2)` with ω = +1 for
    /// calls and −1 for puts (where the signed put delta is −Δ), and the
    /// delta-neutral straddle strike `F · exp(σ_atm²T/2)` at the money.
    /// Strikes come out in the same (ascending) order as the volatilities.
    pub fn strikes(&self, forward: T) -> Result<Vec<T>, SurfaceError> {
        let n = self.delta.len();
        let half = T::from(0.5).unwrap();
        let sqrt_t = self.expiry.sqrt();
        let mut strikes = vec![T::zero(); 2 * n + 1];

        for i in 0..n {
            let d = self.delta[i].to_f64().ok_or(SurfaceError::InvalidDelta {
                delta: f64::NAN,
            })?;
            let z = T::from(
                inverse_norm_cdf(d).ok_or(SurfaceError::InvalidDelta { delta: d })?,
            )
            .unwrap();

            // Put: d1 = −Φ⁻¹(Δ), so K = F·exp(Φ⁻¹(Δ)·σ√T + σ²T/2)
            let sigma_put = self.volatility[i];
            strikes[i] =
                forward * (z * sigma_put * sqrt_t + sigma_put * sigma_put * self.expiry * half).exp();

            // Call: d1 = Φ⁻¹(Δ), so K = F·exp(−Φ⁻¹(Δ)·σ√T + σ²T/2)
            let sigma_call = self.volatility[2 * n - i];
            strikes[2 * n - i] = forward
                * (-z * sigma_call * sqrt_t + sigma_call * sigma_call * self.expiry * half).exp();
        }

        let atm = self.atm_volatility();
        strikes[n] = forward * (atm * atm * self.expiry * half).exp();

        Ok(strikes)
    }
}
