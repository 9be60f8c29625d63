//! Single-barrier FX option.

use num_traits::Float;

use crate::instruments::error::InstrumentError;
use crate::instruments::fx::ForexOptionVanilla;

/// Side of the spot on which the barrier sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BarrierDirection {
    /// Barrier above the initial spot.
    Up,
    /// Barrier below the initial spot.
    Down,
}

/// Whether touching the barrier activates or extinguishes the option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KnockType {
    /// The option comes alive when the barrier trades.
    In,
    /// The option dies when the barrier trades.
    Out,
}

/// A continuously observed single barrier.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Barrier<T: Float> {
    direction: BarrierDirection,
    knock: KnockType,
    level: T,
}

impl<T: Float> Barrier<T> {
    /// Creates a barrier at the given level, domestic per foreign.
    ///
    /// # Errors
    ///
    /// Returns `InstrumentError::InvalidBarrier` for a non-positive level.
    pub fn new(
        direction: BarrierDirection,
        knock: KnockType,
        level: T,
    ) -> Result<Self, InstrumentError> {
        if level <= T::zero() {
            return Err(InstrumentError::InvalidBarrier {
                level: level.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(Self {
            direction,
            knock,
            level,
        })
    }

    /// Up or down relative to the initial spot.
    #[inline]
    pub fn direction(&self) -> BarrierDirection {
        self.direction
    }

    /// Knock-in or knock-out.
    #[inline]
    pub fn knock(&self) -> KnockType {
        self.knock
    }

    /// Barrier level, domestic per foreign.
    #[inline]
    pub fn level(&self) -> T {
        self.level
    }

    /// The same barrier with the opposite knock type.
    #[inline]
    pub fn opposite_knock(&self) -> Self {
        Self {
            direction: self.direction,
            knock: match self.knock {
                KnockType::In => KnockType::Out,
                KnockType::Out => KnockType::In,
            },
            level: self.level,
        }
    }
}

/// A vanilla FX option with a single knock barrier and a flat rebate.
///
/// The rebate is a domestic-currency amount paid at expiry when the
/// option finishes worthless because of the barrier: for a knock-out it
/// is paid if the barrier trades, for a knock-in if it never does.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForexOptionSingleBarrier<T: Float> {
    underlying: ForexOptionVanilla<T>,
    barrier: Barrier<T>,
    rebate: T,
}

impl<T: Float> ForexOptionSingleBarrier<T> {
    /// Creates a single-barrier option with zero rebate.
    pub fn new(underlying: ForexOptionVanilla<T>, barrier: Barrier<T>) -> Self {
        Self {
            underlying,
            barrier,
            rebate: T::zero(),
        }
    }

    /// Creates a single-barrier option with a flat domestic rebate.
    ///
    /// # Errors
    ///
    /// Returns `InstrumentError::InvalidNotional` for a negative rebate.
    pub fn with_rebate(
        underlying: ForexOptionVanilla<T>,
        barrier: Barrier<T>,
        rebate: T,
    ) -> Result<Self, InstrumentError> {
        if rebate < T::zero() {
            return Err(InstrumentError::InvalidNotional {
                notional: rebate.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(Self {
            underlying,
            barrier,
            rebate,
        })
    }

    /// The vanilla option being knocked.
    #[inline]
    pub fn underlying(&self) -> &ForexOptionVanilla<T> {
        &self.underlying
    }

    /// The barrier.
    #[inline]
    pub fn barrier(&self) -> &Barrier<T> {
        &self.barrier
    }

    /// Flat rebate in domestic currency.
    #[inline]
    pub fn rebate(&self) -> T {
        self.rebate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instruments::fx::Forex;
    use pricer_core::types::{Currency, CurrencyPair};

    fn vanilla() -> ForexOptionVanilla<f64> {
        let pair = CurrencyPair::new(Currency::EUR, Currency::USD).unwrap();
        let fx = Forex::new(pair, 1.0, 1_000_000.0, 1.12).unwrap();
        ForexOptionVanilla::new(fx, 1.0, true, true).unwrap()
    }

    #[test]
    fn barrier_level_must_be_positive() {
        assert!(Barrier::new(BarrierDirection::Up, KnockType::Out, 0.0_f64).is_err());
        assert!(Barrier::new(BarrierDirection::Up, KnockType::Out, 1.25_f64).is_ok());
    }

    #[test]
    fn opposite_knock_flips_in_and_out() {
        let ko = Barrier::new(BarrierDirection::Down, KnockType::Out, 1.05_f64).unwrap();
        let ki = ko.opposite_knock();
        assert_eq!(ki.knock(), KnockType::In);
        assert_eq!(ki.direction(), BarrierDirection::Down);
        assert_eq!(ki.level(), ko.level());
    }

    #[test]
    fn rebate_must_be_non_negative() {
        let barrier = Barrier::new(BarrierDirection::Up, KnockType::Out, 1.25_f64).unwrap();
        assert!(ForexOptionSingleBarrier::with_rebate(vanilla(), barrier, -1.0).is_err());
        let opt = ForexOptionSingleBarrier::with_rebate(vanilla(), barrier, 10_000.0).unwrap();
        assert!((opt.rebate() - 10_000.0).abs() < 1e-9);
    }

    #[test]
    fn default_rebate_is_zero() {
        let barrier = Barrier::new(BarrierDirection::Up, KnockType::In, 1.25_f64).unwrap();
        let opt = ForexOptionSingleBarrier::new(vanilla(), barrier);
        assert_eq!(opt.rebate(), 0.0);
    }
}
