//! Single-barrier FX option pricing with the Black model.
//!
//! The kernel is the closed-form decomposition of the barrier price
//! into the four building blocks `A` (vanilla), `B` (vanilla paying at
//! the barrier strike), `C` and `D` (the reflected images). The
//! knock-in price is the combination picked by the barrier direction,
//! option type and the ordering of strike and barrier; the knock-out
//! follows from in-out parity, `KI + KO = vanilla`, which the
//! decomposition satisfies exactly.
//!
//! The rebate is a flat domestic amount paid at expiry: for a knock-out
//! when the barrier trades, for a knock-in when it never does. Domestic
//! and foreign continuously compounded rates are implied from the
//! discount factors at the payment time; the volatility is read from
//! the smile at the option strike.

use num_traits::Float;
use pricer_core::math::distributions::norm_cdf;
use pricer_models::instruments::fx::{
    BarrierDirection, ForexOptionSingleBarrier, KnockType,
};

use crate::amount::CurrencyAmount;
use crate::error::PricingError;
use crate::provider::BlackForexSmileProvider;

struct BlockInputs<T: Float> {
    spot: T,
    strike: T,
    barrier: T,
    /// Domestic rate, discounting.
    rate: T,
    /// `rate_domestic - rate_foreign`.
    cost_of_carry: T,
    expiry: T,
    volatility: T,
    /// `+1` call, `-1` put.
    phi: T,
    /// `+1` down barrier, `-1` up barrier.
    eta: T,
}

impl<T: Float> BlockInputs<T> {
    fn mu(&self) -> T {
        let half = T::from(0.5).unwrap();
        (self.cost_of_carry - half * self.volatility * self.volatility)
            / (self.volatility * self.volatility)
    }

    fn sigma_sqrt_t(&self) -> T {
        self.volatility * self.expiry.sqrt()
    }

    /// `φS e^{(b−r)t} N(φx) − φK e^{−rt} N(φ(x−σ√t))` with an optional
    /// image factor `(H/S)^{2(μ+1)}` on the spot leg and `(H/S)^{2μ}`
    /// on the strike leg.
    fn block(&self, x: T, signed_by: T, image: bool) -> T {
        let sst = self.sigma_sqrt_t();
        let growth = ((self.cost_of_carry - self.rate) * self.expiry).exp();
        let discount = (-self.rate * self.expiry).exp();
        let (spot_factor, strike_factor) = if image {
            let ratio = self.barrier / self.spot;
            let two = T::from(2.0).unwrap();
            let mu = self.mu();
            (
                ratio.powf(two * (mu + T::one())),
                ratio.powf(two * mu),
            )
        } else {
            (T::one(), T::one())
        };
        self.phi * self.spot * growth * spot_factor * norm_cdf(signed_by * x)
            - self.phi
                * self.strike
                * discount
                * strike_factor
                * norm_cdf(signed_by * (x - sst))
    }

    fn a(&self) -> T {
        let x1 = (self.spot / self.strike).ln() / self.sigma_sqrt_t()
            + (T::one() + self.mu()) * self.sigma_sqrt_t();
        self.block(x1, self.phi, false)
    }

    fn b(&self) -> T {
        let x2 = (self.spot / self.barrier).ln() / self.sigma_sqrt_t()
            + (T::one() + self.mu()) * self.sigma_sqrt_t();
        self.block(x2, self.phi, false)
    }

    fn c(&self) -> T {
        let y1 = (self.barrier * self.barrier / (self.spot * self.strike)).ln()
            / self.sigma_sqrt_t()
            + (T::one() + self.mu()) * self.sigma_sqrt_t();
        self.block(y1, self.eta, true)
    }

    fn d(&self) -> T {
        let y2 = (self.barrier / self.spot).ln() / self.sigma_sqrt_t()
            + (T::one() + self.mu()) * self.sigma_sqrt_t();
        self.block(y2, self.eta, true)
    }

    /// Risk-neutral probability the barrier never trades before expiry.
    fn survival_probability(&self) -> T {
        let sst = self.sigma_sqrt_t();
        let mu = self.mu();
        let x2m = (self.spot / self.barrier).ln() / sst + mu * sst;
        let y2m = (self.barrier / self.spot).ln() / sst + mu * sst;
        let two = T::from(2.0).unwrap();
        norm_cdf(self.eta * x2m)
            - (self.barrier / self.spot).powf(two * mu) * norm_cdf(self.eta * y2m)
    }

    fn knock_in(&self) -> T {
        let strike_above = self.strike >= self.barrier;
        let down = self.eta > T::zero();
        let call = self.phi > T::zero();
        match (down, call, strike_above) {
            (true, true, true) => self.c(),
            (true, true, false) => self.a() - self.b() + self.d(),
            (false, true, true) => self.a(),
            (false, true, false) => self.b() - self.c() + self.d(),
            (true, false, true) => self.b() - self.c() + self.d(),
            (true, false, false) => self.a(),
            (false, false, true) => self.a() - self.b() + self.d(),
            (false, false, false) => self.c(),
        }
    }
}

/// Price per unit of foreign notional of a knocked option, discounting
/// included, with the rebate per unit alongside.
///
/// `rebate` is already divided by the foreign notional.
fn barrier_price<T: Float>(
    inputs: &BlockInputs<T>,
    knock: KnockType,
    rebate: T,
) -> T {
    let discount = (-inputs.rate * inputs.expiry).exp();
    let already_hit = match inputs.eta > T::zero() {
        true => inputs.spot <= inputs.barrier,
        false => inputs.spot >= inputs.barrier,
    };
    let intrinsic_or_expired = inputs.expiry <= T::zero() || inputs.volatility <= T::zero();

    if already_hit {
        return match knock {
            KnockType::In => inputs.a(),
            KnockType::Out => rebate * discount,
        };
    }
    if intrinsic_or_expired {
        let intrinsic = (inputs.phi * (inputs.spot - inputs.strike)).max(T::zero());
        return match knock {
            KnockType::In => rebate * discount,
            KnockType::Out => intrinsic * discount,
        };
    }

    let knock_in = inputs.knock_in();
    let survival = inputs.survival_probability();
    match knock {
        KnockType::In => knock_in + rebate * discount * survival,
        KnockType::Out => inputs.a() - knock_in + rebate * discount * (T::one() - survival),
    }
}

/// Present value of the barrier option, in the domestic currency.
pub fn present_value<T: Float>(
    option: &ForexOptionSingleBarrier<T>,
    data: &BlackForexSmileProvider<T>,
) -> Result<CurrencyAmount<T>, PricingError> {
    let underlying = option.underlying();
    data.check_pair(underlying.underlying().currency_pair())?;

    let payment_time = underlying.payment_time();
    if payment_time <= T::zero() {
        return Err(PricingError::invalid_parameter(
            "barrier pricing requires a strictly positive payment time",
        ));
    }
    let df_domestic = data.discount_factor_domestic(payment_time)?;
    let df_foreign = data.discount_factor_foreign(payment_time)?;
    let spot = data.spot()?;
    let forward = spot * df_foreign / df_domestic;

    let rate_domestic = -df_domestic.ln() / payment_time;
    let rate_foreign = -df_foreign.ln() / payment_time;
    let volatility = data.volatility(underlying.expiry_time(), underlying.strike(), forward)?;

    let notional = underlying.underlying().notional_foreign().abs();
    let rebate_per_unit = option.rebate() / notional;

    let inputs = BlockInputs {
        spot,
        strike: underlying.strike(),
        barrier: option.barrier().level(),
        rate: rate_domestic,
        cost_of_carry: rate_domestic - rate_foreign,
        expiry: underlying.expiry_time(),
        volatility,
        phi: if underlying.is_call() { T::one() } else { -T::one() },
        eta: match option.barrier().direction() {
            BarrierDirection::Down => T::one(),
            BarrierDirection::Up => -T::one(),
        },
    };

    let price = barrier_price(&inputs, option.barrier().knock(), rebate_per_unit);
    Ok(CurrencyAmount::new(
        underlying.underlying().domestic_currency(),
        price * notional * underlying.sign(),
    ))
}
