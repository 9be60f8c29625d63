//! Foreign exchange derivative instruments.
//!
//! All instruments here are time-based: expiry and payment are year
//! fractions from the valuation date, and amounts are expressed in the
//! two currencies of the pair. The quote convention throughout is
//! domestic-per-foreign, i.e. the strike and spot are units of domestic
//! currency per one unit of foreign currency.
//!
//! # Examples
//!
//! ```
//! use pricer_models::instruments::fx::{Forex, ForexOptionVanilla};
//! use pricer_core::types::{Currency, CurrencyPair};
//!
//! let pair = CurrencyPair::new(Currency::EUR, Currency::USD).unwrap();
//! // Sell 1M EUR against USD at 1.12, settling in one year
//! let underlying = Forex::new(pair, 1.0_f64, 1_000_000.0, 1.12).unwrap();
//! // 9-month long call on that exchange
//! let option = ForexOptionVanilla::new(underlying, 0.75, true, true).unwrap();
//! assert!((option.strike() - 1.12).abs() < 1e-12);
//! ```

mod barrier;
mod digital;
mod forex;
mod ndo;
mod vanilla;

pub use barrier::{Barrier, BarrierDirection, ForexOptionSingleBarrier, KnockType};
pub use digital::{ForexOptionDigital, PaymentCurrency};
pub use forex::Forex;
pub use ndo::ForexNonDeliverableOption;
pub use vanilla::ForexOptionVanilla;
