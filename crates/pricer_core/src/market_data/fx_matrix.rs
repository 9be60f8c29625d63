//! Checked FX cross-rate matrix.
//!
//! An [`FxMatrix`] holds spot exchange rates between a connected set of
//! currencies. Currencies are added one pair at a time; each new pair must
//! link exactly one new currency to the existing set, and the matrix fills
//! in every cross rate by triangulation at insertion time. Direct pairs can
//! later be revalued with [`update_rate`](FxMatrix::update_rate), after
//! which [`check_consistency`](FxMatrix::check_consistency) verifies that
//! every currency triangle still multiplies out to 1 within tolerance.

use crate::market_data::error::FxMatrixError;
use crate::types::Currency;
use std::collections::{HashMap, HashSet};

/// Currency-indexed table of FX cross rates.
///
/// Rates are stored as `rates[i][j]` = units of currency `j` received for
/// one unit of currency `i`, so `rate(EUR, USD) = 1.40` means
/// 1 EUR = 1.40 USD.
///
/// # Example
///
/// ```
/// use pricer_core::market_data::FxMatrix;
/// use pricer_core::types::Currency;
///
/// let mut matrix = FxMatrix::new();
/// matrix.add_currency(Currency::EUR, Currency::USD, 1.40).unwrap();
/// matrix.add_currency(Currency::GBP, Currency::EUR, 1.20).unwrap();
///
/// // Triangulated cross rate: GBP/USD = 1.20 * 1.40
/// let rate = matrix.rate(Currency::GBP, Currency::USD).unwrap();
/// assert!((rate - 1.68).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FxMatrix {
    /// Currencies in insertion order
    currencies: Vec<Currency>,
    /// Currency to matrix index
    index: HashMap<Currency, usize>,
    /// Full cross-rate matrix, `rates[i][j]` = units of j per one i
    rates: Vec<Vec<f64>>,
    /// Pairs added directly through `add_currency`, in their stored orientation
    direct: HashSet<(Currency, Currency)>,
}

impl FxMatrix {
    /// Create an empty matrix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of currencies in the matrix.
    pub fn len(&self) -> usize {
        self.currencies.len()
    }

    /// Returns true if no currency has been added yet.
    pub fn is_empty(&self) -> bool {
        self.currencies.is_empty()
    }

    /// Currencies currently in the matrix, in insertion order.
    pub fn currencies(&self) -> &[Currency] {
        &self.currencies
    }

    /// Returns true if `currency` is in the matrix.
    pub fn contains(&self, currency: Currency) -> bool {
        self.index.contains_key(&currency)
    }

    /// Add a currency pair with `rate` units of `quote` per one `base`.
    ///
    /// The first call seeds the matrix with both currencies. Every later
    /// call must introduce exactly one new currency: a pair between two
    /// known currencies is rejected (use [`update_rate`](Self::update_rate))
    /// and a pair between two unknown currencies would leave the matrix
    /// disconnected.
    pub fn add_currency(
        &mut self,
        base: Currency,
        quote: Currency,
        rate: f64,
    ) -> Result<(), FxMatrixError> {
        if base == quote {
            return Err(FxMatrixError::IdenticalCurrencies(base.code().to_string()));
        }
        if !(rate.is_finite() && rate > 0.0) {
            return Err(FxMatrixError::InvalidRate {
                base: base.code().to_string(),
                quote: quote.code().to_string(),
                rate,
            });
        }

        let base_known = self.contains(base);
        let quote_known = self.contains(quote);

        match (base_known, quote_known) {
            (false, false) if self.is_empty() => {
                self.currencies = vec![base, quote];
                self.index = HashMap::from([(base, 0), (quote, 1)]);
                self.rates = vec![vec![1.0, rate], vec![1.0 / rate, 1.0]];
            }
            (false, false) => {
                return Err(FxMatrixError::DisconnectedPair {
                    base: base.code().to_string(),
                    quote: quote.code().to_string(),
                });
            }
            (true, true) => {
                return Err(FxMatrixError::PairAlreadyPresent {
                    base: base.code().to_string(),
                    quote: quote.code().to_string(),
                });
            }
            (false, true) => {
                // New base: rates[base][k] = rate * rates[quote][k]
                let anchor = self.index[&quote];
                self.push_currency(base, |rates, k| rate * rates[anchor][k]);
            }
            (true, false) => {
                // New quote: rates[quote][k] = rates[base][k] / rate
                let anchor = self.index[&base];
                self.push_currency(quote, |rates, k| rates[anchor][k] / rate);
            }
        }

        self.direct.insert((base, quote));
        Ok(())
    }

    /// Append `new_ccy` with its row derived from existing rows.
    fn push_currency<F>(&mut self, new_ccy: Currency, row_value: F)
    where
        F: Fn(&[Vec<f64>], usize) -> f64,
    {
        let n = self.currencies.len();
        let new_row: Vec<f64> = (0..n).map(|k| row_value(&self.rates, k)).collect();
        for (k, row) in self.rates.iter_mut().enumerate() {
            row.push(1.0 / new_row[k]);
        }
        let mut new_row = new_row;
        new_row.push(1.0);
        self.rates.push(new_row);
        self.index.insert(new_ccy, n);
        self.currencies.push(new_ccy);
    }

    /// Exchange rate: units of `quote` per one unit of `base`.
    ///
    /// Identical currencies return 1.0. Cross rates between any two stored
    /// currencies are available, triangulated at insertion time.
    pub fn rate(&self, base: Currency, quote: Currency) -> Result<f64, FxMatrixError> {
        if base == quote {
            return Ok(1.0);
        }
        let i = *self
            .index
            .get(&base)
            .ok_or_else(|| FxMatrixError::UnknownCurrency(base.code().to_string()))?;
        let j = *self
            .index
            .get(&quote)
            .ok_or_else(|| FxMatrixError::UnknownCurrency(quote.code().to_string()))?;
        Ok(self.rates[i][j])
    }

    /// Revalue a directly-added pair.
    ///
    /// Only pairs previously added through [`add_currency`](Self::add_currency),
    /// in the same orientation, can be updated. The update does not propagate
    /// to triangulated cross rates; run
    /// [`check_consistency`](Self::check_consistency) afterwards if the matrix
    /// must stay coherent.
    pub fn update_rate(
        &mut self,
        base: Currency,
        quote: Currency,
        rate: f64,
    ) -> Result<(), FxMatrixError> {
        if !(rate.is_finite() && rate > 0.0) {
            return Err(FxMatrixError::InvalidRate {
                base: base.code().to_string(),
                quote: quote.code().to_string(),
                rate,
            });
        }
        if !self.direct.contains(&(base, quote)) {
            return Err(FxMatrixError::PairNotFound {
                base: base.code().to_string(),
                quote: quote.code().to_string(),
            });
        }
        let i = self.index[&base];
        let j = self.index[&quote];
        self.rates[i][j] = rate;
        self.rates[j][i] = 1.0 / rate;
        Ok(())
    }

    /// Verify every currency triangle multiplies out to 1 within `tolerance`.
    ///
    /// For all currency triples (a, b, c) the product
    /// `rate(a,b) * rate(b,c) * rate(c,a)` must not deviate from 1 by more
    /// than `tolerance`. Returns the first offending triangle.
    pub fn check_consistency(&self, tolerance: f64) -> Result<(), FxMatrixError> {
        let n = self.currencies.len();
        for i in 0..n {
            for j in (i + 1)..n {
                for k in (j + 1)..n {
                    let product = self.rates[i][j] * self.rates[j][k] * self.rates[k][i];
                    if (product - 1.0).abs() > tolerance {
                        return Err(FxMatrixError::Inconsistent {
                            a: self.currencies[i].code().to_string(),
                            b: self.currencies[j].code().to_string(),
                            c: self.currencies[k].code().to_string(),
                            product,
                            tolerance,
                        });
                    }
                }
            }
        }
        Ok(())
    }
}
