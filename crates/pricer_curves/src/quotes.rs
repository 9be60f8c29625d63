//! Market quote snapshot keyed by external id.

use crate::error::ConvertError;
use infra_master::id::ExternalId;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading a quote file.
#[derive(Error, Debug)]
pub enum QuoteFileError {
    /// The file could not be read or parsed as CSV.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A row does not have the `id_scheme,id_value,quote` shape.
    #[error("Row {row}: expected id_scheme,id_value,quote, got {found} fields")]
    MalformedRow {
        /// 1-based row number.
        row: usize,
        /// Number of fields actually present.
        found: usize,
    },

    /// A quote value is not a number.
    #[error("Row {row}: quote {value:?} is not a number")]
    InvalidQuote {
        /// 1-based row number.
        row: usize,
        /// The offending field.
        value: String,
    },

    /// An identifier field is empty or malformed.
    #[error("Row {row}: {0}", row = .1)]
    InvalidId(#[source] infra_master::error::IdParseError, usize),
}

/// A flat snapshot of market quotes, `ExternalId -> f64`.
///
/// Node converters read quotes from a bundle; the CLI loads one from a
/// CSV file with `id_scheme,id_value,quote` rows.
///
/// # Example
///
/// ```
/// use pricer_curves::QuoteBundle;
/// use infra_master::id::ExternalId;
///
/// let id = ExternalId::new("TICKER", "USD-DEPOSIT-3M").unwrap();
/// let mut quotes = QuoteBundle::new();
/// quotes.insert(id.clone(), 0.0425);
///
/// assert_eq!(quotes.get(&id), Some(0.0425));
/// ```
#[derive(Debug, Clone, Default)]
pub struct QuoteBundle {
    quotes: HashMap<ExternalId, f64>,
}

impl QuoteBundle {
    /// Create an empty bundle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of quotes in the bundle.
    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    /// Returns true if the bundle holds no quotes.
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Insert or replace the quote under `id`.
    pub fn insert(&mut self, id: ExternalId, quote: f64) {
        self.quotes.insert(id, quote);
    }

    /// The quote under `id`, if present.
    pub fn get(&self, id: &ExternalId) -> Option<f64> {
        self.quotes.get(id).copied()
    }

    /// The quote under `id`, or a [`ConvertError::MissingQuote`].
    pub fn require(&self, id: &ExternalId) -> Result<f64, ConvertError> {
        self.get(id)
            .ok_or_else(|| ConvertError::MissingQuote { id: id.clone() })
    }

    /// Iterate over the stored quotes.
    pub fn iter(&self) -> impl Iterator<Item = (&ExternalId, f64)> {
        self.quotes.iter().map(|(id, q)| (id, *q))
    }

    /// Load a bundle from a CSV file with `id_scheme,id_value,quote` rows.
    ///
    /// A header row is expected and skipped.
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self, QuoteFileError> {
        let reader = csv::Reader::from_path(path)?;
        Self::from_csv(reader)
    }

    /// Load a bundle from an already-open CSV reader.
    pub fn from_csv_reader(reader: impl Read) -> Result<Self, QuoteFileError> {
        Self::from_csv(csv::Reader::from_reader(reader))
    }

    fn from_csv<R: Read>(mut reader: csv::Reader<R>) -> Result<Self, QuoteFileError> {
        let mut bundle = Self::new();
        for (i, record) in reader.records().enumerate() {
            let row = i + 1;
            let record = record?;
            if record.len() != 3 {
                return Err(QuoteFileError::MalformedRow {
                    row,
                    found: record.len(),
                });
            }
            let id = ExternalId::new(&record[0], &record[1])
                .map_err(|e| QuoteFileError::InvalidId(e, row))?;
            let quote: f64 = record[2]
                .trim()
                .parse()
                .map_err(|_| QuoteFileError::InvalidQuote {
                    row,
                    value: record[2].to_string(),
                })?;
            bundle.insert(id, quote);
        }
        Ok(bundle)
    }
}
