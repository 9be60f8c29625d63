//! Integration tests for module exports.
//!
//! Verify that all public modules and types are correctly exported and
//! accessible via absolute paths.

use chrono::NaiveDate;

/// Test that the types module is accessible via absolute path.
#[test]
fn test_types_module_exports() {
    use pricer_core::types::time::{time_to_maturity_dates, Date};
    use pricer_core::types::{BusinessDayConvention, Currency, CurrencyPair, Tenor};

    let valuation = Date::from_ymd(2024, 1, 15).unwrap();
    let maturity = Date::from_ymd(2025, 1, 15).unwrap();
    let tau = time_to_maturity_dates(valuation, maturity);
    assert!(tau > 0.99 && tau < 1.01);

    let pair = CurrencyPair::new(Currency::EUR, Currency::USD).unwrap();
    assert_eq!(pair.code(), "EUR/USD");

    let spot = valuation.add_tenor(Tenor::months(3));
    assert!(spot > valuation);

    assert_eq!(BusinessDayConvention::ModifiedFollowing.code(), "MF");
}

/// Test that Date converts to and from chrono's NaiveDate.
#[test]
fn test_date_chrono_interop() {
    use pricer_core::types::Date;

    let naive = NaiveDate::from_ymd_opt(2024, 6, 14).unwrap();
    let date = Date::from(naive);
    assert_eq!(date.year(), 2024);
    assert_eq!(date.month(), 6);
    assert_eq!(date.day(), 14);
}

/// Test that the math module is accessible via absolute path.
#[test]
fn test_math_module_exports() {
    use pricer_core::math::distributions::{inverse_norm_cdf, norm_cdf, norm_pdf};
    use pricer_core::math::interpolators::{Interpolator, LinearInterpolator};
    use pricer_core::math::solvers::{BrentSolver, NewtonRaphsonSolver, SolverConfig};

    assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-7);
    assert!(norm_pdf(0.0_f64) > 0.39);
    assert!(inverse_norm_cdf(0.5).unwrap().abs() < 1e-9);

    let interp = LinearInterpolator::<f64>::new(&[0.0, 1.0], &[1.0, 3.0]).unwrap();
    assert!((interp.interpolate(0.5).unwrap() - 2.0).abs() < 1e-12);

    let config: SolverConfig<f64> = SolverConfig::default();
    let newton = NewtonRaphsonSolver::new(config);
    let root = newton
        .find_root(|x| x * x - 4.0, |x| 2.0 * x, 3.0)
        .unwrap();
    assert!((root - 2.0).abs() < 1e-9);

    let brent = BrentSolver::new(config);
    let root = brent.find_root(|x| x * x - 4.0, 0.0, 5.0).unwrap();
    assert!((root - 2.0).abs() < 1e-9);
}

/// Test that the market_data module is accessible via absolute path.
#[test]
fn test_market_data_module_exports() {
    use pricer_core::market_data::curves::{FlatCurve, YieldCurve};
    use pricer_core::market_data::{FxMatrix, SmileDeltaParameters, SmileDeltaTermStructure};
    use pricer_core::types::Currency;

    let curve = FlatCurve::new(0.05_f64);
    let df = curve.discount_factor(1.0).unwrap();
    assert!((df - (-0.05_f64).exp()).abs() < 1e-14);

    let mut matrix = FxMatrix::new();
    matrix
        .add_currency(Currency::EUR, Currency::USD, 1.40)
        .unwrap();
    assert!((matrix.rate(Currency::EUR, Currency::USD).unwrap() - 1.40).abs() < 1e-14);

    let smile =
        SmileDeltaParameters::from_market_quotes(1.0, 0.10, &[0.25], &[0.01], &[0.002]).unwrap();
    let surface = SmileDeltaTermStructure::new(vec![smile]).unwrap();
    let vol = surface.volatility(1.0, 1.40, 1.40).unwrap();
    assert!(vol > 0.05 && vol < 0.15);
}

/// Test that error types are exported and usable with the `?` operator.
#[test]
fn test_error_type_exports() {
    use pricer_core::market_data::{FxMatrixError, MarketDataError, SurfaceError};
    use pricer_core::types::{CurrencyError, DateError, InterpolationError, SolverError, TenorError};

    fn describe(err: &dyn std::error::Error) -> String {
        err.to_string()
    }

    assert!(!describe(&DateError::InvalidDate {
        year: 2024,
        month: 2,
        day: 30
    })
    .is_empty());
    assert!(!describe(&MarketDataError::InvalidMaturity { t: -1.0 }).is_empty());
    assert!(!describe(&SurfaceError::EmptyTermStructure).is_empty());
    assert!(!describe(&FxMatrixError::UnknownCurrency("XXX".into())).is_empty());
    assert!(!describe(&SolverError::MaxIterationsExceeded { iterations: 5 }).is_empty());
    assert!("bad".parse::<pricer_core::types::Tenor>().is_err());
    let _: Result<(), CurrencyError> = Ok(());
    let _: Result<(), InterpolationError> = Ok(());
    let _: Result<(), TenorError> = Ok(());
}
