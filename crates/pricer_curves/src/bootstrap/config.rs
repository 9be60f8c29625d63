//! Bootstrap configuration types.
//!
//! Configuration for the sequential bootstrapper, generic over the scalar
//! type so the same settings drive plain `f64` runs and AD-enabled runs.

use num_traits::Float;

/// Interpolation method for bootstrapped curves.
///
/// Determines how discount factors are interpolated between pillar points.
///
/// # Variants
///
/// - `LogLinear`: Linear interpolation on log(DF) - default, arbitrage-free
/// - `LinearZeroRate`: Linear interpolation on zero rates
/// - `FlatForward`: Piecewise constant forward rates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BootstrapInterpolation {
    /// Log-linear interpolation (default).
    ///
    /// Interpolates linearly on log(discount_factor), which is equivalent
    /// to assuming piecewise constant forward rates between pillars.
    /// This is the most common method in practice.
    #[default]
    LogLinear,

    /// Linear interpolation on zero rates.
    ///
    /// Simple linear interpolation on continuously compounded zero rates.
    /// May produce small arbitrage opportunities.
    LinearZeroRate,

    /// Flat forward interpolation.
    ///
    /// Assumes constant forward rate between each pair of pillars.
    /// Produces discontinuous forward rates at pillars.
    FlatForward,
}

/// Configuration for yield curve bootstrapping.
///
/// Provides all parameters needed to control the bootstrapping process,
/// including convergence criteria, interpolation method, and validation
/// options.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`) for AD compatibility
///
/// # Examples
///
/// ```
/// use pricer_curves::bootstrap::BootstrapConfig;
///
/// // Use default configuration
/// let config: BootstrapConfig<f64> = BootstrapConfig::default();
/// assert!(config.tolerance < 1e-10);
///
/// // Custom configuration
/// let config = BootstrapConfig::<f64>::builder()
///     .tolerance(1e-14)
///     .max_iterations(200)
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct BootstrapConfig<T: Float> {
    /// Convergence tolerance for solver.
    ///
    /// The solver stops when the residual is below this value.
    /// Default: 1e-12
    pub tolerance: T,

    /// Maximum number of iterations per pillar.
    ///
    /// If the solver doesn't converge within this limit,
    /// it falls back to Brent method or returns an error.
    /// Default: 100
    pub max_iterations: usize,

    /// Interpolation method for the resulting curve.
    ///
    /// Determines how discount factors are interpolated between pillars.
    /// Default: LogLinear
    pub interpolation: BootstrapInterpolation,

    /// Allow extrapolation beyond pillar range.
    ///
    /// If true, queries outside the pillar range use flat extrapolation.
    /// If false, such queries return an error.
    /// Default: true
    pub allow_extrapolation: bool,

    /// Allow negative rates.
    ///
    /// If true, negative implied zero rates are accepted.
    /// If false, a negative rate at a pillar causes an error.
    /// Default: false
    pub allow_negative_rates: bool,

    /// Maximum supported maturity in years.
    ///
    /// Instruments with maturity beyond this value are rejected.
    /// Default: 50.0
    pub max_maturity: T,
}

impl<T: Float> Default for BootstrapConfig<T> {
    fn default() -> Self {
        Self {
            tolerance: T::from(1e-12).unwrap(),
            max_iterations: 100,
            interpolation: BootstrapInterpolation::LogLinear,
            allow_extrapolation: true,
            allow_negative_rates: false,
            max_maturity: T::from(50.0).unwrap(),
        }
    }
}

impl<T: Float> BootstrapConfig<T> {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration builder for fluent construction.
    pub fn builder() -> BootstrapConfigBuilder<T> {
        BootstrapConfigBuilder::new()
    }

    /// Create a high-precision configuration.
    ///
    /// Uses tighter tolerance (1e-14) and more iterations (500).
    pub fn high_precision() -> Self {
        Self {
            tolerance: T::from(1e-14).unwrap(),
            max_iterations: 500,
            ..Self::default()
        }
    }

    /// Create a fast configuration for interactive use.
    ///
    /// Uses relaxed tolerance (1e-8) and fewer iterations (50).
    pub fn fast() -> Self {
        Self {
            tolerance: T::from(1e-8).unwrap(),
            max_iterations: 50,
            ..Self::default()
        }
    }

    /// Set the convergence tolerance.
    pub fn with_tolerance(mut self, tolerance: T) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the maximum iterations.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the interpolation method.
    pub fn with_interpolation(mut self, interpolation: BootstrapInterpolation) -> Self {
        self.interpolation = interpolation;
        self
    }

    /// Set whether extrapolation is allowed.
    pub fn with_extrapolation(mut self, allow: bool) -> Self {
        self.allow_extrapolation = allow;
        self
    }

    /// Set whether negative rates are allowed.
    pub fn with_negative_rates(mut self, allow: bool) -> Self {
        self.allow_negative_rates = allow;
        self
    }

    /// Set the maximum maturity.
    pub fn with_max_maturity(mut self, max_maturity: T) -> Self {
        self.max_maturity = max_maturity;
        self
    }
}

/// Builder for [`BootstrapConfig`].
///
/// Provides a fluent interface for constructing bootstrap configurations.
#[derive(Debug, Clone)]
pub struct BootstrapConfigBuilder<T: Float> {
    config: BootstrapConfig<T>,
}

impl<T: Float> BootstrapConfigBuilder<T> {
    /// Create a new builder with default values.
    pub fn new() -> Self {
        Self {
            config: BootstrapConfig::default(),
        }
    }

    /// Set the convergence tolerance.
    pub fn tolerance(mut self, tolerance: T) -> Self {
        self.config.tolerance = tolerance;
        self
    }

    /// Set the maximum iterations.
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.config.max_iterations = max_iterations;
        self
    }

    /// Set the interpolation method.
    pub fn interpolation(mut self, interpolation: BootstrapInterpolation) -> Self {
        self.config.interpolation = interpolation;
        self
    }

    /// Set whether extrapolation is allowed.
    pub fn allow_extrapolation(mut self, allow: bool) -> Self {
        self.config.allow_extrapolation = allow;
        self
    }

    /// Set whether negative rates are allowed.
    pub fn allow_negative_rates(mut self, allow: bool) -> Self {
        self.config.allow_negative_rates = allow;
        self
    }

    /// Set the maximum maturity.
    pub fn max_maturity(mut self, max_maturity: T) -> Self {
        self.config.max_maturity = max_maturity;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> BootstrapConfig<T> {
        self.config
    }
}

impl<T: Float> Default for BootstrapConfigBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
