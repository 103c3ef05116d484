use std::sync::{LazyLock, RwLock};

use thiserror::Error;

pub static CONFIGURATION: LazyLock<RwLock<Configuration>> =
    LazyLock::new(|| RwLock::new(Configuration::default()));

/// Process wide defaults used by the analysis functions
#[derive(Clone, Debug)]
pub struct Configuration {
    /// Relative tolerance used to decide whether a value is zero during row reduction
    ///
    /// # Note:
    /// The threshold actually applied to a matrix is `tolerance * max(1, largest |entry|)`,
    /// see [`crate::linalg::rref::effective_tolerance`]
    pub tolerance: f64,
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration { tolerance: 1e-10 }
    }
}

/// Read the currently configured zero tolerance
pub fn default_tolerance() -> f64 {
    match CONFIGURATION.read() {
        Ok(config) => config.tolerance,
        Err(poisoned) => poisoned.into_inner().tolerance,
    }
}

/// Errors raised when updating the configuration
#[derive(Error, Debug, PartialEq)]
pub enum ConfigurationError {
    #[error("Tolerance must be finite and positive, got {0}")]
    InvalidTolerance(f64),
}

/// Replace the configured zero tolerance
///
/// # Returns
/// - `Err(ConfigurationError::InvalidTolerance)` if `tolerance` is not finite or not positive,
///   the configuration is then left unchanged
pub fn set_tolerance(tolerance: f64) -> Result<(), ConfigurationError> {
    if !tolerance.is_finite() || tolerance <= 0f64 {
        return Err(ConfigurationError::InvalidTolerance(tolerance));
    }
    match CONFIGURATION.write() {
        Ok(mut config) => config.tolerance = tolerance,
        Err(poisoned) => poisoned.into_inner().tolerance = tolerance,
    }
    Ok(())
}

#[cfg(test)]
mod configuration_tests {
    use super::*;

    #[test]
    fn default_configuration() {
        let config = Configuration::default();
        assert!((config.tolerance - 1e-10).abs() < 1e-25);
    }

    #[test]
    fn rejects_invalid_tolerance() {
        let before = default_tolerance();
        for tolerance in [0.0, -1e-10, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                set_tolerance(tolerance),
                Err(ConfigurationError::InvalidTolerance(_))
            ));
        }
        assert_eq!(default_tolerance().to_bits(), before.to_bits());
    }
}
