//! Errors surfaced by a generation run.

use crate::config::ConfigError;
use thiserror::Error;
use umbra_core::GridError;

/// Result type alias for generation.
pub type GenerateResult<T> = Result<T, GenerateError>;

/// Errors from [`generate`](crate::generate) and [`Generator`](crate::Generator).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerateError {
    /// The run configuration is invalid.
    #[error("config: {0}")]
    Config(#[from] ConfigError),
    /// A grid operation rejected its input.
    #[error("grid: {0}")]
    Grid(#[from] GridError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_both_sources() {
        let err: GenerateError = GridError::ZeroFactor.into();
        assert_eq!(format!("{err}"), "grid: resample factor must be at least 1");

        let err: GenerateError = ConfigError::ZeroFactor { step: 2 }.into();
        assert!(format!("{err}").starts_with("config: post-process step 2"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
