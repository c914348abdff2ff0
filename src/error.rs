//! Error type shared by every runner.

/// Errors raised while validating a run configuration.
///
/// Numeric degeneracies met during a run (a `NaN` gradient, an energy
/// that overflows) are not errors; they are reported through the run's
/// result record.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// Returned when a configuration value is outside its valid domain.
    #[error("invalid configuration: {field} {reason}")]
    InvalidConfiguration {
        /// The name of the offending field.
        field: &'static str,
        /// What the value violates.
        reason: String,
    },
}

impl Error {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidConfiguration {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;

/// Fails unless `value` is finite and strictly positive.
pub(crate) fn require_positive(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::invalid(
            field,
            format!("must be finite and positive, got {value}"),
        ));
    }
    Ok(())
}

/// Fails unless `value` is finite.
pub(crate) fn require_finite(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(Error::invalid(
            field,
            format!("must be finite, got {value}"),
        ));
    }
    Ok(())
}
