use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SamplingError {
    #[error("Invalid argument `{argument}` = {value}: {reason}")]
    InvalidArgument {
        argument: &'static str,
        value: f64,
        reason: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, SamplingError>;

impl SamplingError {
    pub(crate) fn invalid(argument: &'static str, value: impl Into<f64>, reason: &'static str) -> Self {
        SamplingError::InvalidArgument {
            argument,
            value: value.into(),
            reason,
        }
    }
}

/// Checks that a radius-like argument is finite and not negative.
pub(crate) fn check_non_negative(argument: &'static str, value: f32) -> Result<f32> {
    if !value.is_finite() {
        Err(SamplingError::invalid(argument, value, "must be finite"))
    } else if value < 0.0 {
        Err(SamplingError::invalid(argument, value, "must not be negative"))
    } else {
        Ok(value)
    }
}

/// Checks that a distance-like argument is finite and strictly positive.
pub(crate) fn check_positive(argument: &'static str, value: f32) -> Result<f32> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(SamplingError::invalid(argument, value, "must be finite and positive"))
    }
}
