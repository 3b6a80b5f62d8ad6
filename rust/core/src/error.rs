// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for parameter handling.

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while validating or parsing sinter box parameters.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A numeric parameter is outside its allowed range.
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// A length unit name could not be recognised.
    #[error("unknown length unit: {0}")]
    UnknownUnit(String),
}

impl Error {
    /// Shorthand for a value that must be strictly positive.
    pub fn not_positive(name: &'static str, value: f64) -> Self {
        Error::InvalidParameter {
            name,
            value,
            reason: "must be a finite value greater than zero",
        }
    }

    /// Shorthand for a value that must be zero or greater.
    pub fn negative(name: &'static str, value: f64) -> Self {
        Error::InvalidParameter {
            name,
            value,
            reason: "must be a finite value of zero or greater",
        }
    }
}

/// Check that `value` is finite and `> 0`.
#[inline]
pub fn ensure_positive(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(Error::not_positive(name, value))
    }
}

/// Check that `value` is finite and `>= 0`.
#[inline]
pub fn ensure_non_negative(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(Error::negative(name, value))
    }
}
