//! Configuration Errors
//!
//! ## Scope
//!
//! The measurement path never fails: raw samples are clamped, missing
//! coefficients are zero and disabled filtering is a plain bypass. The only
//! fallible operations are the ones that *configure* a curve, a domain or a
//! median window, and those are rejected before any state is touched, so a
//! failed call leaves the previous configuration in effect.
//!
//! Errors are small `Copy` values with no heap data, matching the rest of
//! the crate's `no_std` footprint.
//!
//! ```rust
//! use rangefinder_core::{CurveFit, ConfigError};
//!
//! let mut curve = CurveFit::default();
//! match curve.set_domain(900, 30) {
//!     Err(ConfigError::InvalidDomain { min, max }) => {
//!         assert_eq!((min, max), (900, 30));
//!     }
//!     _ => unreachable!(),
//! }
//! // Still the factory domain
//! assert_eq!(curve.domain().min(), 30);
//! ```

use thiserror_no_std::Error;

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Rejected configuration
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Domain lower bound above its upper bound
    #[error("Invalid domain: min {min} exceeds max {max}")]
    InvalidDomain {
        /// Requested lower bound
        min: u16,
        /// Requested upper bound
        max: u16,
    },

    /// More coefficients than the polynomial has slots for
    #[error("Too many coefficients: got {given}, at most {max} supported")]
    TooManyCoefficients {
        /// Number of coefficients supplied
        given: usize,
        /// Number of coefficient slots
        max: usize,
    },

    /// NaN or infinite coefficient
    #[error("Coefficient {index} is not a finite number")]
    NonFiniteCoefficient {
        /// Position of the offending coefficient (power of x)
        index: usize,
    },

    /// Median window of zero slots
    #[error("Median window must hold at least one sample")]
    InvalidWindow,

    /// Median window larger than its storage
    #[error("Median window of {requested} exceeds storage for {max} samples")]
    WindowTooLarge {
        /// Requested window capacity
        requested: usize,
        /// Compile-time storage bound
        max: usize,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConfigError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InvalidDomain { min, max } =>
                defmt::write!(fmt, "Domain min {} > max {}", min, max),
            Self::TooManyCoefficients { given, max } =>
                defmt::write!(fmt, "{} coefficients, max {}", given, max),
            Self::NonFiniteCoefficient { index } =>
                defmt::write!(fmt, "Coefficient {} not finite", index),
            Self::InvalidWindow =>
                defmt::write!(fmt, "Empty median window"),
            Self::WindowTooLarge { requested, max } =>
                defmt::write!(fmt, "Window {} exceeds {}", requested, max),
        }
    }
}
