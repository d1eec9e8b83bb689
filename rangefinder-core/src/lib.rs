//! Distance ranging core for analog infrared sensors
//!
//! Turns raw ADC samples from a Sharp-style IR ranger into millimeters with
//! a clamped polynomial fit, then smooths the result with a running median.
//! Designed for microcontroller polling loops.
//!
//! Key constraints:
//! - No heap allocation, all buffers inline
//! - The measurement path never fails; only configuration is fallible
//! - Single-threaded, blocking, `&mut self` per query
//!
//! ```no_run
//! use rangefinder_core::DistanceSensor;
//!
//! # fn adc_read() -> u16 { 512 }
//! let mut sensor = DistanceSensor::new(|| adc_read(), 5)?;
//!
//! loop {
//!     let mm = sensor.read_distance();
//!     if mm < 100 {
//!         // Something close ahead
//!     }
//! }
//! # Ok::<(), rangefinder_core::ConfigError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

// Logging shims: `log` on hosted builds, `defmt` on embedded, nothing otherwise
#[cfg(feature = "log")]
macro_rules! log_trace {
    ($($arg:tt)*) => { log::trace!($($arg)*) };
}

#[cfg(all(feature = "defmt", not(feature = "log")))]
macro_rules! log_trace {
    ($($arg:tt)*) => { defmt::trace!($($arg)*) };
}

#[cfg(not(any(feature = "log", feature = "defmt")))]
macro_rules! log_trace {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(all(feature = "defmt", not(feature = "log")))]
macro_rules! log_debug {
    ($($arg:tt)*) => { defmt::debug!($($arg)*) };
}

#[cfg(not(any(feature = "log", feature = "defmt")))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(all(feature = "defmt", not(feature = "log")))]
macro_rules! log_warn {
    ($($arg:tt)*) => { defmt::warn!($($arg)*) };
}

#[cfg(not(any(feature = "log", feature = "defmt")))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

pub mod constants;
pub mod curve;
pub mod errors;
pub mod filter;
pub mod sensor;
pub mod source;

// Public API
pub use curve::{CurveFit, Domain, MAX_COEFFICIENTS};
pub use errors::{ConfigError, ConfigResult};
pub use filter::MedianFilter;
pub use sensor::{DistanceSensor, Measurement};
pub use source::{MockSource, SampleSource};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
