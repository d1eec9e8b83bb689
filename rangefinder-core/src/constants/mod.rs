//! Constants for Rangefinder Core
//!
//! Every calibration number and buffer size used by the crate lives here
//! with its source, so the rest of the code never carries magic numbers.
//!
//! ## Organization
//!
//! - **Sensors**: factory calibration and ADC characteristics
//! - **Buffers**: median window sizing for embedded targets

/// Sensor calibration tables and ADC characteristics.
pub mod sensors;

/// Median window sizing.
pub mod buffers;
