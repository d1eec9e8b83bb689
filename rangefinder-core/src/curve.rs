//! Polynomial Curve Fit with a Clamped Input Domain
//!
//! ## Overview
//!
//! Analog IR rangers output a voltage that falls roughly with the inverse of
//! distance. The standard way to linearize that response is a polynomial
//! regression of distance against the raw ADC sample, fitted offline. This
//! module evaluates such a fit on the device:
//!
//! ```text
//! y = c0 + c1·x + c2·x² + c3·x³ + c4·x⁴ + c5·x⁵
//! ```
//!
//! ## Clamping
//!
//! A fifth-degree polynomial swings wildly outside the range it was fitted
//! on. Samples are therefore clamped into the characterized [`Domain`]
//! before evaluation, so readings beyond either end saturate to the
//! boundary's distance instead of extrapolating.
//!
//! ```text
//!  distance
//!     │██
//!     │  ██            flat: clamped to min
//!     │    ███
//!     │       ████
//!     │           ██████     flat: clamped to max
//!     └──┬──────────────┬──── raw sample
//!       min            max
//! ```
//!
//! ## Arithmetic
//!
//! Coefficients are `f32` (what a microcontroller FPU, or its soft-float
//! routine, handles natively) and the polynomial is evaluated in Horner
//! form: five multiply-adds, no `pow` calls. The result is truncated toward
//! zero and narrowed with Rust's saturating float-to-int cast, so negative
//! values read as 0 and values beyond `u16::MAX` read as `u16::MAX`. The
//! result is never rounded: the last digit of the distance depends on it.
//!
//! ```rust
//! use rangefinder_core::CurveFit;
//!
//! let curve = CurveFit::default(); // GP2Y0A60SZLF at 5V
//! assert_eq!(curve.evaluate(300), 335);
//!
//! // Below the domain: same as the lower bound
//! assert_eq!(curve.evaluate(5), curve.evaluate(30));
//! ```

use crate::{
    constants::sensors::{
        GP2Y0A60SZLF_5V_COEFFICIENTS, GP2Y0A60SZLF_5V_DOMAIN_MAX, GP2Y0A60SZLF_5V_DOMAIN_MIN,
    },
    errors::{ConfigError, ConfigResult},
};

/// Number of polynomial coefficient slots (degree 5 plus constant term)
pub const MAX_COEFFICIENTS: usize = 6;

/// Range of raw samples a curve is characterized for
///
/// Always satisfies `min <= max`; construction rejects anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "(u16, u16)", into = "(u16, u16)")
)]
pub struct Domain {
    min: u16,
    max: u16,
}

impl Domain {
    /// Create a domain, rejecting `min > max`
    pub const fn new(min: u16, max: u16) -> ConfigResult<Self> {
        if min > max {
            return Err(ConfigError::InvalidDomain { min, max });
        }
        Ok(Self { min, max })
    }

    /// Lower bound (inclusive)
    pub const fn min(&self) -> u16 {
        self.min
    }

    /// Upper bound (inclusive)
    pub const fn max(&self) -> u16 {
        self.max
    }

    /// Check if a raw sample lies inside the domain
    pub const fn contains(&self, raw: u16) -> bool {
        raw >= self.min && raw <= self.max
    }

    /// Clamp a raw sample to the nearest bound
    pub const fn clamp(&self, raw: u16) -> u16 {
        if raw < self.min {
            self.min
        } else if raw > self.max {
            self.max
        } else {
            raw
        }
    }
}

impl Default for Domain {
    fn default() -> Self {
        Self {
            min: GP2Y0A60SZLF_5V_DOMAIN_MIN,
            max: GP2Y0A60SZLF_5V_DOMAIN_MAX,
        }
    }
}

impl TryFrom<(u16, u16)> for Domain {
    type Error = ConfigError;

    fn try_from((min, max): (u16, u16)) -> ConfigResult<Self> {
        Self::new(min, max)
    }
}

impl From<Domain> for (u16, u16) {
    fn from(domain: Domain) -> Self {
        (domain.min, domain.max)
    }
}

/// Fifth-degree polynomial fit from raw sample to millimeters
///
/// Holds exactly [`MAX_COEFFICIENTS`] slots; index `i` is the coefficient
/// of `x^i`. Supplying fewer coefficients zero-fills the rest, which simply
/// lowers the effective degree.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurveFit {
    coefficients: [f32; MAX_COEFFICIENTS],
    domain: Domain,
}

impl Default for CurveFit {
    fn default() -> Self {
        Self::gp2y0a60szlf_5v()
    }
}

impl CurveFit {
    /// Create a curve from up to six coefficients and a domain
    pub fn new(coefficients: &[f32], domain_min: u16, domain_max: u16) -> ConfigResult<Self> {
        Ok(Self {
            coefficients: pad_coefficients(coefficients)?,
            domain: Domain::new(domain_min, domain_max)?,
        })
    }

    /// Factory calibration for the Sharp GP2Y0A60SZLF at 5V
    ///
    /// Covers raw samples 30 to 875 (roughly 1.48 m down to 59 mm).
    pub const fn gp2y0a60szlf_5v() -> Self {
        Self {
            coefficients: GP2Y0A60SZLF_5V_COEFFICIENTS,
            domain: Domain {
                min: GP2Y0A60SZLF_5V_DOMAIN_MIN,
                max: GP2Y0A60SZLF_5V_DOMAIN_MAX,
            },
        }
    }

    /// Replace coefficients and domain together
    ///
    /// Validates everything first; on error nothing changes.
    pub fn set_coefficients(
        &mut self,
        coefficients: &[f32],
        domain_min: u16,
        domain_max: u16,
    ) -> ConfigResult<()> {
        let padded = pad_coefficients(coefficients)?;
        let domain = Domain::new(domain_min, domain_max)?;

        self.coefficients = padded;
        self.domain = domain;
        Ok(())
    }

    /// Replace the domain, keeping the coefficients
    pub fn set_domain(&mut self, domain_min: u16, domain_max: u16) -> ConfigResult<()> {
        self.domain = Domain::new(domain_min, domain_max)?;
        Ok(())
    }

    /// All six coefficient slots, lowest power first
    pub fn coefficients(&self) -> &[f32; MAX_COEFFICIENTS] {
        &self.coefficients
    }

    /// Characterized input range
    pub fn domain(&self) -> Domain {
        self.domain
    }

    /// Polynomial value at the clamped sample, before truncation
    pub fn evaluate_raw(&self, raw: u16) -> f32 {
        let x = f32::from(self.domain.clamp(raw));

        // Horner: ((((c5·x + c4)·x + c3)·x + c2)·x + c1)·x + c0
        self.coefficients
            .iter()
            .rev()
            .fold(0.0, |acc, &c| acc * x + c)
    }

    /// Distance in millimeters for a raw sample
    ///
    /// Truncates toward zero and saturates into `u16` (negative -> 0).
    pub fn evaluate(&self, raw: u16) -> u16 {
        libm::truncf(self.evaluate_raw(raw)) as u16
    }
}

/// Copy up to six finite coefficients into a zero-filled array
fn pad_coefficients(coefficients: &[f32]) -> ConfigResult<[f32; MAX_COEFFICIENTS]> {
    if coefficients.len() > MAX_COEFFICIENTS {
        return Err(ConfigError::TooManyCoefficients {
            given: coefficients.len(),
            max: MAX_COEFFICIENTS,
        });
    }

    if let Some(index) = coefficients.iter().position(|c| !c.is_finite()) {
        return Err(ConfigError::NonFiniteCoefficient { index });
    }

    let mut padded = [0.0; MAX_COEFFICIENTS];
    padded[..coefficients.len()].copy_from_slice(coefficients);
    Ok(padded)
}
