//! Sensor Specifications and Factory Calibration
//!
//! Defaults for the Sharp GP2Y0A60SZLF analog distance sensor powered at
//! 5V and read through a 10-bit ADC. Other members of the family work with
//! the same pipeline once their own coefficients are supplied.

// ===== ADC =====

/// Full-scale reading of a 10-bit ADC.
///
/// Raw samples are typically in `0..=1023`; nothing in the pipeline
/// enforces this beyond the curve's own domain clamp.
pub const ADC_10BIT_MAX: u16 = 1023;

// ===== GP2Y0A60SZLF (5V) =====

/// Polynomial coefficients mapping a raw sample to millimeters.
///
/// Index `i` is the coefficient of `x^i`. Fitted offline against the
/// sensor's characterization data over [`GP2Y0A60SZLF_5V_DOMAIN_MIN`,
/// `GP2Y0A60SZLF_5V_DOMAIN_MAX`].
pub const GP2Y0A60SZLF_5V_COEFFICIENTS: [f32; 6] =
    [1734.0, -9.005, 2.023E-2, -2.251E-5, 1.167E-8, -2.037E-12];

/// Lowest raw sample the fit is characterized for (far end, ~1.48 m).
pub const GP2Y0A60SZLF_5V_DOMAIN_MIN: u16 = 30;

/// Highest raw sample the fit is characterized for (near end, ~59 mm).
pub const GP2Y0A60SZLF_5V_DOMAIN_MAX: u16 = 875;

// ===== FILTERING =====

/// Distance the median window is pre-filled with (mm).
///
/// A plausible "far / no object" placeholder, so the first medians after
/// power-up lean towards "nothing there" instead of a zero-distance
/// collision.
pub const DEFAULT_FILL_DISTANCE_MM: u16 = 1500;
