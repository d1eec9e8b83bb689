//! Distance Sensor: Sample, Curve, Median
//!
//! ## Pipeline
//!
//! Each query runs the same three steps:
//!
//! ```text
//! SampleSource ──raw──▶ CurveFit ──mm──▶ MedianFilter ──mm──▶ caller
//!                      (clamp, evaluate)  (only if filter_size > 1)
//! ```
//!
//! The only state that changes between queries is the median filter's ring.
//! With filtering disabled every query is a pure function of the raw sample
//! and the current curve.
//!
//! ## Defaults
//!
//! A freshly constructed sensor uses the GP2Y0A60SZLF 5V factory curve over
//! raw samples [30, 875] and a median window pre-filled with 1500 mm, so the
//! first few filtered readings report "far" rather than a bogus zero.
//!
//! ```rust
//! use rangefinder_core::{DistanceSensor, MockSource};
//!
//! let mut sensor = DistanceSensor::new(MockSource::new(300), 0)?;
//! assert_eq!(sensor.read_distance(), 335);
//!
//! // Swap in a linear fit for a different sensor
//! sensor.set_curve_coefficients(&[2000.0, -2.0], 0, 1000)?;
//! assert_eq!(sensor.read_distance(), 1400);
//! # Ok::<(), rangefinder_core::ConfigError>(())
//! ```
//!
//! ## Concurrency
//!
//! Queries take `&mut self`: one caller at a time, typically a cooperative
//! polling loop. The read is blocking and never yields.

use crate::{
    constants::{
        buffers::{FILTER_BYPASS_SIZE, MAX_FILTER_WINDOW},
        sensors::DEFAULT_FILL_DISTANCE_MM,
    },
    curve::CurveFit,
    errors::ConfigResult,
    filter::MedianFilter,
    source::SampleSource,
};

/// Every stage of one distance query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Measurement {
    /// Sample as read from the source
    pub raw: u16,

    /// Sample after clamping to the curve's domain
    pub clamped: u16,

    /// Curve output before filtering (mm)
    pub curve_mm: u16,

    /// Reported distance (mm), filtered when enabled
    pub distance_mm: u16,
}

impl Measurement {
    /// Check if the raw sample fell outside the curve's domain
    pub fn was_clamped(&self) -> bool {
        self.raw != self.clamped
    }
}

/// Analog IR distance sensor with optional median smoothing
///
/// `N` bounds the median window storage; the window actually used is the
/// `filter_size` passed at construction.
#[derive(Debug, Clone)]
pub struct DistanceSensor<S, const N: usize = MAX_FILTER_WINDOW> {
    source: S,
    curve: CurveFit,
    filter: MedianFilter<N>,
    filter_size: usize,
}

impl<S: SampleSource> DistanceSensor<S> {
    /// Create a sensor with factory defaults
    ///
    /// `filter_size` of 0 or 1 disables median filtering. Fails only when
    /// the window exceeds [`MAX_FILTER_WINDOW`].
    pub fn new(source: S, filter_size: usize) -> ConfigResult<Self> {
        Self::with_fill_distance(source, filter_size, DEFAULT_FILL_DISTANCE_MM)
    }
}

impl<S: SampleSource, const N: usize> DistanceSensor<S, N> {
    /// Create a sensor whose median window starts out at `fill_mm`
    pub fn with_fill_distance(source: S, filter_size: usize, fill_mm: u16) -> ConfigResult<Self> {
        // A bypassed filter still owns one slot
        let filter = MedianFilter::new(filter_size.max(FILTER_BYPASS_SIZE), fill_mm)?;

        log_debug!(
            "distance sensor ready: window {} (filtered: {}), fill {} mm",
            filter_size,
            filter_size > FILTER_BYPASS_SIZE,
            fill_mm
        );

        Ok(Self {
            source,
            curve: CurveFit::default(),
            filter,
            filter_size,
        })
    }

    /// Take one sample and return the distance in millimeters
    pub fn read_distance(&mut self) -> u16 {
        self.measure().distance_mm
    }

    /// Take one sample and return every stage of the computation
    pub fn measure(&mut self) -> Measurement {
        let raw = self.source.read_raw();
        let clamped = self.curve.domain().clamp(raw);

        if clamped != raw {
            log_trace!("raw sample {} outside domain, clamped to {}", raw, clamped);
        }

        let curve_mm = self.curve.evaluate(clamped);
        let distance_mm = if self.is_filtered() {
            self.filter.insert(curve_mm)
        } else {
            curve_mm
        };

        Measurement {
            raw,
            clamped,
            curve_mm,
            distance_mm,
        }
    }

    /// Replace the curve coefficients and domain
    ///
    /// The median window keeps its contents; call [`Self::reset_filter`] if
    /// old distances should not bleed into the new curve's output.
    pub fn set_curve_coefficients(
        &mut self,
        coefficients: &[f32],
        domain_min: u16,
        domain_max: u16,
    ) -> ConfigResult<()> {
        if let Err(err) = self.curve.set_coefficients(coefficients, domain_min, domain_max) {
            log_warn!("curve coefficients rejected: {}", err);
            return Err(err);
        }

        log_debug!(
            "curve set: {} coefficients over [{}, {}]",
            coefficients.len(),
            domain_min,
            domain_max
        );
        Ok(())
    }

    /// Replace the domain, keeping the coefficients
    pub fn set_domain(&mut self, domain_min: u16, domain_max: u16) -> ConfigResult<()> {
        if let Err(err) = self.curve.set_domain(domain_min, domain_max) {
            log_warn!("domain rejected: {}", err);
            return Err(err);
        }

        log_debug!("domain set to [{}, {}]", domain_min, domain_max);
        Ok(())
    }

    /// Replace the whole curve
    pub fn set_curve(&mut self, curve: CurveFit) {
        self.curve = curve;
    }

    /// Refill the median window with `fill_mm`
    pub fn reset_filter(&mut self, fill_mm: u16) {
        self.filter.reset(fill_mm);
    }

    /// Window size given at construction
    pub fn filter_size(&self) -> usize {
        self.filter_size
    }

    /// Check if readings go through the median filter
    pub fn is_filtered(&self) -> bool {
        self.filter_size > FILTER_BYPASS_SIZE
    }

    /// Current curve
    pub fn curve(&self) -> &CurveFit {
        &self.curve
    }

    /// Median filter state
    pub fn filter(&self) -> &MedianFilter<N> {
        &self.filter
    }

    /// Mutable access to the sample source
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Give the sample source back
    pub fn into_source(self) -> S {
        self.source
    }
}
