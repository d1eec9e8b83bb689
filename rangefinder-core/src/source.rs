//! Raw Sample Sources
//!
//! The ranging pipeline needs exactly one thing from hardware: an immediate
//! raw reading. How it is obtained (an ADC channel, a bus transaction, a
//! replayed log) is up to the application, which makes the source trivial
//! to swap for a test double.
//!
//! Any `FnMut() -> u16` closure is a source, which is usually the shortest
//! way to wrap a HAL's ADC driver:
//!
//! ```rust
//! use rangefinder_core::SampleSource;
//!
//! let mut counts = 0u16;
//! let mut adc = || {
//!     counts += 100;
//!     counts
//! };
//! assert_eq!(adc.read_raw(), 100);
//! assert_eq!(adc.read_raw(), 200);
//! ```

/// Provider of one raw sensor reading per call
pub trait SampleSource {
    /// Take one blocking, immediate measurement
    fn read_raw(&mut self) -> u16;
}

impl<F> SampleSource for F
where
    F: FnMut() -> u16,
{
    fn read_raw(&mut self) -> u16 {
        self()
    }
}

/// Source returning a settable value, for testing
///
/// Counts how often it has been read so tests can assert that every
/// distance query takes exactly one sample.
#[derive(Debug, Clone, Default)]
pub struct MockSource {
    value: u16,
    reads: usize,
}

impl MockSource {
    /// Create a source that reports `value`
    pub fn new(value: u16) -> Self {
        Self { value, reads: 0 }
    }

    /// Change the value reported from now on
    pub fn set(&mut self, value: u16) {
        self.value = value;
    }

    /// Number of samples taken so far
    pub fn reads(&self) -> usize {
        self.reads
    }
}

impl SampleSource for MockSource {
    fn read_raw(&mut self) -> u16 {
        self.reads += 1;
        self.value
    }
}
