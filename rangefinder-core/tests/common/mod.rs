//! Shared helpers for integration tests
//!
//! - Replayable sample sources
//! - A reference median over plain slices
//! - Factory calibration fixtures

#![allow(dead_code)]

use rangefinder_core::{constants::sensors::GP2Y0A60SZLF_5V_COEFFICIENTS, SampleSource};

/// Reference coefficients for the end-to-end example
pub const REFERENCE_COEFFICIENTS: [f32; 6] = GP2Y0A60SZLF_5V_COEFFICIENTS;

/// Source that replays a fixed script of samples, wrapping at the end
pub struct ScriptedSource {
    samples: Vec<u16>,
    next: usize,
}

impl ScriptedSource {
    /// Create a source replaying `samples`
    pub fn new(samples: &[u16]) -> Self {
        assert!(!samples.is_empty(), "script needs at least one sample");
        Self {
            samples: samples.to_vec(),
            next: 0,
        }
    }
}

impl SampleSource for ScriptedSource {
    fn read_raw(&mut self) -> u16 {
        let sample = self.samples[self.next];
        self.next = (self.next + 1) % self.samples.len();
        sample
    }
}

/// Upper-middle median of a slice, computed from scratch
pub fn reference_median(values: &[u16]) -> u16 {
    let mut sorted = values.to_vec();
    sorted.sort();
    sorted[sorted.len() / 2]
}

/// Median of the last `capacity` values of `history`, padded with `fill`
/// when fewer values have been inserted
pub fn expected_window_median(history: &[u16], capacity: usize, fill: u16) -> u16 {
    let start = history.len().saturating_sub(capacity);
    let mut window: Vec<u16> = history[start..].to_vec();
    window.resize(capacity, fill);
    reference_median(&window)
}
