//! Basic Distance Reading Example
//!
//! Simulates a polling loop reading a GP2Y0A60SZLF through a noisy ADC and
//! compares raw curve output with the median-filtered distance.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_basic_distance
//! ```

use rangefinder_core::{DistanceSensor, SampleSource};

/// ADC stand-in: a target slowly approaching, with periodic glitches
struct SimulatedAdc {
    tick: u16,
}

impl SampleSource for SimulatedAdc {
    fn read_raw(&mut self) -> u16 {
        self.tick += 1;
        let approach = 200 + self.tick * 20;

        // Every seventh sample the reading spikes (reflection, supply ripple)
        if self.tick % 7 == 0 {
            approach.saturating_add(400)
        } else {
            approach
        }
    }
}

fn main() -> Result<(), rangefinder_core::ConfigError> {
    println!("Rangefinder Basic Distance Example");
    println!("==================================\n");

    let mut sensor = DistanceSensor::new(SimulatedAdc { tick: 0 }, 5)?;

    println!("{:>4}  {:>5}  {:>8}  {:>9}", "tick", "raw", "curve mm", "median mm");
    for tick in 1..=20 {
        let m = sensor.measure();
        let note = if m.was_clamped() { "  (clamped)" } else { "" };
        println!(
            "{:>4}  {:>5}  {:>8}  {:>9}{}",
            tick, m.raw, m.curve_mm, m.distance_mm, note
        );
    }

    Ok(())
}
