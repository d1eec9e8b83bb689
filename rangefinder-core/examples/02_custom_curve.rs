//! Custom Curve Example
//!
//! Shows how to load coefficients for a different sensor, how a shorter
//! coefficient list lowers the polynomial degree, and how invalid
//! configuration is rejected without disturbing the current curve.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_custom_curve
//! ```

use rangefinder_core::{ConfigError, CurveFit, DistanceSensor, MockSource};

fn main() -> Result<(), ConfigError> {
    println!("Rangefinder Custom Curve Example");
    println!("================================\n");

    let mut sensor = DistanceSensor::new(MockSource::new(300), 0)?;
    println!("Factory curve at raw 300: {} mm", sensor.read_distance());

    // Quadratic fit: the last three slots are zero-filled
    sensor.set_curve_coefficients(&[1200.0, -2.5, 0.0012], 50, 700)?;
    println!("Quadratic fit at raw 300: {} mm", sensor.read_distance());
    println!("Coefficient slots: {:?}", sensor.curve().coefficients());

    // Narrow the characterized range without touching coefficients
    sensor.set_domain(350, 700)?;
    let m = sensor.measure();
    println!(
        "Raw {} clamped to {}: {} mm",
        m.raw, m.clamped, m.distance_mm
    );

    // Inverted domain is refused, the curve stays as it was
    match sensor.set_domain(700, 350) {
        Err(err) => println!("Rejected: {}", err),
        Ok(()) => println!("Unexpectedly accepted"),
    }
    println!("Domain still {:?}", sensor.curve().domain());

    // Back to the factory preset
    sensor.set_curve(CurveFit::gp2y0a60szlf_5v());
    println!("Factory curve restored: {} mm", sensor.read_distance());

    Ok(())
}
