//! Integration tests for the full sample -> curve -> median pipeline

mod common;

use rangefinder_core::{
    constants::sensors::{ADC_10BIT_MAX, DEFAULT_FILL_DISTANCE_MM, GP2Y0A60SZLF_5V_DOMAIN_MAX},
    ConfigError, CurveFit, DistanceSensor, MedianFilter, MockSource,
};

use common::{ScriptedSource, REFERENCE_COEFFICIENTS};

#[test]
fn reference_sensor_at_300_reads_335_mm() {
    let curve = CurveFit::new(&REFERENCE_COEFFICIENTS, 30, 875).unwrap();
    assert_eq!(curve.evaluate(300), 335);

    let mut sensor = DistanceSensor::new(MockSource::new(300), 0).unwrap();
    assert_eq!(sensor.read_distance(), 335);
}

#[test]
fn window_of_three_reports_middle_value() {
    let mut filter = MedianFilter::<3>::new(3, 0).unwrap();

    let medians: Vec<u16> = [10, 20, 30].iter().map(|&v| filter.insert(v)).collect();
    assert_eq!(medians, vec![0, 10, 20]);
    assert_eq!(filter.window(), &[10, 20, 30]);
}

#[test]
fn fourth_insert_overwrites_first_slot() {
    let mut filter = MedianFilter::<3>::new(3, 0).unwrap();
    for value in [10, 20, 30] {
        filter.insert(value);
    }

    assert_eq!(filter.insert(40), 30);
    assert_eq!(filter.window(), &[40, 20, 30]);
}

#[test]
fn window_of_one_is_pass_through() {
    let mut filter = MedianFilter::<1>::new(1, DEFAULT_FILL_DISTANCE_MM).unwrap();
    for value in [335, 59, 1481, 0] {
        assert_eq!(filter.insert(value), value);
    }
}

#[test]
fn disabled_filter_returns_curve_output() {
    let script = [30, 300, 875, 5, ADC_10BIT_MAX, 512, 300];
    let curve = CurveFit::default();

    for filter_size in [0, 1] {
        let mut sensor = DistanceSensor::new(ScriptedSource::new(&script), filter_size).unwrap();

        for &raw in &script {
            assert_eq!(sensor.read_distance(), curve.evaluate(raw));
        }
        assert!(sensor
            .filter()
            .window()
            .iter()
            .all(|&mm| mm == DEFAULT_FILL_DISTANCE_MM));
    }
}

#[test]
fn median_suppresses_single_spike() {
    // Steady target at raw 300 (335 mm) with one glitch to raw 875 (59 mm)
    let script = [300, 300, 300, 875, 300, 300];
    let mut sensor = DistanceSensor::new(ScriptedSource::new(&script), 3).unwrap();

    let readings: Vec<u16> = (0..script.len()).map(|_| sensor.read_distance()).collect();
    assert_eq!(readings, vec![1500, 335, 335, 335, 335, 335]);
}

#[test]
fn filtered_sensor_follows_real_step() {
    // Target moves from raw 300 (335 mm) to raw 500 (140 mm)
    let script = [300, 300, 300, 500, 500, 500];
    let mut sensor = DistanceSensor::new(ScriptedSource::new(&script), 3).unwrap();

    let readings: Vec<u16> = (0..script.len()).map(|_| sensor.read_distance()).collect();
    assert_eq!(readings, vec![1500, 335, 335, 335, 140, 140]);
}

#[test]
fn out_of_range_samples_saturate_to_boundary_distance() {
    let curve = CurveFit::default();
    let mut sensor = DistanceSensor::new(ScriptedSource::new(&[0, ADC_10BIT_MAX]), 0).unwrap();

    let far = sensor.measure();
    assert!(far.was_clamped());
    assert_eq!(far.distance_mm, curve.evaluate(30));

    let near = sensor.measure();
    assert_eq!(near.clamped, GP2Y0A60SZLF_5V_DOMAIN_MAX);
    assert_eq!(near.distance_mm, curve.evaluate(875));
}

#[test]
fn reconfiguration_applies_to_next_query() {
    let mut sensor = DistanceSensor::new(MockSource::new(300), 0).unwrap();

    // Two coefficients: the remaining four are zero
    sensor.set_curve_coefficients(&[1000.0, -1.0], 0, 1023).unwrap();
    assert_eq!(sensor.read_distance(), 700);

    sensor.set_domain(400, 1023).unwrap();
    assert_eq!(sensor.read_distance(), 600);
    assert_eq!(sensor.curve().coefficients(), &[1000.0, -1.0, 0.0, 0.0, 0.0, 0.0]);
}

#[test]
fn invalid_configuration_is_rejected_without_side_effects() {
    let mut sensor = DistanceSensor::new(MockSource::new(300), 0).unwrap();

    assert_eq!(
        sensor.set_domain(875, 30),
        Err(ConfigError::InvalidDomain { min: 875, max: 30 })
    );
    assert_eq!(
        sensor.set_curve_coefficients(&[1.0, f32::INFINITY], 0, 100),
        Err(ConfigError::NonFiniteCoefficient { index: 1 })
    );
    assert_eq!(sensor.read_distance(), 335);
}

#[test]
fn closure_source_drives_sensor() {
    let mut raw = 250u16;
    let mut sensor = DistanceSensor::new(
        move || {
            raw += 50;
            raw
        },
        0,
    )
    .unwrap();

    let curve = CurveFit::default();
    assert_eq!(sensor.read_distance(), curve.evaluate(300));
    assert_eq!(sensor.read_distance(), curve.evaluate(350));
}
