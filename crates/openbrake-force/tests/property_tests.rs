//! Property-based tests for the brake force computation.
//!
//! These verify the contract the control loop depends on: determinism,
//! monotonicity, clamp-to-bound behavior, and a bounded output range.

use openbrake_force::prelude::*;
use quickcheck_macros::quickcheck;

fn sanitize_f32(v: f32) -> f32 {
    if v.is_nan() {
        0.5
    } else if v.is_infinite() {
        if v > 0.0 { 1.0 } else { 0.0 }
    } else {
        v
    }
}

#[quickcheck]
fn prop_compute_is_deterministic(input: f32) -> bool {
    let position = PedalPosition::from_raw(input);
    let a = compute_brake_force(position);
    let b = compute_brake_force(position);
    // NaN input maps to the domain minimum, so outputs are always comparable.
    a == b
}

#[quickcheck]
fn prop_force_within_actuator_range(input: f32) -> bool {
    let command = compute_brake_force(PedalPosition::from_raw(input));
    let force = command.force.value();
    (0.0..=PEDAL_TO_FORCE_GAIN).contains(&force)
}

#[quickcheck]
fn prop_monotonic_in_domain(a: f32, b: f32) -> bool {
    let a = sanitize_f32(a).clamp(PEDAL_MIN, PEDAL_MAX);
    let b = sanitize_f32(b).clamp(PEDAL_MIN, PEDAL_MAX);
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };

    let (lo_pos, _) = PedalPosition::saturating(lo);
    let (hi_pos, _) = PedalPosition::saturating(hi);
    let lo_force = compute_brake_force(lo_pos).force;
    let hi_force = compute_brake_force(hi_pos).force;

    lo_force <= hi_force
}

#[quickcheck]
fn prop_out_of_domain_equals_nearest_bound(input: f32) -> bool {
    let input = sanitize_f32(input);
    let command = compute_brake_force(PedalPosition::from_raw(input));

    if input > PEDAL_MAX {
        let at_max = compute_brake_force(PedalPosition::full());
        command.clamp == ClampStatus::ClampedHigh && command.force == at_max.force
    } else if input < PEDAL_MIN {
        let at_min = compute_brake_force(PedalPosition::released());
        command.clamp == ClampStatus::ClampedLow && command.force == at_min.force
    } else {
        command.clamp == ClampStatus::InRange
    }
}

#[quickcheck]
fn prop_in_domain_never_flags(input: f32) -> bool {
    let input = sanitize_f32(input).clamp(PEDAL_MIN, PEDAL_MAX);
    let command = compute_brake_force(PedalPosition::from_raw(input));
    !command.clamp.was_clamped()
}

#[quickcheck]
fn prop_custom_gain_scales_linearly(input: f32) -> bool {
    let input = sanitize_f32(input).clamp(PEDAL_MIN, PEDAL_MAX);
    let (position, _) = PedalPosition::saturating(input);

    let single = match BrakeForceComputer::new(1.0) {
        Ok(c) => c,
        Err(_) => return false,
    };
    let double = match BrakeForceComputer::new(2.0) {
        Ok(c) => c,
        Err(_) => return false,
    };

    let once = single.compute(position).force.value();
    let twice = double.compute(position).force.value();
    (twice - 2.0 * once).abs() < 1e-5
}

mod worked_examples {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn default_gain_examples_from_the_actuator_placeholder() {
        let command = compute_brake_force(PedalPosition::from_raw(0.4));
        assert_abs_diff_eq!(command.force.value(), 0.6, epsilon = 1e-6);
        assert!(!command.clamp.was_clamped());

        let command = compute_brake_force(PedalPosition::from_raw(1.7));
        assert_abs_diff_eq!(command.force.value(), 1.5, epsilon = 1e-6);
        assert_eq!(command.clamp, ClampStatus::ClampedHigh);

        let command = compute_brake_force(PedalPosition::from_raw(-0.2));
        assert_abs_diff_eq!(command.force.value(), 0.0, epsilon = 1e-6);
        assert_eq!(command.clamp, ClampStatus::ClampedLow);
    }

    #[test]
    fn raw_sensor_reading_to_command() -> BrakeResult<()> {
        // 4-byte report, raw axis value in bytes 2..4.
        let report = [0x00, 0x00, 0xFF, 0x7F];
        let sample = PedalSample::parse_report(&report)?;
        let (position, status) = sample.position();
        assert!(!status.was_clamped());

        let command = compute_brake_force(position);
        // Half travel at the default 1.5 gain.
        assert!((command.force.value() - 0.75).abs() < 0.01);
        Ok(())
    }
}
