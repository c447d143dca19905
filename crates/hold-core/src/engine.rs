//! Single entry point: inputs in, complete hold solution out.

use crate::angles::{normalize_360, reciprocal};
use crate::drift::{calculate_drift, max_drift, outbound_correction};
use crate::geometry::{build_geometry, GeometryParams};
use crate::heading::apply_correction;
use crate::models::{HoldInputs, HoldSolution};
use crate::rules::HoldRules;
use crate::timing::outbound_timing;
use crate::wind::{interpolate_wind, RoundedWind};

/// Compute every hold parameter from scratch.
///
/// Pure and infallible: the same inputs always give the same solution, and
/// missing airspeed or base time fall back to the values in `rules`.
pub fn compute_hold(inputs: &HoldInputs, rules: &HoldRules) -> HoldSolution {
    let raw_wind = interpolate_wind(inputs.target_altitude_ft, &inputs.low, &inputs.high);
    let winds = RoundedWind::new(raw_wind, inputs.magnetic_variation_deg);
    let wind_dir = winds.magnetic_wind.direction_deg;
    let wind_speed = winds.magnetic_wind.speed_kt;
    tracing::debug!(
        raw_dir = raw_wind.direction_deg,
        raw_speed = raw_wind.speed_kt,
        true_dir = winds.true_wind.direction_deg,
        mag_dir = wind_dir,
        speed = wind_speed,
        "interpolated wind"
    );

    let tas = rules.resolve_tas(inputs.true_airspeed_kt);
    let max_drift_deg = max_drift(wind_speed, tas);

    let inbound_course = normalize_360(inputs.inbound_course_deg);
    let inbound_drift =
        calculate_drift(inbound_course, wind_dir, max_drift_deg, &rules.drift_table);
    let inbound_heading =
        apply_correction(inbound_course, wind_dir, inbound_drift.single_drift_deg);

    let outbound_course = reciprocal(inbound_course);
    let outbound_drift =
        calculate_drift(outbound_course, wind_dir, max_drift_deg, &rules.drift_table);
    let correction = outbound_correction(&outbound_drift, rules);
    let outbound_heading = apply_correction(outbound_course, wind_dir, correction.correction_deg);
    tracing::debug!(
        tas,
        max_drift = max_drift_deg,
        inbound_heading,
        outbound_heading,
        multiplier = correction.multiplier,
        "drift corrections"
    );

    let base_time = rules.resolve_base_time(inputs.outbound_base_time_sec);
    let timing = outbound_timing(
        inbound_course,
        wind_dir,
        wind_speed,
        base_time,
        &rules.time_table,
    );
    tracing::debug!(
        tailwind = timing.is_tailwind,
        factor = timing.time_factor.label(),
        adjusted = timing.adjusted_time_sec,
        "outbound timing"
    );

    let geometry = build_geometry(
        &GeometryParams {
            inbound_course_deg: inbound_course,
            inbound_heading_deg: inbound_heading,
            outbound_heading_deg: outbound_heading,
            outbound_time_sec: timing.rounded_time_sec(),
            wind_dir_deg: wind_dir,
        },
        rules,
    );

    HoldSolution {
        wind: winds.true_wind,
        magnetic_wind: winds.magnetic_wind,
        max_drift_deg,
        inbound_course_deg: inbound_course,
        inbound_drift,
        inbound_heading_deg: inbound_heading,
        outbound_course_deg: outbound_course,
        outbound_drift,
        outbound_correction: correction,
        outbound_heading_deg: outbound_heading,
        timing,
        geometry,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AltitudeBand, ClockFactor, WindVector};

    fn calm_inputs(course: f64) -> HoldInputs {
        HoldInputs {
            inbound_course_deg: course,
            ..HoldInputs::default()
        }
    }

    #[test]
    fn calm_wind_leaves_course_and_time_alone() {
        let solution = compute_hold(&calm_inputs(135.0), &HoldRules::default());
        assert_eq!(solution.max_drift_deg, 0.0);
        assert_eq!(solution.inbound_heading_deg, 135.0);
        assert_eq!(solution.outbound_heading_deg, 315.0);
        assert_eq!(solution.timing.adjusted_time_sec, 60.0);
    }

    #[test]
    fn out_of_range_course_is_wrapped() {
        let solution = compute_hold(&calm_inputs(450.0), &HoldRules::default());
        assert_eq!(solution.inbound_course_deg, 90.0);
        assert_eq!(solution.outbound_course_deg, 270.0);

        let solution = compute_hold(&calm_inputs(-90.0), &HoldRules::default());
        assert_eq!(solution.inbound_course_deg, 270.0);
    }

    #[test]
    fn zero_tas_uses_default() {
        let wind = WindVector::new(90.0, 30.0);
        let inputs = HoldInputs {
            low: AltitudeBand::new(3000.0, wind),
            high: AltitudeBand::new(3000.0, wind),
            true_airspeed_kt: Some(0.0),
            ..HoldInputs::default()
        };
        let solution = compute_hold(&inputs, &HoldRules::default());
        assert_eq!(solution.max_drift_deg, 15.0);
    }

    fn midpoint_inputs(low: WindVector, high: WindVector) -> HoldInputs {
        HoldInputs {
            target_altitude_ft: 3000.0,
            low: AltitudeBand::new(2000.0, low),
            high: AltitudeBand::new(4000.0, high),
            ..HoldInputs::default()
        }
    }

    #[test]
    fn downstream_uses_rounded_wind_speed() {
        // Raw speed 16.5 rounds to 17: max drift round(8.5) = 9, not round(8.25) = 8
        let inputs = midpoint_inputs(WindVector::new(0.0, 10.0), WindVector::new(0.0, 23.0));
        let solution = compute_hold(&inputs, &HoldRules::default());
        assert_eq!(solution.wind, WindVector::new(0.0, 17.0));
        assert_eq!(solution.max_drift_deg, 9.0);
        // Headwind inbound: outbound shortened by the full rounded speed
        assert!(solution.timing.is_tailwind);
        assert_eq!(solution.timing.correction_sec, 17.0);
        assert_eq!(solution.timing.adjusted_time_sec, 43.0);
    }

    #[test]
    fn downstream_uses_rounded_wind_direction() {
        // Raw direction 22.5 rounds to 23, which crosses into the half bucket
        let inputs = midpoint_inputs(WindVector::new(0.0, 20.0), WindVector::new(45.0, 20.0));
        let solution = compute_hold(&inputs, &HoldRules::default());
        assert_eq!(solution.wind.direction_deg, 23.0);
        assert_eq!(solution.inbound_drift.acute_angle_deg, 23.0);
        assert_eq!(solution.inbound_drift.factor, ClockFactor::Half);
        assert_eq!(solution.inbound_drift.single_drift_deg, 5.0);
        assert_eq!(solution.inbound_heading_deg, 5.0);
    }

    #[test]
    fn repeated_calls_are_identical() {
        let inputs = HoldInputs {
            target_altitude_ft: 4500.0,
            low: AltitudeBand::new(3000.0, WindVector::new(200.0, 15.0)),
            high: AltitudeBand::new(6000.0, WindVector::new(240.0, 35.0)),
            magnetic_variation_deg: -3.0,
            inbound_course_deg: 10.0,
            true_airspeed_kt: Some(140.0),
            outbound_base_time_sec: Some(90.0),
        };
        let rules = HoldRules::default();
        assert_eq!(compute_hold(&inputs, &rules), compute_hold(&inputs, &rules));
    }

    #[test]
    fn outbound_is_reciprocal_for_all_courses() {
        let rules = HoldRules::default();
        for course in 0..360 {
            let solution = compute_hold(&calm_inputs(course as f64), &rules);
            assert_eq!(
                solution.outbound_course_deg,
                ((course + 180) % 360) as f64,
                "course {course}"
            );
        }
    }
}
