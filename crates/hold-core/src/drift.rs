//! Drift angles from the 1-in-60 rule and clock-code factors.

use crate::angles::{angle_between, fold_acute, round_half_up};
use crate::models::{DriftResult, OutboundCorrection};
use crate::rules::{FactorTable, HoldRules};

/// Maximum drift for a full crosswind: `round(wind * 60 / tas)`.
///
/// `tas_kt` must already be resolved to a positive value.
pub fn max_drift(wind_speed_kt: f64, tas_kt: f64) -> f64 {
    if tas_kt <= 0.0 {
        return 0.0;
    }
    round_half_up(wind_speed_kt * 60.0 / tas_kt)
}

/// Drift for a leg flown along `course_deg` in a wind from `wind_dir_deg`.
///
/// Course and wind must share a reference (both magnetic or both true).
pub fn calculate_drift(
    course_deg: f64,
    wind_dir_deg: f64,
    max_drift_deg: f64,
    table: &FactorTable,
) -> DriftResult {
    let acute_angle_deg = fold_acute(angle_between(course_deg, wind_dir_deg));
    let factor = table.classify(acute_angle_deg);
    DriftResult {
        acute_angle_deg,
        factor,
        single_drift_deg: round_half_up(max_drift_deg * factor.value()),
    }
}

/// Outbound heading correction: triple the single drift when the wind is
/// more than `outbound_triple_above_deg` off the outbound track, otherwise
/// double it.
pub fn outbound_correction(outbound: &DriftResult, rules: &HoldRules) -> OutboundCorrection {
    let multiplier: u8 = if outbound.acute_angle_deg > rules.outbound_triple_above_deg {
        3
    } else {
        2
    };
    OutboundCorrection {
        multiplier,
        single_drift_deg: outbound.single_drift_deg,
        correction_deg: outbound.single_drift_deg * f64::from(multiplier),
    }
}
