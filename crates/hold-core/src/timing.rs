//! Outbound leg timing corrected for along-track wind.

use crate::angles::{angle_between, fold_acute};
use crate::models::TimingResult;
use crate::rules::FactorTable;

/// Adjust the outbound leg time for wind.
///
/// A headwind on the inbound course means a tailwind outbound, which
/// shortens the leg by `wind * factor` seconds; otherwise the leg is
/// lengthened by the same amount. A wind exactly abeam (90°) counts as a
/// headwind outbound.
pub fn outbound_timing(
    inbound_course_deg: f64,
    wind_dir_deg: f64,
    wind_speed_kt: f64,
    base_time_sec: f64,
    table: &FactorTable,
) -> TimingResult {
    let angle_diff = angle_between(inbound_course_deg, wind_dir_deg);
    let is_tailwind = angle_diff < 90.0;
    let rule_angle_deg = 90.0 - fold_acute(angle_diff);
    let time_factor = table.classify(rule_angle_deg);
    let correction_sec = wind_speed_kt * time_factor.value();

    let adjusted_time_sec = if is_tailwind {
        base_time_sec - correction_sec
    } else {
        base_time_sec + correction_sec
    };

    TimingResult {
        is_tailwind,
        rule_angle_deg,
        time_factor,
        correction_sec,
        adjusted_time_sec,
    }
}
