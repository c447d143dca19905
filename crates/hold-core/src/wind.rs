//! Wind at the hold altitude, interpolated between two forecast bands.

use serde::{Deserialize, Serialize};

use crate::angles::{normalize_360, round_half_up, signed_difference};
use crate::models::{AltitudeBand, WindVector};

/// Interpolate the true wind at `target_altitude_ft`.
///
/// The ratio is not clamped: a target outside the bands extrapolates both
/// direction and speed. Equal band altitudes return the low band's wind, as
/// does any altitude combination that overflows to a non-finite result.
pub fn interpolate_wind(
    target_altitude_ft: f64,
    low: &AltitudeBand,
    high: &AltitudeBand,
) -> WindVector {
    let span = high.altitude_ft - low.altitude_ft;
    if span == 0.0 || !span.is_finite() {
        return low.wind;
    }

    let ratio = (target_altitude_ft - low.altitude_ft) / span;
    let diff = signed_difference(high.wind.direction_deg, low.wind.direction_deg);
    let direction = low.wind.direction_deg + diff * ratio;
    let speed = low.wind.speed_kt + (high.wind.speed_kt - low.wind.speed_kt) * ratio;
    if !direction.is_finite() || !speed.is_finite() {
        return low.wind;
    }

    // Extrapolating a decreasing speed can go negative; WindVector clamps at zero
    WindVector::new(direction, speed)
}

/// Wind rounded to whole degrees and knots.
///
/// Every downstream computation consumes these values, never the raw
/// interpolation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoundedWind {
    pub true_wind: WindVector,
    pub magnetic_wind: WindVector,
}

impl RoundedWind {
    /// Round `wind` and derive its magnetic counterpart.
    pub fn new(wind: WindVector, magnetic_variation_deg: f64) -> Self {
        let direction = normalize_360(round_half_up(wind.direction_deg));
        let speed = round_half_up(wind.speed_kt);
        let true_wind = WindVector::new(direction, speed);
        let magnetic_wind = to_magnetic(&true_wind, magnetic_variation_deg);
        Self {
            true_wind,
            magnetic_wind,
        }
    }
}

/// Rotate a true wind by the local variation.
pub fn to_magnetic(wind: &WindVector, magnetic_variation_deg: f64) -> WindVector {
    WindVector::new(wind.direction_deg + magnetic_variation_deg, wind.speed_kt)
}
