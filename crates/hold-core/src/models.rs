//! Core data models for the hold calculator.

use serde::{Deserialize, Serialize};

use crate::angles::normalize_360;
use crate::geometry::HoldGeometry;

/// Wind as reported: the direction it blows FROM and its speed.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WindVector {
    /// Degrees in [0, 360)
    pub direction_deg: f64,
    /// Knots, never negative
    pub speed_kt: f64,
}

impl WindVector {
    /// Create a wind, wrapping the direction and clamping speed at zero.
    pub fn new(direction_deg: f64, speed_kt: f64) -> Self {
        Self {
            direction_deg: normalize_360(direction_deg),
            speed_kt: speed_kt.max(0.0),
        }
    }

    pub fn calm() -> Self {
        Self::default()
    }
}

/// A reference altitude with its forecast wind.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AltitudeBand {
    pub altitude_ft: f64,
    pub wind: WindVector,
}

impl AltitudeBand {
    pub fn new(altitude_ft: f64, wind: WindVector) -> Self {
        Self { altitude_ft, wind }
    }
}

/// Quantized "clock code" factor: the fraction of maximum drift (or of the
/// wind speed, for timing) that applies at a given angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClockFactor {
    Zero,
    OneThird,
    Half,
    ThreeQuarters,
    Full,
}

impl ClockFactor {
    pub fn value(self) -> f64 {
        match self {
            Self::Zero => 0.0,
            Self::OneThird => 1.0 / 3.0,
            Self::Half => 0.5,
            Self::ThreeQuarters => 0.75,
            Self::Full => 1.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Zero => "0",
            Self::OneThird => "1/3",
            Self::Half => "1/2",
            Self::ThreeQuarters => "3/4",
            Self::Full => "1",
        }
    }
}

/// Drift for one leg.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DriftResult {
    /// Angle between the leg and the wind, folded to [0, 90]
    pub acute_angle_deg: f64,
    pub factor: ClockFactor,
    /// `round(max_drift * factor)`
    pub single_drift_deg: f64,
}

/// Outbound heading correction: a multiple of the outbound single drift.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutboundCorrection {
    /// 2 or 3
    pub multiplier: u8,
    pub single_drift_deg: f64,
    pub correction_deg: f64,
}

/// Outbound leg timing adjusted for along-track wind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimingResult {
    /// True when the outbound leg has a tailwind (inbound headwind)
    pub is_tailwind: bool,
    /// `90 - acute angle` between inbound course and wind
    pub rule_angle_deg: f64,
    pub time_factor: ClockFactor,
    pub correction_sec: f64,
    /// Unrounded adjusted time
    pub adjusted_time_sec: f64,
}

impl TimingResult {
    /// Adjusted time rounded to whole seconds.
    pub fn rounded_time_sec(&self) -> f64 {
        crate::angles::round_half_up(self.adjusted_time_sec)
    }
}

/// Numeric inputs for one computation.
///
/// Airspeed and base time are optional; the engine substitutes the
/// configured defaults when they are missing or non-positive.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HoldInputs {
    pub target_altitude_ft: f64,
    pub low: AltitudeBand,
    pub high: AltitudeBand,
    /// Signed degrees added to a true direction to get magnetic
    pub magnetic_variation_deg: f64,
    /// Inbound course, wrapped into [0, 360) by the engine
    pub inbound_course_deg: f64,
    #[serde(default)]
    pub true_airspeed_kt: Option<f64>,
    #[serde(default)]
    pub outbound_base_time_sec: Option<f64>,
}

/// Everything the engine derives for one hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoldSolution {
    /// Interpolated true wind, rounded to whole degrees and knots
    pub wind: WindVector,
    pub magnetic_wind: WindVector,
    pub max_drift_deg: f64,
    pub inbound_course_deg: f64,
    pub inbound_drift: DriftResult,
    pub inbound_heading_deg: f64,
    pub outbound_course_deg: f64,
    pub outbound_drift: DriftResult,
    pub outbound_correction: OutboundCorrection,
    pub outbound_heading_deg: f64,
    pub timing: TimingResult,
    pub geometry: HoldGeometry,
}
