//! Display strings for a hold solution and its geometry labels.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::angles::{normalize_360, round_half_up};
use crate::geometry::{Gate, GateMarker};
use crate::models::{DriftResult, HoldSolution, OutboundCorrection, WindVector};

/// Round to one decimal place.
fn tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Zero-pad a direction to three digits. Fractional values keep one decimal;
/// rounding up to 360 wraps to 000.
pub fn pad3(deg: f64) -> String {
    let deg = normalize_360(tenths(deg));
    if deg.fract() == 0.0 {
        format!("{:03}", deg as i64)
    } else {
        format!("{:05.1}", deg)
    }
}

/// Heading rounded to whole degrees, wrapped, padded, with a degree sign.
pub fn heading_label(deg: f64) -> String {
    format!("{}°", pad3(normalize_360(round_half_up(deg))))
}

/// `DDD/SS`
pub fn wind_label(wind: &WindVector) -> String {
    format!("{}/{}", pad3(wind.direction_deg), wind.speed_kt)
}

/// `30°(1/2) -> 9`
pub fn drift_label(drift: &DriftResult) -> String {
    format!(
        "{}°({}) -> {}",
        tenths(drift.acute_angle_deg),
        drift.factor.label(),
        drift.single_drift_deg
    )
}

/// `2x SingleDrift (9) = 18`
pub fn correction_label(correction: &OutboundCorrection) -> String {
    format!(
        "{}x SingleDrift ({}) = {}",
        correction.multiplier, correction.single_drift_deg, correction.correction_deg
    )
}

pub fn track_label(deg: f64) -> String {
    format!("TRK {}°", pad3(deg))
}

pub fn hdg_label(deg: f64) -> String {
    format!("HDG {}°", pad3(deg))
}

pub fn gate_label(name: &str, gate: &Gate) -> String {
    match gate.marker {
        GateMarker::OutboundTime { seconds } => format!("{name} {seconds}s"),
        GateMarker::Bearing { degrees } => {
            format!("{name} {}°", pad3(normalize_360(round_half_up(degrees))))
        }
    }
}

pub fn wind_arrow_label(direction_deg: f64) -> String {
    format!("WIND {}", pad3(direction_deg))
}

/// Every user-facing string of a solution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoldDisplay {
    pub wind: String,
    pub magnetic_wind: String,
    pub max_drift: String,
    pub inbound_drift: String,
    pub inbound_heading: String,
    pub outbound_course: String,
    pub outbound_drift: String,
    pub outbound_correction: String,
    pub outbound_heading: String,
    pub outbound_time: String,
}

impl HoldSolution {
    pub fn display(&self) -> HoldDisplay {
        HoldDisplay {
            wind: wind_label(&self.wind),
            magnetic_wind: wind_label(&self.magnetic_wind),
            max_drift: format!("{}°", self.max_drift_deg),
            inbound_drift: drift_label(&self.inbound_drift),
            inbound_heading: heading_label(self.inbound_heading_deg),
            outbound_course: pad3(self.outbound_course_deg),
            outbound_drift: format!("{:.1}", self.outbound_drift.single_drift_deg),
            outbound_correction: correction_label(&self.outbound_correction),
            outbound_heading: heading_label(self.outbound_heading_deg),
            outbound_time: format!("{} sec", self.timing.rounded_time_sec()),
        }
    }
}

impl fmt::Display for HoldDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Wind (true)        {}", self.wind)?;
        writeln!(f, "Wind (magnetic)    {}", self.magnetic_wind)?;
        writeln!(f, "Max drift          {}", self.max_drift)?;
        writeln!(f, "Inbound drift      {}", self.inbound_drift)?;
        writeln!(f, "Inbound heading    {}", self.inbound_heading)?;
        writeln!(f, "Outbound course    {}", self.outbound_course)?;
        writeln!(f, "Outbound drift     {}", self.outbound_drift)?;
        writeln!(f, "Outbound correction {}", self.outbound_correction)?;
        writeln!(f, "Outbound heading   {}", self.outbound_heading)?;
        write!(f, "Outbound time      {}", self.outbound_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::models::ClockFactor;

    #[test]
    fn pad3_handles_whole_and_fractional() {
        assert_eq!(pad3(5.0), "005");
        assert_eq!(pad3(90.0), "090");
        assert_eq!(pad3(300.0), "300");
        assert_eq!(pad3(300.5), "300.5");
        assert_eq!(pad3(5.5), "005.5");
    }

    #[test]
    fn pad3_rounds_before_padding() {
        assert_eq!(pad3(20.25), "020.3");
        assert_eq!(pad3(179.97), "180");
        assert_eq!(pad3(359.96), "000");
    }

    #[test]
    fn heading_label_rounds_and_wraps() {
        assert_eq!(heading_label(80.5), "081°");
        assert_eq!(heading_label(359.6), "000°");
    }

    #[test]
    fn drift_label_shows_angle_factor_and_result() {
        let drift = DriftResult {
            acute_angle_deg: 30.0,
            factor: ClockFactor::Half,
            single_drift_deg: 9.0,
        };
        assert_eq!(drift_label(&drift), "30°(1/2) -> 9");
    }

    #[test]
    fn drift_label_trims_float_noise() {
        let drift = DriftResult {
            acute_angle_deg: 20.279999999999973,
            factor: ClockFactor::OneThird,
            single_drift_deg: 3.0,
        };
        assert_eq!(drift_label(&drift), "20.3°(1/3) -> 3");
    }

    #[test]
    fn gate_labels() {
        let gate1 = Gate {
            position: Point::ORIGIN,
            marker: GateMarker::OutboundTime { seconds: 93.0 },
        };
        let gate2 = Gate {
            position: Point::ORIGIN,
            marker: GateMarker::Bearing { degrees: 30.0 },
        };
        assert_eq!(gate_label("Gate 1", &gate1), "Gate 1 93s");
        assert_eq!(gate_label("Gate 2", &gate2), "Gate 2 030°");
    }

    #[test]
    fn wind_label_pads_direction_only() {
        assert_eq!(wind_label(&WindVector::new(5.0, 7.0)), "005/7");
    }
}
