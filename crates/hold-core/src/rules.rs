//! Defaults, quantization tables and design constants for hold computation.

use serde::{Deserialize, Serialize};

use crate::error::{HoldError, Result};
use crate::models::ClockFactor;

/// Schematic scale applied to the base leg and radius lengths.
const PATTERN_SCALE: f64 = 1.6;
const BASE_LEG_LENGTH: f64 = 140.0;
const BASE_TURN_RADIUS: f64 = 45.0;

/// Angle-to-factor table with inclusive lower thresholds, checked top-down.
///
/// Anything above zero but below `half_from` maps to one third; exactly zero
/// maps to zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FactorTable {
    pub full_from_deg: f64,
    pub three_quarters_from_deg: f64,
    pub half_from_deg: f64,
}

impl Default for FactorTable {
    fn default() -> Self {
        Self {
            full_from_deg: 53.0,
            three_quarters_from_deg: 38.0,
            half_from_deg: 23.0,
        }
    }
}

impl FactorTable {
    pub fn classify(&self, angle_deg: f64) -> ClockFactor {
        if angle_deg >= self.full_from_deg {
            ClockFactor::Full
        } else if angle_deg >= self.three_quarters_from_deg {
            ClockFactor::ThreeQuarters
        } else if angle_deg >= self.half_from_deg {
            ClockFactor::Half
        } else if angle_deg > 0.0 {
            ClockFactor::OneThird
        } else {
            ClockFactor::Zero
        }
    }
}

/// Configuration for hold computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoldRules {
    /// Airspeed used when none (or a non-positive one) is supplied
    pub default_tas_kt: f64,
    /// Outbound leg time used when none is supplied
    pub default_outbound_time_sec: f64,
    /// Acute wind angle -> fraction of max drift
    pub drift_table: FactorTable,
    /// Rule angle (90 - acute angle) -> fraction of wind speed in seconds
    pub time_table: FactorTable,
    /// Outbound correction triples single drift above this acute angle,
    /// doubles it at or below
    pub outbound_triple_above_deg: f64,
    /// Straight leg length in pattern units
    pub leg_length: f64,
    /// Turn radius in pattern units
    pub turn_radius: f64,
    /// Gate 2 bearing = inbound course minus this
    pub gate2_offset_deg: f64,
    /// Wind arrow tail radius from the fix
    pub wind_arrow_outer: f64,
    /// Wind arrow head radius from the fix
    pub wind_arrow_inner: f64,
}

impl Default for HoldRules {
    fn default() -> Self {
        Self {
            default_tas_kt: 120.0,
            default_outbound_time_sec: 60.0,
            drift_table: FactorTable::default(),
            time_table: FactorTable::default(),
            outbound_triple_above_deg: 30.0,
            leg_length: BASE_LEG_LENGTH * PATTERN_SCALE,
            turn_radius: BASE_TURN_RADIUS * PATTERN_SCALE,
            gate2_offset_deg: 60.0,
            wind_arrow_outer: 320.0,
            wind_arrow_inner: 120.0,
        }
    }
}

impl HoldRules {
    /// Load rules from JSON; missing fields keep their defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        let rules: Self = serde_json::from_str(text)?;
        if rules.default_tas_kt <= 0.0 {
            return Err(HoldError::InvalidRule(format!(
                "default_tas_kt must be positive, got {}",
                rules.default_tas_kt
            )));
        }
        if rules.default_outbound_time_sec <= 0.0 {
            return Err(HoldError::InvalidRule(format!(
                "default_outbound_time_sec must be positive, got {}",
                rules.default_outbound_time_sec
            )));
        }
        Ok(rules)
    }

    /// Airspeed to use for the 1-in-60 rule.
    pub fn resolve_tas(&self, tas_kt: Option<f64>) -> f64 {
        match tas_kt {
            Some(tas) if tas.is_finite() && tas > 0.0 => tas,
            _ => self.default_tas_kt,
        }
    }

    /// Base outbound time to adjust for wind.
    pub fn resolve_base_time(&self, base_time_sec: Option<f64>) -> f64 {
        match base_time_sec {
            Some(time) if time.is_finite() && time > 0.0 => time,
            _ => self.default_outbound_time_sec,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_boundaries_are_inclusive_from_below() {
        let table = FactorTable::default();
        assert_eq!(table.classify(90.0), ClockFactor::Full);
        assert_eq!(table.classify(53.0), ClockFactor::Full);
        assert_eq!(table.classify(52.9), ClockFactor::ThreeQuarters);
        assert_eq!(table.classify(38.0), ClockFactor::ThreeQuarters);
        assert_eq!(table.classify(37.9), ClockFactor::Half);
        assert_eq!(table.classify(23.0), ClockFactor::Half);
        assert_eq!(table.classify(22.9), ClockFactor::OneThird);
        assert_eq!(table.classify(0.1), ClockFactor::OneThird);
        assert_eq!(table.classify(0.0), ClockFactor::Zero);
    }

    #[test]
    fn default_geometry_constants() {
        let rules = HoldRules::default();
        assert!((rules.leg_length - 224.0).abs() < 1e-9);
        assert!((rules.turn_radius - 72.0).abs() < 1e-9);
    }

    #[test]
    fn resolve_tas_falls_back_on_non_positive() {
        let rules = HoldRules::default();
        assert_eq!(rules.resolve_tas(None), 120.0);
        assert_eq!(rules.resolve_tas(Some(0.0)), 120.0);
        assert_eq!(rules.resolve_tas(Some(-90.0)), 120.0);
        assert_eq!(rules.resolve_tas(Some(f64::NAN)), 120.0);
        assert_eq!(rules.resolve_tas(Some(180.0)), 180.0);
    }

    #[test]
    fn resolve_base_time_falls_back() {
        let rules = HoldRules::default();
        assert_eq!(rules.resolve_base_time(None), 60.0);
        assert_eq!(rules.resolve_base_time(Some(0.0)), 60.0);
        assert_eq!(rules.resolve_base_time(Some(90.0)), 90.0);
    }

    #[test]
    fn from_json_keeps_defaults_for_missing_fields() {
        let rules = HoldRules::from_json(r#"{ "default_tas_kt": 150 }"#).unwrap();
        assert_eq!(rules.default_tas_kt, 150.0);
        assert_eq!(rules.default_outbound_time_sec, 60.0);
        assert_eq!(rules.drift_table, FactorTable::default());
    }

    #[test]
    fn from_json_rejects_zero_tas() {
        let err = HoldRules::from_json(r#"{ "default_tas_kt": 0 }"#).unwrap_err();
        assert!(matches!(err, HoldError::InvalidRule(_)));
    }

    #[test]
    fn from_json_rejects_malformed_text() {
        let err = HoldRules::from_json("{ not json").unwrap_err();
        assert!(matches!(err, HoldError::Json(_)));
    }
}
