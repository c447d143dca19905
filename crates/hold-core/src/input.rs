//! Lenient text-to-number coercion for hold inputs.
//!
//! Every field defaults instead of failing: unparseable numbers become zero
//! (or the configured airspeed/base-time default), and winds accept
//! `DIR/SPEED`, `DIR`, or `/SPEED`. The strict variants report what the
//! lenient path would have swallowed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{HoldError, Result};
use crate::models::{AltitudeBand, HoldInputs, WindVector};

/// Parse the leading number of `text`, ignoring anything after it.
///
/// `"120kt"` gives 120, `" -7.5 E"` gives -7.5, `"abc"` gives `None`.
pub fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }

    // Exponent only counts when followed by at least one digit
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    trimmed[..end]
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Leading number of `text`, or zero.
pub fn number_or_zero(text: &str) -> f64 {
    parse_number(text).unwrap_or(0.0)
}

/// Parse `DIR/SPEED` leniently. Missing parts are zero; no separator means
/// direction only.
pub fn parse_wind(text: &str) -> WindVector {
    let mut parts = text.split('/');
    let direction = parts.next().map(number_or_zero).unwrap_or(0.0);
    let speed = parts.next().map(number_or_zero).unwrap_or(0.0);
    WindVector::new(direction, speed)
}

/// Parse a number, requiring the whole trimmed string to be numeric.
pub fn parse_number_strict(field: &'static str, text: &str) -> Result<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| HoldError::NotANumber {
            field,
            value: text.to_string(),
        })
}

/// Parse `DIR/SPEED` strictly: exactly one separator and two numbers.
pub fn parse_wind_strict(text: &str) -> Result<WindVector> {
    let (direction, speed) = text
        .split_once('/')
        .filter(|(_, speed)| !speed.contains('/'))
        .ok_or_else(|| HoldError::MalformedWind(text.to_string()))?;
    let direction = parse_number_strict("wind direction", direction)?;
    let speed = parse_number_strict("wind speed", speed)?;
    if speed < 0.0 {
        return Err(HoldError::MalformedWind(text.to_string()));
    }
    Ok(WindVector::new(direction, speed))
}

/// One editable input of the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputField {
    TargetAlt,
    LowAlt,
    LowWind,
    HighAlt,
    HighWind,
    MagVar,
    Course,
    Tas,
    BaseTime,
}

impl InputField {
    pub const ALL: [InputField; 9] = [
        Self::TargetAlt,
        Self::LowAlt,
        Self::LowWind,
        Self::HighAlt,
        Self::HighWind,
        Self::MagVar,
        Self::Course,
        Self::Tas,
        Self::BaseTime,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::TargetAlt => "target_alt",
            Self::LowAlt => "low_alt",
            Self::LowWind => "low_wind",
            Self::HighAlt => "high_alt",
            Self::HighWind => "high_wind",
            Self::MagVar => "mag_var",
            Self::Course => "course",
            Self::Tas => "tas",
            Self::BaseTime => "base_time",
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for InputField {
    type Err = HoldError;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|field| field.name() == key)
            .ok_or_else(|| HoldError::UnknownField(s.to_string()))
    }
}

/// Raw text of every input, as typed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawInputs {
    pub target_alt: Option<String>,
    pub low_alt: Option<String>,
    pub low_wind: Option<String>,
    pub high_alt: Option<String>,
    pub high_wind: Option<String>,
    pub mag_var: Option<String>,
    pub course: Option<String>,
    pub tas: Option<String>,
    pub base_time: Option<String>,
}

impl RawInputs {
    fn slot_mut(&mut self, field: InputField) -> &mut Option<String> {
        match field {
            InputField::TargetAlt => &mut self.target_alt,
            InputField::LowAlt => &mut self.low_alt,
            InputField::LowWind => &mut self.low_wind,
            InputField::HighAlt => &mut self.high_alt,
            InputField::HighWind => &mut self.high_wind,
            InputField::MagVar => &mut self.mag_var,
            InputField::Course => &mut self.course,
            InputField::Tas => &mut self.tas,
            InputField::BaseTime => &mut self.base_time,
        }
    }

    pub fn get(&self, field: InputField) -> Option<&str> {
        match field {
            InputField::TargetAlt => self.target_alt.as_deref(),
            InputField::LowAlt => self.low_alt.as_deref(),
            InputField::LowWind => self.low_wind.as_deref(),
            InputField::HighAlt => self.high_alt.as_deref(),
            InputField::HighWind => self.high_wind.as_deref(),
            InputField::MagVar => self.mag_var.as_deref(),
            InputField::Course => self.course.as_deref(),
            InputField::Tas => self.tas.as_deref(),
            InputField::BaseTime => self.base_time.as_deref(),
        }
    }

    /// Replace one field's text. An empty value clears it.
    pub fn set(&mut self, field: InputField, value: &str) {
        let value = value.trim();
        *self.slot_mut(field) = if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        };
    }

    /// Coerce to numeric inputs. Never fails.
    pub fn to_inputs(&self) -> HoldInputs {
        HoldInputs {
            target_altitude_ft: self.number(InputField::TargetAlt),
            low: AltitudeBand::new(
                self.number(InputField::LowAlt),
                self.wind(InputField::LowWind),
            ),
            high: AltitudeBand::new(
                self.number(InputField::HighAlt),
                self.wind(InputField::HighWind),
            ),
            magnetic_variation_deg: self.number(InputField::MagVar),
            inbound_course_deg: self.number(InputField::Course),
            true_airspeed_kt: self.optional_number(InputField::Tas),
            outbound_base_time_sec: self.optional_number(InputField::BaseTime),
        }
    }

    fn optional_number(&self, field: InputField) -> Option<f64> {
        let text = self.get(field)?;
        let value = parse_number(text);
        if value.is_none() {
            tracing::warn!(field = %field, value = text, "unparseable number, using default");
        }
        value
    }

    fn number(&self, field: InputField) -> f64 {
        self.optional_number(field).unwrap_or(0.0)
    }

    fn wind(&self, field: InputField) -> WindVector {
        match self.get(field) {
            Some(text) => {
                if let Err(err) = parse_wind_strict(text) {
                    tracing::debug!(field = %field, error = %err, "wind coerced leniently");
                }
                parse_wind(text)
            }
            None => WindVector::calm(),
        }
    }
}
