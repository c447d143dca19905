//! CLI configuration from environment.

use std::env;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::ValueEnum;
use hold_core::HoldRules;

const DEFAULT_CANVAS_SIZE: u32 = 800;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format {other:?}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub default_tas_kt: Option<f64>,
    pub default_base_time_sec: Option<f64>,
    pub canvas_size: u32,
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_tas_kt: None,
            default_base_time_sec: None,
            canvas_size: DEFAULT_CANVAS_SIZE,
            format: OutputFormat::Text,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unparseable values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            default_tas_kt: lookup("HOLDCALC_TAS_DEFAULT")
                .and_then(|s| s.parse().ok())
                .filter(|tas: &f64| *tas > 0.0),
            default_base_time_sec: lookup("HOLDCALC_BASE_TIME_DEFAULT")
                .and_then(|s| s.parse().ok())
                .filter(|time: &f64| *time > 0.0),
            canvas_size: lookup("HOLDCALC_CANVAS_SIZE")
                .and_then(|s| s.parse().ok())
                .filter(|size: &u32| *size >= 100)
                .unwrap_or(DEFAULT_CANVAS_SIZE),
            format: lookup("HOLDCALC_FORMAT")
                .and_then(|s| s.parse().ok())
                .unwrap_or_default(),
        }
    }

    /// Rules from an optional JSON file, with env overrides on top.
    pub fn load_rules(&self, rules_path: Option<&Path>) -> Result<HoldRules> {
        let mut rules = match rules_path {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("reading rules from {}", path.display()))?;
                HoldRules::from_json(&text)
                    .with_context(|| format!("parsing rules in {}", path.display()))?
            }
            None => HoldRules::default(),
        };
        if let Some(tas) = self.default_tas_kt {
            rules.default_tas_kt = tas;
        }
        if let Some(time) = self.default_base_time_sec {
            rules.default_outbound_time_sec = time;
        }
        Ok(rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn environment_overrides_are_parsed() {
        let config = Config::from_lookup(lookup_from(&[
            ("HOLDCALC_TAS_DEFAULT", "150"),
            ("HOLDCALC_BASE_TIME_DEFAULT", "90"),
            ("HOLDCALC_CANVAS_SIZE", "1200"),
            ("HOLDCALC_FORMAT", "JSON"),
        ]));
        assert_eq!(config.default_tas_kt, Some(150.0));
        assert_eq!(config.default_base_time_sec, Some(90.0));
        assert_eq!(config.canvas_size, 1200);
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn invalid_values_are_ignored() {
        let config = Config::from_lookup(lookup_from(&[
            ("HOLDCALC_TAS_DEFAULT", "0"),
            ("HOLDCALC_CANVAS_SIZE", "tiny"),
            ("HOLDCALC_FORMAT", "yaml"),
        ]));
        assert_eq!(config.default_tas_kt, None);
        assert_eq!(config.canvas_size, DEFAULT_CANVAS_SIZE);
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn load_rules_applies_env_overrides() {
        let config = Config {
            default_tas_kt: Some(140.0),
            ..Config::default()
        };
        let rules = config.load_rules(None).unwrap();
        assert_eq!(rules.default_tas_kt, 140.0);
        assert_eq!(rules.default_outbound_time_sec, 60.0);
    }

    #[test]
    fn load_rules_reports_missing_file() {
        let err = Config::default()
            .load_rules(Some(Path::new("/nonexistent/holdcalc-rules.json")))
            .unwrap_err();
        assert!(err.to_string().contains("reading rules"));
    }
}
