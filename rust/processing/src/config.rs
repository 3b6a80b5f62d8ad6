// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Session configuration loaded from environment variables or JSON.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use sinterbox_core::LengthUnit;

/// Name given to the finished sinter box component.
pub const DEFAULT_COMPONENT_NAME: &str = "Sinterbox";

/// Session configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Length unit of the design; picks default thickness and offsets.
    pub units: LengthUnit,
    /// Name of the component created on finalize.
    pub component_name: String,
    /// Size the gap automatically whenever the selection changes.
    pub auto_size_gaps: bool,
    /// Show gap cuts in the preview when not dragging.
    pub full_preview: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            units: LengthUnit::default(),
            component_name: DEFAULT_COMPONENT_NAME.into(),
            auto_size_gaps: true,
            full_preview: true,
        }
    }
}

impl SessionConfig {
    /// Load configuration from environment variables.
    ///
    /// Unset or unparsable variables keep their defaults.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            units: lookup("SINTERBOX_UNITS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.units),
            component_name: lookup("SINTERBOX_COMPONENT_NAME")
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.component_name),
            auto_size_gaps: lookup("SINTERBOX_AUTO_GAPS")
                .and_then(|v| parse_flag(&v))
                .unwrap_or(defaults.auto_size_gaps),
            full_preview: lookup("SINTERBOX_FULL_PREVIEW")
                .and_then(|v| parse_flag(&v))
                .unwrap_or(defaults.full_preview),
        }
    }

    /// Parse a JSON document; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.units, LengthUnit::Millimeter);
        assert_eq!(config.component_name, "Sinterbox");
        assert!(config.auto_size_gaps);
        assert!(config.full_preview);
    }

    #[test]
    fn test_from_vars() {
        let config = SessionConfig::from_vars(vars(&[
            ("SINTERBOX_UNITS", "in"),
            ("SINTERBOX_COMPONENT_NAME", "Cage"),
            ("SINTERBOX_AUTO_GAPS", "off"),
            ("SINTERBOX_FULL_PREVIEW", "0"),
        ]));
        assert_eq!(config.units, LengthUnit::Inch);
        assert_eq!(config.component_name, "Cage");
        assert!(!config.auto_size_gaps);
        assert!(!config.full_preview);
    }

    #[test]
    fn test_unparsable_vars_fall_back() {
        let config = SessionConfig::from_vars(vars(&[
            ("SINTERBOX_UNITS", "furlong"),
            ("SINTERBOX_COMPONENT_NAME", "   "),
            ("SINTERBOX_AUTO_GAPS", "maybe"),
        ]));
        assert_eq!(config, SessionConfig::default());
    }

    #[test]
    fn test_json() {
        let config =
            SessionConfig::from_json(r#"{"units": "centimeter", "full_preview": false}"#)
                .unwrap();
        assert_eq!(config.units, LengthUnit::Centimeter);
        assert!(!config.full_preview);
        assert_eq!(config.component_name, "Sinterbox");

        let back = SessionConfig::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_bad_json_is_config_error() {
        assert!(matches!(
            SessionConfig::from_json("{\"units\": 3}"),
            Err(Error::Config(_))
        ));
    }
}
