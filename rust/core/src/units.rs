// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Length units and unit-dependent defaults
//!
//! Hosts report a display length unit; default shell thickness and offsets
//! are picked from a metric or imperial table and expressed in that unit.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default shell thickness for metric designs, in millimeters
pub const DEFAULT_SHELL_METRIC_MM: f64 = 1.0;
/// Default shell thickness for imperial designs, in inches
pub const DEFAULT_SHELL_INCHES: f64 = 0.04;
/// Default directional offset for metric designs, in millimeters
pub const DEFAULT_OFFSET_METRIC_MM: f64 = 2.0;
/// Default directional offset for imperial designs, in inches
pub const DEFAULT_OFFSET_INCHES: f64 = 0.08;

const MM_PER_INCH: f64 = 25.4;

/// Display length unit of a design
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LengthUnit {
    #[default]
    Millimeter,
    Centimeter,
    Meter,
    Inch,
    Foot,
}

impl LengthUnit {
    /// Millimeters per one of this unit
    #[inline]
    pub fn millimeters(self) -> f64 {
        match self {
            LengthUnit::Millimeter => 1.0,
            LengthUnit::Centimeter => 10.0,
            LengthUnit::Meter => 1000.0,
            LengthUnit::Inch => MM_PER_INCH,
            LengthUnit::Foot => MM_PER_INCH * 12.0,
        }
    }

    #[inline]
    pub fn is_imperial(self) -> bool {
        matches!(self, LengthUnit::Inch | LengthUnit::Foot)
    }

    /// Express a millimeter length in this unit
    #[inline]
    pub fn from_millimeters(self, mm: f64) -> f64 {
        mm / self.millimeters()
    }

    /// Express an inch length in this unit
    #[inline]
    pub fn from_inches(self, inches: f64) -> f64 {
        self.from_millimeters(inches * MM_PER_INCH)
    }

    /// Default shell ("cage") thickness in this unit
    pub fn default_thickness(self) -> f64 {
        if self.is_imperial() {
            self.from_inches(DEFAULT_SHELL_INCHES)
        } else {
            self.from_millimeters(DEFAULT_SHELL_METRIC_MM)
        }
    }

    /// Default outward offset of each box face in this unit
    pub fn default_offset(self) -> f64 {
        if self.is_imperial() {
            self.from_inches(DEFAULT_OFFSET_INCHES)
        } else {
            self.from_millimeters(DEFAULT_OFFSET_METRIC_MM)
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            LengthUnit::Millimeter => "mm",
            LengthUnit::Centimeter => "cm",
            LengthUnit::Meter => "m",
            LengthUnit::Inch => "in",
            LengthUnit::Foot => "ft",
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for LengthUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mm" | "millimeter" | "millimeters" => Ok(LengthUnit::Millimeter),
            "cm" | "centimeter" | "centimeters" => Ok(LengthUnit::Centimeter),
            "m" | "meter" | "meters" => Ok(LengthUnit::Meter),
            "in" | "inch" | "inches" => Ok(LengthUnit::Inch),
            "ft" | "foot" | "feet" => Ok(LengthUnit::Foot),
            other => Err(Error::UnknownUnit(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_metric_defaults() {
        assert_relative_eq!(LengthUnit::Millimeter.default_thickness(), 1.0);
        assert_relative_eq!(LengthUnit::Centimeter.default_thickness(), 0.1);
        assert_relative_eq!(LengthUnit::Meter.default_offset(), 0.002);
    }

    #[test]
    fn test_imperial_defaults() {
        assert_relative_eq!(LengthUnit::Inch.default_thickness(), 0.04);
        assert_relative_eq!(LengthUnit::Foot.default_offset(), 0.08 / 12.0);
        assert!(LengthUnit::Foot.is_imperial());
        assert!(!LengthUnit::Centimeter.is_imperial());
    }

    #[test]
    fn test_parse_units() {
        assert_eq!("MM".parse::<LengthUnit>(), Ok(LengthUnit::Millimeter));
        assert_eq!(" inches ".parse::<LengthUnit>(), Ok(LengthUnit::Inch));
        assert!(matches!(
            "furlong".parse::<LengthUnit>(),
            Err(Error::UnknownUnit(_))
        ));
    }
}
