// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Feature values: shell shape parameters and directional offsets

use crate::direction::{Direction, DirectionMap};
use crate::error::{ensure_non_negative, ensure_positive, Result};
use crate::units::LengthUnit;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Parameters of one sinter box
///
/// `shell_thickness`, `bar` and `gap` must be strictly positive; the six
/// offsets must be zero or greater. Values are checked by [`validate`]
/// rather than on construction so a host can hold half-edited input.
///
/// [`validate`]: FeatureValues::validate
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FeatureValues {
    /// Wall thickness of the shell
    pub shell_thickness: f64,
    /// Width of the solid bars between gaps
    pub bar: f64,
    /// Side length of each square gap
    pub gap: f64,
    /// Outward offset of each face from the selection bounds
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub offsets: DirectionMap<f64>,
}

impl FeatureValues {
    pub fn new(shell_thickness: f64, bar: f64, gap: f64, offsets: DirectionMap<f64>) -> Self {
        Self {
            shell_thickness,
            bar,
            gap,
            offsets,
        }
    }

    /// Defaults for a design in `unit`: bar is twice the thickness, gap four
    /// times the thickness, every face offset by the unit's default offset.
    pub fn defaults_for(unit: LengthUnit) -> Self {
        let thickness = unit.default_thickness();
        Self::new(
            thickness,
            thickness * 2.0,
            thickness * 4.0,
            DirectionMap::splat(unit.default_offset()),
        )
    }

    #[inline]
    pub fn offset(&self, direction: Direction) -> f64 {
        self.offsets[direction]
    }

    #[inline]
    pub fn set_offset(&mut self, direction: Direction, value: f64) {
        self.offsets[direction] = value;
    }

    pub fn x_pos(&self) -> f64 {
        self.offsets[Direction::XPos]
    }

    pub fn x_neg(&self) -> f64 {
        self.offsets[Direction::XNeg]
    }

    pub fn y_pos(&self) -> f64 {
        self.offsets[Direction::YPos]
    }

    pub fn y_neg(&self) -> f64 {
        self.offsets[Direction::YNeg]
    }

    pub fn z_pos(&self) -> f64 {
        self.offsets[Direction::ZPos]
    }

    pub fn z_neg(&self) -> f64 {
        self.offsets[Direction::ZNeg]
    }

    /// Check the shell thickness alone
    pub fn validate_thickness(&self) -> Result<()> {
        ensure_positive("shell_thickness", self.shell_thickness)?;
        Ok(())
    }

    /// Check the three shape parameters used by the gap layout
    pub fn validate_shape(&self) -> Result<()> {
        self.validate_thickness()?;
        ensure_positive("bar", self.bar)?;
        ensure_positive("gap", self.gap)?;
        Ok(())
    }

    /// Check every field
    pub fn validate(&self) -> Result<()> {
        self.validate_shape()?;
        for (direction, value) in self.offsets.iter() {
            ensure_non_negative(direction.key(), *value)?;
        }
        Ok(())
    }
}

impl Default for FeatureValues {
    fn default() -> Self {
        Self::defaults_for(LengthUnit::default())
    }
}
