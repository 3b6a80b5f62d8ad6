// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Automatic gap size
//!
//! Picks a default gap that neither exceeds what the enclosure can carry nor
//! lets the smallest enclosed part slip through, and never drops below twice
//! the shell thickness.

use crate::bounds::AxisAlignedBox;
use crate::error::{Error, Result};
use crate::oriented::{oriented_box_from_box, ReferenceFrame};
use crate::solid::Solid;
use nalgebra::Vector3;
use sinterbox_core::ensure_positive;
use std::f64::consts::SQRT_2;

/// Derating applied to the largest hole a body could pass through
pub const BODY_GAP_FACTOR: f64 = 0.9;

/// Largest safe square gap for a body with these principal extents
///
/// Uses the two smallest extents `(a, b)`: `sqrt(a² + b²) / sqrt(2) * 0.9`.
pub fn max_side_gap(extents: &Vector3<f64>) -> f64 {
    let mut sides = [extents.x, extents.y, extents.z];
    sides.sort_by(|a, b| a.total_cmp(b));
    let (a, b) = (sides[0], sides[1]);
    (a * a + b * b).sqrt() / SQRT_2 * BODY_GAP_FACTOR
}

/// Which rule of [`GapBounds::select`] produced the gap
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GapChoice {
    /// Bodies allow more than the box does; use the box limit
    MainBox(f64),
    /// The shortest box side exceeds the body limit; use the body limit
    Body(f64),
    /// Shortest side split into two gaps
    TwoGaps(f64),
    /// Shortest side split into three gaps
    ThreeGaps(f64),
    /// Shortest side split into four gaps
    FourGaps(f64),
    /// Nothing else applied
    BodyFallback(f64),
}

impl GapChoice {
    pub fn value(self) -> f64 {
        match self {
            GapChoice::MainBox(v)
            | GapChoice::Body(v)
            | GapChoice::TwoGaps(v)
            | GapChoice::ThreeGaps(v)
            | GapChoice::FourGaps(v)
            | GapChoice::BodyFallback(v) => v,
        }
    }
}

/// Limits the gap recommendation is chosen from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GapBounds {
    /// Twice the shell thickness
    pub gap_minimum: f64,
    /// Smallest box side longer than `gap_minimum`, or the thickness
    pub main_box_max_gap: f64,
    /// Smallest [`max_side_gap`] over all bodies
    pub body_gap_maximum: f64,
    /// Smallest box side
    pub short_side: f64,
}

impl GapBounds {
    /// Measure the enclosure and the bodies
    pub fn measure<S: Solid>(
        bodies: &[S],
        bounds: &AxisAlignedBox,
        thickness: f64,
        frame: &ReferenceFrame,
    ) -> Result<Self> {
        if bodies.is_empty() {
            return Err(Error::EmptyBodySet);
        }

        let gap_minimum = thickness * 2.0;
        let sides = oriented_box_from_box(bounds, frame).extents();

        let main_box_max_gap = sides
            .iter()
            .copied()
            .filter(|side| *side > gap_minimum)
            .reduce(f64::min)
            .unwrap_or(thickness);

        let body_gap_maximum = bodies
            .iter()
            .map(|body| max_side_gap(&body.principal_extents()))
            .fold(f64::INFINITY, f64::min);

        Ok(Self {
            gap_minimum,
            main_box_max_gap,
            body_gap_maximum,
            short_side: sides.min(),
        })
    }

    /// Spacings that split the shortest side into 2, 3 and 4 gaps net of bars
    pub fn subdivisions(&self, bar: f64) -> [f64; 3] {
        [
            (self.short_side - bar) / 2.0,
            (self.short_side - bar * 2.0) / 3.0,
            (self.short_side - bar * 3.0) / 4.0,
        ]
    }

    /// Apply the decision rules in order; the first match wins
    pub fn select(&self, bar: f64) -> GapChoice {
        let [two, three, four] = self.subdivisions(bar);
        let body = self.body_gap_maximum;
        let fits = |candidate: f64| body > candidate && candidate > self.gap_minimum;

        if body > self.main_box_max_gap {
            GapChoice::MainBox(self.main_box_max_gap)
        } else if self.short_side > body {
            GapChoice::Body(body)
        } else if fits(two) {
            GapChoice::TwoGaps(two)
        } else if fits(three) {
            GapChoice::ThreeGaps(three)
        } else if fits(four) {
            GapChoice::FourGaps(four)
        } else {
            GapChoice::BodyFallback(body)
        }
    }
}

/// Recommend a gap size for `bodies` enclosed by `bounds`
///
/// Fails with `EmptyBodySet` when no bodies are given and with
/// `InvalidParameter` for non-positive thickness or bar.
pub fn recommend_gap<S: Solid>(
    bodies: &[S],
    bounds: &AxisAlignedBox,
    thickness: f64,
    bar: f64,
    frame: &ReferenceFrame,
) -> Result<f64> {
    ensure_positive("shell_thickness", thickness)?;
    ensure_positive("bar", bar)?;
    Ok(GapBounds::measure(bodies, bounds, thickness, frame)?
        .select(bar)
        .value())
}
