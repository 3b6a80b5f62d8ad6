// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Box axes and the six face directions
//!
//! A sinter box has exactly six faces, so directions are a closed enum and
//! per-direction data lives in a fixed array ([`DirectionMap`]).

use std::ops::{Index, IndexMut};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the three box axes (length/X, width/Y, height/Z)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Component index (0, 1, 2)
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// The two axes spanning the face perpendicular to this axis
    #[inline]
    pub fn in_plane(self) -> (Axis, Axis) {
        match self {
            Axis::X => (Axis::Y, Axis::Z),
            Axis::Y => (Axis::X, Axis::Z),
            Axis::Z => (Axis::X, Axis::Y),
        }
    }
}

/// Outward direction of one box face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Direction {
    XPos,
    XNeg,
    YPos,
    YNeg,
    ZPos,
    ZNeg,
}

impl Direction {
    /// All six directions in storage order
    pub const ALL: [Direction; 6] = [
        Direction::XPos,
        Direction::XNeg,
        Direction::YPos,
        Direction::YNeg,
        Direction::ZPos,
        Direction::ZNeg,
    ];

    /// Storage index into a [`DirectionMap`]
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Direction::XPos => 0,
            Direction::XNeg => 1,
            Direction::YPos => 2,
            Direction::YNeg => 3,
            Direction::ZPos => 4,
            Direction::ZNeg => 5,
        }
    }

    #[inline]
    pub fn axis(self) -> Axis {
        match self {
            Direction::XPos | Direction::XNeg => Axis::X,
            Direction::YPos | Direction::YNeg => Axis::Y,
            Direction::ZPos | Direction::ZNeg => Axis::Z,
        }
    }

    /// `1.0` for positive directions, `-1.0` for negative ones
    #[inline]
    pub fn sign(self) -> f64 {
        if self.is_positive() {
            1.0
        } else {
            -1.0
        }
    }

    #[inline]
    pub fn is_positive(self) -> bool {
        matches!(self, Direction::XPos | Direction::YPos | Direction::ZPos)
    }

    /// The direction pointing the other way along the same axis
    pub fn opposite(self) -> Direction {
        match self {
            Direction::XPos => Direction::XNeg,
            Direction::XNeg => Direction::XPos,
            Direction::YPos => Direction::YNeg,
            Direction::YNeg => Direction::YPos,
            Direction::ZPos => Direction::ZNeg,
            Direction::ZNeg => Direction::ZPos,
        }
    }

    /// Negative-side and positive-side direction of an axis
    pub fn pair(axis: Axis) -> (Direction, Direction) {
        match axis {
            Axis::X => (Direction::XNeg, Direction::XPos),
            Axis::Y => (Direction::YNeg, Direction::YPos),
            Axis::Z => (Direction::ZNeg, Direction::ZPos),
        }
    }

    /// Short key, e.g. `x_pos`
    pub fn key(self) -> &'static str {
        match self {
            Direction::XPos => "x_pos",
            Direction::XNeg => "x_neg",
            Direction::YPos => "y_pos",
            Direction::YNeg => "y_neg",
            Direction::ZPos => "z_pos",
            Direction::ZNeg => "z_neg",
        }
    }

    /// Human readable label, e.g. `X Positive`
    pub fn name(self) -> &'static str {
        match self {
            Direction::XPos => "X Positive",
            Direction::XNeg => "X Negative",
            Direction::YPos => "Y Positive",
            Direction::YNeg => "Y Negative",
            Direction::ZPos => "Z Positive",
            Direction::ZNeg => "Z Negative",
        }
    }

    /// Look a direction up by its short key
    pub fn from_key(key: &str) -> Option<Direction> {
        Direction::ALL.into_iter().find(|d| d.key() == key)
    }
}

/// Fixed-size map holding one value per [`Direction`]
///
/// Serializes as a record keyed by [`Direction::key`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DirectionMap<T> {
    values: [T; 6],
}

impl<T> DirectionMap<T> {
    /// Build a map by evaluating `f` for every direction
    pub fn from_fn(mut f: impl FnMut(Direction) -> T) -> Self {
        Self {
            values: Direction::ALL.map(&mut f),
        }
    }

    /// Iterate `(direction, value)` pairs in [`Direction::ALL`] order
    pub fn iter(&self) -> impl Iterator<Item = (Direction, &T)> {
        Direction::ALL.into_iter().zip(self.values.iter())
    }

    pub fn values(&self) -> &[T; 6] {
        &self.values
    }
}

impl<T: Clone> DirectionMap<T> {
    /// Same value for every direction
    pub fn splat(value: T) -> Self {
        Self::from_fn(|_| value.clone())
    }
}

impl<T> Index<Direction> for DirectionMap<T> {
    type Output = T;

    #[inline]
    fn index(&self, direction: Direction) -> &T {
        &self.values[direction.index()]
    }
}

impl<T> IndexMut<Direction> for DirectionMap<T> {
    #[inline]
    fn index_mut(&mut self, direction: Direction) -> &mut T {
        &mut self.values[direction.index()]
    }
}

#[cfg(feature = "serde")]
#[derive(Serialize)]
struct DirectionMapRef<'a, T> {
    x_pos: &'a T,
    x_neg: &'a T,
    y_pos: &'a T,
    y_neg: &'a T,
    z_pos: &'a T,
    z_neg: &'a T,
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct DirectionMapSer<T> {
    x_pos: T,
    x_neg: T,
    y_pos: T,
    y_neg: T,
    z_pos: T,
    z_neg: T,
}

#[cfg(feature = "serde")]
impl<T: Serialize> Serialize for DirectionMap<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        DirectionMapRef {
            x_pos: &self[Direction::XPos],
            x_neg: &self[Direction::XNeg],
            y_pos: &self[Direction::YPos],
            y_neg: &self[Direction::YNeg],
            z_pos: &self[Direction::ZPos],
            z_neg: &self[Direction::ZNeg],
        }
        .serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: Deserialize<'de>> Deserialize<'de> for DirectionMap<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let DirectionMapSer {
            x_pos,
            x_neg,
            y_pos,
            y_neg,
            z_pos,
            z_neg,
        } = DirectionMapSer::deserialize(deserializer)?;

        // Storage order, see `Direction::index`
        Ok(DirectionMap {
            values: [x_pos, x_neg, y_pos, y_neg, z_pos, z_neg],
        })
    }
}
