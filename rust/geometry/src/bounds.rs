// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Axis-aligned bounds and midpoint helpers

use crate::solid::Solid;
use nalgebra::{Point3, Vector3};
use sinterbox_core::{Axis, Direction};

/// Midpoint of two scalars, computed as `a + (b - a) / 2`
#[inline]
pub fn midpoint(a: f64, b: f64) -> f64 {
    a + (b - a) / 2.0
}

/// Component-wise [`midpoint`] of two points
#[inline]
pub fn mid_point(p1: &Point3<f64>, p2: &Point3<f64>) -> Point3<f64> {
    Point3::new(
        midpoint(p1.x, p2.x),
        midpoint(p1.y, p2.y),
        midpoint(p1.z, p2.z),
    )
}

/// Axis-aligned box in world coordinates
///
/// Zero extent on any axis is valid; such boxes produce thin shells and no
/// gap tiles along the flat axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisAlignedBox {
    pub min: Point3<f64>,
    pub max: Point3<f64>,
}

impl AxisAlignedBox {
    /// Create a box from its min and max corners
    ///
    /// `min` must not exceed `max` on any axis; use [`from_corners`] when the
    /// order is unknown.
    ///
    /// [`from_corners`]: AxisAlignedBox::from_corners
    #[inline]
    pub fn new(min: Point3<f64>, max: Point3<f64>) -> Self {
        debug_assert!(min.x <= max.x && min.y <= max.y && min.z <= max.z);
        Self { min, max }
    }

    /// Box spanned by two arbitrary corners
    pub fn from_corners(a: Point3<f64>, b: Point3<f64>) -> Self {
        Self {
            min: Point3::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)),
            max: Point3::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)),
        }
    }

    /// Unit box centered at the origin, `[-1,-1,-1]..[1,1,1]`
    ///
    /// Shown before anything has been selected.
    pub fn fallback() -> Self {
        Self {
            min: Point3::new(-1.0, -1.0, -1.0),
            max: Point3::new(1.0, 1.0, 1.0),
        }
    }

    /// Size along each axis (`max - min`)
    #[inline]
    pub fn extents(&self) -> Vector3<f64> {
        self.max - self.min
    }

    #[inline]
    pub fn extent(&self, axis: Axis) -> f64 {
        self.max[axis.index()] - self.min[axis.index()]
    }

    #[inline]
    pub fn center(&self) -> Point3<f64> {
        mid_point(&self.min, &self.max)
    }

    /// Grow the box so it contains `point`
    #[inline]
    pub fn expand(&mut self, point: &Point3<f64>) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.min.z = self.min.z.min(point.z);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
        self.max.z = self.max.z.max(point.z);
    }

    /// Smallest box containing both boxes
    pub fn union(&self, other: &AxisAlignedBox) -> AxisAlignedBox {
        let mut combined = *self;
        combined.expand(&other.min);
        combined.expand(&other.max);
        combined
    }

    /// Center of the face whose outward normal is `direction`
    pub fn face_center(&self, direction: Direction) -> Point3<f64> {
        let mut point = self.center();
        let i = direction.axis().index();
        point[i] = if direction.is_positive() {
            self.max[i]
        } else {
            self.min[i]
        };
        point
    }

    pub fn contains_point(&self, point: &Point3<f64>, tolerance: f64) -> bool {
        (0..3).all(|i| {
            point[i] >= self.min[i] - tolerance && point[i] <= self.max[i] + tolerance
        })
    }

    pub fn contains_box(&self, other: &AxisAlignedBox, tolerance: f64) -> bool {
        self.contains_point(&other.min, tolerance) && self.contains_point(&other.max, tolerance)
    }
}

/// Union of the bounding boxes of all `solids`
///
/// An empty selection yields [`AxisAlignedBox::fallback`].
pub fn union_bounding_box<S: Solid>(solids: &[S]) -> AxisAlignedBox {
    let mut iter = solids.iter();
    match iter.next() {
        Some(first) => iter.fold(first.bounding_box(), |acc, solid| {
            acc.union(&solid.bounding_box())
        }),
        None => AxisAlignedBox::fallback(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_midpoint() {
        assert_eq!(midpoint(2.0, 6.0), 4.0);
        assert_eq!(midpoint(-3.0, 3.0), 0.0);
        assert_eq!(midpoint(5.0, 5.0), 5.0);
        let p = mid_point(&Point3::new(0.0, -2.0, 10.0), &Point3::new(4.0, 2.0, 20.0));
        assert_eq!(p, Point3::new(2.0, 0.0, 15.0));
    }

    #[test]
    fn test_union_of_empty_selection_is_fallback() {
        let empty: [AxisAlignedBox; 0] = [];
        let b = union_bounding_box(&empty);
        assert_eq!(b.min, Point3::new(-1.0, -1.0, -1.0));
        assert_eq!(b.max, Point3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_union_of_boxes() {
        let a = AxisAlignedBox::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0));
        let b = AxisAlignedBox::new(Point3::new(-2.0, 0.5, 0.5), Point3::new(0.5, 3.0, 0.75));
        let u = union_bounding_box(&[a, b]);
        assert_eq!(u.min, Point3::new(-2.0, 0.0, 0.0));
        assert_eq!(u.max, Point3::new(1.0, 3.0, 1.0));
    }

    #[test]
    fn test_from_corners_orders_components() {
        let b =
            AxisAlignedBox::from_corners(Point3::new(3.0, -1.0, 2.0), Point3::new(1.0, 4.0, 2.0));
        assert_eq!(b.min, Point3::new(1.0, -1.0, 2.0));
        assert_eq!(b.max, Point3::new(3.0, 4.0, 2.0));
        assert_eq!(b.extent(Axis::Z), 0.0);
    }

    #[test]
    fn test_face_centers() {
        let b = AxisAlignedBox::new(Point3::new(0.0, 0.0, 0.0), Point3::new(10.0, 20.0, 30.0));
        assert_eq!(b.face_center(Direction::XPos), Point3::new(10.0, 10.0, 15.0));
        assert_eq!(b.face_center(Direction::YNeg), Point3::new(5.0, 0.0, 15.0));
        assert_eq!(b.face_center(Direction::ZPos), Point3::new(5.0, 10.0, 30.0));
    }

    #[test]
    fn test_expand_only_moves_reached_faces() {
        let mut b = AxisAlignedBox::new(Point3::new(0.0, 0.0, 0.0), Point3::new(10.0, 10.0, 10.0));
        b.expand(&Point3::new(12.5, 5.0, 5.0));
        assert_relative_eq!(b.max.x, 12.5);
        assert_eq!(b.min, Point3::new(0.0, 0.0, 0.0));
        assert_eq!(b.max.y, 10.0);
    }
}
