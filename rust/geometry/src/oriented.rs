// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Oriented boxes and the reference frame they are built in

use crate::bounds::{mid_point, AxisAlignedBox};
use nalgebra::{Point3, Unit, Vector3};
use sinterbox_core::{Axis, Direction};

/// Three orthonormal axes defining "X", "Y" and "Z" for box construction
///
/// The standard frame uses the normals of the YZ, XZ and XY construction
/// planes, i.e. the world axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceFrame {
    pub x: Unit<Vector3<f64>>,
    pub y: Unit<Vector3<f64>>,
    pub z: Unit<Vector3<f64>>,
}

impl ReferenceFrame {
    pub fn standard() -> Self {
        Self {
            x: Vector3::x_axis(),
            y: Vector3::y_axis(),
            z: Vector3::z_axis(),
        }
    }

    #[inline]
    pub fn axis(&self, axis: Axis) -> Unit<Vector3<f64>> {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Unit vector pointing out of the face named by `direction`
    #[inline]
    pub fn direction(&self, direction: Direction) -> Vector3<f64> {
        self.axis(direction.axis()).into_inner() * direction.sign()
    }
}

impl Default for ReferenceFrame {
    fn default() -> Self {
        Self::standard()
    }
}

/// Box described by center, three orthogonal directions and three extents
///
/// `height_dir` is always `length_dir × width_dir`, so the box axes form a
/// right-handed frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientedBox {
    pub center: Point3<f64>,
    pub length_dir: Unit<Vector3<f64>>,
    pub width_dir: Unit<Vector3<f64>>,
    pub height_dir: Unit<Vector3<f64>>,
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

impl OrientedBox {
    pub fn new(
        center: Point3<f64>,
        length_dir: Unit<Vector3<f64>>,
        width_dir: Unit<Vector3<f64>>,
        length: f64,
        width: f64,
        height: f64,
    ) -> Self {
        let height_dir = Unit::new_normalize(length_dir.cross(&width_dir));
        Self {
            center,
            length_dir,
            width_dir,
            height_dir,
            length,
            width,
            height,
        }
    }

    /// (length, width, height)
    #[inline]
    pub fn extents(&self) -> Vector3<f64> {
        Vector3::new(self.length, self.width, self.height)
    }

    /// Copy of this box with every extent increased by `delta`
    pub fn grown(&self, delta: f64) -> OrientedBox {
        OrientedBox {
            length: self.length + delta,
            width: self.width + delta,
            height: self.height + delta,
            ..*self
        }
    }

    pub fn volume(&self) -> f64 {
        self.length * self.width * self.height
    }

    /// The eight corners; bit 0 selects +length, bit 1 +width, bit 2 +height
    pub fn corners(&self) -> [Point3<f64>; 8] {
        let l = self.length_dir.into_inner() * (self.length / 2.0);
        let w = self.width_dir.into_inner() * (self.width / 2.0);
        let h = self.height_dir.into_inner() * (self.height / 2.0);
        std::array::from_fn(|i| {
            let sl = if i & 1 != 0 { 1.0 } else { -1.0 };
            let sw = if i & 2 != 0 { 1.0 } else { -1.0 };
            let sh = if i & 4 != 0 { 1.0 } else { -1.0 };
            self.center + l * sl + w * sw + h * sh
        })
    }

    /// Axis-aligned bounds of the corners
    pub fn to_axis_aligned(&self) -> AxisAlignedBox {
        let corners = self.corners();
        let mut bounds = AxisAlignedBox::new(corners[0], corners[0]);
        for corner in &corners[1..] {
            bounds.expand(corner);
        }
        bounds
    }

    /// Width of the box projected onto `dir` (a unit vector)
    pub fn extent_along(&self, dir: &Vector3<f64>) -> f64 {
        self.length_dir.dot(dir).abs() * self.length
            + self.width_dir.dot(dir).abs() * self.width
            + self.height_dir.dot(dir).abs() * self.height
    }
}

/// Oriented box equivalent to `bounds` in `frame`
///
/// Center is the midpoint of the corners; length, width and height are the
/// X, Y and Z extents. Zero-extent input gives zero-extent output.
pub fn oriented_box_from_box(bounds: &AxisAlignedBox, frame: &ReferenceFrame) -> OrientedBox {
    let extents = bounds.extents();
    OrientedBox::new(
        mid_point(&bounds.min, &bounds.max),
        frame.x,
        frame.y,
        extents.x,
        extents.y,
        extents.z,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_box_uses_center_and_extents() {
        let b = AxisAlignedBox::new(Point3::new(0.0, 0.0, 0.0), Point3::new(10.0, 20.0, 30.0));
        let o = oriented_box_from_box(&b, &ReferenceFrame::standard());
        assert_eq!(o.center, Point3::new(5.0, 10.0, 15.0));
        assert_eq!(o.extents(), Vector3::new(10.0, 20.0, 30.0));
        assert_relative_eq!(o.height_dir.into_inner(), Vector3::z(), epsilon = 1e-12);
    }

    #[test]
    fn test_degenerate_box_is_allowed() {
        let p = Point3::new(1.0, 2.0, 3.0);
        let o = oriented_box_from_box(&AxisAlignedBox::new(p, p), &ReferenceFrame::standard());
        assert_eq!(o.center, p);
        assert_eq!(o.volume(), 0.0);
    }

    #[test]
    fn test_to_axis_aligned_round_trip() {
        let b = AxisAlignedBox::new(Point3::new(-1.0, 2.0, 3.0), Point3::new(4.0, 6.0, 5.0));
        let o = oriented_box_from_box(&b, &ReferenceFrame::standard());
        let back = o.to_axis_aligned();
        assert_relative_eq!(back.min, b.min, epsilon = 1e-12);
        assert_relative_eq!(back.max, b.max, epsilon = 1e-12);
    }

    #[test]
    fn test_swapped_axes_stay_right_handed() {
        // Y as length, X as width puts height along -Z
        let o = OrientedBox::new(
            Point3::origin(),
            Vector3::y_axis(),
            Vector3::x_axis(),
            1.0,
            3.0,
            5.0,
        );
        assert_relative_eq!(o.height_dir.into_inner(), -Vector3::z(), epsilon = 1e-12);
        assert_relative_eq!(o.extent_along(&Vector3::x()), 3.0);
        assert_relative_eq!(o.extent_along(&Vector3::y()), 1.0);
        assert_relative_eq!(o.extent_along(&Vector3::z()), 5.0);
    }

    #[test]
    fn test_grown() {
        let o = OrientedBox::new(
            Point3::origin(),
            Vector3::x_axis(),
            Vector3::y_axis(),
            1.0,
            2.0,
            3.0,
        );
        let g = o.grown(4.0);
        assert_eq!(g.extents(), Vector3::new(5.0, 6.0, 7.0));
        assert_eq!(g.center, o.center);
    }

    #[test]
    fn test_frame_directions() {
        let frame = ReferenceFrame::standard();
        assert_eq!(frame.direction(Direction::XNeg), Vector3::new(-1.0, 0.0, 0.0));
        assert_eq!(frame.direction(Direction::ZPos), Vector3::new(0.0, 0.0, 1.0));
    }
}
