// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Gap layout engine
//!
//! Each face of the shell is perforated by a grid of `gap x gap` openings
//! separated by bars of width `bar`. Along every axis the grid is centered:
//! whatever does not fit a whole `gap + bar` pitch is split evenly between
//! the two ends.
//!
//! For an axis of length `extent`:
//!
//! ```text
//! count          = floor((extent + bar) / (gap + bar))     if extent >= gap, else 0
//! centering_step = (extent - gap*count - bar*(count-1)) / 2
//! first_center   = axis_min + centering_step + gap/2
//! ```
//!
//! Faces perpendicular to an axis are tiled over the two other axes, so an
//! axis shorter than `gap` suppresses cuts on the four faces it spans but
//! not on its own two faces.

use crate::bounds::AxisAlignedBox;
use crate::error::Result;
use crate::oriented::{oriented_box_from_box, OrientedBox, ReferenceFrame};
use nalgebra::Point3;
use sinterbox_core::{Axis, Direction, FeatureValues};

/// Tiling of one box axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisLayout {
    /// Length of the axis being tiled
    pub extent: f64,
    /// Number of gaps along the axis
    pub count: usize,
    /// Leftover margin at each end
    pub centering_step: f64,
    /// Coordinate of the first gap's center
    pub first_center: f64,
    /// Center-to-center distance (`gap + bar`)
    pub pitch: f64,
}

impl AxisLayout {
    pub fn compute(extent: f64, axis_min: f64, gap: f64, bar: f64) -> Self {
        let (count, centering_step) = if extent - gap >= 0.0 {
            let count = ((extent + bar) / (gap + bar)).floor();
            let step = (extent - gap * count - bar * (count - 1.0)) / 2.0;
            (count as usize, step)
        } else {
            (0, 0.0)
        };

        Self {
            extent,
            count,
            centering_step,
            first_center: axis_min + centering_step + gap / 2.0,
            pitch: gap + bar,
        }
    }

    #[inline]
    pub fn center(&self, index: usize) -> f64 {
        self.first_center + index as f64 * self.pitch
    }

    pub fn centers(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.count).map(move |i| self.center(i))
    }
}

/// One rectangular opening to subtract from the shell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CutBox {
    /// Face this cut goes through
    pub face: Direction,
    /// Length runs through the wall (`shell_thickness`), width and height
    /// are `gap`
    pub bounds: OrientedBox,
}

/// Gap grid for one box and one set of feature values
#[derive(Debug, Clone, PartialEq)]
pub struct GapLayout {
    oriented: OrientedBox,
    frame: ReferenceFrame,
    axes: [AxisLayout; 3],
    gap: f64,
    thickness: f64,
}

impl GapLayout {
    /// Lay out the grid; rejects non-positive thickness, bar or gap
    pub fn compute(
        bounds: &AxisAlignedBox,
        values: &FeatureValues,
        frame: &ReferenceFrame,
    ) -> Result<Self> {
        values.validate_shape()?;

        let oriented = oriented_box_from_box(bounds, frame);
        let extents = oriented.extents();
        let axes = Axis::ALL.map(|axis| {
            AxisLayout::compute(
                extents[axis.index()],
                bounds.min[axis.index()],
                values.gap,
                values.bar,
            )
        });

        Ok(Self {
            oriented,
            frame: *frame,
            axes,
            gap: values.gap,
            thickness: values.shell_thickness,
        })
    }

    #[inline]
    pub fn axis(&self, axis: Axis) -> &AxisLayout {
        &self.axes[axis.index()]
    }

    /// Gap counts along X, Y and Z
    pub fn counts(&self) -> [usize; 3] {
        self.axes.map(|a| a.count)
    }

    /// Number of cuts on the face pair perpendicular to `axis`
    pub fn face_cut_count(&self, axis: Axis) -> usize {
        let (u, v) = axis.in_plane();
        2 * self.axis(u).count * self.axis(v).count
    }

    /// `2 * (x*y + x*z + y*z)`
    pub fn expected_cut_count(&self) -> usize {
        Axis::ALL.into_iter().map(|a| self.face_cut_count(a)).sum()
    }

    /// Emit every cut box: X faces, then Y faces, then Z faces
    pub fn cut_boxes(&self) -> Vec<CutBox> {
        let mut cuts = Vec::with_capacity(self.expected_cut_count());
        for axis in Axis::ALL {
            self.push_face_pair(axis, &mut cuts);
        }
        cuts
    }

    /// Cuts through the two faces perpendicular to `axis`
    ///
    /// Rows follow the second in-plane axis, columns the first; in each cell
    /// the negative face comes before the positive one.
    fn push_face_pair(&self, axis: Axis, cuts: &mut Vec<CutBox>) {
        let (u, v) = axis.in_plane();
        let (neg, pos) = Direction::pair(axis);
        let a = axis.index();

        let width_axis = match axis {
            Axis::X | Axis::Z => Axis::Y,
            Axis::Y => Axis::X,
        };
        let length_dir = self.frame.axis(axis);
        let width_dir = self.frame.axis(width_axis);

        let offset = (self.oriented.extents()[a] + self.thickness) / 2.0;

        for cv in self.axis(v).centers() {
            for cu in self.axis(u).centers() {
                for (face, along) in [(neg, -offset), (pos, offset)] {
                    let mut center = Point3::origin();
                    center[a] = self.oriented.center[a] + along;
                    center[u.index()] = cu;
                    center[v.index()] = cv;

                    cuts.push(CutBox {
                        face,
                        bounds: OrientedBox::new(
                            center,
                            length_dir,
                            width_dir,
                            self.thickness,
                            self.gap,
                            self.gap,
                        ),
                    });
                }
            }
        }
    }
}

/// All cut boxes for `bounds` under `values`
pub fn compute_gaps(
    bounds: &AxisAlignedBox,
    values: &FeatureValues,
    frame: &ReferenceFrame,
) -> Result<Vec<CutBox>> {
    Ok(GapLayout::compute(bounds, values, frame)?.cut_boxes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use approx::assert_relative_eq;
    use sinterbox_core::DirectionMap;

    fn values(thickness: f64, bar: f64, gap: f64) -> FeatureValues {
        FeatureValues::new(thickness, bar, gap, DirectionMap::splat(0.0))
    }

    #[test]
    fn test_axis_layout_worked_example() {
        let layout = AxisLayout::compute(100.0, 0.0, 10.0, 4.0);
        assert_eq!(layout.count, 7);
        assert_relative_eq!(layout.centering_step, 3.0);
        assert_relative_eq!(layout.first_center, 8.0);
        assert_relative_eq!(layout.center(6), 92.0);
    }

    #[test]
    fn test_axis_layout_tiling_identity() {
        for (extent, gap, bar) in [
            (10.0, 10.0, 4.0),
            (37.5, 3.0, 1.25),
            (99.9, 7.0, 2.0),
            (1.0, 0.3, 0.05),
        ] {
            let layout = AxisLayout::compute(extent, -5.0, gap, bar);
            assert!(layout.count >= 1);
            let n = layout.count as f64;
            assert_relative_eq!(
                2.0 * layout.centering_step + n * gap + (n - 1.0) * bar,
                extent,
                epsilon = 1e-9
            );
            assert!(layout.centering_step >= 0.0);
            assert!(layout.centering_step < gap + bar);
        }
    }

    #[test]
    fn test_axis_shorter_than_gap_has_no_tiles() {
        let layout = AxisLayout::compute(9.999, 2.0, 10.0, 4.0);
        assert_eq!(layout.count, 0);
        assert_eq!(layout.centering_step, 0.0);
        assert_eq!(layout.centers().count(), 0);

        let zero = AxisLayout::compute(0.0, 2.0, 10.0, 4.0);
        assert_eq!(zero.count, 0);
    }

    #[test]
    fn test_extent_equal_to_gap_fits_one_centered_tile() {
        let layout = AxisLayout::compute(10.0, 0.0, 10.0, 4.0);
        assert_eq!(layout.count, 1);
        assert_relative_eq!(layout.centering_step, 0.0);
        assert_relative_eq!(layout.center(0), 5.0);
    }

    #[test]
    fn test_grid_is_symmetric_about_axis_center() {
        let layout = AxisLayout::compute(57.0, 3.0, 6.0, 2.5);
        let mid = 3.0 + 57.0 / 2.0;
        let centers: Vec<f64> = layout.centers().collect();
        for (a, b) in centers.iter().zip(centers.iter().rev()) {
            assert_relative_eq!(a - mid, mid - b, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_cut_boxes_have_gap_and_thickness_extents() {
        let bounds = AxisAlignedBox::new(Point3::new(0.0, 0.0, 0.0), Point3::new(30.0, 20.0, 12.0));
        let frame = ReferenceFrame::standard();
        let cuts = compute_gaps(&bounds, &values(1.5, 2.0, 4.0), &frame).unwrap();
        assert!(!cuts.is_empty());

        for cut in &cuts {
            let normal = frame.axis(cut.face.axis());
            assert_relative_eq!(cut.bounds.extent_along(&normal), 1.5, epsilon = 1e-12);
            let (u, v) = cut.face.axis().in_plane();
            assert_relative_eq!(cut.bounds.extent_along(&frame.axis(u)), 4.0, epsilon = 1e-12);
            assert_relative_eq!(cut.bounds.extent_along(&frame.axis(v)), 4.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_cuts_sit_inside_the_wall() {
        let bounds =
            AxisAlignedBox::new(Point3::new(-7.0, 2.0, 1.0), Point3::new(23.0, 17.0, 31.0));
        let fv = values(2.0, 1.0, 3.0);
        let frame = ReferenceFrame::standard();
        let outer = oriented_box_from_box(&bounds, &frame).grown(4.0).to_axis_aligned();

        for cut in compute_gaps(&bounds, &fv, &frame).unwrap() {
            let cut_bounds = cut.bounds.to_axis_aligned();
            assert!(outer.contains_box(&cut_bounds, 1e-9));

            // Through-wall span lies exactly between inner and outer faces
            let a = cut.face.axis().index();
            if cut.face.is_positive() {
                assert_relative_eq!(cut_bounds.min[a], bounds.max[a], epsilon = 1e-9);
                assert_relative_eq!(cut_bounds.max[a], bounds.max[a] + 2.0, epsilon = 1e-9);
            } else {
                assert_relative_eq!(cut_bounds.max[a], bounds.min[a], epsilon = 1e-9);
                assert_relative_eq!(cut_bounds.min[a], bounds.min[a] - 2.0, epsilon = 1e-9);
            }

            // In-plane span stays within the inner box
            let (u, v) = cut.face.axis().in_plane();
            for i in [u.index(), v.index()] {
                assert!(cut_bounds.min[i] >= bounds.min[i] - 1e-9);
                assert!(cut_bounds.max[i] <= bounds.max[i] + 1e-9);
            }
        }
    }

    #[test]
    fn test_emission_order() {
        let bounds = AxisAlignedBox::new(Point3::new(0.0, 0.0, 0.0), Point3::new(10.0, 10.0, 10.0));
        let cuts =
            compute_gaps(&bounds, &values(1.0, 2.0, 3.0), &ReferenceFrame::standard()).unwrap();
        // count = floor(12 / 5) = 2 on every axis, 8 cuts per face pair
        assert_eq!(cuts.len(), 24);
        assert!(cuts[..8].iter().all(|c| c.face.axis() == Axis::X));
        assert!(cuts[8..16].iter().all(|c| c.face.axis() == Axis::Y));
        assert!(cuts[16..].iter().all(|c| c.face.axis() == Axis::Z));
        assert_eq!(cuts[0].face, Direction::XNeg);
        assert_eq!(cuts[1].face, Direction::XPos);
        // X faces: Y varies fastest
        assert!(cuts[2].bounds.center.y > cuts[0].bounds.center.y);
        assert_eq!(cuts[2].bounds.center.z, cuts[0].bounds.center.z);
    }

    #[test]
    fn test_invalid_shape_is_rejected() {
        let bounds = AxisAlignedBox::fallback();
        let frame = ReferenceFrame::standard();
        for fv in [values(0.0, 1.0, 1.0), values(1.0, 0.0, 1.0), values(1.0, 1.0, -2.0)] {
            assert!(matches!(
                compute_gaps(&bounds, &fv, &frame),
                Err(Error::InvalidParameter(_))
            ));
        }
    }

    #[test]
    fn test_degenerate_box_has_no_cuts_on_flat_axis() {
        let flat = AxisAlignedBox::new(Point3::new(0.0, 0.0, 5.0), Point3::new(40.0, 40.0, 5.0));
        let layout =
            GapLayout::compute(&flat, &values(1.0, 2.0, 5.0), &ReferenceFrame::standard())
                .unwrap();
        assert_eq!(layout.axis(Axis::Z).count, 0);
        assert_eq!(layout.face_cut_count(Axis::X), 0);
        assert_eq!(layout.face_cut_count(Axis::Y), 0);
        assert!(layout.face_cut_count(Axis::Z) > 0);
        assert_eq!(layout.cut_boxes().len(), layout.face_cut_count(Axis::Z));
    }

    #[test]
    fn test_point_box_produces_nothing() {
        let p = Point3::new(1.0, 1.0, 1.0);
        let cuts = compute_gaps(
            &AxisAlignedBox::new(p, p),
            &values(1.0, 1.0, 1.0),
            &ReferenceFrame::standard(),
        )
        .unwrap();
        assert!(cuts.is_empty());
    }
}
