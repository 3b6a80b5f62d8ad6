// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Hollow shell around the working box

use crate::bounds::AxisAlignedBox;
use crate::error::Result;
use crate::oriented::{oriented_box_from_box, OrientedBox, ReferenceFrame};
use crate::solid::SolidKernel;
use sinterbox_core::ensure_positive;

/// Inner and outer box of a shell, before subtraction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShellBoxes {
    /// The working box itself
    pub inner: OrientedBox,
    /// `inner` grown by twice the wall thickness on every extent
    pub outer: OrientedBox,
    pub thickness: f64,
}

impl ShellBoxes {
    /// `outer - inner` through the kernel
    pub fn build<K: SolidKernel>(&self, kernel: &K) -> Result<K::Solid> {
        let outer = kernel.create_box(&self.outer)?;
        let inner = kernel.create_box(&self.inner)?;
        kernel.subtract(&outer, &inner)
    }
}

/// Describe the shell of `bounds` with wall `thickness`
///
/// Fails with `InvalidParameter` unless `thickness` is finite and positive.
pub fn shell_boxes(
    bounds: &AxisAlignedBox,
    thickness: f64,
    frame: &ReferenceFrame,
) -> Result<ShellBoxes> {
    ensure_positive("shell_thickness", thickness)?;

    let inner = oriented_box_from_box(bounds, frame);
    Ok(ShellBoxes {
        inner,
        outer: inner.grown(thickness * 2.0),
        thickness,
    })
}

/// Build the hollow shell solid for `bounds`
pub fn build_shell<K: SolidKernel>(
    kernel: &K,
    bounds: &AxisAlignedBox,
    thickness: f64,
    frame: &ReferenceFrame,
) -> Result<K::Solid> {
    shell_boxes(bounds, thickness, frame)?.build(kernel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csg::CsgKernel;
    use crate::error::Error;
    use approx::assert_relative_eq;
    use nalgebra::Point3;

    fn box_10() -> AxisAlignedBox {
        AxisAlignedBox::new(Point3::new(0.0, 0.0, 0.0), Point3::new(10.0, 10.0, 10.0))
    }

    #[test]
    fn test_outer_grows_by_twice_thickness() {
        let frame = ReferenceFrame::standard();
        for thickness in [0.01, 0.5, 2.0, 25.0] {
            let shell = shell_boxes(&box_10(), thickness, &frame).unwrap();
            let diff = shell.outer.extents() - shell.inner.extents();
            for d in diff.iter() {
                assert_relative_eq!(*d, 2.0 * thickness, epsilon = 1e-12);
            }
            assert_eq!(shell.outer.center, shell.inner.center);
        }
    }

    #[test]
    fn test_rejects_non_positive_thickness() {
        let frame = ReferenceFrame::standard();
        for thickness in [0.0, -1.0, f64::NAN] {
            assert!(matches!(
                shell_boxes(&box_10(), thickness, &frame),
                Err(Error::InvalidParameter(_))
            ));
        }
    }

    #[test]
    fn test_degenerate_box_gives_thin_shell() {
        let flat = AxisAlignedBox::new(Point3::new(0.0, 0.0, 0.0), Point3::new(10.0, 10.0, 0.0));
        let shell = shell_boxes(&flat, 1.0, &ReferenceFrame::standard()).unwrap();
        assert_eq!(shell.inner.height, 0.0);
        assert_relative_eq!(shell.outer.height, 2.0);
    }

    #[test]
    fn test_build_shell_with_csg_kernel() {
        let kernel = CsgKernel::new();
        let shell = build_shell(&kernel, &box_10(), 1.0, &ReferenceFrame::standard()).unwrap();

        let bounds = shell.bounds();
        assert_relative_eq!(bounds.min, Point3::new(-1.0, -1.0, -1.0), epsilon = 1e-5);
        assert_relative_eq!(bounds.max, Point3::new(11.0, 11.0, 11.0), epsilon = 1e-5);
        // 12^3 - 10^3
        assert_relative_eq!(shell.volume(), 728.0, max_relative = 1e-4);
    }
}
