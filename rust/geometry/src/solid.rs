// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Seams to the solid-modeling kernel
//!
//! The layout code never touches solid representations directly. Enclosed
//! bodies are queried through [`Solid`], and the shell and its cuts are
//! materialised through a [`SolidKernel`].

use crate::bounds::AxisAlignedBox;
use crate::error::Result;
use crate::oriented::OrientedBox;
use nalgebra::Vector3;

/// A body that can be enclosed by a sinter box
pub trait Solid {
    /// World-space bounding box
    fn bounding_box(&self) -> AxisAlignedBox;

    /// Extents of the body's bounding box after its principal axes have been
    /// aligned with the reference frame
    fn principal_extents(&self) -> Vector3<f64>;
}

/// Box construction and boolean subtraction
pub trait SolidKernel {
    type Solid;

    /// Build a solid box from its oriented description
    fn create_box(&self, bounds: &OrientedBox) -> Result<Self::Solid>;

    /// `target - tool`
    fn subtract(&self, target: &Self::Solid, tool: &Self::Solid) -> Result<Self::Solid>;
}

impl Solid for AxisAlignedBox {
    fn bounding_box(&self) -> AxisAlignedBox {
        *self
    }

    fn principal_extents(&self) -> Vector3<f64> {
        self.extents()
    }
}

impl<T: Solid + ?Sized> Solid for &T {
    fn bounding_box(&self) -> AxisAlignedBox {
        (**self).bounding_box()
    }

    fn principal_extents(&self) -> Vector3<f64> {
        (**self).principal_extents()
    }
}

impl<T: Solid + ?Sized> Solid for Box<T> {
    fn bounding_box(&self) -> AxisAlignedBox {
        (**self).bounding_box()
    }

    fn principal_extents(&self) -> Vector3<f64> {
        (**self).principal_extents()
    }
}
