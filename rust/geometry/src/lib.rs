// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Sinter box geometry
//!
//! Shell construction, gap layout and gap sizing for sinter boxes, using
//! nalgebra for vector math and csgrs for the mesh boolean kernel.

pub mod auto_gap;
pub mod bounds;
pub mod csg;
pub mod error;
pub mod gaps;
pub mod mesh;
pub mod oriented;
pub mod shell;
pub mod solid;
pub mod triangulation;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Point3, Vector2, Vector3};

pub use auto_gap::{max_side_gap, recommend_gap, GapBounds, GapChoice};
pub use bounds::{union_bounding_box, AxisAlignedBox};
pub use csg::{box_mesh, CsgKernel};
pub use error::{Error, Result};
pub use gaps::{compute_gaps, AxisLayout, CutBox, GapLayout};
pub use mesh::Mesh;
pub use oriented::{oriented_box_from_box, OrientedBox, ReferenceFrame};
pub use shell::{build_shell, shell_boxes, ShellBoxes};
pub use solid::{Solid, SolidKernel};
pub use triangulation::triangulate_polygon;
