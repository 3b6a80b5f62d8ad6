// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! CSG (Constructive Solid Geometry) kernel
//!
//! Mesh-based [`SolidKernel`] backed by csgrs. Boxes become 12-triangle
//! meshes; subtraction round-trips through csgrs BSP meshes.

use crate::error::{Error, Result};
use crate::mesh::Mesh;
use crate::oriented::OrientedBox;
use crate::solid::SolidKernel;
use crate::triangulation::{polygon_normal, project_to_2d, triangulate_polygon};
use nalgebra::{Point3, Vector3};

/// Corner indices of each box face, outward winding (two triangles per face)
///
/// Corners follow [`OrientedBox::corners`]: bit 0 = +length, bit 1 = +width,
/// bit 2 = +height.
const BOX_TRIANGLES: [[usize; 3]; 12] = [
    // -height
    [0, 3, 1],
    [0, 2, 3],
    // +height
    [4, 5, 7],
    [4, 7, 6],
    // -length
    [0, 4, 6],
    [0, 6, 2],
    // +length
    [1, 3, 7],
    [1, 7, 5],
    // -width
    [0, 1, 5],
    [0, 5, 4],
    // +width
    [2, 6, 7],
    [2, 7, 3],
];

/// Build a closed triangle mesh for an oriented box
pub fn box_mesh(bounds: &OrientedBox) -> Mesh {
    let corners = bounds.corners();
    let mut mesh = Mesh::with_capacity(36, 36);

    for tri in BOX_TRIANGLES {
        let [v0, v1, v2] = tri.map(|i| corners[i]);
        let normal = (v1 - v0)
            .cross(&(v2 - v0))
            .try_normalize(1e-12)
            .unwrap_or_else(Vector3::zeros);
        let base = mesh.vertex_count() as u32;
        mesh.add_vertex(v0, normal);
        mesh.add_vertex(v1, normal);
        mesh.add_vertex(v2, normal);
        mesh.add_triangle(base, base + 1, base + 2);
    }

    mesh
}

/// Triangulate a planar face of a boolean result, projected along `normal`
///
/// Fails when the face has area in 3D but collapses in its projection,
/// which happens when `normal` lies in the face plane.
fn triangulate_face(points: &[Point3<f64>], normal: &Vector3<f64>) -> Result<Vec<usize>> {
    if points.len() == 3 {
        return Ok(vec![0, 1, 2]);
    }

    let projected = project_to_2d(points, normal);
    let n = projected.len();
    let twice_area: f64 = (0..n)
        .map(|i| {
            let (p, q) = (projected[i], projected[(i + 1) % n]);
            p.x * q.y - q.x * p.y
        })
        .sum();
    if twice_area.abs() < 1e-12 {
        return Err(Error::TriangulationError(format!(
            "face with {} vertices has no area in its projection plane",
            n
        )));
    }

    triangulate_polygon(&projected)
}

/// Mesh kernel using csgrs for boolean difference
#[derive(Debug, Clone, Copy, Default)]
pub struct CsgKernel;

impl CsgKernel {
    pub fn new() -> Self {
        Self
    }

    /// Convert our Mesh format to csgrs Mesh format
    fn mesh_to_csgrs(mesh: &Mesh) -> csgrs::mesh::Mesh<()> {
        use csgrs::mesh::{polygon::Polygon, vertex::Vertex, Mesh as CSGMesh};

        let polygons: Vec<Polygon<()>> = mesh
            .triangles()
            .filter_map(|[v0, v1, v2]| {
                // Skip degenerate triangles to avoid NaN propagation
                let face_normal = (v1 - v0).cross(&(v2 - v0)).try_normalize(1e-10)?;
                Some(Polygon::new(
                    vec![
                        Vertex::new(v0, face_normal),
                        Vertex::new(v1, face_normal),
                        Vertex::new(v2, face_normal),
                    ],
                    None,
                ))
            })
            .collect();

        CSGMesh::from_polygons(&polygons, None)
    }

    /// Convert csgrs Mesh format back to our Mesh format
    ///
    /// Zero-area polygons are skipped; any other polygon that cannot be
    /// triangulated fails the whole conversion.
    fn csgrs_to_mesh(csg_mesh: &csgrs::mesh::Mesh<()>) -> Result<Mesh> {
        let mut mesh = Mesh::new();

        for polygon in &csg_mesh.polygons {
            let vertices = &polygon.vertices;
            if vertices.len() < 3 {
                continue;
            }

            let points: Vec<Point3<f64>> = vertices
                .iter()
                .map(|v| Point3::new(v.pos[0], v.pos[1], v.pos[2]))
                .collect();
            if points.iter().any(|p| !p.coords.iter().all(|c| c.is_finite())) {
                return Err(Error::Kernel(
                    "boolean result contains non-finite vertices".to_string(),
                ));
            }

            let Some(face_normal) = polygon_normal(&points) else {
                // Collinear or repeated vertices
                continue;
            };
            let normal = Vector3::new(
                vertices[0].normal[0],
                vertices[0].normal[1],
                vertices[0].normal[2],
            )
            .try_normalize(1e-10)
            .unwrap_or(face_normal);

            let indices = triangulate_face(&points, &normal)?;

            let base = mesh.vertex_count();
            for p in &points {
                mesh.add_vertex(*p, normal);
            }
            for tri in indices.chunks_exact(3) {
                mesh.add_triangle(
                    (base + tri[0]) as u32,
                    (base + tri[1]) as u32,
                    (base + tri[2]) as u32,
                );
            }
        }

        Ok(mesh)
    }

    /// Subtract `opening` from `host`
    pub fn subtract_mesh(&self, host: &Mesh, opening: &Mesh) -> Result<Mesh> {
        use csgrs::traits::CSG;

        if opening.is_empty() || host.is_empty() {
            return Ok(host.clone());
        }

        let host_csg = Self::mesh_to_csgrs(host);
        let opening_csg = Self::mesh_to_csgrs(opening);
        let result = host_csg.difference(&opening_csg);

        Self::csgrs_to_mesh(&result)
    }
}

impl SolidKernel for CsgKernel {
    type Solid = Mesh;

    fn create_box(&self, bounds: &OrientedBox) -> Result<Mesh> {
        let extents = bounds.extents();
        let finite_extents = extents.iter().all(|e| e.is_finite() && *e >= 0.0);
        let finite_center = bounds.center.coords.iter().all(|c| c.is_finite());
        if !finite_extents || !finite_center {
            return Err(Error::Kernel(format!(
                "cannot build a box with extents ({}, {}, {})",
                extents.x, extents.y, extents.z
            )));
        }
        Ok(box_mesh(bounds))
    }

    fn subtract(&self, target: &Mesh, tool: &Mesh) -> Result<Mesh> {
        self.subtract_mesh(target, tool)
    }
}
