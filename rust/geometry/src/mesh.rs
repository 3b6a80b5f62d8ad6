// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Mesh data structures

use crate::bounds::AxisAlignedBox;
use crate::solid::Solid;
use nalgebra::{Matrix3, Point3, Vector3};

/// Triangle mesh
#[derive(Debug, Clone)]
pub struct Mesh {
    /// Vertex positions (x, y, z)
    pub positions: Vec<f32>,
    /// Vertex normals (nx, ny, nz)
    pub normals: Vec<f32>,
    /// Triangle indices (i0, i1, i2)
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Create a new empty mesh
    pub fn new() -> Self {
        Self {
            positions: Vec::new(),
            normals: Vec::new(),
            indices: Vec::new(),
        }
    }

    /// Create a mesh with capacity
    pub fn with_capacity(vertex_count: usize, index_count: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertex_count * 3),
            normals: Vec::with_capacity(vertex_count * 3),
            indices: Vec::with_capacity(index_count),
        }
    }

    /// Add a vertex with normal
    #[inline]
    pub fn add_vertex(&mut self, position: Point3<f64>, normal: Vector3<f64>) {
        self.positions.push(position.x as f32);
        self.positions.push(position.y as f32);
        self.positions.push(position.z as f32);

        self.normals.push(normal.x as f32);
        self.normals.push(normal.y as f32);
        self.normals.push(normal.z as f32);
    }

    /// Add a triangle
    #[inline]
    pub fn add_triangle(&mut self, i0: u32, i1: u32, i2: u32) {
        self.indices.push(i0);
        self.indices.push(i1);
        self.indices.push(i2);
    }

    /// Get vertex count
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Get triangle count
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Check if mesh is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Vertex position in f64
    #[inline]
    pub fn vertex(&self, index: usize) -> Point3<f64> {
        Point3::new(
            self.positions[index * 3] as f64,
            self.positions[index * 3 + 1] as f64,
            self.positions[index * 3 + 2] as f64,
        )
    }

    pub fn vertices(&self) -> impl Iterator<Item = Point3<f64>> + '_ {
        self.positions
            .chunks_exact(3)
            .map(|c| Point3::new(c[0] as f64, c[1] as f64, c[2] as f64))
    }

    /// Iterate triangles as vertex triples
    pub fn triangles(&self) -> impl Iterator<Item = [Point3<f64>; 3]> + '_ {
        self.indices.chunks_exact(3).map(|tri| {
            [
                self.vertex(tri[0] as usize),
                self.vertex(tri[1] as usize),
                self.vertex(tri[2] as usize),
            ]
        })
    }

    /// Calculate bounds in f64; an empty mesh has a degenerate box at the origin
    pub fn bounds(&self) -> AxisAlignedBox {
        let mut vertices = self.vertices();
        let first = match vertices.next() {
            Some(v) => v,
            None => return AxisAlignedBox::new(Point3::origin(), Point3::origin()),
        };
        let mut bounds = AxisAlignedBox::new(first, first);
        vertices.for_each(|v| bounds.expand(&v));
        bounds
    }

    /// Enclosed volume (divergence theorem over outward-wound triangles)
    pub fn volume(&self) -> f64 {
        self.triangles()
            .map(|[a, b, c]| a.coords.dot(&b.coords.cross(&c.coords)))
            .sum::<f64>()
            / 6.0
    }

    /// Average of all vertex positions
    pub fn centroid(&self) -> Point3<f64> {
        let count = self.vertex_count();
        if count == 0 {
            return Point3::origin();
        }
        let sum: Vector3<f64> = self.vertices().map(|v| v.coords).sum();
        Point3::from(sum / count as f64)
    }

    /// Extents of the bounding box taken in the mesh's principal axes (PCA of
    /// the vertex cloud)
    pub fn principal_extents(&self) -> Vector3<f64> {
        if self.is_empty() {
            return Vector3::zeros();
        }

        let centroid = self.centroid();
        let mut cov = Matrix3::zeros();
        for v in self.vertices() {
            let d = v - centroid;
            cov += d * d.transpose();
        }
        let axes = cov.symmetric_eigen().eigenvectors;

        let mut local_min = Vector3::repeat(f64::INFINITY);
        let mut local_max = Vector3::repeat(f64::NEG_INFINITY);
        for v in self.vertices() {
            let local = axes.transpose() * (v - centroid);
            local_min = local_min.inf(&local);
            local_max = local_max.sup(&local);
        }
        local_max - local_min
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}

impl Solid for Mesh {
    fn bounding_box(&self) -> AxisAlignedBox {
        self.bounds()
    }

    fn principal_extents(&self) -> Vector3<f64> {
        Mesh::principal_extents(self)
    }
}
