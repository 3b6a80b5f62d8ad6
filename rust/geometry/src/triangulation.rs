// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Polygon triangulation for kernel output
//!
//! Boolean results come back as planar polygons. Convex ones (the usual
//! case after BSP splitting) are fanned; anything else goes through earcutr.

use crate::{Error, Point2, Point3, Result, Vector3};

/// Check if a polygon is convex (all turns have the same sign)
fn is_convex(points: &[Point2<f64>]) -> bool {
    let n = points.len();
    if n < 3 {
        return false;
    }

    let mut sign = 0.0f64;
    for i in 0..n {
        let p0 = points[i];
        let p1 = points[(i + 1) % n];
        let p2 = points[(i + 2) % n];
        let cross = (p1.x - p0.x) * (p2.y - p1.y) - (p1.y - p0.y) * (p2.x - p1.x);

        if cross.abs() > 1e-10 {
            if sign == 0.0 {
                sign = cross.signum();
            } else if sign != cross.signum() {
                return false;
            }
        }
    }
    true
}

/// Triangulate a simple polygon, returning indices into `points`
///
/// Convex polygons keep their vertex order, so winding is preserved.
pub fn triangulate_polygon(points: &[Point2<f64>]) -> Result<Vec<usize>> {
    let n = points.len();
    if n < 3 {
        return Err(Error::TriangulationError(format!(
            "need at least 3 points, got {}",
            n
        )));
    }

    if n == 3 || is_convex(points) {
        return Ok((1..n - 1).flat_map(|i| [0, i, i + 1]).collect());
    }

    let flat: Vec<f64> = points.iter().flat_map(|p| [p.x, p.y]).collect();
    earcutr::earcut(&flat, &[], 2).map_err(|e| Error::TriangulationError(format!("{:?}", e)))
}

/// Project points onto the plane with the given normal
///
/// The basis is built against the world axis least parallel to `normal`;
/// the first point is the 2D origin.
pub fn project_to_2d(points: &[Point3<f64>], normal: &Vector3<f64>) -> Vec<Point2<f64>> {
    let Some(origin) = points.first() else {
        return Vec::new();
    };

    let abs = normal.abs();
    let reference = if abs.x <= abs.y && abs.x <= abs.z {
        Vector3::x()
    } else if abs.y <= abs.z {
        Vector3::y()
    } else {
        Vector3::z()
    };
    let u = normal.cross(&reference).normalize();
    let v = normal.cross(&u).normalize();

    points
        .iter()
        .map(|p| {
            let d = p - origin;
            Point2::new(d.dot(&u), d.dot(&v))
        })
        .collect()
}

/// Newell normal of a planar polygon; `None` when degenerate
pub fn polygon_normal(points: &[Point3<f64>]) -> Option<Vector3<f64>> {
    let n = points.len();
    if n < 3 {
        return None;
    }

    let mut normal = Vector3::<f64>::zeros();
    for i in 0..n {
        let current = &points[i];
        let next = &points[(i + 1) % n];
        normal.x += (current.y - next.y) * (current.z + next.z);
        normal.y += (current.z - next.z) * (current.x + next.x);
        normal.z += (current.x - next.x) * (current.y + next.y);
    }
    normal.try_normalize(1e-10)
}
