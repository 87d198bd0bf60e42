/// Parametric primitive constructors
///
/// Every constructor returns an indexed [`Geometry`] centered on the origin
/// with counter-clockwise winding seen from outside.
use nalgebra::{Point3, Vector3};
use std::f32::consts::TAU;

use crate::geometry::{Geometry, GeometryError};

/// Y-aligned cylinder with both caps closed
pub fn cylinder(radius_top: f32, radius_bottom: f32, height: f32, radial_segments: u32) -> Geometry {
    let segments = radial_segments.max(3);
    let half = height / 2.0;
    let n = segments;

    let mut vertices = Vec::with_capacity(2 * n as usize + 2);
    for (radius, y) in [(radius_top, half), (radius_bottom, -half)] {
        for j in 0..n {
            let theta = j as f32 / n as f32 * TAU;
            vertices.push(Point3::new(radius * theta.sin(), y, radius * theta.cos()));
        }
    }
    let top_center = 2 * n;
    let bottom_center = 2 * n + 1;
    vertices.push(Point3::new(0.0, half, 0.0));
    vertices.push(Point3::new(0.0, -half, 0.0));

    let mut faces = Vec::with_capacity(4 * n as usize);
    for j in 0..n {
        let a = j;
        let b = (j + 1) % n;
        let c = n + j;
        let d = n + (j + 1) % n;

        faces.push([a, c, d]);
        faces.push([a, d, b]);
        faces.push([top_center, a, b]);
        faces.push([bottom_center, d, c]);
    }

    Geometry { vertices, faces }
}

/// Axis-aligned box with eight shared corners
pub fn cuboid(width: f32, height: f32, depth: f32) -> Geometry {
    let (x, y, z) = (width / 2.0, height / 2.0, depth / 2.0);
    let vertices = vec![
        Point3::new(-x, -y, -z),
        Point3::new(x, -y, -z),
        Point3::new(x, y, -z),
        Point3::new(-x, y, -z),
        Point3::new(-x, -y, z),
        Point3::new(x, -y, z),
        Point3::new(x, y, z),
        Point3::new(-x, y, z),
    ];
    let faces = vec![
        // +Z
        [4, 5, 6],
        [4, 6, 7],
        // -Z
        [1, 0, 3],
        [1, 3, 2],
        // +X
        [5, 1, 2],
        [5, 2, 6],
        // -X
        [0, 4, 7],
        [0, 7, 3],
        // +Y
        [7, 6, 2],
        [7, 2, 3],
        // -Y
        [0, 1, 5],
        [0, 5, 4],
    ];

    Geometry { vertices, faces }
}

pub fn tetrahedron(radius: f32, detail: u32) -> Geometry {
    let vertices = [
        [1.0, 1.0, 1.0],
        [-1.0, -1.0, 1.0],
        [-1.0, 1.0, -1.0],
        [1.0, -1.0, -1.0],
    ];
    let faces = [[2, 1, 0], [0, 3, 2], [1, 3, 0], [2, 3, 1]];

    project(&points(&vertices), &faces, radius, detail)
}

pub fn octahedron(radius: f32, detail: u32) -> Geometry {
    let vertices = [
        [1.0, 0.0, 0.0],
        [-1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, -1.0, 0.0],
        [0.0, 0.0, 1.0],
        [0.0, 0.0, -1.0],
    ];
    let faces = [
        [0, 2, 4],
        [0, 4, 3],
        [0, 3, 5],
        [0, 5, 2],
        [1, 2, 5],
        [1, 5, 3],
        [1, 3, 4],
        [1, 4, 2],
    ];

    project(&points(&vertices), &faces, radius, detail)
}

pub fn dodecahedron(radius: f32, detail: u32) -> Geometry {
    let t = (1.0 + 5.0_f32.sqrt()) / 2.0;
    let r = 1.0 / t;
    let vertices = [
        // (±1, ±1, ±1)
        [-1.0, -1.0, -1.0],
        [-1.0, -1.0, 1.0],
        [-1.0, 1.0, -1.0],
        [-1.0, 1.0, 1.0],
        [1.0, -1.0, -1.0],
        [1.0, -1.0, 1.0],
        [1.0, 1.0, -1.0],
        [1.0, 1.0, 1.0],
        // (0, ±1/φ, ±φ)
        [0.0, -r, -t],
        [0.0, -r, t],
        [0.0, r, -t],
        [0.0, r, t],
        // (±1/φ, ±φ, 0)
        [-r, -t, 0.0],
        [-r, t, 0.0],
        [r, -t, 0.0],
        [r, t, 0.0],
        // (±φ, 0, ±1/φ)
        [-t, 0.0, -r],
        [t, 0.0, -r],
        [-t, 0.0, r],
        [t, 0.0, r],
    ];
    // Three triangles per pentagon
    let faces = [
        [3, 11, 7],
        [3, 7, 15],
        [3, 15, 13],
        [7, 19, 17],
        [7, 17, 6],
        [7, 6, 15],
        [17, 4, 8],
        [17, 8, 10],
        [17, 10, 6],
        [8, 0, 16],
        [8, 16, 2],
        [8, 2, 10],
        [0, 12, 1],
        [0, 1, 18],
        [0, 18, 16],
        [6, 10, 2],
        [6, 2, 13],
        [6, 13, 15],
        [2, 16, 18],
        [2, 18, 3],
        [2, 3, 13],
        [18, 1, 9],
        [18, 9, 11],
        [18, 11, 3],
        [4, 14, 12],
        [4, 12, 0],
        [4, 0, 8],
        [11, 9, 5],
        [11, 5, 19],
        [11, 19, 7],
        [19, 5, 14],
        [19, 14, 4],
        [19, 4, 17],
        [1, 12, 14],
        [1, 14, 5],
        [1, 5, 9],
    ];

    project(&points(&vertices), &faces, radius, detail)
}

pub fn icosahedron(radius: f32, detail: u32) -> Geometry {
    let t = (1.0 + 5.0_f32.sqrt()) / 2.0;
    let vertices = [
        [-1.0, t, 0.0],
        [1.0, t, 0.0],
        [-1.0, -t, 0.0],
        [1.0, -t, 0.0],
        [0.0, -1.0, t],
        [0.0, 1.0, t],
        [0.0, -1.0, -t],
        [0.0, 1.0, -t],
        [t, 0.0, -1.0],
        [t, 0.0, 1.0],
        [-t, 0.0, -1.0],
        [-t, 0.0, 1.0],
    ];
    let faces = [
        [0, 11, 5],
        [0, 5, 1],
        [0, 1, 7],
        [0, 7, 10],
        [0, 10, 11],
        [1, 5, 9],
        [5, 11, 4],
        [11, 10, 2],
        [10, 7, 6],
        [7, 1, 8],
        [3, 9, 4],
        [3, 4, 2],
        [3, 2, 6],
        [3, 6, 8],
        [3, 8, 9],
        [4, 9, 5],
        [2, 4, 11],
        [6, 2, 10],
        [8, 6, 7],
        [9, 8, 1],
    ];

    project(&points(&vertices), &faces, radius, detail)
}

/// Generic polyhedron: validate the faces, subdivide each `detail` times,
/// then push every vertex out onto a sphere of `radius`.
///
/// With `detail == 0` the vertex list keeps its length and order.
pub fn polyhedron(
    vertices: &[Point3<f32>],
    faces: &[[u32; 3]],
    radius: f32,
    detail: u32,
) -> Result<Geometry, GeometryError> {
    Geometry::new(vertices.to_vec(), faces.to_vec())?;
    Ok(project(vertices, faces, radius, detail))
}

fn points(raw: &[[f32; 3]]) -> Vec<Point3<f32>> {
    raw.iter().map(|&[x, y, z]| Point3::new(x, y, z)).collect()
}

fn project(vertices: &[Point3<f32>], faces: &[[u32; 3]], radius: f32, detail: u32) -> Geometry {
    let (vertices, faces) = if detail == 0 {
        (vertices.to_vec(), faces.to_vec())
    } else {
        subdivide(vertices, faces, detail)
    };

    let vertices = vertices
        .into_iter()
        .map(|v| match v.coords.try_normalize(f32::EPSILON) {
            Some(direction) => Point3::from(direction * radius),
            None => v,
        })
        .collect();

    Geometry { vertices, faces }
}

/// Split every face into `(detail + 1)^2` triangles on a barycentric grid.
///
/// Row `i` of the grid runs parallel to edge `ab`, moving toward `c`.
fn subdivide(
    vertices: &[Point3<f32>],
    faces: &[[u32; 3]],
    detail: u32,
) -> (Vec<Point3<f32>>, Vec<[u32; 3]>) {
    let cols = detail as usize + 1;
    let mut out_vertices: Vec<Point3<f32>> = Vec::new();
    let mut out_faces = Vec::with_capacity(faces.len() * cols * cols);

    for face in faces {
        let [a, b, c]: [Vector3<f32>; 3] = face.map(|i| vertices[i as usize].coords);

        let mut grid: Vec<Vec<u32>> = Vec::with_capacity(cols + 1);
        for i in 0..=cols {
            let t = i as f32 / cols as f32;
            let aj = a.lerp(&c, t);
            let bj = b.lerp(&c, t);
            let rows = cols - i;

            let mut row = Vec::with_capacity(rows + 1);
            for j in 0..=rows {
                let p = if rows == 0 {
                    aj
                } else {
                    aj.lerp(&bj, j as f32 / rows as f32)
                };
                row.push(out_vertices.len() as u32);
                out_vertices.push(Point3::from(p));
            }
            grid.push(row);
        }

        for i in 0..cols {
            for j in 0..(2 * (cols - i) - 1) {
                let k = j / 2;
                if j % 2 == 0 {
                    out_faces.push([grid[i][k + 1], grid[i + 1][k], grid[i][k]]);
                } else {
                    out_faces.push([grid[i][k + 1], grid[i + 1][k + 1], grid[i + 1][k]]);
                }
            }
        }
    }

    (out_vertices, out_faces)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::assert_outward;

    fn assert_on_sphere(geometry: &Geometry, radius: f32) {
        for v in &geometry.vertices {
            assert!((v.coords.norm() - radius).abs() < 1e-4);
        }
    }

    #[test]
    fn test_platonic_counts() {
        let cases = [
            (tetrahedron(7.0, 0), 4, 4),
            (octahedron(7.0, 0), 6, 8),
            (dodecahedron(7.0, 0), 20, 36),
            (icosahedron(7.0, 0), 12, 20),
        ];
        for (geometry, vertices, faces) in cases {
            assert!(geometry.validate().is_ok());
            assert_eq!(geometry.vertices.len(), vertices);
            assert_eq!(geometry.faces.len(), faces);
            assert_on_sphere(&geometry, 7.0);
            assert_outward(&geometry);
        }
    }

    #[test]
    fn test_cuboid() {
        let geometry = cuboid(8.0, 8.0, 8.0);
        assert!(geometry.validate().is_ok());
        assert_eq!(geometry.vertices.len(), 8);
        assert_eq!(geometry.faces.len(), 12);
        for v in &geometry.vertices {
            assert_eq!(v.x.abs(), 4.0);
            assert_eq!(v.y.abs(), 4.0);
            assert_eq!(v.z.abs(), 4.0);
        }
        assert_outward(&geometry);
    }

    #[test]
    fn test_cylinder() {
        let geometry = cylinder(4.0, 4.0, 8.0, 12);
        assert!(geometry.validate().is_ok());
        assert_eq!(geometry.vertices.len(), 26);
        assert_eq!(geometry.faces.len(), 48);
        for v in &geometry.vertices {
            assert_eq!(v.y.abs(), 4.0);
            let r = (v.x * v.x + v.z * v.z).sqrt();
            assert!(r < 1e-6 || (r - 4.0).abs() < 1e-5);
        }
        assert_outward(&geometry);
    }

    #[test]
    fn test_cylinder_clamps_segments() {
        let geometry = cylinder(1.0, 1.0, 1.0, 1);
        assert_eq!(geometry.faces.len(), 12);
    }

    #[test]
    fn test_subdivision_counts() {
        for detail in 1..4 {
            let geometry = octahedron(2.0, detail);
            let cols = detail as usize + 1;
            assert!(geometry.validate().is_ok());
            assert_eq!(geometry.faces.len(), 8 * cols * cols);
            assert_on_sphere(&geometry, 2.0);
            assert_outward(&geometry);
        }
    }

    #[test]
    fn test_polyhedron_rejects_bad_faces() {
        let vertices = points(&[[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
        let result = polyhedron(&vertices, &[[0, 1, 5]], 1.0, 0);
        assert!(matches!(
            result,
            Err(GeometryError::IndexOutOfRange { index: 5, .. })
        ));
    }

    #[test]
    fn test_polyhedron_keeps_order_without_detail() {
        let vertices = points(&[[2.0, 0.0, 0.0], [0.0, 3.0, 0.0], [0.0, 0.0, 4.0]]);
        let geometry = polyhedron(&vertices, &[[0, 1, 2]], 1.0, 0).unwrap();
        assert_eq!(geometry.faces, vec![[0, 1, 2]]);
        assert!((geometry.vertices[0] - Point3::new(1.0, 0.0, 0.0)).norm() < 1e-6);
        assert!((geometry.vertices[1] - Point3::new(0.0, 1.0, 0.0)).norm() < 1e-6);
        assert!((geometry.vertices[2] - Point3::new(0.0, 0.0, 1.0)).norm() < 1e-6);
    }
}
