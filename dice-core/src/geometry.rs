/// Geometry primitives for 3D rendering
use nalgebra::{Point3, Vector3};
use thiserror::Error;

/// Errors raised while building or checking an indexed geometry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    #[error("geometry has no {0}")]
    Empty(&'static str),
    #[error("face {face} references vertex {index}, but only {len} vertices exist")]
    IndexOutOfRange { face: usize, index: u32, len: usize },
}

/// A 3D vertex with position and normal
#[derive(Debug, Clone, Copy)]
pub struct Vertex {
    pub position: Point3<f32>,
    pub normal: Vector3<f32>,
}

impl Vertex {
    pub fn from_parts(position: Point3<f32>, normal: Vector3<f32>) -> Self {
        Self { position, normal }
    }
}

/// A triangle face defined by three vertices
#[derive(Debug, Clone)]
pub struct Triangle {
    pub vertices: [Vertex; 3],
}

impl Triangle {
    pub fn new(v0: Vertex, v1: Vertex, v2: Vertex) -> Self {
        Self {
            vertices: [v0, v1, v2],
        }
    }
}

/// A 3D mesh composed of triangles
#[derive(Debug, Clone)]
pub struct Mesh {
    pub triangles: Vec<Triangle>,
}

impl Mesh {
    pub fn new() -> Self {
        Self {
            triangles: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            triangles: Vec::with_capacity(capacity),
        }
    }

    pub fn add_triangle(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}

/// Indexed triangle geometry: a vertex list plus faces referencing it
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    pub vertices: Vec<Point3<f32>>,
    pub faces: Vec<[u32; 3]>,
}

impl Geometry {
    /// Build a geometry, rejecting empty input and dangling face indices
    pub fn new(vertices: Vec<Point3<f32>>, faces: Vec<[u32; 3]>) -> Result<Self, GeometryError> {
        let geometry = Self { vertices, faces };
        geometry.validate()?;
        Ok(geometry)
    }

    pub fn validate(&self) -> Result<(), GeometryError> {
        if self.vertices.is_empty() {
            return Err(GeometryError::Empty("vertices"));
        }
        if self.faces.is_empty() {
            return Err(GeometryError::Empty("faces"));
        }

        let len = self.vertices.len();
        for (face, indices) in self.faces.iter().enumerate() {
            if let Some(&index) = indices.iter().find(|&&i| i as usize >= len) {
                return Err(GeometryError::IndexOutOfRange { face, index, len });
            }
        }
        Ok(())
    }

    /// Corner positions of one face
    ///
    /// Panics if `face` is out of range or the geometry failed validation.
    pub fn face_positions(&self, face: usize) -> [Point3<f32>; 3] {
        self.faces[face].map(|i| self.vertices[i as usize])
    }

    /// Largest distance from the origin to any vertex
    pub fn bounding_radius(&self) -> f32 {
        self.vertices
            .iter()
            .map(|v| v.coords.norm())
            .fold(0.0, f32::max)
    }

    /// Expand into a flat-shaded triangle mesh, every vertex carrying its face normal
    pub fn to_mesh(&self) -> Mesh {
        let mut mesh = Mesh::with_capacity(self.faces.len());
        for face in 0..self.faces.len() {
            let [a, b, c] = self.face_positions(face);
            let normal = face_normal(&a, &b, &c);
            mesh.add_triangle(Triangle::new(
                Vertex::from_parts(a, normal),
                Vertex::from_parts(b, normal),
                Vertex::from_parts(c, normal),
            ));
        }
        mesh
    }
}

/// Unit normal of a counter-clockwise triangle, zero for degenerate input
pub fn face_normal(a: &Point3<f32>, b: &Point3<f32>, c: &Point3<f32>) -> Vector3<f32> {
    let edge1 = b - a;
    let edge2 = c - a;

    edge1
        .cross(&edge2)
        .try_normalize(f32::EPSILON)
        .unwrap_or_else(Vector3::zeros)
}

/// Fails if any face of a geometry centered on the origin winds inward
#[cfg(test)]
pub(crate) fn assert_outward(geometry: &Geometry) {
    for face in 0..geometry.faces.len() {
        let [a, b, c] = geometry.face_positions(face);
        let centroid = (a.coords + b.coords + c.coords) / 3.0;
        let normal = face_normal(&a, &b, &c);
        assert!(
            normal.dot(&centroid) > 0.0,
            "face {face} {:?} winds inward",
            geometry.faces[face]
        );
    }
}
