/// Dice shapes, their geometry and their slot in the display grid
use nalgebra::Point3;
use std::f32::consts::TAU;
use std::fmt;

use crate::geometry::{Geometry, GeometryError};
use crate::primitives;

/// Radius shared by the platonic dice and the d10
pub const DIE_RADIUS: f32 = 7.0;

/// Edge length of the d3 and d6 cubes
pub const CUBE_SIZE: f32 = 8.0;

/// Z offset alternating around the d10's equator
pub const D10_EQUATOR_OFFSET: f32 = 0.105;

/// One die shape, named by its face count
///
/// `D3` and `D6` are separate dice that share the same cube mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DieKind {
    D2,
    D3,
    D4,
    D6,
    D8,
    D10,
    D12,
    D20,
}

impl DieKind {
    pub const ALL: [DieKind; 8] = [
        DieKind::D2,
        DieKind::D3,
        DieKind::D4,
        DieKind::D6,
        DieKind::D8,
        DieKind::D10,
        DieKind::D12,
        DieKind::D20,
    ];

    pub fn sides(self) -> u32 {
        match self {
            DieKind::D2 => 2,
            DieKind::D3 => 3,
            DieKind::D4 => 4,
            DieKind::D6 => 6,
            DieKind::D8 => 8,
            DieKind::D10 => 10,
            DieKind::D12 => 12,
            DieKind::D20 => 20,
        }
    }

    /// Build this die's geometry
    pub fn geometry(self) -> Result<Geometry, GeometryError> {
        let geometry = match self {
            DieKind::D2 => primitives::cylinder(4.0, 4.0, 8.0, 12),
            DieKind::D3 | DieKind::D6 => primitives::cuboid(CUBE_SIZE, CUBE_SIZE, CUBE_SIZE),
            DieKind::D4 => primitives::tetrahedron(DIE_RADIUS, 0),
            DieKind::D8 => primitives::octahedron(DIE_RADIUS, 0),
            DieKind::D10 => {
                let (vertices, faces) = trapezohedron();
                primitives::polyhedron(&vertices, &faces, DIE_RADIUS, 0)?
            }
            DieKind::D12 => primitives::dodecahedron(DIE_RADIUS, 0),
            DieKind::D20 => primitives::icosahedron(DIE_RADIUS, 0),
        };
        Ok(geometry)
    }
}

impl fmt::Display for DieKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "d{}", self.sides())
    }
}

/// Grid coordinates, scaled by the scene's spread to get a world position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSlot {
    pub x: i32,
    pub y: i32,
}

impl GridSlot {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn world_position(self, spread: f32) -> Point3<f32> {
        Point3::new(self.x as f32 * spread, self.y as f32 * spread, 0.0)
    }
}

/// The nine dice on a 3x3 grid, top row first; the d10 appears twice
pub const LAYOUT: [(DieKind, GridSlot); 9] = [
    (DieKind::D2, GridSlot::new(-2, 2)),
    (DieKind::D3, GridSlot::new(0, 2)),
    (DieKind::D4, GridSlot::new(2, 2)),
    (DieKind::D6, GridSlot::new(-2, 0)),
    (DieKind::D8, GridSlot::new(0, 0)),
    (DieKind::D10, GridSlot::new(2, 0)),
    (DieKind::D10, GridSlot::new(-2, -2)),
    (DieKind::D12, GridSlot::new(0, -2)),
    (DieKind::D20, GridSlot::new(2, -2)),
];

/// Pentagonal trapezohedron at unit scale: two apexes, then ten equator
/// points alternating below and above the XY plane.
pub fn trapezohedron() -> (Vec<Point3<f32>>, Vec<[u32; 3]>) {
    const SIDES: u32 = 10;

    let mut vertices = vec![Point3::new(0.0, 0.0, 1.0), Point3::new(0.0, 0.0, -1.0)];
    for i in 0..SIDES {
        let b = i as f32 * TAU / SIDES as f32;
        let z = if i % 2 == 1 {
            D10_EQUATOR_OFFSET
        } else {
            -D10_EQUATOR_OFFSET
        };
        vertices.push(Point3::new(-b.cos(), -b.sin(), z));
    }

    let mut faces = Vec::with_capacity(2 * SIDES as usize);
    for i in 0..SIDES {
        faces.push([0, 2 + i, 2 + (i + 1) % SIDES]);
    }
    for i in 0..SIDES {
        faces.push([1, 2 + (i + 1) % SIDES, 2 + i]);
    }

    (vertices, faces)
}
