/// Directional light
use nalgebra::{Point3, Vector3};

use crate::material::Color;

/// Parallel light shining from `position` toward the origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    pub color: Color,
    pub intensity: f32,
    pub position: Point3<f32>,
}

impl DirectionalLight {
    pub fn new(color: Color, intensity: f32, position: Point3<f32>) -> Self {
        Self {
            color,
            intensity,
            position,
        }
    }

    /// Unit vector pointing from the lit surface toward the light
    pub fn direction(&self) -> Vector3<f32> {
        self.position
            .coords
            .try_normalize(f32::EPSILON)
            .unwrap_or_else(Vector3::z)
    }

    /// Lambert term for a unit surface normal
    pub fn diffuse(&self, normal: &Vector3<f32>) -> f32 {
        normal.dot(&self.direction()).max(0.0) * self.intensity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_is_normalized() {
        let light = DirectionalLight::new(Color::WHITE, 1.0, Point3::new(-1.0, 2.0, 4.0));
        let direction = light.direction();
        assert!((direction.norm() - 1.0).abs() < 1e-6);
        assert!((direction - Vector3::new(-1.0, 2.0, 4.0) / 21f32.sqrt()).norm() < 1e-6);
    }

    #[test]
    fn test_diffuse() {
        let light = DirectionalLight::new(Color::WHITE, 1.0, Point3::new(0.0, 0.0, 5.0));
        assert!((light.diffuse(&Vector3::z()) - 1.0).abs() < 1e-6);
        assert_eq!(light.diffuse(&-Vector3::z()), 0.0);
    }
}
