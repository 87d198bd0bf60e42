/// Scene configuration
use nalgebra::Point3;

use crate::material::Color;

/// Tunables for scene assembly; `Default` matches the stock dice display
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    /// World units between neighbouring grid slots
    pub spread: f32,
    pub background: Color,
    pub camera: CameraConfig,
    pub light: LightConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CameraConfig {
    pub fov_degrees: f32,
    /// Aspect ratio until the first frame measures the surface
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    /// Distance from the origin along +Z
    pub distance: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LightConfig {
    pub color: Color,
    pub intensity: f32,
    pub position: Point3<f32>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            spread: 15.0,
            background: Color::from_hex(0x000000),
            camera: CameraConfig::default(),
            light: LightConfig::default(),
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 40.0,
            aspect: 2.0,
            near: 0.1,
            far: 1000.0,
            distance: 120.0,
        }
    }
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            color: Color::from_hex(0xffffff),
            intensity: 1.0,
            position: Point3::new(-1.0, 2.0, 4.0),
        }
    }
}
