/// Scene graph: the dice, one light, one camera
use log::{debug, info};
use nalgebra::{Matrix4, Point3};
use rand::Rng;

use crate::config::SceneConfig;
use crate::dice::{DieKind, GridSlot, LAYOUT};
use crate::geometry::{Geometry, GeometryError, Mesh};
use crate::light::DirectionalLight;
use crate::material::{Color, Material};
use crate::projection::Camera;
use crate::transform::{RotationState, Transform};

/// One die placed in the scene
#[derive(Debug, Clone)]
pub struct SceneObject {
    pub kind: DieKind,
    pub slot: GridSlot,
    pub geometry: Geometry,
    /// Flat-shaded triangles expanded from `geometry`
    pub mesh: Mesh,
    pub material: Material,
    pub position: Point3<f32>,
    pub rotation: RotationState,
}

impl SceneObject {
    pub fn new(
        kind: DieKind,
        slot: GridSlot,
        spread: f32,
        material: Material,
    ) -> Result<Self, GeometryError> {
        let geometry = kind.geometry()?;
        let mesh = geometry.to_mesh();
        Ok(Self {
            kind,
            slot,
            geometry,
            mesh,
            material,
            position: slot.world_position(spread),
            rotation: RotationState::zero(),
        })
    }

    pub fn model_matrix(&self) -> Matrix4<f32> {
        Transform::model_matrix(&self.position, &self.rotation)
    }
}

#[derive(Debug, Clone)]
pub struct Scene {
    pub background: Color,
    pub camera: Camera,
    pub light: DirectionalLight,
    pub objects: Vec<SceneObject>,
}

impl Scene {
    /// Build the camera, the light and every die in [`LAYOUT`], each die
    /// getting its own random hue.
    pub fn assemble<R: Rng + ?Sized>(config: &SceneConfig, rng: &mut R) -> Result<Self, GeometryError> {
        let camera = Camera::new(
            config.camera.fov_degrees,
            config.camera.aspect,
            config.camera.near,
            config.camera.far,
            config.camera.distance,
        );
        let light = DirectionalLight::new(
            config.light.color,
            config.light.intensity,
            config.light.position,
        );

        let mut scene = Self {
            background: config.background,
            camera,
            light,
            objects: Vec::with_capacity(LAYOUT.len()),
        };

        for (kind, slot) in LAYOUT {
            let object = SceneObject::new(kind, slot, config.spread, Material::random(&mut *rng))?;
            debug!(
                "added {} at ({}, {}) with {} vertices, {} faces, radius {:.2}, hue {:.3}",
                kind,
                slot.x,
                slot.y,
                object.geometry.vertices.len(),
                object.geometry.faces.len(),
                object.geometry.bounding_radius(),
                object.material.hue
            );
            scene.add(object);
        }

        info!(
            "scene assembled: {} objects, {} triangles",
            scene.objects.len(),
            scene.triangle_count()
        );
        Ok(scene)
    }

    pub fn add(&mut self, object: SceneObject) {
        self.objects.push(object);
    }

    /// Set every object's X and Y rotation to `angle` radians
    pub fn spin(&mut self, angle: f32) {
        for object in &mut self.objects {
            object.rotation.spin(angle);
        }
    }

    pub fn triangle_count(&self) -> usize {
        self.objects.iter().map(|o| o.mesh.triangles.len()).sum()
    }
}
