/// 3D transformation matrices and rotation state
use nalgebra::{Matrix3, Matrix4, Point3, Vector3};

/// Rotation state around three axes (in radians)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationState {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl RotationState {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    /// Set the X and Y angles to the same value, leaving Z alone
    pub fn spin(&mut self, angle: f32) {
        self.x = angle;
        self.y = angle;
    }
}

impl Default for RotationState {
    fn default() -> Self {
        Self::zero()
    }
}

/// Transform builder for 3D transformations
pub struct Transform;

impl Transform {
    /// Create a rotation matrix from a rotation state
    pub fn rotation_matrix(rotation: &RotationState) -> Matrix4<f32> {
        let rx = Matrix4::new_rotation(Vector3::new(rotation.x, 0.0, 0.0));
        let ry = Matrix4::new_rotation(Vector3::new(0.0, rotation.y, 0.0));
        let rz = Matrix4::new_rotation(Vector3::new(0.0, 0.0, rotation.z));

        // Intrinsic X, then Y, then Z
        rx * ry * rz
    }

    /// Create a translation matrix
    pub fn translation_matrix(x: f32, y: f32, z: f32) -> Matrix4<f32> {
        Matrix4::new_translation(&Vector3::new(x, y, z))
    }

    /// Object-to-world matrix: rotate about the object's origin, then move it into place
    pub fn model_matrix(position: &Point3<f32>, rotation: &RotationState) -> Matrix4<f32> {
        Self::translation_matrix(position.x, position.y, position.z) * Self::rotation_matrix(rotation)
    }

    /// Matrix that carries object-space normals into world space
    pub fn normal_matrix(model: &Matrix4<f32>) -> Matrix3<f32> {
        let linear = model.fixed_view::<3, 3>(0, 0).into_owned();
        linear
            .try_inverse()
            .map(|inverse| inverse.transpose())
            .unwrap_or(linear)
    }

    /// Create a model-view-projection matrix
    pub fn mvp_matrix(
        model: &Matrix4<f32>,
        view: &Matrix4<f32>,
        projection: &Matrix4<f32>,
    ) -> Matrix4<f32> {
        projection * view * model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_rotation_state() {
        let mut state = RotationState::zero();
        assert_eq!(state.x, 0.0);
        assert_eq!(state.y, 0.0);
        assert_eq!(state.z, 0.0);

        state.spin(2.5);
        assert_eq!(state, RotationState::new(2.5, 2.5, 0.0));
    }

    #[test]
    fn test_identity_rotation() {
        let rotation = RotationState::zero();
        let matrix = Transform::rotation_matrix(&rotation);
        assert!((matrix - Matrix4::identity()).norm() < 1e-6);
    }

    #[test]
    fn test_rotation_order() {
        // X applied last: +Z first turns to +X about Y, then stays put about X
        let rotation = RotationState::new(FRAC_PI_2, FRAC_PI_2, 0.0);
        let matrix = Transform::rotation_matrix(&rotation);
        let rotated = matrix.transform_vector(&Vector3::z());
        assert!((rotated - Vector3::x()).norm() < 1e-6);
    }

    #[test]
    fn test_model_matrix_translates() {
        let position = Point3::new(30.0, -15.0, 0.0);
        let model = Transform::model_matrix(&position, &RotationState::new(1.0, 1.0, 0.0));
        let origin = model.transform_point(&Point3::origin());
        assert!((origin - position).norm() < 1e-5);
    }

    #[test]
    fn test_normal_matrix_of_rotation_is_rotation() {
        let model = Transform::rotation_matrix(&RotationState::new(0.3, 1.2, 0.0));
        let normal = Transform::normal_matrix(&model);
        let linear = model.fixed_view::<3, 3>(0, 0).into_owned();
        assert!((normal - linear).norm() < 1e-5);
    }

    #[test]
    fn test_mvp_applies_model_first() {
        let model = Transform::translation_matrix(1.0, 0.0, 0.0);
        let view = Transform::rotation_matrix(&RotationState::new(0.0, 0.0, FRAC_PI_2));
        let projection = Matrix4::new_scaling(2.0);

        let mvp = Transform::mvp_matrix(&model, &view, &projection);
        let point = mvp.transform_point(&Point3::origin());
        // Moved to +X, turned onto +Y, then doubled
        assert!((point - Point3::new(0.0, 2.0, 0.0)).norm() < 1e-5);
    }
}
