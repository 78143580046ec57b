use glam::{Mat3, Mat4, Vec3};

use crate::camera::Camera;
use crate::core::WindowDimensions;
use crate::projection::{build_projection, ProjectionMode};
use crate::scene::{SceneObject, Shading};
use crate::types::{CameraUniform, ObjectUniform};

/// View and projection for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTransforms {
    pub view: Mat4,
    pub projection: Mat4,
    pub eye: Vec3,
}

impl FrameTransforms {
    pub fn new(camera: &Camera, mode: ProjectionMode, viewport: WindowDimensions) -> Self {
        Self {
            view: camera.view_matrix(),
            projection: build_projection(mode, viewport, camera.zoom()),
            eye: camera.position,
        }
    }

    pub fn clip_from_model(&self, model: Mat4) -> Mat4 {
        self.projection * self.view * model
    }

    pub fn camera_uniform(&self) -> CameraUniform {
        CameraUniform {
            view: self.view.to_cols_array_2d(),
            projection: self.projection.to_cols_array_2d(),
            view_position: self.eye.to_array(),
            _pad: 0.0,
        }
    }

    pub fn object_uniform(&self, object: &SceneObject) -> ObjectUniform {
        let normal = normal_matrix(object.model);
        let mut uniform = ObjectUniform {
            clip_from_model: self.clip_from_model(object.model).to_cols_array_2d(),
            model: object.model.to_cols_array_2d(),
            normal: [
                normal.x_axis.extend(0.0).to_array(),
                normal.y_axis.extend(0.0).to_array(),
                normal.z_axis.extend(0.0).to_array(),
            ],
            light_position: [0.0; 3],
            shininess: 0.0,
            light_ambient: [0.0; 3],
            attenuation_constant: 1.0,
            light_diffuse: [0.0; 3],
            attenuation_linear: 0.0,
            light_specular: [0.0; 3],
            attenuation_quadratic: 0.0,
            color: [0.0; 3],
            _pad: 0.0,
        };

        match object.shading {
            Shading::Lit {
                shininess, light, ..
            } => {
                uniform.light_position = light.position.to_array();
                uniform.shininess = shininess;
                uniform.light_ambient = light.ambient.to_array();
                uniform.attenuation_constant = light.constant;
                uniform.light_diffuse = light.diffuse.to_array();
                uniform.attenuation_linear = light.linear;
                uniform.light_specular = light.specular.to_array();
                uniform.attenuation_quadratic = light.quadratic;
            }
            Shading::Emissive { color } => uniform.color = color.to_array(),
        }

        uniform
    }
}

/// Inverse transpose of the model's upper 3x3
///
/// Singular models fall back to the plain 3x3 instead of producing NaNs.
pub fn normal_matrix(model: Mat4) -> Mat3 {
    let linear = Mat3::from_mat4(model);
    if linear.determinant().abs() <= f32::EPSILON {
        return linear;
    }
    linear.inverse().transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::MeshKind;
    use crate::scene::{PointLight, TextureKind};

    fn lit_object(model: Mat4) -> SceneObject {
        SceneObject {
            name: "test",
            mesh: MeshKind::Plane,
            model,
            shading: Shading::Lit {
                texture: TextureKind::Grass,
                shininess: 24.0,
                light: PointLight::FIRE,
            },
        }
    }

    #[test]
    fn composes_projection_view_model() {
        let camera = Camera::default();
        let transforms = FrameTransforms::new(
            &camera,
            ProjectionMode::Perspective,
            WindowDimensions::new(800, 600),
        );
        let model = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));

        let expected = transforms.projection * transforms.view * model;
        assert_eq!(transforms.clip_from_model(model), expected);

        let uniform = transforms.object_uniform(&lit_object(model));
        assert_eq!(uniform.clip_from_model, expected.to_cols_array_2d());
        assert_eq!(uniform.model, model.to_cols_array_2d());
    }

    #[test]
    fn lit_uniform_carries_light_constants() {
        let transforms = FrameTransforms::new(
            &Camera::default(),
            ProjectionMode::Orthographic,
            WindowDimensions::new(800, 600),
        );
        let uniform = transforms.object_uniform(&lit_object(Mat4::IDENTITY));
        assert_eq!(uniform.light_position, [0.0, 0.5, 2.5]);
        assert_eq!(uniform.shininess, 24.0);
        assert_eq!(uniform.attenuation_linear, 0.09);
        assert_eq!(uniform.attenuation_quadratic, 0.032);
        assert_eq!(uniform.color, [0.0; 3]);
    }

    #[test]
    fn camera_uniform_tracks_eye() {
        let mut camera = Camera::default();
        camera.position = Vec3::new(1.0, 2.0, 3.0);
        let transforms = FrameTransforms::new(
            &camera,
            ProjectionMode::Perspective,
            WindowDimensions::new(800, 600),
        );
        assert_eq!(transforms.camera_uniform().view_position, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn normal_matrix_undoes_non_uniform_scale() {
        let model = Mat4::from_scale(Vec3::new(2.0, 1.0, 1.0));
        let normal = normal_matrix(model);
        assert!((normal.x_axis.x - 0.5).abs() < 1e-6);
        assert!((normal.y_axis.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn singular_model_yields_finite_normal_matrix() {
        let model = Mat4::from_scale(Vec3::new(10.0, 12.0, 0.0));
        assert!(normal_matrix(model).is_finite());
    }
}
