use glam::{EulerRot, Mat4, Vec3};
use rand::Rng;

use crate::camera::PerspectiveCamera;
use crate::config::StarfieldConfig;
use crate::field::ParticleField;
use crate::viewport::Viewport;

/// The star field plus its accumulated rotation.
///
/// Geometry is immutable after generation; only the rotation pair changes,
/// advancing by a fixed small step each frame and never resetting.
pub struct PointCloud {
    field: ParticleField,
    rotation_x: f32,
    rotation_y: f32,
}

impl PointCloud {
    fn new(field: ParticleField) -> Self {
        Self {
            field,
            rotation_x: 0.0,
            rotation_y: 0.0,
        }
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    /// Accumulated rotation angles (x, y) in radians
    pub fn rotation(&self) -> (f32, f32) {
        (self.rotation_x, self.rotation_y)
    }

    fn rotate(&mut self, dx: f32, dy: f32) {
        self.rotation_x += dx;
        self.rotation_y += dy;
    }

    /// Model transform for the current rotation state
    pub fn model(&self) -> Mat4 {
        Mat4::from_euler(EulerRot::XYZ, self.rotation_x, self.rotation_y, 0.0)
    }
}

/// Everything the render loop reads each frame: camera, point cloud, and
/// the viewport both are sized for. Exactly one instance exists per mounted
/// background; unmounting drops it, and a remount builds a fresh one.
pub struct SceneState {
    camera: PerspectiveCamera,
    points: Option<PointCloud>,
    viewport: Viewport,
    step_x: f32,
    step_y: f32,
}

impl SceneState {
    pub fn new(viewport: Viewport, config: &StarfieldConfig, rng: &mut impl Rng) -> Self {
        let camera = PerspectiveCamera::new(
            config.fov_y_degrees.to_radians(),
            viewport.aspect(),
            config.znear,
            config.zfar,
            Vec3::new(0.0, 0.0, config.camera_z),
        );
        let field = ParticleField::generate(config, rng);

        Self {
            camera,
            points: Some(PointCloud::new(field)),
            viewport,
            step_x: config.rotation_step_x,
            step_y: config.rotation_step_y,
        }
    }

    /// One render-loop iteration's worth of state change: refresh the
    /// projection if a resize invalidated it, then advance the rotation.
    pub fn advance(&mut self) {
        self.camera.update_projection();
        if let Some(points) = &mut self.points {
            points.rotate(self.step_x, self.step_y);
        }
    }

    /// Apply a viewport notification: camera aspect tracks the new size and
    /// the projection is marked for recomputation. Idempotent per event.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.camera.set_aspect(viewport.aspect());
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn camera(&self) -> &PerspectiveCamera {
        &self.camera
    }

    pub fn points(&self) -> Option<&PointCloud> {
        self.points.as_ref()
    }

    /// Detach the point cloud from the scene at teardown
    pub fn clear_points(&mut self) {
        self.points = None;
    }
}
