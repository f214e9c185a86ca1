use glam::{Mat4, Vec3};

/// Perspective camera with a cached projection matrix.
///
/// The intrinsics (fov, near, far) are fixed at construction; only the
/// aspect ratio changes over the camera's lifetime. Setting the aspect marks
/// the projection stale, and the next `update_projection` call recomputes
/// it, so resize events stay cheap and the matrix is rebuilt at most once
/// per frame.
pub struct PerspectiveCamera {
    fov_y: f32,
    aspect: f32,
    znear: f32,
    zfar: f32,
    position: Vec3,
    projection: Mat4,
    projection_stale: bool,
}

impl PerspectiveCamera {
    pub fn new(fov_y: f32, aspect: f32, znear: f32, zfar: f32, position: Vec3) -> Self {
        Self {
            fov_y,
            aspect,
            znear,
            zfar,
            position,
            projection: Mat4::perspective_rh(fov_y, aspect, znear, zfar),
            projection_stale: false,
        }
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Set a new aspect ratio and mark the projection for recomputation.
    /// The stale matrix stays in place until the next `update_projection`.
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
        self.projection_stale = true;
    }

    /// Recompute the projection if a resize invalidated it
    pub fn update_projection(&mut self) {
        if self.projection_stale {
            self.projection = Mat4::perspective_rh(self.fov_y, self.aspect, self.znear, self.zfar);
            self.projection_stale = false;
        }
    }

    pub fn projection(&self) -> Mat4 {
        self.projection
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, Vec3::ZERO, Vec3::Y)
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    #[cfg(test)]
    fn projection_stale(&self) -> bool {
        self.projection_stale
    }
}
