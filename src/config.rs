use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Tunable parameters for the particle background.
///
/// Defaults match the shipped landing-page values; a JSON file can override
/// any subset of fields.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StarfieldConfig {
    /// Number of particles in the field
    pub particle_count: usize,
    /// Side length of the cube particles are scattered in, centered at origin
    pub spread: f32,
    /// Point render size in world units
    pub point_size: f32,
    /// Field opacity, composited additively
    pub opacity: f32,
    /// Per-frame rotation increment around the x axis, radians
    pub rotation_step_x: f32,
    /// Per-frame rotation increment around the y axis, radians
    pub rotation_step_y: f32,
    /// Vertical field of view, degrees
    pub fov_y_degrees: f32,
    pub znear: f32,
    pub zfar: f32,
    /// Camera distance from the origin along +z
    pub camera_z: f32,
    /// Upper bound on physical pixels per logical unit
    pub max_pixel_ratio: f64,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            particle_count: 3000,
            spread: 15.0,
            point_size: 0.03,
            opacity: 0.8,
            rotation_step_x: 0.0002,
            rotation_step_y: 0.0003,
            fov_y_degrees: 75.0,
            znear: 0.1,
            zfar: 1000.0,
            camera_z: 5.0,
            max_pixel_ratio: 2.0,
        }
    }
}

impl StarfieldConfig {
    /// Load a config from a JSON file; missing fields keep their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("failed to parse config {}", path.display()))
    }
}
