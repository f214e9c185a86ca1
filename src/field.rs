use rand::Rng;

use crate::config::StarfieldConfig;

/// GPU vertex for one particle - position plus per-particle color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

impl PointVertex {
    const ATTRIBS: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

    /// Buffer layout for instanced point-sprite rendering: one vertex
    /// record per particle, expanded to a quad in the vertex shader.
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<PointVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// Randomized star field geometry.
///
/// Built once per mount and never mutated afterward; animation only changes
/// the rotation transform of the cloud that owns it. Positions are uniform
/// in a cube of side `spread` centered at the origin, colors uniform in the
/// upper half of the brightness range, independent per channel.
pub struct ParticleField {
    positions: Vec<f32>,
    colors: Vec<f32>,
    point_size: f32,
    opacity: f32,
}

impl ParticleField {
    /// Generate a fresh field from the injected random source. Production
    /// callers pass `rand::thread_rng()`; tests pass a seeded `StdRng` so
    /// generated values are reproducible.
    pub fn generate(config: &StarfieldConfig, rng: &mut impl Rng) -> Self {
        let len = config.particle_count * 3;
        let mut positions = Vec::with_capacity(len);
        let mut colors = Vec::with_capacity(len);

        for _ in 0..len {
            positions.push((rng.gen::<f32>() - 0.5) * config.spread);
            colors.push(rng.gen::<f32>() * 0.5 + 0.5);
        }

        Self {
            positions,
            colors,
            point_size: config.point_size,
            opacity: config.opacity,
        }
    }

    pub fn count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Flat position buffer, length 3 x count
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// Flat color buffer, length 3 x count
    pub fn colors(&self) -> &[f32] {
        &self.colors
    }

    /// Point render size in world units
    pub fn point_size(&self) -> f32 {
        self.point_size
    }

    /// Field opacity; points composite additively so overlaps brighten
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Interleave the flat buffers for upload. Called once at renderer
    /// setup; the render loop itself never touches geometry again.
    pub fn vertices(&self) -> Vec<PointVertex> {
        self.positions
            .chunks_exact(3)
            .zip(self.colors.chunks_exact(3))
            .map(|(p, c)| PointVertex {
                position: [p[0], p[1], p[2]],
                color: [c[0], c[1], c[2]],
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn generate(seed: u64) -> ParticleField {
        let config = StarfieldConfig::default();
        let mut rng = StdRng::seed_from_u64(seed);
        ParticleField::generate(&config, &mut rng)
    }

    #[test]
    fn buffers_are_three_per_particle() {
        let field = generate(7);
        assert_eq!(field.count(), 3000);
        assert_eq!(field.positions().len(), 3 * 3000);
        assert_eq!(field.colors().len(), 3 * 3000);
    }

    #[test]
    fn positions_fill_the_cube() {
        let field = generate(7);
        for &p in field.positions() {
            assert!((-7.5..=7.5).contains(&p), "position {} outside cube", p);
        }
    }

    #[test]
    fn colors_stay_in_upper_brightness_range() {
        let field = generate(7);
        for &c in field.colors() {
            assert!((0.5..=1.0).contains(&c), "color {} outside range", c);
        }
    }

    #[test]
    fn same_seed_reproduces_field() {
        let a = generate(42);
        let b = generate(42);
        assert_eq!(a.positions(), b.positions());
        assert_eq!(a.colors(), b.colors());
    }

    #[test]
    fn different_seeds_differ() {
        let a = generate(1);
        let b = generate(2);
        assert_ne!(a.positions(), b.positions());
    }

    #[test]
    fn vertices_interleave_buffers() {
        let field = generate(3);
        let vertices = field.vertices();
        assert_eq!(vertices.len(), field.count());

        assert_eq!(vertices[0].position, field.positions()[0..3]);
        assert_eq!(vertices[0].color, field.colors()[0..3]);
        let last = field.count() - 1;
        assert_eq!(vertices[last].position, field.positions()[last * 3..last * 3 + 3]);
        assert_eq!(vertices[last].color, field.colors()[last * 3..last * 3 + 3]);
    }

    #[test]
    fn render_hints_come_from_config() {
        let field = generate(7);
        assert_eq!(field.point_size(), 0.03);
        assert_eq!(field.opacity(), 0.8);
    }

    #[test]
    fn respects_configured_count() {
        let config = StarfieldConfig {
            particle_count: 64,
            ..StarfieldConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(0);
        let field = ParticleField::generate(&config, &mut rng);
        assert_eq!(field.count(), 64);
        assert_eq!(field.positions().len(), 192);
    }
}
