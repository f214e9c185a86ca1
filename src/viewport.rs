/// Viewport dimensions in physical pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Aspect ratio for the camera projection
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Bound the backing store at `max_ratio` physical pixels per logical
    /// unit. Displays denser than the cap get a proportionally smaller
    /// output buffer; everything else passes through unchanged.
    pub fn capped(width: u32, height: u32, scale_factor: f64, max_ratio: f64) -> Self {
        let factor = (max_ratio / scale_factor).min(1.0);
        Self {
            width: (width as f64 * factor).round() as u32,
            height: (height as f64 * factor).round() as u32,
        }
    }
}
