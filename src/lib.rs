pub mod camera;
pub mod cli;
pub mod clock;
pub mod config;
pub mod field;
pub mod lifecycle;
pub mod renderer;
pub mod scene;
pub mod schedule;
pub mod viewport;

pub use config::StarfieldConfig;
pub use lifecycle::{SceneRenderer, Starfield};
pub use viewport::Viewport;
