use rand::Rng;

use crate::config::StarfieldConfig;
use crate::scene::SceneState;
use crate::schedule::{FrameHandle, FrameScheduler, ListenerId, ResizeEvents};
use crate::viewport::Viewport;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Draws a `SceneState` to an output surface and owns the GPU resources
/// backing it. `release` must free those resources; the lifecycle calls it
/// exactly once.
pub trait SceneRenderer {
    /// Resize the output buffer to the given viewport
    fn resize(&mut self, viewport: Viewport);

    /// Draw one frame. Failures propagate; they are not retried.
    fn render(&mut self, scene: &SceneState) -> Result<()>;

    /// Free geometry, material, and output resources
    fn release(&mut self);
}

/// A mounted particle background: scene, renderer, frame scheduling and
/// resize subscription, scoped so that every resource acquired at mount is
/// released on every exit path.
///
/// The host drives it with three calls: `on_frame` for each fired paint
/// request, `on_resize` for each viewport notification, and `unmount` when
/// the surface goes away. Dropping a still-mounted background tears it down
/// the same way.
pub struct Starfield<R: SceneRenderer, S: FrameScheduler, E: ResizeEvents> {
    scene: SceneState,
    renderer: R,
    scheduler: S,
    events: E,
    listener: Option<ListenerId>,
    pending: Option<FrameHandle>,
    released: bool,
}

impl<R: SceneRenderer, S: FrameScheduler, E: ResizeEvents> Starfield<R, S, E> {
    /// Mount the background onto a drawable surface.
    ///
    /// `surface` carries a renderer constructor bound to the surface handle;
    /// `None` means no surface exists yet, and the mount is skipped entirely
    /// (no geometry, no registration, no scheduling) rather than treated as
    /// an error. Renderer construction failures propagate.
    pub fn mount<F>(
        surface: Option<F>,
        viewport: Viewport,
        config: &StarfieldConfig,
        mut scheduler: S,
        mut events: E,
        rng: &mut impl Rng,
    ) -> Result<Option<Self>>
    where
        F: FnOnce(&SceneState) -> Result<R>,
    {
        let Some(init) = surface else {
            return Ok(None);
        };

        let scene = SceneState::new(viewport, config, rng);
        let renderer = init(&scene)?;
        let listener = events.register();
        let pending = scheduler.request_frame();

        log::debug!(
            "mounted starfield: {} particles at {}x{}",
            scene.points().map_or(0, |p| p.field().count()),
            viewport.width,
            viewport.height
        );

        Ok(Some(Self {
            scene,
            renderer,
            scheduler,
            events,
            listener: Some(listener),
            pending: Some(pending),
            released: false,
        }))
    }

    /// One render-loop iteration. Requests the next frame first, so a draw
    /// error propagates without stalling the loop, then advances rotation
    /// and draws the current scene.
    pub fn on_frame(&mut self) -> Result<()> {
        if self.released {
            return Ok(());
        }

        self.pending = Some(self.scheduler.request_frame());
        self.scene.advance();
        self.renderer.render(&self.scene)
    }

    /// Apply a resize notification: camera aspect and output buffer follow
    /// the new viewport synchronously; the next frame picks them up.
    pub fn on_resize(&mut self, viewport: Viewport) {
        if self.released {
            return;
        }

        self.scene.set_viewport(viewport);
        self.renderer.resize(viewport);
    }

    /// Tear down in order: deregister the resize listener, cancel the
    /// pending frame, detach the point cloud, release GPU resources.
    /// Safe to call more than once; only the first call releases.
    pub fn unmount(&mut self) {
        if self.released {
            return;
        }
        self.released = true;

        if let Some(id) = self.listener.take() {
            self.events.unregister(id);
        }
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
        }
        self.scene.clear_points();
        self.renderer.release();

        log::debug!("starfield unmounted");
    }

    pub fn scene(&self) -> &SceneState {
        &self.scene
    }

    /// The frame request that has not fired yet, if any
    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.pending
    }

    pub fn is_released(&self) -> bool {
        self.released
    }
}

impl<R: SceneRenderer, S: FrameScheduler, E: ResizeEvents> Drop for Starfield<R, S, E> {
    fn drop(&mut self) {
        self.unmount();
    }
}
