use std::collections::HashSet;
use std::sync::Arc;

use winit::window::Window;

/// Handle to one scheduled next-paint request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub u64);

/// Listener registration issued by a resize event source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Next-paint scheduling seam.
///
/// The render loop never reschedules itself implicitly: every "run me again
/// at the next paint" request returns a handle the lifecycle stores, and
/// teardown cancels the stored handle so no iteration can fire against
/// released resources.
pub trait FrameScheduler {
    /// Ask to run again at the display's next paint opportunity
    fn request_frame(&mut self) -> FrameHandle;

    /// Cancel a previously requested frame if it has not fired yet
    fn cancel(&mut self, handle: FrameHandle);
}

/// Resize notification seam.
///
/// Viewport sizes are delivered as explicit values, never read from global
/// state; this trait only models the subscription lifetime so teardown can
/// prove the listener was removed.
pub trait ResizeEvents {
    /// Register interest in resize notifications
    fn register(&mut self) -> ListenerId;

    /// Remove a registration; must be called exactly once at teardown
    fn unregister(&mut self, id: ListenerId);
}

/// Scheduler backed by winit redraw requests. Delivery is vsync-paced by
/// the window system; `cancel` clears the pending handle, and the host app
/// stops forwarding `RedrawRequested` once the background is unmounted.
pub struct RedrawScheduler {
    window: Arc<Window>,
    next: u64,
    pending: Option<FrameHandle>,
}

impl RedrawScheduler {
    pub fn new(window: Arc<Window>) -> Self {
        Self {
            window,
            next: 0,
            pending: None,
        }
    }

    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }
}

impl FrameScheduler for RedrawScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        let handle = FrameHandle(self.next);
        self.next += 1;
        self.pending = Some(handle);
        self.window.request_redraw();
        handle
    }

    fn cancel(&mut self, handle: FrameHandle) {
        if self.pending == Some(handle) {
            self.pending = None;
        }
    }
}

/// Listener registry for hosts that forward resize events by hand
#[derive(Debug, Default)]
pub struct ResizeRegistry {
    next: u64,
    live: HashSet<ListenerId>,
}

impl ResizeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
}

impl ResizeEvents for ResizeRegistry {
    fn register(&mut self) -> ListenerId {
        self.next += 1;
        let id = ListenerId(self.next);
        self.live.insert(id);
        id
    }

    fn unregister(&mut self, id: ListenerId) {
        self.live.remove(&id);
    }
}
