use crate::core::{FrameHandle, FrameScheduler};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// `requestAnimationFrame` behind the core's scheduler seam. One callback
/// closure serves every frame; `pending` tells it which handle fired.
pub struct RafScheduler {
    callback: FrameCallback,
    pending: Rc<Cell<Option<FrameHandle>>>,
}

impl RafScheduler {
    pub fn new(callback: FrameCallback, pending: Rc<Cell<Option<FrameHandle>>>) -> Self {
        Self { callback, pending }
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        let id = match (web::window(), self.callback.borrow().as_ref()) {
            (Some(w), Some(cb)) => w
                .request_animation_frame(cb.as_ref().unchecked_ref())
                .unwrap_or_else(|e| {
                    log::error!("requestAnimationFrame error: {:?}", e);
                    0
                }),
            _ => {
                log::warn!("[frame] no window or frame callback yet");
                0
            }
        };
        let handle = FrameHandle(id);
        self.pending.set(Some(handle));
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if let Some(w) = web::window() {
            _ = w.cancel_animation_frame(handle.0);
        }
        if self.pending.get() == Some(handle) {
            self.pending.set(None);
        }
    }
}

/// Installs the shared frame closure. Each invocation hands the handle it
/// was requested under to `on_frame`.
pub fn install_frame_callback(
    callback: &FrameCallback,
    pending: Rc<Cell<Option<FrameHandle>>>,
    mut on_frame: impl FnMut(FrameHandle, f64) + 'static,
) {
    *callback.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp_ms: f64| {
        if let Some(handle) = pending.take() {
            on_frame(handle, timestamp_ms);
        }
    }) as Box<dyn FnMut(f64)>));
}
