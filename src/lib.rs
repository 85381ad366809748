//! Draggable click wheel: pointer drags rotate it, releases keep it coasting
//! under friction, and every 15 degrees of travel plays a short click.
//!
//! `core` is plain Rust and runs anywhere; the remaining modules bind it to
//! the browser and only build for `wasm32`.

pub mod core;

#[cfg(target_arch = "wasm32")]
mod audio;
#[cfg(target_arch = "wasm32")]
mod constants;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod input;
#[cfg(target_arch = "wasm32")]
mod render;

#[cfg(target_arch = "wasm32")]
pub use web_entry::start;

#[cfg(target_arch = "wasm32")]
type Wheel = crate::core::DragController<render::CssRotation, audio::ClickAudio, frame::RafScheduler>;

#[cfg(target_arch = "wasm32")]
mod web_entry {
    use super::{audio, constants, dom, events, frame, render, Wheel};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::spawn_local;

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        log::info!("clickwheel starting");

        spawn_local(async move {
            if let Err(e) = init().await {
                log::error!("init error: {:?}", e);
            }
        });
        Ok(())
    }

    async fn init() -> anyhow::Result<()> {
        let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
        let element = dom::html_element_by_id(&document, constants::WHEEL_ELEMENT_ID)?;

        let callback: frame::FrameCallback = Rc::new(RefCell::new(None));
        let pending = Rc::new(Cell::new(None));
        let wheel: Rc<RefCell<Wheel>> = Rc::new(RefCell::new(crate::core::DragController::new(
            render::CssRotation::new(element.clone()),
            audio::ClickAudio::new(),
            frame::RafScheduler::new(callback.clone(), pending.clone()),
        )));

        let wheel_frame = wheel.clone();
        frame::install_frame_callback(&callback, pending, move |handle, timestamp_ms| {
            wheel_frame.borrow_mut().on_frame(handle, timestamp_ms);
        });

        events::wire_pointer_handlers(events::PointerWiring { element, wheel });
        log::info!("[wheel] ready");
        Ok(())
    }
}
