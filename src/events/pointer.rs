use crate::core::{PointerSample, Release};
use crate::dom;
use crate::input;
use crate::Wheel;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct PointerWiring {
    pub element: web::HtmlElement,
    pub wheel: Rc<RefCell<Wheel>>,
}

pub fn wire_pointer_handlers(w: PointerWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_release(&w, "pointerup");
    wire_release(&w, "pointercancel");
}

fn sample(ev: &web::PointerEvent, element: &web::Element) -> PointerSample {
    PointerSample::new(
        input::pointer_client_px(ev),
        input::element_center(element),
        dom::now_ms(),
    )
}

fn listen(
    w: &PointerWiring,
    kind: &str,
    closure: wasm_bindgen::closure::Closure<dyn FnMut(web::PointerEvent)>,
) {
    if let Err(e) = w
        .element
        .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
    {
        log::error!("{} listener error: {:?}", kind, e);
    }
    closure.forget();
}

fn wire_pointerdown(w: &PointerWiring) {
    let wh = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let s = sample(&ev, &wh.element);
        {
            let mut wheel = wh.wheel.borrow_mut();
            wheel.audio_sink_mut().ensure();
            wheel.on_pointer_down(s);
        }
        _ = wh.element.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    listen(w, "pointerdown", closure);
}

fn wire_pointermove(w: &PointerWiring) {
    let wh = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let s = sample(&ev, &wh.element);
        wh.wheel.borrow_mut().on_pointer_move(s);
    }) as Box<dyn FnMut(_)>);
    listen(w, "pointermove", closure);
}

fn wire_release(w: &PointerWiring, kind: &'static str) {
    let wh = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let now = dom::now_ms();
        let release = {
            let mut wheel = wh.wheel.borrow_mut();
            if kind == "pointercancel" {
                wheel.on_pointer_cancel(now)
            } else {
                wheel.on_pointer_up(now)
            }
        };
        if release.ended_drag() {
            _ = wh.element.release_pointer_capture(ev.pointer_id());
        }
        if release == Release::Coasting {
            log::debug!("[mouse] {} handed off to coast", kind);
        }
    }) as Box<dyn FnMut(_)>);
    listen(w, kind, closure);
}
