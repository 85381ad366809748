use glam::DVec2;
use web_sys as web;

// ---------------- Pointer helpers ----------------
#[inline]
pub fn pointer_client_px(ev: &web::PointerEvent) -> DVec2 {
    DVec2::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
}

/// Center of `el` in client pixels, re-read each call so layout changes
/// and scrolling are picked up.
#[inline]
pub fn element_center(el: &web::Element) -> DVec2 {
    let rect = el.get_bounding_client_rect();
    DVec2::new(
        rect.left() + rect.width() / 2.0,
        rect.top() + rect.height() / 2.0,
    )
}
