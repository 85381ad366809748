use crate::core::RenderSink;
use web_sys as web;

/// Shows the wheel angle as a CSS rotation on the wheel element.
pub struct CssRotation {
    element: web::HtmlElement,
}

impl CssRotation {
    pub fn new(element: web::HtmlElement) -> Self {
        Self { element }
    }
}

impl RenderSink for CssRotation {
    fn render(&mut self, angle: f64) {
        let transform = format!("rotate({}rad)", angle);
        if let Err(e) = self.element.style().set_property("transform", &transform) {
            log::warn!("[render] transform error: {:?}", e);
        }
    }
}
