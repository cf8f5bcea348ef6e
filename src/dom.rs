use anyhow::anyhow;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::core::Viewport;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn canvas_by_id(id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    let document = window_document().ok_or_else(|| anyhow!("no window/document"))?;
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("missing #{id} element"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow!("#{id} is not a canvas: {e:?}"))
}

/// Size the canvas backing store to the window's inner dimensions and return
/// the resulting viewport. Simulation state is untouched, so resizes only
/// re-frame the scene.
pub fn sync_canvas_to_window(canvas: &web::HtmlCanvasElement) -> Viewport {
    let (mut width, mut height) = (1.0_f64, 1.0_f64);
    if let Some(w) = web::window() {
        width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
        height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
    }
    let width = width.max(1.0);
    let height = height.max(1.0);
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
    Viewport { width, height }
}
