use glam::DVec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Last known pointer position in canvas backing pixels, `None` while the
/// pointer is off the canvas.
#[derive(Default, Clone, Copy)]
pub struct PointerState {
    pub position: Option<DVec2>,
}

#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> DVec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f64 - rect.left();
    let y_css = ev.client_y() as f64 - rect.top();
    if rect.width() > 0.0 && rect.height() > 0.0 {
        DVec2::new(
            (x_css / rect.width()) * canvas.width() as f64,
            (y_css / rect.height()) * canvas.height() as f64,
        )
    } else {
        DVec2::new(x_css, y_css)
    }
}

pub fn wire_pointer_handlers(
    canvas: &web::HtmlCanvasElement,
    pointer: &Rc<RefCell<PointerState>>,
) {
    wire_pointermove(canvas, pointer);
    wire_pointerleave(canvas, pointer);
}

fn wire_pointermove(canvas: &web::HtmlCanvasElement, pointer: &Rc<RefCell<PointerState>>) {
    let pointer = pointer.clone();
    let canvas_for_px = canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        pointer.borrow_mut().position = Some(pointer_canvas_px(&ev, &canvas_for_px));
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerleave(canvas: &web::HtmlCanvasElement, pointer: &Rc<RefCell<PointerState>>) {
    let pointer = pointer.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        pointer.borrow_mut().position = None;
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref());
    closure.forget();
}
