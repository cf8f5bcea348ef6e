use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::*;
use crate::core::{Scene, Viewport};
use crate::events::PointerState;
use crate::render::CanvasPainter;

pub struct FrameContext {
    pub scene: Scene,
    pub pointer: Rc<RefCell<PointerState>>,
    pub canvas: web::HtmlCanvasElement,
    pub painter: CanvasPainter,

    pub last_instant: Instant,
    pub frame_count: u64,
    pub frame_ms_accum: f64,
}

impl FrameContext {
    /// Advance the simulation one step and paint it. The viewport is re-read
    /// from the canvas each frame, so a resize simply flows into the next
    /// idle path and spawn-free repaint.
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        self.frame_ms_accum += dt.as_secs_f64() * 1000.0;
        self.frame_count += 1;
        if self.frame_count % FRAME_LOG_EVERY == 0 {
            log::debug!(
                "[frame] {:.2} ms avg over {} frames",
                self.frame_ms_accum / FRAME_LOG_EVERY as f64,
                FRAME_LOG_EVERY
            );
            self.frame_ms_accum = 0.0;
        }

        let viewport = Viewport {
            width: self.canvas.width().max(1) as f64,
            height: self.canvas.height().max(1) as f64,
        };
        let pointer = self.pointer.borrow().position;
        self.scene.advance(pointer, viewport);
        self.painter.paint(&self.scene, viewport);
    }
}

/// Drive `frame()` forever. Each tick arms exactly one successor, via
/// requestAnimationFrame when the browser grants it and a ~60 Hz timeout
/// otherwise, so a logical frame never runs twice per real frame.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(cb) = tick_clone.borrow().as_ref() {
            schedule(cb);
        }
    }) as Box<dyn FnMut()>));
    if let Some(cb) = tick.borrow().as_ref() {
        schedule(cb);
    }
}

fn schedule(tick: &Closure<dyn FnMut()>) {
    if let Some(w) = web::window() {
        let cb: &js_sys::Function = tick.as_ref().unchecked_ref();
        if w.request_animation_frame(cb).is_err() {
            _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(cb, FALLBACK_FRAME_MS);
        }
    }
}
