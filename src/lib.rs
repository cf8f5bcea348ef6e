#![cfg(target_arch = "wasm32")]
use instant::Instant;
use rand::Rng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod render;

use crate::core::{Scene, SceneConfig};
use crate::events::PointerState;
use crate::frame::FrameContext;
use crate::render::CanvasPainter;

const CANVAS_ID: &str = "tendrils-canvas";

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        let viewport = dom::sync_canvas_to_window(&canvas_resize);
        log::debug!("[resize] canvas now {}x{}", viewport.width, viewport.height);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("tendrils starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let canvas = dom::canvas_by_id(CANVAS_ID)?;
    let viewport = dom::sync_canvas_to_window(&canvas);
    wire_canvas_resize(&canvas);

    let painter = CanvasPainter::new(&canvas)?;

    let seed: u64 = rand::thread_rng().gen();
    let config = SceneConfig::default();
    let scene = Scene::new(viewport, &config, seed);
    log::info!(
        "[scene] {} tendrils x {} segments over {:.0}x{:.0}, seed {}",
        config.chain_count,
        config.segments_per_chain,
        viewport.width,
        viewport.height,
        seed
    );

    let pointer = Rc::new(RefCell::new(PointerState::default()));
    events::wire_pointer_handlers(&canvas, &pointer);

    let frame_ctx = Rc::new(RefCell::new(FrameContext {
        scene,
        pointer,
        canvas,
        painter,
        last_instant: Instant::now(),
        frame_count: 0,
        frame_ms_accum: 0.0,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
