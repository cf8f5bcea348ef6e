use anyhow::anyhow;
use glam::DVec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::*;
use crate::core::{Scene, TargetTracker, Tendril, Viewport};

/// Canvas 2D painter. Holds the one context handle acquired at startup.
pub struct CanvasPainter {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasPainter {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow!("get_context failed: {e:?}"))?
            .ok_or_else(|| anyhow!("no 2d context on canvas"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow!("not a 2d context: {e:?}"))?;
        Ok(Self { ctx })
    }

    /// Paint one frame: background, target glow, every head, then every
    /// body. Heads all land before the first body so the additive body
    /// strokes composite over them within the same frame.
    pub fn paint(&self, scene: &Scene, viewport: Viewport) {
        self.fill_background(viewport);
        self.draw_target_glow(scene.target());
        let target = scene.target().current();
        for tendril in scene.tendrils() {
            self.draw_head(tendril, target);
        }
        for tendril in scene.tendrils() {
            self.draw_body(tendril, target);
        }
    }

    fn fill_background(&self, viewport: Viewport) {
        self.ctx.set_fill_style_str(BACKGROUND_FILL);
        self.ctx.fill_rect(0.0, 0.0, viewport.width, viewport.height);
    }

    /// Pale blue disc on the target, swelling with its speed.
    fn draw_target_glow(&self, target: &TargetTracker) {
        let pos = target.current();
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(pos.x, pos.y, target.speed() + GLOW_RADIUS_PAD, 0.0, TAU);
        self.ctx.set_fill_style_str(GLOW_FILL);
        self.ctx.fill();
    }

    fn draw_head(&self, tendril: &Tendril, target: DVec2) {
        let seed = tendril.visual_seed;
        let (radius, fill) = if tendril.within_reach(target) {
            (
                HEAD_RADIUS_SPAN * seed + HEAD_ACTIVE_RADIUS_PAD,
                HEAD_ACTIVE_FILL,
            )
        } else {
            (HEAD_RADIUS_SPAN * seed, HEAD_RESTING_FILL)
        };
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(tendril.origin.x, tendril.origin.y, radius, 0.0, TAU);
        self.ctx.set_fill_style_str(fill);
        self.ctx.fill();
    }

    /// Stroke the chain as one polyline, origin to tip, additively blended.
    /// Out-of-reach tendrils draw no body at all.
    fn draw_body(&self, tendril: &Tendril, target: DVec2) {
        if !tendril.within_reach(target) {
            return;
        }
        let seed = tendril.visual_seed;
        _ = self.ctx.set_global_composite_operation("lighter");
        self.ctx.begin_path();
        self.ctx.move_to(tendril.origin.x, tendril.origin.y);
        for segment in &tendril.segments {
            self.ctx.line_to(segment.next_pos.x, segment.next_pos.y);
        }
        self.ctx.set_stroke_style_str(&body_stroke_style(seed));
        self.ctx.set_line_width(BODY_WIDTH_SPAN * seed);
        self.ctx.set_line_cap("round");
        self.ctx.set_line_join("round");
        self.ctx.stroke();
        _ = self.ctx.set_global_composite_operation("source-over");
    }
}

/// HSL stroke for a body: hue and lightness ramp with the visual seed, so a
/// tendril keeps one color for its whole life.
#[inline]
fn body_stroke_style(seed: f64) -> String {
    format!(
        "hsl({},100%,{}%)",
        BODY_HUE_BASE + BODY_HUE_SPAN * seed,
        BODY_LIGHTNESS_BASE + BODY_LIGHTNESS_SPAN * seed
    )
}
