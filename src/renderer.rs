// Helper functions for drawing the particle field onto a 2d canvas context:
// clearing the frame, filled circles for particles, and alpha-faded line
// segments for connections.

use crate::color::Color;
use crate::particle::Particle;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::CanvasRenderingContext2d;

// Grabs the 2d context from a canvas element on the DOM. Errors if the
// browser refuses to hand one out (e.g. the canvas already holds a webgl
// context).
pub fn context_from_canvas(
    canvas: &web_sys::HtmlCanvasElement,
) -> Result<CanvasRenderingContext2d, JsValue> {
    canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| JsValue::from_str("context is not CanvasRenderingContext2d"))
}

pub fn clear_screen(ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
    ctx.clear_rect(0.0, 0.0, width, height);
}

pub fn draw_particle(ctx: &CanvasRenderingContext2d, particle: &Particle) -> Result<(), JsValue> {
    ctx.begin_path();
    ctx.arc(
        particle.pos[0],
        particle.pos[1],
        particle.radius,
        0.0,
        2.0 * std::f64::consts::PI,
    )?;
    let fill_style = JsValue::from_str(&particle.color.to_css(particle.color.a as f64 / 255.0));
    #[allow(deprecated)]
    ctx.set_fill_style(&fill_style);
    ctx.fill();
    Ok(())
}

pub fn draw_connection(
    ctx: &CanvasRenderingContext2d,
    from: &Particle,
    to: &Particle,
    color: Color,
    alpha: f64,
) {
    let stroke_style = JsValue::from_str(&color.to_css(alpha));
    #[allow(deprecated)]
    ctx.set_stroke_style(&stroke_style);
    ctx.set_line_width(1.0);
    ctx.begin_path();
    ctx.move_to(from.pos[0], from.pos[1]);
    ctx.line_to(to.pos[0], to.pos[1]);
    ctx.stroke();
}
