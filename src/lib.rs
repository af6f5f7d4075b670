//! Wasm backend for the portfolio page's hero-canvas background: a field of
//! drifting particles connected by proximity-faded line segments.
//!
//! The host page owns the `<canvas>` and the `requestAnimationFrame` loop.
//! It constructs a [`ParticleField`] sized to the viewport, then calls
//! [`ParticleField::tick`] once per frame, [`ParticleField::resize`] on
//! window resize, and [`ParticleField::pointer_moved`] on mousemove.

pub mod color;
pub mod particle;
pub mod pointer;
pub mod renderer;
mod utils;

use crate::color::Color;
use crate::particle::Particle;
use crate::pointer::PointerState;
use rand::Rng;
use wasm_bindgen::prelude::*;
use web_sys::{console, CanvasRenderingContext2d};

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
}

pub struct Timer<'a> {
    name: &'a str,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        console::time_with_label(name);
        Timer { name }
    }
}

impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        console::time_end_with_label(self.name);
    }
}

// Lime accent shared by nodes and connection lines; matches the page theme.
const NODE_COLOR: u32 = 0xCEE056FF;
// One particle per this many square pixels of canvas.
const AREA_PER_PARTICLE: f64 = 9000.0;
// Divisor mapping squared distance to connection transparency. Together
// with the width/7 * height/7 threshold this is visual calibration, not a
// physical unit; both are applied to the *squared* distance on purpose.
const EDGE_FADE_SCALE: f64 = 20000.0;

// A connection between two particles by index, with its stroke alpha.
// Recomputed from scratch every frame, never stored across frames.
struct Connection {
    a: usize,
    b: usize,
    alpha: f64,
}

#[wasm_bindgen]
pub struct ParticleField {
    width: f64,
    height: f64,
    particles: Vec<Particle>,
    pointer: PointerState,
}

#[wasm_bindgen]
impl ParticleField {
    pub fn new(width: f64, height: f64) -> ParticleField {
        let mut field = ParticleField {
            width,
            height,
            particles: Vec::new(),
            pointer: PointerState::new(),
        };
        field.populate();
        field
    }

    /// Advance every particle one frame: bounce off canvas edges, then move.
    /// Particles never collide with each other, only with the walls.
    pub fn advance(&mut self) {
        for particle in &mut self.particles {
            particle.step(self.width, self.height);
        }
    }

    /// Clear the frame, draw every particle as a filled circle, then stroke
    /// a line between every pair of particles closer than the proximity
    /// threshold, fading with squared distance.
    pub fn render(&self, ctx: &CanvasRenderingContext2d) -> Result<(), JsValue> {
        let _timer = Timer::new("ParticleField::render");
        renderer::clear_screen(ctx, self.width, self.height);
        for particle in &self.particles {
            renderer::draw_particle(ctx, particle)?;
        }
        let edge_color = Color::from_u32(NODE_COLOR);
        for edge in self.connections() {
            renderer::draw_connection(
                ctx,
                &self.particles[edge.a],
                &self.particles[edge.b],
                edge_color,
                edge.alpha,
            );
        }
        Ok(())
    }

    /// One animation frame: `advance` then `render`.
    pub fn tick(&mut self, ctx: &CanvasRenderingContext2d) -> Result<(), JsValue> {
        self.advance();
        self.render(ctx)
    }

    /// Rebuild the field for new canvas dimensions. Every particle is
    /// discarded and respawned; nothing carries over from the old size.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.populate();
    }

    /// Record the last known cursor position. Tracked for a future cursor
    /// interaction field; no movement rule reads it yet.
    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        self.pointer.update(x, y);
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }
}

impl ParticleField {
    // Population scales with canvas area; a zero-area canvas gets zero
    // particles and every operation degrades to a no-op.
    fn populate(&mut self) {
        self.particles.clear();
        let count = (self.width * self.height / AREA_PER_PARTICLE).floor() as usize;
        self.particles.reserve(count);
        let mut rng = rand::thread_rng();
        let color = Color::from_u32(NODE_COLOR);
        for _ in 0..count {
            let radius = rng.gen::<f64>() * 2.0 + 1.0;
            let pos_x = spawn_coordinate(&mut rng, radius, self.width);
            let pos_y = spawn_coordinate(&mut rng, radius, self.height);
            let vel_x = rng.gen::<f64>() - 0.5;
            let vel_y = rng.gen::<f64>() - 0.5;
            self.particles
                .push(Particle::new(pos_x, pos_y, vel_x, vel_y, radius, color));
        }
    }

    fn connections(&self) -> Vec<Connection> {
        let threshold = (self.width / 7.0) * (self.height / 7.0);
        let mut edges = Vec::new();
        for a in 0..self.particles.len() {
            for b in (a + 1)..self.particles.len() {
                let distance_squared = self.particles[a].distance_squared(&self.particles[b]);
                if distance_squared < threshold {
                    // The formula can go negative at squared distances large
                    // canvases still consider "close"; clamp so the stroke
                    // alpha stays a valid color component.
                    let alpha = (1.0 - distance_squared / EDGE_FADE_SCALE).max(0.0).min(1.0);
                    edges.push(Connection { a, b, alpha });
                }
            }
        }
        edges
    }
}

// Spawn position along one axis: uniform in [2*radius, dimension - 2*radius]
// so the particle's full circle starts on-canvas. When the canvas is too
// small for that margin the range inverts; clamp the span to zero and cap at
// the dimension instead of handing rand an invalid range.
fn spawn_coordinate<R: Rng>(rng: &mut R, radius: f64, dimension: f64) -> f64 {
    let margin = radius * 2.0;
    let span = (dimension - margin * 2.0).max(0.0);
    (rng.gen::<f64>() * span + margin).min(dimension)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn population_scales_with_area() {
        let field = ParticleField::new(900.0, 900.0);
        assert_eq!(field.particle_count(), 90);
    }

    #[test]
    fn zero_area_canvas_spawns_nothing() {
        let mut field = ParticleField::new(0.0, 0.0);
        assert_eq!(field.particle_count(), 0);
        field.advance();
        assert!(field.connections().is_empty());
    }

    #[test]
    fn spawn_respects_margins_and_velocity_range() {
        let field = ParticleField::new(400.0, 300.0);
        assert_eq!(field.particle_count(), 13);
        for p in &field.particles {
            assert!(p.radius >= 1.0 && p.radius < 3.0);
            assert!(p.pos[0] >= p.radius * 2.0 && p.pos[0] <= 400.0 - p.radius * 2.0);
            assert!(p.pos[1] >= p.radius * 2.0 && p.pos[1] <= 300.0 - p.radius * 2.0);
            assert!(p.vel[0] >= -0.5 && p.vel[0] < 0.5);
            assert!(p.vel[1] >= -0.5 && p.vel[1] < 0.5);
        }
    }

    #[test]
    fn spawn_coordinate_clamps_degenerate_range() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            // 4 * radius exceeds the dimension, so the nominal range inverts.
            let coord = spawn_coordinate(&mut rng, 3.0, 10.0);
            assert!(coord >= 0.0 && coord <= 10.0);
        }
    }

    #[test]
    fn particles_stay_near_canvas_indefinitely() {
        let mut field = ParticleField::new(200.0, 150.0);
        for _ in 0..2000 {
            field.advance();
        }
        // The bounce flips velocity off the pre-move position, so a particle
        // can overshoot an edge by at most one velocity step (< 0.5) before
        // being carried back the next frame.
        for p in &field.particles {
            assert!(p.pos[0] >= -0.5 && p.pos[0] <= 200.5);
            assert!(p.pos[1] >= -0.5 && p.pos[1] <= 150.5);
        }
    }

    #[test]
    fn bounce_flips_sign_then_moves_same_frame() {
        let mut field = ParticleField::new(100.0, 100.0);
        field.particles = vec![Particle::new(
            -1.0,
            50.0,
            -0.3,
            0.0,
            2.0,
            Color::from_u32(NODE_COLOR),
        )];
        field.advance();
        assert!((field.particles[0].vel[0] - 0.3).abs() < 1e-12);
        assert!((field.particles[0].pos[0] - -0.7).abs() < 1e-12);
    }

    #[test]
    fn resize_rebuilds_the_whole_field() {
        let mut field = ParticleField::new(900.0, 900.0);
        assert_eq!(field.particle_count(), 90);
        field.resize(300.0, 300.0);
        assert_eq!(field.particle_count(), 10);
        for p in &field.particles {
            assert!(p.pos[0] >= 0.0 && p.pos[0] <= 300.0);
            assert!(p.pos[1] >= 0.0 && p.pos[1] <= 300.0);
        }
    }

    fn field_with_pair(width: f64, height: f64, ax: f64, bx: f64) -> ParticleField {
        let mut field = ParticleField::new(width, height);
        let color = Color::from_u32(NODE_COLOR);
        field.particles = vec![
            Particle::new(ax, 0.0, 0.0, 0.0, 2.0, color),
            Particle::new(bx, 0.0, 0.0, 0.0, 2.0, color),
        ];
        field
    }

    #[test]
    fn connection_threshold_is_strict() {
        // 700x700 puts the squared-distance threshold at exactly 10000.
        let just_inside = field_with_pair(700.0, 700.0, 0.0, 9999.0_f64.sqrt());
        assert_eq!(just_inside.connections().len(), 1);

        let just_outside = field_with_pair(700.0, 700.0, 0.0, 10001.0_f64.sqrt());
        assert!(just_outside.connections().is_empty());
    }

    #[test]
    fn connection_alpha_fades_with_squared_distance() {
        let mut field = ParticleField::new(700.0, 700.0);
        let color = Color::from_u32(NODE_COLOR);
        // Squared distance 50^2 + 50^2 = 5000, well under the threshold.
        field.particles = vec![
            Particle::new(0.0, 0.0, 0.0, 0.0, 2.0, color),
            Particle::new(50.0, 50.0, 0.0, 0.0, 2.0, color),
        ];
        let edges = field.connections();
        assert_eq!(edges.len(), 1);
        assert!((edges[0].alpha - 0.75).abs() < 1e-12);
    }

    #[test]
    fn connection_alpha_clamps_to_valid_range() {
        // On a large canvas the threshold passes squared distances beyond
        // the fade scale, where the raw formula goes negative.
        let field = field_with_pair(2100.0, 2100.0, 0.0, 200.0);
        let edges = field.connections();
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].alpha, 0.0);
    }

    #[test]
    fn pointer_state_is_tracked_but_inert() {
        let mut field = ParticleField::new(100.0, 100.0);
        let before: Vec<[f64; 2]> = field.particles.iter().map(|p| p.vel).collect();
        field.pointer_moved(50.0, 50.0);
        field.advance();
        let after: Vec<[f64; 2]> = field.particles.iter().map(|p| p.vel).collect();
        assert_eq!(field.pointer.pos, Some([50.0, 50.0]));
        // No movement rule consumes the pointer yet.
        assert_eq!(before, after);
    }
}
