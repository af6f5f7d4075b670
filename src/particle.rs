// Simple particle struct to keep track of individual position, velocity,
// size, and color

use crate::color::Color;

#[derive(Copy, Clone, Debug)]
pub struct Particle {
    pub pos: [f64; 2],
    pub vel: [f64; 2],
    pub radius: f64,
    pub color: Color,
}

impl Particle {
    pub fn new(pos_x: f64, pos_y: f64, vel_x: f64, vel_y: f64, radius: f64, color: Color) -> Particle {
        Particle {
            pos: [pos_x, pos_y],
            vel: [vel_x, vel_y],
            radius,
            color,
        }
    }

    // One frame of wall-bounce motion. The bounce check runs against the
    // pre-move position, so a particle that crossed an edge last frame has
    // its velocity flipped first and is carried back toward the canvas in
    // the same step. Speed magnitude is preserved; only the sign inverts.
    pub fn step(&mut self, width: f64, height: f64) {
        if self.pos[0] < 0.0 || self.pos[0] > width {
            self.vel[0] = -self.vel[0];
        }
        if self.pos[1] < 0.0 || self.pos[1] > height {
            self.vel[1] = -self.vel[1];
        }
        self.pos[0] += self.vel[0];
        self.pos[1] += self.vel[1];
    }

    pub fn distance_squared(&self, other: &Particle) -> f64 {
        let dx = self.pos[0] - other.pos[0];
        let dy = self.pos[1] - other.pos[1];
        dx * dx + dy * dy
    }
}
