// Last known cursor position plus a fixed interaction radius, fed by the
// page's mousemove events. Nothing in the movement rules reads it yet; it
// is carried so a cursor-repulsion field can be wired in without changing
// the event plumbing.

pub struct PointerState {
    pub pos: Option<[f64; 2]>,
}

impl PointerState {
    pub const RADIUS: f64 = 150.0;

    pub fn new() -> Self {
        PointerState { pos: None }
    }

    pub fn update(&mut self, x: f64, y: f64) {
        self.pos = Some([x, y]);
    }

    // Whether a point falls inside the interaction radius. Always false
    // before the first pointer event.
    pub fn is_point_inside(&self, x: f64, y: f64) -> bool {
        match self.pos {
            Some([px, py]) => {
                let delta_x = x - px;
                let delta_y = y - py;
                delta_x * delta_x + delta_y * delta_y <= PointerState::RADIUS * PointerState::RADIUS
            }
            None => false,
        }
    }
}

impl Default for PointerState {
    fn default() -> Self {
        Self::new()
    }
}
