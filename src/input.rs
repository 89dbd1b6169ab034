use crate::renderer::hue_to_rgb;
use crate::state::{SimState, CHANNELS};

/// Map a pixel coordinate to an interior grid cell.
/// `floor(pixel / (viewport / n))` gives a 0-based column; the ghost border
/// shifts it by one, so the result is always in `[1, n]`.
pub fn pixel_to_cell(pixel: f64, viewport: usize, n: usize) -> i32 {
    let cell_size = viewport.max(1) as f64 / n as f64;
    let cell = (pixel / cell_size).floor() as i32;
    cell.clamp(0, n as i32 - 1) + 1
}

/// Turns pointer drags into velocity and dye sources.
#[derive(Debug, Clone)]
pub struct Injector {
    /// Sensitivity: velocity added per pixel of pointer travel.
    pub force_scale: f64,
    /// Dye added per unit of color intensity.
    pub dye_amount: f64,
    /// Cycle the dye hue on every injection instead of using `color`.
    pub rainbow: bool,
    /// Fixed dye color, RGB intensities in [0.0, 1.0].
    pub color: [f64; CHANNELS],
    /// Hue advance per rainbow injection, in degrees.
    pub hue_step: f64,
    hue: f64,
    last: Option<(f64, f64)>,
}

impl Default for Injector {
    fn default() -> Self {
        Self {
            force_scale: 0.05,
            dye_amount: 60.0,
            rainbow: true,
            color: [1.0, 1.0, 1.0],
            hue_step: 2.0,
            hue: 0.0,
            last: None,
        }
    }
}

impl Injector {
    /// Color the next injection will deposit.
    pub fn current_color(&self) -> [f64; CHANNELS] {
        if self.rainbow {
            hue_to_rgb(self.hue)
        } else {
            self.color
        }
    }

    pub fn hue(&self) -> f64 {
        self.hue
    }

    pub fn toggle_rainbow(&mut self) -> bool {
        self.rainbow = !self.rainbow;
        self.rainbow
    }

    /// Start a stroke without injecting anything.
    pub fn pointer_down(&mut self, px: f64, py: f64) {
        self.last = Some((px, py));
    }

    /// End the current stroke.
    pub fn pointer_up(&mut self) {
        self.last = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.last.is_some()
    }

    /// Inject force and dye at the pointer position.
    /// The force is the pixel delta since the previous position, scaled by
    /// `force_scale`; the first sample of a stroke only deposits dye.
    /// Returns the grid cell that received the injection.
    pub fn pointer_move(&mut self, state: &mut SimState, px: f64, py: f64, width: usize, height: usize) -> (i32, i32) {
        let n = state.n;
        let i = pixel_to_cell(px, width, n);
        let j = pixel_to_cell(py, height, n);

        let (dx, dy) = match self.last {
            Some((lx, ly)) => (px - lx, py - ly),
            None => (0.0, 0.0),
        };
        self.last = Some((px, py));

        if dx != 0.0 || dy != 0.0 {
            state.add_velocity(i, j, dx * self.force_scale, dy * self.force_scale);
        }

        let color = self.current_color();
        state.add_dye(i, j, color.map(|c| c * self.dye_amount));

        if self.rainbow {
            self.hue = (self.hue + self.hue_step).rem_euclid(360.0);
        }
        (i, j)
    }
}
