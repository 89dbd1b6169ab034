pub mod color;

// Re-export public API
pub use color::{channel_to_u8, dye_to_pixel, hue_to_rgb};

use crate::state::{idx_inner, SimState};

/// Mapping between window pixels and grid cells.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderConfig {
    pub frame_width: usize,
    pub frame_height: usize,
    /// Interior grid side.
    pub n: usize,
}

impl RenderConfig {
    /// The square grid always stretches to fill the window.
    pub fn fit(frame_width: usize, frame_height: usize, n: usize) -> Self {
        Self {
            frame_width: frame_width.max(1),
            frame_height: frame_height.max(1),
            n,
        }
    }

    /// Horizontal scale: display pixels per simulation cell.
    pub fn scale_x(&self) -> f64 {
        self.frame_width as f64 / self.n as f64
    }

    /// Vertical scale: display pixels per simulation cell.
    pub fn scale_y(&self) -> f64 {
        self.frame_height as f64 / self.n as f64
    }
}

/// Draw the dye field into a `0RGB` framebuffer, one flat block per cell.
/// Grid row 1 is drawn at the top of the frame.
pub fn render_into(buf: &mut Vec<u32>, state: &SimState, cfg: &RenderConfig) {
    let n = state.n;
    buf.resize(cfg.frame_width * cfg.frame_height, 0);

    // Precompute the cell column of every pixel column
    let sx = cfg.scale_x();
    let sy = cfg.scale_y();
    let cols: Vec<usize> = (0..cfg.frame_width)
        .map(|px| ((px as f64 / sx) as usize).min(n - 1) + 1)
        .collect();

    let [r, g, b] = &state.density;
    for py in 0..cfg.frame_height {
        let j = ((py as f64 / sy) as usize).min(n - 1) + 1;
        let row = &mut buf[py * cfg.frame_width..(py + 1) * cfg.frame_width];
        for (pixel, &i) in row.iter_mut().zip(&cols) {
            let k = idx_inner(i, j, n);
            *pixel = dye_to_pixel(r.cur[k], g.cur[k], b.cur[k]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::idx;

    #[test]
    fn test_fit_scales() {
        let cfg = RenderConfig::fit(640, 320, 64);
        assert_eq!(cfg.scale_x(), 10.0);
        assert_eq!(cfg.scale_y(), 5.0);
    }

    #[test]
    fn test_render_into_fills_frame() {
        let state = SimState::new(8);
        let cfg = RenderConfig::fit(32, 16, 8);
        let mut buf = Vec::new();
        render_into(&mut buf, &state, &cfg);
        assert_eq!(buf.len(), 32 * 16);
        assert!(buf.iter().all(|&p| p == 0), "Empty dye should render black");
    }

    #[test]
    fn test_render_into_places_cell_block() {
        let mut state = SimState::new(8);
        // Cell (1, 1) is the top-left interior cell
        state.density[0].cur[idx(1, 1, 8)] = 200.0;
        state.density[2].cur[idx(8, 8, 8)] = 10.0;
        let cfg = RenderConfig::fit(16, 16, 8);
        let mut buf = Vec::new();
        render_into(&mut buf, &state, &cfg);

        // 2x2 pixel block per cell
        for (x, y) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
            assert_eq!(buf[y * 16 + x], 0x00ff_0000, "pixel ({}, {})", x, y);
        }
        assert_eq!(buf[2], 0);
        assert_eq!(buf[15 * 16 + 15], 20);
    }
}
