/// Default cap on the interior grid side.
pub const MAX_GRID: usize = 128;
/// Smallest grid the host will ever build.
pub const MIN_GRID: usize = 8;
/// Number of dye channels (RGB).
pub const CHANNELS: usize = 3;

/// Convert 2D coordinates to a 1D index.
/// Both axes are clamped to `[0, n+1]`, so any input maps to a valid cell.
pub fn idx(x: i32, y: i32, n: usize) -> usize {
    let hi = (n + 1) as i32;
    let x = x.clamp(0, hi) as usize;
    let y = y.clamp(0, hi) as usize;
    x + (n + 2) * y
}

/// Fast index for cells where x,y are guaranteed in-bounds.
/// Skips clamping; use only when 0 <= x,y <= n+1.
#[inline(always)]
pub const fn idx_inner(x: usize, y: usize, n: usize) -> usize {
    x + (n + 2) * y
}

/// Number of cells in a field of interior side `n` (ghost border included).
pub const fn field_len(n: usize) -> usize {
    (n + 2) * (n + 2)
}

/// Interior grid side for a viewport, capped at `max_grid`.
pub fn grid_size_for(width: usize, height: usize, pixels_per_cell: usize, max_grid: usize) -> usize {
    let cells = width.min(height) / pixels_per_cell.max(1);
    cells.min(max_grid).max(MIN_GRID)
}

/// Double-buffered scalar field.
/// `cur` holds the latest values; `prev` is the read-only input of the next pass.
#[derive(Clone)]
pub struct Field {
    pub cur: Vec<f64>,
    pub prev: Vec<f64>,
}

impl Field {
    pub fn new(n: usize) -> Self {
        Self {
            cur: vec![0.0; field_len(n)],
            prev: vec![0.0; field_len(n)],
        }
    }

    /// Exchange the current and previous buffers.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.cur, &mut self.prev);
    }

    /// Borrow the write target and its read-only input at the same time.
    pub fn split_mut(&mut self) -> (&mut [f64], &[f64]) {
        (self.cur.as_mut_slice(), self.prev.as_slice())
    }

    pub fn fill(&mut self, value: f64) {
        self.cur.fill(value);
        self.prev.fill(value);
    }
}

/// Per-frame injection buffers. Consumed and zeroed by every step.
#[derive(Clone)]
pub struct Sources {
    pub u: Vec<f64>,
    pub v: Vec<f64>,
    pub dye: [Vec<f64>; CHANNELS],
}

impl Sources {
    pub fn new(n: usize) -> Self {
        let len = field_len(n);
        Self {
            u: vec![0.0; len],
            v: vec![0.0; len],
            dye: std::array::from_fn(|_| vec![0.0; len]),
        }
    }

    pub fn zero(&mut self) {
        self.u.fill(0.0);
        self.v.fill(0.0);
        for channel in self.dye.iter_mut() {
            channel.fill(0.0);
        }
    }
}

/// All simulation state, owned by the frame loop.
pub struct SimState {
    pub n: usize,
    pub u: Field,
    pub v: Field,
    pub density: [Field; CHANNELS],
    pub sources: Sources,
    /// Pressure buffer reused by every projection.
    pub pressure: Vec<f64>,
    /// Divergence buffer reused by every projection.
    pub divergence: Vec<f64>,
}

impl SimState {
    pub fn new(n: usize) -> Self {
        let len = field_len(n);
        Self {
            n,
            u: Field::new(n),
            v: Field::new(n),
            density: std::array::from_fn(|_| Field::new(n)),
            sources: Sources::new(n),
            pressure: vec![0.0; len],
            divergence: vec![0.0; len],
        }
    }

    /// Reallocate every field for a new grid side. Prior state is discarded.
    pub fn resize(&mut self, n: usize) {
        log::info!("resizing grid {} -> {}", self.n, n);
        *self = Self::new(n);
    }

    /// Zero every buffer, sources and scratch included.
    pub fn clear(&mut self) {
        self.u.fill(0.0);
        self.v.fill(0.0);
        for channel in self.density.iter_mut() {
            channel.fill(0.0);
        }
        self.sources.zero();
        self.pressure.fill(0.0);
        self.divergence.fill(0.0);
    }

    /// Accumulate a velocity source at cell `(i, j)`.
    pub fn add_velocity(&mut self, i: i32, j: i32, dx: f64, dy: f64) {
        let k = idx(i, j, self.n);
        self.sources.u[k] += dx;
        self.sources.v[k] += dy;
    }

    /// Accumulate dye at cell `(i, j)`, one intensity per channel.
    pub fn add_dye(&mut self, i: i32, j: i32, rgb: [f64; CHANNELS]) {
        let k = idx(i, j, self.n);
        for (channel, amount) in self.sources.dye.iter_mut().zip(rgb) {
            channel[k] += amount;
        }
    }

    /// Current dye value of one channel at `(x, y)`.
    pub fn dye_at(&self, channel: usize, x: i32, y: i32) -> f64 {
        self.density[channel].cur[idx(x, y, self.n)]
    }

    /// Current velocity at `(x, y)`.
    pub fn velocity_at(&self, x: i32, y: i32) -> (f64, f64) {
        let k = idx(x, y, self.n);
        (self.u.cur[k], self.v.cur[k])
    }

    /// Every buffer owned by the state, in a fixed order.
    pub fn buffers(&self) -> Vec<&[f64]> {
        let mut out: Vec<&[f64]> = Vec::new();
        for field in [&self.u, &self.v].into_iter().chain(self.density.iter()) {
            out.push(&field.cur);
            out.push(&field.prev);
        }
        out.push(&self.sources.u);
        out.push(&self.sources.v);
        for channel in &self.sources.dye {
            out.push(channel);
        }
        out.push(&self.pressure);
        out.push(&self.divergence);
        out
    }
}
