pub mod config;
mod input;
mod renderer;
pub mod solver;
mod state;

pub use config::{Config, ConfigError};
pub use input::{pixel_to_cell, Injector};
pub use renderer::{channel_to_u8, dye_to_pixel, hue_to_rgb, render_into, RenderConfig};
pub use solver::{density_step, fluid_step, velocity_step, FieldType, SolverParams, DEFAULT_RELAX_ITER};
pub use state::{field_len, grid_size_for, idx, idx_inner, Field, SimState, Sources, CHANNELS, MAX_GRID, MIN_GRID};
