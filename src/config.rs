use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::input::Injector;
use crate::solver::{SolverParams, DEFAULT_RELAX_ITER};
use crate::state::MAX_GRID;

/// Default config file, looked up in the working directory.
pub const CONFIG_FILE: &str = "dyebox.yaml";

/// Errors that can occur while loading the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub physics: PhysicsConfig,
    pub dye: DyeConfig,
    pub input: InputConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    pub visc: f64,
    pub diff: f64,
    pub dt: f64,
    pub diffuse_iter: usize,
    pub project_iter: usize,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DyeConfig {
    pub amount: f64,
    pub rainbow: bool,
    pub color: [f64; 3],
    pub hue_step: f64,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub force: f64,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub width: usize,
    pub height: usize,
    pub max_grid: usize,
    pub pixels_per_cell: usize,
    pub target_fps: usize,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        let params = SolverParams::default();
        Self {
            visc: params.visc,
            diff: params.diff,
            dt: params.dt,
            diffuse_iter: DEFAULT_RELAX_ITER,
            project_iter: DEFAULT_RELAX_ITER,
        }
    }
}

impl Default for DyeConfig {
    fn default() -> Self {
        let inj = Injector::default();
        Self {
            amount: inj.dye_amount,
            rainbow: inj.rainbow,
            color: inj.color,
            hue_step: inj.hue_step,
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self { force: Injector::default().force_scale }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 640,
            max_grid: MAX_GRID,
            pixels_per_cell: 5,
            target_fps: 60,
        }
    }
}

impl From<&PhysicsConfig> for SolverParams {
    fn from(cfg: &PhysicsConfig) -> Self {
        Self {
            visc: cfg.visc,
            diff: cfg.diff,
            dt: cfg.dt,
            diffuse_iter: cfg.diffuse_iter,
            project_iter: cfg.project_iter,
        }
    }
}

impl Config {
    pub fn solver_params(&self) -> SolverParams {
        SolverParams::from(&self.physics)
    }

    pub fn injector(&self) -> Injector {
        let mut inj = Injector::default();
        inj.force_scale = self.input.force;
        inj.dye_amount = self.dye.amount;
        inj.rainbow = self.dye.rainbow;
        inj.color = self.dye.color;
        inj.hue_step = self.dye.hue_step;
        inj
    }

    /// Reject values the solver cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.physics;
        if !(p.dt > 0.0) {
            return Err(invalid("physics.dt", format!("must be positive, got {}", p.dt)));
        }
        if !(p.visc >= 0.0) {
            return Err(invalid("physics.visc", format!("must be non-negative, got {}", p.visc)));
        }
        if !(p.diff >= 0.0) {
            return Err(invalid("physics.diff", format!("must be non-negative, got {}", p.diff)));
        }
        if p.diffuse_iter == 0 {
            return Err(invalid("physics.diffuse_iter", "must be at least 1".into()));
        }
        if p.project_iter == 0 {
            return Err(invalid("physics.project_iter", "must be at least 1".into()));
        }
        if self.display.max_grid == 0 {
            return Err(invalid("display.max_grid", "must be at least 1".into()));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: String) -> ConfigError {
    ConfigError::Invalid { field, reason }
}

/// Parse and validate a YAML document.
pub fn parse(contents: &str, path: &str) -> Result<Config, ConfigError> {
    let cfg: Config = serde_yaml::from_str(contents).map_err(|source| ConfigError::Parse {
        path: path.to_string(),
        source,
    })?;
    cfg.validate()?;
    Ok(cfg)
}

/// Load and validate a config file.
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let display = path.display().to_string();
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: display.clone(),
        source,
    })?;
    parse(&contents, &display)
}

/// Load `dyebox.yaml` if present, falling back to defaults on any error.
pub fn load() -> Config {
    let path = Path::new(CONFIG_FILE);
    if !path.exists() {
        return Config::default();
    }
    match load_from(path) {
        Ok(cfg) => {
            log::info!("loaded {}", CONFIG_FILE);
            cfg
        }
        Err(e) => {
            log::warn!("{e}; using defaults");
            Config::default()
        }
    }
}
