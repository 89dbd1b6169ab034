mod boundary;
mod core;
pub mod diagnostics;
mod params;

// Re-export public API
pub use boundary::{set_bnd, FieldType};
pub use self::core::{advect, diffuse, lin_solve, project};
pub use params::{SolverParams, DEFAULT_RELAX_ITER};

use crate::state::{Field, SimState};

/// Add a source buffer into the current values of a field.
fn add_source(x: &mut [f64], s: &[f64]) {
    for (xi, si) in x.iter_mut().zip(s) {
        *xi += si;
    }
}

/// Velocity half of the frame: diffuse, project, self-advect, project.
pub fn velocity_step(state: &mut SimState, params: &SolverParams) {
    let n = state.n;
    let dt = params.dt;

    add_source(&mut state.u.cur, &state.sources.u);
    add_source(&mut state.v.cur, &state.sources.v);

    // Diffuse velocity
    state.u.swap();
    state.v.swap();
    {
        let (u, u0) = state.u.split_mut();
        diffuse(FieldType::Vx, u, u0, params.visc, dt, params.diffuse_iter, n);
        let (v, v0) = state.v.split_mut();
        diffuse(FieldType::Vy, v, v0, params.visc, dt, params.diffuse_iter, n);
    }

    // Project so advection traces along a divergence-free field
    project(
        &mut state.u.cur,
        &mut state.v.cur,
        &mut state.pressure,
        &mut state.divergence,
        params.project_iter,
        n,
    );

    // Advect velocity along itself
    state.u.swap();
    state.v.swap();
    {
        let (u, u0) = state.u.split_mut();
        let (v, v0) = state.v.split_mut();
        advect(FieldType::Vx, u, u0, u0, v0, dt, n);
        advect(FieldType::Vy, v, v0, u0, v0, dt, n);
    }

    project(
        &mut state.u.cur,
        &mut state.v.cur,
        &mut state.pressure,
        &mut state.divergence,
        params.project_iter,
        n,
    );
}

/// Diffuse and advect one scalar field along the given velocity.
fn scalar_step(field: &mut Field, source: &[f64], u: &[f64], v: &[f64], params: &SolverParams, n: usize) {
    add_source(&mut field.cur, source);

    field.swap();
    let (x, x0) = field.split_mut();
    diffuse(FieldType::Scalar, x, x0, params.diff, params.dt, params.diffuse_iter, n);

    field.swap();
    let (x, x0) = field.split_mut();
    advect(FieldType::Scalar, x, x0, u, v, params.dt, n);
}

/// Dye half of the frame. Every channel is transported independently
/// along the final velocity of this frame.
pub fn density_step(state: &mut SimState, params: &SolverParams) {
    let n = state.n;
    let SimState { u, v, density, sources, .. } = state;
    for (field, source) in density.iter_mut().zip(sources.dye.iter()) {
        scalar_step(field, source, &u.cur, &v.cur, params, n);
    }
}

/// Full frame: velocity step, density step, then drop this frame's sources.
pub fn fluid_step(state: &mut SimState, params: &SolverParams) {
    velocity_step(state, params);
    density_step(state, params);
    state.sources.zero();
}
