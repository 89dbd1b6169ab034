use crate::state::idx_inner;
use super::boundary::{FieldType, set_bnd};

/// Gauss-Seidel iterative linear solver.
/// Solves: x[i,j] = (x0[i,j] + a * (neighbors)) / c
/// Sweeps in place, so each cell sees neighbors already updated this sweep.
pub fn lin_solve(field_type: FieldType, x: &mut [f64], x0: &[f64], a: f64, c: f64, iter: usize, n: usize) {
    let c_inv = 1.0 / c;
    for _ in 0..iter {
        for j in 1..=n {
            for i in 1..=n {
                let neighbors = x[idx_inner(i - 1, j, n)]
                    + x[idx_inner(i + 1, j, n)]
                    + x[idx_inner(i, j - 1, n)]
                    + x[idx_inner(i, j + 1, n)];
                x[idx_inner(i, j, n)] = (x0[idx_inner(i, j, n)] + a * neighbors) * c_inv;
            }
        }
        set_bnd(field_type, x, n);
    }
}

/// Diffusion step: spreads the field over time.
/// a = dt * rate * N^2, c = 1 + 4a
pub fn diffuse(field_type: FieldType, x: &mut [f64], x0: &[f64], rate: f64, dt: f64, iter: usize, n: usize) {
    let a = dt * rate * (n as f64) * (n as f64);
    let c = 1.0 + 4.0 * a;
    x.copy_from_slice(x0);
    lin_solve(field_type, x, x0, a, c, iter, n);
}

/// Semi-Lagrangian advection: traces cells backwards through the velocity field.
pub fn advect(field_type: FieldType, d: &mut [f64], d0: &[f64], u: &[f64], v: &[f64], dt: f64, n: usize) {
    let dt0 = dt * n as f64;
    let hi = n as f64 + 0.5;

    for j in 1..=n {
        for i in 1..=n {
            let ii = idx_inner(i, j, n);
            // Trace backwards, staying half a cell inside the ghost border
            let x = (i as f64 - dt0 * u[ii]).clamp(0.5, hi);
            let y = (j as f64 - dt0 * v[ii]).clamp(0.5, hi);

            let i0 = x.floor() as usize;
            let i1 = i0 + 1;
            let j0 = y.floor() as usize;
            let j1 = j0 + 1;
            let s1 = x - i0 as f64;
            let s0 = 1.0 - s1;
            let t1 = y - j0 as f64;
            let t0 = 1.0 - t1;

            d[ii] = s0 * (t0 * d0[idx_inner(i0, j0, n)] + t1 * d0[idx_inner(i0, j1, n)])
                + s1 * (t0 * d0[idx_inner(i1, j0, n)] + t1 * d0[idx_inner(i1, j1, n)]);
        }
    }
    set_bnd(field_type, d, n);
}

/// Pressure projection: removes the gradient part of the velocity field.
pub fn project(u: &mut [f64], v: &mut [f64], p: &mut [f64], div: &mut [f64], iter: usize, n: usize) {
    let nf = n as f64;

    // Calculate divergence
    for j in 1..=n {
        for i in 1..=n {
            div[idx_inner(i, j, n)] = -0.5
                * (u[idx_inner(i + 1, j, n)] - u[idx_inner(i - 1, j, n)]
                    + v[idx_inner(i, j + 1, n)] - v[idx_inner(i, j - 1, n)])
                / nf;
            p[idx_inner(i, j, n)] = 0.0;
        }
    }
    set_bnd(FieldType::Scalar, div, n);
    set_bnd(FieldType::Scalar, p, n);

    // Solve for pressure
    lin_solve(FieldType::Scalar, p, div, 1.0, 4.0, iter, n);

    // Subtract pressure gradient from velocity
    for j in 1..=n {
        for i in 1..=n {
            u[idx_inner(i, j, n)] -= 0.5 * nf * (p[idx_inner(i + 1, j, n)] - p[idx_inner(i - 1, j, n)]);
            v[idx_inner(i, j, n)] -= 0.5 * nf * (p[idx_inner(i, j + 1, n)] - p[idx_inner(i, j - 1, n)]);
        }
    }
    set_bnd(FieldType::Vx, u, n);
    set_bnd(FieldType::Vy, v, n);
}
