use crate::state::{idx_inner, SimState};

/// Discrete divergence at interior cell `(i, j)`, same stencil as the projection.
pub fn divergence_at(u: &[f64], v: &[f64], i: usize, j: usize, n: usize) -> f64 {
    -0.5 * (u[idx_inner(i + 1, j, n)] - u[idx_inner(i - 1, j, n)]
        + v[idx_inner(i, j + 1, n)] - v[idx_inner(i, j - 1, n)])
        / n as f64
}

/// Largest absolute divergence over the interior.
pub fn max_divergence(u: &[f64], v: &[f64], n: usize) -> f64 {
    let mut max = 0.0_f64;
    for j in 1..=n {
        for i in 1..=n {
            max = max.max(divergence_at(u, v, i, j, n).abs());
        }
    }
    max
}

/// Sum of a field over interior cells.
pub fn total_mass(field: &[f64], n: usize) -> f64 {
    let mut sum = 0.0;
    for j in 1..=n {
        for i in 1..=n {
            sum += field[idx_inner(i, j, n)];
        }
    }
    sum
}

/// Interior-averaged kinetic energy: KE = 0.5 * <u² + v²>.
pub fn kinetic_energy(u: &[f64], v: &[f64], n: usize) -> f64 {
    let mut sum = 0.0;
    for j in 1..=n {
        for i in 1..=n {
            let ii = idx_inner(i, j, n);
            sum += u[ii] * u[ii] + v[ii] * v[ii];
        }
    }
    0.5 * sum / (n * n) as f64
}

/// Whether every velocity and dye value is finite.
/// The solver does not guard against NaN/Inf; the host checks this instead.
pub fn all_finite(state: &SimState) -> bool {
    let fields = [&state.u.cur, &state.v.cur]
        .into_iter()
        .chain(state.density.iter().map(|d| &d.cur));
    for field in fields {
        if !field.iter().all(|x| x.is_finite()) {
            return false;
        }
    }
    true
}

/// One-line summary for periodic debug logging.
pub fn summary(state: &SimState) -> String {
    let n = state.n;
    let mass: Vec<String> = state
        .density
        .iter()
        .map(|d| format!("{:.1}", total_mass(&d.cur, n)))
        .collect();
    format!(
        "n={} ke={:.3e} max_div={:.3e} dye=[{}]",
        n,
        kinetic_energy(&state.u.cur, &state.v.cur, n),
        max_divergence(&state.u.cur, &state.v.cur, n),
        mass.join(", ")
    )
}
