use crate::state::idx_inner;

/// Field type for boundary condition dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// Dye, pressure, divergence.
    Scalar,
    /// Horizontal velocity.
    Vx,
    /// Vertical velocity.
    Vy,
}

impl FieldType {
    /// Numeric code: 0 = scalar, 1 = horizontal velocity, 2 = vertical velocity.
    pub const fn code(self) -> u8 {
        match self {
            FieldType::Scalar => 0,
            FieldType::Vx => 1,
            FieldType::Vy => 2,
        }
    }

    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(FieldType::Scalar),
            1 => Some(FieldType::Vx),
            2 => Some(FieldType::Vy),
            _ => None,
        }
    }
}

/// Closed reflecting box boundary.
///   - `FieldType::Vx`: negate at left/right walls, copy at top/bottom
///   - `FieldType::Vy`: negate at top/bottom walls, copy at left/right
///   - `FieldType::Scalar`: Neumann (copy neighbor) everywhere
/// Corners take the average of their two orthogonal neighbors.
pub fn set_bnd(field_type: FieldType, x: &mut [f64], n: usize) {
    let sx = if field_type == FieldType::Vx { -1.0 } else { 1.0 };
    let sy = if field_type == FieldType::Vy { -1.0 } else { 1.0 };
    let e = n + 1;

    for i in 1..=n {
        // Left/Right walls
        x[idx_inner(0, i, n)] = sx * x[idx_inner(1, i, n)];
        x[idx_inner(e, i, n)] = sx * x[idx_inner(n, i, n)];
        // Bottom/Top walls
        x[idx_inner(i, 0, n)] = sy * x[idx_inner(i, 1, n)];
        x[idx_inner(i, e, n)] = sy * x[idx_inner(i, n, n)];
    }

    x[idx_inner(0, 0, n)] = 0.5 * (x[idx_inner(1, 0, n)] + x[idx_inner(0, 1, n)]);
    x[idx_inner(0, e, n)] = 0.5 * (x[idx_inner(1, e, n)] + x[idx_inner(0, n, n)]);
    x[idx_inner(e, 0, n)] = 0.5 * (x[idx_inner(n, 0, n)] + x[idx_inner(e, 1, n)]);
    x[idx_inner(e, e, n)] = 0.5 * (x[idx_inner(n, e, n)] + x[idx_inner(e, n, n)]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{field_len, idx};
    use proptest::prelude::*;

    const N: usize = 16;

    fn ramp() -> Vec<f64> {
        let mut field = vec![0.0; field_len(N)];
        for j in 1..=N {
            for i in 1..=N {
                field[idx_inner(i, j, N)] = (i * 100 + j) as f64;
            }
        }
        field
    }

    #[test]
    fn test_field_type_codes() {
        for ft in [FieldType::Scalar, FieldType::Vx, FieldType::Vy] {
            assert_eq!(FieldType::from_code(ft.code()), Some(ft));
        }
        assert_eq!(FieldType::Vx.code(), 1);
        assert_eq!(FieldType::from_code(3), None);
    }

    #[test]
    fn test_set_bnd_scalar_copies_neighbor() {
        let mut field = ramp();
        set_bnd(FieldType::Scalar, &mut field, N);
        let e = (N + 1) as i32;
        for i in 1..=N as i32 {
            assert_eq!(field[idx(0, i, N)], field[idx(1, i, N)], "left wall should copy x=1");
            assert_eq!(field[idx(e, i, N)], field[idx(e - 1, i, N)], "right wall should copy x=N");
            assert_eq!(field[idx(i, 0, N)], field[idx(i, 1, N)], "bottom wall should copy y=1");
            assert_eq!(field[idx(i, e, N)], field[idx(i, e - 1, N)], "top wall should copy y=N");
        }
    }

    #[test]
    fn test_set_bnd_vx_negates_at_side_walls() {
        let mut field = ramp();
        set_bnd(FieldType::Vx, &mut field, N);
        let e = (N + 1) as i32;
        for i in 1..=N as i32 {
            assert_eq!(field[idx(0, i, N)], -field[idx(1, i, N)], "vx should negate at left wall");
            assert_eq!(field[idx(e, i, N)], -field[idx(e - 1, i, N)], "vx should negate at right wall");
            assert_eq!(field[idx(i, 0, N)], field[idx(i, 1, N)], "vx should slip along bottom wall");
            assert_eq!(field[idx(i, e, N)], field[idx(i, e - 1, N)], "vx should slip along top wall");
        }
    }

    #[test]
    fn test_set_bnd_vy_negates_at_floor_and_ceiling() {
        let mut field = ramp();
        set_bnd(FieldType::Vy, &mut field, N);
        let e = (N + 1) as i32;
        for i in 1..=N as i32 {
            assert_eq!(field[idx(i, 0, N)], -field[idx(i, 1, N)], "vy should negate at bottom wall");
            assert_eq!(field[idx(i, e, N)], -field[idx(i, e - 1, N)], "vy should negate at top wall");
            assert_eq!(field[idx(0, i, N)], field[idx(1, i, N)], "vy should slip along left wall");
        }
    }

    #[test]
    fn test_set_bnd_corners_average_neighbors() {
        let mut field = ramp();
        set_bnd(FieldType::Vx, &mut field, N);
        let e = (N + 1) as i32;
        let expect = 0.5 * (field[idx(1, 0, N)] + field[idx(0, 1, N)]);
        assert_eq!(field[idx(0, 0, N)], expect);
        let expect = 0.5 * (field[idx(e - 1, e, N)] + field[idx(e, e - 1, N)]);
        assert_eq!(field[idx(e, e, N)], expect);
    }

    #[test]
    fn test_set_bnd_leaves_interior_untouched() {
        let original = ramp();
        let mut field = original.clone();
        set_bnd(FieldType::Vy, &mut field, N);
        for j in 1..=N {
            for i in 1..=N {
                assert_eq!(field[idx_inner(i, j, N)], original[idx_inner(i, j, N)]);
            }
        }
    }

    proptest! {
        #[test]
        fn prop_scalar_boundary_is_idempotent(values in proptest::collection::vec(-10.0f64..10.0, field_len(8))) {
            let mut once = values.clone();
            set_bnd(FieldType::Scalar, &mut once, 8);
            let mut twice = once.clone();
            set_bnd(FieldType::Scalar, &mut twice, 8);
            prop_assert_eq!(once, twice);
        }
    }
}
