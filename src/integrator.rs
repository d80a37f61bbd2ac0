//! Symplectic Euler integration of the free rows.
//!
//! Velocities for the whole tick are computed from the positions as they
//! stand, then positions advance with the new velocities. Rows above
//! [`FIRST_FREE_ROW`] belong to the oscillation driver and are only read.

use crate::config::SkirtConfig;
use crate::float::Float;
use crate::grid::{Grid, Neighbor};
use crate::mesh::FIRST_FREE_ROW;
use crate::spring::{self, RowCoefficients};
use crate::vec::Vec3;

/// Net spring force on vertex `(col, row)` from every spring it has.
pub fn spring_force<F: Float>(
    positions: &Grid<Vec3<F>>,
    col: usize,
    row: usize,
    stiffness: F,
    rest_length: F,
) -> Vec3<F> {
    let p = positions.get(col, row);
    let mut total = Vec3::zero();
    for which in Neighbor::ALL {
        if let Some((c, r)) = positions.neighbor(col, row, which) {
            total += spring::force(p, positions.get(c, r), stiffness, rest_length);
        }
    }
    total
}

/// Apply spring forces, gravity, and damping to every free vertex's velocity.
pub fn update_velocities<F: Float>(
    positions: &Grid<Vec3<F>>,
    velocities: &mut Grid<Vec3<F>>,
    rest_length: F,
    config: &SkirtConfig<F>,
) {
    let h = config.velocity_step;
    for row in FIRST_FREE_ROW..positions.rows() {
        let coeff = RowCoefficients::for_row(row, config);
        for col in 0..positions.cols() {
            let f = spring_force(positions, col, row, coeff.stiffness, rest_length);
            let v = velocities.get_mut(col, row);
            *v += f.scale(h);
            v.y = v.y + h * config.gravity;
            *v = *v - v.scale(coeff.damping);
        }
    }
}

/// Advance every free vertex by `position_step * velocity`.
pub fn update_positions<F: Float>(
    positions: &mut Grid<Vec3<F>>,
    velocities: &Grid<Vec3<F>>,
    config: &SkirtConfig<F>,
) {
    let h = config.position_step;
    let free = positions.rows_from_mut(FIRST_FREE_ROW);
    for (p, v) in free.iter_mut().zip(velocities.rows_from(FIRST_FREE_ROW)) {
        *p += v.scale(h);
    }
}
