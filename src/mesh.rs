//! Mesh resolution and rest-state generation.
//!
//! The skirt is a flared surface of revolution: row `j` is a ring whose radius
//! grows with `j`, squashed along x by the girth factor, and hung below the
//! origin. Row 0 is the waist and row `Y_RES - 1` the hem.

use alloc::vec::Vec as AllocVec;

use crate::config::SkirtConfig;
use crate::float::Float;
use crate::grid::Grid;
use crate::normals;
use crate::vec::Vec3;

/// Columns per ring. Column indices wrap.
pub const X_RES: usize = 120;
/// Rings from waist to hem.
pub const Y_RES: usize = 18;
/// Waist ring, placed by the oscillation driver.
pub const WAIST_ROW: usize = 0;
/// Lower edge of the waistband, placed by the oscillation driver.
pub const WAISTBAND_ROW: usize = 1;
/// First row moved by the spring integrator.
pub const FIRST_FREE_ROW: usize = 2;

/// Radius added per row.
const RING_FLARE: f32 = 0.1;
/// Rows of empty space between the origin and the waist.
const DROP_ROWS: usize = 10;

/// Geometry fixed at generation time.
#[derive(Clone, Debug)]
pub struct RestState<F: Float> {
    /// Chord of one angular division of the unit circle; every spring's rest length.
    pub rest_length: F,
    /// `Y_RES * rest_length`; used for camera placement.
    pub height: F,
    /// Undisturbed waist ring, the pose the driver rotates each tick.
    pub initial_pos: AllocVec<Vec3<F>>,
    /// Generated vertex grid.
    pub positions: Grid<Vec3<F>>,
    /// Normals of the generated grid.
    pub normals: Grid<Vec3<F>>,
}

impl<F: Float> RestState<F> {
    pub fn generate(config: &SkirtConfig<F>) -> Self {
        let rest_length = chord_length::<F>(X_RES);
        let height = F::from_usize(Y_RES) * rest_length;
        let step = F::from_f32(360.0) / F::from_usize(X_RES);
        let flare = F::from_f32(RING_FLARE);

        let mut positions = Grid::from_fn(X_RES, Y_RES, |i, j| {
            let angle = (F::from_usize(i) * step).to_radians();
            let radius = flare * F::from_usize(j) + F::one();
            Vec3::new(
                radius * angle.cos() * config.girth,
                -(F::from_usize(j + DROP_ROWS) * rest_length),
                radius * angle.sin(),
            )
        });

        let initial_pos: AllocVec<Vec3<F>> = positions.row(WAIST_ROW).to_vec();
        for (i, p) in initial_pos.iter().enumerate() {
            positions.set(i, WAISTBAND_ROW, waistband_point(*p, rest_length, config.waistband_depth));
        }

        let mut normals = Grid::filled(X_RES, Y_RES, Vec3::zero());
        normals::accumulate(&positions, &mut normals);

        RestState { rest_length, height, initial_pos, positions, normals }
    }
}

/// Chord subtended by one of `divisions` equal arcs of the unit circle.
pub fn chord_length<F: Float>(divisions: usize) -> F {
    let half_arc = (F::from_f32(360.0) / F::from_usize(divisions)).to_radians() / F::two();
    F::two() * half_arc.sin()
}

/// The row-1 partner of a waist point: straight below it by `depth` rest lengths.
pub fn waistband_point<F: Float>(waist: Vec3<F>, rest_length: F, depth: F) -> Vec3<F> {
    Vec3::new(waist.x, waist.y - depth * rest_length, waist.z)
}
