//! Smooth vertex normals accumulated from the triangle faces of the mesh.

use core::iter;

use crate::float::Float;
use crate::grid::Grid;
use crate::vec::Vec3;

/// Recompute `normals` from `positions`.
///
/// Every quad `(i-1, j) (i, j) (i-1, j+1) (i, j+1)` is split into two
/// triangles, including the quad that closes the seam between the last column
/// and column 0. Each face normal is added, unnormalized, to the three vertices
/// of its triangle, so normals scale with local face area. The last row owns no
/// quads and only collects contributions from the row above it.
pub fn accumulate<F: Float>(positions: &Grid<Vec3<F>>, normals: &mut Grid<Vec3<F>>) {
    debug_assert_eq!(positions.cols(), normals.cols());
    debug_assert_eq!(positions.rows(), normals.rows());
    normals.fill(Vec3::zero());

    let cols = positions.cols();
    for j in 0..positions.rows() - 1 {
        // Seam quad last.
        for i in (1..cols).chain(iter::once(0)) {
            let prev = positions.left_of(i);
            let origin = positions.get(prev, j);
            let along = positions.get(i, j) - origin;
            let across = positions.get(i, j + 1) - origin;
            let down = positions.get(prev, j + 1) - origin;

            let upper = along.cross(across);
            *normals.get_mut(i, j) += upper;
            *normals.get_mut(prev, j) += upper;
            *normals.get_mut(i, j + 1) += upper;

            let lower = across.cross(down);
            *normals.get_mut(prev, j + 1) += lower;
            *normals.get_mut(prev, j) += lower;
            *normals.get_mut(i, j + 1) += lower;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_sheet(cols: usize, rows: usize) -> Grid<Vec3<f32>> {
        Grid::from_fn(cols, rows, |c, r| Vec3::new(c as f32, -(r as f32), 0.0))
    }

    #[test]
    fn interior_of_flat_sheet_faces_one_way() {
        let positions = flat_sheet(6, 4);
        let mut normals = Grid::filled(6, 4, Vec3::zero());
        accumulate(&positions, &mut normals);
        // Columns 1..=4 are untouched by the seam quad.
        for r in 0..4 {
            for c in 1..5 {
                let n = normals.get(c, r);
                assert_eq!((n.x, n.y), (0.0, 0.0));
                assert!(n.z < 0.0, "normal at ({}, {}) is {:?}", c, r, n);
            }
        }
    }

    #[test]
    fn interior_vertex_collects_six_faces() {
        let positions = flat_sheet(6, 4);
        let mut normals = Grid::filled(6, 4, Vec3::zero());
        accumulate(&positions, &mut normals);
        // Each unit triangle contributes -1 along z.
        assert_eq!(normals.get(2, 1).z, -6.0);
        assert_eq!(normals.get(2, 0).z, -3.0);
    }

    #[test]
    fn stale_values_are_cleared() {
        let positions = flat_sheet(6, 4);
        let mut normals = Grid::filled(6, 4, Vec3::new(9.0f32, 9.0, 9.0));
        accumulate(&positions, &mut normals);
        let n = normals.get(3, 3);
        assert_eq!((n.x, n.y), (0.0, 0.0));
    }
}
