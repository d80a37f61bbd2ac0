//! Triangle-strip layout for drawing the skirt.
//!
//! One strip covers the band between `row` and `row + 1`. It starts at
//! column 0, walks every column, and closes back onto column 0 so the seam is
//! sewn shut.

use crate::float::Float;
use crate::grid::Grid;
use crate::mesh::{X_RES, Y_RES};
use crate::vec::Vec3;

/// Extra columns of texture width beyond the mesh, keeping the image from
/// wrapping fully around the seam.
const TEXTURE_MARGIN: usize = 10;

/// One vertex of a strip, ready for a renderer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StripVertex<F: Float> {
    pub position: Vec3<F>,
    /// Accumulated, unnormalized normal.
    pub normal: Vec3<F>,
    /// `(u, v)` texture coordinate.
    pub tex_coord: (F, F),
}

/// Iterator over the vertices of one band. Created by [`Skirt::strip`](crate::skirt::Skirt::strip).
pub struct Strip<'a, F: Float> {
    positions: &'a Grid<Vec3<F>>,
    normals: &'a Grid<Vec3<F>>,
    row: usize,
    next: usize,
}

impl<'a, F: Float> Strip<'a, F> {
    pub(crate) fn new(positions: &'a Grid<Vec3<F>>, normals: &'a Grid<Vec3<F>>, row: usize) -> Self {
        debug_assert!(row + 1 < Y_RES, "row {} has no band below it", row);
        Strip { positions, normals, row, next: 0 }
    }

    /// Vertices in a full strip: two per column plus the closing pair.
    pub const VERTEX_COUNT: usize = 2 * (X_RES + 1);

    fn vertex(&self, col: usize, row: usize, u_col: usize) -> StripVertex<F> {
        let u = F::from_usize(u_col) / F::from_usize(X_RES + TEXTURE_MARGIN);
        let v = F::from_usize(row) / F::from_usize(Y_RES);
        StripVertex {
            position: self.positions.get(col, row),
            normal: self.normals.get(col, row),
            tex_coord: (u, v),
        }
    }
}

impl<'a, F: Float> Iterator for Strip<'a, F> {
    type Item = StripVertex<F>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= Self::VERTEX_COUNT {
            return None;
        }
        let step = self.next / 2;
        let row = self.row + self.next % 2;
        self.next += 1;
        // The last pair revisits column 0 at the far edge of the texture.
        let col = if step == X_RES { 0 } else { step };
        Some(self.vertex(col, row, step))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = Self::VERTEX_COUNT - self.next;
        (left, Some(left))
    }
}

impl<'a, F: Float> ExactSizeIterator for Strip<'a, F> {}
