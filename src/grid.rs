//! Column-wrapped vertex grid and the spring topology over it.

use alloc::vec::Vec as AllocVec;

/// One of the six springs attached to a vertex.
///
/// Variants are listed in the order their forces are summed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Neighbor {
    /// `(col, row + 1)`
    Below,
    /// `(col, row - 1)`
    Above,
    /// `(col - 1, row)`, wrapping
    Left,
    /// `(col + 1, row)`, wrapping
    Right,
    /// `(col + 1, row + 1)`, wrapping
    DiagonalBelow,
    /// `(col - 1, row - 1)`, wrapping
    DiagonalAbove,
}

impl Neighbor {
    pub const ALL: [Neighbor; 6] = [
        Neighbor::Below,
        Neighbor::Above,
        Neighbor::Left,
        Neighbor::Right,
        Neighbor::DiagonalBelow,
        Neighbor::DiagonalAbove,
    ];
}

/// A `cols x rows` grid stored as one flat row-major buffer.
///
/// Columns are circular: column `cols - 1` and column `0` are adjacent.
/// Rows are linear. Dimensions never change after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T> {
    cells: AllocVec<T>,
    cols: usize,
    rows: usize,
}

impl<T: Copy> Grid<T> {
    /// A grid with every cell set to `value`. Both dimensions are raised to at least 1.
    pub fn filled(cols: usize, rows: usize, value: T) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        let mut cells = AllocVec::with_capacity(cols * rows);
        cells.resize(cols * rows, value);
        Grid { cells, cols, rows }
    }

    /// A grid whose cell `(col, row)` is `f(col, row)`.
    pub fn from_fn(cols: usize, rows: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        let mut cells = AllocVec::with_capacity(cols * rows);
        for row in 0..rows {
            for col in 0..cols {
                cells.push(f(col, row));
            }
        }
        Grid { cells, cols, rows }
    }

    pub fn get(&self, col: usize, row: usize) -> T {
        self.cells[self.index(col, row)]
    }

    pub fn set(&mut self, col: usize, row: usize, value: T) {
        let idx = self.index(col, row);
        self.cells[idx] = value;
    }

    pub fn fill(&mut self, value: T) {
        for c in self.cells.iter_mut() {
            *c = value;
        }
    }
}

impl<T> Grid<T> {
    /// Flat index of `(col, row)`.
    pub fn index(&self, col: usize, row: usize) -> usize {
        debug_assert!(col < self.cols && row < self.rows, "cell ({}, {}) out of range", col, row);
        row * self.cols + col
    }

    pub fn get_mut(&mut self, col: usize, row: usize) -> &mut T {
        let idx = self.index(col, row);
        &mut self.cells[idx]
    }

    /// Column to the left, wrapping from `0` to `cols - 1`.
    pub fn left_of(&self, col: usize) -> usize {
        (col + self.cols - 1) % self.cols
    }

    /// Column to the right, wrapping from `cols - 1` to `0`.
    pub fn right_of(&self, col: usize) -> usize {
        (col + 1) % self.cols
    }

    /// Cell at the other end of the given spring, or `None` where the grid has no such row.
    pub fn neighbor(&self, col: usize, row: usize, which: Neighbor) -> Option<(usize, usize)> {
        let last = self.rows - 1;
        match which {
            Neighbor::Below if row < last => Some((col, row + 1)),
            Neighbor::Above if row > 0 => Some((col, row - 1)),
            Neighbor::Left => Some((self.left_of(col), row)),
            Neighbor::Right => Some((self.right_of(col), row)),
            Neighbor::DiagonalBelow if row < last => Some((self.right_of(col), row + 1)),
            Neighbor::DiagonalAbove if row > 0 => Some((self.left_of(col), row - 1)),
            _ => None,
        }
    }

    /// The cells of one row, in column order.
    pub fn row(&self, row: usize) -> &[T] {
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    pub fn row_mut(&mut self, row: usize) -> &mut [T] {
        let start = row * self.cols;
        &mut self.cells[start..start + self.cols]
    }

    /// Rows `from..rows` as one contiguous slice.
    pub fn rows_from(&self, from: usize) -> &[T] {
        &self.cells[from * self.cols..]
    }

    pub fn rows_from_mut(&mut self, from: usize) -> &mut [T] {
        let start = from * self.cols;
        &mut self.cells[start..]
    }

    pub fn as_slice(&self) -> &[T] { &self.cells }
    pub fn iter(&self) -> core::slice::Iter<'_, T> { self.cells.iter() }
    pub fn cols(&self) -> usize { self.cols }
    pub fn rows(&self) -> usize { self.rows }
    pub fn len(&self) -> usize { self.cells.len() }
    pub fn is_empty(&self) -> bool { self.cells.is_empty() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correct_cell_count() {
        let grid = Grid::filled(4, 3, 0u8);
        assert_eq!(grid.len(), 12);
        assert_eq!(grid.index(1, 2), 9);
    }

    #[test]
    fn from_fn_is_row_major() {
        let grid = Grid::from_fn(3, 2, |c, r| (c, r));
        assert_eq!(grid.row(1), &[(0, 1), (1, 1), (2, 1)]);
        assert_eq!(grid.get(2, 0), (2, 0));
    }

    #[test]
    fn columns_wrap() {
        let grid = Grid::filled(5, 3, 0u8);
        assert_eq!(grid.left_of(0), 4);
        assert_eq!(grid.right_of(4), 0);
        assert_eq!(grid.neighbor(4, 1, Neighbor::DiagonalBelow), Some((0, 2)));
        assert_eq!(grid.neighbor(0, 1, Neighbor::DiagonalAbove), Some((4, 0)));
    }

    #[test]
    fn rows_do_not_wrap() {
        let grid = Grid::filled(5, 3, 0u8);
        assert_eq!(grid.neighbor(2, 2, Neighbor::Below), None);
        assert_eq!(grid.neighbor(2, 2, Neighbor::DiagonalBelow), None);
        assert_eq!(grid.neighbor(2, 0, Neighbor::Above), None);
        assert_eq!(grid.neighbor(2, 0, Neighbor::DiagonalAbove), None);
        let present = Neighbor::ALL
            .iter()
            .filter(|n| grid.neighbor(2, 1, **n).is_some())
            .count();
        assert_eq!(present, 6);
    }
}
