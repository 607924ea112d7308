//! Inclusive bounding rectangles with orthogonal-adjacency queries.
//!
//! Shared by the lattice (full-grid rendering) and room validation
//! (working grids sized to a feature set's bounding rectangle).

use smallvec::SmallVec;

/// Offsets of the four cardinal neighbours: north, south, west, east.
pub const ORTHOGONAL_OFFSETS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// An inclusive min/max rectangle of grid coordinates.
///
/// Cells inside the rectangle are addressed row-major, so adjacency
/// queries and dense overlays stay O(1) without a sparse map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
    /// Smallest row inside the rectangle.
    pub min_row: i32,
    /// Largest row inside the rectangle.
    pub max_row: i32,
    /// Smallest column inside the rectangle.
    pub min_col: i32,
    /// Largest column inside the rectangle.
    pub max_col: i32,
}

impl Rect {
    /// Build from inclusive corners. Callers must keep `min <= max` on
    /// both axes.
    pub fn new(min_row: i32, max_row: i32, min_col: i32, max_col: i32) -> Self {
        debug_assert!(min_row <= max_row && min_col <= max_col);
        Self {
            min_row,
            max_row,
            min_col,
            max_col,
        }
    }

    /// The smallest rectangle containing every given `(row, col)` point.
    ///
    /// Returns `None` for an empty iterator.
    pub fn spanning<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = (i32, i32)>,
    {
        let mut points = points.into_iter();
        let (row, col) = points.next()?;
        let mut rect = Self::new(row, row, col, col);
        for (row, col) in points {
            rect.min_row = rect.min_row.min(row);
            rect.max_row = rect.max_row.max(row);
            rect.min_col = rect.min_col.min(col);
            rect.max_col = rect.max_col.max(col);
        }
        Some(rect)
    }

    /// Number of rows.
    pub fn rows(&self) -> i32 {
        self.max_row - self.min_row + 1
    }

    /// Number of columns.
    pub fn cols(&self) -> i32 {
        self.max_col - self.min_col + 1
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        (self.rows() as usize) * (self.cols() as usize)
    }

    /// Whether `(row, col)` lies inside the rectangle.
    pub fn contains(&self, row: i32, col: i32) -> bool {
        row >= self.min_row && row <= self.max_row && col >= self.min_col && col <= self.max_col
    }

    /// Row-major flat index of `(row, col)` within the rectangle.
    ///
    /// Callers must ensure [`contains`](Self::contains) holds.
    pub fn index(&self, row: i32, col: i32) -> usize {
        debug_assert!(self.contains(row, col));
        let r = (row - self.min_row) as usize;
        let c = (col - self.min_col) as usize;
        r * (self.cols() as usize) + c
    }

    /// The 4-connected neighbours of `(row, col)` that fall inside the
    /// rectangle.
    ///
    /// Cells on the rectangle's border have fewer than four neighbours;
    /// that deficit is exactly what door edge-placement checks look at.
    /// Diagonal neighbours are never produced.
    pub fn orthogonal_neighbours(&self, row: i32, col: i32) -> SmallVec<[(i32, i32); 4]> {
        let mut result = SmallVec::new();
        for (dr, dc) in ORTHOGONAL_OFFSETS {
            let (nr, nc) = (row + dr, col + dc);
            if self.contains(nr, nc) {
                result.push((nr, nc));
            }
        }
        result
    }
}
