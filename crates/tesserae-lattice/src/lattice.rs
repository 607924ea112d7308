//! The authoritative mutable tile grid.

use crate::bounds::Bounds;
use crate::error::LatticeError;
use std::fmt;
use tesserae_core::{render, Feature, Tile};

/// A bounded, mutable grid of committed tiles.
///
/// Every cell starts as [`Tile::Wall`]. Mutation goes through
/// [`place`](Self::place), which enforces bounds and the one-way
/// replacement policy of [`Tile::accepts`]: a wall accepts anything, a
/// floor only floor or door, and doors and stairs only themselves.
///
/// Equality and hashing are structural: two lattices are equal iff
/// every cell matches. [`Display`](fmt::Display) renders one glyph per
/// cell, one line per row; it exists for diagnostics, not round-trips.
///
/// A lattice is created with fixed bounds and never resizes. Writes
/// are not internally synchronized; concurrent callers must serialize
/// access themselves.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Lattice {
    bounds: Bounds,
    // Row-major, `bounds.cell_count()` entries.
    cells: Vec<Tile>,
}

impl Lattice {
    /// Create a `width x height` lattice with every cell set to
    /// [`Tile::Wall`].
    ///
    /// Fails with [`LatticeError::InvalidDimensions`] if either
    /// dimension is zero or negative.
    ///
    /// # Examples
    ///
    /// ```
    /// use tesserae_lattice::Lattice;
    /// use tesserae_core::Tile;
    ///
    /// let lattice = Lattice::new(8, 5).unwrap();
    /// assert_eq!(lattice.get(4, 7).unwrap(), Tile::Wall);
    /// assert!(Lattice::new(0, 5).is_err());
    /// ```
    pub fn new(width: i32, height: i32) -> Result<Self, LatticeError> {
        let bounds = Bounds::new(width, height)?;
        let cells = vec![Tile::Wall; bounds.cell_count()];
        Ok(Self { bounds, cells })
    }

    /// The fixed `(width, height)`.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Read the tile at `(row, col)`.
    ///
    /// Fails with [`LatticeError::OutOfBounds`] outside
    /// `[0, height) x [0, width)`.
    pub fn get(&self, row: i32, col: i32) -> Result<Tile, LatticeError> {
        self.bounds.check(row, col)?;
        Ok(self.cells[self.bounds.index(row, col)])
    }

    /// Overwrite the cell at `(row, col)` with `tile`.
    ///
    /// Fails with [`LatticeError::OutOfBounds`] outside the declared
    /// bounds, or [`LatticeError::InvalidReplacement`] when the cell's
    /// current tile does not accept `tile`.
    pub fn place(&mut self, tile: Tile, row: i32, col: i32) -> Result<(), LatticeError> {
        self.bounds.check(row, col)?;
        let idx = self.bounds.index(row, col);
        let current = self.cells[idx];
        if !current.accepts(tile) {
            return Err(LatticeError::InvalidReplacement {
                current,
                attempted: tile,
                row,
                col,
            });
        }
        self.cells[idx] = tile;
        Ok(())
    }

    /// Place a sequence of features, in order.
    ///
    /// Observably identical to calling [`place`](Self::place) once per
    /// feature: the first failing placement halts the sequence with
    /// that placement's error, and every cell written before it stays
    /// written. There is no rollback.
    pub fn place_many<I>(&mut self, features: I) -> Result<(), LatticeError>
    where
        I: IntoIterator<Item = Feature>,
    {
        for feature in features {
            self.place(feature.tile(), feature.row(), feature.col())?;
        }
        Ok(())
    }
}

impl fmt::Display for Lattice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let drawing = render::render(self.bounds.rect(), |row, col| {
            self.cells[self.bounds.index(row, col)]
        });
        f.write_str(&drawing)
    }
}
