//! Error types for lattice construction and mutation.

use crate::bounds::Bounds;
use std::error::Error;
use std::fmt;
use tesserae_core::Tile;

/// Errors from lattice construction or tile placement.
///
/// All variants are caller-input errors surfaced synchronously; nothing
/// is retried internally.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LatticeError {
    /// Width or height was zero or negative.
    InvalidDimensions {
        /// The requested width.
        width: i32,
        /// The requested height.
        height: i32,
    },
    /// A coordinate fell outside the declared bounds.
    OutOfBounds {
        /// The offending row.
        row: i32,
        /// The offending column.
        col: i32,
        /// The lattice bounds the coordinate was checked against.
        bounds: Bounds,
    },
    /// The replacement policy rejected overwriting `current` with
    /// `attempted`.
    InvalidReplacement {
        /// The tile currently in the cell.
        current: Tile,
        /// The tile the caller tried to place.
        attempted: Tile,
        /// The cell's row.
        row: i32,
        /// The cell's column.
        col: i32,
    },
}

impl fmt::Display for LatticeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "lattice dimensions must be strictly positive, got {width}x{height}")
            }
            Self::OutOfBounds { row, col, bounds } => {
                write!(f, "[{row}][{col}] is invalid for a lattice with bounds {bounds}")
            }
            Self::InvalidReplacement {
                current,
                attempted,
                row,
                col,
            } => {
                write!(f, "{current:?} at [{row}][{col}] cannot be replaced with {attempted:?}")
            }
        }
    }
}

impl Error for LatticeError {}
