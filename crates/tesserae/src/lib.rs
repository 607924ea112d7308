//! Tesserae: validated tile lattices for building interiors.
//!
//! This is the top-level facade crate re-exporting the public API from
//! the tesserae sub-crates. Two independent pieces:
//!
//! - [`lattice::Lattice`]: the authoritative mutable grid. Every cell
//!   starts as wall and moves one way through the replacement policy:
//!   wall accepts anything, floor refines into door, doors and stairs
//!   are final.
//! - [`room::Room`]: an immutable, construction-time validated set of
//!   placements: at least three orthogonally-connected floors, with
//!   optional doors on the room's outer edge.
//!
//! A typical generator constructs candidate rooms, inspects validation
//! failures to retry with different layouts, and commits accepted
//! rooms onto a shared lattice, relying on the replacement policy to
//! reject illegal overlaps with previously committed structure.
//!
//! # Quick start
//!
//! ```rust
//! use tesserae::prelude::*;
//!
//! // Validate a candidate room: three floors and an edge door.
//! let room = Room::new([
//!     Feature::door(1, 0),
//!     Feature::floor(1, 1),
//!     Feature::floor(1, 2),
//!     Feature::floor(1, 3),
//! ])
//! .unwrap();
//!
//! // Commit it onto the shared grid.
//! let mut lattice = Lattice::new(8, 8).unwrap();
//! lattice.place_many(room.features().iter().copied()).unwrap();
//! assert_eq!(lattice.get(1, 0).unwrap(), Tile::Door);
//!
//! // A stair cannot overwrite committed floor.
//! assert!(lattice.place(Tile::Stair, 1, 2).is_err());
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `tesserae-core` | tiles, features, rectangles, the glyph renderer |
//! | [`lattice`] | `tesserae-lattice` | the bounded mutable grid and its errors |
//! | [`room`] | `tesserae-room` | validated rooms and their errors |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Tile vocabulary and shared grid utilities (`tesserae-core`).
///
/// Contains [`types::Tile`], [`types::Feature`], [`types::Rect`], and
/// the diagnostic renderer [`types::render::render`].
pub use tesserae_core as types;

/// The authoritative mutable grid (`tesserae-lattice`).
///
/// Provides [`lattice::Lattice`], [`lattice::Bounds`], and
/// [`lattice::LatticeError`].
pub use tesserae_lattice as lattice;

/// Construction-time validated rooms (`tesserae-room`).
///
/// Provides [`room::Room`] and [`room::RoomError`].
pub use tesserae_room as room;

/// Common imports for typical tesserae usage.
///
/// ```rust
/// use tesserae::prelude::*;
/// ```
pub mod prelude {
    pub use tesserae_core::{Feature, Rect, Tile};
    pub use tesserae_lattice::{Bounds, Lattice, LatticeError};
    pub use tesserae_room::{Room, RoomError};
}
