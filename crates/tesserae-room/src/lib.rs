//! Construction-time validated rooms.
//!
//! A [`Room`] is an immutable collection of tile placements that has
//! passed three checks, run exactly once inside [`Room::new`]:
//!
//! 1. at least three floor tiles;
//! 2. every floor reachable from every other floor through
//!    orthogonally-adjacent floors (doors never bridge, diagonals
//!    never connect);
//! 3. every door orthogonally adjacent to a floor and sitting on the
//!    room's outer edge.
//!
//! Validation is pure and self-contained: each call builds its own
//! dense working grid over the features' bounding rectangle and throws
//! it away afterwards. Independent constructions can run in parallel
//! freely.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
mod grid;
pub mod room;

pub use error::RoomError;
pub use room::Room;
