//! Validated room construction.

use crate::error::RoomError;
use crate::grid::WorkingGrid;
use indexmap::IndexSet;
use std::collections::VecDeque;
use std::fmt;
use tesserae_core::{Feature, Tile};

/// An immutable, pre-validated room: one orthogonally-connected floor
/// region with optional doors on its outer edge.
///
/// [`Room::new`] is the only entry point; it runs the full check
/// pipeline and never re-checks afterwards. There is no update
/// operation; replacing a room means constructing a new one. The
/// feature sequence is kept in insertion order, which carries no
/// meaning beyond diagnostics.
///
/// # Examples
///
/// ```
/// use tesserae_core::Feature;
/// use tesserae_room::Room;
///
/// let room = Room::new([
///     Feature::door(0, 0),
///     Feature::floor(0, 1),
///     Feature::floor(0, 2),
///     Feature::floor(0, 3),
/// ])
/// .unwrap();
/// assert_eq!(room.to_string(), "D---");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Room {
    features: Vec<Feature>,
}

impl Room {
    /// Minimum number of floor features in a valid room.
    pub const MIN_FLOOR: usize = 3;

    /// Validate `features` and build the room.
    ///
    /// The checks run in order and the first failure aborts
    /// construction entirely; there is no partially-valid room:
    ///
    /// 1. [`RoomError::InsufficientFloor`]: fewer than
    ///    [`MIN_FLOOR`](Self::MIN_FLOOR) floor features (doors never
    ///    count).
    /// 2. [`RoomError::DisconnectedFloor`]: some floor is unreachable
    ///    from the first floor through orthogonally-adjacent floors.
    ///    Doors do not bridge, and diagonal contact does not connect.
    /// 3. [`RoomError::IllegalDoors`]: a door without an orthogonal
    ///    floor neighbour, or with all four orthogonal neighbours
    ///    inside the bounding rectangle (an interior door).
    ///
    /// Duplicate coordinates are not deduplicated: the working grid
    /// keeps the last feature at a coordinate while the floor count
    /// keeps duplicates, so a duplicated floor coordinate fails as
    /// [`RoomError::DisconnectedFloor`].
    pub fn new<I>(features: I) -> Result<Self, RoomError>
    where
        I: IntoIterator<Item = Feature>,
    {
        let features: Vec<Feature> = features.into_iter().collect();
        let floors: Vec<Feature> = features
            .iter()
            .filter(|f| f.tile() == Tile::Floor)
            .copied()
            .collect();

        let Some(grid) = WorkingGrid::new(&features) else {
            return Err(RoomError::InsufficientFloor {
                found: 0,
                rendering: String::new(),
            });
        };
        if floors.len() < Self::MIN_FLOOR {
            return Err(RoomError::InsufficientFloor {
                found: floors.len(),
                rendering: grid.render(),
            });
        }
        check_continuous_floor(&floors, &grid)?;
        check_doors(&features, &grid)?;
        Ok(Self { features })
    }

    /// The features in their original insertion order.
    pub fn features(&self) -> &[Feature] {
        &self.features
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // A constructed room always has features, but stay total.
        match WorkingGrid::new(&self.features) {
            Some(grid) => f.write_str(&grid.render()),
            None => Ok(()),
        }
    }
}

/// Breadth-first walk from the first floor over orthogonally-adjacent
/// floor cells.
///
/// The walk is restricted to `Floor` tiles: a floor region whose only
/// link runs through a door (or touches diagonally) stays unvisited and
/// fails the count comparison.
fn check_continuous_floor(floors: &[Feature], grid: &WorkingGrid) -> Result<(), RoomError> {
    let origin = floors[0];
    let mut visited: IndexSet<(i32, i32)> = IndexSet::with_capacity(floors.len());
    let mut pending = VecDeque::new();
    visited.insert((origin.row(), origin.col()));
    pending.push_back((origin.row(), origin.col()));

    while let Some((row, col)) = pending.pop_front() {
        for (nr, nc) in grid.neighbours(row, col) {
            if grid.tile_at(nr, nc) == Tile::Floor && visited.insert((nr, nc)) {
                pending.push_back((nr, nc));
            }
        }
    }

    if visited.len() != floors.len() {
        return Err(RoomError::DisconnectedFloor {
            rendering: grid.render(),
        });
    }
    Ok(())
}

fn check_doors(features: &[Feature], grid: &WorkingGrid) -> Result<(), RoomError> {
    let offending: Vec<Feature> = features
        .iter()
        .filter(|f| f.tile() == Tile::Door)
        .filter(|door| !door_is_legal(door, grid))
        .copied()
        .collect();
    if !offending.is_empty() {
        return Err(RoomError::IllegalDoors {
            doors: offending,
            rendering: grid.render(),
        });
    }
    Ok(())
}

/// A legal door touches at least one floor orthogonally and sits on
/// the bounding rectangle's border; a door with all four orthogonal
/// neighbours inside the rectangle is interior.
fn door_is_legal(door: &Feature, grid: &WorkingGrid) -> bool {
    let neighbours = grid.neighbours(door.row(), door.col());
    let touches_floor = neighbours
        .iter()
        .any(|&(row, col)| grid.tile_at(row, col) == Tile::Floor);
    touches_floor && neighbours.len() < 4
}
