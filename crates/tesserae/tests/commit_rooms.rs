//! The generator contract end to end: validated rooms committed onto a
//! shared lattice, with the replacement policy arbitrating overlaps.

use tesserae::prelude::*;

/// A solid `rows x cols` floor block with one door on its west side.
fn rectangular_room(top: i32, left: i32, rows: i32, cols: i32) -> Room {
    let mut features = vec![Feature::door(top, left - 1)];
    for row in top..top + rows {
        for col in left..left + cols {
            features.push(Feature::floor(row, col));
        }
    }
    Room::new(features).expect("rectangular rooms with a west door are valid")
}

#[test]
fn disjoint_rooms_commit_cleanly() {
    let mut lattice = Lattice::new(12, 12).unwrap();
    let a = rectangular_room(1, 2, 2, 3);
    let b = rectangular_room(6, 5, 3, 4);

    lattice.place_many(a.features().iter().copied()).unwrap();
    lattice.place_many(b.features().iter().copied()).unwrap();

    assert_eq!(lattice.get(1, 1).unwrap(), Tile::Door);
    assert_eq!(lattice.get(2, 4).unwrap(), Tile::Floor);
    assert_eq!(lattice.get(6, 4).unwrap(), Tile::Door);
    assert_eq!(lattice.get(8, 8).unwrap(), Tile::Floor);
    // Untouched cells stay wall.
    assert_eq!(lattice.get(0, 0).unwrap(), Tile::Wall);
    assert_eq!(lattice.get(4, 4).unwrap(), Tile::Wall);
}

#[test]
fn a_committed_stair_rejects_an_overlapping_room() {
    let mut lattice = Lattice::new(12, 12).unwrap();
    lattice.place(Tile::Stair, 2, 3).unwrap();

    let room = rectangular_room(1, 2, 3, 3); // covers (2, 3)
    let err = lattice
        .place_many(room.features().iter().copied())
        .unwrap_err();

    assert_eq!(
        err,
        LatticeError::InvalidReplacement {
            current: Tile::Stair,
            attempted: Tile::Floor,
            row: 2,
            col: 3,
        }
    );
    // No rollback: everything before the collision is committed.
    assert_eq!(lattice.get(1, 1).unwrap(), Tile::Door);
    assert_eq!(lattice.get(1, 2).unwrap(), Tile::Floor);
    assert_eq!(lattice.get(2, 2).unwrap(), Tile::Floor);
    assert_eq!(lattice.get(2, 3).unwrap(), Tile::Stair);
    // Nothing after the collision was written.
    assert_eq!(lattice.get(2, 4).unwrap(), Tile::Wall);
    assert_eq!(lattice.get(3, 2).unwrap(), Tile::Wall);
}

#[test]
fn overlapping_floors_merge_and_doors_refine_floor() {
    let mut lattice = Lattice::new(12, 12).unwrap();
    let a = rectangular_room(1, 2, 2, 3);
    lattice.place_many(a.features().iter().copied()).unwrap();

    // A second room sharing a floor column commits fine (floor over
    // floor), and its door lands on the first room's floor (floor
    // refines into door).
    let b = Room::new([
        Feature::door(2, 4),
        Feature::floor(3, 4),
        Feature::floor(4, 4),
        Feature::floor(5, 4),
    ])
    .unwrap();
    lattice.place_many(b.features().iter().copied()).unwrap();

    assert_eq!(lattice.get(2, 4).unwrap(), Tile::Door);
    assert_eq!(lattice.get(4, 4).unwrap(), Tile::Floor);
}

#[test]
fn rejected_candidates_report_enough_context_to_retry() {
    // A generator inspects the error variant to decide how to mutate
    // the candidate; the rendering pinpoints the offending layout.
    let err = Room::new([
        Feature::floor(0, 0),
        Feature::floor(0, 1),
        Feature::floor(0, 2),
        Feature::door(0, 3),
        Feature::floor(0, 4),
        Feature::floor(0, 5),
        Feature::floor(0, 6),
    ])
    .unwrap_err();

    assert!(matches!(err, RoomError::DisconnectedFloor { .. }));
    assert!(err.to_string().contains("---D---"), "{err}");
}
