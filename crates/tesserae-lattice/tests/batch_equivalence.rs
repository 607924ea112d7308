//! Batch placement must be observably identical to sequential placement:
//! same final cells, same failure point, same partial effects.

use proptest::prelude::*;
use tesserae_core::Feature;
use tesserae_lattice::{Lattice, LatticeError};
use tesserae_test_utils::{arb_placements, PlacementFuzzer};

fn place_sequentially(lattice: &mut Lattice, placements: &[Feature]) -> Result<(), LatticeError> {
    for f in placements {
        lattice.place(f.tile(), f.row(), f.col())?;
    }
    Ok(())
}

proptest! {
    // Margin 1 lets sequences stray out of bounds, so both failure
    // kinds (out-of-bounds and invalid replacement) are exercised.
    #[test]
    fn batch_equals_sequential(placements in arb_placements(5, 5, 1, 60)) {
        let mut batch = Lattice::new(5, 5).unwrap();
        let mut one_at_a_time = Lattice::new(5, 5).unwrap();

        let batch_result = batch.place_many(placements.iter().copied());
        let sequential_result = place_sequentially(&mut one_at_a_time, &placements);

        prop_assert_eq!(batch_result, sequential_result);
        prop_assert_eq!(&batch, &one_at_a_time);
    }
}

#[test]
fn seeded_fuzz_in_groups_of_two_and_three() {
    // 200 random in-bounds placements per seed, applied in small
    // groups with both strategies; state and outcome must agree after
    // every group, including groups whose tail was cut off by an
    // invalid replacement.
    for group_size in [2usize, 3] {
        for seed in 0..16u64 {
            let placements = PlacementFuzzer::new(seed, 5, 5).take(200);
            let mut batch = Lattice::new(5, 5).unwrap();
            let mut one_at_a_time = Lattice::new(5, 5).unwrap();

            for group in placements.chunks(group_size) {
                let batch_result = batch.place_many(group.iter().copied());
                let sequential_result = place_sequentially(&mut one_at_a_time, group);
                assert_eq!(batch_result, sequential_result, "seed {seed}");
                assert_eq!(batch, one_at_a_time, "seed {seed}");
            }
        }
    }
}
