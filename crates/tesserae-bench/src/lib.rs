//! Benchmark profiles for the tesserae workspace.
//!
//! Feature-list builders for benchmark scenarios:
//!
//! - [`solid_room`]: a `rows x cols` solid floor block
//! - [`serpentine_room`]: a single winding one-cell-wide corridor, the
//!   worst case for the connectivity walk

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use tesserae_core::Feature;

/// Every floor of a solid `rows x cols` block anchored at `(0, 0)`.
pub fn solid_room(rows: i32, cols: i32) -> Vec<Feature> {
    let mut features = Vec::with_capacity((rows * cols) as usize);
    for row in 0..rows {
        for col in 0..cols {
            features.push(Feature::floor(row, col));
        }
    }
    features
}

/// A serpentine corridor filling `rows x cols`: every even row fully
/// floored, odd rows holding a single connector cell on alternating
/// ends. Maximizes the path length the connectivity walk has to cover.
pub fn serpentine_room(rows: i32, cols: i32) -> Vec<Feature> {
    let mut features = Vec::new();
    for row in 0..rows {
        if row % 2 == 0 {
            for col in 0..cols {
                features.push(Feature::floor(row, col));
            }
        } else {
            let col = if (row / 2) % 2 == 0 { cols - 1 } else { 0 };
            features.push(Feature::floor(row, col));
        }
    }
    features
}
