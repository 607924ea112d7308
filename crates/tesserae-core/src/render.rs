//! Textual rendering of tile regions for diagnostics.

use crate::{Rect, Tile};

/// Render a rectangular tile region as a block of glyphs.
///
/// One glyph per cell, one line per row, rows joined with a single
/// `'\n'` and no trailing separator. `tile_at` is called for every
/// `(row, col)` inside `rect`.
///
/// The output is embedded in failure messages so a caller can see the
/// offending layout without re-running its own logic. It is never
/// parsed back.
pub fn render<F>(rect: Rect, tile_at: F) -> String
where
    F: Fn(i32, i32) -> Tile,
{
    // +1 per row for the newline; the last one is not emitted.
    let mut out = String::with_capacity(rect.cell_count() + rect.rows() as usize);
    for row in rect.min_row..=rect.max_row {
        if row > rect.min_row {
            out.push('\n');
        }
        for col in rect.min_col..=rect.max_col {
            out.push(tile_at(row, col).glyph());
        }
    }
    out
}
