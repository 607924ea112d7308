//! Dense working grid overlaying a sparse feature list.

use smallvec::SmallVec;
use tesserae_core::{render, Feature, Rect, Tile};

/// A dense tile grid spanning the bounding rectangle of a feature set.
///
/// Exists only for the duration of one validation pass. Unspecified
/// cells default to [`Tile::Wall`]; features are overlaid in input
/// order, so the last feature at a coordinate wins.
pub(crate) struct WorkingGrid {
    rect: Rect,
    // Row-major over `rect`.
    tiles: Vec<Tile>,
}

impl WorkingGrid {
    /// Build from a feature list. Returns `None` for an empty list,
    /// which has no bounding rectangle.
    pub(crate) fn new(features: &[Feature]) -> Option<Self> {
        let rect = Rect::spanning(features.iter().map(|f| (f.row(), f.col())))?;
        let mut tiles = vec![Tile::Wall; rect.cell_count()];
        for f in features {
            tiles[rect.index(f.row(), f.col())] = f.tile();
        }
        Some(Self { rect, tiles })
    }

    /// The tile at `(row, col)`. Callers must stay inside the
    /// rectangle.
    pub(crate) fn tile_at(&self, row: i32, col: i32) -> Tile {
        self.tiles[self.rect.index(row, col)]
    }

    /// Orthogonal neighbours of `(row, col)` within the rectangle.
    pub(crate) fn neighbours(&self, row: i32, col: i32) -> SmallVec<[(i32, i32); 4]> {
        self.rect.orthogonal_neighbours(row, col)
    }

    /// Glyph rendering of the whole rectangle.
    pub(crate) fn render(&self) -> String {
        render::render(self.rect, |row, col| self.tile_at(row, col))
    }
}
