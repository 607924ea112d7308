//! The closed tile vocabulary: wall, floor, door, stair.

use std::fmt;

/// Content of one lattice cell.
///
/// The variant set is closed: interiors are built from exactly these
/// four tiles. Each variant carries a display glyph used in diagnostic
/// renderings and a walkability flag. Equality is structural; a tile
/// has no identity beyond its variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tile {
    /// Unexcavated rock or masonry; the default cell content. Not walkable.
    Wall,
    /// Open room floor.
    Floor,
    /// A doorway on a room's outer edge.
    Door,
    /// A staircase to another level.
    Stair,
}

impl Tile {
    /// Every variant, in declaration order.
    pub const ALL: [Tile; 4] = [Tile::Wall, Tile::Floor, Tile::Door, Tile::Stair];

    /// Single-character glyph used in diagnostic renderings.
    pub fn glyph(self) -> char {
        match self {
            Tile::Wall => ' ',
            Tile::Floor => '-',
            Tile::Door => 'D',
            Tile::Stair => 'x',
        }
    }

    /// Whether an agent could stand on this tile.
    ///
    /// Everything except [`Tile::Wall`] is walkable.
    pub fn is_walkable(self) -> bool {
        !matches!(self, Tile::Wall)
    }

    /// Whether `next` may overwrite a cell currently holding `self`.
    ///
    /// Commitment is one-way: a wall accepts any tile, a floor can only
    /// be rewritten as floor or refined into a door, and doors and
    /// stairs accept nothing but themselves. A cell never reverts to
    /// wall and never crosses into an unrelated category.
    pub fn accepts(self, next: Tile) -> bool {
        match self {
            Tile::Wall => true,
            Tile::Floor => matches!(next, Tile::Floor | Tile::Door),
            Tile::Door => next == Tile::Door,
            Tile::Stair => next == Tile::Stair,
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
