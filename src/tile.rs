use crate::Stone;

/// Describes one board cell: either empty or occupied by a [`Stone`]. Exactly one
/// variant holds per cell at any time.
///
/// # See Also
///
/// * [Board](crate::Board)
/// * [match_stone](crate::match_stone)
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Tile {
    /// No stone placed at the cell.
    Empty,
    /// A stone occupies the cell.
    Stone(Stone),
}

impl Tile {
    /// # Returns
    ///
    /// Whether the tile is [`Tile::Empty`].
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Tile::Empty)
    }

    /// # Returns
    ///
    /// The occupying [`Stone`] or [None] for [`Tile::Empty`].
    #[inline]
    pub fn stone(&self) -> Option<Stone> {
        match self {
            Tile::Empty => None,
            Tile::Stone(stone) => Some(*stone),
        }
    }
}
