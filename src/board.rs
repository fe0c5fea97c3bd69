use crate::{
    is_initial_position, neighbor_positions, positions, InitialPlacement, Position, Stone, Tile,
    BACKGROUND_VARIANTS, BOARD_HEIGHT, BOARD_WIDTH,
};
use rand::Rng;
use smallvec::SmallVec;

/// The grid of [tiles](Tile) indexed by `tiles[x][y]`.
///
/// # See Also
///
/// * [Board::tiles]
pub type Tiles = [[Tile; BOARD_HEIGHT]; BOARD_WIDTH];
/// The grid of decorative background indexes indexed by `backgrounds[x][y]`. Cosmetic
/// only, never consulted by legality or points.
///
/// # See Also
///
/// * [Board::backgrounds]
/// * [BACKGROUND_VARIANTS]
pub type Backgrounds = [[u8; BOARD_HEIGHT]; BOARD_WIDTH];
/// An ordered list of up to 4 [tiles](Tile), stack allocated.
///
/// # See Also
///
/// * [Board::neighbor_tiles]
pub type NeighborTiles = SmallVec<[Tile; 4]>;

/// Owns the grid of [tiles](Tile), the grid of decorative backgrounds, and the pending
/// [stone](Stone) waiting to be placed. Created from [Board::new].
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Board {
    /// The grid of [tiles](Tile) indexed by `tiles[x][y]`.
    tiles: Tiles,
    /// The grid of decorative background indexes indexed by `backgrounds[x][y]`.
    backgrounds: Backgrounds,
    /// The pending [stone](Stone) waiting to be placed, absent only before the first
    /// draw and after the draw stack runs dry.
    next_stone: Option<Stone>,
}

impl Board {
    /// Traverses every cell in [row-major order](positions), placing the next unconsumed
    /// stone from `initial_placement` on each [designated cell](is_initial_position) and
    /// leaving every other cell [empty](Tile::Empty). Every cell also receives a random
    /// decorative background index below [BACKGROUND_VARIANTS]. The pending stone starts
    /// absent until the session draws.
    ///
    /// # Arguments
    ///
    /// * `rng`: The source of randomness for backgrounds. Consulted once per cell.
    /// * `initial_placement`: The [stones](Stone) to place on the designated cells,
    /// consumed in traversal order.
    ///
    /// # See Also
    ///
    /// * [initial_placement](crate::initial_placement)
    /// * [GameSession::new](crate::GameSession::new)
    ///
    /// # Returns
    ///
    /// A [`Board`] holding exactly the stones of `initial_placement`.
    pub fn new<R: Rng + ?Sized>(rng: &mut R, initial_placement: InitialPlacement) -> Board {
        let mut unconsumed = initial_placement.into_iter();
        let mut tiles = [[Tile::Empty; BOARD_HEIGHT]; BOARD_WIDTH];
        let mut backgrounds = [[0; BOARD_HEIGHT]; BOARD_WIDTH];

        for (x, y) in positions() {
            backgrounds[x][y] = rng.gen_range(0..BACKGROUND_VARIANTS);
            if is_initial_position((x, y)) {
                let stone = unconsumed.next().unwrap_or_else(|| {
                    unreachable!(
                        "initial_placement should hold one stone per designated cell \
                        since both are INITIAL_STONES_LEN long."
                    );
                });
                tiles[x][y] = Tile::Stone(stone);
            }
        }

        Board {
            tiles,
            backgrounds,
            next_stone: None,
        }
    }

    /// # Arguments
    ///
    /// * `position`: A [position](Position) on the board.
    ///
    /// # Panics
    ///
    /// When a component of `position` lies outside the board.
    ///
    /// # Returns
    ///
    /// The [tile](Tile) at `position`.
    #[inline]
    pub fn tile(&self, (x, y): Position) -> Tile {
        self.tiles[x][y]
    }

    /// # Arguments
    ///
    /// * `position`: A [position](Position) on the board.
    ///
    /// # See Also
    ///
    /// * [neighbor_positions]
    /// * [match_results](crate::match_results)
    ///
    /// # Returns
    ///
    /// The [tiles](Tile) on the in-bounds orthogonal neighbors of `position` in
    /// left, right, top, bottom order.
    pub fn neighbor_tiles(&self, position: Position) -> NeighborTiles {
        neighbor_positions(position)
            .into_iter()
            .map(|neighbor| self.tile(neighbor))
            .collect()
    }

    /// The pending [stone](Stone) waiting to be placed, or [None] once the draw stack
    /// has run dry.
    #[inline]
    pub fn next_stone(&self) -> Option<Stone> {
        self.next_stone
    }

    /// The grid of [tiles](Tile) indexed by `tiles[x][y]`.
    #[inline]
    pub fn tiles(&self) -> &Tiles {
        &self.tiles
    }

    /// The grid of decorative background indexes indexed by `backgrounds[x][y]`.
    #[inline]
    pub fn backgrounds(&self) -> &Backgrounds {
        &self.backgrounds
    }

    /// # Returns
    ///
    /// The number of occupied cells on the board.
    pub fn placed_len(&self) -> usize {
        positions()
            .filter(|&position| !self.tile(position).is_empty())
            .count()
    }

    /// Occupies the cell at `position` with `stone`.
    pub(crate) fn place(&mut self, (x, y): Position, stone: Stone) {
        self.tiles[x][y] = Tile::Stone(stone);
    }

    /// Replaces the pending [stone](Stone).
    pub(crate) fn set_next_stone(&mut self, next_stone: Option<Stone>) {
        self.next_stone = next_stone;
    }
}

#[cfg(test)]
impl Board {
    /// Generates a board with every cell [empty](Tile::Empty), zeroed backgrounds, and
    /// no pending stone.
    pub fn empty_board() -> Board {
        Board {
            tiles: [[Tile::Empty; BOARD_HEIGHT]; BOARD_WIDTH],
            backgrounds: [[0; BOARD_HEIGHT]; BOARD_WIDTH],
            next_stone: None,
        }
    }

    /// A mutable reference to `self.tiles`.
    pub fn mut_tiles(&mut self) -> &mut Tiles {
        &mut self.tiles
    }

    /// A mutable reference to `self.next_stone`.
    pub fn mut_next_stone(&mut self) -> &mut Option<Stone> {
        &mut self.next_stone
    }
}
