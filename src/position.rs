use crate::{BOARD_HEIGHT, BOARD_WIDTH};
use smallvec::SmallVec;

/// A tuple with two integer components for horizontal and vertical position on the board
/// where `0 <= x <` [BOARD_WIDTH] and `0 <= y <` [BOARD_HEIGHT]. Two positions are equal
/// exactly when both components are equal.
///
/// # See Also
///
/// * [Board](crate::Board)
/// * [valid_positions](crate::valid_positions)
pub type Position = (usize, usize);

/// An ordered list of up to 4 [positions](Position), stack allocated.
///
/// # See Also
///
/// * [neighbor_positions]
pub type NeighborPositions = SmallVec<[Position; 4]>;

/// # See Also
///
/// * [Board::new](crate::Board::new)
/// * [valid_positions](crate::valid_positions)
///
/// # Returns
///
/// An [iterator](Iterator) over every [position](Position) on the board in row-major
/// order, `(0, 0)` through `(`[BOARD_WIDTH]` - 1, `[BOARD_HEIGHT]` - 1)`.
pub fn positions() -> impl Iterator<Item = Position> {
    (0..BOARD_HEIGHT).flat_map(|y| (0..BOARD_WIDTH).map(move |x| (x, y)))
}

/// Finds the orthogonally adjacent [positions](Position) of the argument
/// [position](Position), omitting any side that falls outside the board. Edge cells have
/// 3 neighbors and corner cells have 2.
///
/// # Arguments
///
/// * `position`: A [position](Position) on the board.
///
/// # See Also
///
/// * [Board::neighbor_tiles](crate::Board::neighbor_tiles)
///
/// # Returns
///
/// The in-bounds neighbors in left, right, top, bottom order.
pub fn neighbor_positions((x, y): Position) -> NeighborPositions {
    let mut neighbors = NeighborPositions::new();
    if x > 0 {
        neighbors.push((x - 1, y));
    }
    if x < BOARD_WIDTH - 1 {
        neighbors.push((x + 1, y));
    }
    if y > 0 {
        neighbors.push((x, y - 1));
    }
    if y < BOARD_HEIGHT - 1 {
        neighbors.push((x, y + 1));
    }
    neighbors
}

/// Decides whether a [position](Position) holds a stone before the first draw: one of
/// the 4 board corners or one of the two center cells at
/// `(`[BOARD_WIDTH]` / 2, `[BOARD_HEIGHT]` / 2)` and
/// `(`[BOARD_WIDTH]` / 2 - 1, `[BOARD_HEIGHT]` / 2 - 1)`. Exactly
/// [INITIAL_STONES_LEN](crate::INITIAL_STONES_LEN) such positions exist.
///
/// # Arguments
///
/// * `position`: A [position](Position) on the board.
///
/// # See Also
///
/// * [initial_placement](crate::initial_placement)
/// * [Board::new](crate::Board::new)
pub fn is_initial_position((x, y): Position) -> bool {
    ((x == 0 || x == BOARD_WIDTH - 1) && (y == 0 || y == BOARD_HEIGHT - 1))
        || (x == BOARD_WIDTH / 2 && y == BOARD_HEIGHT / 2)
        || (x == BOARD_WIDTH / 2 - 1 && y == BOARD_HEIGHT / 2 - 1)
}

/// Decides whether a [position](Position) lies on the outermost ring of the board.
/// Border placements never earn points, although they are placed under the same
/// legality rule as any other cell.
///
/// # Arguments
///
/// * `position`: A [position](Position) on the board.
///
/// # See Also
///
/// * [GameSession::place_stone](crate::GameSession::place_stone)
pub fn is_border_position((x, y): Position) -> bool {
    x == 0 || x == BOARD_WIDTH - 1 || y == 0 || y == BOARD_HEIGHT - 1
}
