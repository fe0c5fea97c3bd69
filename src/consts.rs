use crate::{Color, Symbol, STONES_LEN};
use konst::primitive::parse_usize;
use konst::{option, result};

/// The number of columns on the board. If the environment variable named `BOARD_WIDTH` is
/// present at compile time and is able to be parsed into a `usize`, set to the value of
/// the environment variable. Otherwise, it is set to `12`.
///
/// # Panics
///
/// * When the given value is less than `4` so that the four corner cells and the two
/// center cells stay distinct
///
/// # See Also
///
/// * [is_initial_position](crate::is_initial_position)
/// * [Board](crate::Board)
pub const BOARD_WIDTH: usize = option::unwrap_or!(
    option::and_then!(option_env!("BOARD_WIDTH"), |str| result::ok!(parse_usize(
        str
    ))),
    12
);
const _: () = assert!(BOARD_WIDTH >= 4);
/// The number of rows on the board. If the environment variable named `BOARD_HEIGHT` is
/// present at compile time and is able to be parsed into a `usize`, set to the value of
/// the environment variable. Otherwise, it is set to `8`.
///
/// # Panics
///
/// * When the given value is less than `4` so that the four corner cells and the two
/// center cells stay distinct
///
/// # See Also
///
/// * [is_initial_position](crate::is_initial_position)
/// * [Board](crate::Board)
pub const BOARD_HEIGHT: usize = option::unwrap_or!(
    option::and_then!(option_env!("BOARD_HEIGHT"), |str| result::ok!(parse_usize(
        str
    ))),
    8
);
const _: () = assert!(BOARD_HEIGHT >= 4);
/// The number of times each unique [stone](crate::Stone) appears in one game. If the
/// environment variable named `STONE_COPIES` is present at compile time and is able to be
/// parsed into a `usize`, set to the value of the environment variable. Otherwise, it is
/// set to `2`.
///
/// # Panics
///
/// * When the given value is `0`
///
/// # See Also
///
/// * [SUPPLY_LEN]
/// * [draw_stack](crate::draw_stack)
pub const STONE_COPIES: usize = option::unwrap_or!(
    option::and_then!(option_env!("STONE_COPIES"), |str| result::ok!(parse_usize(
        str
    ))),
    2
);
const _: () = assert!(STONE_COPIES >= 1);
/// The total number of [stones](crate::Stone) in one game across the draw stack,
/// the board, and the pending stone. `72` stones by default.
///
/// # See Also
///
/// * [STONE_COPIES]
/// * [draw_stack](crate::draw_stack)
pub const SUPPLY_LEN: usize = STONES_LEN * STONE_COPIES;
/// The number of [stones](crate::Stone) placed on the board before the first draw.
/// One stone per [color](Color) and one stone per [symbol](Symbol), `6` stones.
///
/// # See Also
///
/// * [initial_placement](crate::initial_placement)
/// * [is_initial_position](crate::is_initial_position)
pub const INITIAL_STONES_LEN: usize = Color::COLORS_LEN;
// initial stones consume one color and one symbol each
// cannot use assert_eq! in a const context
const _: () = assert!(Color::COLORS_LEN == Symbol::SYMBOLS_LEN);
const _: () = assert!(SUPPLY_LEN > INITIAL_STONES_LEN);
/// The number of decorative background variants a board cell can show. Backgrounds are
/// cosmetic only and never affect legality or points.
///
/// # See Also
///
/// * [Board::backgrounds](crate::Board::backgrounds)
pub const BACKGROUND_VARIANTS: u8 = 4;
/// Milestone bonuses for consecutive four-way placements. The first four-way placement
/// of a game earns the first entry, the second earns the second entry, and so on.
/// Four-way placements past the end of the table earn no milestone bonus, although
/// the doubling of base points continues without bound.
///
/// # See Also
///
/// * [GameSession::place_stone](crate::GameSession::place_stone)
pub const FOUR_WAY_BONUSES: [usize; 12] = [
    25, 50, 100, 200, 400, 600, 800, 1000, 5000, 10_000, 25_000, 50_000,
];
/// End-of-game bonuses indexed by the number of [stones](crate::Stone) left in the draw
/// stack when the game ends. Ending with `0` stones left earns `1000`, with `1` left
/// earns `500`, with `2` left earns `100`, and with `3` or more left earns nothing.
///
/// # See Also
///
/// * [GameSession::place_stone](crate::GameSession::place_stone)
pub const STONES_LEFT_BONUSES: [usize; 3] = [1000, 500, 100];
