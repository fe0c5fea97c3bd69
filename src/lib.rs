//! Concrete structs to represent and protect the state of a solitaire stone placement
//! puzzle with methods to play it from the first stone to the last.
//!
//! ## Summary
//!
//! One player places [stones](Stone) on a [BOARD_WIDTH] by [BOARD_HEIGHT] board. Each
//! stone pairs a [color](Color) with a [symbol](Symbol), and the supply holds
//! [STONE_COPIES] copies of [every pairing](stones). The game opens with
//! [INITIAL_STONES_LEN] stones of every color and every symbol already placed on
//! [designated cells](is_initial_position), and the rest shuffled into a draw stack.
//! One pending stone at a time is drawn from the stack, and the player places it on
//! some empty cell where it matches every occupied neighbor by color or symbol. The
//! player earns points for matching neighbors and the game ends when the stack runs
//! out or the pending stone fits nowhere.
//!
//! ## How is the game created?
//!
//! [GameSession] offers the only public endpoint to create the game state.
//! [GameSession::new] and [GameSession::new_random] create the game with a random
//! initial placement, random decorative [backgrounds](Board::backgrounds), and a
//! shuffled draw stack. [GameSession::new_game] starts over in place.
//!
//! ## How is the game advanced?
//!
//! The player [places](GameSession::place_stone) the pending stone on one of the
//! [valid positions](GameSession::valid_positions). Requests outside that set change
//! nothing. Each placement draws the next pending stone from the stack and recomputes
//! the valid positions for it.
//!
//! ### Which cells accept the pending stone?
//!
//! An empty cell accepts the pending stone when every occupied neighbor
//! [matches](match_stone) it by color or symbol, at least one neighbor matches, and
//! the combination of matches is [legal](accepted_matches): `2` matching neighbors
//! need a color match and a symbol match, `3` need at least one of each, and `4` need
//! exactly two of each.
//!
//! ## How are points calculated?
//!
//! A placement matching `1`, `2`, `3`, or `4` neighbors earns `1`, `2`, `4`, or `8`
//! [base points](base_points), doubled once for every four-way placement made earlier
//! in the game. A four-way placement also earns a [milestone bonus](FOUR_WAY_BONUSES)
//! that grows with each four-way. Placements on the outermost ring of cells earn
//! nothing. When the game ends with few [stones](Stone) left in the stack, a
//! [stones-left bonus](STONES_LEFT_BONUSES) is added.
//!
//! ## How is the game viewed?
//!
//! To obtain an immutable representation of the current state of the game, call
//! [GameSession::session_view]. The view borrows the board, the pending stone, the
//! score, and, while [hints are shown](GameSession::set_show_hint), the valid
//! positions.
//!
//! ## How is the game ended?
//!
//! The game ends when the pending stone is absent, the draw stack is empty, or no
//! cell accepts the pending stone. [GameSession::phase] reports the
//! [phase](SessionPhase) and ended sessions ignore further placements.
//!
//! ## How is the game driven?
//!
//! [run] connects a [GameSession] to a [Client]: it repeatedly sends the current
//! [view](SessionView) and applies the client's [actions](Action) until the client
//! quits or fails.
//!
//! ## How are game states tested when properties are private?
//!
//! The `test` build configuration adds many required methods for testing. The state
//! structs implement methods to get mutable references to their properties and
//! helper methods to arrange specific scenarios.

// Document!
#![forbid(
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::invalid_codeblock_attributes,
    rustdoc::invalid_html_tags,
    rustdoc::bare_urls
)]
// Don't leave a build in a half finished state!
#![deny(
    warnings,
    future_incompatible,
    nonstandard_style,
    rust_2018_compatibility,
    rust_2018_idioms,
    rust_2021_compatibility,
    unused,
    single_use_lifetimes,
    unreachable_pub,
    missing_debug_implementations,
    unsafe_code
)]

pub use board::*;
pub use consts::*;
pub use matching::*;
pub use position::*;
#[cfg(test)]
pub use random::*;
pub use runtime::*;
pub use session::*;
pub use stone::*;
pub use supply::*;
pub use tile::*;

mod board;
mod consts;
mod matching;
mod position;
#[cfg(test)]
mod random;
mod runtime;
mod session;
mod stone;
mod supply;
mod tile;
