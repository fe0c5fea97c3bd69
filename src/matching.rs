use crate::{positions, Board, Position, Stone, Tile};
use smallvec::SmallVec;
use std::collections::BTreeSet;

/// An ordered set of [positions](Position) where the pending [stone](Stone) may be
/// legally placed. Recomputed after every placement and every new game.
///
/// # See Also
///
/// * [valid_positions]
/// * [GameSession](crate::GameSession)
pub type ValidPositions = BTreeSet<Position>;
/// The per-neighbor [match results](MatchResult) of one candidate cell, stack allocated.
///
/// # See Also
///
/// * [match_results]
pub type MatchResults = SmallVec<[MatchResult; 4]>;
/// The non-trivial [match tallies](MatchTally) of one candidate cell, stack allocated.
///
/// # See Also
///
/// * [accepted_matches]
pub type Matches = SmallVec<[MatchTally; 4]>;

/// Counts how many [colors](crate::Color) and how many [symbols](crate::Symbol) agree
/// between the pending [stone](Stone) and one neighbor, `0` or `1` each per neighbor.
/// Tallies sum element-wise across neighbors.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct MatchTally {
    /// The number of agreeing colors.
    pub color_matches: usize,
    /// The number of agreeing symbols.
    pub symbol_matches: usize,
}

/// Describes how the pending [stone](Stone) relates to one neighbor [tile](Tile).
///
/// # See Also
///
/// * [match_stone]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MatchResult {
    /// The neighbor holds a stone agreeing in neither color nor symbol. A single
    /// `NotMatching` neighbor vetoes the whole cell.
    NotMatching,
    /// The neighbor is empty (a zero [tally](MatchTally), which neither qualifies nor
    /// disqualifies the cell) or holds a stone agreeing in color, symbol, or both.
    Match(MatchTally),
}

impl MatchResult {
    /// # Returns
    ///
    /// The [tally](MatchTally) of a [`MatchResult::Match`] with at least one agreeing
    /// component, or [None] for [`MatchResult::NotMatching`] and empty-neighbor
    /// matches.
    #[inline]
    pub fn non_trivial(&self) -> Option<MatchTally> {
        match self {
            MatchResult::NotMatching => None,
            MatchResult::Match(tally) => {
                (tally.color_matches > 0 || tally.symbol_matches > 0).then(|| *tally)
            }
        }
    }
}

/// Compares the pending [stone](Stone) against one neighbor [tile](Tile).
///
/// # Arguments
///
/// * `stone`: The pending stone.
/// * `tile`: The neighbor tile.
///
/// # See Also
///
/// * [match_results]
///
/// # Returns
///
/// * A zero [tally](MatchTally) when the neighbor is [empty](Tile::Empty)
/// * [`MatchResult::NotMatching`] when the neighbor stone agrees in neither component
/// * Otherwise a [tally](MatchTally) with `1` per agreeing component
pub fn match_stone(stone: Stone, tile: Tile) -> MatchResult {
    let Some((color, symbol)) = tile.stone() else {
        return MatchResult::Match(MatchTally::default());
    };

    let color_match = stone.0 == color;
    let symbol_match = stone.1 == symbol;
    if color_match || symbol_match {
        MatchResult::Match(MatchTally {
            color_matches: usize::from(color_match),
            symbol_matches: usize::from(symbol_match),
        })
    } else {
        MatchResult::NotMatching
    }
}

/// Compares the pending [stone](Stone) against every in-bounds neighbor of a candidate
/// cell. A cell that is already occupied, or a board without a pending stone, produces
/// no results and therefore no legal placement.
///
/// # Arguments
///
/// * `board`: The board holding the pending stone.
/// * `position`: The candidate cell.
///
/// # See Also
///
/// * [accepted_matches]
/// * [valid_positions]
///
/// # Returns
///
/// One [`MatchResult`] per in-bounds neighbor in left, right, top, bottom order, or
/// no results when the cell cannot receive a stone.
pub fn match_results(board: &Board, position: Position) -> MatchResults {
    let Some(stone) = board.next_stone() else {
        return MatchResults::new();
    };
    if !board.tile(position).is_empty() {
        return MatchResults::new();
    }

    board
        .neighbor_tiles(position)
        .into_iter()
        .map(|tile| match_stone(stone, tile))
        .collect()
}

/// Decides whether a candidate cell accepts the pending [stone](Stone) under the
/// arity rule. Legality is not "at least one match": it is zero conflicts and at least
/// one non-trivial match, with the element-wise total constrained by the number of
/// matching neighbors `k`:
///
/// * `k == 1`: always legal.
/// * `k == 2`: legal with exactly one color match and exactly one symbol match. Two
/// same-component matches do not qualify.
/// * `k == 3`: legal with one color match and two symbol matches, or two color matches
/// and one symbol match.
/// * `k == 4`: legal with exactly two color matches and two symbol matches, the
/// maximal four-way.
///
/// # Arguments
///
/// * `match_results`: The per-neighbor results of the candidate cell.
///
/// # See Also
///
/// * [match_results]
/// * [GameSession::place_stone](crate::GameSession::place_stone)
///
/// # Returns
///
/// The non-trivial [tallies](MatchTally) when the cell is legal, or [None] when any
/// neighbor vetoes the cell or the arity rule fails.
pub fn accepted_matches(match_results: &MatchResults) -> Option<Matches> {
    let mut matches = Matches::new();
    for result in match_results {
        match result {
            // one conflicting neighbor poisons the whole cell
            MatchResult::NotMatching => return None,
            MatchResult::Match(_) => matches.extend(result.non_trivial()),
        }
    }

    let total = matches.iter().fold(MatchTally::default(), |total, tally| {
        MatchTally {
            color_matches: total.color_matches + tally.color_matches,
            symbol_matches: total.symbol_matches + tally.symbol_matches,
        }
    });
    let accepted = match matches.len() {
        1 => true,
        2 => total.color_matches == 1 && total.symbol_matches == 1,
        3 => {
            (total.color_matches == 2 && total.symbol_matches == 1)
                || (total.color_matches == 1 && total.symbol_matches == 2)
        }
        4 => total.color_matches == 2 && total.symbol_matches == 2,
        _ => false,
    };

    if accepted {
        Some(matches)
    } else {
        None
    }
}

/// Scans every cell of the board for cells that [accept](accepted_matches) the pending
/// [stone](Stone).
///
/// # Arguments
///
/// * `board`: The board holding the pending stone.
///
/// # See Also
///
/// * [GameSession::place_stone](crate::GameSession::place_stone)
///
/// # Returns
///
/// The set of legal [positions](Position) for the pending stone, empty when the
/// pending stone is absent.
pub fn valid_positions(board: &Board) -> ValidPositions {
    if board.next_stone().is_none() {
        return ValidPositions::new();
    }

    positions()
        .filter(|&position| accepted_matches(&match_results(board, position)).is_some())
        .collect()
}

/// The points earned by a placement before streak doubling: `1`, `2`, `4`, or `8`
/// points for `1`, `2`, `3`, or `4` matching neighbors.
///
/// # Arguments
///
/// * `matched_neighbors`: The number of non-trivial matching neighbors, `1..=4`.
///
/// # Panics
///
/// When `matched_neighbors` is outside `1..=4`, which cannot be produced by
/// [accepted_matches].
///
/// # See Also
///
/// * [GameSession::place_stone](crate::GameSession::place_stone)
pub fn base_points(matched_neighbors: usize) -> usize {
    match matched_neighbors {
        1 => 1,
        2 => 2,
        3 => 4,
        4 => 8,
        _ => {
            dbg!(matched_neighbors);
            unreachable!(
                "matched_neighbors ({:?}) should lie in 1..=4 since accepted_matches \
                only accepts cells with 1 to 4 matching neighbors.",
                matched_neighbors
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        random_conflicting_stone, random_different_color_same_symbol,
        random_same_color_different_symbol, Color, Symbol,
    };
    use map_macro::btree_set;
    use rand::Rng;
    use smallvec::smallvec;

    #[test]
    fn match_stone_empty_neighbor() {
        let stone = rand::thread_rng().gen();

        assert_eq!(
            MatchResult::Match(MatchTally::default()),
            match_stone(stone, Tile::Empty)
        );
    }

    #[test]
    fn match_stone_color_only() {
        let mut rng = rand::thread_rng();
        let stone = rng.gen();
        let neighbor = random_same_color_different_symbol(&mut rng, stone);

        assert_eq!(
            MatchResult::Match(MatchTally {
                color_matches: 1,
                symbol_matches: 0,
            }),
            match_stone(stone, Tile::Stone(neighbor))
        );
    }

    #[test]
    fn match_stone_symbol_only() {
        let mut rng = rand::thread_rng();
        let stone = rng.gen();
        let neighbor = random_different_color_same_symbol(&mut rng, stone);

        assert_eq!(
            MatchResult::Match(MatchTally {
                color_matches: 0,
                symbol_matches: 1,
            }),
            match_stone(stone, Tile::Stone(neighbor))
        );
    }

    #[test]
    fn match_stone_both_components() {
        let stone = rand::thread_rng().gen();

        assert_eq!(
            MatchResult::Match(MatchTally {
                color_matches: 1,
                symbol_matches: 1,
            }),
            match_stone(stone, Tile::Stone(stone))
        );
    }

    #[test]
    fn match_stone_neither_component() {
        let mut rng = rand::thread_rng();
        let stone = rng.gen();
        let neighbor = random_conflicting_stone(&mut rng, stone);

        assert_eq!(MatchResult::NotMatching, match_stone(stone, Tile::Stone(neighbor)));
    }

    #[test]
    fn match_results_no_next_stone() {
        let board = Board::empty_board();

        assert!(match_results(&board, (5, 4)).is_empty());
    }

    #[test]
    fn match_results_occupied_cell() {
        let mut rng = rand::thread_rng();
        let mut board = Board::empty_board();
        board.place((5, 4), rng.gen());
        *board.mut_next_stone() = Some(rng.gen());

        assert!(match_results(&board, (5, 4)).is_empty());
    }

    #[test]
    fn match_results_per_neighbor() {
        let mut rng = rand::thread_rng();
        let mut board = Board::empty_board();
        let stone = rng.gen();
        let matching = random_same_color_different_symbol(&mut rng, stone);
        let conflicting = random_conflicting_stone(&mut rng, stone);
        // left and top of the candidate cell (5, 4)
        board.place((4, 4), matching);
        board.place((5, 3), conflicting);
        *board.mut_next_stone() = Some(stone);

        let results = match_results(&board, (5, 4));

        assert_eq!(
            MatchResults::from_slice(&[
                MatchResult::Match(MatchTally {
                    color_matches: 1,
                    symbol_matches: 0,
                }),
                MatchResult::Match(MatchTally::default()),
                MatchResult::NotMatching,
                MatchResult::Match(MatchTally::default()),
            ]),
            results
        );
    }

    #[test]
    fn accepted_matches_veto() {
        let results: MatchResults = smallvec![
            MatchResult::Match(MatchTally {
                color_matches: 1,
                symbol_matches: 0,
            }),
            MatchResult::NotMatching,
        ];

        assert_eq!(None, accepted_matches(&results));
    }

    #[test]
    fn accepted_matches_no_matching_neighbors() {
        let results: MatchResults = smallvec![
            MatchResult::Match(MatchTally::default()),
            MatchResult::Match(MatchTally::default()),
        ];

        assert_eq!(None, accepted_matches(&results));

        assert_eq!(None, accepted_matches(&MatchResults::new()));
    }

    #[test]
    fn accepted_matches_one_neighbor() {
        let tally = MatchTally {
            color_matches: 1,
            symbol_matches: 0,
        };
        let results: MatchResults = smallvec![
            MatchResult::Match(tally),
            MatchResult::Match(MatchTally::default()),
        ];

        let expected: Matches = smallvec![tally];
        assert_eq!(Some(expected), accepted_matches(&results));
    }

    #[test]
    fn accepted_matches_two_neighbors_one_of_each() {
        let color = MatchTally {
            color_matches: 1,
            symbol_matches: 0,
        };
        let symbol = MatchTally {
            color_matches: 0,
            symbol_matches: 1,
        };
        let results: MatchResults =
            smallvec![MatchResult::Match(color), MatchResult::Match(symbol)];

        let expected: Matches = smallvec![color, symbol];
        assert_eq!(Some(expected), accepted_matches(&results));
    }

    #[test]
    fn accepted_matches_two_neighbors_same_component() {
        let color = MatchTally {
            color_matches: 1,
            symbol_matches: 0,
        };
        let results: MatchResults = smallvec![MatchResult::Match(color), MatchResult::Match(color)];

        assert_eq!(None, accepted_matches(&results));
    }

    #[test]
    fn accepted_matches_two_neighbors_double_match() {
        let double = MatchTally {
            color_matches: 1,
            symbol_matches: 1,
        };
        let color = MatchTally {
            color_matches: 1,
            symbol_matches: 0,
        };
        let results: MatchResults =
            smallvec![MatchResult::Match(double), MatchResult::Match(color)];

        assert_eq!(None, accepted_matches(&results));
    }

    #[test]
    fn accepted_matches_three_neighbors() {
        let color = MatchTally {
            color_matches: 1,
            symbol_matches: 0,
        };
        let symbol = MatchTally {
            color_matches: 0,
            symbol_matches: 1,
        };

        let two_colors: MatchResults = smallvec![
            MatchResult::Match(color),
            MatchResult::Match(color),
            MatchResult::Match(symbol),
        ];
        assert!(accepted_matches(&two_colors).is_some());

        let two_symbols: MatchResults = smallvec![
            MatchResult::Match(symbol),
            MatchResult::Match(symbol),
            MatchResult::Match(color),
        ];
        assert!(accepted_matches(&two_symbols).is_some());

        let three_colors: MatchResults = smallvec![
            MatchResult::Match(color),
            MatchResult::Match(color),
            MatchResult::Match(color),
        ];
        assert_eq!(None, accepted_matches(&three_colors));
    }

    #[test]
    fn accepted_matches_four_neighbors() {
        let color = MatchTally {
            color_matches: 1,
            symbol_matches: 0,
        };
        let symbol = MatchTally {
            color_matches: 0,
            symbol_matches: 1,
        };

        let four_way: MatchResults = smallvec![
            MatchResult::Match(color),
            MatchResult::Match(symbol),
            MatchResult::Match(color),
            MatchResult::Match(symbol),
        ];
        assert!(accepted_matches(&four_way).is_some());

        let lopsided: MatchResults = smallvec![
            MatchResult::Match(color),
            MatchResult::Match(color),
            MatchResult::Match(color),
            MatchResult::Match(symbol),
        ];
        assert_eq!(None, accepted_matches(&lopsided));
    }

    #[test]
    fn valid_positions_no_next_stone() {
        let board = Board::empty_board();

        assert!(valid_positions(&board).is_empty());
    }

    #[test]
    fn valid_positions_single_stone() {
        let mut board = Board::empty_board();
        let stone = (Color::Green, Symbol::Wave);
        board.place((5, 4), stone);
        *board.mut_next_stone() =
            Some(random_same_color_different_symbol(&mut rand::thread_rng(), stone));

        assert_eq!(
            btree_set! { (4, 4), (6, 4), (5, 3), (5, 5) },
            valid_positions(&board)
        );
    }

    #[test]
    fn valid_positions_vetoed_neighborhood() {
        let mut rng = rand::thread_rng();
        let mut board = Board::empty_board();
        let stone = rng.gen();
        // the cell between the two placed stones matches one but conflicts with the other
        board.place((4, 4), random_same_color_different_symbol(&mut rng, stone));
        board.place((6, 4), random_conflicting_stone(&mut rng, stone));
        *board.mut_next_stone() = Some(stone);

        let valid = valid_positions(&board);

        assert!(!valid.contains(&(5, 4)));
        assert!(valid.contains(&(3, 4)));
        assert!(valid.contains(&(4, 3)));
        assert!(valid.contains(&(4, 5)));
    }

    #[test]
    fn base_points_table() {
        assert_eq!(1, base_points(1));
        assert_eq!(2, base_points(2));
        assert_eq!(4, base_points(3));
        assert_eq!(8, base_points(4));
    }
}
