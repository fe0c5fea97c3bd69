use crate::{
    accepted_matches, base_points, draw_stack, initial_placement, is_border_position,
    match_results, valid_positions, Backgrounds, Board, DrawStack, Position, Stone, Tiles,
    ValidPositions, FOUR_WAY_BONUSES, STONES_LEFT_BONUSES,
};
use either::Either;
use rand::Rng;

/// Describes whether a [session](GameSession) still accepts placements.
///
/// # See Also
///
/// * [GameSession::phase]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum SessionPhase {
    /// A pending stone is present, the draw stack is not empty, and at least one cell
    /// accepts the pending stone.
    Playing,
    /// The pending stone is absent, the draw stack is empty, or no cell accepts the
    /// pending stone. Absorbing until [GameSession::new_game].
    GameOver,
}

/// Describes one executed placement.
///
/// # See Also
///
/// * [GameSession::place_stone]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Placement {
    /// The cell the stone was placed on.
    pub position: Position,
    /// The placed stone.
    pub stone: Stone,
    /// The number of non-trivially matching neighbors, `1..=4`.
    pub matched_neighbors: usize,
    /// The points added to the score by this placement, including any four-way
    /// milestone bonus. `0` for placements on the border ring.
    pub points: usize,
}

/// Describes the placement that ended the game.
///
/// # See Also
///
/// * [GameSession::place_stone]
/// * [STONES_LEFT_BONUSES]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Finish {
    /// The final executed placement.
    pub placement: Placement,
    /// The end-of-game bonus earned for the number of stones left in the draw stack,
    /// already added to the score.
    pub stones_left_bonus: usize,
}

/// Owns the state of one game and implements the only mutating operations:
/// [placing a stone](GameSession::place_stone) and
/// [starting over](GameSession::new_game). Created from [GameSession::new].
#[derive(Debug)]
pub struct GameSession {
    /// The board with its grid of [tiles](crate::Tile) and the pending stone.
    board: Board,
    /// This is a stack of all the [stones](Stone) that haven't been drawn yet.
    stack: DrawStack,
    /// The cumulative points earned this game.
    score: usize,
    /// The number of four-way placements this game. Doubles the points of every later
    /// placement per four-way.
    four_ways: usize,
    /// The set of cells that accept the pending stone. Recomputed after every
    /// placement.
    valid_positions: ValidPositions,
    /// Whether views should reveal the valid positions. Display only, no effect on
    /// play.
    show_hint: bool,
}

/// Immutably borrows properties from [`GameSession`] for rendering.
///
/// # See Also
///
/// * [GameSession::session_view]
#[derive(Debug)]
pub struct SessionView<'a> {
    /// The grid of [tiles](crate::Tile) indexed by `tiles[x][y]`.
    pub tiles: &'a Tiles,
    /// The grid of decorative background indexes indexed by `backgrounds[x][y]`.
    pub backgrounds: &'a Backgrounds,
    /// The pending [stone](Stone) waiting to be placed.
    pub next_stone: Option<Stone>,
    /// The cumulative points earned this game.
    pub score: usize,
    /// The number of four-way placements this game.
    pub four_ways: usize,
    /// The number of [stones](Stone) left in the draw stack.
    pub stack_len: usize,
    /// The cells that accept the pending stone, present only while hints are shown.
    pub hint_positions: Option<&'a ValidPositions>,
    /// Whether the session still accepts placements.
    pub phase: SessionPhase,
}

impl GameSession {
    /// Generates the [initial placement](initial_placement), builds the
    /// [draw stack](draw_stack) and the [board](Board::new), draws the first pending
    /// stone, and computes the [valid positions](valid_positions) for it. The score
    /// and the four-way count start at `0` and hints start hidden.
    ///
    /// # Arguments
    ///
    /// * `rng`: The source of randomness for the whole game setup. Consulted a bounded
    /// number of times: twice per initial stone, once per board cell for backgrounds,
    /// and once per remaining stone for the shuffle.
    ///
    /// # See Also
    ///
    /// * [GameSession::new_random]
    /// * [GameSession::new_game]
    ///
    /// # Returns
    ///
    /// A [`GameSession`] in the [`SessionPhase::Playing`] phase.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> GameSession {
        let placement = initial_placement(rng);
        let mut stack = draw_stack(rng, &placement);
        let mut board = Board::new(rng, placement);
        board.set_next_stone(stack.pop());
        let valid_positions = valid_positions(&board);

        GameSession {
            board,
            stack,
            score: 0,
            four_ways: 0,
            valid_positions,
            show_hint: false,
        }
    }

    /// [Creates](GameSession::new) a session from the thread-local source of
    /// randomness.
    pub fn new_random() -> GameSession {
        GameSession::new(&mut rand::thread_rng())
    }

    /// Replaces the whole session with a freshly [created](GameSession::new) one:
    /// fresh shuffle, zero score, zero four-ways, hints hidden. The only way out of
    /// [`SessionPhase::GameOver`].
    ///
    /// # Arguments
    ///
    /// * `rng`: The source of randomness for the new game setup.
    pub fn new_game<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        *self = GameSession::new(rng);
    }

    /// Attempts to place the pending stone at `position`. Invalid requests are not
    /// moves: when the session has ended or `position` does not
    /// [accept](accepted_matches) the pending stone, nothing changes and [None] is
    /// returned.
    ///
    /// A valid placement:
    ///
    /// 1. Earns `base points * 2^four_ways` where base points are `1`, `2`, `4`, or
    /// `8` for `1`, `2`, `3`, or `4` matching neighbors. A four-way placement also
    /// increments the four-way count and earns the next [milestone](FOUR_WAY_BONUSES)
    /// while the table lasts. Placements on the [border ring](is_border_position)
    /// earn nothing and do not advance the four-way count.
    /// 2. Occupies the cell, draws the next pending stone from the stack, hides
    /// hints, and recomputes the [valid positions](valid_positions).
    /// 3. Checks for the end of the game: with the pending stone absent, the stack
    /// empty, or no valid position left, the session transitions to
    /// [`SessionPhase::GameOver`] and earns the
    /// [stones-left bonus](STONES_LEFT_BONUSES) for the number of stones remaining
    /// in the stack.
    ///
    /// # Arguments
    ///
    /// * `position`: The cell to place the pending stone on.
    ///
    /// # See Also
    ///
    /// * [GameSession::valid_positions]
    /// * [GameSession::phase]
    ///
    /// # Returns
    ///
    /// * [None] for an ignored invalid request
    /// * [`Either::Left`] with the [`Placement`] when the game continues
    /// * [`Either::Right`] with the [`Finish`] when the placement ended the game
    pub fn place_stone(&mut self, position: Position) -> Option<Either<Placement, Finish>> {
        if self.has_ended() || !self.valid_positions.contains(&position) {
            return None;
        }
        let stone = self.board.next_stone()?;

        let matches = accepted_matches(&match_results(&self.board, position))
            .unwrap_or_else(|| {
                unreachable!(
                    "position ({:?}) should be accepted since it is drawn from \
                    the valid position set.",
                    position
                );
            });
        let matched_neighbors = matches.len();

        let mut points = 0;
        if !is_border_position(position) {
            // four_ways is bounded by the interior cell count
            points = base_points(matched_neighbors) << self.four_ways;
            if matched_neighbors == 4 {
                self.four_ways += 1;
                if let Some(&milestone) = FOUR_WAY_BONUSES.get(self.four_ways - 1) {
                    points += milestone;
                }
            }
        }
        self.score += points;

        self.board.place(position, stone);
        let next_stone = self.stack.pop();
        self.board.set_next_stone(next_stone);
        self.show_hint = false;
        self.valid_positions = valid_positions(&self.board);

        let placement = Placement {
            position,
            stone,
            matched_neighbors,
            points,
        };
        if self.has_ended() {
            let stones_left_bonus = STONES_LEFT_BONUSES
                .get(self.stack.len())
                .copied()
                .unwrap_or(0);
            self.score += stones_left_bonus;
            Some(Either::Right(Finish {
                placement,
                stones_left_bonus,
            }))
        } else {
            Some(Either::Left(placement))
        }
    }

    /// # Returns
    ///
    /// Whether the pending stone is absent, the draw stack is empty, or no cell
    /// accepts the pending stone.
    fn has_ended(&self) -> bool {
        self.board.next_stone().is_none()
            || self.stack.is_empty()
            || self.valid_positions.is_empty()
    }

    /// Whether the session still accepts placements.
    #[inline]
    pub fn phase(&self) -> SessionPhase {
        if self.has_ended() {
            SessionPhase::GameOver
        } else {
            SessionPhase::Playing
        }
    }

    /// The board with its grid of [tiles](crate::Tile) and the pending stone.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The cumulative points earned this game.
    #[inline]
    pub fn score(&self) -> usize {
        self.score
    }

    /// The number of four-way placements this game.
    #[inline]
    pub fn four_ways(&self) -> usize {
        self.four_ways
    }

    /// The number of [stones](Stone) left in the draw stack.
    #[inline]
    pub fn stack_len(&self) -> usize {
        self.stack.len()
    }

    /// The set of cells that accept the pending stone.
    #[inline]
    pub fn valid_positions(&self) -> &ValidPositions {
        &self.valid_positions
    }

    /// Whether views should reveal the valid positions.
    #[inline]
    pub fn show_hint(&self) -> bool {
        self.show_hint
    }

    /// Shows or hides the valid positions in views. Scheduling the reveal delay is
    /// the display collaborator's job; every successful placement hides hints again.
    #[inline]
    pub fn set_show_hint(&mut self, show_hint: bool) {
        self.show_hint = show_hint;
    }

    /// # Returns
    ///
    /// A new [`SessionView`] struct, which immutably borrows properties from
    /// [`GameSession`], with `stack` replaced by `stack.len()` and the valid
    /// positions present only while [hints are shown](GameSession::show_hint).
    pub fn session_view(&self) -> SessionView<'_> {
        SessionView {
            tiles: self.board.tiles(),
            backgrounds: self.board.backgrounds(),
            next_stone: self.board.next_stone(),
            score: self.score,
            four_ways: self.four_ways,
            stack_len: self.stack.len(),
            hint_positions: self.show_hint.then(|| &self.valid_positions),
            phase: self.phase(),
        }
    }
}

#[cfg(test)]
impl GameSession {
    /// Generates a session with an empty board, an empty draw stack, no pending
    /// stone, and zeroed counters.
    pub fn empty_session() -> GameSession {
        GameSession {
            board: Board::empty_board(),
            stack: DrawStack::new(),
            score: 0,
            four_ways: 0,
            valid_positions: ValidPositions::new(),
            show_hint: false,
        }
    }

    /// A mutable reference to `self.board`.
    pub fn mut_board(&mut self) -> &mut Board {
        &mut self.board
    }

    /// A mutable reference to `self.stack`.
    pub fn mut_stack(&mut self) -> &mut DrawStack {
        &mut self.stack
    }

    /// A mutable reference to `self.four_ways`.
    pub fn mut_four_ways(&mut self) -> &mut usize {
        &mut self.four_ways
    }

    /// Recomputes `self.valid_positions` after arranging the board by hand.
    pub fn recompute_valid_positions(&mut self) {
        self.valid_positions = valid_positions(&self.board);
    }
}
