use crate::{stones, Color, Stone, Symbol, INITIAL_STONES_LEN, STONE_COPIES, SUPPLY_LEN};
use itertools::Itertools;
use rand::seq::SliceRandom;
use rand::Rng;
use smallvec::SmallVec;
use tap::Tap;

/// This is a stack of all the [stones](Stone) that haven't been drawn yet. Drawing pops
/// from the end.
///
/// # See Also
///
/// * [draw_stack]
/// * [GameSession](crate::GameSession)
pub type DrawStack = Vec<Stone>;
/// The [stones](Stone) placed on the board before the first draw, stack allocated.
///
/// # See Also
///
/// * [initial_placement]
/// * [Board::new](crate::Board::new)
pub type InitialPlacement = SmallVec<[Stone; INITIAL_STONES_LEN]>;

/// Greedily pairs a uniformly random remaining [color](Color) with an independently
/// chosen, uniformly random remaining [symbol](Symbol) until both pools are exhausted.
/// The produced colors are a permutation of [every color](Color::colors) and the
/// produced symbols are a permutation of [every symbol](Symbol::symbols), although the
/// two permutations are not aligned. Every produced stone therefore differs from every
/// other in both components, so the opening board holds no matching pair.
///
/// # Arguments
///
/// * `rng`: The source of randomness. Consulted twice per produced stone.
///
/// # See Also
///
/// * [Board::new](crate::Board::new)
/// * [draw_stack]
///
/// # Returns
///
/// [INITIAL_STONES_LEN] [stones](Stone) with pairwise distinct colors and pairwise
/// distinct symbols.
pub fn initial_placement<R: Rng + ?Sized>(rng: &mut R) -> InitialPlacement {
    let mut colors = Color::colors().to_vec();
    let mut symbols = Symbol::symbols().to_vec();
    let mut placement = InitialPlacement::new();

    while !colors.is_empty() {
        let color = colors.swap_remove(rng.gen_range(0..colors.len()));
        let symbol = symbols.swap_remove(rng.gen_range(0..symbols.len()));
        placement.push((color, symbol));
    }

    placement
}

/// Enumerates the full universe of [SUPPLY_LEN] [stones](Stone)
/// ([STONE_COPIES] copies of [each variant](stones)), removes one occurrence of each
/// stone consumed by the `initial_placement` by value, and shuffles the rest into a
/// draw stack. Drawing pops from the end of the stack.
///
/// # Arguments
///
/// * `rng`: The source of randomness for the shuffle.
/// * `initial_placement`: The [stones](Stone) already placed on the board.
///
/// # See Also
///
/// * [initial_placement]
/// * [GameSession::new](crate::GameSession::new)
///
/// # Returns
///
/// A uniformly shuffled [DrawStack] of [SUPPLY_LEN]` - `[INITIAL_STONES_LEN] stones.
pub fn draw_stack<R: Rng + ?Sized>(
    rng: &mut R,
    initial_placement: &InitialPlacement,
) -> DrawStack {
    let mut unplaced: InitialPlacement = initial_placement.clone();
    let mut stack = DrawStack::with_capacity(SUPPLY_LEN);

    for _ in 0..STONE_COPIES {
        for stone in stones() {
            // each placed stone swallows exactly one copy
            if let Some((index, _)) = unplaced.iter().find_position(|&&placed| placed == stone) {
                unplaced.swap_remove(index);
            } else {
                stack.push(stone);
            }
        }
    }
    stack.tap_mut(|stack| stack.shuffle(rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn initial_placement_len() {
        let placement = initial_placement(&mut rand::thread_rng());

        assert_eq!(INITIAL_STONES_LEN, placement.len());
    }

    #[test]
    fn initial_placement_distinct_colors_and_symbols() {
        let placement = initial_placement(&mut rand::thread_rng());

        let colors: Vec<Color> = placement.iter().map(|&(color, _)| color).sorted().collect();
        let symbols: Vec<Symbol> = placement
            .iter()
            .map(|&(_, symbol)| symbol)
            .sorted()
            .collect();

        assert_eq!(Color::colors().to_vec(), colors);
        assert_eq!(Symbol::symbols().to_vec(), symbols);
    }

    #[test]
    fn draw_stack_len() {
        let mut rng = rand::thread_rng();
        let placement = initial_placement(&mut rng);

        let stack = draw_stack(&mut rng, &placement);

        assert_eq!(SUPPLY_LEN - INITIAL_STONES_LEN, stack.len());
    }

    #[test]
    fn draw_stack_and_placement_cover_universe() {
        let mut rng = rand::thread_rng();
        let placement = initial_placement(&mut rng);

        let stack = draw_stack(&mut rng, &placement);

        let universe: Vec<Stone> = (0..STONE_COPIES)
            .flat_map(|_| stones())
            .sorted()
            .collect();
        let recombined: Vec<Stone> = stack
            .into_iter()
            .chain(placement)
            .sorted()
            .collect();

        assert_eq!(universe, recombined);
    }

    #[test]
    fn draw_stack_removes_each_placed_stone_once() {
        let mut rng = rand::thread_rng();
        let placement = initial_placement(&mut rng);

        let stack = draw_stack(&mut rng, &placement);

        for &placed in &placement {
            assert_eq!(
                STONE_COPIES - 1,
                stack.iter().filter(|&&stone| stone == placed).count()
            );
        }
    }

    #[test]
    fn draw_stack_deterministic_for_seeded_rng() {
        let placement = initial_placement(&mut StdRng::seed_from_u64(7));

        let first = draw_stack(&mut StdRng::seed_from_u64(11), &placement);
        let second = draw_stack(&mut StdRng::seed_from_u64(11), &placement);

        assert_eq!(first, second);
    }
}
