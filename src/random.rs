use crate::{Color, Stone, Symbol};
use rand::distributions::{Distribution, Uniform};
use rand::Rng;

/// A new [stone](Stone) with the same [color](Color) but a random, different
/// [symbol](Symbol).
pub fn random_same_color_different_symbol<R: Rng + ?Sized>(
    rng: &mut R,
    (color, symbol): Stone,
) -> Stone {
    let possible_indexes = Uniform::from(0..Symbol::SYMBOLS_LEN - 1);
    let random_index = possible_indexes.sample(rng);
    // removing the symbol at its own index in the array symbols
    let random_different_index = random_index + usize::from(random_index >= symbol as usize);
    (color, Symbol::symbols()[random_different_index])
}

/// A new [stone](Stone) with a random, different [color](Color) but the same
/// [symbol](Symbol).
pub fn random_different_color_same_symbol<R: Rng + ?Sized>(
    rng: &mut R,
    (color, symbol): Stone,
) -> Stone {
    let possible_indexes = Uniform::from(0..Color::COLORS_LEN - 1);
    let random_index = possible_indexes.sample(rng);
    // removing the color at its own index in the array colors
    let random_different_index = random_index + usize::from(random_index >= color as usize);
    (Color::colors()[random_different_index], symbol)
}

/// A new [stone](Stone) with a random, different [color](Color) and a random,
/// different [symbol](Symbol).
pub fn random_conflicting_stone<R: Rng + ?Sized>(rng: &mut R, stone: Stone) -> Stone {
    let (different_color, _) = random_different_color_same_symbol(rng, stone);
    let (_, different_symbol) = random_same_color_different_symbol(rng, stone);
    (different_color, different_symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_same_color_different_symbol_single_sample() {
        let mut rng = rand::thread_rng();
        let stone = rng.gen();

        let (same_color, different_symbol) = random_same_color_different_symbol(&mut rng, stone);

        let (color, symbol) = stone;
        assert_eq!(color, same_color);
        assert_ne!(symbol, different_symbol);
    }

    #[test]
    fn random_different_color_same_symbol_single_sample() {
        let mut rng = rand::thread_rng();
        let stone = rng.gen();

        let (different_color, same_symbol) = random_different_color_same_symbol(&mut rng, stone);

        let (color, symbol) = stone;
        assert_ne!(color, different_color);
        assert_eq!(symbol, same_symbol);
    }

    #[test]
    fn random_conflicting_stone_single_sample() {
        let mut rng = rand::thread_rng();
        let stone = rng.gen();

        let (different_color, different_symbol) = random_conflicting_stone(&mut rng, stone);

        let (color, symbol) = stone;
        assert_ne!(color, different_color);
        assert_ne!(symbol, different_symbol);
    }
}
