use num_derive::FromPrimitive;
use rand::distributions::{Distribution, Standard};
use rand::Rng;

/// The number of [`Stone`] variants. 36 stones from 6 colors and 6 symbols.
pub const STONES_LEN: usize = Color::COLORS_LEN * Symbol::SYMBOLS_LEN;

/// Describes a stone with [`Color`] and [`Symbol`] in a game.
pub type Stone = (Color, Symbol);

/// # Returns
///
/// An array of all [`Stone`] variants in color then symbol order.
#[inline]
pub fn stones() -> [Stone; STONES_LEN] {
    [
        (Color::Red, Symbol::Moon),
        (Color::Red, Symbol::Star),
        (Color::Red, Symbol::Sun),
        (Color::Red, Symbol::Wave),
        (Color::Red, Symbol::Leaf),
        (Color::Red, Symbol::Knot),
        (Color::Orange, Symbol::Moon),
        (Color::Orange, Symbol::Star),
        (Color::Orange, Symbol::Sun),
        (Color::Orange, Symbol::Wave),
        (Color::Orange, Symbol::Leaf),
        (Color::Orange, Symbol::Knot),
        (Color::Yellow, Symbol::Moon),
        (Color::Yellow, Symbol::Star),
        (Color::Yellow, Symbol::Sun),
        (Color::Yellow, Symbol::Wave),
        (Color::Yellow, Symbol::Leaf),
        (Color::Yellow, Symbol::Knot),
        (Color::Green, Symbol::Moon),
        (Color::Green, Symbol::Star),
        (Color::Green, Symbol::Sun),
        (Color::Green, Symbol::Wave),
        (Color::Green, Symbol::Leaf),
        (Color::Green, Symbol::Knot),
        (Color::Blue, Symbol::Moon),
        (Color::Blue, Symbol::Star),
        (Color::Blue, Symbol::Sun),
        (Color::Blue, Symbol::Wave),
        (Color::Blue, Symbol::Leaf),
        (Color::Blue, Symbol::Knot),
        (Color::Purple, Symbol::Moon),
        (Color::Purple, Symbol::Star),
        (Color::Purple, Symbol::Sun),
        (Color::Purple, Symbol::Wave),
        (Color::Purple, Symbol::Leaf),
        (Color::Purple, Symbol::Knot),
    ]
}

/// Describes the color on a [`Stone`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, FromPrimitive)]
pub enum Color {
    /// `0`.
    Red = 0,
    /// `1`.
    Orange = 1,
    /// `2`.
    Yellow = 2,
    /// `3`.
    Green = 3,
    /// `4`.
    Blue = 4,
    /// `5`.
    Purple = 5,
}

impl Color {
    /// The number of [`Color`] variants. 6 colors.
    pub const COLORS_LEN: usize = 6;

    /// # Returns
    ///
    /// An array of all [`Color`] variants in order.
    #[inline]
    pub fn colors() -> [Color; Color::COLORS_LEN] {
        [
            Color::Red,
            Color::Orange,
            Color::Yellow,
            Color::Green,
            Color::Blue,
            Color::Purple,
        ]
    }
}

impl Distribution<Color> for Standard {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Color {
        let index = rng.gen_range(0..Color::COLORS_LEN);
        num::FromPrimitive::from_usize(index).unwrap_or_else(|| {
            dbg!(index, Color::COLORS_LEN);
            unreachable!(
                "index ({:?}) should be matched since colors cover all indexes \
                in range 0..Color::COLORS_LEN (0..{:?}).",
                index,
                Color::COLORS_LEN
            );
        })
    }
}

/// Describes the symbol on a [`Stone`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, FromPrimitive)]
pub enum Symbol {
    /// `0`.
    Moon = 0,
    /// `1`.
    Star = 1,
    /// `2`.
    Sun = 2,
    /// `3`.
    Wave = 3,
    /// `4`.
    Leaf = 4,
    /// `5`.
    Knot = 5,
}

impl Symbol {
    /// The number of [`Symbol`] variants. 6 symbols.
    pub const SYMBOLS_LEN: usize = 6;

    /// # Returns
    ///
    /// An array of all [`Symbol`] variants in order.
    #[inline]
    pub fn symbols() -> [Symbol; Symbol::SYMBOLS_LEN] {
        [
            Symbol::Moon,
            Symbol::Star,
            Symbol::Sun,
            Symbol::Wave,
            Symbol::Leaf,
            Symbol::Knot,
        ]
    }
}

impl Distribution<Symbol> for Standard {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Symbol {
        let index = rng.gen_range(0..Symbol::SYMBOLS_LEN);
        num::FromPrimitive::from_usize(index).unwrap_or_else(|| {
            dbg!(index, Symbol::SYMBOLS_LEN);
            unreachable!(
                "index ({:?}) should be matched since symbols cover all indexes \
                in range 0..Symbol::SYMBOLS_LEN (0..{:?}).",
                index,
                Symbol::SYMBOLS_LEN
            );
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn stones_len() {
        assert_eq!(STONES_LEN, Color::COLORS_LEN * Symbol::SYMBOLS_LEN);
        assert_eq!(STONES_LEN, stones().len());
    }

    #[test]
    fn stones_no_duplicates() {
        assert_eq!(0, stones().into_iter().duplicates().count());
    }

    #[test]
    fn colors() {
        assert_eq!(Color::COLORS_LEN, Color::colors().len());
    }

    #[test]
    fn colors_no_duplicates() {
        assert_eq!(0, Color::colors().into_iter().duplicates().count());
    }

    #[test]
    fn color_as_usize() {
        for (index, color) in Color::colors().into_iter().enumerate() {
            assert_eq!(index, color as usize);
        }
    }

    #[test]
    fn symbols() {
        assert_eq!(Symbol::SYMBOLS_LEN, Symbol::symbols().len());
    }

    #[test]
    fn symbols_no_duplicates() {
        assert_eq!(0, Symbol::symbols().into_iter().duplicates().count());
    }

    #[test]
    fn symbol_as_usize() {
        for (index, symbol) in Symbol::symbols().into_iter().enumerate() {
            assert_eq!(index, symbol as usize);
        }
    }

    #[test]
    fn stones_color_major_order() {
        for (index, (color, symbol)) in stones().into_iter().enumerate() {
            assert_eq!(index / Symbol::SYMBOLS_LEN, color as usize);
            assert_eq!(index % Symbol::SYMBOLS_LEN, symbol as usize);
        }
    }
}
