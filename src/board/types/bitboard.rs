//! Bitboard type and operations.

use super::square::Square;

/// A 64-bit set of squares, used as an occupancy mask.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bitboard(pub u64);

impl Bitboard {
    pub const EMPTY: Bitboard = Bitboard(0);

    /// Create a bitboard with a single square set
    #[inline]
    #[must_use]
    pub const fn from_square(sq: Square) -> Self {
        Bitboard(1 << (sq.0 * 8 + sq.1))
    }

    /// Returns an iterator over the squares set in this bitboard
    #[inline]
    #[must_use]
    pub fn iter(self) -> BitboardIter {
        BitboardIter(self)
    }

    /// Returns true if the bitboard is empty
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the number of set bits (population count)
    #[inline]
    #[must_use]
    pub const fn popcount(self) -> u32 {
        self.0.count_ones()
    }

    /// Returns true if the given square is set
    #[inline]
    #[must_use]
    pub const fn contains(self, sq: Square) -> bool {
        (self.0 & (1 << (sq.0 * 8 + sq.1))) != 0
    }

    #[inline]
    pub fn insert(&mut self, sq: Square) {
        self.0 |= Self::from_square(sq).0;
    }

    /// Bitwise AND
    #[inline]
    #[must_use]
    pub const fn and(self, other: Self) -> Self {
        Bitboard(self.0 & other.0)
    }
}

impl FromIterator<Square> for Bitboard {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        let mut bb = Bitboard::EMPTY;
        for sq in iter {
            bb.insert(sq);
        }
        bb
    }
}

pub(crate) fn pop_lsb(bb: &mut Bitboard) -> Square {
    let idx = bb.0.trailing_zeros() as usize;
    bb.0 &= bb.0 - 1;
    Square::from_index(idx)
}

/// Iterator over set squares in a Bitboard, a1 first
pub struct BitboardIter(Bitboard);

impl Iterator for BitboardIter {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0.is_empty() {
            None
        } else {
            Some(pop_lsb(&mut self.0))
        }
    }
}
