//! Siamese method (de la Loubère) for odd-order magic squares.
//!
//! Starting from the top-middle cell, consecutive values are placed one row up
//! and one column to the right, wrapping around the edges. After every
//! multiple of `n` the target cell is already taken, so the walk drops one row
//! instead. For odd `n` this visits each of the `n²` cells exactly once.

use crate::error::{MagicSquareError, Result};
use crate::square::MagicSquare;

/// Iterator over the cells visited by the Siamese walk, in value order.
///
/// The `k`-th position yielded (starting at 0) receives the value `k + 1`.
pub(crate) struct SiameseWalk {
    n: usize,
    row: usize,
    column: usize,
    value: usize,
    last: usize,
}

impl SiameseWalk {
    pub(crate) fn new(n: usize) -> Self {
        Self {
            n,
            row: 0,
            column: n / 2,
            value: 1,
            last: n * n,
        }
    }
}

impl Iterator for SiameseWalk {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.value > self.last {
            return None;
        }
        let n = self.n;
        let position = (self.row, self.column);

        if self.value % n == 0 {
            self.row = (self.row + 1) % n;
        } else {
            self.row = if self.row == 0 { n - 1 } else { self.row - 1 };
            self.column = (self.column + 1) % n;
        }
        self.value += 1;

        Some(position)
    }
}

/// Fills an empty odd-order grid with a magic square.
///
/// Fails with [`MagicSquareError::InvalidSize`] before writing anything if
/// the order is even.
pub(crate) fn fill(square: &mut MagicSquare) -> Result<()> {
    let n = square.size();
    if n % 2 == 0 {
        return Err(MagicSquareError::invalid_size(n, "order is not odd"));
    }

    for (value, (row, column)) in (1u32..).zip(SiameseWalk::new(n)) {
        square.set_unchecked(row, column, value);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn filled(n: usize) -> MagicSquare {
        let mut sq = MagicSquare::zeroed(n).unwrap();
        fill(&mut sq).unwrap();
        sq
    }

    #[test]
    fn order_one_is_single_one() {
        let sq = filled(1);
        assert_eq!(sq.cells(), &[1]);
        assert_eq!(sq.magic_constant(), 1);
    }

    #[test]
    fn order_three_from_top_middle() {
        assert_eq!(filled(3).cells(), &[8, 1, 6, 3, 5, 7, 4, 9, 2]);
    }

    #[test]
    fn order_five_layout() {
        #[rustfmt::skip]
        let expected: [u32; 25] = [
            17, 24,  1,  8, 15,
            23,  5,  7, 14, 16,
             4,  6, 13, 20, 22,
            10, 12, 19, 21,  3,
            11, 18, 25,  2,  9,
        ];
        assert_eq!(filled(5).cells(), &expected);
    }

    #[test]
    fn walk_visits_every_cell_once() {
        for n in (1..=21).step_by(2) {
            let visited: Vec<_> = SiameseWalk::new(n).collect();
            assert_eq!(visited.len(), n * n, "n={}", n);
            let distinct: HashSet<_> = visited.iter().copied().collect();
            assert_eq!(distinct.len(), n * n, "walk revisited a cell for n={}", n);
            assert!(visited.iter().all(|&(r, c)| r < n && c < n));
        }
    }

    #[test]
    fn odd_orders_are_magic() {
        for n in [1, 3, 5, 7, 9, 13] {
            let sq = filled(n);
            assert!(sq.is_magic(), "Siamese square of order {} should be magic", n);
        }
    }

    #[test]
    fn even_order_is_rejected_untouched() {
        let mut sq = MagicSquare::zeroed(4).unwrap();
        assert!(matches!(
            fill(&mut sq),
            Err(MagicSquareError::InvalidSize { size: 4, .. })
        ));
        assert!(sq.cells().iter().all(|&v| v == 0));
    }
}
