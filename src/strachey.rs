//! Strachey's construction for singly-even magic squares (`n ≡ 2 mod 4`).
//!
//! An odd magic square of order `h = n / 2` is copied into the four quadrants
//! with value offsets `0`, `h²`, `2h²` and `3h²`. Swapping selected cells
//! between vertically adjacent quadrants then brings every row, column and
//! both diagonals to the magic constant.

use tracing::trace;

use crate::error::{MagicSquareError, Result};
use crate::siamese;
use crate::square::MagicSquare;

/// Placement of one copy of the half-order square inside the full grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Quadrant {
    pub row_offset: usize,
    pub column_offset: usize,
    pub value_offset: u32,
}

impl Quadrant {
    /// The four placements for half order `h`, in fill order:
    /// top-left, bottom-right, top-right, bottom-left.
    pub(crate) fn layout(h: usize) -> [Quadrant; 4] {
        let block = (h * h) as u32;
        let q = |row_offset, column_offset, k: u32| Quadrant {
            row_offset,
            column_offset,
            value_offset: k * block,
        };
        [q(0, 0, 0), q(h, h, 1), q(0, h, 2), q(h, 0, 3)]
    }

    fn copy(&self, src: &MagicSquare, dst: &mut MagicSquare) {
        for (r, row) in src.rows().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                dst.set_unchecked(
                    r + self.row_offset,
                    c + self.column_offset,
                    v + self.value_offset,
                );
            }
        }
    }
}

/// Fills an empty singly-even grid with a magic square.
///
/// Fails with [`MagicSquareError::InvalidSize`] before writing anything if
/// the order is not `2 mod 4`, or is 2 (no 2x2 magic square exists).
pub(crate) fn fill(square: &mut MagicSquare) -> Result<()> {
    let n = square.size();
    if n % 4 != 2 {
        return Err(MagicSquareError::invalid_size(n, "order is not singly even"));
    }
    if n < 6 {
        return Err(MagicSquareError::invalid_size(
            n,
            "singly even squares cannot be smaller than 6",
        ));
    }

    let h = n / 2;
    let mut half = MagicSquare::zeroed(h)?;
    siamese::fill(&mut half)?;

    for quadrant in Quadrant::layout(h) {
        trace!(?quadrant, "copying half-order square");
        quadrant.copy(&half, square);
    }

    // Leftmost k columns trade places between the top-left and bottom-left
    // quadrants, except the first cell of the middle row.
    let mut k = (n - 2) / 4;
    let middle = h / 2;
    for row in 0..h {
        for column in 0..k {
            if column > 0 || row != middle {
                square.swap((row, column), (row + h, column));
            }
        }
    }

    // The middle row swaps its centre cell instead.
    square.swap((middle, middle), (middle + h, middle));

    // Rightmost k - 1 columns trade between top-right and bottom-right.
    k -= 1;
    if k > 0 {
        for row in 0..h {
            for column in n - k..n {
                square.swap((row, column), (row + h, column));
            }
        }
    }

    Ok(())
}
