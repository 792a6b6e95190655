use crate::error::{MagicSquareError, Result};
use crate::square::{MAX_ORDER, MagicSquare};
use crate::{siamese, strachey};

/// The construction strategy selected by the residue class of the order.
///
/// Filling is internal to [`construct`](crate::construct); a finished square
/// cannot be refilled:
///
/// ```compile_fail
/// let mut sq = magic_square::construct(3).unwrap();
/// magic_square::Order::Odd.fill(&mut sq).unwrap();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
    /// `n` is odd; filled with the Siamese method.
    Odd,
    /// `n ≡ 2 (mod 4)`; composed from four odd squares of order `n / 2`.
    SinglyEven,
    /// `n ≡ 0 (mod 4)`; no construction is provided.
    DoublyEven,
}

impl Order {
    /// Classifies a requested order.
    ///
    /// Fails with [`MagicSquareError::InvalidSize`] when `n` is zero or too
    /// large for the values `1..=n²` to fit in a cell.
    pub fn classify(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(MagicSquareError::invalid_size(n, "order must be at least 1"));
        }
        if n > MAX_ORDER {
            return Err(MagicSquareError::invalid_size(
                n,
                "order is too large for the cell value range",
            ));
        }
        Ok(match n % 4 {
            0 => Self::DoublyEven,
            2 => Self::SinglyEven,
            _ => Self::Odd,
        })
    }

    /// Fills an empty grid using this strategy.
    pub(crate) fn fill(self, square: &mut MagicSquare) -> Result<()> {
        match self {
            Self::Odd => siamese::fill(square),
            Self::SinglyEven => strachey::fill(square),
            Self::DoublyEven => fill_doubly_even(square),
        }
    }
}

/// Doubly-even squares have no construction; this only distinguishes a
/// misrouted order from the unsupported case.
fn fill_doubly_even(square: &mut MagicSquare) -> Result<()> {
    let n = square.size();
    if n % 4 != 0 {
        return Err(MagicSquareError::invalid_size(n, "order is not doubly even"));
    }
    Err(MagicSquareError::UnsupportedConstruction { size: n })
}
