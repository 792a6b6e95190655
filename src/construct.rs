use tracing::debug;

use crate::error::Result;
use crate::order::Order;
use crate::square::MagicSquare;

/// Constructs a magic square of order `n`.
///
/// Odd orders use the Siamese method and orders `2 mod 4` (from 6 up) use
/// Strachey's quadrant construction. The output is fully determined by `n`.
///
/// # Errors
/// - [`InvalidSize`](crate::MagicSquareError::InvalidSize) if `n` is 0, 2,
///   or larger than [`MAX_ORDER`](crate::MAX_ORDER).
/// - [`UnsupportedConstruction`](crate::MagicSquareError::UnsupportedConstruction)
///   if `n` is a multiple of 4.
/// - [`AllocationFailed`](crate::MagicSquareError::AllocationFailed) if the
///   `4·n²` bytes of cell storage cannot be reserved. Near [`MAX_ORDER`](crate::MAX_ORDER)
///   that is about 17 GB, more than a 32-bit target can address.
///
/// # Example
///
/// ```
/// let sq = magic_square::construct(3).unwrap();
/// assert_eq!(sq.cells(), &[8, 1, 6, 3, 5, 7, 4, 9, 2]);
/// assert!(sq.is_magic());
/// ```
pub fn construct(n: usize) -> Result<MagicSquare> {
    let order = Order::classify(n)?;
    debug!(n, ?order, "constructing magic square");

    let mut square = MagicSquare::zeroed(n)?;
    order.fill(&mut square)?;
    Ok(square)
}
