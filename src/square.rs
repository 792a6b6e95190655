use crate::error::{MagicSquareError, Result};

/// Largest order whose values `1..=n²` still fit in a `u32` cell.
pub const MAX_ORDER: usize = u16::MAX as usize;

/// Returns the magic constant `n(n² + 1) / 2` shared by every row, column
/// and main diagonal of a magic square of order `n`.
///
/// Returns `None` if the constant does not fit in a `u64`.
pub fn magic_constant(n: usize) -> Option<u64> {
    let n = n as u128;
    let cube = n.checked_mul(n)?.checked_add(1)?.checked_mul(n)?;
    u64::try_from(cube / 2).ok()
}

/// Magic constant for an order already known to be at most [`MAX_ORDER`].
fn bounded_magic_constant(n: usize) -> u64 {
    debug_assert!(n <= MAX_ORDER);
    let n = n as u64;
    n * (n * n + 1) / 2
}

/// Allocates `len` zeroed cells, reporting allocation failure as an error.
fn zeroed_cells(size: usize, len: usize) -> Result<Vec<u32>> {
    let mut cells = Vec::new();
    cells
        .try_reserve_exact(len)
        .map_err(|_| MagicSquareError::AllocationFailed { size })?;
    cells.resize(len, 0);
    Ok(cells)
}

/// A square grid of order `n` produced by [`construct`](crate::construct).
///
/// Cells are stored row-major in one contiguous buffer; the cell at
/// `(row, column)` lives at index `row * n + column`. The public API is
/// read-only: once construction returns, the square can only be inspected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MagicSquare {
    n: usize,
    cells: Vec<u32>,
}

impl MagicSquare {
    /// Allocates an `n x n` grid with every cell set to 0.
    pub(crate) fn zeroed(n: usize) -> Result<Self> {
        debug_assert!((1..=MAX_ORDER).contains(&n), "order out of range");
        Ok(Self {
            n,
            cells: zeroed_cells(n, n * n)?,
        })
    }

    /// Returns the order (side length) of the square.
    pub fn size(&self) -> usize {
        self.n
    }

    /// Returns the value at position `(row, column)`.
    ///
    /// # Panics
    /// Panics if `row >= n` or `column >= n`.
    pub fn get(&self, row: usize, column: usize) -> u32 {
        assert!(row < self.n && column < self.n, "index out of bounds");
        self.cells[row * self.n + column]
    }

    pub(crate) fn set_unchecked(&mut self, row: usize, column: usize, value: u32) {
        self.cells[row * self.n + column] = value;
    }

    /// Exchanges the values of two cells.
    pub(crate) fn swap(&mut self, a: (usize, usize), b: (usize, usize)) {
        self.cells.swap(a.0 * self.n + a.1, b.0 * self.n + b.1);
    }

    /// Returns the cells as a flat slice in row-major order.
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    /// Iterates over the rows, top to bottom.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[u32]> {
        self.cells.chunks_exact(self.n)
    }

    /// Returns the magic constant for this square's order.
    pub fn magic_constant(&self) -> u64 {
        bounded_magic_constant(self.n)
    }

    pub fn row_sums(&self) -> Vec<u64> {
        self.rows()
            .map(|row| row.iter().map(|&v| u64::from(v)).sum())
            .collect()
    }

    pub fn column_sums(&self) -> Vec<u64> {
        let mut sums = vec![0u64; self.n];
        for row in self.rows() {
            for (sum, &v) in sums.iter_mut().zip(row) {
                *sum += u64::from(v);
            }
        }
        sums
    }

    /// Returns the sums of the main diagonal and the anti-diagonal.
    pub fn diagonal_sums(&self) -> (u64, u64) {
        let n = self.n;
        (0..n).fold((0, 0), |(main, anti), i| {
            (
                main + u64::from(self.get(i, i)),
                anti + u64::from(self.get(i, n - 1 - i)),
            )
        })
    }

    /// Returns true if every row, column and main diagonal sums to the
    /// magic constant and the cells hold each of `1..=n²` exactly once.
    pub fn is_magic(&self) -> bool {
        let m = self.magic_constant();
        let (main, anti) = self.diagonal_sums();
        main == m
            && anti == m
            && self.row_sums().iter().all(|&s| s == m)
            && self.column_sums().iter().all(|&s| s == m)
            && self.is_permutation()
    }

    /// Returns true if the cells are a permutation of `1..=n²`.
    pub fn is_permutation(&self) -> bool {
        let mut seen = vec![false; self.cells.len()];
        for &v in &self.cells {
            let v = v as usize;
            if v == 0 || v > seen.len() || seen[v - 1] {
                return false;
            }
            seen[v - 1] = true;
        }
        true
    }
}
