use std::io::Write;

use crate::error::Result;
use crate::square::MagicSquare;

/// Output options for [`render`].
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Print a "Dumping NxN Magic Square:" banner before the grid.
    pub header: bool,
    /// Print each row's sum after the row, and a line of column sums below.
    pub sums: bool,
    /// Number of spaces between the last value of a row and its sum.
    pub sum_separator: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            header: true,
            sums: true,
            sum_separator: 3,
        }
    }
}

/// Column width for a square: wide enough for the magic constant plus one
/// space of padding. Every value and every sum fits in it.
fn cell_width(square: &MagicSquare) -> usize {
    let mut width = 1;
    let mut m = square.magic_constant();
    while m > 0 {
        width += 1;
        m /= 10;
    }
    width
}

/// Writes the square as right-aligned text, one row per line.
pub fn render<W: Write>(square: &MagicSquare, out: &mut W, options: &RenderOptions) -> Result<()> {
    let n = square.size();
    let width = cell_width(square);

    if options.header {
        write!(out, "\nDumping {n}x{n} Magic Square:\n\n")?;
    }

    for row in square.rows() {
        for value in row {
            write!(out, "{value:>width$}")?;
        }
        if options.sums {
            let sum: u64 = row.iter().map(|&v| u64::from(v)).sum();
            write!(out, "{:pad$}{sum}", "", pad = options.sum_separator)?;
        }
        writeln!(out)?;
    }

    if options.sums {
        writeln!(out)?;
        for sum in square.column_sums() {
            write!(out, "{sum:>width$}")?;
        }
        write!(out, "\n\n")?;
    }

    Ok(())
}

/// Renders into a `String`.
pub fn render_to_string(square: &MagicSquare, options: &RenderOptions) -> Result<String> {
    let mut buf = Vec::new();
    render(square, &mut buf, options)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::construct;
    use crate::error::MagicSquareError;
    use std::io;

    #[test]
    fn order_three_matches_dump_layout() {
        let sq = construct(3).unwrap();
        let text = render_to_string(&sq, &RenderOptions::default()).unwrap();
        assert_eq!(
            text,
            "\nDumping 3x3 Magic Square:\n\n  8  1  6   15\n  3  5  7   15\n  4  9  2   15\n\n 15 15 15\n\n"
        );
    }

    #[test]
    fn bare_grid_without_header_or_sums() {
        let sq = construct(1).unwrap();
        let options = RenderOptions {
            header: false,
            sums: false,
            ..Default::default()
        };
        assert_eq!(render_to_string(&sq, &options).unwrap(), " 1\n");
    }

    #[test]
    fn width_fits_largest_value() {
        let sq = construct(10).unwrap();
        // M(10) = 505
        assert_eq!(cell_width(&sq), 4);
        let text = render_to_string(&sq, &RenderOptions::default()).unwrap();
        let first_row = text.lines().nth(3).unwrap();
        assert!(first_row.ends_with("   505"), "got {:?}", first_row);
        assert!(text.contains(" 100"));
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failure_is_reported() {
        let sq = construct(3).unwrap();
        let err = render(&sq, &mut FailingWriter, &RenderOptions::default()).unwrap_err();
        assert!(matches!(err, MagicSquareError::Io(_)));
    }
}
