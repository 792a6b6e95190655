//! Construct and print magic squares for each size given on the command line.
//!
//! Usage: cargo run --example magic -- <n>...
//!
//! Example:
//!   cargo run --example magic -- 3 6 4
//!
//! Arguments that are not sizes, and sizes that cannot be constructed, are
//! reported and skipped; the exit status is 1 if any were.

use std::io::{self, Write};
use std::num::ParseIntError;

use clap::Parser;
use magic_square::{MagicSquareError, RenderOptions, construct, render};
use tracing::{Level, debug, error};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "magic")]
#[command(version)]
#[command(about = "Print magic squares with their row and column sums")]
struct Cli {
    /// Orders of the squares to construct
    #[arg(required = true)]
    sizes: Vec<String>,

    /// Omit row and column sums
    #[arg(long)]
    no_sums: bool,

    /// Omit the banner above each square
    #[arg(long)]
    no_header: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();

    let options = RenderOptions {
        header: !cli.no_header,
        sums: !cli.no_sums,
        ..Default::default()
    };

    let stdout = io::stdout();
    let failures = run(&cli.sizes, &mut stdout.lock(), &options);
    if failures > 0 {
        std::process::exit(1);
    }
}

#[derive(Debug, thiserror::Error)]
enum ArgError {
    #[error("not a size: {0}")]
    Parse(#[from] ParseIntError),

    #[error(transparent)]
    Square(#[from] MagicSquareError),
}

/// Constructs and renders each argument in turn, returning how many failed.
fn run<W: Write>(args: &[String], out: &mut W, options: &RenderOptions) -> usize {
    let mut failures = 0;

    for arg in args {
        let result = arg
            .trim()
            .parse::<usize>()
            .map_err(ArgError::from)
            .and_then(|n| {
                let sq = construct(n)?;
                debug!(n, magic_constant = sq.magic_constant(), "constructed");
                render(&sq, out, options)?;
                Ok(())
            });
        if let Err(e) = result {
            error!(arg = %arg, "{}", e);
            failures += 1;
        }
    }

    if let Err(e) = out.flush() {
        error!("flushing output: {}", e);
        failures += 1;
    }
    failures
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bad_argument_does_not_stop_the_run() {
        let mut out = Vec::new();
        let failures = run(&args(&["3", "abc", "5"]), &mut out, &RenderOptions::default());
        assert_eq!(failures, 1);

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Dumping 3x3 Magic Square:"));
        assert!(text.contains("Dumping 5x5 Magic Square:"));
    }

    #[test]
    fn construction_errors_are_counted() {
        let mut out = Vec::new();
        let failures = run(&args(&["0", "4", "6"]), &mut out, &RenderOptions::default());
        assert_eq!(failures, 2);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Dumping 6x6 Magic Square:"));
        assert!(!text.contains("Dumping 4x4"));
    }

    struct UnflushableWriter(Vec<u8>);

    impl Write for UnflushableWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn flush_failure_is_counted() {
        let mut out = UnflushableWriter(Vec::new());
        let failures = run(&args(&["3"]), &mut out, &RenderOptions::default());
        assert_eq!(failures, 1);
        assert!(!out.0.is_empty());
    }
}
