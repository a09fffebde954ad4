//! Numeric input sources.
//!
//! Everything the checker reads from the outside world comes in as individual real numbers, one
//! prompt at a time. [`RealSource`] is that boundary: [`Console`] implements it on top of
//! stdin/stdout for interactive runs, [`Scripted`] replays a pre-cooked list of lines for tests
//! and scripted runs.

use std::collections::VecDeque;
use std::io::{self, Write};

use anyhow::{bail, Context};

/// A source of real numbers, queried one prompt at a time.
///
/// Implementations must not hand out malformed values: a line that does not parse as a number is
/// consumed and the next one is tried, indefinitely. Only a hard failure of the underlying stream
/// (an I/O error, or the stream ending) surfaces as an error.
pub trait RealSource {
    /// Obtains the next real number, displaying `prompt` where the implementation supports it.
    fn read_real(&mut self, prompt: &str) -> anyhow::Result<f64>;
}

/// Parses a real number, accepting both `.` and `,` as the decimal separator.
fn parse_real(line: &str) -> Option<f64> {
    line.trim().replace(',', ".").parse().ok()
}

/// Interactive [`RealSource`] reading lines from stdin, prompting on stdout.
pub struct Console;

impl RealSource for Console {
    fn read_real(&mut self, prompt: &str) -> anyhow::Result<f64> {
        let mut line = String::new();
        loop {
            print!("{prompt}");
            io::stdout().flush().context("failed to flush prompt")?;

            line.clear();
            let read = io::stdin()
                .read_line(&mut line)
                .context("failed to read from stdin")?;
            if read == 0 {
                bail!("input ended while a number was expected (prompt: `{prompt}`)");
            }

            match parse_real(&line) {
                Some(value) => return Ok(value),
                None => println!("`{}` is not a number, try again", line.trim()),
            }
        }
    }
}

/// [`RealSource`] replaying a fixed sequence of input lines.
///
/// Behaves like [`Console`] fed from a script: lines that don't parse are skipped (the re-prompt
/// loop), and running out of lines is a hard error.
pub struct Scripted {
    lines: VecDeque<String>,
}

impl Scripted {
    pub fn new<I>(lines: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl RealSource for Scripted {
    fn read_real(&mut self, prompt: &str) -> anyhow::Result<f64> {
        loop {
            let Some(line) = self.lines.pop_front() else {
                bail!("script ran out of input lines (prompt: `{prompt}`)");
            };
            match parse_real(&line) {
                Some(value) => return Ok(value),
                None => log::trace!("skipping non-numeric scripted line `{line}`"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_separators() {
        let mut src = Scripted::new(["3.14", "3,14", "-0,5"]);
        assert_eq!(src.read_real("x = ").unwrap(), 3.14);
        assert_eq!(src.read_real("x = ").unwrap(), 3.14);
        assert_eq!(src.read_real("x = ").unwrap(), -0.5);
    }

    #[test]
    fn retries_past_garbage() {
        let mut src = Scripted::new(["", "abc", "1.0.0", "2.5"]);
        assert_eq!(src.read_real("a = ").unwrap(), 2.5);
    }

    #[test]
    fn exhausted_script_is_an_error() {
        let mut src = Scripted::new(["1"]);
        assert_eq!(src.read_real("a = ").unwrap(), 1.0);
        let err = src.read_real("b = ").unwrap_err();
        assert!(err.to_string().contains("ran out of input"));
    }

    #[test]
    fn non_finite_values_parse() {
        // No special-casing of NaN or infinity anywhere in the pipeline.
        let mut src = Scripted::new(["inf", "NaN"]);
        assert_eq!(src.read_real("a = ").unwrap(), f64::INFINITY);
        assert!(src.read_real("a = ").unwrap().is_nan());
    }
}
