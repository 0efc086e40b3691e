//! Line-based integer prompt. Bad answers are handled here, so the session
//! only ever sees numbers that belong to the menu it asked.

use std::io::{self, BufRead, Write};

use log::trace;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    /// Standard input reached end-of-file before a valid answer arrived.
    #[error("input closed before a valid choice was entered")]
    Closed,

    #[error("failed to talk to the console")]
    Io(#[from] io::Error),
}

/// Interpret one input line. The first whitespace-separated token must start
/// with an integer (an optional sign then digits); trailing characters of that
/// token and the rest of the line are ignored. `None` when there is no integer
/// or it falls outside `[min, max]`.
pub fn parse_choice(line: &str, min: u32, max: u32) -> Option<u32> {
    let token = line.split_whitespace().next()?;
    let unsigned = token.trim_start_matches(['+', '-']);
    let sign_len = token.len() - unsigned.len();
    if sign_len > 1 {
        return None;
    }
    let digits_len = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if digits_len == 0 {
        return None;
    }

    let value: i64 = token[..sign_len + digits_len].parse().ok()?;
    u32::try_from(value)
        .ok()
        .filter(|choice| (min..=max).contains(choice))
}

/// Read lines until one carries a valid choice. Blank lines are skipped
/// silently; any other rejected line is discarded with a hint written to
/// `output`.
pub fn read_int_in_range<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    min: u32,
    max: u32,
) -> Result<u32, InputError> {
    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(InputError::Closed);
        }
        if line.trim().is_empty() {
            continue;
        }
        if let Some(choice) = parse_choice(&line, min, max) {
            return Ok(choice);
        }

        trace!("rejected input {:?} for range {min}-{max}", line.trim_end());
        write!(
            output,
            "Invalid input. Please enter a number between {min} and {max}:"
        )?;
        output.flush()?;
    }
}
