//! Program Loader.
//!
//! This module turns a hex-encoded program into instruction words. It performs:
//! 1. **Parsing:** One byte per line, written in hex with an optional `0x`/`0X` prefix.
//! 2. **Packing:** Every four consecutive bytes form one word, first byte least significant.
//! 3. **Validation:** Bad digits, values above `0xFF` and a trailing partial word are errors.
//!
//! Blank lines (and surrounding whitespace) are ignored and do not count toward a word.

use std::fs;
use std::path::Path;

use crate::common::constants::WORD_WIDTH;
use crate::common::error::SimError;

/// Parses a hex-byte-per-line program into instruction words.
///
/// # Arguments
///
/// * `text` - Program source, one hex byte per line.
///
/// # Returns
///
/// The instruction sequence; word `i` is assembled from bytes `4i..4i+4`.
///
/// # Errors
///
/// Returns [`SimError::ProgramLoad`] naming the offending 1-based line, or the
/// last line read when the byte count is not a multiple of four.
///
/// # Examples
///
/// ```
/// use rv32sim_core::sim::loader::parse_program;
///
/// let words = parse_program("13\n05\n50\n00\n").unwrap();
/// assert_eq!(words, vec![0x0050_0513]);
/// ```
pub fn parse_program(text: &str) -> Result<Vec<u32>, SimError> {
    let mut words = Vec::new();
    let mut pending = [0u8; WORD_WIDTH];
    let mut filled = 0;
    let mut lines = 0;

    for (idx, raw) in text.lines().enumerate() {
        lines = idx + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        pending[filled] = parse_byte(line).map_err(|reason| SimError::ProgramLoad {
            line: idx + 1,
            reason,
        })?;
        filled += 1;
        if filled == WORD_WIDTH {
            words.push(u32::from_le_bytes(pending));
            filled = 0;
        }
    }

    if filled != 0 {
        return Err(SimError::ProgramLoad {
            line: lines,
            reason: format!("trailing partial instruction ({filled} of {WORD_WIDTH} bytes)"),
        });
    }

    tracing::debug!(
        words = words.len(),
        bytes = words.len() * WORD_WIDTH,
        "program parsed"
    );
    Ok(words)
}

/// Reads and parses a program file.
///
/// # Errors
///
/// Returns [`SimError::InvalidFile`] when the file cannot be read and
/// [`SimError::ProgramLoad`] when its contents are malformed.
pub fn load_program_file(path: impl AsRef<Path>) -> Result<Vec<u32>, SimError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| SimError::InvalidFile {
        path: path.to_path_buf(),
        source,
    })?;
    parse_program(&text)
}

fn parse_byte(token: &str) -> Result<u8, String> {
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token);
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(format!("invalid hex byte '{token}'"));
    }
    let value =
        u32::from_str_radix(digits, 16).map_err(|e| format!("invalid hex byte '{token}': {e}"))?;
    u8::try_from(value).map_err(|_| format!("value '{token}' does not fit in a byte"))
}
