//! ASCII header serialization for the frequency table.
//!
//! The compact form lists only non-zero entries as space-separated
//! `<symbol> <count>` pairs with symbols ascending, e.g. `"97 3 98 4 99 2"`
//! for the stream `aaaccbbbb`. The terminating newline belongs to the
//! container format and is written by the stream encoder, not here.

use crate::error::{Error, Result};
use crate::freq::Frequencies;

/// Serialize the non-zero entries of a frequency table.
///
/// An all-zero table serializes to the empty string.
pub fn create_header(frequencies: &Frequencies) -> String {
    let mut parts = Vec::new();
    for (symbol, &freq) in frequencies.iter().enumerate() {
        if freq > 0 {
            parts.push(symbol.to_string());
            parts.push(freq.to_string());
        }
    }
    parts.join(" ")
}

/// Parse a header back into a full 256-entry frequency table.
///
/// Unlisted symbols default to 0. An empty or whitespace-only header is an
/// empty input stream, not an error.
///
/// # Errors
///
/// Returns [`Error::MalformedHeader`] on an odd token count, a token that
/// does not parse as a symbol in `[0, 255]` or an unsigned count, or counts
/// whose total overflows `u64` (the tree builder sums them into subtree
/// weights, so the total must fit).
pub fn parse_header(header: &str) -> Result<Frequencies> {
    let mut freqs = [0u64; 256];

    let mut tokens = header.split_whitespace();
    while let Some(symbol_tok) = tokens.next() {
        let count_tok = tokens
            .next()
            .ok_or_else(|| Error::MalformedHeader(format!("symbol {symbol_tok} has no count")))?;

        let symbol: u8 = symbol_tok
            .parse()
            .map_err(|_| Error::MalformedHeader(format!("invalid symbol {symbol_tok:?}")))?;
        let count: u64 = count_tok
            .parse()
            .map_err(|_| Error::MalformedHeader(format!("invalid count {count_tok:?}")))?;

        freqs[symbol as usize] = count;
    }

    freqs
        .iter()
        .try_fold(0u64, |total, &count| total.checked_add(count))
        .ok_or_else(|| Error::MalformedHeader("frequency total overflows u64".to_string()))?;

    Ok(freqs)
}
