//! Per-symbol frequency counting.

use std::io::{ErrorKind, Read};

use crate::error::Result;

/// Occurrence count per byte value; the index is the symbol.
///
/// Symbols absent from the input are exactly 0.
pub type Frequencies = [u64; 256];

/// Count byte occurrences over a slice in a single pass.
pub fn count(data: &[u8]) -> Frequencies {
    let mut freqs = [0u64; 256];
    for &b in data {
        freqs[b as usize] += 1;
    }
    freqs
}

/// Count byte occurrences over a reader in a single pass.
///
/// # Errors
///
/// Read failures propagate unchanged as [`crate::Error::Io`].
pub fn count_reader<R: Read>(mut reader: R) -> Result<Frequencies> {
    let mut freqs = [0u64; 256];
    let mut buf = [0u8; 8192];
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            // Interrupted reads are retried, as std's own read loops do.
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        for &b in &buf[..n] {
            freqs[b as usize] += 1;
        }
    }
    Ok(freqs)
}
