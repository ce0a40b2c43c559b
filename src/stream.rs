//! Stream encoding and decoding.
//!
//! The container format is a header line (see [`crate::header`]) terminated
//! by a single `\n`, followed by the bit payload: one ASCII `'0'`/`'1'`
//! character per encoded bit, no padding, no trailing delimiter. The payload
//! is consumed as a contiguous byte run, never line by line.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::code::create_codes;
use crate::error::{Error, Result};
use crate::freq;
use crate::header::{create_header, parse_header};
use crate::tree::build_tree;

/// Encode `data`, writing the header line and bit payload to `out`.
///
/// Empty input writes a bare-newline header and nothing else. An input with
/// a single distinct symbol writes only the header: its code is the empty
/// string and the decoder reconstructs the run from the header count.
///
/// # Errors
///
/// Only write failures can occur; they propagate as [`Error::Io`].
pub fn encode<W: Write>(data: &[u8], mut out: W) -> Result<()> {
    let frequencies = freq::count(data);
    let tree = build_tree(&frequencies);
    let codes = create_codes(tree.as_ref());

    out.write_all(create_header(&frequencies).as_bytes())?;
    out.write_all(b"\n")?;
    for &symbol in data {
        out.write_all(codes[symbol as usize].as_bytes())?;
    }
    Ok(())
}

/// Decode an encoded byte run, writing the original bytes to `out`.
///
/// # Errors
///
/// - [`Error::MalformedHeader`] if the header newline is missing or the
///   header line is not well-formed `<symbol> <count>` pairs.
/// - [`Error::InvalidPayloadByte`] on a payload byte other than `'0'`/`'1'`.
/// - [`Error::TruncatedPayload`] if the bit sequence ends between code
///   words.
/// - [`Error::Io`] on write failure.
///
/// There is no partial-result recovery: on any error the bytes already
/// written to `out` must be discarded.
pub fn decode<W: Write>(encoded: &[u8], mut out: W) -> Result<()> {
    let newline = encoded
        .iter()
        .position(|&b| b == b'\n')
        .ok_or_else(|| Error::MalformedHeader("missing terminating newline".to_string()))?;
    let header = std::str::from_utf8(&encoded[..newline])
        .map_err(|_| Error::MalformedHeader("header is not ASCII".to_string()))?;
    let payload = &encoded[newline + 1..];

    let frequencies = parse_header(header)?;
    let root = match build_tree(&frequencies) {
        // All-zero table: the original stream was empty.
        None => return Ok(()),
        Some(root) => root,
    };

    if root.is_leaf() {
        // Single-symbol stream carries zero payload bits; the run length
        // comes from the header count.
        for _ in 0..root.weight {
            out.write_all(&[root.symbol])?;
        }
        return Ok(());
    }

    let mut node = &root;
    for (offset, &bit) in payload.iter().enumerate() {
        // `node` is reset to the root at every leaf and the root is
        // internal here, so descent never starts at a leaf.
        node = match (bit, node.left(), node.right()) {
            (b'0', Some(left), _) => left,
            (b'1', _, Some(right)) => right,
            (b'0' | b'1', ..) => unreachable!("descent from a leaf"),
            (byte, ..) => return Err(Error::InvalidPayloadByte { byte, offset }),
        };

        if node.is_leaf() {
            out.write_all(&[node.symbol])?;
            node = &root;
        }
    }

    if !std::ptr::eq(node, &root) {
        return Err(Error::TruncatedPayload);
    }
    Ok(())
}

/// Encode the file at `input` into `output`.
pub fn encode_file<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<()> {
    let data = std::fs::read(input)?;
    let mut out = BufWriter::new(File::create(output)?);
    encode(&data, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Decode the file at `input` into `output`.
pub fn decode_file<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<()> {
    let encoded = std::fs::read(input)?;
    let mut out = BufWriter::new(File::create(output)?);
    decode(&encoded, &mut out)?;
    out.flush()?;
    Ok(())
}
