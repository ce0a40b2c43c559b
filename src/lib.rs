//! # Static Huffman Coding
//!
//! *Byte-oriented compression with an optimal prefix code and a reproducible tree.*
//!
//! ## Intuition First
//!
//! Imagine writing a message where common letters get short nicknames and rare
//! letters keep their long names. As long as no nickname is the beginning of
//! another, the reader can recover the message by scanning left to right and
//! never needs separators.
//!
//! Huffman coding builds exactly that kind of nickname table: a prefix-free
//! binary code where frequent bytes get short bit strings and rare bytes get
//! long ones, minimizing the total encoded length for a fixed per-symbol model.
//!
//! ## The Problem
//!
//! A fixed-width encoding spends 8 bits on every byte regardless of how skewed
//! the input distribution is. A variable-length code can do much better, but
//! only if:
//! - no code word is a prefix of another (otherwise decoding is ambiguous), and
//! - both sides agree on the exact code, bit for bit.
//!
//! The second point is where implementations usually diverge: the classic
//! construction repeatedly merges the two lightest subtrees, and when weights
//! tie, the merge order is up for grabs. Different tie-breaks produce different
//! (equally optimal) trees, and a decoder built from one cannot read a stream
//! encoded with another.
//!
//! ## Historical Context
//!
//! ```text
//! 1948  Shannon    Entropy as the fundamental limit
//! 1949  Fano       Top-down splitting; suboptimal in general
//! 1952  Huffman    Bottom-up merging; provably optimal prefix codes
//! 1976  Gallager   Sibling property, adaptive variants
//! 1985  Knuth      Dynamic Huffman with O(1) updates per bit
//! ```
//!
//! David Huffman found the algorithm as a term paper at MIT, sidestepping the
//! final exam by solving the open problem instead.
//!
//! ## Algorithm
//!
//! Given frequencies $f_s$ for each byte value $s \in [0, 256)$:
//!
//! 1. Make a leaf per non-zero symbol and keep all pending subtrees in a
//!    sequence ordered by $(weight, symbol)$ ascending, where a subtree's
//!    symbol is the smallest byte value beneath it.
//! 2. Remove the two lowest subtrees, merge them under a new internal node
//!    (the child with the smaller representative symbol goes left), and
//!    insert the merged node back.
//! 3. Repeat until one node remains: the root.
//!
//! The $(weight, symbol)$ key is a strict total order over live subtrees
//! (representative symbols never collide), so the tree shape is a pure
//! function of the frequency table and any two implementations of these
//! rules interoperate.
//!
//! ## Complexity Analysis
//!
//! - **Time**: $O(k^2)$ to build the tree with the positional-insert
//!   sequence, where $k \le 256$ is the number of distinct symbols; $O(n)$
//!   bits to encode or decode $n$ symbols.
//! - **Space**: $O(k)$ nodes plus the 256-entry frequency and code tables.
//!
//! ## Failure Modes
//!
//! 1. **Truncated payload**: a bit stream that ends between code words
//!    cannot be completed and decoding aborts.
//! 2. **Malformed header**: the frequency preamble must be well-formed
//!    `<symbol> <count>` pairs; anything else aborts decoding.
//!
//! ## Implementation Notes
//!
//! The encoded form is deliberately transparent: an ASCII header line of
//! space-separated `<symbol> <count>` pairs (symbols ascending), a single
//! `\n`, then one ASCII `'0'`/`'1'` character per encoded bit with no
//! padding. Empty input produces a bare-newline header and no payload; a
//! single-symbol input produces a header only, and the decoder repeats the
//! symbol by its count.
//!
//! ## References
//!
//! - Huffman, D. (1952). "A Method for the Construction of
//!   Minimum-Redundancy Codes."
//! - Knuth, D. (1985). "Dynamic Huffman Coding."

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod code;
pub mod error;
pub mod freq;
pub mod header;
pub mod ordered;
pub mod stream;
pub mod tree;

pub use error::{Error, Result};
pub use freq::Frequencies;
pub use stream::{decode, decode_file, encode, encode_file};
pub use tree::{build_tree, Node};
