//! # Segmented Multi-Alphabet Huffman Coding
//!
//! *One independent prefix code per fixed-size chunk of the input.*
//!
//! ## Intuition First
//!
//! A single Huffman code fits one probability distribution. Real inputs
//! drift: the symbol statistics at the top of a file rarely match the
//! statistics at the bottom. Cut the input into fixed-size segments, give
//! each segment its own code built from its own frequencies, and each code
//! stays matched to its local distribution.
//!
//! The alphabet is configurable too: symbols are fixed-width byte groups
//! (`character_length`) rather than single bytes, so correlated byte pairs
//! or triples can be coded as one unit.
//!
//! ## The Problem
//!
//! Two tensions pull against each other:
//! - **One global code**: cheap codebook, but a compromise distribution.
//! - **Per-segment codes**: each code is locally optimal, but every segment
//!   must carry its own codebook and boundary bookkeeping must be exact.
//!
//! The bookkeeping is the sharp edge. The encoded stream is a flat,
//! boundary-less bit sequence; segment boundaries exist only by replaying
//! `(segment_length, character_length)` identically on both sides.
//!
//! ## Historical Context
//!
//! ```text
//! 1948  Shannon    Entropy as the fundamental limit
//! 1952  Huffman    Optimal prefix codes by greedy pair merging
//! 1978  Gallager   Adaptive Huffman: track drifting statistics online
//! 1987  Vitter     Improved one-pass adaptive variant
//! 1996  zlib       Block-local dynamic Huffman tables in DEFLATE
//! ```
//!
//! Blockwise recoding is the batch cousin of the adaptive coders: instead of
//! updating one tree per symbol, rebuild a fresh tree per segment.
//!
//! ## Mathematical Formulation
//!
//! For a segment with symbol probabilities $p_1, \dots, p_n$, the Huffman
//! code minimizes the expected codeword length $\sum_i p_i \ell_i$ over all
//! prefix codes, and that length is within one bit of the entropy:
//!
//! ```text
//! H(p) <= E[len] < H(p) + 1
//! ```
//!
//! ## Complexity Analysis
//!
//! - **Counting**: $O(L)$ over input length $L$.
//! - **Tree building**: $O(n \log n)$ per segment for $n$ distinct symbols.
//! - **Encode / decode**: $O(\text{output bits})$.
//!
//! ## Failure Modes
//!
//! 1. **Boundary divergence**: if counting and encoding ever segment the
//!    input differently, a symbol misses its table entry. One shared
//!    segmentation routine removes the possibility.
//! 2. **Single-symbol segments**: a root-is-leaf tree has no traversal path
//!    and would naively get a zero-length, undecodable codeword. Such
//!    alphabets get a fixed one-bit codeword instead.
//!
//! ## Implementation Notes
//!
//! The codebook is *not* embedded in the encoded bits; it travels alongside
//! them, together with the parameters it was built with. Construction is
//! deterministic: node ordering is frequency first, then insertion sequence,
//! and of each merged pair the heavier node becomes the left child.
//!
//! ## References
//!
//! - Huffman, D. (1952). "A Method for the Construction of
//!   Minimum-Redundancy Codes."
//! - Gallager, R. (1978). "Variations on a Theme by Huffman."

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bitstream;
pub mod code;
pub mod codec;
pub mod error;
pub mod segment;
pub mod tree;

pub use bitstream::BitVec;
pub use code::CodeTable;
pub use codec::{build_codes, decode, encode, Codebook, SegmentCode};
pub use error::Error;
pub use segment::{FrequencyTable, Params};
pub use tree::Node;
