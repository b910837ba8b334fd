//! Codebook construction and the encode/decode transforms.
//!
//! Frequency counting, tree building, and code derivation have no
//! cross-segment dependency, so codebook construction comes in a sequential
//! and a scoped-thread parallel flavor with identical output. Encoding and
//! decoding process segments strictly in input order: the bit sequence is a
//! flat concatenation and segment boundaries exist only by replaying the
//! segmentation parameters.

use crate::bitstream::{Bits, BitVec};
use crate::code::CodeTable;
use crate::error::{Error, Result};
use crate::segment::{segments, symbols, FrequencyTable, Params};
use crate::tree::{build_tree, Node};

/// One segment's tree and derived code table.
#[derive(Debug, Clone)]
pub struct SegmentCode {
    tree: Node,
    table: CodeTable,
}

impl SegmentCode {
    /// The segment's Huffman tree root.
    pub fn tree(&self) -> &Node {
        &self.tree
    }

    /// The segment's prefix code table.
    pub fn table(&self) -> &CodeTable {
        &self.table
    }
}

/// Per-segment trees and code tables for one input, in segment order.
///
/// The codebook is not embedded in the encoded stream; it must be carried
/// alongside the bits for decoding, together with the parameters it holds.
#[derive(Debug, Clone)]
pub struct Codebook {
    params: Params,
    segments: Vec<SegmentCode>,
}

impl Codebook {
    /// Build per-segment codes for `input`, one segment at a time.
    pub fn build(input: &[u8], params: Params) -> Result<Self> {
        params.validate()?;
        let segments = segments(input, params)
            .map(|segment| build_segment(segment, params))
            .collect();
        Ok(Self { params, segments })
    }

    /// Build per-segment codes across up to `num_threads` scoped threads.
    ///
    /// Segments are assigned to workers in contiguous batches and the
    /// results rejoined in segment order, so the output is identical to
    /// [`Codebook::build`].
    pub fn build_parallel(input: &[u8], params: Params, num_threads: usize) -> Result<Self> {
        params.validate()?;
        let chunks: Vec<&[u8]> = segments(input, params).collect();
        if chunks.is_empty() {
            return Ok(Self {
                params,
                segments: Vec::new(),
            });
        }

        let workers = num_threads.clamp(1, chunks.len());
        let batch_size = chunks.len().div_ceil(workers);

        let segments = std::thread::scope(|scope| {
            let handles: Vec<_> = chunks
                .chunks(batch_size)
                .map(|batch| {
                    scope.spawn(move || {
                        batch
                            .iter()
                            .map(|segment| build_segment(segment, params))
                            .collect::<Vec<_>>()
                    })
                })
                .collect();

            handles
                .into_iter()
                .flat_map(|handle| handle.join().expect("segment worker panicked"))
                .collect()
        });

        Ok(Self { params, segments })
    }

    /// The segmentation parameters this codebook was built with.
    pub fn params(&self) -> Params {
        self.params
    }

    /// Number of segments covered.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// True if the codebook covers no segments (empty input).
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Per-segment codes in segment order.
    pub fn segments(&self) -> &[SegmentCode] {
        &self.segments
    }

    /// Code tables in segment order.
    pub fn tables(&self) -> impl Iterator<Item = &CodeTable> {
        self.segments.iter().map(SegmentCode::table)
    }

    /// Total number of distinctly coded symbols across all segments.
    pub fn distinct_symbols(&self) -> usize {
        self.segments.iter().map(|s| s.table.len()).sum()
    }

    /// Mean codeword length in bits across all table entries.
    ///
    /// Returns 0.0 for an empty codebook.
    pub fn average_code_length(&self) -> f64 {
        let entries = self.distinct_symbols();
        if entries == 0 {
            return 0.0;
        }
        let bits: usize = self.segments.iter().map(|s| s.table.total_code_bits()).sum();
        bits as f64 / entries as f64
    }
}

fn build_segment(segment: &[u8], params: Params) -> SegmentCode {
    let freqs = FrequencyTable::count(segment, params);
    // `segments` never yields an empty chunk, so a tree always exists.
    let tree = build_tree(&freqs).expect("non-empty segment");
    let table = CodeTable::from_tree(&tree);
    SegmentCode { tree, table }
}

/// Build per-segment code tables for `input`.
///
/// Convenience wrapper over [`Params::new`] and [`Codebook::build`].
pub fn build_codes(input: &[u8], segment_length: usize, character_length: usize) -> Result<Codebook> {
    Codebook::build(input, Params::new(segment_length, character_length)?)
}

/// Encode `input` with a codebook built for it.
///
/// Replays the same segmentation the frequency counter used and substitutes
/// every symbol occurrence with its codeword. A missing codeword means the
/// codebook was built for different data or parameters and is fatal.
pub fn encode(input: &[u8], codebook: &Codebook) -> Result<BitVec> {
    let params = codebook.params;
    let expected = codebook.segments.len();
    let actual = params.segment_count(input.len());
    if expected != actual {
        return Err(Error::SegmentMismatch { expected, actual });
    }

    let mut bits = BitVec::new();
    for (index, (segment, code)) in segments(input, params).zip(&codebook.segments).enumerate() {
        for symbol in symbols(segment, params) {
            let codeword = code
                .table
                .get(symbol)
                .ok_or(Error::MissingCode { segment: index })?;
            bits.push_code(codeword);
        }
    }
    Ok(bits)
}

/// Decode a bit sequence back into the original input.
///
/// Walks segment i's tree bit by bit (0 left, 1 right), emitting a symbol at
/// each leaf. Symbols carry their own byte widths, so segment i is complete
/// once the emitted bytes reach that segment's length; the final segment is
/// complete when the bits run out at a tree root. Running out mid-codeword
/// is a truncation error.
pub fn decode(bits: &BitVec, codebook: &Codebook) -> Result<Vec<u8>> {
    let params = codebook.params;
    let mut output = Vec::new();
    let mut reader = bits.iter();
    let last = codebook.segments.len().saturating_sub(1);

    for (index, code) in codebook.segments.iter().enumerate() {
        let mut emitted = 0usize;
        loop {
            let done = if index < last {
                emitted >= params.segment_length
            } else {
                reader.len() == 0
            };
            if done {
                break;
            }
            let symbol = decode_symbol(&mut reader, &code.tree, index)?;
            emitted += symbol.len();
            output.extend_from_slice(symbol);
        }
    }
    Ok(output)
}

fn decode_symbol<'a>(reader: &mut Bits<'_>, root: &'a Node, segment: usize) -> Result<&'a [u8]> {
    if let Node::Leaf { symbol, .. } = root {
        // Single-symbol alphabet: the fixed one-bit codeword carries no
        // branch choice, but a bit is still consumed per occurrence.
        reader.next().ok_or(Error::Truncated { segment })?;
        return Ok(symbol);
    }

    let mut node = root;
    loop {
        let bit = reader.next().ok_or(Error::Truncated { segment })?;
        node = match node {
            Node::Internal { left, right, .. } => {
                if bit {
                    right
                } else {
                    left
                }
            }
            Node::Leaf { .. } => unreachable!(),
        };
        if let Node::Leaf { symbol, .. } = node {
            return Ok(symbol);
        }
    }
}
