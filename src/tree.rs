//! Huffman tree construction.
//!
//! One strict binary tree per segment, built by iterative minimum-pair
//! merging over a priority queue. Node ordering is a total order: ascending
//! frequency first, then ascending insertion sequence number. The sequence
//! number makes same-frequency construction reproducible; leaves are
//! numbered in first-occurrence order and merged nodes are numbered after
//! all leaves, in creation order.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::segment::FrequencyTable;

/// Huffman tree node. An internal node exclusively owns its two children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A distinct symbol and its occurrence count.
    Leaf {
        /// The symbol's raw bytes.
        symbol: Vec<u8>,
        /// Occurrence count within the segment.
        freq: u64,
    },
    /// A merged pair; `freq` is the sum of the children's frequencies.
    Internal {
        /// Subtree reached on a 0 bit.
        left: Box<Node>,
        /// Subtree reached on a 1 bit.
        right: Box<Node>,
        /// Combined frequency of both subtrees.
        freq: u64,
    },
}

impl Node {
    /// Frequency of this node (leaf count or subtree sum).
    pub fn freq(&self) -> u64 {
        match self {
            Node::Leaf { freq, .. } => *freq,
            Node::Internal { freq, .. } => *freq,
        }
    }

    /// Number of leaves in this subtree.
    pub fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }
}

/// Queue entry carrying the tie-break sequence number.
#[derive(Debug, PartialEq, Eq)]
struct QueueEntry {
    node: Node,
    seq: u64,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-priority queue: lowest frequency first, earliest insertion on ties.
        other
            .node
            .freq()
            .cmp(&self.node.freq())
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Build a segment's Huffman tree from its frequency table.
///
/// Returns `None` for an empty table (an empty segment never occurs when
/// segmenting a non-empty input). A single distinct symbol yields a
/// single-leaf tree; the code generator assigns it a fixed one-bit codeword.
///
/// Of the two minima popped at each step, the second (heavier under the
/// total order) becomes the left child, so higher-frequency symbols sit on
/// 0-leading paths.
pub fn build_tree(table: &FrequencyTable) -> Option<Node> {
    let mut pq = BinaryHeap::with_capacity(table.len());
    let mut seq = 0u64;
    for (symbol, freq) in table.iter() {
        pq.push(QueueEntry {
            node: Node::Leaf {
                symbol: symbol.to_vec(),
                freq,
            },
            seq,
        });
        seq += 1;
    }

    while pq.len() > 1 {
        let first = pq.pop()?;
        let second = pq.pop()?;
        let freq = first.node.freq() + second.node.freq();
        pq.push(QueueEntry {
            node: Node::Internal {
                left: Box::new(second.node),
                right: Box::new(first.node),
                freq,
            },
            seq,
        });
        seq += 1;
    }

    pq.pop().map(|entry| entry.node)
}
