//! Prefix code derivation.
//!
//! Depth-first traversal of a segment's Huffman tree: append a 0 on each
//! left descent and a 1 on each right descent, and record the accumulated
//! path at each leaf. Codewords are prefix-free by construction. A
//! single-leaf tree has no path at all, and an empty codeword cannot be
//! told apart in a bitstream, so a single-symbol alphabet gets the fixed
//! one-bit codeword "0".

use std::collections::HashMap;

use crate::tree::Node;

/// A segment's symbol → codeword mapping. Codewords are slices of 0/1 bit
/// values, prefix-free within one table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: HashMap<Vec<u8>, Vec<u8>>,
}

impl CodeTable {
    /// Derive the code table for one tree.
    pub fn from_tree(root: &Node) -> Self {
        let mut codes = HashMap::new();
        walk(root, Vec::new(), &mut codes);
        Self { codes }
    }

    /// Codeword for a symbol, if the symbol occurred in the segment.
    pub fn get(&self, symbol: &[u8]) -> Option<&[u8]> {
        self.codes.get(symbol).map(Vec::as_slice)
    }

    /// Number of distinct symbols coded by this table.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// True if the table codes no symbols.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterate `(symbol, codeword)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&[u8], &[u8])> {
        self.codes
            .iter()
            .map(|(s, c)| (s.as_slice(), c.as_slice()))
    }

    /// Sum of all codeword bit lengths.
    pub fn total_code_bits(&self) -> usize {
        self.codes.values().map(Vec::len).sum()
    }
}

fn walk(node: &Node, prefix: Vec<u8>, codes: &mut HashMap<Vec<u8>, Vec<u8>>) {
    match node {
        Node::Leaf { symbol, .. } => {
            // Root-is-leaf: a single-symbol alphabet takes one bit per symbol.
            let code = if prefix.is_empty() { vec![0] } else { prefix };
            codes.insert(symbol.clone(), code);
        }
        Node::Internal { left, right, .. } => {
            let mut left_prefix = prefix.clone();
            left_prefix.push(0);
            walk(left, left_prefix, codes);

            let mut right_prefix = prefix;
            right_prefix.push(1);
            walk(right, right_prefix, codes);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::{FrequencyTable, Params};
    use crate::tree::build_tree;

    fn table_for(input: &[u8]) -> CodeTable {
        let params = Params::new(input.len().max(1), 1).unwrap();
        let freqs = FrequencyTable::count(input, params);
        CodeTable::from_tree(&build_tree(&freqs).unwrap())
    }

    fn is_prefix_free(table: &CodeTable) -> bool {
        let codes: Vec<&[u8]> = table.iter().map(|(_, c)| c).collect();
        for (i, a) in codes.iter().enumerate() {
            for (j, b) in codes.iter().enumerate() {
                if i != j && b.len() >= a.len() && &b[..a.len()] == *a {
                    return false;
                }
            }
        }
        true
    }

    #[test]
    fn test_skewed_pair_assignment() {
        // freq {a:3, b:1}: the heavier symbol sits on the left, code "0".
        let table = table_for(b"aaab");
        assert_eq!(table.get(b"a"), Some(&[0u8][..]));
        assert_eq!(table.get(b"b"), Some(&[1u8][..]));
    }

    #[test]
    fn test_single_symbol_gets_one_bit() {
        let table = table_for(b"aaaa");
        assert_eq!(table.get(b"a"), Some(&[0u8][..]));
    }

    #[test]
    fn test_absent_symbol_has_no_code() {
        let table = table_for(b"aaab");
        assert_eq!(table.get(b"z"), None);
    }

    #[test]
    fn test_prefix_free() {
        let table = table_for(b"abracadabra snozzberries");
        assert!(is_prefix_free(&table));
    }

    #[test]
    fn test_frequent_symbols_get_shorter_codes() {
        // a appears far more often than q; its codeword can be no longer.
        let table = table_for(b"aaaaaaaaaaaaaaaabbbbbbbbccccddq");
        let a = table.get(b"a").unwrap().len();
        let q = table.get(b"q").unwrap().len();
        assert!(a <= q);
    }

    #[test]
    fn test_total_code_bits() {
        let table = table_for(b"aaab");
        assert_eq!(table.total_code_bits(), 2);
    }

    #[test]
    fn test_completeness() {
        let input = b"how much wood would a woodchuck chuck";
        let params = Params::new(input.len(), 1).unwrap();
        let freqs = FrequencyTable::count(input, params);
        let table = CodeTable::from_tree(&build_tree(&freqs).unwrap());
        assert_eq!(table.len(), freqs.len());
        for (symbol, _) in freqs.iter() {
            assert!(table.get(symbol).is_some());
        }
    }
}
