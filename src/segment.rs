//! Segmentation and per-segment frequency counting.
//!
//! The segmenter is a single pair of `slice::chunks`-based routines shared by
//! the frequency counter, the encoder, and the decoder's bookkeeping. Sharing
//! one routine is what guarantees the counter and the encoder agree on every
//! symbol boundary; a divergence there would surface as an unresolvable
//! codeword lookup.

use std::collections::HashMap;

use crate::error::{Error, Result};

/// Codec parameters: how the raw input is cut into segments and symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Params {
    /// Bytes per segment. Each segment gets its own independent Huffman code.
    pub segment_length: usize,
    /// Bytes per symbol. The trailing symbol of a segment may be shorter.
    pub character_length: usize,
}

impl Params {
    /// Create parameters, rejecting zero widths.
    pub fn new(segment_length: usize, character_length: usize) -> Result<Self> {
        let params = Self {
            segment_length,
            character_length,
        };
        params.validate()?;
        Ok(params)
    }

    /// Check the widths are usable (both nonzero).
    pub fn validate(&self) -> Result<()> {
        if self.segment_length == 0 {
            return Err(Error::InvalidParameter("segment_length must be nonzero"));
        }
        if self.character_length == 0 {
            return Err(Error::InvalidParameter("character_length must be nonzero"));
        }
        Ok(())
    }

    /// Number of segments the input splits into: ceil(len / segment_length).
    pub fn segment_count(&self, input_len: usize) -> usize {
        input_len.div_ceil(self.segment_length)
    }
}

/// Split the input into segments of up to `segment_length` bytes, in order.
///
/// The final segment may be shorter than `segment_length`.
pub fn segments(input: &[u8], params: Params) -> impl Iterator<Item = &[u8]> {
    input.chunks(params.segment_length)
}

/// Split one segment into symbols of up to `character_length` bytes, in order.
///
/// The final symbol may be shorter than `character_length`; it is a distinct
/// alphabet element in its own right.
pub fn symbols(segment: &[u8], params: Params) -> impl Iterator<Item = &[u8]> {
    segment.chunks(params.character_length)
}

/// Occurrence counts for the distinct symbols of one segment.
///
/// Entries iterate in first-occurrence order, which seeds the tree builder's
/// priority queue deterministically.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    index: HashMap<Vec<u8>, usize>,
    entries: Vec<(Vec<u8>, u64)>,
    total: u64,
}

impl FrequencyTable {
    /// Count symbol frequencies for one segment in a single left-to-right pass.
    pub fn count(segment: &[u8], params: Params) -> Self {
        let mut table = Self::default();
        for symbol in symbols(segment, params) {
            table.total += 1;
            match table.index.get(symbol) {
                Some(&slot) => table.entries[slot].1 += 1,
                None => {
                    table.index.insert(symbol.to_vec(), table.entries.len());
                    table.entries.push((symbol.to_vec(), 1));
                }
            }
        }
        table
    }

    /// Count for a specific symbol, 0 if absent.
    pub fn get(&self, symbol: &[u8]) -> u64 {
        self.index
            .get(symbol)
            .map_or(0, |&slot| self.entries[slot].1)
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the segment contained no symbols.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts (the segment's symbol count).
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Iterate `(symbol, count)` in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&[u8], u64)> {
        self.entries.iter().map(|(s, c)| (s.as_slice(), *c))
    }

    /// Shannon entropy of the distribution, in bits per symbol.
    ///
    /// Returns 0.0 for an empty table.
    pub fn entropy(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let total = self.total as f64;
        self.entries
            .iter()
            .map(|&(_, c)| {
                let prob = c as f64 / total;
                -prob * prob.log2()
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(seg: usize, ch: usize) -> Params {
        Params::new(seg, ch).unwrap()
    }

    #[test]
    fn test_rejects_zero_widths() {
        assert!(Params::new(0, 1).is_err());
        assert!(Params::new(1, 0).is_err());
        assert!(Params::new(1, 1).is_ok());
    }

    #[test]
    fn test_segment_count_rounds_up() {
        let p = params(3, 1);
        assert_eq!(p.segment_count(0), 0);
        assert_eq!(p.segment_count(3), 1);
        assert_eq!(p.segment_count(4), 2);
        assert_eq!(p.segment_count(6), 2);
    }

    #[test]
    fn test_short_trailing_symbol_is_distinct_key() {
        // Length 5, segment 3, symbol 2: segment 0 is [ab][c], segment 1 is [de].
        let p = params(3, 2);
        let input = b"abcde";
        let segs: Vec<&[u8]> = segments(input, p).collect();
        assert_eq!(segs, vec![&b"abc"[..], &b"de"[..]]);

        let seg0: Vec<&[u8]> = symbols(segs[0], p).collect();
        assert_eq!(seg0, vec![&b"ab"[..], &b"c"[..]]);

        let table = FrequencyTable::count(segs[0], p);
        assert_eq!(table.get(b"ab"), 1);
        assert_eq!(table.get(b"c"), 1);
        assert_eq!(table.get(b"bc"), 0);
    }

    #[test]
    fn test_counts_single_pass() {
        let p = params(4, 1);
        let table = FrequencyTable::count(b"aaab", p);
        assert_eq!(table.get(b"a"), 3);
        assert_eq!(table.get(b"b"), 1);
        assert_eq!(table.len(), 2);
        assert_eq!(table.total(), 4);
    }

    #[test]
    fn test_iteration_is_first_occurrence_order() {
        let p = params(8, 1);
        let table = FrequencyTable::count(b"cabcabcc", p);
        let order: Vec<&[u8]> = table.iter().map(|(s, _)| s).collect();
        assert_eq!(order, vec![&b"c"[..], &b"a"[..], &b"b"[..]]);
    }

    #[test]
    fn test_entropy_uniform_pair() {
        let p = params(4, 1);
        let table = FrequencyTable::count(b"abab", p);
        assert!((table.entropy() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_entropy_single_symbol_is_zero() {
        let p = params(4, 1);
        let table = FrequencyTable::count(b"aaaa", p);
        assert_eq!(table.entropy(), 0.0);
    }
}
