//! Packed bit sequences.
//!
//! The encoded stream is logically a flat sequence of bits; `BitVec` packs
//! them into bytes MSB-first while preserving the exact bit length, so the
//! logical order matches one-bit-at-a-time emission.

/// A growable bit sequence packed into bytes, MSB-first within each byte.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitVec {
    bytes: Vec<u8>,
    len: usize,
}

impl BitVec {
    /// Create an empty bit sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty bit sequence with room for `bits` bits.
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bits.div_ceil(8)),
            len: 0,
        }
    }

    /// Append a single bit.
    pub fn push(&mut self, bit: bool) {
        let byte_index = self.len / 8;
        let bit_offset = self.len % 8;
        if byte_index == self.bytes.len() {
            self.bytes.push(0);
        }
        if bit {
            self.bytes[byte_index] |= 1 << (7 - bit_offset);
        }
        self.len += 1;
    }

    /// Append a codeword given as a slice of 0/1 bit values.
    pub fn push_code(&mut self, code: &[u8]) {
        for &bit in code {
            self.push(bit != 0);
        }
    }

    /// Bit at position `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<bool> {
        if index >= self.len {
            return None;
        }
        Some(self.bytes[index / 8] >> (7 - index % 8) & 1 == 1)
    }

    /// Number of bits.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if no bits have been pushed.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The packed bytes; the final byte is zero-padded in its low bits.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Iterate the bits in order.
    pub fn iter(&self) -> Bits<'_> {
        Bits { vec: self, pos: 0 }
    }
}

impl FromIterator<bool> for BitVec {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut vec = Self::new();
        for bit in iter {
            vec.push(bit);
        }
        vec
    }
}

/// Iterator over the bits of a [`BitVec`].
#[derive(Debug, Clone)]
pub struct Bits<'a> {
    vec: &'a BitVec,
    pos: usize,
}

impl Iterator for Bits<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        let bit = self.vec.get(self.pos)?;
        self.pos += 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.vec.len - self.pos;
        (rest, Some(rest))
    }
}

impl ExactSizeIterator for Bits<'_> {}
