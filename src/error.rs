//! Error types for segmented Huffman coding.

use thiserror::Error;

/// Error variants for codec operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A codec parameter is out of range (e.g., a zero segment or symbol width).
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),

    /// The encoder met a symbol with no entry in its segment's code table.
    ///
    /// This means the segmentation used for counting and the segmentation
    /// used for encoding diverged. It is an invariant violation, not a
    /// recoverable condition.
    #[error("no codeword for a symbol in segment {segment}")]
    MissingCode {
        /// Index of the segment whose table was incomplete.
        segment: usize,
    },

    /// The bit stream ended in the middle of a codeword.
    #[error("bit stream truncated inside segment {segment}")]
    Truncated {
        /// Index of the segment being decoded when the bits ran out.
        segment: usize,
    },

    /// The codebook was built for a different number of segments than the
    /// input being processed produces.
    #[error("codebook covers {expected} segments but input has {actual}")]
    SegmentMismatch {
        /// Segment count the codebook was built for.
        expected: usize,
        /// Segment count the input would produce.
        actual: usize,
    },
}

/// A specialized Result type for codec operations.
pub type Result<T> = std::result::Result<T, Error>;
