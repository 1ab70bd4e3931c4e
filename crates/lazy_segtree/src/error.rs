#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SegmentTreeError {
    /// The range is empty or reaches past the end of the sequence.
    #[error("range {start}..{end} is empty or not within 0..{len}")]
    OutOfRange {
        start: usize,
        end: usize,
        len: usize,
    },
    #[error("cannot allocate a segment tree over {len} elements")]
    InvalidConstruction { len: usize },
    /// A validated query produced no aggregate and the combiner has no identity
    /// to report instead.
    #[error("no aggregate for range {start}..{end}")]
    Inconsistent { start: usize, end: usize },
}

pub type Result<T, E = SegmentTreeError> = std::result::Result<T, E>;
