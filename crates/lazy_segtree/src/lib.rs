//! Segment tree with lazy propagation, generic over how aggregates merge
//! ([`Combiner`]) and how range updates act on them ([`Updater`]).
//!
//! - Ranges are half-open: `[start, end)`.
//! - `update` and `query` run in `O(log n)`.
//! - Out-of-bounds and empty ranges are errors, never clamped.

mod combiner;
mod error;
mod numeric;
mod segment_tree;
mod updater;

pub use combiner::{Combiner, Max, Min, Sum};
pub use error::{Result, SegmentTreeError};
pub use numeric::Numeric;
pub use segment_tree::SegmentTree;
pub use updater::{Add, Assign, Offset, Updater};
