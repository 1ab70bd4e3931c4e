use std::ops::Range;

use tracing::{debug, trace};

use crate::combiner::Combiner;
use crate::error::{Result, SegmentTreeError};
use crate::updater::Updater;

#[inline(always)]
fn left(pos: usize) -> usize {
    2 * pos + 1
}

#[inline(always)]
fn right(pos: usize) -> usize {
    2 * pos + 2
}

/// `4 * len` empty slots, enough for the heap layout of any `len`.
fn alloc_slots<T>(len: usize) -> Result<Vec<Option<T>>> {
    let slots = len
        .checked_mul(4)
        .ok_or(SegmentTreeError::InvalidConstruction { len })?;
    let mut nodes = Vec::new();
    nodes
        .try_reserve_exact(slots)
        .map_err(|_| SegmentTreeError::InvalidConstruction { len })?;
    nodes.resize_with(slots, || None);
    Ok(nodes)
}

/// Segment tree with lazy propagation over a fixed number of elements.
///
/// - Ranges are half-open: `start..end`.
/// - Node `i` covers a closed segment of the sequence; its children are
///   `2i + 1` and `2i + 2`, the root is `0`.
/// - `lazy[i]` holds a value not yet applied to `tree[i]`. It is drained on
///   every visit before `tree[i]` is read, which is why [`query`] needs
///   `&mut self`.
///
/// [`query`]: SegmentTree::query
#[derive(Clone, Debug)]
pub struct SegmentTree<T, C, U> {
    len: usize,
    tree: Vec<Option<T>>,
    lazy: Vec<Option<T>>,
    combiner: C,
    updater: U,
}

impl<T, C, U> SegmentTree<T, C, U> {
    /// Number of elements, fixed at construction.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no elements; every range is then rejected.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<T, C, U> SegmentTree<T, C, U>
where
    T: Clone,
    C: Combiner<T>,
    U: Updater<T>,
{
    pub fn new(values: &[T], combiner: C, updater: U) -> Result<Self> {
        let len = values.len();
        let mut seg = Self {
            len,
            tree: alloc_slots(len)?,
            lazy: alloc_slots(len)?,
            combiner,
            updater,
        };
        if len > 0 {
            seg.build(values, 0, len - 1, 0);
        }
        debug!(len, slots = seg.tree.len(), "built segment tree");
        Ok(seg)
    }

    /// Tree over `len` elements that start out absent.
    ///
    /// Updaters decide what an absent element becomes: [`Add`](crate::Add)
    /// counts it as zero, [`Offset`](crate::Offset) leaves it absent. Queries
    /// over absent elements report [`Combiner::identity`].
    pub fn with_len(len: usize, combiner: C, updater: U) -> Result<Self> {
        let seg = Self {
            len,
            tree: alloc_slots(len)?,
            lazy: alloc_slots(len)?,
            combiner,
            updater,
        };
        debug!(len, slots = seg.tree.len(), "allocated segment tree");
        Ok(seg)
    }

    /// Applies `value` to every element of `range`.
    ///
    /// A reversed range (`start > end`) is swapped rather than rejected.
    pub fn update(&mut self, range: Range<usize>, value: T) -> Result<()> {
        let Range { start, end } = range;
        let (start, end) = if start > end { (end, start) } else { (start, end) };
        let (range_start, range_end) = self.closed(start, end)?;
        self.update_range(0, self.len - 1, range_start, range_end, &value, 0);
        Ok(())
    }

    /// Aggregate of every element of `range`.
    pub fn query(&mut self, range: Range<usize>) -> Result<T> {
        let Range { start, end } = range;
        let (range_start, range_end) = self.closed(start, end)?;
        self.query_range(0, self.len - 1, range_start, range_end, 0)
            .or_else(|| self.combiner.identity())
            .ok_or(SegmentTreeError::Inconsistent { start, end })
    }

    /// Current value of element `index`.
    pub fn get(&mut self, index: usize) -> Result<T> {
        self.query(index..index.saturating_add(1))
    }

    /// Current value of every element, in order.
    pub fn to_vec(&mut self) -> Result<Vec<T>> {
        let mut leaves = Vec::with_capacity(self.len);
        if self.len > 0 {
            self.collect_leaves(0, self.len - 1, 0, &mut leaves);
        }
        leaves
            .into_iter()
            .enumerate()
            .map(|(i, leaf)| {
                leaf.or_else(|| self.combiner.identity())
                    .ok_or(SegmentTreeError::Inconsistent { start: i, end: i + 1 })
            })
            .collect()
    }

    fn closed(&self, start: usize, end: usize) -> Result<(usize, usize)> {
        if start >= end || end > self.len {
            trace!(start, end, len = self.len, "rejected range");
            return Err(SegmentTreeError::OutOfRange {
                start,
                end,
                len: self.len,
            });
        }
        Ok((start, end - 1))
    }

    fn build(&mut self, values: &[T], seg_start: usize, seg_end: usize, pos: usize) {
        if seg_start == seg_end {
            self.tree[pos] = Some(values[seg_start].clone());
            return;
        }
        let mid = seg_start + (seg_end - seg_start) / 2;
        self.build(values, seg_start, mid, left(pos));
        self.build(values, mid + 1, seg_end, right(pos));
        self.pull(pos);
    }

    #[inline(always)]
    fn pull(&mut self, pos: usize) {
        self.tree[pos] = self
            .combiner
            .combine_absent(self.tree[left(pos)].as_ref(), self.tree[right(pos)].as_ref());
    }

    #[inline(always)]
    fn apply(&mut self, pos: usize, value: &T, len: usize) {
        let node = &mut self.tree[pos];
        *node = self.updater.update(node.as_ref(), value, len);
    }

    /// Stacks `value` onto the pending slot of `pos`.
    #[inline(always)]
    fn defer(&mut self, pos: usize, value: &T) {
        let slot = &mut self.lazy[pos];
        *slot = match slot.as_ref() {
            Some(pending) => self.updater.update(Some(pending), value, 1),
            None => Some(value.clone()),
        };
    }

    fn push_down(&mut self, pos: usize, seg_start: usize, seg_end: usize) {
        let Some(pending) = self.lazy[pos].take() else {
            return;
        };
        self.apply(pos, &pending, seg_end - seg_start + 1);
        if seg_start != seg_end {
            self.defer(left(pos), &pending);
            self.defer(right(pos), &pending);
        }
    }

    fn update_range(
        &mut self,
        seg_start: usize,
        seg_end: usize,
        range_start: usize,
        range_end: usize,
        value: &T,
        pos: usize,
    ) {
        self.push_down(pos, seg_start, seg_end);
        if seg_end < range_start || range_end < seg_start {
            return;
        }
        if range_start <= seg_start && seg_end <= range_end {
            self.apply(pos, value, seg_end - seg_start + 1);
            if seg_start != seg_end {
                self.defer(left(pos), value);
                self.defer(right(pos), value);
            }
            return;
        }
        let mid = seg_start + (seg_end - seg_start) / 2;
        self.update_range(seg_start, mid, range_start, range_end, value, left(pos));
        self.update_range(mid + 1, seg_end, range_start, range_end, value, right(pos));
        self.pull(pos);
    }

    fn query_range(
        &mut self,
        seg_start: usize,
        seg_end: usize,
        range_start: usize,
        range_end: usize,
        pos: usize,
    ) -> Option<T> {
        self.push_down(pos, seg_start, seg_end);
        if seg_end < range_start || range_end < seg_start {
            return None;
        }
        if range_start <= seg_start && seg_end <= range_end {
            return self.tree[pos].clone();
        }
        let mid = seg_start + (seg_end - seg_start) / 2;
        let l = self.query_range(seg_start, mid, range_start, range_end, left(pos));
        let r = self.query_range(mid + 1, seg_end, range_start, range_end, right(pos));
        self.combiner.combine_absent(l.as_ref(), r.as_ref())
    }

    fn collect_leaves(
        &mut self,
        seg_start: usize,
        seg_end: usize,
        pos: usize,
        out: &mut Vec<Option<T>>,
    ) {
        self.push_down(pos, seg_start, seg_end);
        if seg_start == seg_end {
            out.push(self.tree[pos].clone());
            return;
        }
        let mid = seg_start + (seg_end - seg_start) / 2;
        self.collect_leaves(seg_start, mid, left(pos), out);
        self.collect_leaves(mid + 1, seg_end, right(pos), out);
    }
}
