//! Min-priority worklist of pending candidate segments.
//!
//! Entries are ordered by their generation time `t`; ties are broken by
//! insertion order (FIFO), which keeps a full run deterministic when the
//! injected policies are deterministic.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::types::SegmentId;

/// One pending candidate: generation time, segment name, and the payload
/// handed to the local-constraint policy. Immutable once created; an entry
/// dies when it is popped and never re-enters the queue.
#[derive(Clone, Debug)]
pub struct QueueEntry<P> {
    pub t: u64,
    pub segment: SegmentId,
    pub params: P,
}

struct Slot<P> {
    entry: QueueEntry<P>,
    seq: u64,
}

impl<P> PartialEq for Slot<P> {
    fn eq(&self, other: &Self) -> bool {
        self.entry.t == other.entry.t && self.seq == other.seq
    }
}

impl<P> Eq for Slot<P> {}

impl<P> PartialOrd for Slot<P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<P> Ord for Slot<P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.entry
            .t
            .cmp(&other.entry.t)
            .then(self.seq.cmp(&other.seq))
    }
}

/// Min-priority queue over [`QueueEntry`], generic in the payload.
///
/// Duplicate `(t, segment, params)` tuples are allowed; no deduplication
/// happens on insert.
pub struct FrontierQueue<P> {
    heap: BinaryHeap<Reverse<Slot<P>>>,
    seq: u64,
}

impl<P> FrontierQueue<P> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }

    pub fn insert(&mut self, entry: QueueEntry<P>) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Reverse(Slot { entry, seq }));
    }

    /// Removes and returns the entry with the smallest `t` (oldest first
    /// among equal `t`), or `None` when the queue is empty.
    pub fn remove_min(&mut self) -> Option<QueueEntry<P>> {
        self.heap.pop().map(|Reverse(slot)| slot.entry)
    }

    pub fn peek_min(&self) -> Option<&QueueEntry<P>> {
        self.heap.peek().map(|Reverse(slot)| &slot.entry)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<P> Default for FrontierQueue<P> {
    fn default() -> Self {
        Self::new()
    }
}
