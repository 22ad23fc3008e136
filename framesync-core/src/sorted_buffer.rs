// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! A bounded, timestamp-ordered history with nearest-neighbor lookup.
//!
//! [`SortedBuffer`] holds at most `max_size` entries, newest first. It answers
//! "give me the entry closest to timestamp X within tolerance Δ" without
//! scanning the full history, and evicts its oldest entry on overflow. This
//! is the per-stream building block the alignment engine composes N of, one
//! per input stream.

use crate::entry::{Entry, GetResult, RemoveResult};

/// An ordered, bounded history of [`Entry`] values, sorted by `index_value`
/// in **descending** order (newest first).
///
/// # Invariants
///
/// - `len() <= max_size` always.
/// - For adjacent entries `a, b` with `a` preceding `b`, `a.index_value >= b.index_value`.
/// - [`SortedBuffer::get`] never mutates the buffer.
///
/// # Example
///
/// ```
/// use framesync_core::{Entry, SortedBuffer};
///
/// let mut buffer = SortedBuffer::new(3);
/// buffer.insert(Entry::new("frame-a", 10));
/// buffer.insert(Entry::new("frame-b", 20));
///
/// let hit = buffer.get(12, 5).unwrap();
/// assert_eq!(hit.entry.value, "frame-a");
/// assert_eq!(hit.delta, 2);
/// ```
#[derive(Debug, Clone)]
pub struct SortedBuffer<T> {
    max_size: usize,
    entries: Vec<Entry<T>>,
}

impl<T> SortedBuffer<T> {
    /// Create a new buffer with the given fixed capacity.
    ///
    /// # Panics
    ///
    /// Panics if `max_size` is zero. A zero-capacity buffer can hold nothing
    /// and admits no sensible insert, so this is treated as a programmer
    /// error rather than a runtime condition (spec §4.1 / §7).
    #[must_use]
    pub fn new(max_size: usize) -> Self {
        assert!(max_size > 0, "SortedBuffer max_size must be positive");
        Self {
            max_size,
            entries: Vec::with_capacity(max_size),
        }
    }

    /// Number of entries currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The fixed capacity this buffer was constructed with.
    #[must_use]
    pub const fn max_size(&self) -> usize {
        self.max_size
    }

    /// Read-only snapshot of the entries, newest first. Intended for
    /// introspection (e.g. the engine's `buffers()` accessor); callers must
    /// not assume this stays valid across a subsequent mutation.
    #[must_use]
    pub fn entries(&self) -> &[Entry<T>] {
        &self.entries
    }

    /// The insertion index that keeps the buffer sorted descending by
    /// `index_value`, with ties broken by inserting *before* existing
    /// entries of equal value (the tying entry is considered newer).
    ///
    /// Binary search on a descending slice is the textbook trick of
    /// inverting the comparison: `partition_point` looks for the first
    /// element for which the predicate is false, so a predicate of
    /// "is this entry newer than the query" does the rest.
    fn insertion_point(&self, index_value: u64) -> usize {
        self.entries.partition_point(|e| e.index_value > index_value)
    }

    /// Insert `entry`, preserving descending order, and evict the oldest
    /// entry if this insert pushed the buffer over capacity.
    ///
    /// Returns the position the entry was placed at (before any eviction).
    pub fn insert(&mut self, entry: Entry<T>) -> usize {
        let position = self.insertion_point(entry.index_value);
        self.entries.insert(position, entry);
        if self.entries.len() > self.max_size {
            // Tail of a descending buffer holds the smallest index_value.
            self.entries.pop();
        }
        position
    }

    /// Find the entry whose `index_value` is closest to `query`, within `delta`.
    ///
    /// Locates the insertion point for `query` and compares only the (up to
    /// three) entries immediately around it — the rest of the buffer cannot
    /// be closer, since it is sorted. Ties prefer the candidate at the lower
    /// position (the newer entry). Returns `None` if nothing is within
    /// tolerance.
    #[must_use]
    pub fn get(&self, query: u64, delta: u64) -> Option<GetResult<T>>
    where
        T: Clone,
    {
        let p = self.insertion_point(query);
        let mut best: Option<GetResult<T>> = None;

        let candidates = [p.checked_sub(1), Some(p), p.checked_add(1)];
        for candidate in candidates.into_iter().flatten() {
            let Some(item) = self.entries.get(candidate) else {
                continue;
            };
            let item_delta = item.index_value.abs_diff(query);
            let is_better = match &best {
                None => true,
                Some(current) => item_delta < current.delta,
            };
            if is_better {
                best = Some(GetResult {
                    entry: item.clone(),
                    delta: item_delta,
                    position: candidate,
                });
            }
        }

        best.filter(|result| result.delta <= delta)
    }

    /// Remove the entry at `position`. If `drop_older` is set, also remove
    /// every entry older than it (tail-side, since ordering is descending) —
    /// this is the pruning primitive the engine uses when
    /// `prune_lower_on_complete` is enabled.
    ///
    /// # Panics
    ///
    /// Panics if `position >= len()`. A caller always derives `position`
    /// from a [`GetResult`] obtained under the same lock acquisition, so an
    /// out-of-range position indicates a bug in the caller (spec §4.1 / §7),
    /// not a runtime condition.
    pub fn remove(&mut self, position: usize, drop_older: bool) -> RemoveResult {
        assert!(
            position < self.entries.len(),
            "SortedBuffer::remove position {position} out of range for len {}",
            self.entries.len()
        );
        if drop_older {
            let count = self.entries.len() - position;
            self.entries.truncate(position);
            RemoveResult { count }
        } else {
            self.entries.remove(position);
            RemoveResult { count: 1 }
        }
    }
}
