// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The entry and lookup-result types shared by [`crate::SortedBuffer`].

/// An opaque payload paired with the monotonic integer timestamp used to order it.
///
/// `index_value` is nanoseconds in the reference deployment, but `Entry` treats
/// it as an opaque `u64` used only for ordering and subtraction — equality of
/// `index_value` across different streams is never required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<T> {
    pub value: T,
    pub index_value: u64,
}

impl<T> Entry<T> {
    #[must_use]
    pub const fn new(value: T, index_value: u64) -> Self {
        Self { value, index_value }
    }
}

/// The result of a successful [`crate::SortedBuffer::get`] lookup.
///
/// `delta` is `|entry.index_value - query|` and `position` is the entry's
/// index inside the buffer *at the time of the lookup* — it may be stale by
/// the time the caller acts on it if another insert races in first, which is
/// why the alignment engine always performs `get` and the matching `remove`
/// while holding the same lock acquisition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetResult<T> {
    pub entry: Entry<T>,
    pub delta: u64,
    pub position: usize,
}

/// The outcome of a [`crate::SortedBuffer::remove`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoveResult {
    /// Number of entries actually removed: 1 for a single-position removal,
    /// or `len - position` when `drop_older` pruned the tail too.
    pub count: usize,
}
