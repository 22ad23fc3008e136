// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The multi-stream alignment engine (spec §4.2).

use std::sync::Arc;

use framesync_core::{Entry, GetResult, SortedBuffer};
use parking_lot::Mutex;

use crate::config::EngineConfig;
use crate::row_sink::{Row, RowSink};
use crate::stats::{EngineSnapshot, Stats};

struct Inner<T> {
    buffers: Vec<SortedBuffer<T>>,
    stats: Stats,
}

/// Owns one [`SortedBuffer`] per stream and, on every insert, checks whether
/// a row anchored at the just-inserted timestamp can be completed across all
/// of them (spec §4.2).
///
/// The engine is single-lock serialized: `insert`, `state`, and `buffers` all
/// acquire the same mutex, and the registered sink is invoked synchronously
/// while that lock is held (spec §5). There is no suspension point inside
/// the critical section, so the engine never needs an async runtime — a
/// plain `parking_lot::Mutex` is the whole synchronization story.
pub struct AlignmentEngine<T> {
    inner: Mutex<Inner<T>>,
    stream_count: usize,
    max_index_value_delta: u64,
    prune_lower_on_complete: bool,
    sink: Arc<dyn RowSink<T>>,
}

impl<T: Clone> AlignmentEngine<T> {
    /// Construct an engine with `config.stream_count` empty buffers, wired to
    /// the given [`RowSink`].
    #[must_use]
    pub fn new(config: EngineConfig, sink: Arc<dyn RowSink<T>>) -> Self {
        let buffers = (0..config.stream_count)
            .map(|_| SortedBuffer::new(config.max_buffer_size))
            .collect();
        Self {
            inner: Mutex::new(Inner {
                buffers,
                stats: Stats::new(config.stream_count),
            }),
            stream_count: config.stream_count,
            max_index_value_delta: config.max_index_value_delta,
            prune_lower_on_complete: config.prune_lower_on_complete,
            sink,
        }
    }

    /// Number of streams this engine was constructed with.
    #[must_use]
    pub const fn stream_count(&self) -> usize {
        self.stream_count
    }

    /// Insert `entry` into buffer `stream_index`, then attempt to complete a
    /// row anchored at `entry.index_value`. If a row completes, the sink is
    /// invoked synchronously before this call returns.
    ///
    /// Returns the position the entry was placed at inside its buffer.
    ///
    /// # Panics
    ///
    /// Panics if `stream_index >= stream_count()` — an invalid stream index
    /// is a programmer error (spec §4.2/§7), not a runtime condition.
    pub fn insert(&self, stream_index: usize, entry: Entry<T>) -> usize {
        assert!(
            stream_index < self.stream_count,
            "invalid stream index {stream_index}: engine has {} streams",
            self.stream_count
        );

        let mut inner = self.inner.lock();
        let anchor = entry.index_value;
        let position = inner.buffers[stream_index].insert(entry);

        if let Some(row) = Self::try_complete_row(&mut inner, anchor, self.max_index_value_delta) {
            let skipped: Vec<u64> = Self::prune_matched_row(
                &mut inner.buffers,
                &row,
                self.prune_lower_on_complete,
            );
            inner.stats.record_row_completed(&skipped);
            tracing::trace!(anchor, skipped = ?skipped, "alignment row completed");
            self.sink.accept(row);
        }

        position
    }

    /// Read-only snapshot of every buffer's current entries, newest first.
    /// Concurrent callers must treat the result as instantaneous: it is a
    /// consistent copy taken under the lock, but may be stale the instant
    /// this call returns (spec §4.2/§9).
    #[must_use]
    pub fn buffers(&self) -> Vec<Vec<Entry<T>>> {
        let inner = self.inner.lock();
        inner
            .buffers
            .iter()
            .map(|b| b.entries().to_vec())
            .collect()
    }

    /// Read-only snapshot of each buffer's current length, cheaper than
    /// [`AlignmentEngine::buffers`] when the entries themselves aren't needed.
    #[must_use]
    pub fn buffer_sizes(&self) -> Vec<usize> {
        let inner = self.inner.lock();
        inner.buffers.iter().map(SortedBuffer::len).collect()
    }

    /// A snapshot of the cumulative counters (spec §3/§8).
    #[must_use]
    pub fn state(&self) -> EngineSnapshot {
        self.inner.lock().stats.snapshot()
    }

    /// Check whether every buffer has an entry within `delta` of `anchor`.
    /// Returns `None` (no mutation) the moment any stream misses.
    fn try_complete_row(inner: &mut Inner<T>, anchor: u64, delta: u64) -> Option<Row<T>> {
        let mut row = Vec::with_capacity(inner.buffers.len());
        for buffer in &inner.buffers {
            row.push(buffer.get(anchor, delta)?);
        }
        Some(row)
    }

    /// Remove the matched entries (and, if `drop_older`, everything older)
    /// from each buffer, returning the per-stream skip counts.
    fn prune_matched_row(
        buffers: &mut [SortedBuffer<T>],
        row: &[GetResult<T>],
        drop_older: bool,
    ) -> Vec<u64> {
        buffers
            .iter_mut()
            .zip(row)
            .map(|(buffer, matched)| {
                let removed = buffer.remove(matched.position, drop_older);
                (removed.count - 1) as u64
            })
            .collect()
    }
}
