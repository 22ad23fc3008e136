// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Cumulative counters the engine maintains under its single lock (spec §3 / §8).

/// A point-in-time copy of the engine's counters.
///
/// `skipped_total == skipped_per_stream.iter().sum()` is a standing
/// invariant (spec §8, invariant 4); it is maintained by construction since
/// both are incremented together in [`crate::AlignmentEngine::insert`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EngineSnapshot {
    pub completed_rows: u64,
    pub skipped_total: u64,
    pub skipped_per_stream: Vec<u64>,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct Stats {
    completed_rows: u64,
    skipped_total: u64,
    skipped_per_stream: Vec<u64>,
}

impl Stats {
    pub(crate) fn new(stream_count: usize) -> Self {
        Self {
            completed_rows: 0,
            skipped_total: 0,
            skipped_per_stream: vec![0; stream_count],
        }
    }

    pub(crate) fn record_row_completed(&mut self, skipped_per_stream: &[u64]) {
        self.completed_rows += 1;
        for (total, skipped) in self.skipped_per_stream.iter_mut().zip(skipped_per_stream) {
            *total += skipped;
            self.skipped_total += skipped;
        }
    }

    pub(crate) fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            completed_rows: self.completed_rows,
            skipped_total: self.skipped_total,
            skipped_per_stream: self.skipped_per_stream.clone(),
        }
    }
}
