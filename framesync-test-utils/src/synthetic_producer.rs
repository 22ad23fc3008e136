// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! A thread-per-stream harness that feeds synthetic frames into an engine,
//! for concurrency tests and benchmarks.

use std::sync::Arc;
use std::thread;

use framesync_core::Entry;
use framesync_engine::AlignmentEngine;
use rand::Rng;

use crate::fixtures::{frame_entry, Frame};

/// Spawn one thread per `entries[i]`, each inserting its stream's entries
/// into `engine` in order, then block until all threads finish.
///
/// This is the harness spec §8's concurrency scenarios drive: N producer
/// threads hammering a single [`AlignmentEngine`] with no external
/// synchronization beyond the engine's own lock.
pub fn drive_concurrently<T>(engine: &Arc<AlignmentEngine<T>>, entries: Vec<Vec<Entry<T>>>)
where
    T: Clone + Send + Sync + 'static,
{
    thread::scope(|scope| {
        for (stream_index, stream_entries) in entries.into_iter().enumerate() {
            let engine = Arc::clone(engine);
            scope.spawn(move || {
                for entry in stream_entries {
                    engine.insert(stream_index, entry);
                }
            });
        }
    });
}

/// Generate `count` frame entries for `stream_index` with jittered
/// timestamps: a base cadence of `interval_ns`, perturbed by up to
/// `jitter_ns` in either direction, as a stand-in for real camera/depth
/// sensors whose frames never arrive perfectly on-grid.
pub fn jittered_stream(
    stream_index: usize,
    start: u64,
    interval_ns: u64,
    jitter_ns: u64,
    count: u64,
) -> Vec<Entry<Frame>> {
    let mut rng = rand::rng();
    (0..count)
        .map(|i| {
            let base = start + i * interval_ns;
            let jitter = if jitter_ns == 0 {
                0
            } else {
                rng.random_range(0..=2 * jitter_ns)
            };
            let shifted = base + jitter.saturating_sub(jitter_ns);
            frame_entry(stream_index, i, shifted)
        })
        .collect()
}
