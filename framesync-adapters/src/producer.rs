// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The producer-facing contract (spec §4.4): the shape of "a thing that
//! repeatedly calls `insert`", plus a synthetic implementation that stands
//! in for a real codec thread in tests and the CLI demo.
//!
//! No real codec is implemented here. A video or depth decoder is an
//! external collaborator; this crate only describes and exercises the
//! shape of the contract it would fill.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use framesync_core::Entry;
use framesync_engine::AlignmentEngine;

/// A thing that repeatedly calls [`AlignmentEngine::insert`] for one stream.
///
/// Implementations own their source of entries (a codec thread, a replay
/// file, a synthetic generator) and are expected to run until `stop_signal`
/// (or their own exhaustion) tells them to finish.
pub trait Producer<T>: Send + 'static {
    /// Produce the next entry, or `None` once the source is exhausted.
    fn next_entry(&mut self) -> Option<Entry<T>>;
}

/// Spawn `producer` on its own OS thread, feeding `engine` at stream
/// `stream_index` until it returns `None` or `stop_signal` is set.
///
/// This is the reference scheduling model of spec §5: one independent OS
/// thread per producer, with no suspension point on the engine side.
pub fn spawn<T, P>(
    engine: Arc<AlignmentEngine<T>>,
    stream_index: usize,
    mut producer: P,
    stop_signal: Arc<AtomicBool>,
) -> JoinHandle<()>
where
    T: Clone + Send + Sync + 'static,
    P: Producer<T>,
{
    thread::spawn(move || {
        while !stop_signal.load(Ordering::Relaxed) {
            let Some(entry) = producer.next_entry() else {
                break;
            };
            engine.insert(stream_index, entry);
        }
    })
}

/// A producer that replays a fixed, precomputed sequence of entries, one
/// per call, optionally pacing itself with a fixed delay between them.
///
/// This is the synthetic producer of spec §4.4: it never touches a real
/// codec, only the timestamp sequence a test or demo precomputed.
pub struct SyntheticProducer<T> {
    remaining: std::vec::IntoIter<Entry<T>>,
    pace: Option<std::time::Duration>,
}

impl<T> SyntheticProducer<T> {
    #[must_use]
    pub fn new(entries: Vec<Entry<T>>) -> Self {
        Self {
            remaining: entries.into_iter(),
            pace: None,
        }
    }

    /// Sleep for `pace` before yielding each entry, to simulate a producer
    /// with a real cadence instead of replaying as fast as possible.
    #[must_use]
    pub fn paced(mut self, pace: std::time::Duration) -> Self {
        self.pace = Some(pace);
        self
    }
}

impl<T: Send + 'static> Producer<T> for SyntheticProducer<T> {
    fn next_entry(&mut self) -> Option<Entry<T>> {
        let next = self.remaining.next();
        if next.is_some() {
            if let Some(pace) = self.pace {
                thread::sleep(pace);
            }
        }
        next
    }
}
