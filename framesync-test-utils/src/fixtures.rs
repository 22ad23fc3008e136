// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! A small, opaque payload type and builders for feeding synthetic frames
//! into an [`framesync_engine::AlignmentEngine`] in tests and benchmarks.

use framesync_core::Entry;

/// A stand-in for a camera frame: nothing but a stream tag and a sequence
/// number, so tests can assert on identity without caring about pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub stream_index: usize,
    pub sequence: u64,
}

impl Frame {
    #[must_use]
    pub const fn new(stream_index: usize, sequence: u64) -> Self {
        Self {
            stream_index,
            sequence,
        }
    }
}

/// Build an [`Entry<Frame>`] tagged with `stream_index`, sequence `sequence`,
/// and timestamp `index_value`.
#[must_use]
pub fn frame_entry(stream_index: usize, sequence: u64, index_value: u64) -> Entry<Frame> {
    Entry::new(Frame::new(stream_index, sequence), index_value)
}

/// Produce `count` frame entries for one stream at a fixed interval starting
/// at `start`, e.g. a steady 30fps camera with `interval_ns = 33_333_333`.
#[must_use]
pub fn evenly_spaced(stream_index: usize, start: u64, interval_ns: u64, count: u64) -> Vec<Entry<Frame>> {
    (0..count)
        .map(|i| frame_entry(stream_index, i, start + i * interval_ns))
        .collect()
}
