// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Engine construction parameters (spec §6).

/// Immutable configuration chosen once at engine construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Number of streams the engine owns one buffer per. Must be at least 1.
    pub stream_count: usize,
    /// Capacity per stream's [`framesync_core::SortedBuffer`]. Typically 30.
    pub max_buffer_size: usize,
    /// Cross-stream timestamp tolerance Δ, in the same units as `index_value`
    /// (nanoseconds in the reference deployment, e.g. `10_000_000` for 10ms).
    pub max_index_value_delta: u64,
    /// When true, a completed row discards every older entry in each buffer
    /// (the normal live-streaming policy); when false, only the matched
    /// entries are removed.
    pub prune_lower_on_complete: bool,
}

impl EngineConfig {
    /// Construct a config, enforcing `stream_count >= 1` and `max_buffer_size >= 1`.
    ///
    /// # Panics
    ///
    /// Panics if `stream_count` or `max_buffer_size` is zero — both are
    /// programmer errors per spec §6/§7, not runtime conditions.
    #[must_use]
    pub fn new(
        stream_count: usize,
        max_buffer_size: usize,
        max_index_value_delta: u64,
        prune_lower_on_complete: bool,
    ) -> Self {
        assert!(stream_count >= 1, "EngineConfig requires at least one stream");
        assert!(max_buffer_size >= 1, "EngineConfig requires a positive buffer capacity");
        Self {
            stream_count,
            max_buffer_size,
            max_index_value_delta,
            prune_lower_on_complete,
        }
    }
}
