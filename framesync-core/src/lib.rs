// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions)]
//! The bounded, timestamp-ordered buffer that backs the frame-alignment engine.
//!
//! This crate is deliberately small and has no async/threading concerns of
//! its own — it is a plain data structure. The [`crate::SortedBuffer`] is
//! composed N-per-stream by `framesync-engine`, which owns the locking.

mod entry;
mod sorted_buffer;

pub use entry::{Entry, GetResult, RemoveResult};
pub use sorted_buffer::SortedBuffer;
