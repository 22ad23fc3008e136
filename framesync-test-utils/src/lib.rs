// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions)]
//! Test fixtures and harnesses shared by the frame-alignment workspace's
//! integration tests and benchmarks. Not published for external use.

mod fixtures;
mod recording_sink;
mod synthetic_producer;

pub use fixtures::{evenly_spaced, frame_entry, Frame};
pub use recording_sink::RecordingSink;
pub use synthetic_producer::{drive_concurrently, jittered_stream};
