// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions)]
//! The multi-stream, single-lock alignment engine.
//!
//! `framesync-engine` composes N [`framesync_core::SortedBuffer`]s (one per
//! input stream) behind a single mutex and, on every insert, checks whether
//! the just-inserted timestamp admits a cross-stream row within a configured
//! tolerance. See [`AlignmentEngine`] for the full contract.

mod config;
mod engine;
mod row_sink;
mod stats;

pub use config::EngineConfig;
pub use engine::AlignmentEngine;
pub use row_sink::{MailboxSink, Row, RowSink};
pub use stats::EngineSnapshot;

pub use framesync_core::{Entry, GetResult, RemoveResult, SortedBuffer};
