// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions)]
//! Multi-stream frame and timestamp alignment for camera/depth pipelines.
//!
//! This crate re-exports the public surface of the workspace: the bounded
//! ordered buffer ([`SortedBuffer`]), the alignment engine
//! ([`AlignmentEngine`]) and its configuration and sink types, and the
//! shared error type. Most callers only need this crate; `framesync-core`
//! and `framesync-engine` exist separately so each can be depended on, and
//! versioned, in isolation.
//!
//! ```
//! use std::sync::Arc;
//! use framesync::{AlignmentEngine, EngineConfig, Entry};
//!
//! let config = EngineConfig::new(2, 30, 0, true);
//! let engine = AlignmentEngine::new(config, Arc::new(|_row| {}));
//! engine.insert(0, Entry::new("left", 100));
//! engine.insert(1, Entry::new("right", 100));
//! assert_eq!(engine.state().completed_rows, 1);
//! ```

pub use framesync_core::{Entry, GetResult, RemoveResult, SortedBuffer};
pub use framesync_engine::{AlignmentEngine, EngineConfig, EngineSnapshot, MailboxSink, Row, RowSink};
pub use framesync_error::{DropPolicy, FrameSyncError, Result, ResultExt};
