// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! A [`RowSink`] that records every row it receives, for assertions in tests.

use framesync_engine::{Row, RowSink};
use parking_lot::Mutex;

/// Captures every completed row into an in-memory `Vec`, in arrival order.
///
/// Intended for tests: it never blocks and never drops, which is exactly
/// what a production sink must *not* do (see [`framesync_engine::MailboxSink`]
/// for the bounded, non-blocking sink meant for real use).
#[derive(Default)]
pub struct RecordingSink<T> {
    rows: Mutex<Vec<Row<T>>>,
}

impl<T> RecordingSink<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of every row recorded so far, in arrival order.
    #[must_use]
    pub fn rows(&self) -> Vec<Row<T>>
    where
        T: Clone,
    {
        self.rows.lock().clone()
    }

    /// Number of rows recorded so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Send> RowSink<T> for RecordingSink<T> {
    fn accept(&self, row: Row<T>) {
        self.rows.lock().push(row);
    }
}
