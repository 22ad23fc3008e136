// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The row-sink contract (spec §4.3) and a bounded, non-blocking implementation.
//!
//! The engine invokes its `on_complete_row` callback synchronously while
//! holding its single lock (spec §5). A [`RowSink`] implementation therefore
//! must return quickly and must not block on a slow consumer — the
//! recommended pattern, and the one [`MailboxSink`] implements, is to hand
//! the row to a bounded queue and let a separate thread drain it.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};

use framesync_core::GetResult;
use framesync_error::DropPolicy;
use parking_lot::Mutex;

/// A single completed row: one [`GetResult`] per stream, in stream-index order.
pub type Row<T> = Vec<GetResult<T>>;

/// The downstream contract a completed row is delivered through.
///
/// Implementations run under the engine's lock (see module docs) and must
/// not block or panic.
pub trait RowSink<T>: Send + Sync {
    fn accept(&self, row: Row<T>);
}

/// Wrap a plain closure as a [`RowSink`], for callers that would rather pass
/// `Fn(Row<T>)` directly to [`crate::AlignmentEngine::new`].
impl<T, F> RowSink<T> for F
where
    F: Fn(Row<T>) + Send + Sync,
{
    fn accept(&self, row: Row<T>) {
        self(row);
    }
}

/// A bounded, non-blocking mailbox sink with a configurable overflow policy.
///
/// This is the "recommended sink" of spec §4.3/§9: a fixed-capacity queue
/// that a separate consumer thread drains with [`MailboxSink::try_recv`].
/// When full, it drops under the configured [`DropPolicy`] rather than
/// blocking the producer (and therefore the engine's lock).
pub struct MailboxSink<T> {
    capacity: usize,
    policy: DropPolicy,
    queue: Mutex<VecDeque<Row<T>>>,
    dropped: AtomicU64,
}

impl<T> MailboxSink<T> {
    #[must_use]
    pub fn new(capacity: usize, policy: DropPolicy) -> Self {
        assert!(capacity > 0, "MailboxSink capacity must be positive");
        Self {
            capacity,
            policy,
            queue: Mutex::new(VecDeque::with_capacity(capacity)),
            dropped: AtomicU64::new(0),
        }
    }

    /// Pop the oldest undelivered row, if any.
    pub fn try_recv(&self) -> Option<Row<T>> {
        self.queue.lock().pop_front()
    }

    /// Number of rows currently queued.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total number of rows dropped since construction.
    #[must_use]
    pub fn dropped(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }
}

impl<T: Send> RowSink<T> for MailboxSink<T> {
    fn accept(&self, row: Row<T>) {
        let mut queue = self.queue.lock();
        if queue.len() >= self.capacity {
            self.dropped.fetch_add(1, Ordering::Relaxed);
            match self.policy {
                DropPolicy::DropNewest => return,
                DropPolicy::DropOldest => {
                    queue.pop_front();
                }
            }
        }
        queue.push_back(row);
    }
}
