#![allow(clippy::multiple_crate_versions)]
//! Error types for the frame-alignment engine
//!
//! The alignment core itself treats most of its failure modes as *not errors*:
//! buffer overflow is bounded eviction by design, and a missed alignment is
//! simply "try again on the next insert". This crate exists for the small set
//! of conditions that genuinely need a typed, propagatable error across a
//! process boundary (CLI wiring, adapters, telemetry I/O) — as opposed to the
//! two invariant violations that stay `panic!`s because they indicate a bug
//! in the caller, not a runtime condition (an out-of-range buffer `position`
//! and a zero-capacity buffer at construction time).
//!
//! # Examples
//!
//! ```
//! use framesync_error::{FrameSyncError, Result};
//!
//! fn process_row() -> Result<()> {
//!     Err(FrameSyncError::InvalidState {
//!         message: "engine not yet wired to a sink".to_string(),
//!     })
//! }
//! ```

/// Root error type for all frame-alignment operations that can fail outside
/// the engine's own invariant-protected hot path.
///
/// This enum encompasses the failure conditions that arise in the ambient
/// stack around the alignment core: producer wiring, sink delivery,
/// telemetry I/O, and CLI/config validation.
#[derive(Debug, thiserror::Error)]
pub enum FrameSyncError {
    /// A stream index passed across a process or adapter boundary was out of range.
    ///
    /// Inside the engine itself this is a fatal, `panic!`-worthy programmer
    /// error (see spec §7). At adapter boundaries — where the index may have
    /// come from deserialized configuration rather than a compile-time
    /// constant — it is instead reported so the caller can log and refuse
    /// the request.
    #[error("stream index {index} out of range: engine has {stream_count} streams")]
    InvalidStreamIndex { index: usize, stream_count: usize },

    /// Error acquiring a lock on shared state.
    ///
    /// This typically indicates contention or a poisoned mutex. The context
    /// provides details about which lock failed.
    #[error("failed to acquire lock: {context}")]
    LockError { context: String },

    /// The row sink's mailbox was full and the configured drop policy discarded a row.
    ///
    /// Not fatal — this is the expected outcome of a slow consumer under the
    /// `drop-newest`/`drop-oldest` policy described in spec §4.3 — but worth
    /// surfacing so operators can see it in logs or metrics.
    #[error("row sink mailbox full, dropped under {policy:?} policy")]
    MailboxFull { policy: DropPolicy },

    /// Telemetry reporting failed (e.g. the CSV writer could not write to disk).
    #[error("telemetry reporting failed: {context}")]
    TelemetryError { context: String },

    /// Invalid state encountered.
    ///
    /// This indicates that an operation was attempted when the engine,
    /// producer, or sink was in an inappropriate state (e.g. constructing an
    /// engine with zero streams).
    #[error("invalid state: {message}")]
    InvalidState { message: String },

    /// Configuration supplied to the CLI or engine constructor was invalid.
    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Custom error from user code (a producer, sink, or reporter implementation).
    #[error("user error: {0}")]
    UserError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// The drop policy a bounded mailbox sink applies when it is full.
///
/// See spec §4.3 / §9: the engine is agnostic to this choice, it is made by
/// the deployment (the concrete [`RowSink`](../framesync_engine/trait.RowSink.html) implementation).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropPolicy {
    /// Preserve freshness: the incoming row is discarded, the mailbox keeps its oldest entries.
    DropNewest,
    /// Preserve continuity: the oldest entry is evicted to make room for the incoming row.
    DropOldest,
}

impl FrameSyncError {
    /// Create an invalid stream index error.
    #[must_use]
    pub const fn invalid_stream_index(index: usize, stream_count: usize) -> Self {
        Self::InvalidStreamIndex {
            index,
            stream_count,
        }
    }

    /// Create a lock error with the given context.
    pub fn lock_error(context: impl Into<String>) -> Self {
        Self::LockError {
            context: context.into(),
        }
    }

    /// Create a mailbox-full error for the given drop policy.
    #[must_use]
    pub const fn mailbox_full(policy: DropPolicy) -> Self {
        Self::MailboxFull { policy }
    }

    /// Create a telemetry error with the given context.
    pub fn telemetry_error(context: impl Into<String>) -> Self {
        Self::TelemetryError {
            context: context.into(),
        }
    }

    /// Create an invalid state error with the given message.
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState {
            message: message.into(),
        }
    }

    /// Create an invalid configuration error with the given message.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Wrap a user error (from a producer, sink, or reporter implementation).
    pub fn user_error(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::UserError(Box::new(error))
    }

    /// Check if this is a recoverable condition the caller can retry or ignore.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::LockError { .. } | Self::MailboxFull { .. } | Self::TelemetryError { .. }
        )
    }
}

/// Specialized Result type for frame-alignment operations.
pub type Result<T> = std::result::Result<T, FrameSyncError>;

/// Extension trait for adding context to [`Result`]s in a fluent style.
pub trait ResultExt<T> {
    /// Add context to an error.
    ///
    /// # Errors
    /// Returns `Err(FrameSyncError)` if the underlying result is `Err`.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<FrameSyncError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let context = context.into();
            match e.into() {
                FrameSyncError::UserError(inner) => FrameSyncError::InvalidState {
                    message: format!("{context}: {inner}"),
                },
                other => other,
            }
        })
    }
}
