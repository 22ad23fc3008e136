// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The telemetry-reporter contract (spec §4.5): decouples "read the
//! engine's counters" from "do something with them".

use std::path::Path;

use framesync_engine::EngineSnapshot;
use framesync_error::{FrameSyncError, Result};

/// Receives a periodic snapshot of the engine's introspection counters.
///
/// Exact reporting cadence, transport, and on-disk format beyond what the
/// implementations below document are out of scope; this is the seam a
/// deployment plugs its own exporter into.
pub trait TelemetryReporter {
    /// Report `snapshot`, taken at the current moment, for stream `stream_index`.
    fn report(&mut self, snapshot: &EngineSnapshot, buffer_sizes: &[usize]) -> Result<()>;
}

/// Logs one structured `tracing` event per call: buffer sizes, completed
/// rows, and skip counts. This is the ambient logging the project always
/// carries, independent of whatever richer reporter a deployment layers on.
#[derive(Debug, Default)]
pub struct TracingTelemetryReporter;

impl TelemetryReporter for TracingTelemetryReporter {
    fn report(&mut self, snapshot: &EngineSnapshot, buffer_sizes: &[usize]) -> Result<()> {
        tracing::info!(
            completed_rows = snapshot.completed_rows,
            skipped_total = snapshot.skipped_total,
            skipped_per_stream = ?snapshot.skipped_per_stream,
            buffer_sizes = ?buffer_sizes,
            "engine telemetry"
        );
        Ok(())
    }
}

/// Appends one row per report to a CSV file with a fixed column layout:
/// `completed_rows,skipped_total,skipped_per_stream,buffer_sizes` (the
/// latter two as `;`-joined integers). Rotation, retention, and any
/// "transport to the browser" are explicitly out of scope (spec §4.5/§6);
/// this writer only guarantees a working local sink.
pub struct CsvTelemetryReporter {
    writer: csv::Writer<std::fs::File>,
}

impl CsvTelemetryReporter {
    /// Open (creating if needed) `path` and write the column header.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::create(path.as_ref()).map_err(|e| {
            FrameSyncError::telemetry_error(format!(
                "failed to create telemetry file {}: {e}",
                path.as_ref().display()
            ))
        })?;
        let mut writer = csv::Writer::from_writer(file);
        writer
            .write_record(["completed_rows", "skipped_total", "skipped_per_stream", "buffer_sizes"])
            .map_err(|e| FrameSyncError::telemetry_error(format!("failed to write csv header: {e}")))?;
        Ok(Self { writer })
    }
}

impl TelemetryReporter for CsvTelemetryReporter {
    fn report(&mut self, snapshot: &EngineSnapshot, buffer_sizes: &[usize]) -> Result<()> {
        let skipped_per_stream = join_with_semicolons(&snapshot.skipped_per_stream);
        let sizes = join_with_semicolons(buffer_sizes);
        self.writer
            .write_record([
                snapshot.completed_rows.to_string(),
                snapshot.skipped_total.to_string(),
                skipped_per_stream,
                sizes,
            ])
            .map_err(|e| FrameSyncError::telemetry_error(format!("failed to write csv row: {e}")))?;
        self.writer
            .flush()
            .map_err(|e| FrameSyncError::telemetry_error(format!("failed to flush csv writer: {e}")))
    }
}

fn join_with_semicolons<N: std::fmt::Display>(values: &[N]) -> String {
    values.iter().map(N::to_string).collect::<Vec<_>>().join(";")
}
