// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use framesync_adapters::{CsvTelemetryReporter, TelemetryReporter, TracingTelemetryReporter};
use framesync_engine::EngineSnapshot;

fn sample_snapshot() -> EngineSnapshot {
    EngineSnapshot {
        completed_rows: 3,
        skipped_total: 5,
        skipped_per_stream: vec![2, 3],
    }
}

#[test]
fn tracing_reporter_never_errors() {
    // Arrange
    let mut reporter = TracingTelemetryReporter;

    // Act / Assert
    assert!(reporter.report(&sample_snapshot(), &[4, 2]).is_ok());
}

#[test]
fn csv_reporter_writes_header_and_rows() {
    // Arrange
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("telemetry.csv");
    let mut reporter = CsvTelemetryReporter::create(&path).expect("create reporter");

    // Act
    reporter.report(&sample_snapshot(), &[4, 2]).expect("report");
    reporter.report(&sample_snapshot(), &[5, 1]).expect("report");

    // Assert
    let contents = std::fs::read_to_string(&path).expect("read csv");
    let mut lines = contents.lines();
    assert_eq!(
        lines.next().unwrap(),
        "completed_rows,skipped_total,skipped_per_stream,buffer_sizes"
    );
    assert_eq!(lines.next().unwrap(), "3,5,2;3,4;2");
    assert_eq!(lines.next().unwrap(), "3,5,2;3,5;1");
}
