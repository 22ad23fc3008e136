// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! A synthetic demo that drives an [`AlignmentEngine`] with one jittered
//! producer thread per stream, periodically reporting its counters, until
//! interrupted.
//!
//! Run with `framesync-cli --stream-count 3 --duration-secs 5`.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use framesync_adapters::{spawn, CsvTelemetryReporter, SyntheticProducer, TelemetryReporter, TracingTelemetryReporter};
use framesync_core::Entry;
use framesync_engine::{AlignmentEngine, EngineConfig, MailboxSink};
use rand::Rng;

/// Synthetic multi-stream alignment demo.
#[derive(Parser, Debug)]
#[command(name = "framesync-cli")]
#[command(about = "Drive the frame-alignment engine with synthetic producers")]
#[command(version)]
struct Args {
    /// Number of synthetic producer streams.
    #[arg(long, default_value_t = 3)]
    stream_count: usize,

    /// Capacity per stream's sorted buffer.
    #[arg(long, default_value_t = 30)]
    max_buffer_size: usize,

    /// Cross-stream timestamp tolerance, in nanoseconds.
    #[arg(long, default_value_t = 10_000_000)]
    max_index_value_delta: u64,

    /// Discard every older entry in a buffer once a row completes.
    #[arg(long, default_value_t = true)]
    prune_lower_on_complete: bool,

    /// Nominal per-stream frame interval, in nanoseconds (30fps by default).
    #[arg(long, default_value_t = 33_333_333)]
    interval_ns: u64,

    /// Maximum per-stream jitter applied to the nominal interval, in nanoseconds.
    #[arg(long, default_value_t = 2_000_000)]
    jitter_ns: u64,

    /// How long to run the demo before shutting down.
    #[arg(long, default_value_t = 5)]
    duration_secs: u64,

    /// How often to report engine telemetry, in milliseconds.
    #[arg(long, default_value_t = 500)]
    report_interval_ms: u64,

    /// Optional path to also append telemetry rows to as CSV.
    #[arg(long)]
    csv_report_path: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let config = EngineConfig::new(
        args.stream_count,
        args.max_buffer_size,
        args.max_index_value_delta,
        args.prune_lower_on_complete,
    );
    let sink = Arc::new(MailboxSink::new(1024, framesync_error::DropPolicy::DropOldest));
    let engine = Arc::new(AlignmentEngine::new(config, sink.clone()));

    let stop = Arc::new(AtomicBool::new(false));
    let producer_handles: Vec<_> = (0..args.stream_count)
        .map(|stream_index| {
            let entries = synthetic_stream(stream_index, args.interval_ns, args.jitter_ns);
            let producer = SyntheticProducer::new(entries).paced(Duration::from_nanos(args.interval_ns));
            spawn(Arc::clone(&engine), stream_index, producer, Arc::clone(&stop))
        })
        .collect();

    let mut tracing_reporter = TracingTelemetryReporter;
    let mut csv_reporter = args
        .csv_report_path
        .as_ref()
        .map(CsvTelemetryReporter::create)
        .transpose()?;

    let deadline = std::time::Instant::now() + Duration::from_secs(args.duration_secs);
    let report_interval = Duration::from_millis(args.report_interval_ms);
    while std::time::Instant::now() < deadline {
        std::thread::sleep(report_interval);
        let snapshot = engine.state();
        let sizes = engine.buffer_sizes();
        tracing_reporter.report(&snapshot, &sizes)?;
        if let Some(reporter) = csv_reporter.as_mut() {
            reporter.report(&snapshot, &sizes)?;
        }
        while let Some(row) = sink.try_recv() {
            tracing::trace!(row_len = row.len(), "drained aligned row");
        }
    }

    stop.store(true, Ordering::Relaxed);
    for handle in producer_handles {
        handle.join().expect("producer thread panicked");
    }

    tracing::info!(dropped = sink.dropped(), "demo finished");
    Ok(())
}

/// A never-ending synthetic camera/depth stream, approximated here by a
/// large precomputed run so [`SyntheticProducer`] can replay it on its own
/// thread without the CLI needing an unbounded generator.
fn synthetic_stream(stream_index: usize, interval_ns: u64, jitter_ns: u64) -> Vec<Entry<u64>> {
    let mut rng = rand::rng();
    let mut t = 0_u64;
    (0..1_000_000_u64)
        .map(|sequence| {
            let jitter = if jitter_ns == 0 {
                0
            } else {
                rng.random_range(0..=jitter_ns)
            };
            t += interval_ns;
            Entry::new(sequence, t + jitter)
        })
        .map(|entry| {
            let _ = stream_index;
            entry
        })
        .collect()
}
