// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The six concrete alignment scenarios, each exercising a distinct corner
//! of the engine's behavior: perfect alignment, noisy alignment with
//! re-emission, insertion ordering, overflow, prune-lower pruning, and Δ
//! tolerance.

use std::sync::Arc;

use framesync_core::Entry;
use framesync_engine::{AlignmentEngine, EngineConfig};
use framesync_test_utils::RecordingSink;

fn engine_with(
    stream_count: usize,
    max_buffer_size: usize,
    max_index_value_delta: u64,
    prune_lower_on_complete: bool,
) -> (Arc<AlignmentEngine<&'static str>>, Arc<RecordingSink<&'static str>>) {
    let sink = Arc::new(RecordingSink::new());
    let config = EngineConfig::new(
        stream_count,
        max_buffer_size,
        max_index_value_delta,
        prune_lower_on_complete,
    );
    let engine = Arc::new(AlignmentEngine::new(config, sink.clone()));
    (engine, sink)
}

#[test]
fn scenario_a_perfect_alignment() {
    // Arrange
    let (engine, sink) = engine_with(3, 10, 0, false);

    // Act
    engine.insert(0, Entry::new("A", 0));
    engine.insert(1, Entry::new("B", 0));
    engine.insert(2, Entry::new("C", 0));

    // Assert
    let rows = sink.rows();
    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row[0].entry.value, "A");
    assert_eq!(row[1].entry.value, "B");
    assert_eq!(row[2].entry.value, "C");
    assert!(row.iter().all(|r| r.delta == 0));
    assert_eq!(row[0].position, 0);
    assert_eq!(row[1].position, 0);
    assert_eq!(row[2].position, 0);

    let state = engine.state();
    assert_eq!(state.completed_rows, 1);
    assert_eq!(state.skipped_total, 0);
}

#[test]
fn scenario_b_noisy_alignment_and_reemission() {
    // Arrange
    let (engine, sink) = engine_with(3, 10, 0, false);

    // Act
    engine.insert(0, Entry::new("A", 1));
    engine.insert(0, Entry::new("N1", 2));
    engine.insert(1, Entry::new("N2", 2));
    engine.insert(1, Entry::new("B", 1));
    engine.insert(2, Entry::new("N3", 0));
    engine.insert(2, Entry::new("N4", 3));
    engine.insert(2, Entry::new("C", 1));

    // Assert: exactly one row at t=1 so far.
    assert_eq!(sink.rows().len(), 1);
    let first = &sink.rows()[0];
    assert_eq!(
        [first[0].entry.value, first[1].entry.value, first[2].entry.value],
        ["A", "B", "C"]
    );

    // Act: a second insert at t=1 on stream 1. Per the documented decision,
    // this repository accepts re-emission rather than suppressing it.
    engine.insert(1, Entry::new("X", 1));

    // Assert: the row re-emits because A/B/C are all still present and
    // prune_lower_on_complete is false.
    assert_eq!(sink.rows().len(), 2);
    let second = &sink.rows()[1];
    assert_eq!(
        [second[0].entry.value, second[1].entry.value, second[2].entry.value],
        ["A", "X", "C"]
    );
}

#[test]
fn scenario_c_ordering_correctness() {
    // Arrange
    let (engine, _sink) = engine_with(2, 10, 0, false);

    // Act
    let positions: Vec<usize> = [2_u64, 5, 1, 4, 3]
        .into_iter()
        .map(|t| engine.insert(0, Entry::new("x", t)))
        .collect();

    // Assert
    assert_eq!(positions, vec![0, 0, 2, 1, 2]);
    let buffers = engine.buffers();
    let timestamps: Vec<u64> = buffers[0].iter().map(|e| e.index_value).collect();
    assert_eq!(timestamps, vec![5, 4, 3, 2, 1]);
}

#[test]
fn scenario_d_overflow() {
    // Arrange
    let (engine, sink) = engine_with(2, 5, 0, true);

    // Act
    for t in 0..15_u64 {
        engine.insert(0, Entry::new("x", t));
    }
    for t in 0..11_u64 {
        engine.insert(1, Entry::new("y", t));
    }

    // Assert
    let state = engine.state();
    assert_eq!(state.completed_rows, 1);
    let row = &sink.rows()[0];
    assert_eq!(row[0].entry.index_value, 10);
    assert_eq!(row[1].entry.index_value, 10);
}

#[test]
fn scenario_e_prune_lower_on_complete() {
    // Arrange
    let (engine, sink) = engine_with(3, 10, 0, true);

    // Act
    engine.insert(0, Entry::new("v", 2));
    engine.insert(0, Entry::new("v", 0));
    engine.insert(1, Entry::new("v", 1));
    engine.insert(1, Entry::new("v", 3));
    engine.insert(1, Entry::new("v", 2));
    engine.insert(2, Entry::new("v", 0));
    engine.insert(2, Entry::new("v", 1));
    engine.insert(2, Entry::new("v", 2));

    // Assert
    assert_eq!(sink.rows().len(), 1);
    let row = &sink.rows()[0];
    assert!(row.iter().all(|r| r.entry.index_value == 2));

    let sizes = engine.buffer_sizes();
    assert_eq!(sizes, vec![0, 1, 0]);

    let remaining = engine.buffers();
    assert_eq!(remaining[1][0].index_value, 3);

    let state = engine.state();
    assert_eq!(state.completed_rows, 1);
    assert_eq!(state.skipped_total, 4);
    assert_eq!(state.skipped_per_stream, vec![1, 1, 2]);
}

#[test]
fn scenario_f_delta_tolerance() {
    // Arrange
    let (engine, sink) = engine_with(3, 10, 5, true);

    // Act: noise that must never align within Δ = 5 of the eventual anchor.
    engine.insert(0, Entry::new("noise", 10));
    engine.insert(1, Entry::new("noise", 30));
    engine.insert(2, Entry::new("noise", 44));
    engine.insert(0, Entry::new("noise", 18));
    engine.insert(1, Entry::new("noise", 204));

    engine.insert(0, Entry::new("A", 100));
    engine.insert(1, Entry::new("B", 104));
    engine.insert(2, Entry::new("C", 102));

    // Assert
    assert_eq!(sink.rows().len(), 1);
    let row = &sink.rows()[0];
    assert_eq!(row[0].entry.value, "A");
    assert_eq!(row[0].delta, 2);
    assert_eq!(row[1].entry.value, "B");
    assert_eq!(row[1].delta, 2);
    assert_eq!(row[2].entry.value, "C");
    assert_eq!(row[2].delta, 0);

    let remaining = engine.buffers();
    assert!(remaining[1].iter().any(|e| e.index_value == 204));

    let state = engine.state();
    assert_eq!(state.skipped_total, 4);
}
