// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! A smoke test exercising the crate purely through its public re-exports,
//! the way an external consumer of `framesync` (rather than its constituent
//! crates) would use it.

use std::sync::Arc;

use framesync::{AlignmentEngine, EngineConfig, Entry};
use framesync_test_utils::RecordingSink;

#[test]
fn public_api_round_trip() {
    // Arrange
    let sink = Arc::new(RecordingSink::new());
    let config = EngineConfig::new(2, 30, 0, true);
    let engine = AlignmentEngine::new(config, sink.clone());

    // Act
    engine.insert(0, Entry::new("left", 100));
    engine.insert(1, Entry::new("right", 100));

    // Assert
    assert_eq!(sink.rows().len(), 1);
    assert_eq!(engine.state().completed_rows, 1);
}
