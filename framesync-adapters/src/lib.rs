// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions)]
//! Producer and telemetry-reporter contracts around the alignment engine,
//! plus the synthetic/reference implementations used by tests and the CLI
//! demo. No real codec or metrics backend lives here — those remain
//! external collaborators.

mod producer;
mod telemetry;

pub use producer::{spawn, Producer, SyntheticProducer};
pub use telemetry::{CsvTelemetryReporter, TelemetryReporter, TracingTelemetryReporter};
