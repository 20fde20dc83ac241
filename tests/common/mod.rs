#![allow(dead_code)]

use std::sync::Once;
use std::path::PathBuf;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use guesstree::{Record, RecordReader};

static TEST_SETUP: Once = Once::new();

/// Install a stderr `tracing` subscriber once per test binary.
/// `RUST_LOG` overrides the default `warn` filter.
pub fn init_test_logging() {
    TEST_SETUP.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
            )
            .with(env_filter)
            .try_init();
    });
}

pub fn dataset_path() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests/dataset/movies.json");
    path
}

pub fn movies() -> Vec<Record> {
    RecordReader::default()
        .file(dataset_path())
        .read()
        .expect("tests/dataset/movies.json is readable")
}
