//! Test fixtures for script-driven mock tests
//!
//! Script files live under `tests/fixtures/scripts/`.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

/// Directory holding the fixture scripts
pub fn scripts_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/scripts")
}

/// Path to a named fixture script
pub fn script_path(name: &str) -> PathBuf {
    scripts_dir().join(name)
}

/// Reply payload used by the structured-value fixture
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct Reply {
    pub id: u32,
    pub body: String,
}

/// Error type shared by the integration tests
#[derive(Debug, Clone, PartialEq)]
pub enum TestError {
    General,
    Scripted(String),
}

impl TestError {
    pub fn scripted(message: impl Into<String>) -> Self {
        TestError::Scripted(message.into())
    }
}
