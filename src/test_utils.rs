//! Test utilities for building temporary source trees.
//!
//! This module is only compiled for tests, benchmarks, and the `test-utils`
//! feature.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::config::{GraphConfig, ScanConfig};

/// A temporary source tree for testing.
///
/// The directory is removed when dropped.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a text file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        self.add_bytes(path, content.as_bytes())
    }

    /// Write raw bytes, creating parent directories as needed.
    pub fn add_bytes(&self, path: &str, content: &[u8]) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Scan configuration rooted at this tree.
    pub fn scan_config(&self) -> ScanConfig {
        ScanConfig {
            root: self.path().to_path_buf(),
            ..Default::default()
        }
    }

    /// Graph configuration writing into `out` below this tree.
    pub fn graph_config(&self, out: &str, labels: &[&str]) -> GraphConfig {
        GraphConfig {
            out_dir: self.path().join(out),
            labels: labels.iter().map(|l| l.to_string()).collect(),
        }
    }

    /// Read a file below the tree as text.
    pub fn read(&self, path: &str) -> String {
        fs::read_to_string(self.dir.path().join(path)).expect("Failed to read file")
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}
