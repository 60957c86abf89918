//! Configuration types for scanning and graph emission

use std::path::PathBuf;

/// Subsystems whose graphs are generated when none are requested.
pub const DEFAULT_LABELS: &[&str] = &["catalog", "patrons", "checkout", "hold"];

/// Source extension scanned when none is given.
pub const DEFAULT_EXTENSION: &str = "rs";

/// Configuration for the dependency extraction pass.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Directory whose tree is scanned; module names are relative to it
    pub root: PathBuf,
    /// Source file extension, without the leading dot
    pub extension: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

/// Configuration for graph emission.
#[derive(Debug, Clone)]
pub struct GraphConfig {
    /// Directory receiving the `<label>.dot` files
    pub out_dir: PathBuf,
    /// Subsystem labels, emitted in order
    pub labels: Vec<String>,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
            labels: DEFAULT_LABELS.iter().map(|l| l.to_string()).collect(),
        }
    }
}
