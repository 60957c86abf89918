//! modgraph - per-subsystem module dependency graphs from `use crate::` imports

pub mod config;
pub mod deps;
pub mod error;
pub mod extractors;
pub mod naming;
pub mod output;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::{DEFAULT_LABELS, GraphConfig, ScanConfig};
pub use deps::DependencyMap;
pub use error::{Error, Result};
pub use extractors::extract_dependencies;
pub use output::{EmitSummary, emit_graph, emit_graphs, print_json, print_report, render_dot};
