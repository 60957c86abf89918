//! Graphviz DOT emission
//!
//! One graph per subsystem label. Edges are filtered to the subsystem,
//! deduplicated by their rendered line, and written in map order.

use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::GraphConfig;
use crate::deps::DependencyMap;
use crate::error::{Error, Result};
use crate::naming::NAMESPACE_SEP;

/// Extension of emitted graph files.
pub const GRAPH_EXTENSION: &str = "dot";

const GRAPH_HEADER: &str = "digraph {\n  node [shape=component];\n";
const GRAPH_FOOTER: &str = "}\n";

/// Entry-point modules are kept even when their targets are single-segment.
const ENTRY_POINT_HINT: &str = "main";

/// Outcome of writing one subsystem graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitSummary {
    pub label: String,
    pub path: PathBuf,
    /// Distinct edge lines written
    pub edges: usize,
}

/// Whether an edge belongs in the graph for `label`.
///
/// Self-loops are dropped. Targets without a namespace separator are noise
/// unless either end mentions an entry point. The label match is a plain
/// substring test on the source module.
pub fn is_graph_edge(source: &str, target: &str, label: &str) -> bool {
    if source == target {
        return false;
    }
    let looks_like_module = target.contains(NAMESPACE_SEP)
        || source.contains(ENTRY_POINT_HINT)
        || target.contains(ENTRY_POINT_HINT);
    looks_like_module && source.contains(label)
}

/// Format one edge statement, including indentation and newline.
pub fn edge_line(source: &str, target: &str) -> String {
    format!("  \"{}\" -> \"{}\";\n", source, target)
}

/// Render the graph for `label` into `out`, returning the number of edges.
pub fn render_dot<W: Write>(deps: &DependencyMap, label: &str, out: &mut W) -> io::Result<usize> {
    out.write_all(GRAPH_HEADER.as_bytes())?;

    let mut seen = HashSet::new();
    for (source, target) in deps.edges() {
        if !is_graph_edge(source, target, label) {
            continue;
        }
        let line = edge_line(source, target);
        if seen.contains(&line) {
            continue;
        }
        out.write_all(line.as_bytes())?;
        seen.insert(line);
    }

    out.write_all(GRAPH_FOOTER.as_bytes())?;
    Ok(seen.len())
}

/// Path of the graph file for `label` inside `out_dir`.
pub fn graph_path(out_dir: &Path, label: &str) -> PathBuf {
    out_dir.join(format!("{}.{}", label, GRAPH_EXTENSION))
}

/// Write `<out_dir>/<label>.dot`, replacing any existing file.
pub fn emit_graph(deps: &DependencyMap, label: &str, out_dir: &Path) -> Result<EmitSummary> {
    let path = graph_path(out_dir, label);
    let file = File::create(&path).map_err(|e| Error::io(&path, e))?;
    let mut writer = BufWriter::new(file);

    let edges = render_dot(deps, label, &mut writer)
        .and_then(|edges| writer.flush().map(|_| edges))
        .map_err(|e| Error::io(&path, e))?;

    info!(label, path = %path.display(), edges, "wrote graph");
    Ok(EmitSummary {
        label: label.to_string(),
        path,
        edges,
    })
}

/// Write one graph per configured label, in order.
///
/// The output directory is created if missing. The first failure stops the
/// run; graphs already written stay on disk.
pub fn emit_graphs(deps: &DependencyMap, config: &GraphConfig) -> Result<Vec<EmitSummary>> {
    fs::create_dir_all(&config.out_dir).map_err(|e| Error::io(&config.out_dir, e))?;
    debug!(out_dir = %config.out_dir.display(), labels = ?config.labels, "emitting graphs");

    config
        .labels
        .iter()
        .map(|label| emit_graph(deps, label, &config.out_dir))
        .collect()
}
