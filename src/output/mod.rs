//! Output of the dependency map
//!
//! - `dot` - per-subsystem Graphviz graphs written to disk
//! - `json` - the raw dependency map as JSON
//! - `report` - the colored summary printed after a run

mod dot;
mod json;
mod report;

pub use dot::{
    EmitSummary, GRAPH_EXTENSION, edge_line, emit_graph, emit_graphs, graph_path, is_graph_edge,
    render_dot,
};
pub use json::{print_json, write_json};
pub use report::{print_report, write_report};
